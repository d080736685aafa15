// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use plotnft_names::{plot_nft_name, NameAllocator, PlotNft};
use serde_json::Value;
use std::{io::Write, path::Path};

/// Writes `<launcher id>\t<name>\t<pool status>` per record in the file.
pub fn name_plot_nfts(
    allocator: &mut NameAllocator,
    file: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("Failed to read plot NFT records from {file:?}"))?;
    let records = match serde_json::from_str::<Value>(&contents)
        .wrap_err_with(|| format!("{file:?} is not valid JSON"))?
    {
        Value::Array(records) => records,
        _ => bail!("Expected {file:?} to hold a JSON array of plot NFT records"),
    };

    for (index, record) in records.into_iter().enumerate() {
        let nft = PlotNft::from_rpc_value(record)
            .wrap_err_with(|| format!("Plot NFT record #{index} in {file:?} is malformed"))?;
        let name = plot_nft_name(allocator, &nft)?;
        writeln!(out, "{}\t{name}\t{}", nft.launcher_id(), nft.status())?;
    }
    info!("Named {} plot NFTs from {file:?}", allocator.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const RECORDS: &str = r#"[
        {
            "poolState": {
                "p2SingletonPuzzleHash": "b1715c3b64c2dc24d3c6127bd45f6a7e46d12a2e10a32821fc7112bf00d4ce72",
                "poolConfig": { "launcherId": "0x01" }
            },
            "poolWalletStatus": {
                "launcherId": "0x01",
                "walletId": 2,
                "current": { "state": 1, "targetPuzzleHash": "aa" }
            },
            "walletBalance": {
                "walletId": 2,
                "confirmedWalletBalance": 1750000000000,
                "unconfirmedWalletBalance": 1750000000000,
                "spendableBalance": 1750000000000,
                "pendingChange": 0,
                "maxSendAmount": 1750000000000,
                "unspentCoinCount": 7,
                "pendingCoinRemovalCount": 0
            }
        },
        {
            "pool_state": {
                "p2_singleton_puzzle_hash": "c2715c3b64c2dc24d3c6127bd45f6a7e46d12a2e10a32821fc7112bf00d4ce72",
                "pool_config": { "launcher_id": "0x02" }
            },
            "pool_wallet_status": {
                "launcher_id": "0x02",
                "wallet_id": 3,
                "current": { "state": 3, "target_puzzle_hash": "bb" }
            }
        }
    ]"#;

    fn write_fixture(contents: &str) -> eyre::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn names_every_record() -> eyre::Result<()> {
        let file = write_fixture(RECORDS)?;
        let mut allocator = NameAllocator::default();
        let mut out = Vec::new();

        name_plot_nfts(&mut allocator, file.path(), &mut out)?;

        let output = String::from_utf8(out)?;
        let rows: Vec<Vec<&str>> = output.lines().map(|l| l.split('\t').collect()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "0x01");
        assert_eq!(rows[0][1], "Violet Alpaca");
        assert_eq!(rows[0][2], "Self pooling");
        assert_eq!(rows[1][0], "0x02");
        assert_eq!(rows[1][2], "Farming to pool");
        assert_ne!(rows[0][1], rows[1][1]);
        assert_eq!(allocator.len(), 2);
        Ok(())
    }

    #[test]
    fn rejects_a_non_array_document() -> eyre::Result<()> {
        let file = write_fixture(r#"{ "pool_state": {} }"#)?;
        let mut allocator = NameAllocator::default();

        let result = name_plot_nfts(&mut allocator, file.path(), &mut Vec::new());
        assert!(result.is_err());
        assert!(allocator.is_empty());
        Ok(())
    }
}
