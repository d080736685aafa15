// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use color_eyre::Result;
use plotnft_names::NameAllocator;
use std::io::Write;

/// Writes `<seed>\t<name>` per seed, in input order.
pub fn resolve(
    allocator: &mut NameAllocator,
    seeds: &[String],
    out: &mut impl Write,
) -> Result<()> {
    for seed in seeds {
        let label = allocator.resolve(seed)?;
        writeln!(out, "{seed}\t{label}")?;
    }
    info!(
        "Resolved {} seeds to {} distinct names",
        seeds.len(),
        allocator.len()
    );
    Ok(())
}
