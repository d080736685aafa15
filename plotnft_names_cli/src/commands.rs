// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

mod plot_nfts;
mod resolve;

use clap::Subcommand;
use color_eyre::Result;
use plotnft_names::NameAllocator;
use std::path::PathBuf;

use crate::opt::Opt;

#[derive(Subcommand, Debug)]
pub enum SubCmd {
    /// Print the display name of each seed.
    ///
    /// All seeds share one registry, so repeated seeds get the same name and distinct seeds
    /// never share one.
    Resolve {
        /// The seeds to name, usually hex puzzle hashes.
        #[arg(required = true)]
        seeds: Vec<String>,
    },

    /// Name every plot NFT in a wallet RPC dump.
    PlotNfts {
        /// JSON file holding an array of plot NFT records, in snake_case or camelCase.
        file: PathBuf,
    },
}

pub fn handle_subcommand(opt: Opt) -> Result<()> {
    let config = opt.allocator_config()?;
    debug!("Allocating names with {config:?}");
    let mut allocator = NameAllocator::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match opt.command {
        SubCmd::Resolve { seeds } => resolve::resolve(&mut allocator, &seeds, &mut out),
        SubCmd::PlotNfts { file } => plot_nfts::name_plot_nfts(&mut allocator, &file, &mut out),
    }
}
