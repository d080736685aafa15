// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use color_eyre::Result;
use plotnft_logging::{Level, LogBuilder, LogFormat, ReloadHandle, WorkerGuard};

use crate::opt::Opt;

pub fn init_logging(opt: &Opt) -> Result<(ReloadHandle, Option<WorkerGuard>)> {
    let logging_targets = vec![
        ("plotnft".to_string(), Level::INFO),
        ("plotnft_names".to_string(), Level::INFO),
        ("plotnft_logging".to_string(), Level::INFO),
    ];
    let mut log_builder = LogBuilder::new(logging_targets);
    log_builder.output_dest(opt.log_output_dest.clone());
    log_builder.format(opt.log_format.unwrap_or(LogFormat::Default));
    // stdout carries the command output
    log_builder.print_updates_to_stdout(false);
    Ok(log_builder.initialize()?)
}
