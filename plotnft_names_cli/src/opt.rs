// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use clap::Parser;
use color_eyre::Result;
use plotnft_logging::{LogFormat, LogOutputDest};
use plotnft_names::{AllocatorConfig, LabelStyle};

use crate::commands::SubCmd;

// Please do not remove the blank lines in these doc comments.
// They are used for inserting line breaks when the help menu is rendered in the UI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Opt {
    /// Specify the logging output destination.
    ///
    /// Valid values are "stdout", "stderr", "data-dir", or a custom path.
    ///
    /// `stderr` is the default value, so that stdout only carries the names.
    ///
    /// The data directory location is platform specific:
    ///  - Linux: $HOME/.local/share/plotnft/logs
    ///  - macOS: $HOME/Library/Application Support/plotnft/logs
    ///  - Windows: C:\Users\<username>\AppData\Roaming\plotnft\logs
    #[allow(rustdoc::invalid_html_tags)]
    #[clap(long, value_parser = LogOutputDest::parse_from_str, verbatim_doc_comment, default_value = "stderr")]
    pub log_output_dest: LogOutputDest,

    /// Specify the logging format.
    ///
    /// Valid values are "default" or "json".
    ///
    /// If the argument is not used, the default format will be applied.
    #[clap(long, value_parser = LogFormat::parse_from_str, verbatim_doc_comment)]
    pub log_format: Option<LogFormat>,

    /// Maximum number of candidate names tried per seed before giving up.
    ///
    /// Overrides PLOTNFT_NAMES_MAX_ATTEMPTS.
    #[clap(long, global = true, verbatim_doc_comment)]
    pub max_attempts: Option<u32>,

    /// Which word lists names are built from.
    ///
    /// Valid values are "color-animal", "adjective-animal" or "adjective-color".
    ///
    /// Overrides PLOTNFT_NAMES_STYLE.
    #[clap(long, global = true, value_parser = LabelStyle::parse_from_str, verbatim_doc_comment)]
    pub style: Option<LabelStyle>,

    /// Available sub commands.
    #[clap(subcommand)]
    pub command: SubCmd,
}

impl Opt {
    /// Env config with the command line flags applied on top.
    pub(crate) fn allocator_config(&self) -> Result<AllocatorConfig> {
        let mut config = AllocatorConfig::from_env()?;
        if let Some(max_attempts) = self.max_attempts {
            config = config.with_max_attempts(max_attempts);
        }
        if let Some(style) = self.style {
            config = config.with_style(style);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Opt::command().debug_assert();
    }

    #[test]
    fn flags_override_the_defaults() -> eyre::Result<()> {
        let opt = Opt::try_parse_from([
            "plotnft",
            "--max-attempts",
            "5",
            "--style",
            "adjective-color",
            "resolve",
            "abc",
        ])?;

        assert_eq!(opt.log_output_dest, LogOutputDest::Stderr);
        let config = opt.allocator_config()?;
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.style, LabelStyle::AdjectiveColor);
        Ok(())
    }

    #[test]
    fn zero_attempts_is_rejected() -> eyre::Result<()> {
        let opt = Opt::try_parse_from(["plotnft", "--max-attempts", "0", "resolve", "abc"])?;
        assert!(opt.allocator_config().is_err());
        Ok(())
    }
}
