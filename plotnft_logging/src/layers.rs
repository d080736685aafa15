// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use crate::{
    appender,
    error::{Error, Result},
    LogFormat, LogOutputDest, LOG_ENV,
};
use std::collections::BTreeMap;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_core::{Event, Level, Subscriber};
use tracing_subscriber::{
    filter::Targets,
    fmt::{
        self as tracing_fmt,
        format::Writer,
        time::{FormatTime, SystemTime},
        FmtContext, FormatEvent, FormatFields,
    },
    layer::Filter,
    registry::LookupSpan,
    reload::{self, Handle},
    Layer, Registry,
};

const MAX_LOG_SIZE: usize = 20 * 1024 * 1024;
const MAX_UNCOMPRESSED_LOG_FILES: usize = 10;
const MAX_LOG_FILES: usize = 1000;
// Everything of ours at TRACE
const ALL_LOGS_KEYWORD: &str = "all";
// Everything of ours at DEBUG
const VERBOSE_LOGS_KEYWORD: &str = "v";
const OUR_CRATES: &[&str] = &["plotnft", "plotnft_logging", "plotnft_names"];

/// Handle that implements functions to change the log level on the fly.
pub struct ReloadHandle(pub(crate) Handle<Box<dyn Filter<Registry> + Send + Sync>, Registry>);

impl ReloadHandle {
    /// Modify the log level to the provided CSV value
    /// Example input: `plotnft_names=DEBUG,all`
    ///
    /// Keywords take less precedence than a target given explicitly in the same CSV.
    pub fn modify_log_level(&self, logging_value: &str) -> Result<()> {
        let targets: Vec<(String, Level)> = get_logging_targets(logging_value)?;
        self.0.modify(|old_filter| {
            let new_filter: Box<dyn Filter<Registry> + Send + Sync> =
                Box::new(Targets::new().with_targets(targets));
            *old_filter = new_filter;
        })?;

        Ok(())
    }
}

/// `[<time> <level> <module>/<span>...] <message> <fields>`
#[derive(Default)]
pub(crate) struct LogFormatter;

impl<S, N> FormatEvent<S, N> for LogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();
        let module = event.metadata().module_path().unwrap_or("<unknown module>");
        let time = SystemTime;

        write!(writer, "[")?;
        time.format_time(&mut writer)?;
        write!(writer, " {level} {module}")?;
        ctx.visit_spans(|span| write!(writer, "/{}", span.name()))?;
        write!(writer, "] ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// The different Subscribers composed into a list of layers
#[derive(Default)]
pub(crate) struct TracingLayers {
    pub(crate) layers: Vec<Box<dyn Layer<Registry> + Send + Sync>>,
    pub(crate) log_appender_guard: Option<WorkerGuard>,
}

impl TracingLayers {
    pub(crate) fn fmt_layer(
        &mut self,
        default_logging_targets: Vec<(String, Level)>,
        output_dest: &LogOutputDest,
        format: LogFormat,
        max_log_files: Option<usize>,
        max_archived_log_files: Option<usize>,
        print_updates_to_stdout: bool,
    ) -> Result<ReloadHandle> {
        let layer = match output_dest {
            LogOutputDest::Stdout => match format {
                LogFormat::Json => tracing_fmt::layer().json().flatten_event(true).boxed(),
                LogFormat::Default => tracing_fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .event_format(LogFormatter)
                    .boxed(),
            },
            LogOutputDest::Stderr => match format {
                LogFormat::Json => tracing_fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr)
                    .boxed(),
                LogFormat::Default => tracing_fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .event_format(LogFormatter)
                    .with_writer(std::io::stderr)
                    .boxed(),
            },
            LogOutputDest::Test => tracing_fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .event_format(LogFormatter)
                .with_test_writer()
                .boxed(),
            LogOutputDest::Path(path) => {
                std::fs::create_dir_all(path)?;
                if print_updates_to_stdout {
                    println!("Logging to directory: {path:?}");
                }

                let max_log_files = max_log_files.unwrap_or(MAX_UNCOMPRESSED_LOG_FILES);
                // archived files come on top of the uncompressed ones
                let total_files = match max_archived_log_files {
                    Some(archived) => archived + max_log_files,
                    None => std::cmp::max(max_log_files, MAX_LOG_FILES),
                };
                let (file_rotation, worker_guard) =
                    appender::file_rotater(path, MAX_LOG_SIZE, max_log_files, total_files);
                self.log_appender_guard = Some(worker_guard);

                match format {
                    LogFormat::Json => tracing_fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_writer(file_rotation)
                        .boxed(),
                    LogFormat::Default => tracing_fmt::layer()
                        .with_ansi(false)
                        .with_writer(file_rotation)
                        .event_format(LogFormatter)
                        .boxed(),
                }
            }
        };

        let targets = match std::env::var(LOG_ENV) {
            Ok(log_val) => {
                if print_updates_to_stdout {
                    println!("Using {LOG_ENV}={log_val}");
                }
                get_logging_targets(&log_val)?
            }
            Err(_) => default_logging_targets,
        };

        let target_filters: Box<dyn Filter<Registry> + Send + Sync> =
            Box::new(Targets::new().with_targets(targets));

        let (filter, reload_handle) = reload::Layer::new(target_filters);

        let layer = layer.with_filter(filter);
        self.layers.push(Box::new(layer));

        Ok(ReloadHandle(reload_handle))
    }
}

/// Parses logging targets from a CSV such as `plotnft_names=DEBUG,all`.
///
/// A bare crate name means TRACE. The `all` and `v` keywords set every crate of ours to TRACE
/// and DEBUG respectively, unless that crate is listed explicitly.
pub(crate) fn get_logging_targets(logging_env_value: &str) -> Result<Vec<(String, Level)>> {
    let mut targets = BTreeMap::new();
    let mut keyword_level = None;

    for crate_log_level in logging_env_value.split(',').map(str::trim) {
        if crate_log_level.is_empty() {
            continue;
        }
        if crate_log_level == ALL_LOGS_KEYWORD {
            keyword_level = Some(Level::TRACE);
            continue;
        } else if crate_log_level == VERBOSE_LOGS_KEYWORD {
            if keyword_level.is_none() {
                keyword_level = Some(Level::DEBUG);
            }
            continue;
        }

        let mut split = crate_log_level.split('=');
        let crate_name = split.next().ok_or_else(|| {
            Error::LoggingConfiguration("Could not obtain crate name in logging string".to_string())
        })?;
        let log_level = split.next().unwrap_or("trace");
        targets.insert(crate_name.to_string(), get_log_level_from_str(log_level)?);
    }

    let mut to_be_overriden_targets: BTreeMap<String, Level> = match keyword_level {
        Some(level) => OUR_CRATES
            .iter()
            .map(|name| (name.to_string(), level))
            .collect(),
        None => BTreeMap::new(),
    };
    to_be_overriden_targets.extend(targets);
    Ok(to_be_overriden_targets.into_iter().collect())
}

fn get_log_level_from_str(log_level: &str) -> Result<Level> {
    match log_level.to_lowercase().as_str() {
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::LoggingConfiguration(format!(
            "Log level {log_level} is not supported"
        ))),
    }
}
