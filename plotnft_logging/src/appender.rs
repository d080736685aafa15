// Copyright 2024 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the SAFE Network Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the SAFE Network Software.

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};
use std::{env, path::Path};
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};

const FALLBACK_BINARY_NAME: &str = "plotnft";

/// Non-blocking writer over a size rotated log file named after the running binary.
///
/// `uncompressed_files` of the `max_files` kept are left uncompressed, the rest are gzipped.
pub(super) fn file_rotater(
    dir: &Path,
    max_bytes: usize,
    uncompressed_files: usize,
    max_files: usize,
) -> (NonBlocking, WorkerGuard) {
    let writer = FileRotate::new(
        dir.join(log_file_name()),
        AppendTimestamp::default(FileLimit::MaxFiles(max_files)),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::OnRotate(uncompressed_files),
        #[cfg(unix)]
        None,
    );

    // block rather than drop lines when the worker falls behind
    NonBlockingBuilder::default().lossy(false).finish(writer)
}

fn log_file_name() -> String {
    let binary_name = env::current_exe()
        .ok()
        .and_then(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| FALLBACK_BINARY_NAME.to_string());
    format!("{binary_name}.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_named_after_the_binary() {
        let name = log_file_name();
        assert!(name.ends_with(".log"));
        assert!(name.len() > ".log".len());
    }
}
