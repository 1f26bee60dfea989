use std::fs::{create_dir_all, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::opt::Opt;

pub const CONSOLE_LOG_ENV: &str = "OPT_CONSOLE_LOG";
pub const FILE_LOG_ENV: &str = "OPT_FILE_LOG";

/// Global tracing subscriber logging to stderr and, when a log file could be created, to that file. Keep it alive
/// until shutdown; dropping it flushes the log file.
pub struct AppTracing {
  _file_guard: Opt<WorkerGuard>,
}
impl AppTracing {
  /// Installs the global subscriber. Console and file filters are read from [`CONSOLE_LOG_ENV`] and [`FILE_LOG_ENV`],
  /// defaulting to `error` when unset or invalid. A log file that cannot be created is reported and skipped.
  pub fn init(log_file_path: Opt<PathBuf>) -> Self {
    let mut file_error = Opt::none();
    let log_file = log_file_path.flat_map(|path| match create_log_file(&path) {
      Ok(file) => Opt::some(file),
      Err(error) => {
        file_error = Opt::some((path, error));
        Opt::none()
      }
    });
    let (file_writer, _file_guard) = log_file
      .map(tracing_appender::non_blocking)
      .match_with(|(writer, guard)| (Opt::some(writer), Opt::some(guard)), || (Opt::none(), Opt::none()));

    tracing_subscriber::registry()
      .with(tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter_from_env(CONSOLE_LOG_ENV)))
      .with(file_writer
        .map(|writer| tracing_subscriber::fmt::layer()
          .with_writer(writer)
          .with_ansi(false)
          .with_filter(filter_from_env(FILE_LOG_ENV)))
        .into_option())
      .init();

    if let Opt::Some((path, error)) = file_error {
      tracing::warn!(path = %path.display(), %error, "not logging to file; creating the log file failed");
    }

    Self { _file_guard }
  }
}

fn filter_from_env(env: &str) -> EnvFilter {
  EnvFilter::try_from_env(env).unwrap_or_default()
}

/// Creates (or truncates) the file at `path`, creating missing parent directories.
fn create_log_file(path: &Path) -> io::Result<File> {
  if let Some(parent) = path.parent() {
    create_dir_all(parent)?;
  }
  File::create(path)
}
