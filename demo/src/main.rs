use std::error::Error;
use std::path::PathBuf;

use tracing::debug;

use opt_core::app::env::{env_non_empty, load_dotenv_into_env};
use opt_core::app::storage::Storage;
use opt_core::app::tracing::AppTracing;
use opt_core::Opt;

use crate::settings::{LOG_FILE_ENV, plugin_greeting, RawSettings};

mod settings;

fn main() -> Result<(), Box<dyn Error>> {
  load_dotenv_into_env();
  let storage = Storage::new("demo");
  let log_file_path = env_non_empty(LOG_FILE_ENV)
    .map(PathBuf::from)
    .or_else_with(|| storage.local_data_file("log.txt"));
  let _tracing = AppTracing::init(log_file_path);

  let name_argument = Opt::from(std::env::args().nth(1));
  let settings = RawSettings::from_env(name_argument).resolve(plugin_greeting)?;
  for line in settings.lines() {
    println!("{}", line);
  }

  debug!("done");
  Ok(())
}
