use std::ffi::OsStr;

use crate::opt::Opt;

/// Loads a `.env` file from the current directory or one of its parents into the process environment. Variables that
/// are already set are not overridden.
pub fn load_dotenv_into_env() {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
}

/// Gets environment variable `key`; `None` if it is unset or not valid unicode.
pub fn env_opt(key: impl AsRef<OsStr>) -> Opt<String> {
  std::env::var(key).ok().into()
}

/// Gets environment variable `key`, treating an empty or whitespace-only value as unset.
pub fn env_non_empty(key: impl AsRef<OsStr>) -> Opt<String> {
  env_opt(key)
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty())
}
