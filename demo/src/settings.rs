use std::any::Any;

use tracing::{debug, info};

use opt_core::{ContractViolationError, Opt};

pub const NAME_ENV: &str = "OPT_DEMO_NAME";
pub const GREETING_ENV: &str = "OPT_DEMO_GREETING";
pub const REPEAT_ENV: &str = "OPT_DEMO_REPEAT";
pub const LOG_FILE_ENV: &str = "OPT_DEMO_LOG_FILE";

pub const MAX_REPEAT: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
  #[error("No name given; pass it as the first argument or set `{0}`")]
  MissingName(&'static str),
  #[error(transparent)]
  Opt(#[from] opt_core::Error),
}
impl From<ContractViolationError> for SettingsError {
  fn from(error: ContractViolationError) -> Self { Self::Opt(error.into()) }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Settings {
  pub name: String,
  pub greeting: String,
  pub repeat: u32,
}

/// Raw setting values as found in arguments and environment, before any fallback is applied.
#[derive(Default, Clone, Debug)]
pub struct RawSettings {
  pub name_argument: Opt<String>,
  pub name: Opt<String>,
  pub greeting: Opt<String>,
  pub repeat: Opt<String>,
}
impl RawSettings {
  pub fn from_env(name_argument: Opt<String>) -> Self {
    use opt_core::app::env::env_non_empty;
    Self {
      name_argument,
      name: env_non_empty(NAME_ENV),
      greeting: env_non_empty(GREETING_ENV),
      repeat: env_non_empty(REPEAT_ENV),
    }
  }

  pub fn resolve(self, greeting_provider: impl FnOnce() -> Box<dyn Any>) -> Result<Settings, SettingsError> {
    let name = self.name_argument
      .tap(|name| debug!(%name, "using name from argument"))
      .or_else_with(|| self.name.tap(|name| debug!(%name, "using name from `{}`", NAME_ENV)))
      .get_or_throw_with(|| SettingsError::MissingName(NAME_ENV))?;

    let greeting = self.greeting
      .tap(|greeting| debug!(%greeting, "using greeting from `{}`", GREETING_ENV))
      .or_else_dyn(greeting_provider)?
      .get_or_else_with(|| "Hello".to_string());

    let repeat = self.repeat
      .flat_map(|repeat| parse_repeat(&repeat))
      .match_with(
        |repeat| repeat,
        || {
          debug!("no valid `{}`; repeating once", REPEAT_ENV);
          1
        },
      );

    let settings = Settings { name, greeting, repeat };
    info!(?settings, "resolved settings");
    Ok(settings)
  }
}

fn parse_repeat(repeat: &str) -> Opt<u32> {
  Opt::from(repeat.parse::<u32>().ok())
    .filter(|repeat| (1..=MAX_REPEAT).contains(repeat))
}

/// Greeting provider standing in for a plugin: hands back a type-erased `Opt<String>`.
pub fn plugin_greeting() -> Box<dyn Any> {
  Box::new(Opt::<String>::none())
}

impl Settings {
  pub fn lines(&self) -> impl Iterator<Item=String> + '_ {
    (0..self.repeat).map(|_| format!("{}, {}!", self.greeting, self.name))
  }
}
