pub mod error;
pub mod opt;
pub mod dynamic;
#[cfg(any(feature = "app_env", feature = "app_tracing", feature = "app_storage"))]
pub mod app;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::{ContractViolationError, EmptyValueError, Error};
pub use opt::{Opt, Tag};
