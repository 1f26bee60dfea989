use thiserror::Error;

/// A value was demanded from [`Opt::None`](crate::Opt::None) without any alternative.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("Tried to unwrap None")]
pub struct EmptyValueError;

/// A type-erased callback returned something other than the expected `Opt`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("`{operation}` callback must return `{expected}`")]
pub struct ContractViolationError {
  pub operation: &'static str,
  pub expected: &'static str,
}
impl ContractViolationError {
  #[inline]
  pub const fn new(operation: &'static str, expected: &'static str) -> Self {
    Self { operation, expected }
  }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Error)]
pub enum Error {
  #[error(transparent)]
  EmptyValue(#[from] EmptyValueError),
  #[error(transparent)]
  ContractViolation(#[from] ContractViolationError),
}


#[inline]
pub(crate) fn empty_value(_operation: &'static str) -> EmptyValueError {
  #[cfg(feature = "tracing")]
  tracing::debug!(operation = _operation, "demanded a value from None");
  EmptyValueError
}

#[inline]
pub(crate) fn contract_violation(operation: &'static str, expected: &'static str) -> ContractViolationError {
  let error = ContractViolationError::new(operation, expected);
  #[cfg(feature = "tracing")]
  tracing::warn!(%error, "callback violated its contract");
  error
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_value_message() {
    assert_eq!(EmptyValueError.to_string(), "Tried to unwrap None");
  }

  #[test]
  fn contract_violation_message() {
    let error = ContractViolationError::new("flat_map", "Opt<u32>");
    assert_eq!(error.to_string(), "`flat_map` callback must return `Opt<u32>`");
  }

  #[test]
  fn umbrella_error_is_transparent() {
    let error: Error = EmptyValueError.into();
    assert_eq!(error.to_string(), "Tried to unwrap None");
    assert!(matches!(error, Error::EmptyValue(_)));

    let error: Error = ContractViolationError::new("or_else", "Opt<String>").into();
    assert_eq!(error.to_string(), "`or_else` callback must return `Opt<String>`");
  }
}
