//! Combinators for type-erased callbacks, such as those coming from plugins or scripts.
//!
//! The typed combinators on [`Opt`] cannot receive a callback that returns something other than an `Opt`. Here the
//! callbacks return `Box<dyn Any>`, so the result is checked when the callback returns, failing with
//! [`ContractViolationError`] if it is not the expected `Opt`.

use std::any::{type_name, Any};

use crate::error::{contract_violation, ContractViolationError};
use crate::opt::Opt;

impl<T> Opt<T> {
  /// Like [flat_map](Self::flat_map), but `mapper` must return a boxed `Opt<U>`. `mapper` is only invoked on `Some`.
  pub fn flat_map_dyn<U: 'static>(
    self,
    mapper: impl FnOnce(T) -> Box<dyn Any>,
  ) -> Result<Opt<U>, ContractViolationError> {
    match self {
      Opt::Some(value) => downcast_opt(mapper(value), "flat_map"),
      Opt::None => Ok(Opt::None),
    }
  }
}

impl<T: 'static> Opt<T> {
  /// Like [or_else_with](Self::or_else_with), but `fallback` must return a boxed `Opt<T>`. `fallback` is only invoked
  /// on `None`.
  pub fn or_else_dyn(self, fallback: impl FnOnce() -> Box<dyn Any>) -> Result<Self, ContractViolationError> {
    match self {
      Opt::Some(_) => Ok(self),
      Opt::None => downcast_opt(fallback(), "or_else"),
    }
  }
}

fn downcast_opt<U: 'static>(result: Box<dyn Any>, operation: &'static str) -> Result<Opt<U>, ContractViolationError> {
  result.downcast::<Opt<U>>()
    .map(|opt| *opt)
    .map_err(|_| contract_violation(operation, type_name::<Opt<U>>()))
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn flat_map_dyn_returns_callback_result() {
    let result = Opt::some(2).flat_map_dyn::<i32>(|v| Box::new(Opt::some(v * 10)));
    assert_eq!(result, Ok(Opt::some(20)));

    let result = Opt::some(2).flat_map_dyn::<i32>(|_| Box::new(Opt::<i32>::none()));
    assert_eq!(result, Ok(Opt::none()));
  }

  #[test]
  fn flat_map_dyn_rejects_non_opt() {
    let error = Opt::some(2).flat_map_dyn::<i32>(|v| Box::new(v)).unwrap_err();
    assert_eq!(error.operation, "flat_map");
    assert!(error.expected.contains("Opt<i32>"));

    // Right shape, wrong payload type.
    let error = Opt::some(2).flat_map_dyn::<i32>(|v| Box::new(Opt::some(v as i64))).unwrap_err();
    assert_eq!(error.operation, "flat_map");
  }

  #[test]
  fn flat_map_dyn_skips_mapper_on_none() {
    let calls = Cell::new(0);
    let result = Opt::<i32>::none().flat_map_dyn::<i32>(|_| {
      calls.set(calls.get() + 1);
      Box::new(0)
    });
    assert_eq!(result, Ok(Opt::none()));
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn or_else_dyn_evaluates_only_on_none() {
    let calls = Cell::new(0);
    let fallback = || -> Box<dyn Any> {
      calls.set(calls.get() + 1);
      Box::new(Opt::some("fallback"))
    };
    assert_eq!(Opt::some("keep").or_else_dyn(fallback), Ok(Opt::some("keep")));
    assert_eq!(calls.get(), 0);
    assert_eq!(Opt::<&str>::none().or_else_dyn(fallback), Ok(Opt::some("fallback")));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn or_else_dyn_rejects_non_opt() {
    let error = Opt::<&str>::none().or_else_dyn(|| Box::new("fallback")).unwrap_err();
    assert_eq!(error.operation, "or_else");
    assert_eq!(error.to_string(), format!("`or_else` callback must return `{}`", type_name::<Opt<&str>>()));
  }
}
