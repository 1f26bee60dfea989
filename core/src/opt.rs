use crate::error::{empty_value, EmptyValueError};

/// Discriminant of an [`Opt`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Tag {
  None,
  Some,
}

/// Explicit presence (`Some`) or absence (`None`) of a value.
///
/// An `Opt` is never mutated after construction: every combinator consumes `self` and returns a new value. Callbacks
/// are invoked at most once, synchronously, and only on the path that needs them.
#[must_use]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Opt<T> {
  None,
  Some(T),
}

impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self { Opt::None }
}

impl<T> Opt<T> {
  /// The empty value. Every `None` is interchangeable with every other.
  pub const NONE: Self = Opt::None;

  #[inline]
  pub const fn some(value: T) -> Self { Opt::Some(value) }
  #[inline]
  pub const fn none() -> Self { Opt::None }


  #[inline]
  pub const fn tag(&self) -> Tag {
    match self {
      Opt::Some(_) => Tag::Some,
      Opt::None => Tag::None,
    }
  }
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Opt::Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { matches!(self, Opt::None) }

  #[inline]
  pub const fn as_ref(&self) -> Opt<&T> {
    match self {
      Opt::Some(value) => Opt::Some(value),
      Opt::None => Opt::None,
    }
  }


  /// Returns the contained value, or [`EmptyValueError`] when there is none.
  ///
  /// Use [unwrap_or](Self::unwrap_or) or [unwrap_or_else](Self::unwrap_or_else) to supply a default instead.
  #[inline]
  pub fn unwrap(self) -> Result<T, EmptyValueError> {
    match self {
      Opt::Some(value) => Ok(value),
      Opt::None => Err(empty_value("unwrap")),
    }
  }
  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Opt::Some(value) => value,
      Opt::None => default,
    }
  }
  /// Returns the contained value, or the result of `default`. `default` is only invoked on `None`.
  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Opt::Some(value) => value,
      Opt::None => default(),
    }
  }


  #[inline]
  pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Opt<U> {
    match self {
      Opt::Some(value) => Opt::Some(mapper(value)),
      Opt::None => Opt::None,
    }
  }
  /// Returns the `Opt` produced by `mapper` as-is, without wrapping it again.
  #[inline]
  pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
    match self {
      Opt::Some(value) => mapper(value),
      Opt::None => Opt::None,
    }
  }
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Opt::Some(value) => if predicate(&value) { Opt::Some(value) } else { Opt::None },
      Opt::None => Opt::None,
    }
  }


  #[inline]
  pub fn or_else(self, fallback: Self) -> Self {
    match self {
      Opt::Some(_) => self,
      Opt::None => fallback,
    }
  }
  /// Returns `self` if it holds a value, otherwise the `Opt` produced by `fallback`. `fallback` is only invoked on
  /// `None`.
  #[inline]
  pub fn or_else_with(self, fallback: impl FnOnce() -> Self) -> Self {
    match self {
      Opt::Some(_) => self,
      Opt::None => fallback(),
    }
  }

  #[inline]
  pub fn get_or_else(self, default: T) -> T { self.unwrap_or(default) }
  #[inline]
  pub fn get_or_else_with(self, default: impl FnOnce() -> T) -> T { self.unwrap_or_else(default) }

  #[inline]
  pub fn get_or_throw(self) -> Result<T, EmptyValueError> {
    match self {
      Opt::Some(value) => Ok(value),
      Opt::None => Err(empty_value("get_or_throw")),
    }
  }
  /// Returns the contained value, or the error produced by `error_factory`, which is passed through untouched.
  #[inline]
  pub fn get_or_throw_with<E>(self, error_factory: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Opt::Some(value) => Ok(value),
      Opt::None => Err(error_factory()),
    }
  }


  /// Invokes exactly one of the handlers depending on the variant, returning its result.
  #[inline]
  pub fn match_with<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
    match self {
      Opt::Some(value) => on_some(value),
      Opt::None => on_none(),
    }
  }

  #[inline]
  pub fn tap(self, consumer: impl FnOnce(&T)) -> Self {
    if let Opt::Some(value) = &self {
      consumer(value);
    }
    self
  }


  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Opt::Some(value) => Some(value),
      Opt::None => None,
    }
  }
}

impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Opt::Some(value),
      None => Opt::None,
    }
  }
}
impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(opt: Opt<T>) -> Self { opt.into_option() }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn tag_follows_variant() {
    assert_eq!(Opt::some(1).tag(), Tag::Some);
    assert_eq!(Opt::<u8>::none().tag(), Tag::None);
    assert_eq!(Opt::<u8>::NONE, Opt::none());
    assert_eq!(Opt::<u8>::default(), Opt::NONE);
  }

  #[test]
  fn wrapped_absent_value_is_still_some() {
    let opt = Opt::some(Option::<u8>::None);
    assert!(opt.is_some());
    assert_eq!(opt.unwrap(), Ok(None));
  }

  #[test]
  fn filter_receives_borrowed_value() {
    let seen = Cell::new(0);
    let kept = Opt::some(String::from("abc")).filter(|s| {
      seen.set(seen.get() + 1);
      s.len() == 3
    });
    assert_eq!(kept, Opt::some(String::from("abc")));
    assert_eq!(seen.get(), 1);
  }

  #[test]
  fn as_ref_does_not_consume() {
    let opt = Opt::some(String::from("x"));
    assert_eq!(opt.as_ref().map(|s| s.len()), Opt::some(1));
    assert!(opt.is_some());
  }

  #[test]
  fn std_option_conversions() {
    assert_eq!(Opt::from(Some(3)), Opt::some(3));
    assert_eq!(Opt::<u8>::from(None), Opt::none());
    assert_eq!(Option::from(Opt::some(3)), Some(3));
    assert_eq!(Opt::<u8>::none().into_option(), None);
  }

  #[test]
  fn none_sorts_before_some() {
    assert!(Opt::none() < Opt::some(0));
  }
}
