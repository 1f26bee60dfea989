use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::opt::Opt;

// Same representation as `std::option::Option`: `None` is unit/null, `Some` is the value itself.

impl<T: Serialize> Serialize for Opt<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_ref().into_option().serialize(serializer)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Opt::from)
  }
}
