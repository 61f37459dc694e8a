//! Serialize a list as a plain sequence

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::ForwardList;

impl<T: Serialize> Serialize for ForwardList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ForwardList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
