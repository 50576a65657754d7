//! `serde` support for [`RingDeque`].
//!
//! A deque serializes as a plain sequence in front-to-back order. Capacity and
//! cursor positions are layout details and are not part of the format.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::RingDeque;

impl<T: Serialize> Serialize for RingDeque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.ordered() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct RingDequeVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for RingDequeVisitor<T> {
    type Value = RingDeque<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut deque = RingDeque::new();
        while let Some(value) = seq.next_element()? {
            deque.push_back(value);
        }
        Ok(deque)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingDeque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RingDequeVisitor(PhantomData))
    }
}
