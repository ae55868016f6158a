//! Deserialize [`Arg`] from self-describing formats such as JSON.
//!
//! Objects become mappings with their keys in JavaScript property order:
//! array-index keys first in ascending numeric order, then the rest in the
//! order they appear. A repeated key keeps its first position and last value.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::arg::Arg;

impl<'de> Deserialize<'de> for Arg {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ArgVisitor)
    }
}

struct ArgVisitor;

impl<'de> Visitor<'de> for ArgVisitor {
    type Value = Arg;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number, boolean, null, array or object")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Arg, E> {
        Ok(v.into())
    }

    fn visit_i64<E>(self, v: i64) -> Result<Arg, E> {
        Ok(v.into())
    }

    fn visit_u64<E>(self, v: u64) -> Result<Arg, E> {
        Ok(v.into())
    }

    fn visit_f64<E>(self, v: f64) -> Result<Arg, E> {
        Ok(v.into())
    }

    fn visit_str<E>(self, v: &str) -> Result<Arg, E> {
        Ok(v.into())
    }

    fn visit_string<E>(self, v: String) -> Result<Arg, E> {
        Ok(v.into())
    }

    fn visit_unit<E>(self) -> Result<Arg, E> {
        Ok(Arg::null())
    }

    fn visit_none<E>(self) -> Result<Arg, E> {
        Ok(Arg::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Arg, D::Error>
    where
        D: Deserializer<'de>,
    {
        Arg::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Arg, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Arg::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Arg, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut pairs: Vec<(String, Arg)> = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, Arg>()? {
            match pairs.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => pairs.push((key, value)),
            }
        }
        Ok(Arg::Mapping(property_order(pairs)))
    }
}

fn property_order(mut pairs: Vec<(String, Arg)>) -> Vec<(String, Arg)> {
    pairs.sort_by_key(|(key, _)| array_index(key).map_or((1, 0), |index| (0, index)));
    pairs
}

/// Canonical array index: decimal digits, no leading zero, below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|&index| index != u32::MAX)
}
