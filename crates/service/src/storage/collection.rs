use std::{fmt, marker::PhantomData};

use models::Entity;
use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::errors::ServiceError;

/// Records of one kind keyed by their id, in insertion order.
///
/// Serializes as a JSON object `{ id: record, ... }` whose key order follows
/// insertion order, and reads the same order back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection<V> {
    items: Vec<V>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<V: Entity> Collection<V> {
    pub fn get(&self, id: &str) -> Option<&V> {
        self.items.iter().find(|v| v.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[V] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a record; fails if its id is already taken.
    pub fn insert(&mut self, value: V) -> Result<(), ServiceError> {
        if self.contains(value.id()) {
            return Err(ServiceError::already_exists(V::KIND, value.id()));
        }
        self.items.push(value);
        Ok(())
    }

    /// Remove a record by id, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Result<V, ServiceError> {
        let pos = self
            .items
            .iter()
            .position(|v| v.id() == id)
            .ok_or_else(|| ServiceError::not_found(V::KIND, id))?;
        Ok(self.items.remove(pos))
    }
}

impl<V: Entity + Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for item in &self.items {
            map.serialize_entry(item.id(), item)?;
        }
        map.end()
    }
}

impl<'de, V: Entity + Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor(PhantomData))
    }
}

struct CollectionVisitor<V>(PhantomData<V>);

impl<'de, V: Entity + Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
    type Value = Collection<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map of {} records keyed by id", V::KIND)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = Collection { items: Vec::with_capacity(access.size_hint().unwrap_or(0)) };
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            if key != value.id() {
                return Err(de::Error::custom(format!(
                    "{} key {key:?} does not match record id {:?}",
                    V::KIND,
                    value.id()
                )));
            }
            if out.contains(&key) {
                return Err(de::Error::custom(format!("duplicate {} id {key:?}", V::KIND)));
            }
            out.items.push(value);
        }
        Ok(out)
    }
}
