/// Items that are keyed by one of their own fields when stored in a map.
pub trait ItemId {
    type IdType;

    fn id(&self) -> Self::IdType;
}

/// Serde adapter storing a map keyed by [`ItemId`] as a plain list of its values.
///
/// Content files list sections, categories and options as sequences; the id is
/// taken from the item itself. A repeated id is a deserialization error rather
/// than a silent overwrite.
#[allow(clippy::module_inception)]
pub mod id_map {
    use super::ItemId;
    use indexmap::IndexMap;
    use serde::Serialize;
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::Serializer;
    use std::fmt::Display;
    use std::hash::Hash;

    pub fn serialize<'a, S, T: ItemId + Serialize + 'a, I: IntoIterator<Item = (&'a T::IdType, &'a T)>>(
        map: I,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.into_iter().map(|(_, v)| v))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<IndexMap<T::IdType, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: ItemId + Deserialize<'de>,
        T::IdType: Hash + Eq + Display,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        let mut map = IndexMap::with_capacity(elements.len());
        for element in elements {
            let id = element.id();
            if map.contains_key(&id) {
                return Err(D::Error::custom(format!("duplicate id `{id}`")));
            }
            map.insert(id, element);
        }
        Ok(map)
    }
}

/// Returns the first id that occurs more than once.
pub fn first_duplicate<'a, I, T>(ids: I) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    T: Eq + std::hash::Hash + ?Sized + 'a,
{
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
