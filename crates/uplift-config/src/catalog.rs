use crate::quest::error::CatalogError;
use crate::quest::section::Section;
use crate::quest::{self, Quest};
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::sync::Arc;
use uplift_utils::loader::Loader;

/// Read-only registry of every quest, loaded once and never mutated.
///
/// Quests are kept in traversal order: descending weight, ties broken by id.
/// That order is what "the next quest" means for unlocking.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    quests: IndexMap<String, Arc<Quest>>,
}

impl ContentCatalog {
    pub fn new(mut quests: Vec<Quest>) -> Result<Self, CatalogError> {
        quests.sort_by(|a, b| (Reverse(a.weight), &a.id).cmp(&(Reverse(b.weight), &b.id)));
        let mut by_id = IndexMap::with_capacity(quests.len());
        for quest in quests {
            if by_id.contains_key(&quest.id) {
                return Err(CatalogError::DuplicateQuest(quest.id));
            }
            by_id.insert(quest.id.clone(), Arc::new(quest));
        }
        Ok(Self { quests: by_id })
    }

    #[must_use]
    pub fn get_quest(&self, quest_id: &str) -> Option<&Arc<Quest>> {
        self.quests.get(quest_id)
    }

    #[must_use]
    pub fn get_section(&self, quest_id: &str, section_id: &str) -> Option<&Arc<Section>> {
        self.get_quest(quest_id).and_then(|quest| quest.section(section_id))
    }

    /// Quests in traversal order.
    pub fn quests(&self) -> impl ExactSizeIterator<Item = &Arc<Quest>> {
        self.quests.values()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

pub async fn load(loader: &Loader) -> Result<ContentCatalog, CatalogError> {
    let catalog = ContentCatalog::new(quest::load(loader).await?)?;
    tracing::info!(quests = catalog.quests.len(), "content catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::question::Question;
    use test_log::test;
    use uplift_utils::loader::file_system::FileSystemLoader;

    fn quest(id: &str, weight: usize) -> Quest {
        let section = Section::new("only", "Only", None, vec![Question::ternary(0, "ok?")], vec![]).unwrap();
        Quest::new(id, id, vec![section]).unwrap().with_weight(weight)
    }

    #[test]
    fn test_traversal_order() {
        let catalog = ContentCatalog::new(vec![quest("c", 1), quest("b", 5), quest("a", 1)]).unwrap();
        let ids: Vec<_> = catalog.quests().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_quest() {
        let err = ContentCatalog::new(vec![quest("a", 1), quest("a", 2)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateQuest(id) if id == "a"));
    }

    #[test]
    fn test_unknown_ids_are_none() {
        let catalog = ContentCatalog::new(vec![quest("a", 1)]).unwrap();
        assert!(catalog.get_section("a", "only").is_some());
        assert!(catalog.get_section("a", "missing").is_none());
        assert!(catalog.get_section("missing", "only").is_none());
        assert!(catalog.get_quest("missing").is_none());
    }

    #[test(tokio::test)]
    async fn test_load_directory() {
        let loader = Loader::FileSystem(FileSystemLoader::new("test_configs".into()));
        let catalog = load(&loader).await.unwrap();
        let ids: Vec<_> = catalog.quests().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["emotional-awareness", "uplifting-quiz"]);
    }
}
