use crate::quest::error::CatalogError;
use crate::quest::section::Section;
use crate::quest::v01::quest::QuestV01;
use futures::StreamExt;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uplift_utils::loader::{Filter, Loader, LoaderTrait};

pub mod category;
pub mod error;
pub mod question;
pub mod section;
mod v01;

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { quest: QuestV01 },
}

/// Top-level grouping of sections around a theme.
#[derive(Debug, Clone, Serialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub weight: usize,
    #[serde(skip)]
    sections: IndexMap<String, Arc<Section>>,
}

impl Quest {
    pub fn new(id: impl Into<String>, title: impl Into<String>, sections: Vec<Section>) -> Result<Self, CatalogError> {
        let id = id.into();
        if sections.is_empty() {
            return Err(CatalogError::EmptyQuest { quest: id });
        }
        let mut by_id = IndexMap::with_capacity(sections.len());
        for section in sections {
            if by_id.contains_key(section.id()) {
                return Err(CatalogError::InvalidQuest {
                    quest: id,
                    source: Box::new(CatalogError::DuplicateSection {
                        section: section.id().to_owned(),
                    }),
                });
            }
            by_id.insert(section.id().to_owned(), Arc::new(section));
        }
        Ok(Self {
            id,
            title: title.into(),
            subtitle: None,
            description: None,
            icon: None,
            weight: 1,
            sections: by_id,
        })
    }

    #[must_use]
    pub fn with_weight(mut self, weight: usize) -> Self {
        self.weight = weight;
        self
    }

    pub(crate) fn from_v01(quest: QuestV01) -> Result<Self, CatalogError> {
        if quest.sections.is_empty() {
            return Err(CatalogError::EmptyQuest { quest: quest.id });
        }
        let sections = quest
            .sections
            .into_iter()
            .map(|(id, section)| Section::from_v01(section).map(|s| (id, Arc::new(s))))
            .collect::<Result<IndexMap<_, _>, _>>()
            .map_err(|e| CatalogError::InvalidQuest {
                quest: quest.id.clone(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: quest.id,
            title: quest.title,
            subtitle: quest.subtitle,
            description: quest.description,
            icon: quest.icon,
            weight: quest.weight.unwrap_or(1),
            sections,
        })
    }

    /// Sections in traversal order.
    pub fn sections(&self) -> impl ExactSizeIterator<Item = &Arc<Section>> {
        self.sections.values()
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Arc<Section>> {
        self.sections.get(id)
    }
}

pub async fn load(loader: &Loader) -> Result<Vec<Quest>, CatalogError> {
    tracing::debug!("loading quests");
    let mut res = vec![];
    let mut stream = loader.load_dir("", Filter::Yaml);
    while let Some(file) = stream.next().await {
        let file = file?;
        let quest = parse(&file.content).inspect_err(|error| {
            tracing::error!(file = file.key(), %error, "invalid quest file");
        })?;
        tracing::debug!(quest_id = quest.id, sections = quest.sections.len(), "loaded quest");
        res.push(quest);
    }
    Ok(res)
}

pub fn parse(content: &[u8]) -> Result<Quest, CatalogError> {
    let VersionConfig::V01 { quest } = serde_yml::from_slice::<VersionConfig>(content)?;
    Quest::from_v01(quest)
}

/// JSON schema of a quest content file.
#[must_use]
pub fn json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(VersionConfig)
}
