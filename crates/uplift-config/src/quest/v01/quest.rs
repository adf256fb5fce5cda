use crate::quest::v01::section::SectionV01;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;
use uplift_utils::id_map::id_map;

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuestV01 {
    /// # Unique identifier of the quest
    pub(crate) id: String,
    /// # Title of the quest
    pub(crate) title: String,
    /// # Subtitle of the quest
    pub(crate) subtitle: Option<String>,
    /// # Description of the quest
    pub(crate) description: Option<String>,
    /// # Icon associated with the quest
    pub(crate) icon: Option<String>,
    /// # Weight of the quest
    /// Quests are traversed by descending weight, ties are ordered by id.
    /// A quest unlocks once the quest before it is completed.
    pub(crate) weight: Option<usize>,
    #[serde(with = "id_map")]
    #[schemars(with = "Vec::<SectionV01>")]
    /// # Sections of the quest
    /// Sections are unlocked one after another in the listed order.
    pub(crate) sections: IndexMap<String, SectionV01>,
}
