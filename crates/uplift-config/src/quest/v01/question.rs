use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uplift_utils::id_map::{ItemId, id_map};

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuestionV01 {
    /// # Position of the question
    /// Optional. If set it has to match the 0-based position inside the section.
    pub(crate) index: Option<usize>,
    /// # Text of the question
    pub(crate) text: String,
    #[serde(flatten)]
    pub(crate) body: QuestionBodyV01,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(tag = "type", content = "body")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum QuestionBodyV01 {
    /// # Pick one option, every option votes for a category
    SingleChoiceCategory(ChoiceBodyV01),
    /// # Pick one option, tagged options vote for a category with their weight
    SingleChoiceWeighted(ChoiceBodyV01),
    /// # Rate on a scale from 1 to `points`
    Likert(LikertBodyV01),
    /// # Yes / no / sometimes
    TernaryChoice(TernaryBodyV01),
    /// # Optional reflective input
    FreeText(TextBodyV01),
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ChoiceBodyV01 {
    #[serde(with = "id_map")]
    #[schemars(with = "Vec::<OptionV01>")]
    pub(crate) options: IndexMap<String, OptionV01>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TernaryBodyV01 {
    #[serde(default, with = "id_map")]
    #[schemars(with = "Vec::<OptionV01>")]
    /// # Options replacing the default yes / no / sometimes
    pub(crate) options: IndexMap<String, OptionV01>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LikertBodyV01 {
    pub(crate) points: u8,
    pub(crate) hint_min: Option<String>,
    pub(crate) hint_max: Option<String>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TextBodyV01 {
    pub(crate) placeholder: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OptionV01 {
    /// # Answer token submitted when the option is picked
    pub(crate) value: String,
    /// # Label shown to the user, defaults to the value
    pub(crate) label: Option<String>,
    /// # Category the option votes for
    pub(crate) category: Option<String>,
    /// # Vote weight, only meaningful for weighted questions
    pub(crate) weight: Option<u32>,
}

impl ItemId for OptionV01 {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.value.clone()
    }
}
