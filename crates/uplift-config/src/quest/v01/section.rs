use crate::quest::v01::question::QuestionV01;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uplift_utils::id_map::{ItemId, id_map};

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SectionV01 {
    /// # Identifier of the section, unique within its quest
    pub(crate) id: String,
    /// # Title of the section
    pub(crate) title: String,
    /// # Description shown before the first question
    pub(crate) description: Option<String>,
    #[serde(default, with = "id_map")]
    #[schemars(with = "Vec::<CategoryV01>")]
    /// # Result categories
    /// If empty, the section is not scored and its answers are kept verbatim.
    pub(crate) categories: IndexMap<String, CategoryV01>,
    /// # Questions of the section, in the order they are asked
    pub(crate) questions: Vec<QuestionV01>,
}

impl ItemId for SectionV01 {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CategoryV01 {
    /// # Identifier of the category, unique within its section
    pub(crate) id: String,
    /// # Title displayed as the result
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) strengths: Vec<String>,
    pub(crate) affirmation: String,
}

impl ItemId for CategoryV01 {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}
