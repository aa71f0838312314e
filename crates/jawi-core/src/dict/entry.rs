use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Jawi text (may also contain intermediate codes).
    pub target: String,
    /// Grammatical feature label, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl DictEntry {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            tag: None,
        }
    }

    pub fn tagged(target: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            tag: Some(tag.into()),
        }
    }
}
