use serde::{Deserialize, Serialize};

/// One candidate search term returned by the remote lookup.
///
/// The lookup service historically answered with `sickCd`/`sickNm`; both spellings decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(alias = "sickCd")]
    pub id: String,
    #[serde(alias = "sickNm")]
    pub label: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
