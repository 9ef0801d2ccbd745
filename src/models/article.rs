use serde::{Deserialize, Serialize};

/// Core article entity. Wire field names keep the service's original mixed-case
/// contract (`Id`, `Title`, `desc`, `content`); every field defaults to the empty
/// string when absent from a payload. `id` is supplied by the caller, never
/// generated, and uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(rename = "content", default)]
    pub content: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Partial-update payload. `id` is required; the remaining fields are optional,
/// and a field supplied as the empty string counts as not supplied.
#[derive(Debug, Deserialize)]
pub struct UpdateArticle {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    #[serde(rename = "content")]
    pub content: Option<String>,
}
