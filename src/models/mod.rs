//! Serializable results of a generate run, shared by the runner and printers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// What a run ended up doing.
pub enum Status {
    /// Docs root missing, unreadable, or empty; nothing rendered or written
    Empty,
    /// README was rewritten
    Written,
    /// Check mode: README matches the rendered index
    UpToDate,
    /// Check mode: README differs from the rendered index
    Stale,
    /// Dry run: index rendered but not written
    Preview,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Counts taken from the rendered document.
pub struct Summary {
    pub sections: usize,
    pub subsections: usize,
    pub files: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Outcome of one `generate` run.
pub struct GenerateResult {
    pub readme: String,
    pub docs: String,
    pub status: Status,
    pub changed: bool,
    pub wrote: bool,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}
