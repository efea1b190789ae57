use serde::{Deserialize, Serialize};

/// Answer returned by the backend's `GET /ask` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    /// Detected intent, e.g. `staff`, `room` or `chat`.
    pub intent: String,
    pub answer: String,
    /// Relative path of a photo to show alongside the answer.
    pub photo: Option<String>,
    /// Set when the backend could not find an answer.
    pub not_found: bool,
}

impl AskResponse {
    pub fn has_photo(&self) -> bool {
        self.photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}
