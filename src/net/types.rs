#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Runtime status as served by `GET /status` and embedded in every stream
/// event. Replaced wholesale on each update.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    pub processing: bool,
    pub stt: bool,
    pub mic: bool,
    pub player: bool,
    pub chat_ids: String,
}

/// One event from `GET /status-stream`: a full status snapshot plus the
/// optional record/chat signals.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StreamEvent {
    #[serde(flatten)]
    pub status: StatusSnapshot,
    #[serde(default)]
    pub db_updated: Option<bool>,
    #[serde(default)]
    pub question_updated: Option<bool>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub delta_chunk: Option<String>,
}

/// A stored chat record as served by `GET /records`. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub answered: bool,
}
