use serde::{Deserialize, Deserializer};

/// Server-side status of an import job
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Queued,
    Processing,
    Done,
    Blocked,
    Error,
    /// Any status string this client does not know about
    #[serde(other)]
    Unrecognized,
}

impl ImportStatus {
    /// Whether the job is still being worked on by the server.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, ImportStatus::Queued | ImportStatus::Processing)
    }

    /// Terminal states: no further transition happens after these.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ImportStatus::Done | ImportStatus::Blocked | ImportStatus::Error
        )
    }
}

/// Snapshot of an import job as returned by `POST /imports/` or `GET /imports/{id}/`.
///
/// The client never writes to a job; it only reads snapshots until a terminal
/// status arrives and then drops it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImportJob {
    /// Opaque job id. Status responses may omit it.
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    pub status: ImportStatus,
    /// Created listing, only for `done`
    #[serde(default)]
    pub ad_id: Option<u64>,
    /// Failure cause, only for `error`
    #[serde(default)]
    pub message: Option<String>,
    /// Seconds before the client may retry, only for `blocked`
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub retry_after: Option<f64>,
}

/// Accept ids as JSON strings or numbers and keep them as strings.
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accept delays as numbers or numeric strings; anything else is "no delay".
fn lenient_seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(crate::cooldown::seconds_from_value))
}
