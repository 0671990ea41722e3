use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A memo as stored by the backend.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    id: i64,
    title: String,
    content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    created_at: DateTime<Utc>,
    /// `None` until the memo is modified for the first time.
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    updated_at: Option<DateTime<Utc>>,
}

impl Memo {
    pub fn id(&self) -> i64 { self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn content(&self) -> &str { &self.content }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> Option<DateTime<Utc>> { self.updated_at }

    /// Time of the most recent change, falling back to the creation time.
    pub fn last_modified(&self) -> DateTime<Utc> { self.updated_at.unwrap_or(self.created_at) }
}

/// Parses an ISO 8601 timestamp. Timestamps without an offset are taken as UTC,
/// which is what the backend emits when its database drops timezone info.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|t| t.with_timezone(&Utc)).or_else(|_| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|t| t.and_utc())
    })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where D: Deserializer<'de> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

fn deserialize_opt_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where D: Deserializer<'de> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Payload for creating a memo.
#[derive(serde::Serialize, Debug, Clone)]
pub struct MemoCreate {
    pub title: String,
    pub content: String,
}

impl MemoCreate {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { title: title.into(), content: content.into() }
    }
}

/// Partial update of a memo. Fields left as `None` are not sent and keep
/// their stored value.
#[derive(serde::Serialize, Debug, Clone, Default)]
pub struct MemoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl MemoUpdate {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_empty(&self) -> bool { self.title.is_none() && self.content.is_none() }
}

#[cfg(test)]
mod tests {
    use super::{Memo, MemoUpdate};

    #[test]
    fn test_memo_from_backend_json() {
        let raw = r#"{
            "id": 7,
            "title": "groceries",
            "content": "milk, eggs",
            "created_at": "2025-03-01T09:30:00Z",
            "updated_at": null
        }"#;
        let memo: Memo = serde_json::from_str(raw).unwrap();
        assert_eq!(memo.id(), 7);
        assert_eq!(memo.title(), "groceries");
        assert!(memo.updated_at().is_none());
        assert_eq!(memo.last_modified(), memo.created_at());
    }

    #[test]
    fn test_memo_without_updated_at_field() {
        let raw = r#"{"id":1,"title":"a","content":"b","created_at":"2025-03-01T09:30:00+01:00"}"#;
        let memo: Memo = serde_json::from_str(raw).unwrap();
        assert_eq!(memo.created_at().to_rfc3339(), "2025-03-01T08:30:00+00:00");
    }

    #[test]
    fn test_memo_with_naive_timestamps() {
        let raw = r#"{"id":2,"title":"a","content":"b",
            "created_at":"2025-03-01T09:30:00.123456","updated_at":"2025-03-02T10:00:00"}"#;
        let memo: Memo = serde_json::from_str(raw).unwrap();
        assert_eq!(memo.created_at().to_rfc3339(), "2025-03-01T09:30:00.123456+00:00");
        assert_eq!(memo.last_modified().to_rfc3339(), "2025-03-02T10:00:00+00:00");
    }

    #[test]
    fn test_memo_rejects_garbage_timestamp() {
        let raw = r#"{"id":3,"title":"a","content":"b","created_at":"yesterday"}"#;
        assert!(serde_json::from_str::<Memo>(raw).is_err());
    }

    #[test]
    fn test_memo_update_omits_unset_fields() {
        let update = MemoUpdate::default().content("only the body");
        assert!(!update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"content":"only the body"}"#);
        assert_eq!(serde_json::to_string(&MemoUpdate::default()).unwrap(), "{}");
    }
}
