use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder title written in place of an empty one.
pub const UNTITLED: &str = "Untitled";

/// A single note: scanned or typed text plus its organizational metadata.
///
/// Timestamps are milliseconds since the Unix epoch. `updated_at` is the
/// sole ordering key for listings; `created_at` is set once and never
/// changes for the lifetime of the note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    /// Creates a fresh note with a generated id and both timestamps set to now.
    ///
    /// The title is normalized at this point: surrounding whitespace is
    /// trimmed and an empty result becomes [`UNTITLED`]. The body is
    /// trimmed. Storage never re-checks either.
    pub fn new(title: &str, body: &str, tags: Vec<String>) -> Note {
        let now = now_ms();

        Note {
            id: Uuid::new_v4().to_string(),
            title: normalize_title(title),
            body: body.trim().to_owned(),
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns an edited copy of this note carrying the same `id` and
    /// `created_at`, with `updated_at` stamped to now.
    ///
    /// This is the sanctioned edit path: it guarantees the original
    /// `created_at` travels with the edit, which the storage layer in turn
    /// preserves on update.
    pub fn edited(&self, title: &str, body: &str, tags: Vec<String>) -> Note {
        Note {
            id: self.id.clone(),
            title: normalize_title(title),
            body: body.trim().to_owned(),
            tags,
            created_at: self.created_at,
            updated_at: now_ms(),
        }
    }

    /// Adds a tag, enforcing case-insensitive uniqueness.
    ///
    /// The tag is trimmed first; empty input and duplicates (compared
    /// case-insensitively) are rejected. The stored spelling is the one
    /// typed, and insertion order is preserved.
    ///
    /// Returns `true` if the tag was added.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() {
            return false;
        }

        let lowered = tag.to_lowercase();
        if self.tags.iter().any(|t| t.to_lowercase() == lowered) {
            return false;
        }

        self.tags.push(tag.to_owned());
        true
    }

    /// Removes a tag by exact spelling. Returns `true` if it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

/// Trims a title, substituting [`UNTITLED`] when nothing remains.
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNTITLED.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Encodes a tag list to its stored form (a JSON array of strings).
pub fn encode_tags(tags: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tags)
}

/// Decodes the stored tag column back into a list.
///
/// Malformed input is an `Err` here; the repository maps it to an empty
/// list so one bad row cannot fail a whole listing.
pub fn decode_tags(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
