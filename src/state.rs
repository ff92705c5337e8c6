use crate::domain::Note;
use crate::error::SnapResult;
use crate::repo::NoteRepository;

/// In-memory collection of all notes, mirrored from storage.
///
/// This is the single source of truth a frontend reads: an ordered list
/// plus the loading flag and last refresh error. It stays consistent with
/// the repository through the three explicit transitions below; nothing
/// else mutates it.
///
/// A failed refresh never discards previously loaded data — the old list
/// stays readable and the failure is recorded as a message.
pub struct NotesState {
    repo: NoteRepository,
    items: Vec<Note>,
    loading: bool,
    error: Option<String>,
}

impl NotesState {
    pub fn new(repo: NoteRepository) -> Self {
        NotesState {
            repo,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Current collection, most recently updated first.
    pub fn items(&self) -> &[Note] {
        &self.items
    }

    /// Whether a bulk refresh is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed refresh, cleared by the next attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the whole collection from storage.
    ///
    /// The only bulk-refresh path. On failure the previous collection is
    /// retained and the error is captured here instead of propagating.
    pub async fn load_all(&mut self) {
        self.loading = true;
        self.error = None;

        match self.repo.list().await {
            Ok(notes) => {
                self.items = notes;
                self.loading = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "note refresh failed, keeping previous collection");
                self.loading = false;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Persists the note, then merges it into the collection.
    ///
    /// An existing entry is replaced in place; a new one is prepended,
    /// approximating most-recently-updated-first until the next full
    /// refresh re-sorts. On failure the collection is untouched and the
    /// error goes back to the caller.
    pub async fn save(&mut self, note: Note) -> SnapResult<()> {
        self.repo.upsert(&note).await?;
        self.merge(note);
        Ok(())
    }

    /// Deletes from storage, then drops the matching entry.
    ///
    /// Returns whether storage had the row. On failure the collection is
    /// untouched.
    pub async fn delete(&mut self, id: &str) -> SnapResult<bool> {
        let removed = self.repo.remove(id).await?;
        self.items.retain(|n| n.id != id);
        Ok(removed)
    }

    /// Local-only merge for optimistic UI updates.
    ///
    /// Never touches storage and carries no durability guarantee; a later
    /// [`NotesState::save`] or [`NotesState::load_all`] is still required.
    pub fn upsert_local(&mut self, note: Note) {
        self.merge(note);
    }

    fn merge(&mut self, note: Note) {
        match self.items.iter().position(|n| n.id == note.id) {
            Some(idx) => self.items[idx] = note,
            None => self.items.insert(0, note),
        }
    }
}
