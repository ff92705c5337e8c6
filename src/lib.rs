//! # snapnote_core
//!
//! The storage and query core of a scan-to-note application: durable
//! SQLite persistence for notes, an in-memory collection mirrored from
//! it, and pure search/filter/statistics views over that collection.
//!
//! ## Features
//!
//! - **Note Persistence**: schema-versioned SQLite storage with an
//!   explicit open/close lifecycle and typed CRUD
//! - **Collection State**: a single in-memory source of truth, refreshed
//!   and merged through explicit transitions that never discard good data
//!   on failure
//! - **Search & Filters**: pure derivations — category filters, substring
//!   search, per-category counts — recomputable for any query without
//!   touching storage
//! - **Adapter Boundaries**: traits for text recognition, export, and
//!   sharing, plus the text cleanup both sides agree on
//! - **Unified Errors**: one [`SnapError`] with automatic conversions so
//!   `?` works throughout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snapnote_core::domain::Note;
//! use snapnote_core::repo::NoteRepository;
//! use snapnote_core::state::NotesState;
//! use snapnote_core::store::Store;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), snapnote_core::SnapError> {
//! // Open (and migrate) the database, then build the state the UI reads.
//! let store = Store::open(Path::new("snapnote.db")).await?;
//! let mut state = NotesState::new(NoteRepository::new(&store));
//!
//! state.load_all().await;
//!
//! let mut note = Note::new("Shopping", "milk\neggs\nbread", vec![]);
//! note.add_tag("errands");
//! state.save(note).await?;
//!
//! store.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Searching and filtering
//!
//! The engine is a set of pure functions over the loaded collection; the
//! clock is an argument, so views are deterministic and cheap to
//! recompute on every keystroke:
//!
//! ```rust
//! use snapnote_core::domain::{Note, now_ms};
//! use snapnote_core::search::{FilterCounts, FilterKind, filter_notes};
//!
//! # fn render(notes: &[Note]) {
//! let counts = FilterCounts::compute(notes, now_ms());
//! let visible = filter_notes(notes, FilterKind::Tagged, "receipt", now_ms());
//! # let _ = (counts, visible);
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`domain`]**: the [`domain::Note`] entity, tag rules, timestamps,
//!   and the tag-list codec
//! - **[`store`]**: connection lifecycle and schema migration
//! - **[`repo`]**: typed async CRUD over the store
//! - **[`state`]**: the in-memory collection and its transitions
//! - **[`search`]**: filters, text search, and counts
//! - **[`adapters`]**: recognition/export/share boundaries
//! - **[`error`]**: unified error handling throughout the library
//!
//! ## Error Handling
//!
//! All fallible operations return [`SnapResult<T>`]. Lookups that find
//! nothing are `Ok(None)`, deleting a missing id is `Ok(false)`, and a
//! failed refresh parks its message in the state instead of propagating —
//! failure at a boundary is always a value, never a panic.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod repo;
pub mod search;
pub mod state;
pub mod store;

/// Re-exports the most commonly used types for convenience.
pub use error::{SnapError, SnapResult};
