//! End-to-end pass over the documented listing/filtering behavior:
//! storage → repository → collection state → search views.

use snapnote_core::SnapError;
use snapnote_core::domain::Note;
use snapnote_core::repo::NoteRepository;
use snapnote_core::search::{FilterCounts, FilterKind, filter_notes};
use snapnote_core::state::NotesState;
use snapnote_core::store::Store;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn note_at(id: &str, updated_at: i64, tags: &[&str], body: &str) -> Note {
    Note {
        id: id.to_owned(),
        title: id.to_uppercase(),
        body: body.to_owned(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: updated_at,
        updated_at,
    }
}

#[tokio::test]
async fn listing_and_filter_views_line_up() -> Result<(), SnapError> {
    init_tracing();

    let tmpdir = TempDir::new()?;
    let store = Store::open(&tmpdir.path().join("notes.db")).await?;
    let repo = NoteRepository::new(&store);

    let long_body = "x".repeat(700);
    repo.upsert(&note_at("a", 100, &[], "plain")).await?;
    repo.upsert(&note_at("b", 200, &["work"], "meeting")).await?;
    repo.upsert(&note_at("c", 300, &[], &long_body)).await?;

    let mut state = NotesState::new(repo);
    state.load_all().await;

    // newest first
    let ids: Vec<_> = state.items().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["c", "b", "a"]);

    let now = 400;
    let notes = state.items();

    let counts = FilterCounts::compute(notes, now);
    assert_eq!(counts.all, 3);
    assert_eq!(counts.recent, 3);
    assert_eq!(counts.tagged, 1);
    assert_eq!(counts.long, 1);
    assert_eq!(counts.get(FilterKind::Tagged), counts.tagged);

    let tagged = filter_notes(notes, FilterKind::Tagged, "", now);
    assert_eq!(tagged.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["b"]);

    let long = filter_notes(notes, FilterKind::Long, "", now);
    assert_eq!(long.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["c"]);

    let queried = filter_notes(notes, FilterKind::All, "work", now);
    assert_eq!(queried.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["b"]);

    store.close().await;
    Ok(())
}

#[tokio::test]
async fn views_track_state_transitions() -> Result<(), SnapError> {
    init_tracing();

    let tmpdir = TempDir::new()?;
    let store = Store::open(&tmpdir.path().join("notes.db")).await?;

    let mut state = NotesState::new(NoteRepository::new(&store));
    state.load_all().await;
    assert!(state.items().is_empty());

    let mut scanned = Note::new("Receipt", "total 12.50", vec![]);
    scanned.add_tag("expenses");
    let id = scanned.id.clone();
    state.save(scanned).await?;

    let now = snapnote_core::domain::now_ms();
    let counts = FilterCounts::compute(state.items(), now);
    assert_eq!((counts.all, counts.recent, counts.tagged), (1, 1, 1));

    let hits = filter_notes(state.items(), FilterKind::All, "EXPENSES", now);
    assert_eq!(hits.len(), 1);

    state.delete(&id).await?;
    let counts = FilterCounts::compute(state.items(), now);
    assert_eq!(counts.all, 0);

    store.close().await;
    Ok(())
}
