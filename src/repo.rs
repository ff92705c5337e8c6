use crate::domain::{self, Note};
use crate::error::SnapResult;
use crate::store::Store;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Typed CRUD over the notes table.
///
/// Cheap to clone; every clone shares the pool of the [`Store`] it was
/// built from. All methods are async and issue a single statement (or a
/// single transaction), so read-after-write consistency is the caller's
/// job: await the write before the dependent read.
#[derive(Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    pub fn new(store: &Store) -> Self {
        NoteRepository {
            pool: store.pool.clone(),
        }
    }

    /// Returns every note, most recently updated first.
    ///
    /// A row whose tags column no longer decodes gets an empty tag list
    /// rather than failing the listing; the fallback is logged.
    pub async fn list(&self) -> SnapResult<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, title, body, tags, created_at, updated_at
             FROM notes
             ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    /// Looks up a note by id. Absence is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: &str) -> SnapResult<Option<Note>> {
        let row = sqlx::query(
            "SELECT id, title, body, tags, created_at, updated_at
             FROM notes
             WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    /// Inserts the note, or updates the mutable fields of the existing row
    /// with the same id.
    ///
    /// Runs as an explicit lookup-then-write transaction so the field
    /// contract is visible in the code rather than buried in a conflict
    /// clause: on update, `created_at` is never written — the stored value
    /// wins even if the caller supplies a different one.
    pub async fn upsert(&self, note: &Note) -> SnapResult<()> {
        let tags = domain::encode_tags(&note.tags)?;

        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT created_at FROM notes WHERE id = ?")
            .bind(&note.id)
            .fetch_optional(&mut *tx)
            .await?;

        match existing {
            Some(_) => {
                tracing::debug!(id = %note.id, "updating note");
                sqlx::query(
                    "UPDATE notes
                     SET title = ?, body = ?, tags = ?, updated_at = ?
                     WHERE id = ?",
                )
                .bind(&note.title)
                .bind(&note.body)
                .bind(&tags)
                .bind(note.updated_at)
                .bind(&note.id)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                tracing::debug!(id = %note.id, "inserting note");
                sqlx::query(
                    "INSERT INTO notes (id, title, body, tags, created_at, updated_at)
                     VALUES (?, ?, ?, ?, ?, ?)",
                )
                .bind(&note.id)
                .bind(&note.title)
                .bind(&note.body)
                .bind(&tags)
                .bind(note.created_at)
                .bind(note.updated_at)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Deletes the note with the given id.
    ///
    /// Returns whether a row was actually deleted; a missing id is a
    /// no-op, not an error.
    pub async fn remove(&self, id: &str) -> SnapResult<bool> {
        let res = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }
}

fn note_from_row(row: &SqliteRow) -> Note {
    let id: String = row.get(0);
    let raw_tags: String = row.get(3);

    let tags = domain::decode_tags(&raw_tags).unwrap_or_else(|e| {
        tracing::warn!(id = %id, error = %e, "undecodable tags column, substituting empty list");
        Vec::new()
    });

    Note {
        id,
        title: row.get(1),
        body: row.get(2),
        tags,
        created_at: row.get(4),
        updated_at: row.get(5),
    }
}
