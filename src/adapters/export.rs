use crate::domain::Note;
use crate::error::{SnapError, SnapResult};
use std::path::{Path, PathBuf};

/// Maximum length of a generated filename stem.
const MAX_STEM_CHARS: usize = 60;

/// The two document formats a note can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Txt,
}

impl ExportFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Txt => "text/plain",
        }
    }
}

/// Renders a note into a document on the local filesystem.
///
/// Implementations own the actual PDF/TXT generation; each method returns
/// the path of the produced file, or [`SnapError::Export`] with a
/// human-readable reason when no file was produced.
pub trait NoteExporter {
    fn export_pdf(&self, note: &Note) -> SnapResult<PathBuf>;
    fn export_txt(&self, note: &Note) -> SnapResult<PathBuf>;
}

/// What became of a share request.
///
/// Backing out of the share sheet is a normal outcome for the user, so it
/// is modeled here rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Delivered,
    Cancelled,
}

/// Hands a produced file to the platform's share mechanism.
pub trait ShareSink {
    fn share(&self, file: &Path, mime: &str) -> SnapResult<ShareOutcome>;
}

/// Exports the note in the requested format and shares the result.
///
/// A cancelled share is a silent success — the exported file still exists
/// and its path is returned either way. Failures from either collaborator
/// propagate as [`SnapError::Export`] / [`SnapError::Share`].
pub fn export_and_share<E, S>(
    exporter: &E,
    sink: &S,
    note: &Note,
    format: ExportFormat,
) -> SnapResult<PathBuf>
where
    E: NoteExporter,
    S: ShareSink,
{
    let path = match format {
        ExportFormat::Pdf => exporter.export_pdf(note)?,
        ExportFormat::Txt => exporter.export_txt(note)?,
    };

    match sink.share(&path, format.mime())? {
        ShareOutcome::Delivered => {
            tracing::debug!(file = %path.display(), "note shared");
        }
        ShareOutcome::Cancelled => {
            tracing::debug!(file = %path.display(), "share cancelled by user");
        }
    }

    Ok(path)
}

/// Derives a filesystem-safe filename stem from a note title.
///
/// Trims, replaces characters that are unsafe in filenames with `-`,
/// collapses whitespace runs to `_`, and caps the length. A blank title
/// falls back to `note`.
pub fn safe_filename(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "note".to_owned();
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut pending_sep = false;

    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            pending_sep = true;
            continue;
        }
        if pending_sep {
            out.push('_');
            pending_sep = false;
        }
        match ch {
            '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => out.push('-'),
            _ => out.push(ch),
        }
    }

    out.chars().take(MAX_STEM_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn safe_filename_replaces_unsafe_characters() {
        assert_eq!(safe_filename("a/b\\c:d"), "a-b-c-d");
        assert_eq!(safe_filename("what? 100%*"), "what-_100--");
    }

    #[test]
    fn safe_filename_collapses_whitespace_runs() {
        assert_eq!(safe_filename("  my   shopping list "), "my_shopping_list");
    }

    #[test]
    fn safe_filename_caps_length() {
        let long = "x".repeat(200);
        assert_eq!(safe_filename(&long).chars().count(), MAX_STEM_CHARS);
    }

    #[test]
    fn safe_filename_falls_back_on_blank() {
        assert_eq!(safe_filename(""), "note");
        assert_eq!(safe_filename("   "), "note");
    }

    struct StubExporter;

    impl NoteExporter for StubExporter {
        fn export_pdf(&self, _note: &Note) -> SnapResult<PathBuf> {
            Ok(PathBuf::from("/tmp/out.pdf"))
        }

        fn export_txt(&self, _note: &Note) -> SnapResult<PathBuf> {
            Ok(PathBuf::from("/tmp/out.txt"))
        }
    }

    struct StubSink {
        outcome: ShareOutcome,
        called: Cell<bool>,
    }

    impl ShareSink for StubSink {
        fn share(&self, _file: &Path, _mime: &str) -> SnapResult<ShareOutcome> {
            self.called.set(true);
            Ok(self.outcome)
        }
    }

    #[test]
    fn cancelled_share_is_not_an_error() {
        let note = Note::new("Receipt", "total", vec![]);
        let sink = StubSink {
            outcome: ShareOutcome::Cancelled,
            called: Cell::new(false),
        };

        let path = export_and_share(&StubExporter, &sink, &note, ExportFormat::Txt).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/out.txt"));
        assert!(sink.called.get());
    }

    #[test]
    fn share_failure_propagates() {
        struct FailingSink;

        impl ShareSink for FailingSink {
            fn share(&self, _file: &Path, _mime: &str) -> SnapResult<ShareOutcome> {
                Err(SnapError::Share("no share targets available".into()))
            }
        }

        let note = Note::new("Receipt", "total", vec![]);
        let err = export_and_share(&StubExporter, &FailingSink, &note, ExportFormat::Pdf);
        assert!(matches!(err, Err(SnapError::Share(_))));
    }

    #[test]
    fn export_failure_short_circuits_sharing() {
        struct FailingExporter;

        impl NoteExporter for FailingExporter {
            fn export_pdf(&self, _note: &Note) -> SnapResult<PathBuf> {
                Err(SnapError::Export("no file path returned".into()))
            }

            fn export_txt(&self, _note: &Note) -> SnapResult<PathBuf> {
                Err(SnapError::Export("file not created".into()))
            }
        }

        let note = Note::new("Receipt", "total", vec![]);
        let sink = StubSink {
            outcome: ShareOutcome::Delivered,
            called: Cell::new(false),
        };

        let err = export_and_share(&FailingExporter, &sink, &note, ExportFormat::Txt);
        assert!(matches!(err, Err(SnapError::Export(_))));
        assert!(!sink.called.get());
    }
}
