use crate::error::SnapResult;
use std::path::Path;

/// A text recognition engine: image file in, raw recognized text out.
///
/// Implementations wrap whatever vision library the platform provides;
/// the core only ever sees the resulting string. Empty output is valid —
/// a photo with no legible text recognizes to nothing.
pub trait TextRecognizer {
    fn recognize(&self, image: &Path) -> SnapResult<String>;
}

/// Normalizes raw recognition output into text worth editing.
///
/// - unifies CRLF/CR line endings to LF
/// - turns non-breaking spaces into plain spaces
/// - strips trailing whitespace from every line
/// - collapses runs of three or more newlines down to two
/// - trims the result as a whole
pub fn clean_text(input: &str) -> String {
    let unified = input
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{00A0}', " ");

    let joined = unified
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::with_capacity(joined.len());
    let mut newlines = 0usize;
    for ch in joined.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }

    out.trim().to_owned()
}

/// Runs the engine on an image and cleans the result — the composition
/// every scan flow performs.
pub fn recognize_cleaned<R: TextRecognizer>(engine: &R, image: &Path) -> SnapResult<String> {
    let raw = engine.recognize(image)?;
    Ok(clean_text(&raw))
}
