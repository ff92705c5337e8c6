//! Boundaries to platform capabilities the core calls out to but does not
//! implement: text recognition, file export, and the share sheet.
//!
//! Recognition engines and exporters are device concerns, so they enter
//! the crate as traits; what lives here is the pure text and path logic
//! both sides of each boundary agree on.

pub mod export;
pub mod ocr;
