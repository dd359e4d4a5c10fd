//! View rendering
//!
//! `text` paints view models for a terminal, `json` serializes them for
//! other programs. Neither fetches anything.

pub mod json;
pub mod text;
