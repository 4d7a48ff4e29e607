//! Shared test fonts for the anchor engine

mod fixtures;

pub(crate) use fixtures::{latin_marks_font, square};
