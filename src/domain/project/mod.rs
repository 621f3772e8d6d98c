//! Project Module - where a study's files live.

mod study_directory;

pub use study_directory::{slugify, StudyDirectory, DESIGN_MARKER, MAX_SLUG_LEN};
