//! Study directory naming.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Longest slug kept from a research question.
pub const MAX_SLUG_LEN: usize = 50;

/// Marker file whose presence means the study was already set up.
pub const DESIGN_MARKER: &str = "conjoint_design.md";

/// Turns free text into a lower-case, dash-separated file name fragment.
///
/// Only ASCII letters, digits, whitespace and `-` survive. Whitespace runs
/// become a single `-`. When the result is longer than `max_len` it is cut
/// and the partial word after the last `-` is dropped.
pub fn slugify(text: &str, max_len: usize) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let slug = kept.split_whitespace().collect::<Vec<_>>().join("-");
    if slug.len() <= max_len {
        return slug;
    }

    // Only ASCII remains, so byte slicing is safe.
    let cut = &slug[..max_len];
    match cut.rfind('-') {
        Some(i) => cut[..i].to_string(),
        None => cut.to_string(),
    }
}

/// Dated directory name for one study: `YYYY-MM-DD_<slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDirectory {
    name: String,
}

impl StudyDirectory {
    /// Builds the name from a research question.
    ///
    /// # Errors
    /// `EmptyField` when nothing of the question survives slugification.
    pub fn for_question(question: &str, date: NaiveDate) -> Result<Self, ValidationError> {
        let slug = slugify(question, MAX_SLUG_LEN);
        if slug.is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        Ok(Self {
            name: format!("{}_{}", date.format("%Y-%m-%d"), slug),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
