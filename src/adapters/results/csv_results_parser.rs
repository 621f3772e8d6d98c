//! CSV results parser adapter.
//!
//! Reads the wide survey export produced by running a conjoint study: one
//! row per respondent, with answer, scenario and respondent-trait columns.
//!
//! # Column conventions
//!
//! | Column | Meaning |
//! |--------|---------|
//! | `answer.choice_task_<t>` | Selected option text, e.g. `"Option B"` |
//! | `scenario.task_<t>_opt_<l>_<attribute>` | Level shown for option `l` (`a`, `b`, ...) |
//! | `agent.<trait>` | Respondent trait used for segmentation |

use std::collections::{BTreeMap, HashMap};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::domain::analysis::{AnalysisError, ChoiceRecord};
use crate::domain::design::DesignSpec;
use crate::domain::foundation::Profile;
use crate::ports::ResultsParser;

const ANSWER_PREFIX: &str = "answer.choice_task_";
const TRAIT_PREFIX: &str = "agent.";

/// `csv`-backed implementation of ResultsParser.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvResultsParser;

impl CsvResultsParser {
    pub fn new() -> Self {
        Self
    }

    /// Resolves an answer to an option index by its `Option <L>` text.
    fn option_index(answer: &str, labels: &[char]) -> Option<usize> {
        labels
            .iter()
            .position(|label| answer.contains(&format!("Option {}", label)))
    }

    fn scenario_column(task: usize, label: char, attribute: &str) -> String {
        format!(
            "scenario.task_{}_opt_{}_{}",
            task,
            label.to_ascii_lowercase(),
            attribute
        )
    }
}

/// Header name → column position. Later duplicates win.
struct Columns {
    index: HashMap<String, usize>,
    traits: Vec<(String, usize)>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        let mut traits = Vec::new();
        for (i, name) in headers.iter().enumerate() {
            index.insert(name.to_string(), i);
            if let Some(trait_name) = name.strip_prefix(TRAIT_PREFIX) {
                traits.push((trait_name.to_string(), i));
            }
        }
        Self { index, traits }
    }

    fn cell<'r>(&self, row: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.index.get(name).and_then(|&i| row.get(i))
    }
}

impl ResultsParser for CsvResultsParser {
    fn parse(&self, content: &str, spec: &DesignSpec) -> Result<Vec<ChoiceRecord>, AnalysisError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AnalysisError::malformed(format!("unreadable header row: {}", e)))?
            .clone();
        let columns = Columns::from_headers(&headers);
        let labels = spec.option_labels();

        let mut records = Vec::new();
        for (row_number, row) in reader.records().enumerate() {
            let row = row.map_err(|e| {
                AnalysisError::malformed(format!("row {}: {}", row_number + 1, e))
            })?;

            let traits: BTreeMap<String, String> = columns
                .traits
                .iter()
                .filter_map(|(name, i)| row.get(*i).map(|v| (name.clone(), v.to_string())))
                .collect();

            for task in 1..=spec.tasks_per_version {
                let answer = columns
                    .cell(&row, &format!("{}{}", ANSWER_PREFIX, task))
                    .map(str::trim)
                    .unwrap_or_default();
                if answer.is_empty() {
                    continue;
                }

                if spec.include_none && answer.to_lowercase().starts_with("none") {
                    records.push(ChoiceRecord::none_chosen(task).with_traits(traits.clone()));
                    continue;
                }

                let Some(option) = Self::option_index(answer, &labels) else {
                    debug!(row = row_number + 1, task, answer, "Skipping unrecognized answer");
                    continue;
                };

                let profile: Profile = spec
                    .attributes
                    .names()
                    .filter_map(|attribute| {
                        let column = Self::scenario_column(task, labels[option], attribute);
                        columns
                            .cell(&row, &column)
                            .map(|level| (attribute.to_string(), level.to_string()))
                    })
                    .collect();

                if profile.is_empty() {
                    debug!(row = row_number + 1, task, "Skipping answer with no scenario columns");
                    continue;
                }

                records.push(ChoiceRecord::chosen(task, profile).with_traits(traits.clone()));
            }
        }

        debug!(records = records.len(), "Parsed results table");
        Ok(records)
    }
}
