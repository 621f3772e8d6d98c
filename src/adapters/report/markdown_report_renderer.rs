//! Markdown and CSV renderings of analysis and simulation results.

use serde::Serialize;

use crate::domain::analysis::{AnalysisSummary, SegmentAnalysis};
use crate::domain::design::round_to;
use crate::domain::foundation::AttributeSpec;
use crate::domain::simulation::MarketShare;
use crate::ports::{RenderError, ReportRenderer};

/// One line of `utilities.csv`.
#[derive(Serialize)]
struct UtilityRow<'a> {
    attribute: &'a str,
    level: &'a str,
    utility: f64,
    importance_pct: f64,
}

/// Renders reports as GitHub-flavored Markdown tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn importance_table(lines: &mut Vec<String>, summary: &AnalysisSummary) {
        lines.push("| Attribute | Importance (%) |".to_string());
        lines.push("|-----------|---------------|".to_string());
        for (attribute, importance) in summary.importance.ranked() {
            lines.push(format!("| {} | {:.1} |", attribute, importance));
        }
        lines.push(String::new());
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn utilities_csv(
        &self,
        summary: &AnalysisSummary,
        attributes: &AttributeSpec,
    ) -> Result<String, RenderError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(["attribute", "level", "utility", "importance_pct"])
            .map_err(|e| RenderError::failed("utilities.csv", e))?;

        for attribute in attributes.names() {
            let importance = round_to(summary.importance.get(attribute).unwrap_or(0.0), 2);
            let Some(levels) = summary.utilities.attribute(attribute) else {
                continue;
            };
            for (level, utility) in levels.iter() {
                writer
                    .serialize(UtilityRow {
                        attribute,
                        level,
                        utility: round_to(*utility, 4),
                        importance_pct: importance,
                    })
                    .map_err(|e| RenderError::failed("utilities.csv", e))?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| RenderError::failed("utilities.csv", e))?;
        String::from_utf8(bytes).map_err(|e| RenderError::failed("utilities.csv", e))
    }

    fn analysis_report(&self, summary: &AnalysisSummary, segments: &SegmentAnalysis) -> String {
        let mut lines = vec![
            "# Conjoint Analysis Results\n".to_string(),
            format!("**Total observations:** {}\n", summary.n_observations),
            "## Attribute Importance\n".to_string(),
        ];
        Self::importance_table(&mut lines, summary);

        lines.push("## Part-Worth Utilities\n".to_string());
        for (attribute, importance) in summary.importance.ranked() {
            lines.push(format!(
                "### {} (importance: {:.1}%)\n",
                attribute, importance
            ));
            lines.push("| Level | Utility |".to_string());
            lines.push("|-------|---------|".to_string());

            if let Some(levels) = summary.utilities.attribute(attribute) {
                let mut sorted: Vec<(&str, f64)> = levels.iter().map(|(l, u)| (l, *u)).collect();
                sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
                for (level, utility) in sorted {
                    lines.push(format!("| {} | {:+.4} |", level, utility));
                }
            }
            lines.push(String::new());
        }

        if !segments.is_empty() {
            lines.push("## Segment Analysis\n".to_string());
            for (trait_name, groups) in segments {
                lines.push(format!("### By {}\n", trait_name));
                for (value, group) in groups {
                    lines.push(format!(
                        "#### {}={} (n={})\n",
                        trait_name, value, group.n_observations
                    ));
                    Self::importance_table(&mut lines, group);
                }
            }
        }

        lines.join("\n")
    }

    fn market_share_table(&self, shares: &[MarketShare]) -> String {
        let mut out = String::from("| Profile | Utility | Choice Share |\n");
        out.push_str("|---------|---------|-------------|\n");
        for share in shares {
            out.push_str(&format!(
                "| {} | {:+.4} | {:.1}% |\n",
                share.profile,
                share.total_utility,
                share.share * 100.0
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ChoiceRecord, ImportanceTable, SegmentAnalyzer, UtilityTable};
    use crate::domain::foundation::Profile;
    use crate::domain::simulation::MarketSimulator;
    use std::collections::BTreeMap;

    fn attributes() -> AttributeSpec {
        AttributeSpec::builder()
            .attribute("price", ["low", "high"])
            .attribute("brand", ["X", "Y"])
            .build()
            .unwrap()
    }

    fn summary() -> AnalysisSummary {
        let records = vec![
            ChoiceRecord::chosen(1, Profile::new().with("price", "low").with("brand", "X")),
            ChoiceRecord::chosen(2, Profile::new().with("price", "low").with("brand", "Y")),
            ChoiceRecord::chosen(3, Profile::new().with("price", "low").with("brand", "X")),
        ];
        AnalysisSummary::compute(&records, &attributes())
    }

    #[test]
    fn utilities_csv_has_header_and_rows_in_attribute_order() {
        let csv = MarkdownReportRenderer::new()
            .utilities_csv(&summary(), &attributes())
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "attribute,level,utility,importance_pct");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("price,low,"));
        assert!(lines[2].starts_with("price,high,"));
        assert!(lines[3].starts_with("brand,X,"));
        assert!(lines[4].starts_with("brand,Y,"));
    }

    #[test]
    fn utilities_csv_rounds_values() {
        let csv = MarkdownReportRenderer::new()
            .utilities_csv(&summary(), &attributes())
            .unwrap();

        for line in csv.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            let utility = fields[2];
            let decimals = utility.split('.').nth(1).map(str::len).unwrap_or(0);
            assert!(decimals <= 4, "{} has too many decimals", utility);
        }
    }

    #[test]
    fn empty_summary_still_writes_header() {
        let empty = AnalysisSummary {
            utilities: UtilityTable::new(),
            importance: ImportanceTable::new(),
            n_observations: 0,
        };
        let csv = MarkdownReportRenderer::new()
            .utilities_csv(&empty, &attributes())
            .unwrap();
        assert_eq!(csv.trim_end(), "attribute,level,utility,importance_pct");
    }

    #[test]
    fn report_lists_importance_then_utilities() {
        let report = MarkdownReportRenderer::new().analysis_report(&summary(), &BTreeMap::new());

        assert!(report.starts_with("# Conjoint Analysis Results\n"));
        assert!(report.contains("**Total observations:** 3"));
        assert!(report.contains("| Attribute | Importance (%) |"));
        assert!(report.contains("### price (importance: "));
        assert!(report.contains("| low | +"));
        assert!(!report.contains("## Segment Analysis"));

        let importance_at = report.find("## Attribute Importance").unwrap();
        let utilities_at = report.find("## Part-Worth Utilities").unwrap();
        assert!(importance_at < utilities_at);
    }

    #[test]
    fn report_includes_segments() {
        let records = vec![
            ChoiceRecord::chosen(1, Profile::new().with("price", "low").with("brand", "X"))
                .with_trait("age", "young"),
            ChoiceRecord::chosen(1, Profile::new().with("price", "high").with("brand", "X"))
                .with_trait("age", "old"),
        ];
        let overall = AnalysisSummary::compute(&records, &attributes());
        let segments = SegmentAnalyzer::analyze(&records, &attributes());

        let report = MarkdownReportRenderer::new().analysis_report(&overall, &segments);

        assert!(report.contains("## Segment Analysis"));
        assert!(report.contains("### By age"));
        assert!(report.contains("#### age=old (n=1)"));
        assert!(report.contains("#### age=young (n=1)"));
    }

    #[test]
    fn market_share_table_formats_rows() {
        let utilities = summary().utilities;
        let profiles = vec![
            Profile::new().with("price", "low").with("brand", "X"),
            Profile::new().with("price", "high").with("brand", "Y"),
        ];
        let shares = MarketSimulator::simulate(&utilities, &profiles);

        let table = MarkdownReportRenderer::new().market_share_table(&shares);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "| Profile | Utility | Choice Share |");
        assert_eq!(lines[1], "|---------|---------|-------------|");
        assert!(lines[2].starts_with("| price=low, brand=X | +"));
        assert!(lines[2].ends_with("% |"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn share_is_printed_with_one_decimal() {
        let shares = vec![MarketShare {
            profile: Profile::new().with("price", "low"),
            total_utility: -0.5,
            share: 0.12345,
        }];
        let table = MarkdownReportRenderer::new().market_share_table(&shares);
        assert!(table.contains("| price=low | -0.5000 | 12.3% |"));
    }
}
