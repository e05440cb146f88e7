//! Report rendering for an [`OrderCensus`].
//!
//! The table has one header line and one line per order:
//!
//! ```text
//! order  N folds  N superfamilies  N families  N domains  examples
//! 2      1        2                2           2          SF1  SF2
//! ```
//!
//! Column and line delimiters, the example level and the number of examples
//! are configurable through [`ReportFormat`].

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::census::ExampleLevel;
use crate::census::summary::{OrderCensus, OrderSummary};

const HEADER: [&str; 6] = [
    "order",
    "N folds",
    "N superfamilies",
    "N families",
    "N domains",
    "examples",
];

// Folds listed per order in the human-readable summary.
const DISPLAY_FOLD_LIMIT: usize = 10;

const BANNER_WIDTH: usize = 53;

/// Layout of the tabular report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    /// Level whose groups are listed as examples.
    pub example_level: ExampleLevel,

    /// Maximum number of examples per order.
    pub example_limit: usize,

    /// Separator between columns.
    pub column_delimiter: String,

    /// Terminator of each line.
    pub line_delimiter: String,

    /// Separator between examples.
    pub example_separator: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            example_level: ExampleLevel::Superfamily,
            example_limit: 16,
            column_delimiter: "\t".to_owned(),
            line_delimiter: "\n".to_owned(),
            example_separator: "\t".to_owned(),
        }
    }
}

impl OrderCensus {
    /// Render the census as a delimited table.
    pub fn to_table(&self, format: &ReportFormat) -> String {
        let tab = format.column_delimiter.as_str();
        let newline = format.line_delimiter.as_str();

        let mut out = HEADER.join(tab);
        out.push_str(newline);

        for summary in self.summaries() {
            let counts = [
                summary.order(),
                summary.fold_count(),
                summary.superfamily_count(),
                summary.family_count(),
                summary.domain_count(),
            ];
            for count in counts {
                out.push_str(&count.to_string());
                out.push_str(tab);
            }

            let examples: Vec<String> = summary
                .ranked(format.example_level)
                .into_iter()
                .take(format.example_limit)
                .map(|(key, _)| key)
                .collect();
            out.push_str(&examples.join(format.example_separator.as_str()));
            out.push_str(newline);
        }

        out
    }
}

impl OrderSummary {
    /// Counts for this order plus its `limit` most populated folds.
    pub fn describe(&self, limit: usize) -> String {
        let mut out = format!(
            "{} domains, {} families, {} superfamilies, {} folds for order={}:\n",
            self.domain_count(),
            self.family_count(),
            self.superfamily_count(),
            self.fold_count(),
            self.order()
        );
        out.push_str("fold\tN domains\tN SFs\n");
        for (fold, domains) in self.ranked(ExampleLevel::Fold).into_iter().take(limit) {
            let superfamilies = self.superfamilies_in_fold(&fold);
            out.push_str(&format!("{fold}\t{domains}\t{superfamilies}\n"));
        }
        out
    }
}

impl Display for OrderSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.describe(5))
    }
}

impl Display for OrderCensus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for summary in self.summaries() {
            let title = format!(" {} ", summary.order());
            writeln!(f, "{:=^width$}", title, width = BANNER_WIDTH)?;
            f.write_str(&summary.describe(DISPLAY_FOLD_LIMIT))?;
            writeln!(f, "{:=<width$}", "", width = BANNER_WIDTH)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
