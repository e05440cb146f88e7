//! Layer 7: Census
//!
//! # Purpose
//!
//! Downstream tabulation of detected orders. Given already-resolved
//! classification identifiers for each structure, this layer groups results
//! by symmetry order, counts distinct folds, superfamilies, families and
//! domains per order, and renders delimiter-configurable reports.
//!
//! Classification lookups and report persistence stay with the caller.

/// Per-order counts and rankings.
pub mod summary;

/// Tabular and human-readable rendering.
pub mod report;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Resolved classification of one domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    /// Fold identifier (e.g. `b.42`).
    pub fold: String,

    /// Superfamily identifier (e.g. `b.42.1`).
    pub superfamily: String,

    /// Family identifier (e.g. `b.42.1.1`).
    pub family: String,
}

impl Classification {
    /// Build a classification from its three identifiers.
    pub fn new(
        fold: impl Into<String>,
        superfamily: impl Into<String>,
        family: impl Into<String>,
    ) -> Self {
        Self {
            fold: fold.into(),
            superfamily: superfamily.into(),
            family: family.into(),
        }
    }
}

/// One detection result ready to be tabulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusEntry {
    /// Domain identifier of the structure.
    pub structure_id: String,

    /// Detected symmetry order.
    pub order: usize,

    /// Classification of the domain.
    pub classification: Classification,
}

impl CensusEntry {
    /// Pair a structure with its order and classification.
    pub fn new(structure_id: impl Into<String>, order: usize, classification: Classification) -> Self {
        Self {
            structure_id: structure_id.into(),
            order,
            classification,
        }
    }
}

/// Classification level used to pick report examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExampleLevel {
    /// Folds.
    Fold,

    /// Superfamilies.
    #[default]
    Superfamily,

    /// Families.
    Family,

    /// Individual domains.
    Domain,
}

impl Display for ExampleLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            ExampleLevel::Fold => "fold",
            ExampleLevel::Superfamily => "superfamily",
            ExampleLevel::Family => "family",
            ExampleLevel::Domain => "domain",
        };
        f.write_str(name)
    }
}
