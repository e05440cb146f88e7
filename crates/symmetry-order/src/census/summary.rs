//! Per-order classification counts.
//!
//! ## Purpose
//!
//! [`OrderSummary`] collects the domains detected at one symmetry order and
//! tracks, for every fold, superfamily and family, which domains fall in it.
//! [`OrderCensus`] holds one summary per order.
//!
//! ## Key concepts
//!
//! * **Member count**: the number of distinct domains in a group.
//! * **Ranking**: groups are listed by descending member count, ties broken
//!   by ascending identifier. The list is built explicitly and sorted once.
//!
//! ## Invariants
//!
//! * Orders below 2 are never tabulated.
//! * Adding the same domain twice does not change any count.

// External dependencies
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

// Internal dependencies
use crate::census::{CensusEntry, ExampleLevel};

/// Smallest order that counts as rotational symmetry.
pub const MIN_TABULATED_ORDER: usize = 2;

// ============================================================================
// Order Summary
// ============================================================================

/// Distinct classification groups detected at one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    order: usize,
    fold_domains: BTreeMap<String, BTreeSet<String>>,
    fold_superfamilies: BTreeMap<String, BTreeSet<String>>,
    superfamily_domains: BTreeMap<String, BTreeSet<String>>,
    family_domains: BTreeMap<String, BTreeSet<String>>,
}

impl OrderSummary {
    /// Create an empty summary for `order`.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            fold_domains: BTreeMap::new(),
            fold_superfamilies: BTreeMap::new(),
            superfamily_domains: BTreeMap::new(),
            family_domains: BTreeMap::new(),
        }
    }

    /// The symmetry order summarised.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Record one domain. The entry's own order is not checked.
    pub fn add(&mut self, entry: &CensusEntry) {
        let class = &entry.classification;
        let domain = &entry.structure_id;

        insert(&mut self.fold_domains, &class.fold, domain);
        insert(&mut self.fold_superfamilies, &class.fold, &class.superfamily);
        insert(&mut self.superfamily_domains, &class.superfamily, domain);
        insert(&mut self.family_domains, &class.family, domain);
    }

    /// Number of distinct folds.
    pub fn fold_count(&self) -> usize {
        self.fold_domains.len()
    }

    /// Number of distinct superfamilies.
    pub fn superfamily_count(&self) -> usize {
        self.superfamily_domains.len()
    }

    /// Number of distinct families.
    pub fn family_count(&self) -> usize {
        self.family_domains.len()
    }

    /// Number of distinct domains.
    pub fn domain_count(&self) -> usize {
        self.domains().len()
    }

    /// Distinct superfamilies within `fold` (0 for an unknown fold).
    pub fn superfamilies_in_fold(&self, fold: &str) -> usize {
        self.fold_superfamilies.get(fold).map_or(0, BTreeSet::len)
    }

    /// Groups at `level` with their member counts, most populated first.
    pub fn ranked(&self, level: ExampleLevel) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = match level {
            ExampleLevel::Fold => member_counts(&self.fold_domains),
            ExampleLevel::Superfamily => member_counts(&self.superfamily_domains),
            ExampleLevel::Family => member_counts(&self.family_domains),
            ExampleLevel::Domain => self.domains().into_iter().map(|d| (d, 1)).collect(),
        };

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    fn domains(&self) -> BTreeSet<String> {
        self.fold_domains.values().flatten().cloned().collect()
    }
}

fn insert(map: &mut BTreeMap<String, BTreeSet<String>>, key: &str, member: &str) {
    map.entry(key.to_owned())
        .or_default()
        .insert(member.to_owned());
}

fn member_counts(map: &BTreeMap<String, BTreeSet<String>>) -> Vec<(String, usize)> {
    map.iter()
        .map(|(key, members)| (key.clone(), members.len()))
        .collect()
}

// ============================================================================
// Order Census
// ============================================================================

/// Summaries for every tabulated order, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderCensus {
    summaries: BTreeMap<usize, OrderSummary>,
}

impl OrderCensus {
    /// Create an empty census.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabulate a batch of entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CensusEntry>,
    {
        let mut census = Self::new();
        for entry in entries {
            census.add(&entry);
        }
        census
    }

    /// Record one entry. Returns `false` if it was skipped as asymmetric.
    pub fn add(&mut self, entry: &CensusEntry) -> bool {
        if entry.order < MIN_TABULATED_ORDER {
            debug!(
                "Skipping {} with order {}",
                entry.structure_id, entry.order
            );
            return false;
        }

        self.summaries
            .entry(entry.order)
            .or_insert_with(|| OrderSummary::new(entry.order))
            .add(entry);
        true
    }

    /// Summary for one order, if any entry had it.
    pub fn get(&self, order: usize) -> Option<&OrderSummary> {
        self.summaries.get(&order)
    }

    /// Summaries in ascending order.
    pub fn summaries(&self) -> impl Iterator<Item = &OrderSummary> {
        self.summaries.values()
    }

    /// Number of distinct orders tabulated.
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    /// Whether nothing was tabulated.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl FromIterator<CensusEntry> for OrderCensus {
    fn from_iter<I: IntoIterator<Item = CensusEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
