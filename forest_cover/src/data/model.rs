// Country records as the viewer sees them. The JSON wire shape lives in loader.rs;
// conversion and validation happen there.

use std::collections::BTreeMap;
use std::fmt;

/// Hectares represented by a single tree.
pub const HECTARES_PER_TREE: f64 = 1000.0;
/// Most trees a single figure may stand for (a billion hectares).
pub const MAX_TREES: usize = 1_000_000;

/// A `start-end` year range keying gain/loss figures, e.g. `2000-2005`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub start: u16,
    pub end: u16,
}

impl Period {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Key of the gain column for this period.
    pub fn gain_key(&self) -> String {
        format!("{self} umd_tree_cover_gain__ha")
    }

    /// Key of the loss column for this period.
    pub fn loss_key(&self) -> String {
        format!("{self}_cover_loss")
    }

    /// Parses the `start-end` prefix used by the dataset columns.
    pub fn parse(raw: &str) -> Option<Self> {
        let (start, end) = raw.split_once('-')?;
        let start = start.trim().parse().ok()?;
        let end = end.trim().parse().ok()?;
        (end > start).then_some(Self { start, end })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Forest gained and lost within one period, in hectares.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PeriodChange {
    pub gain_ha: f64,
    pub loss_ha: f64,
}

impl PeriodChange {
    pub fn trees_gained(&self) -> usize {
        trees_for(self.gain_ha)
    }

    pub fn trees_lost(&self) -> usize {
        trees_for(self.loss_ha)
    }
}

/// One country's baseline cover and per-period changes.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    pub iso: String,
    pub country: String,
    pub basic_ha: f64,
    pub changes: BTreeMap<Period, PeriodChange>,
}

impl CountryRecord {
    /// Number of trees standing for the baseline cover.
    pub fn baseline_trees(&self) -> usize {
        trees_for(self.basic_ha)
    }

    /// Change recorded for exactly `period`, if any.
    pub fn change_for(&self, period: Period) -> Option<PeriodChange> {
        self.changes.get(&period).copied()
    }
}

/// All loaded records, in file order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<CountryRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position_of(&self, iso: &str) -> Option<usize> {
        self.records.iter().position(|r| r.iso == iso)
    }
}

/// Whole trees for `hectares`, capped at `MAX_TREES`.
pub fn trees_for(hectares: f64) -> usize {
    if hectares.is_finite() && hectares > 0.0 {
        ((hectares / HECTARES_PER_TREE).floor() as usize).min(MAX_TREES)
    } else {
        0
    }
}

/// Whether `hectares` fits under `MAX_TREES` trees.
pub fn within_tree_cap(hectares: f64) -> bool {
    hectares / HECTARES_PER_TREE <= MAX_TREES as f64
}
