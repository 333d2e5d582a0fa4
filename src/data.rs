use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named integer counters fetched upstream (commits, stars, prs, issues,
/// repos). Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stats {
    counters: BTreeMap<String, u64>,
}

impl Stats {
    pub fn get(&self, metric: &str) -> u64 {
        self.counters.get(metric).copied().unwrap_or(0)
    }

    pub fn set(&mut self, metric: impl Into<String>, value: u64) {
        self.counters.insert(metric.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl FromIterator<(String, u64)> for Stats {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self {
            counters: iter.into_iter().collect(),
        }
    }
}

/// Language name to byte count, as reported by the data provider.
pub type Languages = BTreeMap<String, u64>;

/// Contribution counts over the trailing year, plus two scalars supplied
/// by the provider. `total` and `streak` are independent of the display
/// window and are never recomputed from `counts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    #[serde(default, alias = "weeks", alias = "days")]
    pub counts: Vec<u64>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub streak: u64,
}
