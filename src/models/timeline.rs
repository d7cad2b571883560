use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Confirmed,
    Deaths,
    Recovered,
}

/// Statistic name to its time series.
pub type Timelines = BTreeMap<Statistic, Timeline>;

/// Counts of one statistic keyed by ISO-8601 timestamp.
///
/// Keys sort chronologically, so the last entry is the most recent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    history: BTreeMap<String, u64>,
}

#[derive(Serialize)]
struct TimelineBody<'a> {
    latest: u64,
    timeline: &'a BTreeMap<String, u64>,
}

impl Timeline {
    pub fn new<I, K>(history: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        Self {
            history: history.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn latest(&self) -> Option<u64> {
        self.history.values().next_back().copied()
    }

    pub fn history(&self) -> &BTreeMap<String, u64> {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TimelineBody {
            latest: self.latest().unwrap_or(0),
            timeline: &self.history,
        }
        .serialize(serializer)
    }
}
