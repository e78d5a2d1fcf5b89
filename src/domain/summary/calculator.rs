//! Summary Calculator - averages over every stored submission.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::Rating;
use crate::domain::review::{Criterion, RecordSet, Submission};

/// Mean of a metric, or `NoData` when nothing contributed to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    NoData,
    Value(f64),
}

impl Average {
    /// Averages the ratings; an empty input is `NoData`.
    pub fn of(ratings: impl IntoIterator<Item = Rating>) -> Self {
        let (sum, count) = ratings
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r.value()), count + 1));
        if count == 0 {
            Average::NoData
        } else {
            Average::Value(sum as f64 / count as f64)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Average::NoData => None,
            Average::Value(v) => Some(*v),
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::NoData => f.write_str("No data"),
            Average::Value(v) => write!(f, "{:.2}/5", v),
        }
    }
}

/// Serialized as a number, or `null` for no data.
impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Average rating for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionAverage {
    pub criterion: Criterion,
    pub average: Average,
}

/// Aggregate view over the whole record-set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub submission_count: usize,
    pub satisfaction: Average,
    pub interaction_process: Average,
    pub criteria: Vec<CriterionAverage>,
}

impl ReviewSummary {
    pub fn criterion(&self, criterion: Criterion) -> Average {
        self.criteria
            .iter()
            .find(|c| c.criterion == criterion)
            .map(|c| c.average)
            .unwrap_or(Average::NoData)
    }
}

/// Stateless calculator over a record-set.
pub struct SummaryCalculator;

impl SummaryCalculator {
    pub fn summarize(records: &RecordSet) -> ReviewSummary {
        let submissions: Vec<&Submission> = records.submissions().collect();

        let criteria = Criterion::ALL
            .iter()
            .map(|criterion| CriterionAverage {
                criterion: *criterion,
                average: Average::of(
                    submissions
                        .iter()
                        .filter_map(|s| s.criterion_rating(*criterion)),
                ),
            })
            .collect();

        ReviewSummary {
            submission_count: submissions.len(),
            satisfaction: Average::of(submissions.iter().map(|s| s.satisfaction_rating())),
            interaction_process: Average::of(
                submissions.iter().map(|s| s.interaction_process_rating()),
            ),
            criteria,
        }
    }
}
