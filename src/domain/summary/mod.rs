//! Summary domain module.
//!
//! Pure aggregation over the record-set; never touches storage itself.

mod calculator;

pub use calculator::{Average, CriterionAverage, ReviewSummary, SummaryCalculator};
