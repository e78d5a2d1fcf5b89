//! Answers to read-only browse queries.

use super::{BrowseQuery, Directive, Keyboard, SubmissionDetail, SubmissionListEntry};
use crate::domain::foundation::UserId;
use crate::domain::review::RecordSet;
use crate::domain::summary::SummaryCalculator;

pub const REVIEW_NOT_FOUND: &str = "Review not found.";
pub const USER_NOT_FOUND: &str = "User not found.";
pub const AMBIGUOUS_REVIEWER: &str =
    "Several reviewers share this name. Please pick the review from the list again.";

/// Resolves a browse query against a loaded record-set.
pub fn answer_query(records: &RecordSet, query: BrowseQuery) -> Directive {
    match query {
        BrowseQuery::Submissions => list_submissions(records),
        BrowseQuery::Summary => Directive::SummaryReport(SummaryCalculator::summarize(records)),
        BrowseQuery::Select {
            display_name,
            number,
            user_id,
        } => select_submission(records, &display_name, number, user_id.as_ref()),
    }
}

/// One entry per stored submission, reviewer by reviewer.
pub fn list_submissions(records: &RecordSet) -> Directive {
    let entries = records
        .iter()
        .flat_map(|(user_id, record)| {
            (1..=record.reviews.len()).map(move |number| SubmissionListEntry {
                user_id: user_id.clone(),
                display_name: record.name.clone(),
                number,
            })
        })
        .collect();
    Directive::SubmissionList { entries }
}

/// Looks up the `number`-th (1-based) submission of a reviewer.
///
/// The stable identifier wins when given; a bare display name must match
/// exactly one reviewer.
pub fn select_submission(
    records: &RecordSet,
    display_name: &str,
    number: usize,
    user_id: Option<&UserId>,
) -> Directive {
    let found = match user_id {
        Some(id) => records.get(id).map(|record| (id, record)),
        None => {
            let mut matches = records.find_by_display_name(display_name);
            let first = matches.next();
            if matches.next().is_some() {
                return Directive::error(AMBIGUOUS_REVIEWER, Keyboard::MainMenu);
            }
            first
        }
    };

    let Some((user_id, record)) = found else {
        return Directive::error(USER_NOT_FOUND, Keyboard::MainMenu);
    };
    let Some(submission) = record.submission(number) else {
        return Directive::error(REVIEW_NOT_FOUND, Keyboard::MainMenu);
    };

    Directive::SubmissionDetail(SubmissionDetail {
        user_id: user_id.clone(),
        display_name: record.name.clone(),
        display_handle: record.nickname.clone(),
        number,
        submission: submission.clone(),
    })
}
