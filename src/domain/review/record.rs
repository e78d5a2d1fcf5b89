//! Persisted record-set: every reviewer's submission history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Submission;
use crate::domain::foundation::UserId;

/// Display fields captured from the transport when a submission is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerProfile {
    display_name: String,
    display_handle: String,
}

impl ReviewerProfile {
    pub fn new(display_name: impl Into<String>, display_handle: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            display_handle: display_handle.into(),
        }
    }

    /// Builds the profile from transport user fields.
    ///
    /// Name is "first last" (missing parts skipped); handle is `@username`
    /// or "No username".
    pub fn from_transport(
        first_name: &str,
        last_name: Option<&str>,
        username: Option<&str>,
    ) -> Self {
        let display_name = [Some(first_name), last_name]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let display_handle = match username.map(str::trim) {
            Some(name) if !name.is_empty() => format!("@{}", name),
            _ => "No username".to_string(),
        };
        Self::new(display_name, display_handle)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn display_handle(&self) -> &str {
        &self.display_handle
    }
}

/// One reviewer's entry in the record-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerRecord {
    pub name: String,
    pub nickname: String,
    pub reviews: Vec<Submission>,
}

impl ReviewerRecord {
    /// Returns the submission at a 1-based position.
    pub fn submission(&self, number: usize) -> Option<&Submission> {
        number.checked_sub(1).and_then(|index| self.reviews.get(index))
    }
}

/// Mapping from user identifier to that user's submissions.
///
/// Iteration order is by user identifier so listings are stable across loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(BTreeMap<UserId, ReviewerRecord>);

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a submission, creating the reviewer record if needed.
    ///
    /// Display fields are always overwritten with the latest profile.
    pub fn append(&mut self, user_id: UserId, submission: Submission, profile: &ReviewerProfile) {
        let record = self.0.entry(user_id).or_insert_with(|| ReviewerRecord {
            name: String::new(),
            nickname: String::new(),
            reviews: Vec::new(),
        });
        record.name = profile.display_name().to_string();
        record.nickname = profile.display_handle().to_string();
        record.reviews.push(submission);
    }

    /// Drops records without submissions; such entries never describe a reviewer.
    pub fn normalized(mut self) -> Self {
        self.0.retain(|_, record| !record.reviews.is_empty());
        self
    }

    pub fn get(&self, user_id: &UserId) -> Option<&ReviewerRecord> {
        self.0.get(user_id)
    }

    /// All records whose display name equals `name`.
    pub fn find_by_display_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a UserId, &'a ReviewerRecord)> + 'a {
        self.0.iter().filter(move |(_, record)| record.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UserId, &ReviewerRecord)> {
        self.0.iter()
    }

    /// Every stored submission, reviewer by reviewer.
    pub fn submissions(&self) -> impl Iterator<Item = &Submission> {
        self.0.values().flat_map(|record| record.reviews.iter())
    }

    pub fn submission_count(&self) -> usize {
        self.0.values().map(|record| record.reviews.len()).sum()
    }

    pub fn reviewer_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
