use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_SLUG_LENGTH: usize = 255;

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("slug pattern is a valid regex")
    })
}

//
// ──────────────────────────────────────────────────────────
// Topic Name
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicNameError {
    #[error("The name field is required.")]
    Empty,

    #[error("The name may not be greater than 255 characters.")]
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicName(String);

impl TopicName {
    pub fn parse(raw: &str) -> Result<Self, TopicNameError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(TopicNameError::Empty);
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(TopicNameError::TooLong);
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Topic Slug
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicSlugError {
    #[error("The slug field is required.")]
    Empty,

    #[error("The slug may not be greater than 255 characters.")]
    TooLong,

    #[error("The slug may only contain letters, numbers and single hyphens.")]
    InvalidFormat,
}

/// URL-safe identifier: alphanumeric runs separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicSlug(String);

impl TopicSlug {
    pub fn parse(raw: &str) -> Result<Self, TopicSlugError> {
        if raw.is_empty() {
            return Err(TopicSlugError::Empty);
        }

        if raw.chars().count() > MAX_SLUG_LENGTH {
            return Err(TopicSlugError::TooLong);
        }

        if !slug_pattern().is_match(raw) {
            return Err(TopicSlugError::InvalidFormat);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Association Sync Plan
// ──────────────────────────────────────────────────────────
//

/// Difference between the linked posts of a topic and the desired set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub attach: Vec<Uuid>,
    pub detach: Vec<Uuid>,
}

impl SyncPlan {
    /// `attach` keeps the order of `desired`, `detach` the order of `current`.
    /// Duplicates in either input collapse.
    pub fn compute(current: &[Uuid], desired: &[Uuid]) -> Self {
        let current_set: HashSet<Uuid> = current.iter().copied().collect();
        let desired_set: HashSet<Uuid> = desired.iter().copied().collect();

        let mut seen = HashSet::new();
        let attach = desired
            .iter()
            .copied()
            .filter(|id| !current_set.contains(id) && seen.insert(*id))
            .collect();

        let mut seen = HashSet::new();
        let detach = current
            .iter()
            .copied()
            .filter(|id| !desired_set.contains(id) && seen.insert(*id))
            .collect();

        Self { attach, detach }
    }

    pub fn is_noop(&self) -> bool {
        self.attach.is_empty() && self.detach.is_empty()
    }
}

/// Removes repeated ids while keeping first occurrences in place.
pub fn dedup_ids(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
