use crate::theme::{Theme, ViewProgress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Form state as the respondent fills it in. Nothing here is trimmed yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackInput {
    pub name: String,
    pub department: String,
    pub preferred_color: Option<Theme>,
    #[serde(default)]
    pub remark: String,
}

/// Required fields present after trimming and a theme picked. The remark is
/// never checked.
pub fn validate(input: &FeedbackInput) -> bool {
    !input.name.trim().is_empty()
        && !input.department.trim().is_empty()
        && input.preferred_color.is_some()
}

/// Insert payload for the feedback table. `id` and `created_at` are left to
/// the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub department: String,
    pub preferred_color: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub viewed_green: bool,
    pub viewed_purple: bool,
    pub viewed_blue: bool,
}

impl NewFeedback {
    /// Normalizes a validated form against the current progress snapshot.
    /// Returns `None` when the form does not pass [`validate`].
    pub fn from_input(input: &FeedbackInput, progress: ViewProgress) -> Option<Self> {
        if !validate(input) {
            return None;
        }
        let preferred_color = input.preferred_color?;
        let remark = input.remark.trim();
        Some(Self {
            name: input.name.trim().to_string(),
            department: input.department.trim().to_string(),
            preferred_color,
            remark: (!remark.is_empty()).then(|| remark.to_string()),
            viewed_green: progress.green,
            viewed_purple: progress.purple,
            viewed_blue: progress.blue,
        })
    }

    /// Same rule as [`validate`], applied to an already-built payload as it
    /// arrives at the table.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.department.trim().is_empty()
    }

    pub fn viewed(&self) -> ViewProgress {
        ViewProgress {
            green: self.viewed_green,
            purple: self.viewed_purple,
            blue: self.viewed_blue,
        }
    }
}

/// A stored feedback row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub department: String,
    pub preferred_color: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub viewed_green: bool,
    pub viewed_purple: bool,
    pub viewed_blue: bool,
}

impl FeedbackRecord {
    pub fn from_new(new: NewFeedback, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            name: new.name,
            department: new.department,
            preferred_color: new.preferred_color,
            remark: new.remark,
            viewed_green: new.viewed_green,
            viewed_purple: new.viewed_purple,
            viewed_blue: new.viewed_blue,
        }
    }
}

/// Table order: most recent `created_at` first.
pub fn newest_first(records: &mut [FeedbackRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
