use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use survey_core::{FeedbackRecord, Theme};

/// How many department groups the admin chart shows.
pub const DISPLAY_DEPARTMENTS: usize = 10;

/// Record count per preferred theme. Every theme has a bucket, zero or not.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeDistribution {
    pub green: usize,
    pub purple: usize,
    pub blue: usize,
}

impl ThemeDistribution {
    pub fn count(&self, theme: Theme) -> usize {
        match theme {
            Theme::Green => self.green,
            Theme::Purple => self.purple,
            Theme::Blue => self.blue,
        }
    }

    fn bump(&mut self, theme: Theme) {
        match theme {
            Theme::Green => self.green += 1,
            Theme::Purple => self.purple += 1,
            Theme::Blue => self.blue += 1,
        }
    }

    pub fn buckets(&self) -> [(Theme, usize); 3] {
        Theme::ALL.map(|t| (t, self.count(t)))
    }

    pub fn total(&self) -> usize {
        self.green + self.purple + self.blue
    }

    /// Bucket with the highest count, `None` when nothing was submitted.
    /// On a tie the theme earlier in display order is returned.
    pub fn most_popular(&self) -> Option<Theme> {
        let mut best: Option<(Theme, usize)> = None;
        for (theme, count) in self.buckets() {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if top >= count => {}
                _ => best = Some((theme, count)),
            }
        }
        best.map(|(theme, _)| theme)
    }

    /// Share of `theme` in percent, 0.0 when empty.
    pub fn share(&self, theme: Theme) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(theme) as f64 * 100.0 / total as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentCounts {
    pub department: String,
    pub green: usize,
    pub purple: usize,
    pub blue: usize,
}

impl DepartmentCounts {
    fn new(department: &str) -> Self {
        Self {
            department: department.to_string(),
            green: 0,
            purple: 0,
            blue: 0,
        }
    }

    pub fn count(&self, theme: Theme) -> usize {
        match theme {
            Theme::Green => self.green,
            Theme::Purple => self.purple,
            Theme::Blue => self.blue,
        }
    }

    pub fn total(&self) -> usize {
        self.green + self.purple + self.blue
    }
}

pub fn theme_distribution(records: &[FeedbackRecord]) -> ThemeDistribution {
    records
        .iter()
        .fold(ThemeDistribution::default(), |mut acc, r| {
            acc.bump(r.preferred_color);
            acc
        })
}

/// Per-department theme counts, groups in the order each department first
/// appears in `records`. All groups are returned.
pub fn department_breakdown(records: &[FeedbackRecord]) -> Vec<DepartmentCounts> {
    let mut groups: Vec<DepartmentCounts> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let slot = *index.entry(record.department.as_str()).or_insert_with(|| {
            groups.push(DepartmentCounts::new(&record.department));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        match record.preferred_color {
            Theme::Green => group.green += 1,
            Theme::Purple => group.purple += 1,
            Theme::Blue => group.blue += 1,
        }
    }
    groups
}

/// The groups the admin chart draws. Borrows, never trims the aggregation.
pub fn top_departments(breakdown: &[DepartmentCounts]) -> &[DepartmentCounts] {
    &breakdown[..breakdown.len().min(DISPLAY_DEPARTMENTS)]
}

/// Records whose `created_at`, seen in `tz`, falls on `date`.
pub fn count_on_date<Tz: TimeZone>(records: &[FeedbackRecord], date: NaiveDate, tz: &Tz) -> usize {
    records
        .iter()
        .filter(|r| r.created_at.with_timezone(tz).date_naive() == date)
        .count()
}

pub fn today_count(records: &[FeedbackRecord]) -> usize {
    count_on_date(records, Local::now().date_naive(), &Local)
}

/// Everything the admin view shows, recomputed from scratch on each load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurveyReport {
    pub total: usize,
    pub today: usize,
    pub most_popular: Option<Theme>,
    pub distribution: ThemeDistribution,
    pub departments: Vec<DepartmentCounts>,
}

impl SurveyReport {
    pub fn build<Tz: TimeZone>(records: &[FeedbackRecord], today: NaiveDate, tz: &Tz) -> Self {
        let distribution = theme_distribution(records);
        Self {
            total: records.len(),
            today: count_on_date(records, today, tz),
            most_popular: distribution.most_popular(),
            distribution,
            departments: department_breakdown(records),
        }
    }

    pub fn now(records: &[FeedbackRecord]) -> Self {
        Self::build(records, Local::now().date_naive(), &Local)
    }
}
