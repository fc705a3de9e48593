use crate::table::{FeedbackTable, TableError};
use async_trait::async_trait;
use std::time::Duration;
use survey_core::{FeedbackRecord, NewFeedback};

/// Feedback table reached over HTTP (`POST /feedback`, `GET /feedback`).
#[derive(Clone)]
pub struct HttpTable {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTable {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TableError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn feedback_url(&self) -> String {
        format!("{}/feedback", self.base_url)
    }
}

#[async_trait]
impl FeedbackTable for HttpTable {
    async fn insert(&self, record: &NewFeedback) -> Result<FeedbackRecord, TableError> {
        let stored = self
            .client
            .post(self.feedback_url())
            .json(record)
            .send()
            .await?
            .error_for_status()?
            .json::<FeedbackRecord>()
            .await?;
        Ok(stored)
    }

    async fn load_all(&self) -> Result<Vec<FeedbackRecord>, TableError> {
        let records = self
            .client
            .get(self.feedback_url())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<FeedbackRecord>>()
            .await?;
        Ok(records)
    }
}
