use corkboard_core::{AppConfig, CorkboardError, CorkboardResult};
use corkboard_domain::Board;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::parse::board_from_response;
use crate::prompt::GENERATOR_PROMPT;

/// Handle for a submitted generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId(String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a generation job, as reported by the status endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Done { result: String },
    Error { error: String },
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    prompt: &'a str,
    #[serde(rename = "userInput")]
    user_input: &'a str,
}

#[derive(Deserialize)]
struct SubmitResponse {
    #[serde(rename = "jobId")]
    job_id: String,
}

/// Client for the template generator endpoint.
///
/// The endpoint splits generation into a submit call and a status poll so
/// the serving platform's request-duration cap never bites; this client
/// keeps that contract and drives the poll loop itself, bounded and
/// cancellable.
pub struct TemplateClient {
    http: reqwest::Client,
    base_url: String,
    poll_interval: Duration,
    max_attempts: u32,
}

impl TemplateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            poll_interval: Duration::from_secs(2),
            max_attempts: 20,
        }
    }

    /// `None` when no endpoint is configured; callers surface that as an
    /// inline message rather than an error.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        let endpoint = config.template_endpoint.clone()?;
        Some(
            Self::new(endpoint).with_polling(
                Duration::from_secs(config.effective_poll_interval_secs()),
                config.effective_poll_max_attempts(),
            ),
        )
    }

    pub fn with_polling(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = interval;
        self.max_attempts = max_attempts;
        self
    }

    /// Submit a generation job. The fixed generator prompt is sent along
    /// with the user's instruction.
    pub async fn submit(&self, user_instruction: &str) -> CorkboardResult<JobId> {
        let url = format!("{}/api/template", self.base_url);
        let body = SubmitRequest {
            prompt: GENERATOR_PROMPT,
            user_input: user_instruction,
        };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CorkboardError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| CorkboardError::Http(e.to_string()))?;
        let submitted: SubmitResponse = response
            .json()
            .await
            .map_err(|e| CorkboardError::Http(e.to_string()))?;
        tracing::debug!("template job {} submitted", submitted.job_id);
        Ok(JobId(submitted.job_id))
    }

    pub async fn poll_status(&self, job: &JobId) -> CorkboardResult<JobStatus> {
        let url = format!("{}/api/template-status", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("id", job.0.as_str())])
            .send()
            .await
            .map_err(|e| CorkboardError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| CorkboardError::Http(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| CorkboardError::Http(e.to_string()))
    }

    /// Submit and poll to completion, decoding the generated template into
    /// a board. Polls on a fixed interval up to the attempt cap; the
    /// cancellation token stops the loop as soon as the caller loses
    /// interest in the result.
    pub async fn generate(
        &self,
        user_instruction: &str,
        cancel: &CancellationToken,
    ) -> CorkboardResult<Board> {
        let job = self.submit(user_instruction).await?;
        for attempt in 1..=self.max_attempts {
            tokio::select! {
                _ = cancel.cancelled() => {
                    return Err(CorkboardError::Cancelled(format!(
                        "template job {job} abandoned"
                    )));
                }
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
            match self.poll_status(&job).await? {
                JobStatus::Pending => {
                    tracing::debug!("template job {job} pending (attempt {attempt})");
                }
                JobStatus::Done { result } => return board_from_response(&result),
                JobStatus::Error { error } => return Err(CorkboardError::Http(error)),
            }
        }
        Err(CorkboardError::Timeout(format!(
            "template job {job} still pending after {} polls",
            self.max_attempts
        )))
    }
}
