use serde::Deserialize;

use crate::dto::truthy_text;
use crate::view_model::{detail_content, DetailView};
use crate::{ApiRequest, ApiResult, JobDetail, NETWORK_ERROR};

pub const LOADING_DETAIL: &str = "Loading job details...";
pub const MISSING_CONTEXT: &str = "Error: Missing Job ID or Login";
pub const MALFORMED_DETAIL: &str = "Error: Malformed job details";

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Status(String),
    Loaded(Box<JobDetail>),
}

/// Read-only job detail section, used on its own page and on the apply page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    state: DetailState,
}

impl DetailPanel {
    /// Prepares the panel and returns the lookup to send, if both the user and
    /// the job are known.
    pub fn load(email: Option<&str>, job_id: Option<&str>) -> (Self, Option<ApiRequest>) {
        match (email, job_id) {
            (Some(email), Some(job_id)) => (
                Self {
                    state: DetailState::Status(LOADING_DETAIL.to_string()),
                },
                Some(ApiRequest::JobDetail {
                    email: email.to_string(),
                    job_id: job_id.to_string(),
                }),
            ),
            _ => (
                Self {
                    state: DetailState::Status(MISSING_CONTEXT.to_string()),
                },
                None,
            ),
        }
    }

    pub fn apply_reply(&mut self, result: ApiResult) {
        self.state = match result {
            Ok(reply) => {
                if let Some(error) = truthy_text(&reply.body, "error") {
                    DetailState::Status(format!("Error: {error}"))
                } else {
                    match JobDetail::deserialize(&reply.body) {
                        Ok(job) => DetailState::Loaded(Box::new(job)),
                        Err(_) => DetailState::Status(MALFORMED_DETAIL.to_string()),
                    }
                }
            }
            Err(failure) => DetailState::Status(failure.user_text(NETWORK_ERROR)),
        };
    }

    pub fn view(&self) -> DetailView {
        match &self.state {
            DetailState::Status(text) => DetailView::Status(text.clone()),
            DetailState::Loaded(job) => DetailView::Loaded(Box::new(detail_content(job))),
        }
    }
}
