use crate::detail::{DetailPanel, MISSING_CONTEXT};
use crate::dto::{flag, truthy_text};
use crate::view_model::{ApplyView, ButtonView, StatusLine};
use crate::{ApiRequest, ApiResult};

/// Server error that is still treated as an accepted application.
///
/// Open product question: nobody has confirmed whether an education mismatch
/// is meant to count as a partial accept or is a server-side bug.
pub const EDUCATION_SHORTFALL: &str = "user education is less than job requires";

pub const SUBMITTING: &str = "Submitting...";
pub const SUBMIT_NETWORK_ERROR: &str = "Network Error. Please try again.";
pub const CONFIRM_LABEL: &str = "Confirm";

pub fn is_education_shortfall(error: &str) -> bool {
    error.contains(EDUCATION_SHORTFALL)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Accepted,
    /// Accepted through the education-shortfall rule; carries the server text.
    AcceptedWithShortfall(String),
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyPage {
    job_id: Option<String>,
    detail: DetailPanel,
    submitting: bool,
    message: Option<StatusLine>,
}

impl ApplyPage {
    pub fn load(email: Option<&str>, job_id: Option<String>) -> (Self, Option<ApiRequest>) {
        let (detail, request) = DetailPanel::load(email, job_id.as_deref());
        let page = Self {
            job_id,
            detail,
            submitting: false,
            message: None,
        };
        (page, request)
    }

    pub fn detail_mut(&mut self) -> &mut DetailPanel {
        &mut self.detail
    }

    /// Starts the submission; a second click while in flight does nothing.
    pub fn confirm(&mut self, email: Option<&str>) -> Option<ApiRequest> {
        if self.submitting {
            return None;
        }
        let (Some(email), Some(job_id)) = (email, self.job_id.as_deref()) else {
            self.message = Some(StatusLine::error(MISSING_CONTEXT));
            return None;
        };
        self.submitting = true;
        self.message = Some(StatusLine::info(SUBMITTING));
        Some(ApiRequest::SubmitApplication {
            email: email.to_string(),
            job_id: job_id.to_string(),
        })
    }

    pub fn apply_reply(&mut self, result: ApiResult) -> ApplyOutcome {
        let error_text = match result {
            Ok(reply) => {
                if flag(&reply.body, "applied_for_job") {
                    return ApplyOutcome::Accepted;
                }
                match truthy_text(&reply.body, "error") {
                    Some(error) if is_education_shortfall(&error) => {
                        return ApplyOutcome::AcceptedWithShortfall(error);
                    }
                    Some(error) => format!("Error: {error}"),
                    None => "Error".to_string(),
                }
            }
            Err(failure) => failure.user_text(SUBMIT_NETWORK_ERROR),
        };
        self.submitting = false;
        self.message = Some(StatusLine::error(error_text));
        ApplyOutcome::Rejected
    }

    pub fn view(&self) -> ApplyView {
        ApplyView {
            detail: self.detail.view(),
            confirm: ButtonView {
                label: (if self.submitting { SUBMITTING } else { CONFIRM_LABEL }).to_string(),
                enabled: !self.submitting,
            },
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiReply, RequestFailure, TransportFailure};
    use serde_json::json;

    fn submitting_page() -> ApplyPage {
        let (mut page, _) = ApplyPage::load(Some("a@gmail.com"), Some("9".into()));
        assert!(page.confirm(Some("a@gmail.com")).is_some());
        page
    }

    #[test]
    fn confirm_disables_button_and_blocks_double_submit() {
        let mut page = submitting_page();
        let view = page.view();
        assert_eq!(view.confirm.label, "Submitting...");
        assert!(!view.confirm.enabled);
        assert_eq!(view.message, Some(StatusLine::info("Submitting...")));
        assert_eq!(page.confirm(Some("a@gmail.com")), None);
    }

    #[test]
    fn shortfall_matches_as_substring() {
        assert!(is_education_shortfall(
            "Cannot apply: user education is less than job requires (2 < 3)"
        ));
        assert!(!is_education_shortfall("user education is unknown"));
        let mut page = submitting_page();
        let outcome = page.apply_reply(Ok(ApiReply::new(
            400,
            json!({"error": "user education is less than job requires"}),
        )));
        assert!(matches!(outcome, ApplyOutcome::AcceptedWithShortfall(_)));
    }

    #[test]
    fn other_errors_reenable_the_button() {
        let mut page = submitting_page();
        let outcome = page.apply_reply(Ok(ApiReply::new(400, json!({"error": "job closed"}))));
        assert_eq!(outcome, ApplyOutcome::Rejected);
        let view = page.view();
        assert!(view.confirm.enabled);
        assert_eq!(view.confirm.label, CONFIRM_LABEL);
        assert_eq!(view.message, Some(StatusLine::error("Error: job closed")));
    }

    #[test]
    fn network_failure_asks_to_retry() {
        let mut page = submitting_page();
        page.apply_reply(Err(RequestFailure::new(TransportFailure::Network, "reset")));
        assert_eq!(
            page.view().message,
            Some(StatusLine::error("Network Error. Please try again."))
        );
    }

    #[test]
    fn confirm_without_job_id_reports_missing_context() {
        let (mut page, request) = ApplyPage::load(Some("a@gmail.com"), None);
        assert_eq!(request, None);
        assert_eq!(page.confirm(Some("a@gmail.com")), None);
        assert_eq!(page.view().message, Some(StatusLine::error(MISSING_CONTEXT)));
        assert!(page.view().confirm.enabled);
    }
}
