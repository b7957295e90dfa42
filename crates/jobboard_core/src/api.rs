//! Descriptions of the remote API calls and their raw results.
//!
//! Nothing here performs IO. The front end turns an [`ApiRequest`] into an
//! HTTP call and feeds the outcome back as an [`ApiReply`] or [`RequestFailure`].

use serde_json::{json, Value};
use url::form_urlencoded;

use crate::{EducationLevel, FilterState};

pub type RequestId = u64;

pub const NETWORK_ERROR: &str = "Network Error";
pub const TIMEOUT_ERROR: &str = "Request timed out";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub phone: String,
    pub first: String,
    pub last: String,
    pub education: EducationLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Jobs the user applied to; doubles as the login lookup.
    AppliedJobs { email: String },
    Register(Registration),
    Search { email: String, filter: FilterState },
    JobDetail { email: String, job_id: String },
    SubmitApplication { email: String, job_id: String },
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        match self {
            ApiRequest::Register(_) | ApiRequest::SubmitApplication { .. } => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ApiRequest::AppliedJobs { .. } => "/search/applied",
            ApiRequest::Register(_) => "/register",
            ApiRequest::Search { .. } => "/search",
            ApiRequest::JobDetail { .. } => "/search/detail",
            ApiRequest::SubmitApplication { .. } => "/job/submit",
        }
    }

    /// Encoded query string, without the leading `?`.
    pub fn query(&self) -> Option<String> {
        let mut query = form_urlencoded::Serializer::new(String::new());
        match self {
            ApiRequest::AppliedJobs { email } => {
                query.append_pair("email", email);
            }
            ApiRequest::Search { email, filter } => {
                query.append_pair("email", email);
                query.extend_pairs(filter.query_pairs());
            }
            ApiRequest::JobDetail { email, job_id } => {
                query.append_pair("email", email);
                query.append_pair("job_id", job_id);
            }
            ApiRequest::Register(_) | ApiRequest::SubmitApplication { .. } => return None,
        }
        Some(query.finish())
    }

    pub fn body(&self) -> Option<Value> {
        match self {
            ApiRequest::Register(reg) => Some(json!({
                "email": reg.email,
                "phone": reg.phone,
                "first": reg.first,
                "last": reg.last,
                "education": reg.education.code(),
            })),
            ApiRequest::SubmitApplication { email, job_id } => Some(json!({
                "email": email,
                "job_id": job_id,
            })),
            _ => None,
        }
    }
}

/// A parsed HTTP response: status plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Network,
    Timeout,
    Cancelled,
}

/// The request never produced a usable reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub kind: TransportFailure,
    pub message: String,
}

impl RequestFailure {
    pub fn new(kind: TransportFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Text shown to the user; `network_text` is the page's wording for plain
    /// transport failures.
    pub fn user_text(&self, network_text: &str) -> String {
        match self.kind {
            TransportFailure::Timeout => TIMEOUT_ERROR.to_string(),
            TransportFailure::Network | TransportFailure::Cancelled => network_text.to_string(),
        }
    }
}

pub type ApiResult = Result<ApiReply, RequestFailure>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_body_carries_education_code() {
        let request = ApiRequest::Register(Registration {
            email: "a@gmail.com".into(),
            phone: "0812345678".into(),
            first: "Ann".into(),
            last: "Lee".into(),
            education: EducationLevel::Master,
        });
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.query(), None);
        assert_eq!(
            request.body(),
            Some(json!({
                "email": "a@gmail.com",
                "phone": "0812345678",
                "first": "Ann",
                "last": "Lee",
                "education": 3
            }))
        );
    }

    #[test]
    fn detail_query_encodes_email() {
        let request = ApiRequest::JobDetail {
            email: "a+b@gmail.com".into(),
            job_id: "7".into(),
        };
        assert_eq!(request.path(), "/search/detail");
        assert_eq!(request.query().as_deref(), Some("email=a%2Bb%40gmail.com&job_id=7"));
    }

    #[test]
    fn failure_text_separates_timeouts() {
        let timeout = RequestFailure::new(TransportFailure::Timeout, "deadline");
        let network = RequestFailure::new(TransportFailure::Network, "refused");
        assert_eq!(timeout.user_text(NETWORK_ERROR), "Request timed out");
        assert_eq!(network.user_text(NETWORK_ERROR), "Network Error");
    }
}
