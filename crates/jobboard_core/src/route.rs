use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::form_urlencoded;

/// A page of the job board, with any parameters carried in its URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Register,
    AppliedJobs,
    FindJobs,
    JobDetail { job_id: Option<String> },
    ApplyJob { job_id: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

impl Route {
    pub fn job_detail(job_id: impl Into<String>) -> Self {
        Route::JobDetail {
            job_id: Some(job_id.into()),
        }
    }

    pub fn apply_job(job_id: impl Into<String>) -> Self {
        Route::ApplyJob {
            job_id: Some(job_id.into()),
        }
    }

    fn page(&self) -> &'static str {
        match self {
            Route::Login => "index.html",
            Route::Register => "register.html",
            Route::AppliedJobs => "jobs_applied.html",
            Route::FindJobs => "find_jobs.html",
            Route::JobDetail { .. } => "job_details.html",
            Route::ApplyJob { .. } => "apply_job.html",
        }
    }

    fn job_id(&self) -> Option<&str> {
        match self {
            Route::JobDetail { job_id } | Route::ApplyJob { job_id } => job_id.as_deref(),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self.job_id() {
            Some(id) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("id", id)
                    .finish();
                format!("{}?{}", self.page(), query)
            }
            None => self.page().to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim().trim_start_matches('/');
        let (page, query) = raw.split_once('?').unwrap_or((raw, ""));
        let job_id = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        match page {
            "" | "index.html" => Ok(Route::Login),
            "register.html" => Ok(Route::Register),
            "jobs_applied.html" => Ok(Route::AppliedJobs),
            "find_jobs.html" => Ok(Route::FindJobs),
            "job_details.html" => Ok(Route::JobDetail { job_id }),
            "apply_job.html" => Ok(Route::ApplyJob { job_id }),
            other => Err(RouteError::UnknownPage(other.to_string())),
        }
    }
}
