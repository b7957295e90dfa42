use serde_json::Value;

use crate::dto::{job_list, truthy_text};
use crate::view_model::{job_cards, CardAction, JobListView, StatusLine};
use crate::{ApiResult, Field, JobSummary, Route, NETWORK_ERROR};

pub const LOADING_APPLIED: &str = "Loading your applications...";
pub const LOADING_SEARCH: &str = "Searching...";
pub const NO_APPLICATIONS: &str = "You haven't applied to any jobs yet.";
pub const NO_MATCHES: &str = "No matching jobs found.";
pub const FETCH_ERROR: &str = "Error fetching jobs.";
pub const LOGIN_TO_VIEW_DATA: &str = "Please log in to view data.";
pub const LOGIN_TO_VIEW_JOBS: &str = "Please log in to view jobs.";

/// The five search filters, as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub keyword: String,
    pub date_posted: String,
    pub education: String,
    pub salary: String,
    pub experience: String,
}

impl FilterState {
    /// Trims the free-text filters; date and education come from pickers and
    /// are kept as-is.
    pub fn normalized(&self) -> Self {
        Self {
            keyword: self.keyword.trim().to_string(),
            date_posted: self.date_posted.clone(),
            education: self.education.clone(),
            salary: self.salary.trim().to_string(),
            experience: self.experience.trim().to_string(),
        }
    }

    /// Query parameters for the non-empty filters, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("keyword", self.keyword.as_str()),
            ("posted", self.date_posted.as_str()),
            ("education", self.education.as_str()),
            ("salary", self.salary.as_str()),
            ("experience", self.experience.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// Stores `value` into the filter bound to `field`; false for other fields.
    pub fn set(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Keyword => &mut self.keyword,
            Field::DatePosted => &mut self.date_posted,
            Field::EducationFilter => &mut self.education,
            Field::Salary => &mut self.salary,
            Field::Experience => &mut self.experience,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Applied,
    Search,
}

impl ListKind {
    fn card_action(self) -> CardAction {
        match self {
            ListKind::Applied => CardAction::ViewDetails,
            ListKind::Search => CardAction::Apply,
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            ListKind::Applied => NO_APPLICATIONS,
            ListKind::Search => NO_MATCHES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListStatus {
    Loading(&'static str),
    Notice(StatusLine),
    Jobs(Vec<JobSummary>),
}

/// Result container shared by the applied-jobs and search pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobList {
    kind: ListKind,
    status: ListStatus,
}

impl JobList {
    pub fn new(kind: ListKind) -> Self {
        let loading = match kind {
            ListKind::Applied => LOADING_APPLIED,
            ListKind::Search => LOADING_SEARCH,
        };
        Self {
            kind,
            status: ListStatus::Loading(loading),
        }
    }

    pub fn set_loading(&mut self) {
        *self = Self::new(self.kind);
    }

    pub fn show_notice(&mut self, line: StatusLine) {
        self.status = ListStatus::Notice(line);
    }

    pub fn show_jobs(&mut self, jobs: Vec<JobSummary>) {
        self.status = if jobs.is_empty() {
            ListStatus::Notice(StatusLine::info(self.kind.empty_message()))
        } else {
            ListStatus::Jobs(jobs)
        };
    }

    /// Where the card at `index` (zero based) leads, if one is shown.
    pub fn card_route(&self, index: usize) -> Option<Route> {
        match &self.status {
            ListStatus::Jobs(jobs) => jobs
                .get(index)
                .map(|job| self.kind.card_action().route(&job.job_id)),
            _ => None,
        }
    }

    /// Applies a response from either list endpoint.
    pub fn apply_reply(&mut self, result: ApiResult) {
        match result {
            Ok(reply) => match self.kind {
                ListKind::Applied => self.show_jobs(job_list(&reply.body).unwrap_or_default()),
                ListKind::Search => match interpret_search(&reply.body) {
                    SearchOutcome::Jobs(jobs) => self.show_jobs(jobs),
                    SearchOutcome::Warning(text) => self.show_notice(StatusLine::info(text)),
                    SearchOutcome::Unexpected => self.show_notice(StatusLine::error(FETCH_ERROR)),
                },
            },
            Err(failure) => self.show_notice(StatusLine::error(failure.user_text(NETWORK_ERROR))),
        }
    }

    pub fn view(&self) -> JobListView {
        match &self.status {
            ListStatus::Loading(text) => JobListView::Loading(text.to_string()),
            ListStatus::Notice(line) => JobListView::Notice(line.clone()),
            ListStatus::Jobs(jobs) => JobListView::Cards(job_cards(jobs, self.kind.card_action())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Jobs(Vec<JobSummary>),
    /// API-level advisory such as "no filters applied".
    Warning(String),
    Unexpected,
}

pub fn interpret_search(body: &Value) -> SearchOutcome {
    if let Some(warning) = truthy_text(body, "warning") {
        return SearchOutcome::Warning(warning);
    }
    match job_list(body) {
        Some(jobs) => SearchOutcome::Jobs(jobs),
        None => SearchOutcome::Unexpected,
    }
}

/// The search page: filter form plus results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindJobsPage {
    pub(crate) form: FilterState,
    pub(crate) results: JobList,
}

impl FindJobsPage {
    pub fn new() -> Self {
        Self {
            form: FilterState::default(),
            results: JobList::new(ListKind::Search),
        }
    }

    /// Fills the form from previously saved filters.
    pub fn restore(&mut self, saved: &FilterState) {
        self.form = saved.clone();
    }

    /// Reads the form for a search; the caller persists and sends it.
    pub fn begin_search(&mut self) -> FilterState {
        self.results.set_loading();
        self.form.normalized()
    }
}

impl Default for FindJobsPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiReply, RequestFailure, TransportFailure};
    use serde_json::json;

    #[test]
    fn empty_filters_produce_no_pairs() {
        assert!(FilterState::default().query_pairs().is_empty());
        let blank = FilterState {
            keyword: "   ".into(),
            salary: " ".into(),
            ..FilterState::default()
        };
        assert!(blank.normalized().query_pairs().is_empty());
    }

    #[test]
    fn pairs_use_api_parameter_names() {
        let filter = FilterState {
            keyword: " rust ".into(),
            date_posted: "2024-05-01".into(),
            education: "2".into(),
            salary: "30000".into(),
            experience: String::new(),
        }
        .normalized();
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("keyword", "rust"),
                ("posted", "2024-05-01"),
                ("education", "2"),
                ("salary", "30000"),
            ]
        );
    }

    #[test]
    fn warning_wins_over_list_parsing() {
        assert_eq!(
            interpret_search(&json!({"warning": "no filters applied"})),
            SearchOutcome::Warning("no filters applied".into())
        );
        assert_eq!(interpret_search(&json!({"error": "x"})), SearchOutcome::Unexpected);
        assert_eq!(interpret_search(&json!([])), SearchOutcome::Jobs(Vec::new()));
    }

    #[test]
    fn applied_list_treats_non_arrays_as_empty() {
        let mut list = JobList::new(ListKind::Applied);
        list.apply_reply(Ok(ApiReply::new(404, json!({"error": "no such user"}))));
        assert_eq!(list.view(), JobListView::Notice(StatusLine::info(NO_APPLICATIONS)));
    }

    #[test]
    fn transport_failure_shows_network_error() {
        let mut list = JobList::new(ListKind::Search);
        list.apply_reply(Err(RequestFailure::new(TransportFailure::Network, "refused")));
        assert_eq!(list.view(), JobListView::Notice(StatusLine::error("Network Error")));
    }
}
