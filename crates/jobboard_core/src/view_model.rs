use crate::{education_label, Field, FilterState, JobDetail, JobSummary, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// One line of user-facing status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub class: &'static str,
    pub label: &'static str,
}

impl BadgeView {
    fn card(is_open: bool) -> Self {
        if is_open {
            Self {
                class: "status-badge status-open",
                label: "open",
            }
        } else {
            Self {
                class: "status-badge status-closed",
                label: "close",
            }
        }
    }

    fn detail(is_open: bool) -> Self {
        if is_open {
            Self {
                class: "detail-badge status-open",
                label: "open",
            }
        } else {
            Self {
                class: "detail-badge status-closed",
                label: "closed",
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ViewDetails,
    Apply,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::ViewDetails => "Details",
            CardAction::Apply => "Apply",
        }
    }

    pub fn route(self, job_id: &str) -> Route {
        match self {
            CardAction::ViewDetails => Route::job_detail(job_id),
            CardAction::Apply => Route::apply_job(job_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job_id: String,
    pub title: String,
    pub id_label: String,
    pub badge: BadgeView,
    pub posted_label: String,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobListView {
    Loading(String),
    Notice(StatusLine),
    Cards(Vec<JobCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub value: String,
    /// Inline validation hint; `None` hides it.
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub email: String,
    pub submit: ButtonView,
    pub message: Option<StatusLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterView {
    pub fields: Vec<FieldView>,
    pub education: String,
    pub submit: ButtonView,
    pub message: Option<StatusLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindJobsView {
    pub filters: FilterState,
    pub results: JobListView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContentView {
    pub title_label: String,
    pub id_label: String,
    pub badge: BadgeView,
    pub date_label: String,
    pub description: String,
    pub salary: String,
    pub education: &'static str,
    pub experience: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// Loading indicator text, or the error that replaced it.
    Status(String),
    Loaded(Box<DetailContentView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyView {
    pub detail: DetailView,
    pub confirm: ButtonView,
    pub message: Option<StatusLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Login(LoginView),
    Register(RegisterView),
    AppliedJobs(JobListView),
    FindJobs(FindJobsView),
    JobDetail(DetailView),
    ApplyJob(ApplyView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub route: Route,
    pub signed_in_as: Option<String>,
    pub page: PageView,
    pub dirty: bool,
}

/// Maps job rows to card records; the front end draws them as plain text.
pub fn job_cards(jobs: &[JobSummary], action: CardAction) -> Vec<JobCardView> {
    jobs.iter()
        .map(|job| JobCardView {
            job_id: job.job_id.clone(),
            title: job.title.clone(),
            id_label: format!("ID: {}", job.job_id),
            badge: BadgeView::card(job.is_open),
            posted_label: format!("Posted: {}", job.date_posted),
            action,
        })
        .collect()
}

pub fn detail_content(job: &JobDetail) -> DetailContentView {
    DetailContentView {
        title_label: format!("Job Title: {}", job.title),
        id_label: format!("ID: {}", job.job_id),
        badge: BadgeView::detail(job.is_open),
        date_label: format!("Date Posted: {}", job.date_posted),
        description: job.description.clone(),
        salary: format_salary(job.salary),
        education: education_label(job.min_education),
        experience: job.min_experience.clone(),
        creator: job.creator.clone(),
    }
}

/// Formats a salary with thousands separators and at most three decimals.
pub fn format_salary(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let mut out = String::new();
    if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
