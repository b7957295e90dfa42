//! Job board core: pure page state machine and view-model helpers.
mod api;
mod apply;
mod auth;
mod detail;
mod dto;
mod education;
mod effect;
mod msg;
mod route;
mod search;
mod session;
mod state;
mod update;
mod validate;
mod view_model;

pub use api::{
    ApiReply, ApiRequest, ApiResult, Method, Registration, RequestFailure, RequestId,
    TransportFailure, NETWORK_ERROR, TIMEOUT_ERROR,
};
pub use apply::{is_education_shortfall, EDUCATION_SHORTFALL};
pub use dto::{JobDetail, JobSummary};
pub use education::{education_label, EducationLevel, UNKNOWN_EDUCATION_LABEL};
pub use effect::Effect;
pub use msg::{Field, Msg};
pub use route::{Route, RouteError};
pub use search::{interpret_search, FilterState, SearchOutcome};
pub use session::{SessionContext, SessionKey};
pub use state::AppState;
pub use update::update;
pub use validate::{validate_email, validate_field, validate_name, validate_phone, FieldError};
pub use view_model::{
    format_salary, job_cards, AppViewModel, ApplyView, BadgeView, ButtonView, CardAction,
    DetailContentView, DetailView, FieldView, FindJobsView, JobCardView, JobListView, LoginView,
    PageView, RegisterView, Severity, StatusLine,
};
