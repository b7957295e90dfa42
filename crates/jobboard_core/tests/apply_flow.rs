use std::sync::Once;

use jobboard_core::{
    update, ApiReply, ApiRequest, AppState, DetailView, Effect, Field, Msg, PageView, RequestId,
    Route, StatusLine,
};
use serde_json::{json, Value};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobboard_logging::initialize_for_tests);
}

fn sends(effects: &[Effect]) -> Vec<(RequestId, ApiRequest)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Send { id, request } => Some((*id, request.clone())),
            Effect::Cancel { .. } => None,
        })
        .collect()
}

fn reply(state: AppState, id: RequestId, status: u16, body: Value) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::ResponseReceived {
            id,
            result: Ok(ApiReply::new(status, body)),
        },
    )
}

fn on_apply_page(job_id: &str) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged {
            field: Field::Email,
            value: "a@gmail.com".into(),
        },
    );
    let (state, effects) = update(state, Msg::LoginSubmitted);
    let (id, _) = sends(&effects)[0].clone();
    let (state, _) = reply(state, id, 200, json!([]));

    let (state, effects) = update(state, Msg::Navigate(Route::apply_job(job_id)));
    let (detail_id, request) = sends(&effects)[0].clone();
    assert!(matches!(request, ApiRequest::JobDetail { .. }));
    let (state, _) = reply(
        state,
        detail_id,
        200,
        json!({
            "job_id": job_id, "title": "Rust Dev", "is_open": true, "date_posted": "2024-05-01",
            "description": "Write Rust", "salary": 1200000, "min_education": 3,
            "min_experience": "2 years", "creator": "hr@cmkl.ac.th"
        }),
    );
    state
}

fn confirm(state: AppState) -> (AppState, RequestId) {
    let (state, effects) = update(state, Msg::ApplyConfirmed);
    let sent = sends(&effects);
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].1,
        ApiRequest::SubmitApplication {
            email: "a@gmail.com".into(),
            job_id: "8".into(),
        }
    );
    (state, sent[0].0)
}

#[test]
fn apply_page_shows_job_detail() {
    init_logging();
    let state = on_apply_page("8");
    let PageView::ApplyJob(view) = state.view().page else {
        panic!("expected apply page");
    };
    let DetailView::Loaded(content) = view.detail else {
        panic!("expected loaded detail");
    };
    assert_eq!(content.salary, "1,200,000");
    assert_eq!(content.education, "Master's Degree");
    assert_eq!(content.experience, "2 years");
}

#[test]
fn accepted_application_goes_to_applied_jobs() {
    init_logging();
    let (state, id) = confirm(on_apply_page("8"));
    let (state, effects) = reply(state, id, 200, json!({"applied_for_job": true}));
    assert_eq!(state.route(), &Route::AppliedJobs);
    assert!(matches!(
        sends(&effects).as_slice(),
        [(_, ApiRequest::AppliedJobs { .. })]
    ));
}

#[test]
fn education_shortfall_navigates_like_success() {
    init_logging();
    let (accepted, id) = confirm(on_apply_page("8"));
    let (accepted, accepted_effects) = reply(accepted, id, 200, json!({"applied_for_job": true}));

    let (shortfall, id) = confirm(on_apply_page("8"));
    let (shortfall, shortfall_effects) = reply(
        shortfall,
        id,
        400,
        json!({"error": "user education is less than job requires"}),
    );

    assert_eq!(shortfall.route(), accepted.route());
    assert_eq!(shortfall.view().page, accepted.view().page);
    assert_eq!(
        sends(&shortfall_effects).len(),
        sends(&accepted_effects).len()
    );
}

#[test]
fn rejected_application_stays_with_message() {
    init_logging();
    let (state, id) = confirm(on_apply_page("8"));
    let (state, effects) = reply(state, id, 400, json!({"error": "job is closed"}));
    assert!(effects.is_empty());
    assert_eq!(state.route(), &Route::apply_job("8"));
    let PageView::ApplyJob(view) = state.view().page else {
        panic!("expected apply page");
    };
    assert_eq!(view.message, Some(StatusLine::error("Error: job is closed")));
    assert!(view.confirm.enabled);
}

#[test]
fn detail_page_without_login_reports_missing_context() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Navigate(Route::job_detail("8")));
    assert!(effects.is_empty());
    assert_eq!(
        state.view().page,
        PageView::JobDetail(DetailView::Status("Error: Missing Job ID or Login".into()))
    );
}

#[test]
fn logout_clears_session_and_returns_to_login() {
    init_logging();
    let state = on_apply_page("8");
    assert!(state.session().current_user_email().is_some());
    let (state, effects) = update(state, Msg::LogoutClicked);
    assert!(effects.is_empty());
    assert_eq!(state.route(), &Route::Login);
    assert!(state.session().stored_keys().is_empty());
    assert_eq!(state.view().signed_in_as, None);
}
