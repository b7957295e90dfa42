use jobboard_logging::{board_debug, board_info, board_warn, mask_email};

use crate::apply::{ApplyOutcome, ApplyPage};
use crate::auth::{LoginOutcome, LoginPage, RegisterPage};
use crate::detail::DetailPanel;
use crate::search::{FindJobsPage, JobList, ListKind, LOGIN_TO_VIEW_DATA, LOGIN_TO_VIEW_JOBS};
use crate::state::{Page, Pending};
use crate::view_model::StatusLine;
use crate::{
    ApiRequest, ApiResult, AppState, Effect, Field, Msg, RequestId, Route, TransportFailure,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(route) => navigate(&mut state, route),
        Msg::InputChanged { field, value } => {
            input_changed(&mut state, field, value);
            Vec::new()
        }
        Msg::LoginSubmitted => {
            let request = match &mut state.page {
                Page::Login(page) => page.submit(),
                _ => None,
            };
            send(&mut state, Pending::Login, request)
        }
        Msg::RegisterSubmitted => {
            let request = match &mut state.page {
                Page::Register(page) => page.submit(),
                _ => None,
            };
            send(&mut state, Pending::Register, request)
        }
        Msg::SearchSubmitted => search(&mut state),
        Msg::CardClicked { index } => {
            let target = match &state.page {
                Page::AppliedJobs(list) => list.card_route(index),
                Page::FindJobs(page) => page.results.card_route(index),
                _ => None,
            };
            match target {
                Some(route) => navigate(&mut state, route),
                None => Vec::new(),
            }
        }
        Msg::ApplyConfirmed => match &mut state.page {
            Page::ApplyJob(page) => {
                let request = page.confirm(state.session.current_user_email());
                state.mark_dirty();
                send(&mut state, Pending::Submit, request)
            }
            _ => Vec::new(),
        },
        Msg::LogoutClicked => {
            let cleared = state.session.stored_keys().len();
            state.session.clear();
            board_info!("Logged out; cleared {} session entries", cleared);
            navigate(&mut state, Route::Login)
        }
        Msg::ResponseReceived { id, result } => response_received(&mut state, id, result),
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn send(state: &mut AppState, pending: Pending, request: Option<ApiRequest>) -> Vec<Effect> {
    match request {
        Some(request) => {
            state.mark_dirty();
            vec![state.issue(pending, request)]
        }
        None => Vec::new(),
    }
}

fn input_changed(state: &mut AppState, field: Field, value: String) {
    let changed = match &mut state.page {
        Page::Login(page) if field == Field::Email => {
            page.set_email(value);
            true
        }
        Page::Register(page) => page.set(field, value),
        Page::FindJobs(page) => page.form.set(field, value),
        _ => false,
    };
    if changed {
        state.mark_dirty();
    }
}

fn search(state: &mut AppState) -> Vec<Effect> {
    let Page::FindJobs(page) = &mut state.page else {
        return Vec::new();
    };
    let Some(email) = state.session.current_user_email().map(str::to_owned) else {
        page.results
            .show_notice(StatusLine::error(LOGIN_TO_VIEW_JOBS));
        state.mark_dirty();
        return Vec::new();
    };
    let filter = page.begin_search();
    state.session.save_filters(&filter);
    state.mark_dirty();

    // A newer search supersedes any older one still in flight.
    let mut effects = state.cancel_pending(Pending::Search);
    effects.push(state.issue(Pending::Search, ApiRequest::Search { email, filter }));
    effects
}

/// Loads the page for `route`, abandoning whatever the previous page had in flight.
fn navigate(state: &mut AppState, route: Route) -> Vec<Effect> {
    let mut effects = state.abandon_pending();
    let email = state.session.current_user_email().map(str::to_owned);

    let (page, request) = match &route {
        Route::Login => (Page::Login(LoginPage::default()), None),
        Route::Register => (Page::Register(RegisterPage::default()), None),
        Route::AppliedJobs => {
            let mut list = JobList::new(ListKind::Applied);
            let request = match email {
                None => {
                    list.show_notice(StatusLine::error(LOGIN_TO_VIEW_DATA));
                    None
                }
                Some(email) => match state.session.take_applied_jobs() {
                    Some(jobs) => {
                        list.show_jobs(jobs);
                        None
                    }
                    None => Some((Pending::AppliedJobs, ApiRequest::AppliedJobs { email })),
                },
            };
            (Page::AppliedJobs(list), request)
        }
        Route::FindJobs => {
            let mut page = FindJobsPage::new();
            let request = match email {
                None => {
                    page.results
                        .show_notice(StatusLine::error(LOGIN_TO_VIEW_JOBS));
                    None
                }
                Some(email) => {
                    if let Some(saved) = state.session.saved_filters() {
                        page.restore(saved);
                    }
                    let filter = page.begin_search();
                    state.session.save_filters(&filter);
                    Some((Pending::Search, ApiRequest::Search { email, filter }))
                }
            };
            (Page::FindJobs(page), request)
        }
        Route::JobDetail { job_id } => {
            let (panel, request) = DetailPanel::load(email.as_deref(), job_id.as_deref());
            (
                Page::JobDetail(panel),
                request.map(|request| (Pending::Detail, request)),
            )
        }
        Route::ApplyJob { job_id } => {
            let (page, request) = ApplyPage::load(email.as_deref(), job_id.clone());
            (
                Page::ApplyJob(page),
                request.map(|request| (Pending::Detail, request)),
            )
        }
    };

    board_debug!("Navigating to {}", route);
    state.route = route;
    state.page = page;
    state.mark_dirty();
    if let Some((pending, request)) = request {
        effects.push(state.issue(pending, request));
    }
    effects
}

fn response_received(state: &mut AppState, id: RequestId, result: ApiResult) -> Vec<Effect> {
    let Some(pending) = state.take_pending(id) else {
        board_debug!("Dropping reply for abandoned request {}", id);
        return Vec::new();
    };
    if matches!(&result, Err(failure) if failure.kind == TransportFailure::Cancelled) {
        return Vec::new();
    }
    if let Err(failure) = &result {
        board_warn!("Request {} failed: {}", id, failure.message);
    }

    let next = match (pending, &mut state.page) {
        (Pending::Login, Page::Login(page)) => match page.apply_reply(result) {
            LoginOutcome::LoggedIn {
                email,
                applied_jobs,
            } => {
                board_info!("Logged in as {}", mask_email(&email));
                state.session.set_current_user_email(email);
                if let Some(jobs) = applied_jobs {
                    state.session.stash_applied_jobs(jobs);
                }
                Some(Route::AppliedJobs)
            }
            LoginOutcome::Rejected => None,
        },
        (Pending::Register, Page::Register(page)) => {
            page.apply_reply(result).then_some(Route::Login)
        }
        (Pending::AppliedJobs, Page::AppliedJobs(list)) => {
            list.apply_reply(result);
            None
        }
        (Pending::Search, Page::FindJobs(page)) => {
            page.results.apply_reply(result);
            None
        }
        (Pending::Detail, Page::JobDetail(panel)) => {
            panel.apply_reply(result);
            None
        }
        (Pending::Detail, Page::ApplyJob(page)) => {
            page.detail_mut().apply_reply(result);
            None
        }
        (Pending::Submit, Page::ApplyJob(page)) => match page.apply_reply(result) {
            ApplyOutcome::Accepted => Some(Route::AppliedJobs),
            ApplyOutcome::AcceptedWithShortfall(error) => {
                board_warn!("Treating application error as accepted: {}", error);
                Some(Route::AppliedJobs)
            }
            ApplyOutcome::Rejected => None,
        },
        (pending, _) => {
            board_debug!("Reply for {:?} does not belong to the current page", pending);
            None
        }
    };

    state.mark_dirty();
    match next {
        Some(route) => navigate(state, route),
        None => Vec::new(),
    }
}
