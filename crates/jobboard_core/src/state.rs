use std::collections::BTreeMap;

use crate::apply::ApplyPage;
use crate::auth::{LoginPage, RegisterPage};
use crate::detail::DetailPanel;
use crate::search::{FindJobsPage, JobList};
use crate::view_model::{AppViewModel, PageView};
use crate::{ApiRequest, Effect, RequestId, Route, SessionContext};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Page {
    Login(LoginPage),
    Register(RegisterPage),
    AppliedJobs(JobList),
    FindJobs(FindJobsPage),
    JobDetail(DetailPanel),
    ApplyJob(ApplyPage),
}

/// What an in-flight request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pending {
    Login,
    Register,
    AppliedJobs,
    Search,
    Detail,
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) session: SessionContext,
    pub(crate) route: Route,
    pub(crate) page: Page,
    pending: BTreeMap<RequestId, Pending>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: SessionContext::new(),
            route: Route::Login,
            page: Page::Login(LoginPage::default()),
            pending: BTreeMap::new(),
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Number of requests whose replies are still awaited.
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    pub fn view(&self) -> AppViewModel {
        let page = match &self.page {
            Page::Login(page) => PageView::Login(page.view()),
            Page::Register(page) => PageView::Register(page.view()),
            Page::AppliedJobs(list) => PageView::AppliedJobs(list.view()),
            Page::FindJobs(page) => PageView::FindJobs(crate::view_model::FindJobsView {
                filters: page.form.clone(),
                results: page.results.view(),
            }),
            Page::JobDetail(panel) => PageView::JobDetail(panel.view()),
            Page::ApplyJob(page) => PageView::ApplyJob(page.view()),
        };
        AppViewModel {
            route: self.route.clone(),
            signed_in_as: self.session.current_user_email().map(str::to_owned),
            page,
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn issue(&mut self, pending: Pending, request: ApiRequest) -> Effect {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending.insert(id, pending);
        Effect::Send { id, request }
    }

    pub(crate) fn take_pending(&mut self, id: RequestId) -> Option<Pending> {
        self.pending.remove(&id)
    }

    /// Cancels every request of the given kind.
    pub(crate) fn cancel_pending(&mut self, kind: Pending) -> Vec<Effect> {
        let ids: Vec<RequestId> = self
            .pending
            .iter()
            .filter(|(_, pending)| **pending == kind)
            .map(|(id, _)| *id)
            .collect();
        ids.into_iter()
            .map(|id| {
                self.pending.remove(&id);
                Effect::Cancel { id }
            })
            .collect()
    }

    /// Cancels everything still in flight; used when the page goes away.
    pub(crate) fn abandon_pending(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
            .into_keys()
            .map(|id| Effect::Cancel { id })
            .collect()
    }
}
