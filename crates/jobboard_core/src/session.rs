use crate::{FilterState, JobSummary};

/// Names of the session entries, as they appear in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    CurrentUserEmail,
    AppliedJobsData,
    FilterKeyword,
    FilterDate,
    FilterEdu,
    FilterSalary,
    FilterExp,
}

impl SessionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::CurrentUserEmail => "currentUserEmail",
            SessionKey::AppliedJobsData => "appliedJobsData",
            SessionKey::FilterKeyword => "filter_keyword",
            SessionKey::FilterDate => "filter_date",
            SessionKey::FilterEdu => "filter_edu",
            SessionKey::FilterSalary => "filter_salary",
            SessionKey::FilterExp => "filter_exp",
        }
    }
}

/// Per-tab scratchpad shared by the pages.
///
/// Lives until logout, which wipes every entry through [`SessionContext::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    current_user_email: Option<String>,
    applied_jobs: Option<Vec<JobSummary>>,
    filters: Option<FilterState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user_email(&self) -> Option<&str> {
        self.current_user_email.as_deref()
    }

    pub fn set_current_user_email(&mut self, email: impl Into<String>) {
        self.current_user_email = Some(email.into());
    }

    /// Keeps the job list returned by login for the page shown right after it.
    pub fn stash_applied_jobs(&mut self, jobs: Vec<JobSummary>) {
        self.applied_jobs = Some(jobs);
    }

    /// Hands the stashed list over once; later reads see `None`.
    pub fn take_applied_jobs(&mut self) -> Option<Vec<JobSummary>> {
        self.applied_jobs.take()
    }

    pub fn saved_filters(&self) -> Option<&FilterState> {
        self.filters.as_ref()
    }

    pub fn save_filters(&mut self, filters: &FilterState) {
        self.filters = Some(filters.clone());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Keys that currently hold a value.
    pub fn stored_keys(&self) -> Vec<SessionKey> {
        let mut keys = Vec::new();
        if self.current_user_email.is_some() {
            keys.push(SessionKey::CurrentUserEmail);
        }
        if self.applied_jobs.is_some() {
            keys.push(SessionKey::AppliedJobsData);
        }
        if self.filters.is_some() {
            keys.extend([
                SessionKey::FilterKeyword,
                SessionKey::FilterDate,
                SessionKey::FilterEdu,
                SessionKey::FilterSalary,
                SessionKey::FilterExp,
            ]);
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_every_entry() {
        let mut session = SessionContext::new();
        session.set_current_user_email("a@gmail.com");
        session.stash_applied_jobs(Vec::new());
        session.save_filters(&FilterState::default());
        assert_eq!(session.stored_keys().len(), 7);

        session.clear();
        assert_eq!(session, SessionContext::new());
        assert!(session.stored_keys().is_empty());
    }

    #[test]
    fn applied_jobs_are_handed_over_once() {
        let mut session = SessionContext::new();
        session.stash_applied_jobs(Vec::new());
        assert_eq!(session.take_applied_jobs(), Some(Vec::new()));
        assert_eq!(session.take_applied_jobs(), None);
    }

    #[test]
    fn key_names_match_storage_names() {
        assert_eq!(SessionKey::CurrentUserEmail.as_str(), "currentUserEmail");
        assert_eq!(SessionKey::FilterEdu.as_str(), "filter_edu");
    }
}
