use crate::dto::{flag, job_list, truthy_text};
use crate::view_model::{ButtonView, FieldView, LoginView, RegisterView, StatusLine};
use crate::{
    validate_field, ApiRequest, ApiResult, EducationLevel, Field, FieldError, JobSummary,
    Registration, NETWORK_ERROR,
};

pub const LOGIN_FAILED: &str = "Login failed. User not found.";
pub const REGISTER_FAILED: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn {
        email: String,
        applied_jobs: Option<Vec<JobSummary>>,
    },
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginPage {
    email: String,
    pending_email: Option<String>,
    message: Option<StatusLine>,
}

impl LoginPage {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_email.is_some()
    }

    /// Starts a login unless one is already in flight.
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if self.is_submitting() {
            return None;
        }
        self.message = None;
        self.pending_email = Some(self.email.clone());
        Some(ApiRequest::AppliedJobs {
            email: self.email.clone(),
        })
    }

    pub fn apply_reply(&mut self, result: ApiResult) -> LoginOutcome {
        let email = self.pending_email.take().unwrap_or_default();
        match result {
            Ok(reply) if reply.is_success() => LoginOutcome::LoggedIn {
                email,
                applied_jobs: job_list(&reply.body),
            },
            Ok(reply) => {
                let text = truthy_text(&reply.body, "error").unwrap_or_else(|| LOGIN_FAILED.into());
                self.message = Some(StatusLine::error(text));
                LoginOutcome::Rejected
            }
            Err(failure) => {
                self.message = Some(StatusLine::error(failure.user_text(NETWORK_ERROR)));
                LoginOutcome::Rejected
            }
        }
    }

    pub fn view(&self) -> LoginView {
        LoginView {
            email: self.email.clone(),
            submit: ButtonView {
                label: "Login".into(),
                enabled: !self.is_submitting(),
            },
            message: self.message.clone(),
        }
    }
}

const PROFILE_FIELDS: [Field; 4] = [Field::Email, Field::Phone, Field::FirstName, Field::LastName];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPage {
    email: String,
    phone: String,
    first: String,
    last: String,
    education: String,
    submitting: bool,
    message: Option<StatusLine>,
}

impl Default for RegisterPage {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            first: String::new(),
            last: String::new(),
            education: EducationLevel::default().form_value().to_string(),
            submitting: false,
            message: None,
        }
    }
}

impl RegisterPage {
    /// Stores a field edit; returns false for fields this form does not have.
    pub fn set(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::FirstName => &mut self.first,
            Field::LastName => &mut self.last,
            Field::Education => &mut self.education,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::FirstName => &self.first,
            Field::LastName => &self.last,
            Field::Education => &self.education,
            _ => "",
        }
    }

    pub fn hint(&self, field: Field) -> Option<FieldError> {
        validate_field(field, self.value(field)).err()
    }

    /// Builds the registration payload; hints never block submission.
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.message = None;
        Some(ApiRequest::Register(Registration {
            email: self.email.clone(),
            phone: self.phone.clone(),
            first: self.first.clone(),
            last: self.last.clone(),
            education: EducationLevel::from_form_value(&self.education).unwrap_or_default(),
        }))
    }

    /// Returns true when the account was created.
    pub fn apply_reply(&mut self, result: ApiResult) -> bool {
        self.submitting = false;
        let text = match result {
            Ok(reply) if flag(&reply.body, "registered") => return true,
            Ok(reply) => match truthy_text(&reply.body, "error") {
                Some(error) => format!("Error: {error}"),
                None => REGISTER_FAILED.to_string(),
            },
            Err(failure) => failure.user_text(NETWORK_ERROR),
        };
        self.message = Some(StatusLine::error(text));
        false
    }

    pub fn view(&self) -> RegisterView {
        RegisterView {
            fields: PROFILE_FIELDS
                .into_iter()
                .map(|field| FieldView {
                    field,
                    value: self.value(field).to_string(),
                    hint: self.hint(field).map(|err| err.to_string()),
                })
                .collect(),
            education: self.education.clone(),
            submit: ButtonView {
                label: "Register".into(),
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

    #[test]
    fn login_is_guarded_while_in_flight() {
        let mut page = LoginPage::default();
        page.set_email("a@gmail.com".into());
        assert!(page.submit().is_some());
        assert!(!page.view().submit.enabled);
        assert_eq!(page.submit(), None);
    }

    #[test]
    fn login_failure_without_error_uses_fallback() {
        let mut page = LoginPage::default();
        page.submit();
        let outcome = page.apply_reply(Ok(ApiReply::new(404, json!({}))));
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert_eq!(page.view().message, Some(StatusLine::error(LOGIN_FAILED)));
        assert!(page.view().submit.enabled);
    }

    #[test]
    fn unknown_education_label_registers_as_none() {
        let mut page = RegisterPage::default();
        page.set(Field::Education, "astronaut".into());
        match page.submit() {
            Some(ApiRequest::Register(reg)) => assert_eq!(reg.education, EducationLevel::None),
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[test]
    fn register_outcomes() {
        let mut page = RegisterPage::default();
        page.submit();
        assert!(page.apply_reply(Ok(ApiReply::new(200, json!({"registered": true})))));

        page.submit();
        assert!(!page.apply_reply(Ok(ApiReply::new(400, json!({"error": "email taken"})))));
        assert_eq!(page.view().message, Some(StatusLine::error("Error: email taken")));

        page.submit();
        assert!(!page.apply_reply(Ok(ApiReply::new(200, json!({"registered": false})))));
        assert_eq!(page.view().message, Some(StatusLine::error("Error")));

        page.submit();
        assert!(!page.apply_reply(Err(RequestFailure::new(TransportFailure::Network, "down"))));
        assert_eq!(page.view().message, Some(StatusLine::error("Network Error")));
        assert!(page.view().submit.enabled);
    }

    #[test]
    fn hints_follow_field_values() {
        let mut page = RegisterPage::default();
        page.set(Field::Phone, "12345".into());
        page.set(Field::FirstName, "Ann".into());
        let view = page.view();
        let phone = view.fields.iter().find(|f| f.field == Field::Phone).unwrap();
        let first = view.fields.iter().find(|f| f.field == Field::FirstName).unwrap();
        let email = view.fields.iter().find(|f| f.field == Field::Email).unwrap();
        assert_eq!(phone.hint.as_deref(), Some("Must be 10 digits starting with 0"));
        assert_eq!(first.hint, None);
        assert_eq!(email.hint, None);
    }
}
