use crate::{ApiResult, RequestId, Route};

/// Form inputs across all pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Phone,
    FirstName,
    LastName,
    Education,
    Keyword,
    DatePosted,
    EducationFilter,
    Salary,
    Experience,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Education => "Education",
            Field::Keyword => "Keyword",
            Field::DatePosted => "Date posted",
            Field::EducationFilter => "Education",
            Field::Salary => "Salary",
            Field::Experience => "Experience",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page load for `route`; abandons the current page.
    Navigate(Route),
    /// User edited a form field.
    InputChanged { field: Field, value: String },
    LoginSubmitted,
    RegisterSubmitted,
    SearchSubmitted,
    /// User clicked the action button on the card at `index`.
    CardClicked { index: usize },
    ApplyConfirmed,
    LogoutClicked,
    /// A request issued through [`crate::Effect::Send`] finished.
    ResponseReceived { id: RequestId, result: ApiResult },
    /// Fallback for placeholder wiring.
    NoOp,
}
