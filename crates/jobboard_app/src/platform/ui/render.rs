use jobboard_core::{
    AppViewModel, ApplyView, ButtonView, DetailView, FieldView, FindJobsView, JobListView,
    LoginView, PageView, RegisterView, Severity, StatusLine,
};

/// Renders the current page as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    let user = view.signed_in_as.as_deref().unwrap_or("not signed in");
    lines.push(format!("== {} ({}) ==", view.route, user));

    match &view.page {
        PageView::Login(login) => render_login(&mut lines, login),
        PageView::Register(register) => render_register(&mut lines, register),
        PageView::AppliedJobs(list) => {
            lines.push("Your applications".to_string());
            render_list(&mut lines, list);
        }
        PageView::FindJobs(find) => render_find_jobs(&mut lines, find),
        PageView::JobDetail(detail) => render_detail(&mut lines, detail),
        PageView::ApplyJob(apply) => render_apply(&mut lines, apply),
    }
    lines
}

fn render_login(lines: &mut Vec<String>, view: &LoginView) {
    lines.push(format!("Email: {}", view.email));
    lines.push(button(&view.submit));
    push_status(lines, view.message.as_ref());
}

fn render_register(lines: &mut Vec<String>, view: &RegisterView) {
    for field in &view.fields {
        render_field(lines, field);
    }
    lines.push(format!("Education: {}", view.education));
    lines.push(button(&view.submit));
    push_status(lines, view.message.as_ref());
}

fn render_field(lines: &mut Vec<String>, field: &FieldView) {
    lines.push(format!("{}: {}", field.field.label(), field.value));
    if let Some(hint) = &field.hint {
        lines.push(format!("  ! {hint}"));
    }
}

fn render_find_jobs(lines: &mut Vec<String>, view: &FindJobsView) {
    let filters = &view.filters;
    lines.push(format!(
        "Keyword: {} | Posted: {} | Education: {} | Salary: {} | Experience: {}",
        filters.keyword, filters.date_posted, filters.education, filters.salary, filters.experience
    ));
    render_list(lines, &view.results);
}

fn render_list(lines: &mut Vec<String>, view: &JobListView) {
    match view {
        JobListView::Loading(text) => lines.push(text.clone()),
        JobListView::Notice(status) => push_status(lines, Some(status)),
        JobListView::Cards(cards) => {
            for (number, card) in cards.iter().enumerate() {
                lines.push(format!(
                    "{}. {} [{}]  {}  {}  <{}>",
                    number + 1,
                    card.title,
                    card.badge.label,
                    card.id_label,
                    card.posted_label,
                    card.action.label()
                ));
            }
        }
    }
}

fn render_detail(lines: &mut Vec<String>, view: &DetailView) {
    match view {
        DetailView::Status(text) => lines.push(text.clone()),
        DetailView::Loaded(content) => {
            lines.push(format!("{}{}", content.title_label, content.badge.label));
            lines.push(content.id_label.clone());
            lines.push(content.date_label.clone());
            lines.push(format!("Description: {}", content.description));
            lines.push(format!("Salary: {}", content.salary));
            lines.push(format!("Minimum education: {}", content.education));
            lines.push(format!("Minimum experience: {}", content.experience));
            lines.push(format!("Posted by: {}", content.creator));
        }
    }
}

fn render_apply(lines: &mut Vec<String>, view: &ApplyView) {
    render_detail(lines, &view.detail);
    lines.push(button(&view.confirm));
    push_status(lines, view.message.as_ref());
}

fn button(view: &ButtonView) -> String {
    if view.enabled {
        format!("[{}]", view.label)
    } else {
        format!("[{}] (disabled)", view.label)
    }
}

fn push_status(lines: &mut Vec<String>, status: Option<&StatusLine>) {
    if let Some(status) = status {
        let marker = match status.severity {
            Severity::Info => "",
            Severity::Error => "! ",
        };
        lines.push(format!("{marker}{}", status.text));
    }
}
