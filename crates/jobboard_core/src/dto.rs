use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One row of a job list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_posted: String,
}

/// Full job record returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDetail {
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_posted: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    pub salary: f64,
    #[serde(default)]
    pub min_education: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub min_experience: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub creator: String,
}

// Ids and dates come back as strings or numbers depending on the endpoint.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

/// Reads `key` from a JSON object the way a truthiness check would: missing,
/// null, false, zero and empty strings count as absent.
pub fn truthy_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// True only for a literal JSON `true` under `key`.
pub fn flag(body: &Value, key: &str) -> bool {
    body.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Parses a job list, or `None` when the body is not an array of jobs.
pub fn job_list(body: &Value) -> Option<Vec<JobSummary>> {
    if !body.is_array() {
        return None;
    }
    Vec::<JobSummary>::deserialize(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_ids_accept_numbers_and_strings() {
        let jobs = job_list(&json!([
            {"job_id": 17, "title": "Rust Dev", "is_open": true, "date_posted": "2024-05-01"},
            {"job_id": "J-9", "title": "Ops", "is_open": false, "date_posted": "2024-04-01"}
        ]))
        .unwrap();
        assert_eq!(jobs[0].job_id, "17");
        assert_eq!(jobs[1].job_id, "J-9");
        assert!(!jobs[1].is_open);
    }

    #[test]
    fn non_array_is_not_a_job_list() {
        assert_eq!(job_list(&json!({"error": "no such user"})), None);
    }

    #[test]
    fn truthy_text_ignores_empty_values() {
        let body = json!({"a": "", "b": null, "c": false, "d": "warn", "e": 0});
        assert_eq!(truthy_text(&body, "a"), None);
        assert_eq!(truthy_text(&body, "b"), None);
        assert_eq!(truthy_text(&body, "c"), None);
        assert_eq!(truthy_text(&body, "d").as_deref(), Some("warn"));
        assert_eq!(truthy_text(&body, "e"), None);
        assert_eq!(truthy_text(&body, "missing"), None);
        assert_eq!(truthy_text(&json!([1, 2]), "d"), None);
    }

    #[test]
    fn detail_parses_numeric_experience() {
        let detail: JobDetail = serde_json::from_value(json!({
            "job_id": 3, "title": "QA", "is_open": true, "date_posted": "2024-01-02",
            "description": "Test things", "salary": 45000, "min_education": 1,
            "min_experience": 2, "creator": "hr@cmkl.ac.th"
        }))
        .unwrap();
        assert_eq!(detail.min_experience, "2");
        assert_eq!(detail.salary, 45000.0);
        assert_eq!(detail.min_education, Some(1));
    }
}
