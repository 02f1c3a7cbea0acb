//! Contract with the recommendation endpoint, and the request plumbing.
//!
//! One POST per submit: JSON profile out, JSON array of matches back, with
//! the CSRF token from the same-origin `csrftoken` cookie as a header. On
//! wasm32 reqwest rides the browser fetch API; the async task is driven by
//! `spawn_local` and re-enters the reducer when it settles. There is no
//! retry and no timeout: a failed request surfaces one generic error, a
//! stalled one keeps the loader on screen.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use crate::wizard::{logic, WizardApp};

/// Route the original backend registers for recommendations.
pub const RECOMMENDATIONS_PATH: &str = "/recommendations/";

/// Header carrying the CSRF cookie value.
pub const CSRF_HEADER: &str = "X-CSRFToken";

const CSRF_COOKIE: &str = "csrftoken";

/// The user profile sent on submit, built fresh from current selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub degree: String,
    pub field: String,
    pub location: String,
    #[serde(rename = "wfhOnly")]
    pub wfh_only: bool,
}

/// One recommendation as returned by the server.
///
/// Fields default when absent rather than failing the whole response; the
/// server's output is rendered, not validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub match_percentage: u16,
    #[serde(default)]
    pub match_reason: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub stipend: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub apply_link: String,
    #[serde(default)]
    pub missing_skills: Vec<MissingSkill>,
}

/// A skill the user lacks for a given match, with remediation resources.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissingSkill {
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub youtube_link: String,
    #[serde(default)]
    pub roadmap: Vec<String>,
}

/// Extract a cookie value from a raw `document.cookie` string.
fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';').map(str::trim).find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == name).then(|| v.to_string())
    })
}

/// Read the CSRF token from the document cookie, percent-decoded.
#[cfg(target_arch = "wasm32")]
fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html_doc = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let raw = html_doc.cookie().ok()?;
    let value = cookie_value(&raw, CSRF_COOKIE)?;
    match js_sys::decode_uri_component(&value) {
        Ok(decoded) => Some(String::from(decoded)),
        Err(_) => Some(value),
    }
}

/// Absolute endpoint URL: same origin as the page plus the fixed route.
#[cfg(target_arch = "wasm32")]
fn endpoint_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{origin}{RECOMMENDATIONS_PATH}"))
}

#[cfg(target_arch = "wasm32")]
async fn post_profile(
    url: String,
    token: Option<String>,
    payload: SubmissionPayload,
) -> Result<Vec<MatchResult>, reqwest::Error> {
    let client = reqwest::Client::new();
    let mut request = client.post(url).json(&payload);
    if let Some(token) = token {
        request = request.header(CSRF_HEADER, token);
    }
    request.send().await?.error_for_status()?.json().await
}

/// Fire the recommendation request and feed the outcome back into the
/// reducer. The app stays responsive; exactly one request is in flight
/// because submit is a no-op while the loading phase is active.
#[cfg(target_arch = "wasm32")]
pub fn spawn_submit(app: Rc<RefCell<WizardApp>>, payload: SubmissionPayload) {
    wasm_bindgen_futures::spawn_local(async move {
        let Some(url) = endpoint_url() else {
            logic::apply_failure(&mut app.borrow_mut().state);
            return;
        };
        match post_profile(url, csrf_token(), payload).await {
            Ok(matches) => logic::apply_matches(&mut app.borrow_mut().state, matches),
            Err(err) => {
                web_sys::console::error_1(
                    &format!("recommendation request failed: {err}").into(),
                );
                logic::apply_failure(&mut app.borrow_mut().state);
            }
        }
    });
}

/// Open a link in a new browser tab (apply links, tutorial links).
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    if url.is_empty() {
        return;
    }
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_verbatim() {
        let payload = SubmissionPayload {
            skills: vec!["skill_python".into()],
            interests: vec!["interest_it".into()],
            degree: "btech".into(),
            field: "cs".into(),
            location: "pune".into(),
            wfh_only: false,
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"skills":["skill_python"],"interests":["interest_it"],"degree":"btech","field":"cs","location":"pune","wfhOnly":false}"#
        );
    }

    #[test]
    fn payload_with_empty_selections() {
        let payload = SubmissionPayload {
            skills: vec![],
            interests: vec![],
            degree: "other".into(),
            field: "arts".into(),
            location: "any".into(),
            wfh_only: true,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""skills":[]"#));
        assert!(json.contains(r#""wfhOnly":true"#));
    }

    #[test]
    fn match_deserializes_full_object() {
        let json = r#"{
            "title": "Web Development Intern",
            "company": "TechCorp",
            "match_percentage": 80,
            "match_reason": "This internship is a great fit.",
            "location": "Pune",
            "duration": "3 Months",
            "stipend": "₹10,000/month",
            "description": "Build and ship web features.",
            "apply_link": "https://example.com/apply/42",
            "missing_skills": [
                {
                    "skill": "Java",
                    "youtube_link": "https://www.youtube.com/watch?v=grEKMHGYCs8",
                    "roadmap": ["1. Fundamentals", "2. Practice", "3. Build a project"]
                }
            ]
        }"#;
        let m: MatchResult = serde_json::from_str(json).unwrap();
        assert_eq!(m.title, "Web Development Intern");
        assert_eq!(m.match_percentage, 80);
        assert_eq!(m.missing_skills.len(), 1);
        assert_eq!(m.missing_skills[0].roadmap.len(), 3);
        assert_eq!(m.missing_skills[0].roadmap[1], "2. Practice");
    }

    #[test]
    fn match_tolerates_missing_fields() {
        let m: MatchResult = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(m.title, "X");
        assert_eq!(m.match_percentage, 0);
        assert!(m.missing_skills.is_empty());
        assert!(m.apply_link.is_empty());
    }

    #[test]
    fn match_ignores_unknown_fields() {
        let m: MatchResult =
            serde_json::from_str(r#"{"title":"X","id":7,"skills":"Python, SQL"}"#).unwrap();
        assert_eq!(m.title, "X");
    }

    #[test]
    fn empty_array_is_zero_matches() {
        let matches: Vec<MatchResult> = serde_json::from_str("[]").unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn cookie_value_basic() {
        assert_eq!(
            cookie_value("csrftoken=abc123", "csrftoken"),
            Some("abc123".into())
        );
    }

    #[test]
    fn cookie_value_among_others_with_whitespace() {
        let raw = "sessionid=xyz; csrftoken=abc123 ; theme=dark";
        assert_eq!(cookie_value(raw, "csrftoken"), Some("abc123".into()));
    }

    #[test]
    fn cookie_value_keeps_embedded_equals() {
        assert_eq!(
            cookie_value("csrftoken=a=b", "csrftoken"),
            Some("a=b".into())
        );
    }

    #[test]
    fn cookie_value_absent() {
        assert_eq!(cookie_value("sessionid=xyz", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        // A prefix collision must not leak another cookie's value
        assert_eq!(cookie_value("csrftoken2=evil", "csrftoken"), None);
    }
}
