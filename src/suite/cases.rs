//! Endpoint cases for the Phase 3 features and the legacy regression checks.
//!
//! Each case pairs an endpoint call with a validator over the response body;
//! the tables preserve the run order of the suite. Validators only see
//! responses whose status already matched, so most of them just extract the
//! fields they report on. The category check is the one place where body
//! shape decides the verdict.

use serde_json::{json, Map, Value};

use crate::http::body;
use crate::http::request::ApiRequest;

/// Fixed match id used by the AI endpoints; no real match exists in a
/// black-box run.
pub const TEST_MATCH_ID: &str = "test-match-id";

/// Category names every deployment is expected to ship.
const EXPECTED_CATEGORIES: [&str; 3] = ["personality", "lifestyle", "relationship"];

/// Verdict from a case validator: whether the test passes and the details
/// line to report.
#[derive(Debug, Clone)]
pub struct Check {
    pub passed: bool,
    pub details: String,
}

impl Check {
    pub fn pass(details: impl Into<String>) -> Self {
        Self {
            passed: true,
            details: details.into(),
        }
    }
}

/// A single scripted endpoint check: the request to issue, the fallback
/// error label when the call fails, and the body validator applied on
/// success.
pub struct TestCase {
    pub name: &'static str,
    pub request: ApiRequest,
    pub failure_hint: &'static str,
    pub check: fn(&Map<String, Value>) -> Check,
}

/// The eleven Phase 3 feature cases, in run order.
pub fn phase3_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "Prompt Categories",
            request: ApiRequest::get("prompts/categories"),
            failure_hint: "Failed to get categories",
            check: check_prompt_categories,
        },
        TestCase {
            name: "Prompts by Category",
            request: ApiRequest::get("prompts/category/personality"),
            failure_hint: "Failed to get prompts",
            check: check_prompts_by_category,
        },
        TestCase {
            name: "Prompt Usage Recording",
            request: ApiRequest::post(
                "prompts/usage",
                json!({"promptId": "test-prompt-id", "category": "personality"}),
            ),
            failure_hint: "Failed to record usage",
            check: check_prompt_usage,
        },
        TestCase {
            name: "Advanced Filters Get",
            request: ApiRequest::get("filters"),
            failure_hint: "Failed to get filters",
            check: check_filters_get,
        },
        TestCase {
            name: "Advanced Filters Apply",
            request: ApiRequest::post(
                "filters/apply",
                json!({
                    "ageRange": [25, 35],
                    "location": "New York",
                    "interests": ["music", "travel"],
                    "education": "college",
                }),
            ),
            failure_hint: "Failed to apply filters",
            check: check_filters_apply,
        },
        TestCase {
            name: "Advanced Filters Clear",
            request: ApiRequest::delete("filters/clear"),
            failure_hint: "Failed to clear filters",
            check: check_filters_clear,
        },
        TestCase {
            name: "AI Icebreakers",
            request: ApiRequest::get(format!("ai-enhanced/icebreakers/{TEST_MATCH_ID}")),
            failure_hint: "Failed to get icebreakers",
            check: check_icebreakers,
        },
        TestCase {
            name: "AI Date Ideas",
            request: ApiRequest::post(
                format!("ai-enhanced/date-ideas/{TEST_MATCH_ID}"),
                json!({
                    "budget": "medium",
                    "location": "indoor",
                    "interests": ["movies", "food"],
                }),
            ),
            failure_hint: "Failed to generate date ideas",
            check: check_date_ideas,
        },
        TestCase {
            name: "AI Conversation Topics",
            request: ApiRequest::get(format!("ai-enhanced/conversation-topics/{TEST_MATCH_ID}")),
            failure_hint: "Failed to get conversation topics",
            check: check_conversation_topics,
        },
        TestCase {
            name: "AI Compatibility Analysis",
            request: ApiRequest::get(format!("ai-enhanced/compatibility/{TEST_MATCH_ID}")),
            failure_hint: "Failed to analyze compatibility",
            check: check_compatibility,
        },
        TestCase {
            name: "AI Flirting Tips",
            request: ApiRequest::get(format!("ai-enhanced/flirting-tips/{TEST_MATCH_ID}")),
            failure_hint: "Failed to get flirting tips",
            check: check_flirting_tips,
        },
    ]
}

/// The pre-Phase-3 endpoints, checked for regressions.
pub fn legacy_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "User Profile (Existing)",
            request: ApiRequest::get("users/profile"),
            failure_hint: "Failed",
            check: check_profile,
        },
        TestCase {
            name: "Matches (Existing)",
            request: ApiRequest::get("matches"),
            failure_hint: "Failed",
            check: check_matches,
        },
    ]
}

fn check_prompt_categories(response: &Map<String, Value>) -> Check {
    let categories = body::array_field(response, "categories");
    let names: Vec<&str> = categories
        .iter()
        .map(|category| category.as_object().map_or("", |object| body::str_field(object, "name", "")))
        .collect();
    let has_expected = EXPECTED_CATEGORIES
        .iter()
        .all(|expected| names.contains(expected));

    Check {
        passed: has_expected,
        details: format!("Found {} categories: {names:?}", categories.len()),
    }
}

fn check_prompts_by_category(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Found {} personality prompts",
        body::array_len(response, "prompts")
    ))
}

fn check_prompt_usage(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Usage recorded: {}",
        body::bool_field(response, "success")
    ))
}

fn check_filters_get(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Filter options: {} categories, Saved filters: {} items",
        body::object_len(response, "filterOptions"),
        body::object_len(response, "savedFilters")
    ))
}

fn check_filters_apply(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Found {} filtered matches",
        body::array_len(response, "matches")
    ))
}

fn check_filters_clear(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Filters cleared: {}",
        body::bool_field(response, "success")
    ))
}

fn check_icebreakers(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Generated {} icebreakers",
        body::array_len(response, "icebreakers")
    ))
}

fn check_date_ideas(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Generated {} date ideas",
        body::array_len(response, "dateIdeas")
    ))
}

fn check_conversation_topics(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Generated {} conversation topics",
        body::array_len(response, "topics")
    ))
}

fn check_compatibility(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Compatibility score: {}%",
        body::nested_i64(response, "compatibility", "score", 0)
    ))
}

fn check_flirting_tips(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Generated {} flirting tips",
        body::array_len(response, "tips")
    ))
}

fn check_profile(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Profile loaded: {}",
        body::truthy_field(response, "user")
    ))
}

fn check_matches(response: &Map<String, Value>) -> Check {
    Check::pass(format!(
        "Found {} matches",
        body::array_len(response, "matches")
    ))
}
