//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences; timestamps in expected
//! request bodies are literal strings, so the canonical `+0000` wire form is
//! pinned down exactly.

use serde_json::Value;
use trakt_core::{
    ApiError, Comment, HttpMethod, HttpRequest, HttpResponse, SyncItems, TraktClient, TraktList,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TraktClient {
    TraktClient::new("key123")
        .with_base_url(BASE_URL)
        .with_access_token("tok")
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Check method, path, headers, and (when present) the JSON body of a built
/// request against the vector's `expected_request`.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(expected_body) => {
            let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Compare a parse outcome against `expected_result` or `expected_error`.
fn check_outcome<T>(name: &str, result: Result<T, ApiError>, case: &Value)
where
    T: serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    match case.get("expected_error") {
        Some(expected_error) => {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(
                    matches!(err, ApiError::NotFound),
                    "{name}: expected NotFound, got {err:?}"
                ),
                "Unauthorized" => assert!(
                    matches!(err, ApiError::Unauthorized),
                    "{name}: expected Unauthorized, got {err:?}"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        }
        None => {
            let value = result.unwrap();
            let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(value, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[test]
fn comment_test_vectors() {
    let raw = include_str!("../../test-vectors/comments.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        match case["op"].as_str().unwrap() {
            "post" => {
                let input: Comment = serde_json::from_value(case["input"].clone()).unwrap();
                let req = c.comments().build_post(&input).unwrap();
                assert_request(name, &req, expected_req);
                check_outcome(name, c.comments().parse_post(simulated(case)), case);
            }
            "update" => {
                let id = case["input_id"].as_u64().unwrap() as u32;
                let input: Comment = serde_json::from_value(case["input"].clone()).unwrap();
                let req = c.comments().build_update(id, &input).unwrap();
                assert_request(name, &req, expected_req);
                check_outcome(name, c.comments().parse_update(simulated(case)), case);
            }
            "get" => {
                let id = case["input_id"].as_u64().unwrap() as u32;
                let req = c.comments().build_get(id);
                assert_request(name, &req, expected_req);
                check_outcome(name, c.comments().parse_get(simulated(case)), case);
            }
            "delete" => {
                let id = case["input_id"].as_u64().unwrap() as u32;
                let req = c.comments().build_delete(id);
                assert_request(name, &req, expected_req);
                let result = c.comments().parse_delete(simulated(case));
                if case.get("expected_error").is_some() {
                    assert!(
                        matches!(result.unwrap_err(), ApiError::NotFound),
                        "{name}: expected NotFound"
                    );
                } else {
                    assert!(result.is_ok(), "{name}: expected success");
                }
            }
            other => panic!("{name}: unknown op: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[test]
fn user_test_vectors() {
    let raw = include_str!("../../test-vectors/users.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        match case["op"].as_str().unwrap() {
            "profile" => {
                let username = case["input_username"].as_str().unwrap();
                let req = c.users().build_profile(username);
                assert_request(name, &req, expected_req);
                check_outcome(name, c.users().parse_profile(simulated(case)), case);
            }
            "settings" => {
                let req = c.users().build_settings();
                assert_request(name, &req, expected_req);
                check_outcome(name, c.users().parse_settings(simulated(case)), case);
            }
            "history_movies" => {
                let username = case["input_username"].as_str().unwrap();
                let page = case.get("input_page").and_then(Value::as_u64).map(|p| p as u32);
                let limit = case.get("input_limit").and_then(Value::as_u64).map(|l| l as u32);
                let req = c.users().build_history_movies(username, page, limit);
                assert_request(name, &req, expected_req);
                check_outcome(name, c.users().parse_history_movies(simulated(case)), case);
            }
            "create_list" => {
                let username = case["input_username"].as_str().unwrap();
                let input: TraktList = serde_json::from_value(case["input"].clone()).unwrap();
                let req = c.users().build_create_list(username, &input).unwrap();
                assert_request(name, &req, expected_req);
                check_outcome(name, c.users().parse_create_list(simulated(case)), case);
            }
            other => panic!("{name}: unknown op: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sync
// ---------------------------------------------------------------------------

#[test]
fn sync_test_vectors() {
    let raw = include_str!("../../test-vectors/sync.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];
        let input: SyncItems = serde_json::from_value(case["input"].clone()).unwrap();

        match case["op"].as_str().unwrap() {
            "add_to_collection" => {
                let req = c.sync().build_add_to_collection(&input).unwrap();
                assert_request(name, &req, expected_req);
                check_outcome(name, c.sync().parse_add_to_collection(simulated(case)), case);
            }
            "remove_from_collection" => {
                let req = c.sync().build_remove_from_collection(&input).unwrap();
                assert_request(name, &req, expected_req);
                check_outcome(
                    name,
                    c.sync().parse_remove_from_collection(simulated(case)),
                    case,
                );
            }
            "add_to_history" => {
                let req = c.sync().build_add_to_history(&input).unwrap();
                assert_request(name, &req, expected_req);
                check_outcome(name, c.sync().parse_add_to_history(simulated(case)), case);
            }
            "add_ratings" => {
                let req = c.sync().build_add_ratings(&input).unwrap();
                assert_request(name, &req, expected_req);
                check_outcome(name, c.sync().parse_add_ratings(simulated(case)), case);
            }
            other => panic!("{name}: unknown op: {other}"),
        }
    }
}
