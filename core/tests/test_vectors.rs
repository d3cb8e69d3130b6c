//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use trademark_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, RecordDraft, TrademarkClient};

const BASE_URL: &str = "http://localhost:8000/api/v1/trademarks";

fn client() -> TrademarkClient {
    TrademarkClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Check a built request against the vector's `expected_request` block.
/// Vector paths are relative to the collection endpoint.
fn check_request(req: &HttpRequest, expected: &serde_json::Value, name: &str) {
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

    match (&req.body, &expected["body"]) {
        (None, serde_json::Value::Null) => {}
        (Some(body), expected_body) => {
            let body: serde_json::Value = serde_json::from_str(body).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");
        }
        (None, expected_body) => panic!("{name}: missing body, expected {expected_body}"),
    }
}

fn response_from(case: &serde_json::Value) -> HttpResponse {
    HttpResponse {
        status: case["response"]["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: case["response"]["body"].as_str().unwrap().to_string(),
    }
}

/// Check a parse error against the vector's `expected.err` description.
fn check_error(err: ApiError, expected: &serde_json::Value, name: &str) {
    match expected {
        serde_json::Value::String(kind) => match kind.as_str() {
            "not_found" => assert!(matches!(err, ApiError::NotFound), "{name}: {err:?}"),
            "deserialization" => {
                assert!(matches!(err, ApiError::Deserialization(_)), "{name}: {err:?}")
            }
            other => panic!("{name}: unknown error kind {other}"),
        },
        serde_json::Value::Object(desc) => {
            if let Some(detail) = desc.get("validation") {
                match err {
                    ApiError::Validation(msg) => {
                        assert_eq!(msg, detail.as_str().unwrap(), "{name}: detail")
                    }
                    other => panic!("{name}: expected Validation, got {other:?}"),
                }
            } else if let Some(status) = desc.get("http_status") {
                match err {
                    ApiError::Http { status: got, .. } => {
                        assert_eq!(got as u64, status.as_u64().unwrap(), "{name}: status")
                    }
                    other => panic!("{name}: expected Http, got {other:?}"),
                }
            } else {
                panic!("{name}: unknown error shape {desc:?}");
            }
        }
        other => panic!("{name}: malformed expected.err {other}"),
    }
}

fn load(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/list.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let offset = case["offset"].as_u64().unwrap() as u32;
        let limit = case["limit"].as_u64().unwrap() as u32;

        let req = c.build_list(offset, limit);
        check_request(&req, &case["expected_request"], name);

        match c.parse_list(response_from(case)) {
            Ok(page) => assert_eq!(
                serde_json::to_value(&page).unwrap(),
                case["expected"]["ok"],
                "{name}: result"
            ),
            Err(err) => check_error(err, &case["expected"]["err"], name),
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/get.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_i64().unwrap();

        let req = c.build_get(id);
        check_request(&req, &case["expected_request"], name);

        match c.parse_get(response_from(case)) {
            Ok(record) => assert_eq!(
                serde_json::to_value(&record).unwrap(),
                case["expected"]["ok"],
                "{name}: result"
            ),
            Err(err) => check_error(err, &case["expected"]["err"], name),
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/create.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: RecordDraft = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create(&input).unwrap();
        check_request(&req, &case["expected_request"], name);

        match c.parse_create(response_from(case)) {
            Ok(record) => assert_eq!(
                serde_json::to_value(&record).unwrap(),
                case["expected"]["ok"],
                "{name}: result"
            ),
            Err(err) => check_error(err, &case["expected"]["err"], name),
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/update.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_i64().unwrap();
        let input: RecordDraft = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update(id, &input).unwrap();
        check_request(&req, &case["expected_request"], name);

        match c.parse_update(response_from(case)) {
            Ok(record) => assert_eq!(
                serde_json::to_value(&record).unwrap(),
                case["expected"]["ok"],
                "{name}: result"
            ),
            Err(err) => check_error(err, &case["expected"]["err"], name),
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let vectors = load(include_str!("../../test-vectors/delete.json"));

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_i64().unwrap();

        let req = c.build_delete(id);
        check_request(&req, &case["expected_request"], name);

        match c.parse_delete(response_from(case)) {
            Ok(()) => assert!(case["expected"]["err"].is_null(), "{name}: expected error"),
            Err(err) => check_error(err, &case["expected"]["err"], name),
        }
    }
}
