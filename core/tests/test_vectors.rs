//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or errors. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use customer_core::{
    ApiError, Customer, CustomerClient, CustomerUpdate, HttpMethod, HttpRequest, HttpResponse,
    NewCustomer,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

fn client() -> CustomerClient {
    CustomerClient::new(BASE_URL)
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

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

/// Returns true when the case expected an error and it matched.
fn check_expected_error<T: std::fmt::Debug>(name: &str, case: &Value, result: &Result<T, ApiError>) -> bool {
    let Some(expected) = case.get("expected_error") else {
        assert!(result.is_ok(), "{name}: expected success, got {result:?}");
        return false;
    };
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.code().to_string(), expected["code"].as_str().unwrap(), "{name}: code");
    assert_eq!(err.message(), expected["message"].as_str().unwrap(), "{name}: message");
    true
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_list_customers(), &case["expected_request"]);

        let result = c.parse_list_customers(simulated_response(&case));
        if !check_expected_error(name, &case, &result) {
            let expected: Vec<Customer> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: NewCustomer = serde_json::from_value(case["input"].clone()).unwrap();
        assert_request(name, &c.build_create_customer(&input).unwrap(), &case["expected_request"]);

        let result = c.parse_create_customer(simulated_response(&case));
        check_expected_error(name, &case, &result);
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let input: CustomerUpdate = serde_json::from_value(case["input"].clone()).unwrap();
        assert_request(name, &c.build_update_customer(id, &input).unwrap(), &case["expected_request"]);

        let result = c.parse_update_customer(simulated_response(&case));
        check_expected_error(name, &case, &result);
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        assert_request(name, &c.build_delete_customer(id), &case["expected_request"]);

        let result = c.parse_delete_customer(simulated_response(&case));
        check_expected_error(name, &case, &result);
    }
}
