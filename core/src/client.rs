//! Stateless HTTP request builder and response parser for the customer API.
//!
//! # Design
//! `CustomerClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Mutations resolve to `()`: the list view
//! re-fetches after a mutation instead of trusting the mutation's body.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{reason_phrase, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Customer, CustomerId, CustomerUpdate, NewCustomer};

const CUSTOMERS_PATH: &str = "/api/v1/customers";

/// Accepts both a bare array and the `{"data": [...]}` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum CustomerList {
    Bare(Vec<Customer>),
    Envelope { data: Vec<Customer> },
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CustomerClient {
    base_url: String,
}

impl CustomerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection(&self) -> String {
        format!("{}{CUSTOMERS_PATH}", self.base_url)
    }

    fn item(&self, id: CustomerId) -> String {
        format!("{}{CUSTOMERS_PATH}/{id}", self.base_url)
    }

    pub fn build_list_customers(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.collection())
    }

    pub fn build_get_customer(&self, id: CustomerId) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.item(id))
    }

    pub fn build_create_customer(&self, input: &NewCustomer) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest::new(HttpMethod::Post, self.collection()).with_json(body))
    }

    pub fn build_update_customer(
        &self,
        id: CustomerId,
        input: &CustomerUpdate,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest::new(HttpMethod::Put, self.item(id)).with_json(body))
    }

    pub fn build_delete_customer(&self, id: CustomerId) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.item(id))
    }

    /// Customers in response order. Duplicate ids are kept as-is.
    pub fn parse_list_customers(&self, response: HttpResponse) -> Result<Vec<Customer>, ApiError> {
        check_status(&response, &[200])?;
        let list: CustomerList = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(match list {
            CustomerList::Bare(customers) | CustomerList::Envelope { data: customers } => customers,
        })
    }

    pub fn parse_get_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        check_status(&response, &[200])?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn parse_create_customer(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 201])
    }

    pub fn parse_update_customer(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])
    }

    pub fn parse_delete_customer(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])
    }
}

/// Map unexpected status codes to `ApiError::Server`, preferring the
/// `message` field of a JSON error body.
fn check_status(response: &HttpResponse, accepted: &[u16]) -> Result<(), ApiError> {
    if accepted.contains(&response.status) {
        return Ok(());
    }
    let message = match serde_json::from_str::<ErrorPayload>(&response.body) {
        Ok(ErrorPayload { message: Some(message) }) => message,
        _ if !response.body.trim().is_empty() => response.body.clone(),
        _ => reason_phrase(response.status).to_string(),
    };
    Err(ApiError::Server {
        status: response.status,
        message,
    })
}
