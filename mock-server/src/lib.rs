use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const CUSTOMERS_PATH: &str = "/api/v1/customers";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CustomerRegistration {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub path: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug)]
struct Failure {
    status: StatusCode,
    path: String,
    message: String,
}

impl Failure {
    fn not_found(id: u64) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            path: format!("{CUSTOMERS_PATH}/{id}"),
            message: format!("Customer with id [{id}] not found"),
        }
    }

    fn new(status: StatusCode, path: String, message: &str) -> Self {
        Self {
            status,
            path,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, path = %self.path, message = %self.message, "request rejected");
        let body = ErrorBody {
            path: self.path,
            message: self.message,
            status_code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// In-memory customer table. Ids are assigned sequentially from 1 and
/// listing follows id order.
#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    customers: BTreeMap<u64, Customer>,
}

impl Store {
    pub fn insert(&mut self, input: CustomerRegistration) -> Customer {
        self.next_id += 1;
        let customer = Customer {
            id: self.next_id,
            name: input.name,
            email: input.email,
            age: input.age,
            gender: input.gender,
        };
        self.customers.insert(customer.id, customer.clone());
        customer
    }

    fn email_taken(&self, email: &str) -> bool {
        self.customers.values().any(|c| c.email == email)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Build the router with `seed` inserted in order.
pub fn app_with(seed: Vec<CustomerRegistration>) -> Router {
    let mut store = Store::default();
    for input in seed {
        store.insert(input);
    }
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route(CUSTOMERS_PATH, get(list_customers).post(create_customer))
        .route(
            &format!("{CUSTOMERS_PATH}/{{id}}"),
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(db)
}

/// Customers served by the standalone binary.
pub fn demo_customers() -> Vec<CustomerRegistration> {
    vec![
        CustomerRegistration {
            name: "Alex".to_string(),
            email: "alex@gmail.com".to_string(),
            age: 21,
            gender: Gender::Male,
        },
        CustomerRegistration {
            name: "Jamila".to_string(),
            email: "jamila@gmail.com".to_string(),
            age: 19,
            gender: Gender::Female,
        },
    ]
}

pub async fn run_with(listener: TcpListener, seed: Vec<CustomerRegistration>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed)).await
}

async fn list_customers(State(db): State<Db>) -> Json<Vec<Customer>> {
    let store = db.read().await;
    Json(store.customers.values().cloned().collect())
}

async fn create_customer(
    State(db): State<Db>,
    Json(input): Json<CustomerRegistration>,
) -> Result<(StatusCode, Json<Customer>), Failure> {
    let mut store = db.write().await;
    if store.email_taken(&input.email) {
        return Err(Failure::new(
            StatusCode::CONFLICT,
            CUSTOMERS_PATH.to_string(),
            "Email already taken",
        ));
    }
    let customer = store.insert(input);
    tracing::info!(id = customer.id, "customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn get_customer(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Customer>, Failure> {
    let store = db.read().await;
    store
        .customers
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| Failure::not_found(id))
}

async fn update_customer(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<CustomerUpdate>,
) -> Result<Json<Customer>, Failure> {
    let mut store = db.write().await;
    let current = store
        .customers
        .get(&id)
        .cloned()
        .ok_or_else(|| Failure::not_found(id))?;
    let path = format!("{CUSTOMERS_PATH}/{id}");

    let mut updated = current.clone();
    if let Some(name) = input.name.filter(|n| *n != current.name) {
        updated.name = name;
    }
    if let Some(age) = input.age.filter(|a| *a != current.age) {
        updated.age = age;
    }
    if let Some(email) = input.email.filter(|e| *e != current.email) {
        if store.email_taken(&email) {
            return Err(Failure::new(StatusCode::CONFLICT, path, "email already taken"));
        }
        updated.email = email;
    }
    if let Some(gender) = input.gender.filter(|g| *g != current.gender) {
        updated.gender = gender;
    }
    if updated == current {
        return Err(Failure::new(StatusCode::BAD_REQUEST, path, "no data changes found"));
    }

    store.customers.insert(id, updated.clone());
    tracing::info!(id, "customer updated");
    Ok(Json(updated))
}

async fn delete_customer(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, Failure> {
    let mut store = db.write().await;
    store
        .customers
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| Failure::not_found(id))
}
