//! Shared test doubles and request helpers

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use hospital_server::{
    build_router, AppState, Appointment, AppointmentService, DbError, NewAppointment,
    ServerConfig,
};
use parking_lot::Mutex;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Appointment>,
    last_id: i32,
}

/// In-memory appointment store
///
/// Ids are handed out from a counter and never reused, like an identity
/// column. Every trait call bumps `calls`.
#[derive(Default)]
pub struct InMemoryAppointments {
    table: Mutex<Table>,
    calls: AtomicUsize,
}

impl InMemoryAppointments {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of service calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.table.lock().rows.len()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AppointmentService for InMemoryAppointments {
    async fn list_all(&self) -> Result<Vec<Appointment>, DbError> {
        self.touch();
        Ok(self.table.lock().rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DbError> {
        self.touch();
        Ok(self.table.lock().rows.get(&id).cloned())
    }

    async fn create(&self, appointment: &NewAppointment) -> Result<i32, DbError> {
        self.touch();
        let mut table = self.table.lock();
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, appointment.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, appointment: &Appointment) -> Result<bool, DbError> {
        self.touch();
        let mut table = self.table.lock();
        match table.rows.get_mut(&appointment.id) {
            Some(row) => {
                *row = appointment.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DbError> {
        self.touch();
        Ok(self.table.lock().rows.remove(&id).is_some())
    }
}

/// Store whose every call fails as if the database were unreachable
pub struct UnreachableDatabase;

fn unreachable() -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol("connection refused".into()))
}

#[async_trait]
impl AppointmentService for UnreachableDatabase {
    async fn list_all(&self) -> Result<Vec<Appointment>, DbError> {
        Err(unreachable())
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<Appointment>, DbError> {
        Err(unreachable())
    }

    async fn create(&self, _appointment: &NewAppointment) -> Result<i32, DbError> {
        Err(unreachable())
    }

    async fn update(&self, _appointment: &Appointment) -> Result<bool, DbError> {
        Err(unreachable())
    }

    async fn delete_by_id(&self, _id: i32) -> Result<bool, DbError> {
        Err(unreachable())
    }
}

/// Router wired to the given service
pub fn app(service: Arc<dyn AppointmentService>) -> Router {
    build_router(AppState::new(service), &ServerConfig::default())
}

/// Response pieces the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the body is empty
    pub body: Value,
}

/// Send one request through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("valid request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
