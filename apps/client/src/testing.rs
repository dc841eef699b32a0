//! In-process stand-in for the portfolio API, backed by the server's own
//! stores, with switches for failing, gating and corrupting responses.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_api::errors::AppError;
use portfolio_api::store::seed::{seed_profile, seed_projects};
use portfolio_api::store::{ProfileStore, ProjectStore};
use portfolio_api::validation::{validate_profile, validate_project};
use portfolio_types::{Profile, ProjectId, ProjectInput};
use reqwest::Method;
use serde_json::{json, Value};
use tokio::sync::Semaphore;

use crate::transport::{Transport, TransportError};

pub struct FakeServer {
    pub profile: ProfileStore,
    pub projects: ProjectStore,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    garble_writes: AtomicBool,
    /// When set, each write waits for one permit before touching the stores.
    write_gate: Option<Arc<Semaphore>>,
    calls: Mutex<Vec<(Method, String)>>,
}

impl FakeServer {
    pub fn seeded() -> Self {
        Self {
            profile: ProfileStore::new(seed_profile()),
            projects: ProjectStore::with_seed(seed_projects()),
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            garble_writes: AtomicBool::new(false),
            write_gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn gated(mut self) -> Self {
        self.write_gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release_writes(&self, n: usize) {
        if let Some(gate) = &self.write_gate {
            gate.add_permits(n);
        }
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    /// Writes still happen but the response body is not the expected shape.
    pub fn garble_writes(&self, on: bool) {
        self.garble_writes.store(on, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn handle(&self, method: &Method, path: &str, body: Option<Value>) -> Result<Value, AppError> {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match (method.as_str(), segments.as_slice()) {
            ("GET", ["api", "profile"]) => Ok(json!(self.profile.get())),
            ("PUT", ["api", "profile"]) => {
                let profile: Profile = parse(body)?;
                validate_profile(&profile)?;
                Ok(json!(self.profile.replace(profile)))
            }
            ("GET", ["api", "projects"]) => Ok(json!(self.projects.list())),
            ("POST", ["api", "projects"]) => {
                let input: ProjectInput = parse(body)?;
                validate_project(&input)?;
                Ok(json!(self.projects.create(input)))
            }
            ("PUT", ["api", "projects", id]) => {
                let id = parse_id(id)?;
                let input: ProjectInput = parse(body)?;
                validate_project(&input)?;
                let project = self
                    .projects
                    .update(id, input)
                    .map_err(|e| AppError::NotFound(e.to_string()))?;
                Ok(json!(project))
            }
            ("DELETE", ["api", "projects", id]) => {
                let id = parse_id(id)?;
                if self.projects.delete(id) {
                    Ok(Value::Null)
                } else {
                    Err(AppError::NotFound(format!("Project {id} not found")))
                }
            }
            _ => Err(AppError::NotFound(format!("no route for {method} {path}"))),
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(body: Option<Value>) -> Result<T, AppError> {
    serde_json::from_value(body.unwrap_or(Value::Null))
        .map_err(|e| AppError::Validation(e.to_string()))
}

fn parse_id(raw: &str) -> Result<ProjectId, AppError> {
    raw.parse()
        .map(ProjectId)
        .map_err(|_| AppError::Validation(format!("bad id '{raw}'")))
}

fn to_transport_error(err: AppError) -> TransportError {
    let status = match err {
        AppError::NotFound(_) => 404,
        AppError::Validation(_) => 400,
        AppError::Internal(_) => 500,
    };
    TransportError::Status {
        status,
        message: err.to_string(),
    }
}

#[async_trait]
impl Transport for FakeServer {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.clone(), path.to_string()));

        let is_write = method != Method::GET;
        if is_write {
            if let Some(gate) = &self.write_gate {
                gate.acquire().await.expect("gate closed").forget();
            }
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(TransportError::Status {
                    status: 503,
                    message: "service unavailable".to_string(),
                });
            }
        } else if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TransportError::Status {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        let value = self
            .handle(&method, path, body)
            .map_err(to_transport_error)?;

        if is_write && self.garble_writes.load(Ordering::SeqCst) {
            return Ok(json!({ "unexpected": true }));
        }
        Ok(value)
    }
}
