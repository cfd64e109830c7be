//! Real HTTP stub of the service, served by axum on an ephemeral port.
//!
//! The server runs on its own thread with a current-thread runtime, so it
//! works the same from `#[tokio::test]` functions and from plain `#[test]`
//! functions that shell out to the CLI binary.

use std::collections::VecDeque;
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use axum::body::{Body, Bytes};
use axum::extract::{Path, Request, State};
use axum::http::{Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, put};
use axum::Router;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::backend::{Backend, Outcome};

/// A canned response returned instead of routing the next matching request.
#[derive(Debug, Clone)]
pub struct Canned {
    pub method: Method,
    pub path: String,
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Default)]
struct Shared {
    backend: Arc<Mutex<Backend>>,
    canned: Arc<Mutex<VecDeque<Canned>>>,
    hits: Arc<Mutex<Vec<(Method, String, String)>>>,
}

pub struct StubServer {
    addr: SocketAddr,
    shared: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start() -> Result<Self> {
        Self::with_backend(Backend::new())
    }

    pub fn with_backend(backend: Backend) -> Result<Self> {
        let listener = StdTcpListener::bind("127.0.0.1:0").context("Failed to bind stub server")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let shared = Shared {
            backend: Arc::new(Mutex::new(backend)),
            ..Shared::default()
        };
        let app = router(shared.clone());
        let (shutdown, stop) = oneshot::channel::<()>();

        let thread = std::thread::Builder::new()
            .name("roster-stub-server".to_string())
            .spawn(move || {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .expect("Failed to build stub server runtime");
                runtime.block_on(async move {
                    let listener = tokio::net::TcpListener::from_std(listener)
                        .expect("Failed to adopt stub listener");
                    axum::serve(listener, app)
                        .with_graceful_shutdown(async {
                            let _ = stop.await;
                        })
                        .await
                        .expect("Stub server failed");
                });
            })
            .context("Failed to spawn stub server thread")?;

        Ok(Self {
            addr,
            shared,
            shutdown: Some(shutdown),
            thread: Some(thread),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.shared.backend.lock().unwrap()
    }

    /// Answer the next `method path` request with `status` and a raw body.
    pub fn respond_once(&self, method: Method, path: &str, status: u16, body: &str) {
        self.shared.canned.lock().unwrap().push_back(Canned {
            method,
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
    }

    /// Requests seen so far as `(method, path, body)`.
    pub fn hits(&self) -> Vec<(Method, String, String)> {
        self.shared.hits.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// URL of a local port nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("Probe port has no address");
    drop(listener);
    format!("http://{}", addr)
}

fn router(shared: Shared) -> Router {
    Router::new()
        .route("/api/departments", get(list_departments).post(create_department))
        .route("/api/departments/:id", delete(delete_department))
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/:id", put(update_employee).delete(delete_employee))
        .layer(middleware::from_fn_with_state(shared.clone(), intercept))
        .with_state(shared)
}

/// Records every request and serves canned responses ahead of the routes.
async fn intercept(State(shared): State<Shared>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    shared.hits.lock().unwrap().push((
        method.clone(),
        path.clone(),
        String::from_utf8_lossy(&bytes).to_string(),
    ));

    let canned = {
        let mut queue = shared.canned.lock().unwrap();
        let position = queue
            .iter()
            .position(|c| c.method == method && c.path == path);
        position.and_then(|i| queue.remove(i))
    };
    if let Some(canned) = canned {
        let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, canned.body).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn respond(outcome: Outcome) -> Response {
    match outcome {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
            match reply.body {
                Some(body) => (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    body.to_string(),
                )
                    .into_response(),
                None => status.into_response(),
            }
        }
        Err(rejection) => {
            let status =
                StatusCode::from_u16(rejection.status).unwrap_or(StatusCode::BAD_REQUEST);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                rejection.body(),
            )
                .into_response()
        }
    }
}

/// Lenient body parsing: anything that is not a JSON object counts as `{}`.
fn parse_body(bytes: &Bytes) -> Value {
    serde_json::from_slice::<Value>(bytes)
        .ok()
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(Default::default()))
}

async fn list_departments(State(shared): State<Shared>) -> Response {
    respond(shared.backend.lock().unwrap().list_departments())
}

async fn create_department(State(shared): State<Shared>, bytes: Bytes) -> Response {
    let payload = parse_body(&bytes);
    respond(shared.backend.lock().unwrap().create_department(&payload))
}

async fn delete_department(State(shared): State<Shared>, Path(id): Path<String>) -> Response {
    respond(shared.backend.lock().unwrap().delete_department(&id))
}

async fn list_employees(State(shared): State<Shared>) -> Response {
    respond(shared.backend.lock().unwrap().list_employees())
}

async fn create_employee(State(shared): State<Shared>, bytes: Bytes) -> Response {
    let payload = parse_body(&bytes);
    respond(shared.backend.lock().unwrap().create_employee(&payload))
}

async fn update_employee(
    State(shared): State<Shared>,
    Path(id): Path<String>,
    bytes: Bytes,
) -> Response {
    let payload = parse_body(&bytes);
    respond(shared.backend.lock().unwrap().update_employee(&id, &payload))
}

async fn delete_employee(State(shared): State<Shared>, Path(id): Path<String>) -> Response {
    respond(shared.backend.lock().unwrap().delete_employee(&id))
}
