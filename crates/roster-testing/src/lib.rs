//! Testing infrastructure for roster tests.
//!
//! - `Backend`: in-memory service state with the server's validation rules
//! - `FakeApi`: in-process `RemoteApi` double with a call log, scripted failures and held calls
//! - `StubServer`: the same backend served over real HTTP
//! - `TestWorld`: isolated data directory plus stub server for CLI tests

pub mod backend;
pub mod fake;
pub mod server;
pub mod world;

pub use axum::http::Method;
pub use backend::{Backend, Rejection, Reply};
pub use fake::{Call, Endpoint, FakeApi, Gate};
pub use server::{StubServer, closed_port_url};
pub use world::{CliResult, TestWorld};
