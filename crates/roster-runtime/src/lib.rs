//! Client-side synchronization core.
//!
//! ```text
//! user action --> [ Coordinator ] --> [ EditStateMachine ] (form semantics)
//!                       |
//!                       v
//!                 [ RemoteApi ] --> [ RecordStore ] (wholesale reload) --> Snapshot --> frontend
//! ```
//!
//! The store is only ever written by reloads. Mutations never patch cached
//! lists; each one is followed by a full re-fetch of the affected list.

pub mod busy;
pub mod config;
pub mod confirm;
pub mod coordinator;
pub mod edit;
pub mod error;
pub mod status;
pub mod store;
mod sync;

pub use busy::{Affordance, Affordances, BusyGuard};
pub use config::{Config, ServerConfig};
pub use confirm::{Confirm, FixedAnswer};
pub use coordinator::{ActionOutcome, Coordinator, SkipReason, Snapshot};
pub use edit::{EditSession, EditStateMachine, SubmitRequest, SubmitTarget};
pub use error::{Error, Result};
pub use status::{StatusLevel, StatusMessage};
pub use store::{RecordStore, ReloadOutcome};

use roster_client::HttpClient;

/// Build a coordinator talking HTTP to the configured server.
pub fn connect(config: &Config, base_url: &str) -> Result<Coordinator<HttpClient>> {
    let client = HttpClient::with_timeout(base_url, config.server.timeout())?;
    Ok(Coordinator::new(client))
}
