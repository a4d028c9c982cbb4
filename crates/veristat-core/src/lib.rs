#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod artifact;
pub mod capability;
pub mod dsn;
pub mod encode;
pub mod error;
pub mod graphql;
pub mod report;
pub mod transport;

pub use artifact::Artifact;
pub use capability::CapabilitySet;
pub use dsn::Dsn;
pub use error::{ReportError, Result};
pub use report::{PublishedReport, publish};
pub use transport::{HttpTransport, Transport};
