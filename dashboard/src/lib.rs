//! Terminal host for the customer dashboard.
//!
//! Executes the requests built by `customer-core` over blocking HTTP and
//! prints the resulting list view and notifications.

pub mod args;
pub mod session;
pub mod transport;

pub use args::{Cli, Commands};
pub use session::{FormEdits, Session};
pub use transport::{Transport, UreqTransport};
