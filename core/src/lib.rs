//! Client core for the customer dashboard.
//!
//! # Overview
//! Everything between the customer API and the screen, without any I/O:
//! `CustomerClient` builds requests and parses responses, the
//! `ListViewController` owns the fetch lifecycle and renders a `ListView`,
//! and drawers and cards turn user actions into mutations that ask the list
//! to re-fetch.
//!
//! # Design
//! - Host-does-IO: every network call is a `build_*`/`parse_*` pair with the
//!   round-trip executed by the caller, so the lifecycle is deterministic and
//!   overlapping fetches can be settled in any order in tests.
//! - The fetch state is owned by the controller alone. Descendants receive a
//!   `RefreshHandle` capability and a `Notifier`; neither can touch the state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod card;
pub mod client;
pub mod drawer;
pub mod error;
pub mod fetch_state;
pub mod form;
pub mod http;
pub mod list_view;
pub mod mutation;
pub mod notify;
pub mod refresh;
pub mod types;
pub mod view;

pub use card::CardView;
pub use client::CustomerClient;
pub use drawer::{DrawerError, DrawerKind, MutationDrawer};
pub use error::{ApiError, ErrorCode};
pub use fetch_state::{FetchFailure, FetchState};
pub use form::{CustomerForm, FieldError, FormErrors};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use list_view::{ListViewController, PendingFetch, SequencePolicy, Ticket};
pub use mutation::{MutationKind, PendingMutation};
pub use notify::{notification_bus, Notification, NotificationBus, NotificationFeed, NotificationKind, Notifier};
pub use refresh::{refresh_channel, RefreshHandle, RefreshReason};
pub use types::{Customer, CustomerId, CustomerUpdate, Gender, NewCustomer};
pub use view::{CreateEntry, ListView};
