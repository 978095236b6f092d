//! Shared settle path for create, update and delete requests.
//!
//! A mutation never writes the list's fetch state. On success it notifies
//! and asks the list view to re-fetch through its `RefreshHandle`; on failure
//! it only notifies.

use crate::client::CustomerClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::Notifier;
use crate::refresh::{RefreshHandle, RefreshReason};
use crate::types::CustomerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update(CustomerId),
    Delete(CustomerId),
}

impl MutationKind {
    fn refresh_reason(self) -> RefreshReason {
        match self {
            MutationKind::Create => RefreshReason::Created,
            MutationKind::Update(id) => RefreshReason::Updated(id),
            MutationKind::Delete(id) => RefreshReason::Deleted(id),
        }
    }

    fn success_message(self, subject: &str) -> (&'static str, String) {
        match self {
            MutationKind::Create => ("Customer saved", format!("{subject} was successfully saved")),
            MutationKind::Update(_) => ("Customer updated", format!("{subject} was successfully updated")),
            MutationKind::Delete(_) => ("Customer deleted", format!("{subject} was successfully deleted")),
        }
    }
}

/// A mutation request waiting for the host to execute it.
///
/// Not `Clone`: each pending mutation is settled at most once.
#[derive(Debug)]
pub struct PendingMutation {
    pub kind: MutationKind,
    /// Display name of the customer, used in the success notification.
    pub subject: String,
    pub request: HttpRequest,
}

pub(crate) fn settle<N: Notifier>(
    client: &CustomerClient,
    pending: PendingMutation,
    outcome: Result<HttpResponse, ApiError>,
    notifier: &N,
    refresh: &RefreshHandle,
) -> Result<(), ApiError> {
    let PendingMutation { kind, subject, .. } = pending;
    let parsed = outcome.and_then(|response| match kind {
        MutationKind::Create => client.parse_create_customer(response),
        MutationKind::Update(_) => client.parse_update_customer(response),
        MutationKind::Delete(_) => client.parse_delete_customer(response),
    });

    match parsed {
        Ok(()) => {
            tracing::info!(?kind, "mutation succeeded");
            let (title, description) = kind.success_message(&subject);
            notifier.notify_success(title, &description);
            refresh.request(kind.refresh_reason());
            Ok(())
        }
        Err(err) => {
            tracing::warn!(?kind, error = %err, "mutation failed");
            notifier.notify_error(&err.code(), err.message());
            Err(err)
        }
    }
}
