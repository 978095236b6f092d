//! Create/update drawers: a togglable overlay holding a customer form.
//!
//! # Design
//! The drawer is a pure trigger. It validates its form, hands back a
//! `PendingMutation` for the host to execute, and on settlement either
//! closes and requests a refresh (success) or stays open (failure). It never
//! reads or writes the list's fetch state.

use thiserror::Error;

use crate::client::CustomerClient;
use crate::error::ApiError;
use crate::form::{CustomerForm, FormErrors};
use crate::http::HttpResponse;
use crate::mutation::{self, MutationKind, PendingMutation};
use crate::notify::Notifier;
use crate::refresh::RefreshHandle;
use crate::types::CustomerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKind {
    Create,
    Update(CustomerId),
}

#[derive(Debug, Error)]
pub enum DrawerError {
    #[error("drawer is closed")]
    Closed,
    #[error(transparent)]
    Invalid(#[from] FormErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone)]
pub struct MutationDrawer {
    kind: DrawerKind,
    open: bool,
    form: CustomerForm,
    refresh: RefreshHandle,
}

impl MutationDrawer {
    pub fn create(refresh: RefreshHandle) -> Self {
        Self {
            kind: DrawerKind::Create,
            open: false,
            form: CustomerForm::default(),
            refresh,
        }
    }

    /// Update drawer for `id`, pre-populated with `initial`.
    pub fn update(id: CustomerId, initial: CustomerForm, refresh: RefreshHandle) -> Self {
        Self {
            kind: DrawerKind::Update(id),
            open: false,
            form: initial,
            refresh,
        }
    }

    pub fn kind(&self) -> DrawerKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            DrawerKind::Create => "Create new customer",
            DrawerKind::Update(_) => "Update customer",
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn form(&self) -> &CustomerForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.form
    }

    /// Validate the form and build the request. Nothing is sent and nothing
    /// is notified when this fails.
    pub fn submit(&self, client: &CustomerClient) -> Result<PendingMutation, DrawerError> {
        if !self.open {
            return Err(DrawerError::Closed);
        }
        let (kind, request) = match self.kind {
            DrawerKind::Create => {
                let payload = self.form.to_new_customer()?;
                (MutationKind::Create, client.build_create_customer(&payload)?)
            }
            DrawerKind::Update(id) => {
                let payload = self.form.to_update()?;
                (MutationKind::Update(id), client.build_update_customer(id, &payload)?)
            }
        };
        Ok(PendingMutation {
            kind,
            subject: self.form.name.trim().to_string(),
            request,
        })
    }

    /// Apply the host's result. Success closes the drawer and requests
    /// exactly one refresh; failure leaves it open.
    pub fn settle<N: Notifier>(
        &mut self,
        client: &CustomerClient,
        pending: PendingMutation,
        outcome: Result<HttpResponse, ApiError>,
        notifier: &N,
    ) -> Result<(), ApiError> {
        mutation::settle(client, pending, outcome, notifier, &self.refresh)?;
        self.close();
        Ok(())
    }
}
