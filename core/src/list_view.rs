//! The list view controller: owner of the fetch lifecycle.
//!
//! # Design
//! The controller follows the same host-does-IO split as `CustomerClient`.
//! `refresh` moves the state to `Loading` and hands back a `PendingFetch`
//! holding the request; the host executes it and passes the result to
//! `settle`, which replaces the state with `Data` or `Error`. Because every
//! settlement assigns a non-loading state, loading is released exactly once
//! per attempt whichever branch ran.
//!
//! Overlapping refreshes are allowed. Under `SequencePolicy::LastSettledWins`
//! whichever response settles last decides the final state, even if it
//! belongs to an older request. `SequencePolicy::LatestRequestWins` tags each
//! attempt with a ticket and discards data from superseded attempts.

use crate::card::CardView;
use crate::client::CustomerClient;
use crate::error::ApiError;
use crate::fetch_state::{FetchFailure, FetchState};
use crate::http::{HttpRequest, HttpResponse};
use crate::notify::Notifier;
use crate::refresh::{refresh_channel, RefreshHandle, RefreshQueue, RefreshReason};
use crate::view::{CreateEntry, ListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencePolicy {
    /// Apply every settlement in arrival order.
    #[default]
    LastSettledWins,
    /// Only the most recently issued fetch may change the displayed data.
    LatestRequestWins,
}

/// Identifies one fetch attempt. Tickets increase with every `refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A list request waiting for the host. Settled at most once.
#[derive(Debug)]
pub struct PendingFetch {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

pub struct ListViewController<N> {
    client: CustomerClient,
    notifier: N,
    policy: SequencePolicy,
    state: FetchState,
    mounted: bool,
    issued: u64,
    in_flight: usize,
    refresh: RefreshHandle,
    queue: RefreshQueue,
}

impl<N: Notifier> ListViewController<N> {
    pub fn new(client: CustomerClient, notifier: N) -> Self {
        let (refresh, queue) = refresh_channel();
        Self {
            client,
            notifier,
            policy: SequencePolicy::default(),
            state: FetchState::Idle,
            mounted: false,
            issued: 0,
            in_flight: 0,
            refresh,
            queue,
        }
    }

    pub fn with_policy(mut self, policy: SequencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn client(&self) -> &CustomerClient {
        &self.client
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Capability handed to drawers and cards so they can request a re-fetch.
    pub fn refresh_handle(&self) -> RefreshHandle {
        self.refresh.clone()
    }

    /// First display. Issues the initial fetch once; later calls do nothing.
    pub fn mount(&mut self) -> Option<PendingFetch> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.refresh())
    }

    pub fn refresh(&mut self) -> PendingFetch {
        self.issued += 1;
        self.in_flight += 1;
        let ticket = Ticket(self.issued);
        self.state = FetchState::Loading;
        tracing::debug!(?ticket, in_flight = self.in_flight, "fetching customers");
        PendingFetch {
            ticket,
            request: self.client.build_list_customers(),
        }
    }

    /// One fetch per refresh request queued by descendants since the last call.
    pub fn pending_refreshes(&mut self) -> Vec<PendingFetch> {
        self.queue
            .drain()
            .into_iter()
            .map(|reason: RefreshReason| {
                tracing::debug!(?reason, "handling refresh request");
                self.refresh()
            })
            .collect()
    }

    pub fn settle(&mut self, pending: PendingFetch, outcome: Result<HttpResponse, ApiError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let result = outcome.and_then(|response| self.client.parse_list_customers(response));
        let superseded = self.policy == SequencePolicy::LatestRequestWins
            && pending.ticket != Ticket(self.issued);

        match result {
            Ok(customers) if superseded => {
                tracing::debug!(ticket = ?pending.ticket, count = customers.len(), "dropping superseded fetch");
            }
            Ok(customers) => {
                tracing::info!(ticket = ?pending.ticket, count = customers.len(), "customers loaded");
                self.state = FetchState::Data(customers);
            }
            Err(err) => {
                tracing::warn!(ticket = ?pending.ticket, error = %err, "failed to load customers");
                self.notifier.notify_error(&err.code(), err.message());
                if !superseded {
                    self.state = FetchState::Error(FetchFailure::from(&err));
                }
            }
        }
    }

    /// Render the current state: loading, then error, then empty, then cards.
    pub fn view(&self) -> ListView {
        let create = CreateEntry::new(self.refresh.clone());
        match &self.state {
            FetchState::Idle | FetchState::Loading => ListView::Loading,
            FetchState::Error(failure) => ListView::Failed {
                create,
                failure: failure.clone(),
            },
            FetchState::Data(customers) if customers.is_empty() => ListView::Empty { create },
            FetchState::Data(customers) => ListView::Cards {
                create,
                cards: customers
                    .iter()
                    .map(|customer| CardView::new(customer, self.refresh.clone()))
                    .collect(),
            },
        }
    }
}
