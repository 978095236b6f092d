//! View-model produced by the list view, plus its terminal rendering.

use std::fmt;

use crate::card::CardView;
use crate::drawer::MutationDrawer;
use crate::fetch_state::FetchFailure;
use crate::refresh::RefreshHandle;
use crate::types::CustomerId;

pub const EMPTY_MESSAGE: &str = "No customers available";

/// The "create customer" button. Present in every state except loading.
#[derive(Debug, Clone)]
pub struct CreateEntry {
    refresh: RefreshHandle,
}

impl CreateEntry {
    pub(crate) fn new(refresh: RefreshHandle) -> Self {
        Self { refresh }
    }

    pub fn label(&self) -> &'static str {
        "Create customer"
    }

    /// Press the button: an open, empty create drawer.
    pub fn open_drawer(&self) -> MutationDrawer {
        let mut drawer = MutationDrawer::create(self.refresh.clone());
        drawer.open();
        drawer
    }
}

#[derive(Debug, Clone)]
pub enum ListView {
    /// Spinner only.
    Loading,
    Failed {
        create: CreateEntry,
        failure: FetchFailure,
    },
    Empty {
        create: CreateEntry,
    },
    Cards {
        create: CreateEntry,
        cards: Vec<CardView>,
    },
}

impl ListView {
    pub fn create_entry(&self) -> Option<&CreateEntry> {
        match self {
            ListView::Loading => None,
            ListView::Failed { create, .. }
            | ListView::Empty { create }
            | ListView::Cards { create, .. } => Some(create),
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            ListView::Cards { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn card(&self, id: CustomerId) -> Option<&CardView> {
        self.cards().iter().find(|card| card.id == id)
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(create) = self.create_entry() {
            writeln!(f, "[{}]", create.label())?;
        }
        match self {
            ListView::Loading => write!(f, "Loading customers..."),
            ListView::Failed { failure, .. } => {
                write!(f, "Error {}: {}", failure.code, failure.message)
            }
            ListView::Empty { .. } => write!(f, "{EMPTY_MESSAGE}"),
            ListView::Cards { cards, .. } => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{card}")?;
                }
                Ok(())
            }
        }
    }
}
