//! Stale-response guard for overlapping requests.
//!
//! A view that can fire a request again before the previous one answered (picking
//! another student, toggling AI explanations, opening a different tutor) takes a
//! [`Ticket`] before awaiting and only applies the answer if that ticket is still the
//! newest one. Older answers are dropped whatever order they arrive in.

use dioxus::prelude::*;

/// Identifies one request issued by a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Counter of requests issued; only the latest is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generations {
    latest: u64,
}

impl Generations {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// [`Generations`] held in a signal so async tasks can check it after awaiting.
#[derive(Clone, Copy, PartialEq)]
pub struct StaleGuard {
    generations: Signal<Generations>,
}

impl StaleGuard {
    pub fn begin(&mut self) -> Ticket {
        self.generations.write().begin()
    }

    /// Reads without subscribing, so checking never re-runs the caller.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generations.peek().is_current(ticket)
    }
}

pub fn use_stale_guard() -> StaleGuard {
    let generations = use_signal(Generations::default);
    StaleGuard { generations }
}

/// Progress of a view's main request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
