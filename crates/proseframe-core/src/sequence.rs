//! Request sequencing
//!
//! A new generation request supersedes any request still in flight. Each
//! request takes a [`Ticket`] from a [`RequestSequencer`]; a response is only
//! accepted into a [`DocumentSlot`] if its ticket is still the latest one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use proseframe_ast::Document;

/// Sequence number of one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing tickets
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier tickets
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Check whether `ticket` is the most recently issued one
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Holds the document of the latest request
#[derive(Debug, Default)]
pub struct DocumentSlot {
    sequencer: RequestSequencer,
    current: Mutex<Option<(Ticket, Document)>>,
}

impl DocumentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request
    pub fn begin(&self) -> Ticket {
        self.sequencer.begin()
    }

    /// Offer the document produced for `ticket`
    ///
    /// Returns `false`, dropping the document, when a newer request has
    /// started since `ticket` was issued.
    pub fn offer(&self, ticket: Ticket, document: Document) -> bool {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "dropping superseded response");
            return false;
        }
        if matches!(*current, Some((held, _)) if held >= ticket) {
            return false;
        }
        *current = Some((ticket, document));
        true
    }

    /// The accepted document, if any
    pub fn current(&self) -> Option<Document> {
        let current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.as_ref().map(|(_, doc)| doc.clone())
    }
}
