//! Last-request-wins load tracking
//!
//! Each load gets a monotonic ticket. Only the most recently issued ticket
//! may apply its result; anything older is stale and dropped.

/// Identity of one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct LoadTracker {
    latest: u64,
    in_flight: bool,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding any load still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        self.in_flight = true;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.in_flight && ticket.0 == self.latest
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Hand back `result` if `ticket` is current, closing the request.
    pub fn complete<T>(&mut self, ticket: LoadTicket, result: T) -> Option<T> {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.latest, "discarding stale load");
            return None;
        }
        self.in_flight = false;
        Some(result)
    }
}
