//! Cancellable single-slot scheduling.
//!
//! The engine never owns a timer. Instead it keeps a [`Deferred`] slot for
//! each kind of delayed work (resize coalescing, feedback fade) and hands the
//! host a [`Ticket`] to arm its own timer or animation frame with. When the
//! host's callback fires it returns the ticket; only the most recently issued
//! ticket still redeems the pending value. Scheduling again, or cancelling,
//! invalidates every earlier ticket.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Handle for one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A slot holding at most one pending value.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> Deferred<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending value with `value` and issue a fresh ticket.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Drop the pending value and invalidate outstanding tickets.
    pub fn cancel(&mut self) -> Option<T> {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take()
    }

    /// Redeem `ticket`. Yields the pending value only if `ticket` is current.
    pub fn take(&mut self, ticket: Ticket) -> Option<T> {
        if self.is_current(ticket) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Whether `ticket` is the latest one and still has a value behind it.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation && self.pending.is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}
