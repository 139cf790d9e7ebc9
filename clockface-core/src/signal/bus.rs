//! Signal bus: subscriber table plus delivery queue

use heapless::{Deque, Vec};

use super::events::{ButtonEvent, EventKind, EventSink};

/// Errors from subscription management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalError {
    /// Registration table is full
    TableFull,
    /// Subscriber already registered for this kind
    AlreadySubscribed,
    /// Subscriber was not registered for this kind
    NotSubscribed,
}

/// One event addressed to one subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Delivery<S> {
    pub subscriber: S,
    pub event: ButtonEvent,
}

/// Publish/subscribe bus
///
/// - `S`: subscriber handle (usually a small `Copy` enum)
/// - `N`: registration table capacity
/// - `Q`: pending delivery capacity
///
/// Deliveries are addressed when the event is published, so changing
/// subscriptions while draining affects only later events.
pub struct SignalBus<S, const N: usize, const Q: usize> {
    table: Vec<(EventKind, S), N>,
    pending: Deque<Delivery<S>, Q>,
    dropped: u32,
}

impl<S, const N: usize, const Q: usize> SignalBus<S, N, Q>
where
    S: Copy + PartialEq,
{
    pub const fn new() -> Self {
        Self {
            table: Vec::new(),
            pending: Deque::new(),
            dropped: 0,
        }
    }

    /// Register `subscriber` for `kind`
    pub fn subscribe(&mut self, kind: EventKind, subscriber: S) -> Result<(), SignalError> {
        if self.is_subscribed(kind, subscriber) {
            return Err(SignalError::AlreadySubscribed);
        }
        self.table
            .push((kind, subscriber))
            .map_err(|_| SignalError::TableFull)
    }

    /// Remove `subscriber` from `kind`, keeping the order of the others
    pub fn unsubscribe(&mut self, kind: EventKind, subscriber: S) -> Result<(), SignalError> {
        let index = self
            .table
            .iter()
            .position(|&(k, s)| k == kind && s == subscriber)
            .ok_or(SignalError::NotSubscribed)?;
        self.table.remove(index);
        Ok(())
    }

    pub fn is_subscribed(&self, kind: EventKind, subscriber: S) -> bool {
        self.table
            .iter()
            .any(|&(k, s)| k == kind && s == subscriber)
    }

    /// Subscribers of `kind` in registration order
    pub fn subscribers(&self, kind: EventKind) -> impl Iterator<Item = S> + '_ {
        self.table
            .iter()
            .filter(move |&&(k, _)| k == kind)
            .map(|&(_, s)| s)
    }

    /// Queue `event` for every current subscriber of its kind
    ///
    /// Returns the number of deliveries queued. Deliveries that do not
    /// fit are counted in [`dropped`](Self::dropped).
    pub fn emit(&mut self, event: ButtonEvent) -> usize {
        let kind = event.kind();
        let mut queued = 0;
        for &(k, subscriber) in self.table.iter() {
            if k != kind {
                continue;
            }
            match self.pending.push_back(Delivery { subscriber, event }) {
                Ok(()) => queued += 1,
                Err(_) => self.dropped = self.dropped.saturating_add(1),
            }
        }
        queued
    }

    /// Take the oldest pending delivery
    pub fn next_delivery(&mut self) -> Option<Delivery<S>> {
        self.pending.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Deliveries lost to a full queue since creation
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<S, const N: usize, const Q: usize> Default for SignalBus<S, N, Q>
where
    S: Copy + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const N: usize, const Q: usize> EventSink for SignalBus<S, N, Q>
where
    S: Copy + PartialEq,
{
    fn publish(&mut self, event: ButtonEvent) {
        self.emit(event);
    }
}
