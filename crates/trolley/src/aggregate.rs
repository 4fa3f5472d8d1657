//! Aggregates

use std::string;

/// Consistency boundary around a stateful entity that is mutated only by
/// applying events.
pub trait Aggregate {
    /// The ID type of the aggregate.
    type ID: string::ToString;

    /// The event type applied to update internal state.
    type Event;

    /// Create a new instance from a given ID.
    ///
    /// The aggregate should be initialised with an initial state.
    fn new(id: Self::ID) -> Self;

    /// Returns a reference to the aggregate ID.
    fn id(&self) -> &Self::ID;

    /// Applies an event to update internal state.
    fn apply(&mut self, event: Self::Event);
}
