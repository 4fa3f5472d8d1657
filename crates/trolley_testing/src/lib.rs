//! Testing utilities for [trolley](https://docs.rs/trolley) carts.
//!
//! Drive an aggregate through given events, run a command against the
//! resulting state, assert on the produced events, and apply them to keep
//! going:
//!
//! ```
//! use trolley::{Cart, CartEvent, SessionId};
//! use trolley_testing::*;
//! # use chrono::{TimeZone, Utc};
//! # let headphones = trolley::Product {
//! #     id: "1".to_owned(),
//! #     name: "Wireless Bluetooth Headphones".to_owned(),
//! #     description: String::new(),
//! #     price: 99.99,
//! #     category: "Electronics".to_owned(),
//! #     image_url: String::new(),
//! #     rating: 4.5,
//! #     stock: 25,
//! #     created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
//! #     reviews: Vec::new(),
//! # };
//!
//! Cart::given_no_events(SessionId::generate())
//!     // Add a product
//!     .when(|cart| cart.add_item(headphones.clone()))
//!     .then(vec![CartEvent::LineAdded { product: headphones.clone() }])
//!     .apply()
//!     // Add it again
//!     .when(|cart| cart.add_item(headphones.clone()))
//!     .then(vec![CartEvent::QuantitySet { id: "1".to_owned(), quantity: 2 }]);
//! ```

#![deny(missing_docs)]

use std::fmt;

use trolley::Aggregate;

/// An aggregate given events.
pub struct GivenTest<A>(A);

/// An aggregate when a command is performed.
pub struct WhenTest<A, R> {
    aggregate: A,
    result: R,
}

/// Given events for an aggregate.
pub trait Given: Aggregate + Sized {
    /// Given a single event for an aggregate.
    fn given(
        id: impl Into<<Self as Aggregate>::ID>,
        event: impl Into<<Self as Aggregate>::Event>,
    ) -> GivenTest<Self> {
        Self::given_events(id, vec![event.into()])
    }

    /// Given events for an aggregate.
    fn given_events(
        id: impl Into<<Self as Aggregate>::ID>,
        events: impl Into<Vec<<Self as Aggregate>::Event>>,
    ) -> GivenTest<Self> {
        let mut aggregate = Self::new(id.into());
        for event in events.into() {
            aggregate.apply(event);
        }
        GivenTest(aggregate)
    }

    /// Given no events for an aggregate.
    fn given_no_events(id: impl Into<<Self as Aggregate>::ID>) -> GivenTest<Self> {
        let aggregate = Self::new(id.into());
        GivenTest(aggregate)
    }
}

impl<A> Given for A where A: Aggregate + Sized {}

impl<A> GivenTest<A>
where
    A: Aggregate,
{
    /// When a command is applied.
    pub fn when<F, R>(mut self, f: F) -> WhenTest<A, R>
    where
        F: FnOnce(&mut A) -> R,
    {
        let result = f(&mut self.0);
        WhenTest {
            aggregate: self.0,
            result,
        }
    }

    /// Given previous events, the aggregate should equal the given state.
    pub fn should_eq<S>(self, state: S) -> Self
    where
        A: fmt::Debug + PartialEq<S>,
        S: fmt::Debug,
    {
        assert_eq!(self.0, state);
        self
    }

    /// Given previous events, the aggregate's state should be unchanged.
    pub fn should_be_unchanged(self) -> Self
    where
        A: fmt::Debug + PartialEq<A>,
        <A as Aggregate>::ID: Clone,
    {
        assert_eq!(self.0, A::new(self.0.id().clone()));
        self
    }

    /// Get the inner aggregate.
    pub fn into_state(self) -> A {
        self.0
    }
}

impl<A, R> WhenTest<A, R>
where
    A: Aggregate,
{
    /// Get the inner result from the previous when() action.
    pub fn into_result(self) -> R {
        self.result
    }

    /// Get the inner aggregate.
    pub fn into_state(self) -> A {
        self.aggregate
    }

    /// Then the result of the previous when() action should equal the given parameter.
    pub fn then<T>(self, result: T) -> WhenTest<A, R>
    where
        R: fmt::Debug + PartialEq<T>,
        T: fmt::Debug,
    {
        assert_eq!(self.result, result);
        self
    }
}

impl<A> WhenTest<A, Vec<<A as Aggregate>::Event>>
where
    A: Aggregate,
{
    /// Apply the events produced by the previous when() action.
    pub fn apply(mut self) -> GivenTest<A> {
        for event in self.result {
            self.aggregate.apply(event);
        }
        GivenTest(self.aggregate)
    }
}
