//! Cart Module
//!
//! Optimistic cart counter and its change notifications.

mod counter;

pub use counter::{CartCounter, CartUpdated, CART_COUNT_KEY};
