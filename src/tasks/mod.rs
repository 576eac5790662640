//! Background Tasks Module
//!
//! Contains background tasks that run alongside the storefront server.
//!
//! # Tasks
//! - Cart watcher: follows cart change notifications and reports the new count

mod watcher;

pub use watcher::spawn_cart_watcher;
