//! Catalog Module
//!
//! Product records, cached access to the remote catalog, and the search and
//! pagination helpers used by listing views.

mod client;
pub mod listing;
mod product;

pub use client::ProductCatalog;
pub use listing::{filter_products, page_numbers, paginate, Page, PageLink};
pub use product::{Product, ProductOption, ProductOptions};
