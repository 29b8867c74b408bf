//! vicoworks-server: portfolio data access, counters and HTTP API
//!
//! Layers, leaves first:
//! - `db` / `store`: reads and atomic counter updates against the hosted store
//! - `queries` / `counters`: degrade-never-panic operations over a store handle
//! - `http`: axum routes exposing both to the site front end

pub mod counters;
pub mod db;
pub mod http;
pub mod queries;
pub mod revalidate;
pub mod store;

pub use counters::{increment_project_like, increment_visitor_count, CounterError};
pub use revalidate::{Revalidator, View, ViewRefreshed};
pub use store::{MemoryStore, PgStore, PortfolioStore};
