//! vicoworks-core: portfolio records and the pure logic around them
//!
//! - Records mirrored from the hosted store (home view, statistics, projects)
//! - Tag parsing and gallery filtering
//! - Media/contact link helpers and sitemap rendering
//! - Configuration loading

pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod media;
pub mod records;
pub mod sitemap;
pub mod tags;

pub use config::{DatabaseSettings, PortfolioConfig, ServerSettings};
pub use contact::{contact_links, ContactKind, ContactLink};
pub use error::{ConfigError, Result};
pub use gallery::{category_facets, ProjectFilter, ALL_CATEGORIES};
pub use media::embed_url;
pub use records::{HomeProfile, Project, Statistics};
pub use tags::split_tags;
