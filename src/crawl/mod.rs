//! Crawl domain layer
//!
//! Pure business logic of the crawl-and-collect pipeline. Nothing in this
//! module performs I/O; network, filesystem and process access live behind
//! the ports in [`crate::ports`].
pub mod domain;
pub mod policies;
pub mod services;
