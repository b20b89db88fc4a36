//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Stale Sweep: Evicts categories whose last fetch is older than the
//!   expiration window

mod sweeper;

pub use sweeper::spawn_stale_sweeper;
