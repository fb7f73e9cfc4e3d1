//! Outbound adapters implementing the driven ports.

pub mod memory;
pub mod notifier;
pub mod persistence;
pub mod points;
