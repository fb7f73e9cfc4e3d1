//! Embedded PostgreSQL support for the Diesel adapter suites.
//!
//! Each suite gets its own database cloned from a template that already
//! carries the migrations, so schema setup runs once per cluster.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{provision_template_database, shared_cluster};
