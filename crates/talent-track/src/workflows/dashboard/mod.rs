//! Per-role dashboard counters.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::DashboardStats;
pub use router::dashboard_router;
pub use service::{DashboardError, DashboardService};
