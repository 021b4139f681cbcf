//! Business workflows, one module per area of the platform.

pub mod applications;
pub mod complaints;
pub mod dashboard;
pub mod directory;
pub mod jobs;
pub mod moderation;
pub mod network;
pub mod notifications;
