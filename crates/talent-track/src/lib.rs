//! Core library for the TalentTrack job board and applicant tracking service.
//!
//! Business logic lives in [`workflows`], one module per area, each exposing a
//! service wired by explicit store injection plus an axum router. Persistence
//! is abstracted behind the per-entity traits in [`store`].

pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod workflows;
