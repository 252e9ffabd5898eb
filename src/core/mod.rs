//! Core components of the `ghprofile-rs` service.
//!
//! This module contains the foundational building blocks of the crate, including:
//! - The upstream [`GhClient`] and its builder.
//! - The primary [`GhError`] type.
//! - The time-bound [`CacheStore`].
//! - The [`ProfileSource`] seam between the service and the two upstream paths.

/// Time-bound in-memory cache.
pub mod cache;
/// The upstream client (`GhClient`), builder, and default endpoints.
pub mod client;
/// The primary error type (`GhError`) for the crate.
pub mod error;
/// Service traits for abstracting the upstream capability.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::GhClient`
pub use cache::{CacheStore, DEFAULT_CACHE_TTL};
pub use client::{GhClient, GhClientBuilder};
pub use error::GhError;
pub use services::{ProfileSource, SourceMode};
