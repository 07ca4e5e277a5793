//! Core components of the `market-brief` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The shared [`BriefClient`] and its builder.
//! - The primary [`BriefError`] type.
//! - Internal networking helpers.

/// The shared client (`BriefClient`) and builder.
pub mod client;
/// The primary error type (`BriefError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::BriefClient`
pub use client::{BriefClient, BriefClientBuilder};
pub use error::BriefError;
