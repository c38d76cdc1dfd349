//! Core use-case services.
//!
//! # Responsibility
//! - Hold the pure transformations behind the save flow (tag normalization,
//!   composition, timestamping).
//! - Keep host layers decoupled from validation details.

pub mod clock;
pub mod composer;
pub mod tag_normalizer;
