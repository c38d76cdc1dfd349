//! Domain model for melody memos.
//!
//! # Responsibility
//! - Define the saved record (`Melody`) and the composer working state (`Draft`).
//!
//! # Invariants
//! - Every melody is identified by a stable `MelodyId`.
//! - Saved melodies are immutable.

pub mod draft;
pub mod melody;
pub mod text;
