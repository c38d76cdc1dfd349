//! Store abstractions for saved melodies.
//!
//! # Responsibility
//! - Define the store contract the session depends on.
//! - Keep storage details out of session orchestration.
//!
//! # Invariants
//! - Stores are volatile; nothing outlives the session that owns it.

pub mod melody_store;
