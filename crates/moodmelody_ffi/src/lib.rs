//! Flutter-facing bindings for the Mood Melody core.
//!
//! Dart code calls the functions in [`api`]; bindings are generated by
//! `flutter_rust_bridge_codegen` from that module.

pub mod api;
