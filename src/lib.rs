//! Directory Search Service Library
//!
//! This library crate defines the core modules of the person-directory search
//! service. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`directory`**: The snapshot layer. Owns the immutable, fully indexed
//!   view of the person directory (identifier index + per-field prefix
//!   indexes) and the atomic publish/replace mechanics used on reload.
//! - **`search`**: The core information retrieval logic. Contains the query
//!   tokenizer, the per-field matcher, the scoring and ordering rules, and
//!   the HTTP handlers that expose them.
//! - **`error`**: The typed error taxonomy shared by both layers.
//!
//! `config` carries the runtime settings (record file path, result limit)
//! that the binary resolves from its command line and shares with the
//! handlers.

pub mod config;
pub mod directory;
pub mod error;
pub mod search;
