//! Search Service Module
//!
//! The core component responsible for executing autocomplete queries against
//! the directory snapshot.
//!
//! ## Overview
//! This module implements the matching-and-ranking pipeline of the service.
//! It bridges the HTTP API layer with the indexed snapshot owned by the
//! `directory` module.
//!
//! ## Responsibilities
//! - **Tokenization**: normalizing a raw query string into ordered terms.
//! - **Matching**: per-token exact/prefix matching across every searchable
//!   field (OR across fields), with every token required to match (AND
//!   across tokens).
//! - **Ranking**: scoring qualifying records and ordering them
//!   deterministically.
//! - **API**: exposing lookup and search via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`engine`**: candidate pruning, scoring, and result assembly.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`matcher`**: per-(token, field) match strength computation.
//! - **`ranker`**: score weights, disqualification, and ordering.
//! - **`tokenizer`**: query normalization.
//! - **`types`**: data transfer objects for API communication.

pub mod engine;
pub mod handlers;
pub mod matcher;
pub mod ranker;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;
