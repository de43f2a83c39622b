//! # AgriChat Core
//!
//! Backend brain for a multilingual (English/Hindi/Hinglish) agricultural
//! chatbot. A free-text farmer query is analyzed into an intent plus crop
//! and location entities, then rendered into a templated per-language
//! response using live best-effort data feeds or static fallback tables.
//!
//! ## Components
//! - `assistant`: query analysis and response synthesis pipeline
//! - `feeds`: mandi-price and weather collaborators (HTTP + fallback)
//! - `service`: `AgriAssistant` orchestration with feed fallback
//! - `web`: axum HTTP surface (`POST /api/chat`, `GET /health`)

pub mod assistant;
pub mod config;
pub mod error;
pub mod feeds;
pub mod models;
pub mod rate_limiter;
pub mod service;
pub mod web;

#[cfg(test)]
mod tests;
