//! News post grouping via a generative model.
//!
//! Takes a batch of news posts, asks Gemini to group them by category and
//! event (and to extract mentioned persons), then merges the model's answer
//! back onto the original posts by exact title match. The model's JSON output
//! is parsed defensively: responses cut short by the token limit are repaired
//! rather than rejected.
//!
//! This crate owns prompt construction, the Gemini call, and response
//! reconciliation. Post storage and taxonomy persistence belong to the caller.

pub mod config;
pub mod grouping;
pub mod llm_client;
pub mod models;
