//! Chat completion providers
//!
//! Every text task goes through a hosted chat model; this module holds the
//! provider trait, the Groq implementation, and the per-task prompts.

mod client;
mod groq;
pub mod prompts;

pub use client::{build_provider, ChatProvider, ChatRequest};
pub use groq::GroqClient;
