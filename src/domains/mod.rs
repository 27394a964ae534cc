//! Domains module containing the agent's business logic.
//!
//! `tools` owns everything between a decoded `tools/call` frame and the
//! text result sent back: argument schemas, the registry, the executor and
//! the handlers that talk to upstream data providers.

pub mod tools;
