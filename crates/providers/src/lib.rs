//! Chat model providers for Skycast.
//!
//! All providers implement the `skycast_core::Provider` trait.
//! The router selects the configured backend.

pub mod openai_compat;
pub mod router;

pub use openai_compat::OpenAiCompatProvider;
pub use router::{build_from_config, ProviderRouter};
