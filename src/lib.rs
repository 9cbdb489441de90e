//! Game registry and block data export tools.
//!
//! A single tree-building pipeline renders game object registries into either
//! a textual JSON document or a binary tag stream with identical logical
//! content and deterministic ordering. Entity collections come in through
//! provider contracts, codec-derived payloads are normalized into a canonical
//! value model, and a format-agnostic builder contract lets one orchestrator
//! feed both targets.

/// Dump pipeline: value model, builders, decoder, encoder, and orchestrators.
pub mod dump;
