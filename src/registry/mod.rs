//! # Registry Infrastructure
//!
//! Name-indexed registries for shared component instances.
//!
//! ## Overview
//!
//! The registry module holds the crate's core component: a thread-safe
//! mapping from caller-assigned names to constructed API clients. Higher
//! level orchestration code decides when to create, reuse, or discard
//! clients; the registry only guards the mapping.
//!
//! ## Usage
//!
//! ```rust
//! use client_registry::registry::ClientRegistry;
//! use std::sync::Arc;
//!
//! struct ApiClient;
//!
//! let registry: ClientRegistry<ApiClient> = ClientRegistry::new();
//! registry.register("cluster1", Arc::new(ApiClient));
//! assert!(registry.contains("cluster1"));
//! ```

pub mod client_registry;

// Re-export main types for easy access
pub use client_registry::ClientRegistry;
