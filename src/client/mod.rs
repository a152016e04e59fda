//! # Client Construction Seam
//!
//! Types that sit between the registry and the API clients it stores: the
//! opaque [`Credentials`] forwarded to construction and the
//! [`ClientFactory`] capability interface the surrounding system supplies.
//!
//! The registry treats both sides as opaque. It never inspects credential
//! fields and never calls anything on a stored client; construction logic,
//! transport configuration, and the wire protocol all live behind the
//! factory.
//!
//! ## Usage
//!
//! ```rust
//! use client_registry::client::{ClientFactory, Credentials};
//!
//! /// A client for some remote HTTP API.
//! struct ApiClient {
//!     base_url: String,
//! }
//!
//! struct ApiClientFactory;
//!
//! impl ClientFactory for ApiClientFactory {
//!     type Client = ApiClient;
//!     type Options = ();
//!     type Error = std::io::Error;
//!
//!     fn create_client(
//!         &self,
//!         credentials: &Credentials,
//!         _options: (),
//!     ) -> Result<ApiClient, std::io::Error> {
//!         Ok(ApiClient {
//!             base_url: format!("https://{}", credentials.endpoint),
//!         })
//!     }
//! }
//! ```

pub mod credentials;
pub mod factory;

// Re-export main types for easy access
pub use credentials::Credentials;
pub use factory::ClientFactory;
