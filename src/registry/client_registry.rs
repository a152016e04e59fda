//! # Client Registry
//!
//! Thread-safe, name-indexed registry of constructed API clients.
//!
//! ## Key Features
//!
//! - **Thread-safe operations** using a single reader/writer lock
//! - **Shared ownership** via `Arc` so callers and the registry can hold a
//!   client independently
//! - **Construction outside the lock** so a slow client build never stalls
//!   unrelated lookups
//!
//! ## Usage
//!
//! ```rust
//! use client_registry::client::{ClientFactory, Credentials};
//! use client_registry::registry::ClientRegistry;
//! use std::sync::Arc;
//!
//! struct ApiClient {
//!     endpoint: String,
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
//!             endpoint: credentials.endpoint.clone(),
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ClientRegistry::new();
//! let credentials = Credentials::new("cluster1.example.com", "admin", "secret");
//!
//! let client = registry.create_and_register("cluster1", &ApiClientFactory, &credentials, ())?;
//! assert_eq!(client.endpoint, "cluster1.example.com");
//!
//! // Later lookups share the same instance
//! let shared = registry.get("cluster1")?;
//! assert!(Arc::ptr_eq(&client, &shared));
//!
//! registry.remove("cluster1");
//! assert!(registry.get("cluster1").is_err());
//! # Ok(())
//! # }
//! ```

use crate::client::{ClientFactory, Credentials};
use crate::error::{RegistryError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Thread-safe registry mapping caller-assigned names to shared client instances
///
/// The registry is a guarded mapping, not a cache in the algorithmic sense:
/// there is no eviction, expiry, or sizing policy. It stores whatever it is
/// given and forgets entries only on [`remove`](Self::remove) or overwrite.
/// Dropped entries are never closed or disposed; callers holding a returned
/// `Arc` keep using their client untouched.
pub struct ClientRegistry<C> {
    /// Clients indexed by name, shared across registry handles
    clients: Arc<RwLock<HashMap<String, Arc<C>>>>,
}

impl<C> ClientRegistry<C> {
    /// Create a new, empty client registry
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Look up the client registered under `name`
    ///
    /// Takes the read lock, so concurrent lookups never block each other; a
    /// lookup waits only for an in-flight write section. A miss means "no
    /// client registered under this name" and is not transient; callers
    /// should construct and register rather than retry.
    pub fn get(&self, name: &str) -> Result<Arc<C>> {
        let clients = self.clients.read();

        clients
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::ClientNotFound {
                name: name.to_string(),
            })
    }

    /// Insert or replace the client registered under `name`
    ///
    /// Replacing an entry only drops the registry's reference to the old
    /// client; any caller holding its own `Arc` is unaffected. Names are
    /// literal keys: the empty string is as valid as any other.
    pub fn register(&self, name: impl Into<String>, client: Arc<C>) {
        let name = name.into();
        let mut clients = self.clients.write();

        if clients.insert(name.clone(), client).is_some() {
            warn!(name = %name, "client already registered, replacing");
        } else {
            debug!(name = %name, "client registered");
        }
    }

    /// Remove the client registered under `name`, if present
    ///
    /// Removing an absent name is a silent no-op.
    pub fn remove(&self, name: &str) {
        let mut clients = self.clients.write();

        if clients.remove(name).is_some() {
            debug!(name = %name, "client removed from registry");
        }
    }

    /// Construct a client via `factory` and register it under `name`
    ///
    /// `credentials` and `options` are forwarded to the factory untouched.
    /// Construction runs before the write lock is taken, so a slow or
    /// blocking build never stalls `get`/`register`/`remove` on any name.
    /// The flip side: two concurrent calls for the same name may both
    /// construct, and the later write wins. This operation always
    /// constructs and overwrites, it never returns an existing entry.
    ///
    /// On factory failure the mapping is left untouched and the factory's
    /// error is returned wrapped in
    /// [`RegistryError::ClientConstruction`].
    pub fn create_and_register<F>(
        &self,
        name: impl Into<String>,
        factory: &F,
        credentials: &Credentials,
        options: F::Options,
    ) -> Result<Arc<C>>
    where
        F: ClientFactory<Client = C> + ?Sized,
    {
        let name = name.into();

        let client = factory.create_client(credentials, options).map_err(|e| {
            RegistryError::ClientConstruction {
                name: name.clone(),
                source: Box::new(e),
            }
        })?;

        let client = Arc::new(client);
        self.register(name.clone(), Arc::clone(&client));
        info!(name = %name, "client constructed and registered");

        Ok(client)
    }

    /// Check whether a client is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.clients.read().contains_key(name)
    }

    /// Number of registered clients
    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    /// Whether the registry holds no clients
    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }

    /// Names of all registered clients, in no particular order
    pub fn names(&self) -> Vec<String> {
        self.clients.read().keys().cloned().collect()
    }

    /// Drop every entry (useful for testing)
    pub fn clear(&self) {
        let mut clients = self.clients.write();
        clients.clear();
        info!("client registry cleared");
    }
}

impl<C> Default for ClientRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: cloning shares the underlying map and must not require C: Clone.
impl<C> Clone for ClientRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            clients: Arc::clone(&self.clients),
        }
    }
}
