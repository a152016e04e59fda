//! Authentication material handed to client factories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque authentication material for constructing an API client.
///
/// The registry never interprets these fields; they are forwarded as-is to
/// the [`ClientFactory`](crate::client::ClientFactory) that builds the
/// client. Serde derives let embedding applications load credential
/// material from their own configuration files.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Host or address of the remote API endpoint
    pub endpoint: String,
    /// Optional port override
    #[serde(default)]
    pub port: Option<u16>,
    /// Account used to authenticate
    pub username: String,
    /// Secret for the account
    pub password: String,
    /// Skip TLS certificate verification when talking to the endpoint
    #[serde(default)]
    pub insecure: bool,
}

impl Credentials {
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            port: None,
            username: username.into(),
            password: password.into(),
            insecure: false,
        }
    }
}

// Manual Debug so the password never reaches log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("insecure", &self.insecure)
            .finish()
    }
}
