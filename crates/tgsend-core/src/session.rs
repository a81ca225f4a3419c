use std::{collections::HashMap, sync::Arc};

use tracing::trace;

use crate::{errors::Error, transport::Transport, Result, API_ROOT_URL};

/// Authenticated session against the Bot API.
///
/// Owns the bot token and the scheme→transport table. Requests borrow the
/// session; it performs no mutation during execution, so one session can back
/// any number of in-flight requests once the adapters are mounted.
pub struct BotSession {
    token: String,
    api_root: String,
    transports: HashMap<String, Arc<dyn Transport>>,
}

impl BotSession {
    /// Token validity is the server's call; only emptiness is rejected here.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Config("bot token must not be empty".to_string()));
        }
        Ok(Self {
            token,
            api_root: API_ROOT_URL.to_string(),
            transports: HashMap::new(),
        })
    }

    /// Override the API root template. Used by tests and self-hosted servers.
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Register a transport for a URL scheme, replacing any previous one.
    /// Expected at setup time, before the session is shared.
    pub fn mount(&mut self, scheme: impl Into<String>, transport: Arc<dyn Transport>) {
        self.transports.insert(scheme.into(), transport);
    }

    /// Compose the endpoint URL for a method. Pure function of session state.
    pub fn endpoint_url(&self, method: &str) -> String {
        let url = format!(
            "{root}{token}/{method}",
            root = self.api_root,
            token = self.token,
        );
        trace!(method, "composed endpoint url");
        url
    }

    /// Resolve the mounted transport for a URL.
    pub fn transport_for(&self, url: &str) -> Result<&Arc<dyn Transport>> {
        let scheme = url.split("://").next().unwrap_or_default();
        self.transports.get(scheme).ok_or_else(|| {
            Error::Config(format!("no transport mounted for scheme '{scheme}'"))
        })
    }
}

impl std::fmt::Debug for BotSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Token stays out of logs.
        f.debug_struct("BotSession")
            .field("api_root", &self.api_root)
            .field("schemes", &self.transports.keys().collect::<Vec<_>>())
            .finish()
    }
}
