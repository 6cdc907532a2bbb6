//! The admin-scoped Application API surface, rooted at `/api/application`.

pub mod locations;
pub mod nests;
pub mod nodes;
pub mod servers;
pub mod users;

use crate::error::Result;
use crate::transport::{Scope, Session};
use self::locations::LocationsClient;
use self::nests::NestsClient;
use self::nodes::NodesClient;
use self::servers::ServersClient;
use self::users::UsersClient;

/// Session for the Application API. Authenticated with an application
/// token; immutable and reusable across concurrent calls.
///
/// # Example
///
/// ```rust,no_run
/// use crocgodyl::Application;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = Application::new("https://panel.example", "app_token")?;
///
///     for node in app.nodes().list().await? {
///         println!("{}: {}", node.id, node.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Application {
    session: Session,
}

impl Application {
    /// Creates an Application session. Fails when the panel URL or the
    /// API key is empty; performs no network I/O.
    pub fn new(panel_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            session: Session::new(panel_url, api_key, Scope::Application)?,
        })
    }

    /// Like [`Application::new`] but reuses a caller-configured HTTP
    /// client (timeouts, proxies, TLS settings).
    pub fn with_http(
        panel_url: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Result<Self> {
        Ok(Self {
            session: Session::with_http(panel_url, api_key, Scope::Application, http)?,
        })
    }

    /// The panel URL this session talks to.
    pub fn panel_url(&self) -> &str {
        self.session.panel_url()
    }

    /// Node management operations.
    pub fn nodes(&self) -> NodesClient {
        NodesClient::new(self.session.clone())
    }

    /// Location management operations.
    pub fn locations(&self) -> LocationsClient {
        LocationsClient::new(self.session.clone())
    }

    /// User management operations.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.session.clone())
    }

    /// Server administration operations.
    pub fn servers(&self) -> ServersClient {
        ServersClient::new(self.session.clone())
    }

    /// Nest and egg catalog operations.
    pub fn nests(&self) -> NestsClient {
        NestsClient::new(self.session.clone())
    }
}
