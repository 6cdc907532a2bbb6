//! The end-user Client API surface, rooted at `/api/client`.

pub mod backups;
pub mod databases;
pub mod files;
pub mod network;
pub mod schedules;
pub mod servers;
pub mod settings;
pub mod startup;

use crate::error::Result;
use crate::transport::{Scope, Session};
use self::backups::BackupsClient;
use self::databases::DatabasesClient;
use self::files::FilesClient;
use self::network::NetworkClient;
use self::schedules::SchedulesClient;
use self::servers::ServersClient;
use self::settings::SettingsClient;
use self::startup::StartupClient;

/// Session for the Client API. Authenticated with a per-user token and
/// limited to the servers that account can see; immutable and reusable
/// across concurrent calls.
///
/// # Example
///
/// ```rust,no_run
/// use crocgodyl::{Client, PowerSignal};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("https://panel.example", "client_token")?;
///
///     for server in client.servers().list().await? {
///         println!("{}: {}", server.identifier, server.name);
///     }
///
///     client.servers().set_power_state("abc123", PowerSignal::Restart).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    session: Session,
}

impl Client {
    /// Creates a Client session. Fails when the panel URL or the API key
    /// is empty; performs no network I/O.
    pub fn new(panel_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            session: Session::new(panel_url, api_key, Scope::Client)?,
        })
    }

    /// Like [`Client::new`] but reuses a caller-configured HTTP client
    /// (timeouts, proxies, TLS settings).
    pub fn with_http(
        panel_url: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Result<Self> {
        Ok(Self {
            session: Session::with_http(panel_url, api_key, Scope::Client, http)?,
        })
    }

    /// The panel URL this session talks to.
    pub fn panel_url(&self) -> &str {
        self.session.panel_url()
    }

    /// Server listing, state and console operations.
    pub fn servers(&self) -> ServersClient {
        ServersClient::new(self.session.clone())
    }

    /// Database operations for a server.
    pub fn databases(&self) -> DatabasesClient {
        DatabasesClient::new(self.session.clone())
    }

    /// File management and transfer operations.
    pub fn files(&self) -> FilesClient {
        FilesClient::new(self.session.clone())
    }

    /// Network allocation operations.
    pub fn network(&self) -> NetworkClient {
        NetworkClient::new(self.session.clone())
    }

    /// Startup command and variable operations.
    pub fn startup(&self) -> StartupClient {
        StartupClient::new(self.session.clone())
    }

    /// Server settings operations.
    pub fn settings(&self) -> SettingsClient {
        SettingsClient::new(self.session.clone())
    }

    /// Schedule and task operations.
    pub fn schedules(&self) -> SchedulesClient {
        SchedulesClient::new(self.session.clone())
    }

    /// Backup operations.
    pub fn backups(&self) -> BackupsClient {
        BackupsClient::new(self.session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Client::new("https://panel.example", "key").unwrap();
        assert_eq!(client.panel_url(), "https://panel.example");
    }

    #[test]
    fn test_client_rejects_empty_inputs() {
        let err = Client::new("", "key").unwrap_err();
        assert_eq!(err.to_string(), "a valid panel url is required");

        let err = Client::new("https://panel.example", "").unwrap_err();
        assert_eq!(err.to_string(), "a valid client api key is required");
    }
}
