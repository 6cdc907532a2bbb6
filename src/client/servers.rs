//! Server listing, state and console operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{ClientServer, PowerSignal, Resources, WebSocketAuth};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Client for the servers visible to the authenticated account.
///
/// Access via `client.servers()`.
pub struct ServersClient {
    session: Session,
}

impl ServersClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List the servers this account can see.
    pub async fn list(&self) -> Result<Vec<ClientServer>> {
        let list: ObjectList<ClientServer> = self.session.get_json("").await?;
        Ok(list.attributes())
    }

    /// Get a server by its short identifier.
    pub async fn get(&self, identifier: &str) -> Result<ClientServer> {
        let obj: Object<ClientServer> = self
            .session
            .get_json(&format!("/servers/{identifier}"))
            .await?;

        Ok(obj.attributes)
    }

    /// Fetch credentials for the console websocket. The socket itself is
    /// the caller's to open; the ticket is short-lived.
    pub async fn websocket(&self, identifier: &str) -> Result<WebSocketAuth> {
        #[derive(Deserialize)]
        struct Ticket {
            data: WebSocketAuth,
        }

        let ticket: Ticket = self
            .session
            .get_json(&format!("/servers/{identifier}/websocket"))
            .await?;

        Ok(ticket.data)
    }

    /// Fetch the server's live state and resource usage.
    pub async fn resources(&self, identifier: &str) -> Result<Resources> {
        let obj: Object<Resources> = self
            .session
            .get_json(&format!("/servers/{identifier}/resources"))
            .await?;

        Ok(obj.attributes)
    }

    /// Send a console command to a running server.
    pub async fn send_command(&self, identifier: &str, command: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            command: &'a str,
        }

        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/command"),
                Some(&Body { command }),
            )
            .await
    }

    /// Send a power signal to a server.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crocgodyl::{Client, PowerSignal};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("https://panel.example", "client_token")?;
    ///     client.servers().set_power_state("abc123", PowerSignal::Restart).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn set_power_state(&self, identifier: &str, signal: PowerSignal) -> Result<()> {
        #[derive(Serialize)]
        struct Body {
            signal: PowerSignal,
        }

        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/power"),
                Some(&Body { signal }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;

    #[test]
    fn test_servers_client_creation() {
        let client = Client::new("https://panel.example", "key").unwrap();
        let _servers = client.servers();
    }
}
