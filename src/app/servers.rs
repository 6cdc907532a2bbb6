//! Server administration operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{AppServer, CreateServerDescriptor, UpdateServerDetailsDescriptor};
use reqwest::Method;

/// Client for server administration.
///
/// Access via `app.servers()`. Servers are addressed here by their
/// internal numeric id; the client scope uses the short identifier.
pub struct ServersClient {
    session: Session,
}

impl ServersClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List every server on the panel.
    pub async fn list(&self) -> Result<Vec<AppServer>> {
        let list: ObjectList<AppServer> = self.session.get_json("/servers").await?;
        Ok(list.attributes())
    }

    /// Get a server by internal id.
    pub async fn get(&self, id: i64) -> Result<AppServer> {
        let obj: Object<AppServer> = self.session.get_json(&format!("/servers/{id}")).await?;
        Ok(obj.attributes)
    }

    /// Provision a new server.
    pub async fn create(&self, fields: CreateServerDescriptor) -> Result<AppServer> {
        let obj: Object<AppServer> = self
            .session
            .send_json(Method::POST, "/servers", Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Update a server's details (name, owner, description). The
    /// descriptor is usually derived from [`AppServer::details_descriptor`].
    pub async fn update_details(
        &self,
        id: i64,
        fields: UpdateServerDetailsDescriptor,
    ) -> Result<AppServer> {
        let obj: Object<AppServer> = self
            .session
            .send_json(Method::PATCH, &format!("/servers/{id}/details"), Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Suspend a server, stopping it and blocking client access.
    pub async fn suspend(&self, id: i64) -> Result<()> {
        self.session
            .send_empty(Method::POST, &format!("/servers/{id}/suspend"), None::<&()>)
            .await
    }

    /// Lift a server's suspension.
    pub async fn unsuspend(&self, id: i64) -> Result<()> {
        self.session
            .send_empty(Method::POST, &format!("/servers/{id}/unsuspend"), None::<&()>)
            .await
    }

    /// Delete a server and its data volume.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.session
            .send_empty(Method::DELETE, &format!("/servers/{id}"), None::<&()>)
            .await
    }
}
