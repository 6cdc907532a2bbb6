//! Database operations for a server.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::ClientDatabase;
use reqwest::Method;
use serde::Serialize;

/// Client for a server's databases.
///
/// Access via `client.databases()`.
pub struct DatabasesClient {
    session: Session,
}

impl DatabasesClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List a server's databases.
    pub async fn list(&self, identifier: &str) -> Result<Vec<ClientDatabase>> {
        let list: ObjectList<ClientDatabase> = self
            .session
            .get_json(&format!("/servers/{identifier}/databases"))
            .await?;

        Ok(list.attributes())
    }

    /// Create a database. `remote` is the allowed source address pattern
    /// (e.g. "%"), `database` the name.
    pub async fn create(
        &self,
        identifier: &str,
        remote: &str,
        database: &str,
    ) -> Result<ClientDatabase> {
        #[derive(Serialize)]
        struct Body<'a> {
            remote: &'a str,
            database: &'a str,
        }

        let obj: Object<ClientDatabase> = self
            .session
            .send_json(
                Method::POST,
                &format!("/servers/{identifier}/databases"),
                Some(&Body { remote, database }),
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Generate a new password for a database.
    pub async fn rotate_password(&self, identifier: &str, id: &str) -> Result<ClientDatabase> {
        let obj: Object<ClientDatabase> = self
            .session
            .send_json(
                Method::POST,
                &format!("/servers/{identifier}/databases/{id}/rotate-password"),
                None::<&()>,
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Delete a database.
    pub async fn delete(&self, identifier: &str, id: &str) -> Result<()> {
        self.session
            .send_empty(
                Method::DELETE,
                &format!("/servers/{identifier}/databases/{id}"),
                None::<&()>,
            )
            .await
    }
}
