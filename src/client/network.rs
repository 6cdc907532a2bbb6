//! Network allocation operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::Allocation;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Client for a server's network allocations.
///
/// Access via `client.network()`.
pub struct NetworkClient {
    session: Session,
}

impl NetworkClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List a server's allocations, read from the server view's
    /// allocations relationship.
    pub async fn allocations(&self, identifier: &str) -> Result<Vec<Allocation>> {
        #[derive(Deserialize)]
        struct WithAllocations {
            relationships: Relationships,
        }

        #[derive(Deserialize)]
        struct Relationships {
            allocations: ObjectList<Allocation>,
        }

        let obj: Object<WithAllocations> = self
            .session
            .get_json(&format!("/servers/{identifier}?include=allocations"))
            .await?;

        Ok(obj.attributes.relationships.allocations.attributes())
    }

    /// Request a new allocation from the node's pool, if the server's
    /// feature limit allows another.
    pub async fn create_allocation(&self, identifier: &str) -> Result<Allocation> {
        let obj: Object<Allocation> = self
            .session
            .send_json(
                Method::POST,
                &format!("/servers/{identifier}/network/allocations"),
                None::<&()>,
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Set the notes on an allocation.
    pub async fn set_notes(
        &self,
        identifier: &str,
        allocation: i64,
        notes: &str,
    ) -> Result<Allocation> {
        #[derive(Serialize)]
        struct Body<'a> {
            notes: &'a str,
        }

        let obj: Object<Allocation> = self
            .session
            .send_json(
                Method::POST,
                &format!("/servers/{identifier}/network/allocations/{allocation}"),
                Some(&Body { notes }),
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Make an allocation the server's primary binding.
    pub async fn set_primary(&self, identifier: &str, allocation: i64) -> Result<Allocation> {
        let obj: Object<Allocation> = self
            .session
            .send_json(
                Method::POST,
                &format!("/servers/{identifier}/network/allocations/{allocation}/primary"),
                None::<&()>,
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Release a non-primary allocation.
    pub async fn delete_allocation(&self, identifier: &str, allocation: i64) -> Result<()> {
        self.session
            .send_empty(
                Method::DELETE,
                &format!("/servers/{identifier}/network/allocations/{allocation}"),
                None::<&()>,
            )
            .await
    }
}
