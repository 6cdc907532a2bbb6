//! Location management operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{Location, LocationDescriptor};
use reqwest::Method;

/// Client for location management.
///
/// Access via `app.locations()`.
pub struct LocationsClient {
    session: Session,
}

impl LocationsClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List every location.
    pub async fn list(&self) -> Result<Vec<Location>> {
        let list: ObjectList<Location> = self.session.get_json("/locations").await?;
        Ok(list.attributes())
    }

    /// Get a location by id.
    pub async fn get(&self, id: i64) -> Result<Location> {
        let obj: Object<Location> = self.session.get_json(&format!("/locations/{id}")).await?;
        Ok(obj.attributes)
    }

    /// Create a location.
    pub async fn create(&self, fields: LocationDescriptor) -> Result<Location> {
        let obj: Object<Location> = self
            .session
            .send_json(Method::POST, "/locations", Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Update a location.
    pub async fn update(&self, id: i64, fields: LocationDescriptor) -> Result<Location> {
        let obj: Object<Location> = self
            .session
            .send_json(Method::PATCH, &format!("/locations/{id}"), Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Delete a location. The panel refuses while nodes remain in it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.session
            .send_empty(Method::DELETE, &format!("/locations/{id}"), None::<&()>)
            .await
    }
}
