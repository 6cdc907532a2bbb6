//! User management operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{CreateUserDescriptor, UpdateUserDescriptor, User};
use reqwest::Method;

/// Client for user management.
///
/// Access via `app.users()`.
pub struct UsersClient {
    session: Session,
}

impl UsersClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List every account on the panel.
    pub async fn list(&self) -> Result<Vec<User>> {
        let list: ObjectList<User> = self.session.get_json("/users").await?;
        Ok(list.attributes())
    }

    /// Get a user by id.
    pub async fn get(&self, id: i64) -> Result<User> {
        let obj: Object<User> = self.session.get_json(&format!("/users/{id}")).await?;
        Ok(obj.attributes)
    }

    /// Get a user by the identifier an external system assigned.
    pub async fn get_by_external_id(&self, external_id: &str) -> Result<User> {
        let obj: Object<User> = self
            .session
            .get_json(&format!("/users/external/{external_id}"))
            .await?;

        Ok(obj.attributes)
    }

    /// Create a user. Without a password the panel mails a setup link.
    pub async fn create(&self, fields: CreateUserDescriptor) -> Result<User> {
        let obj: Object<User> = self
            .session
            .send_json(Method::POST, "/users", Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Update a user. The descriptor is usually derived from
    /// [`User::update_descriptor`] and edited in place.
    pub async fn update(&self, id: i64, fields: UpdateUserDescriptor) -> Result<User> {
        let obj: Object<User> = self
            .session
            .send_json(Method::PATCH, &format!("/users/{id}"), Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Delete a user. The panel refuses while the user owns servers.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.session
            .send_empty(Method::DELETE, &format!("/users/{id}"), None::<&()>)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::Application;

    #[test]
    fn test_users_client_creation() {
        let app = Application::new("https://panel.example", "key").unwrap();
        let _users = app.users();
    }
}
