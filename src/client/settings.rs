//! Server settings operations.

use crate::error::Result;
use crate::transport::Session;
use reqwest::Method;
use serde::Serialize;

/// Client for a server's settings.
///
/// Access via `client.settings()`.
pub struct SettingsClient {
    session: Session,
}

impl SettingsClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Switch the server to another of its egg's Docker images.
    pub async fn set_docker_image(&self, identifier: &str, docker_image: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            docker_image: &'a str,
        }

        self.session
            .send_empty(
                Method::PUT,
                &format!("/servers/{identifier}/settings/docker-image"),
                Some(&Body { docker_image }),
            )
            .await
    }

    /// Rerun the egg's install script. Wipes files the script manages.
    pub async fn reinstall(&self, identifier: &str) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/settings/reinstall"),
                None::<&()>,
            )
            .await
    }
}
