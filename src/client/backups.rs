//! Backup operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{Backup, BackupDownload, CreateBackupDescriptor};
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

/// Client for a server's backups.
///
/// Access via `client.backups()`.
pub struct BackupsClient {
    session: Session,
}

impl BackupsClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List a server's backups.
    pub async fn list(&self, identifier: &str) -> Result<Vec<Backup>> {
        let list: ObjectList<Backup> = self
            .session
            .get_json(&format!("/servers/{identifier}/backups"))
            .await?;

        Ok(list.attributes())
    }

    /// Get a backup by uuid.
    pub async fn get(&self, identifier: &str, uuid: Uuid) -> Result<Backup> {
        let obj: Object<Backup> = self
            .session
            .get_json(&format!("/servers/{identifier}/backups/{uuid}"))
            .await?;

        Ok(obj.attributes)
    }

    /// Start a new backup. The record comes back immediately;
    /// `completed_at` stays unset until the archive finishes.
    pub async fn create(&self, identifier: &str, fields: CreateBackupDescriptor) -> Result<Backup> {
        let obj: Object<Backup> = self
            .session
            .send_json(
                Method::POST,
                &format!("/servers/{identifier}/backups"),
                Some(&fields),
            )
            .await?;

        Ok(obj.attributes)
    }

    /// Request a signed, short-lived URL for the backup archive.
    pub async fn download(&self, identifier: &str, uuid: Uuid) -> Result<BackupDownload> {
        let obj: Object<BackupDownload> = self
            .session
            .get_json(&format!("/servers/{identifier}/backups/{uuid}/download"))
            .await?;

        Ok(obj.attributes)
    }

    /// Toggle the backup's deletion lock.
    pub async fn lock(&self, identifier: &str, uuid: Uuid) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/backups/{uuid}/lock"),
                None::<&()>,
            )
            .await
    }

    /// Restore a backup onto the server. With `truncate` the volume is
    /// wiped first.
    pub async fn restore(&self, identifier: &str, uuid: Uuid, truncate: bool) -> Result<()> {
        #[derive(Serialize)]
        struct Body {
            truncate: bool,
        }

        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/backups/{uuid}/restore"),
                Some(&Body { truncate }),
            )
            .await
    }

    /// Delete a backup. Locked backups are refused by the panel.
    pub async fn delete(&self, identifier: &str, uuid: Uuid) -> Result<()> {
        self.session
            .send_empty(
                Method::DELETE,
                &format!("/servers/{identifier}/backups/{uuid}"),
                None::<&()>,
            )
            .await
    }
}
