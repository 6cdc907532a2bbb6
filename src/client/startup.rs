//! Startup command and variable operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{ClientVariable, StartupMeta};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Client for a server's startup configuration.
///
/// Access via `client.startup()`.
pub struct StartupClient {
    session: Session,
}

impl StartupClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// Fetch the startup command metadata. The panel reports it next to
    /// the variable list, under a `meta` key.
    pub async fn info(&self, identifier: &str) -> Result<StartupMeta> {
        #[derive(Deserialize)]
        struct Startup {
            meta: StartupMeta,
        }

        let startup: Startup = self
            .session
            .get_json(&format!("/servers/{identifier}/startup"))
            .await?;

        Ok(startup.meta)
    }

    /// List the startup variables visible to this account.
    pub async fn variables(&self, identifier: &str) -> Result<Vec<ClientVariable>> {
        let list: ObjectList<ClientVariable> = self
            .session
            .get_json(&format!("/servers/{identifier}/startup"))
            .await?;

        Ok(list.attributes())
    }

    /// Set a startup variable by its environment-variable name. Returns
    /// the updated variable.
    pub async fn set_variable(
        &self,
        identifier: &str,
        key: &str,
        value: &str,
    ) -> Result<ClientVariable> {
        #[derive(Serialize)]
        struct Body<'a> {
            key: &'a str,
            value: &'a str,
        }

        let obj: Object<ClientVariable> = self
            .session
            .send_json(
                Method::PUT,
                &format!("/servers/{identifier}/startup/variable"),
                Some(&Body { key, value }),
            )
            .await?;

        Ok(obj.attributes)
    }
}
