//! Nest and egg catalog operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{Egg, EggVariable, Nest};
use serde::Deserialize;

/// Client for browsing nests and eggs.
///
/// Access via `app.nests()`.
pub struct NestsClient {
    session: Session,
}

impl NestsClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List every nest.
    pub async fn list(&self) -> Result<Vec<Nest>> {
        let list: ObjectList<Nest> = self.session.get_json("/nests").await?;
        Ok(list.attributes())
    }

    /// Get a nest by id.
    pub async fn get(&self, id: i64) -> Result<Nest> {
        let obj: Object<Nest> = self.session.get_json(&format!("/nests/{id}")).await?;
        Ok(obj.attributes)
    }

    /// List the eggs in a nest.
    pub async fn eggs(&self, nest: i64) -> Result<Vec<Egg>> {
        let list: ObjectList<Egg> = self.session.get_json(&format!("/nests/{nest}/eggs")).await?;
        Ok(list.attributes())
    }

    /// Get an egg by id.
    pub async fn egg(&self, nest: i64, id: i64) -> Result<Egg> {
        let obj: Object<Egg> = self
            .session
            .get_json(&format!("/nests/{nest}/eggs/{id}"))
            .await?;

        Ok(obj.attributes)
    }

    /// List an egg's startup variables. The panel only includes them as a
    /// relationship, one envelope level deeper than usual.
    pub async fn egg_variables(&self, nest: i64, id: i64) -> Result<Vec<EggVariable>> {
        #[derive(Deserialize)]
        struct WithVariables {
            relationships: Relationships,
        }

        #[derive(Deserialize)]
        struct Relationships {
            variables: ObjectList<EggVariable>,
        }

        let obj: Object<WithVariables> = self
            .session
            .get_json(&format!("/nests/{nest}/eggs/{id}?include=variables"))
            .await?;

        Ok(obj.attributes.relationships.variables.attributes())
    }
}
