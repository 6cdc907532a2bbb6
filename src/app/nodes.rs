//! Node management operations.

use crate::error::Result;
use crate::transport::{Object, ObjectList, Session};
use crate::types::{
    CreateAllocationsDescriptor, CreateNodeDescriptor, Node, NodeAllocation, UpdateNodeDescriptor,
};
use reqwest::Method;

/// Client for node management.
///
/// Access via `app.nodes()`.
pub struct NodesClient {
    session: Session,
}

impl NodesClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List every node registered with the panel.
    pub async fn list(&self) -> Result<Vec<Node>> {
        let list: ObjectList<Node> = self.session.get_json("/nodes").await?;
        Ok(list.attributes())
    }

    /// Get a node by id.
    pub async fn get(&self, id: i64) -> Result<Node> {
        let obj: Object<Node> = self.session.get_json(&format!("/nodes/{id}")).await?;
        Ok(obj.attributes)
    }

    /// Register a new node.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crocgodyl::{Application, CreateNodeDescriptor};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let app = Application::new("https://panel.example", "app_token")?;
    ///
    ///     let node = app.nodes().create(CreateNodeDescriptor {
    ///         name: "croc-node-1".to_string(),
    ///         location_id: 1,
    ///         public: true,
    ///         fqdn: "node1.panel.example".to_string(),
    ///         scheme: "https".to_string(),
    ///         memory: 16000,
    ///         disk: 1024,
    ///         daemon_base: "/var/lib/pterodactyl/volumes".to_string(),
    ///         daemon_sftp: 2022,
    ///         daemon_listen: 8080,
    ///         upload_size: 100,
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     println!("created node {}", node.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, fields: CreateNodeDescriptor) -> Result<Node> {
        let obj: Object<Node> = self
            .session
            .send_json(Method::POST, "/nodes", Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Update a node. The descriptor is usually derived from
    /// [`Node::update_descriptor`] and edited in place.
    pub async fn update(&self, id: i64, fields: UpdateNodeDescriptor) -> Result<Node> {
        let obj: Object<Node> = self
            .session
            .send_json(Method::PATCH, &format!("/nodes/{id}"), Some(&fields))
            .await?;

        Ok(obj.attributes)
    }

    /// Delete a node. The panel refuses while servers remain on it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.session
            .send_empty(Method::DELETE, &format!("/nodes/{id}"), None::<&()>)
            .await
    }

    /// List a node's allocations.
    pub async fn allocations(&self, node: i64) -> Result<Vec<NodeAllocation>> {
        let list: ObjectList<NodeAllocation> = self
            .session
            .get_json(&format!("/nodes/{node}/allocations"))
            .await?;

        Ok(list.attributes())
    }

    /// Add allocations to a node.
    pub async fn create_allocations(
        &self,
        node: i64,
        fields: CreateAllocationsDescriptor,
    ) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/nodes/{node}/allocations"),
                Some(&fields),
            )
            .await
    }

    /// Remove an unassigned allocation from a node.
    pub async fn delete_allocation(&self, node: i64, allocation: i64) -> Result<()> {
        self.session
            .send_empty(
                Method::DELETE,
                &format!("/nodes/{node}/allocations/{allocation}"),
                None::<&()>,
            )
            .await
    }
}
