//! # crocgodyl
//!
//! Rust SDK for the [Pterodactyl](https://pterodactyl.io) game panel.
//!
//! The panel exposes two API surfaces and this crate mirrors them with
//! two session types: [`Application`] for the admin-scoped
//! `/api/application` root and [`Client`] for the end-user `/api/client`
//! root. Each is authenticated with its own bearer token, validated at
//! construction and reused across calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crocgodyl::{Application, Client, PowerSignal};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Admin surface: manage the panel itself.
//!     let app = Application::new("https://panel.example", "app_token")?;
//!     for node in app.nodes().list().await? {
//!         println!("node {}: {}", node.id, node.name);
//!     }
//!
//!     // Client surface: act on servers your account can see.
//!     let client = Client::new("https://panel.example", "client_token")?;
//!     client.servers().send_command("abc123", "say hello").await?;
//!     client.servers().set_power_state("abc123", PowerSignal::Restart).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Read-modify-write
//!
//! Read records and request descriptors are separate types. Records with
//! an update flow offer a descriptor conversion that preserves the
//! current values, so a partial modification round-trips cleanly:
//!
//! ```rust,no_run
//! use crocgodyl::Application;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Application::new("https://panel.example", "app_token")?;
//!
//!     let node = app.nodes().get(7).await?;
//!     let mut fields = node.update_descriptor();
//!     fields.public = false;
//!     app.nodes().update(node.id, fields).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, CrocError>`](CrocError). Panel
//! rejections carry the full error envelope; transport and decode
//! failures keep their underlying error:
//!
//! ```rust,no_run
//! use crocgodyl::{Application, CrocError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Application::new("https://panel.example", "app_token")?;
//!
//!     match app.nodes().get(999).await {
//!         Ok(node) => println!("{}", node.name),
//!         Err(CrocError::Api(err)) => {
//!             for detail in &err.errors {
//!                 eprintln!("{detail}");
//!             }
//!         }
//!         Err(err) => eprintln!("{err}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## File transfers
//!
//! Bulk file transfers run against one-shot presigned URLs on the
//! hosting node, not the panel. [`FilesClient::download`] and
//! [`FilesClient::upload`] return [`Downloader`] / [`Uploader`] values
//! that hold the URL and perform the local I/O when executed. The URLs
//! are single-use; executing twice fails at the node.
//!
//! [`FilesClient::download`]: client::files::FilesClient::download
//! [`FilesClient::upload`]: client::files::FilesClient::upload

pub mod app;
pub mod client;
pub mod error;
mod transport;
pub mod types;

/// Crate version, embedded in the `User-Agent` of every request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export the session and error types at the crate root.
pub use app::Application;
pub use client::Client;
pub use client::files::{Downloader, Uploader};
pub use error::{ApiError, CrocError, ErrorDetail, Result};

// Re-export the commonly used domain types.
pub use types::{
    Allocation, AppServer, Backup, BackupDownload, ChmodDescriptor, ClientDatabase, ClientServer,
    ClientVariable, CompressDescriptor, CreateBackupDescriptor, CreateNodeDescriptor,
    CreateServerDescriptor, CreateUserDescriptor, Egg, EggVariable, FeatureLimits, File, Limits,
    Location, LocationDescriptor, Nest, Node, NodeAllocation, PowerSignal, PullDescriptor,
    RenameDescriptor, ResourceUsage, Resources, Schedule, ScheduleDescriptor, StartupMeta,
    TaskDescriptor, TaskInfo, UpdateNodeDescriptor, UpdateUserDescriptor, User, WebSocketAuth,
};
