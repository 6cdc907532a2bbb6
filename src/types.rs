//! Type definitions for the crocgodyl SDK.
//!
//! Read records mirror the panel's attribute objects; descriptors carry
//! the writable subset sent on create/update. Field names and JSON keys
//! are fixed by the panel wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Application scope: nodes
// ---------------------------------------------------------------------------

/// A worker host registered with the panel.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Node {
    /// Internal numeric id.
    pub id: i64,
    /// Stable UUID.
    pub uuid: Uuid,
    /// Display name.
    pub name: String,
    /// Location the node belongs to.
    pub location_id: i64,
    /// Whether the node accepts automatic deployments.
    pub public: bool,
    /// Fully-qualified domain name of the daemon.
    pub fqdn: String,
    /// "http" or "https".
    pub scheme: String,
    /// Whether the daemon sits behind a reverse proxy.
    pub behind_proxy: bool,
    /// Memory available for servers, in MB.
    pub memory: i64,
    /// Memory over-allocation percentage.
    pub memory_overallocate: i64,
    /// Disk available for servers, in MB.
    pub disk: i64,
    /// Disk over-allocation percentage.
    pub disk_overallocate: i64,
    /// Base path for server volumes on the daemon.
    pub daemon_base: String,
    /// SFTP port exposed by the daemon.
    pub daemon_sftp: i64,
    /// API port exposed by the daemon.
    pub daemon_listen: i64,
    /// Maximum upload size, in MB.
    pub upload_size: i64,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-modification timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Node {
    /// Builds an update descriptor preserving the node's current values,
    /// for read-modify-write flows.
    pub fn update_descriptor(&self) -> UpdateNodeDescriptor {
        UpdateNodeDescriptor {
            name: self.name.clone(),
            location_id: self.location_id,
            public: self.public,
            fqdn: self.fqdn.clone(),
            scheme: self.scheme.clone(),
            behind_proxy: self.behind_proxy,
            memory: self.memory,
            memory_overallocate: self.memory_overallocate,
            disk: self.disk,
            disk_overallocate: self.disk_overallocate,
            daemon_base: self.daemon_base.clone(),
            daemon_sftp: self.daemon_sftp,
            daemon_listen: self.daemon_listen,
            upload_size: self.upload_size,
        }
    }
}

/// Request body for creating a node.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateNodeDescriptor {
    pub name: String,
    pub location_id: i64,
    pub public: bool,
    pub fqdn: String,
    pub scheme: String,
    pub behind_proxy: bool,
    pub memory: i64,
    pub memory_overallocate: i64,
    pub disk: i64,
    pub disk_overallocate: i64,
    pub daemon_base: String,
    pub daemon_sftp: i64,
    pub daemon_listen: i64,
    pub upload_size: i64,
}

/// Request body for updating a node. Usually derived from
/// [`Node::update_descriptor`] and edited in place.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateNodeDescriptor {
    pub name: String,
    pub location_id: i64,
    pub public: bool,
    pub fqdn: String,
    pub scheme: String,
    pub behind_proxy: bool,
    pub memory: i64,
    pub memory_overallocate: i64,
    pub disk: i64,
    pub disk_overallocate: i64,
    pub daemon_base: String,
    pub daemon_sftp: i64,
    pub daemon_listen: i64,
    pub upload_size: i64,
}

/// A network binding owned by a node, as seen by administrators.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NodeAllocation {
    pub id: i64,
    pub ip: String,
    /// Display alias for the IP, when set.
    pub alias: Option<String>,
    pub port: i64,
    pub notes: Option<String>,
    /// Whether a server currently holds this allocation.
    pub assigned: bool,
}

/// Request body for adding allocations to a node.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAllocationsDescriptor {
    pub ip: String,
    /// Ports or port ranges, e.g. `"25565"` or `"25570-25580"`.
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

// ---------------------------------------------------------------------------
// Application scope: locations
// ---------------------------------------------------------------------------

/// A grouping of nodes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Location {
    pub id: i64,
    /// Short identifier, e.g. "eu-west".
    pub short: String,
    /// Human-readable description.
    pub long: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Location {
    /// Builds an update descriptor preserving the current values.
    pub fn update_descriptor(&self) -> LocationDescriptor {
        LocationDescriptor {
            short: self.short.clone(),
            long: self.long.clone(),
        }
    }
}

/// Request body for creating or updating a location.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct LocationDescriptor {
    pub short: String,
    pub long: String,
}

// ---------------------------------------------------------------------------
// Application scope: users
// ---------------------------------------------------------------------------

/// A panel account.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    /// Identifier assigned by an external system, when set.
    pub external_id: Option<String>,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub language: String,
    /// Whether the account has administrative access.
    pub root_admin: bool,
    /// Whether two-factor authentication is enabled.
    #[serde(rename = "2fa")]
    pub two_factor: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Builds an update descriptor preserving the current values. The
    /// password is left unset; the panel keeps the existing one.
    pub fn update_descriptor(&self) -> UpdateUserDescriptor {
        UpdateUserDescriptor {
            email: self.email.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            language: self.language.clone(),
            root_admin: self.root_admin,
            password: None,
        }
    }
}

/// Request body for creating a user.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateUserDescriptor {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Request body for updating a user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateUserDescriptor {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub language: String,
    pub root_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Application scope: servers
// ---------------------------------------------------------------------------

/// A managed server instance, admin view.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppServer {
    pub id: i64,
    pub external_id: Option<String>,
    pub uuid: Uuid,
    /// Short identifier used by the client API.
    pub identifier: String,
    pub name: String,
    pub description: String,
    pub suspended: bool,
    pub limits: Limits,
    pub feature_limits: FeatureLimits,
    /// Owner's user id.
    pub user: i64,
    /// Hosting node id.
    pub node: i64,
    /// Primary allocation id.
    pub allocation: i64,
    pub nest: i64,
    pub egg: i64,
    pub container: Container,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AppServer {
    /// Builds a details descriptor preserving the current values.
    pub fn details_descriptor(&self) -> UpdateServerDetailsDescriptor {
        UpdateServerDetailsDescriptor {
            name: self.name.clone(),
            user: self.user,
            external_id: self.external_id.clone(),
            description: Some(self.description.clone()),
        }
    }
}

/// Docker container settings for a server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Container {
    pub startup_command: String,
    pub image: String,
    pub installed: bool,
    /// Environment handed to the container; values are panel-typed.
    pub environment: HashMap<String, serde_json::Value>,
}

/// Request body for creating a server.
#[derive(Debug, Clone, Serialize)]
pub struct CreateServerDescriptor {
    pub name: String,
    /// Owner's user id.
    pub user: i64,
    pub egg: i64,
    pub docker_image: String,
    pub startup: String,
    pub environment: HashMap<String, String>,
    pub limits: Limits,
    pub feature_limits: FeatureLimits,
    pub allocation: AllocationSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Which allocation a new server binds as primary.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationSelection {
    pub default: i64,
}

/// Request body for updating a server's details.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateServerDetailsDescriptor {
    pub name: String,
    pub user: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Application scope: nests and eggs
// ---------------------------------------------------------------------------

/// A grouping of service templates.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Nest {
    pub id: i64,
    pub uuid: Uuid,
    pub author: String,
    pub name: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A service template describing how to run a workload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Egg {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub nest: i64,
    pub author: String,
    pub description: String,
    pub docker_image: String,
    #[serde(default)]
    pub docker_images: HashMap<String, String>,
    pub config: EggConfig,
    pub startup: String,
    pub script: EggScript,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EggConfig {
    #[serde(default)]
    pub files: HashMap<String, serde_json::Value>,
    pub startup: EggStartup,
    pub stop: String,
    pub logs: EggLogs,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EggStartup {
    /// Console line that marks the server as started.
    pub done: String,
    #[serde(rename = "userInteraction", default)]
    pub user_interaction: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EggLogs {
    pub custom: bool,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EggScript {
    pub privileged: bool,
    pub install: String,
    pub entry: String,
    pub container: String,
}

/// A configurable startup variable attached to an egg, admin view.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EggVariable {
    pub id: i64,
    pub egg: i64,
    pub name: String,
    pub description: String,
    pub env_variable: String,
    pub default_value: String,
    /// Validation rules, e.g. "required|string|max:20".
    pub rules: String,
    pub user_viewable: bool,
    pub user_editable: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Shared limits
// ---------------------------------------------------------------------------

/// Resource limits applied to a server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Limits {
    /// Memory limit in MB.
    pub memory: i64,
    /// Swap limit in MB; -1 for unlimited.
    pub swap: i64,
    /// Disk limit in MB.
    pub disk: i64,
    /// Block IO weight.
    pub io: i64,
    /// CPU limit in percent; 100 = one core.
    pub cpu: i64,
    /// Pinned CPU threads, when restricted.
    pub threads: Option<String>,
    pub oom_disabled: bool,
}

/// Caps on panel-managed features for a server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureLimits {
    pub allocations: i64,
    pub backups: i64,
    pub databases: i64,
}

// ---------------------------------------------------------------------------
// Client scope: servers
// ---------------------------------------------------------------------------

/// A managed server instance, end-user view.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientServer {
    /// Whether the authenticated account owns this server.
    pub server_owner: bool,
    /// Short identifier used in client-scope paths.
    pub identifier: String,
    pub uuid: Uuid,
    pub internal_id: i64,
    pub name: String,
    /// Display name of the hosting node.
    pub node: String,
    #[serde(rename = "sftp_details")]
    pub sftp: SftpDetails,
    pub description: String,
    pub limits: Limits,
    /// Processed startup command.
    pub invocation: String,
    pub docker_image: String,
    #[serde(default)]
    pub egg_features: Vec<String>,
    pub feature_limits: FeatureLimits,
    /// Panel-reported state, e.g. "running"; reported verbatim.
    pub status: Option<String>,
    #[serde(rename = "is_suspended")]
    pub suspended: bool,
    #[serde(rename = "is_installing")]
    pub installing: bool,
    #[serde(rename = "is_transferring")]
    pub transferring: bool,
    #[serde(rename = "is_node_under_maintenance")]
    pub under_maintenance: bool,
}

/// SFTP endpoint for a server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SftpDetails {
    pub ip: String,
    pub port: i64,
}

/// Credentials for the console websocket. The socket itself is handled
/// by the consumer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebSocketAuth {
    pub socket: String,
    pub token: String,
}

/// Live state and usage for a server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Resources {
    #[serde(rename = "current_state", default)]
    pub state: String,
    #[serde(rename = "is_suspended")]
    pub suspended: bool,
    #[serde(rename = "resources")]
    pub usage: ResourceUsage,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResourceUsage {
    pub memory_bytes: i64,
    pub disk_bytes: i64,
    pub cpu_absolute: f64,
    pub network_rx_bytes: i64,
    pub network_tx_bytes: i64,
    /// Uptime in milliseconds.
    pub uptime: i64,
}

/// Power signals accepted by the panel.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal {
    Start,
    Stop,
    Restart,
    Kill,
}

// ---------------------------------------------------------------------------
// Client scope: databases
// ---------------------------------------------------------------------------

/// A database provisioned for a server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientDatabase {
    /// Opaque hashid.
    pub id: String,
    pub name: String,
    pub username: String,
    pub host: DatabaseHost,
    /// Allowed source address pattern, e.g. "%".
    pub connections_from: String,
    pub max_connections: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseHost {
    pub address: String,
    pub port: i64,
}

// ---------------------------------------------------------------------------
// Client scope: files
// ---------------------------------------------------------------------------

/// A directory entry on a server's volume.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct File {
    pub name: String,
    /// Symbolic mode, e.g. "-rw-r--r--".
    pub mode: String,
    /// Octal mode as text, e.g. "644".
    pub mode_bits: String,
    pub size: i64,
    pub is_file: bool,
    pub is_symlink: bool,
    /// MIME type; directories report "inode/directory".
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Request body for renaming files under a common root.
#[derive(Debug, Clone, Serialize, Default)]
pub struct RenameDescriptor {
    pub root: String,
    pub files: Vec<RenameFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameFile {
    pub from: String,
    pub to: String,
}

/// Request body for archiving files under a common root.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CompressDescriptor {
    pub root: String,
    pub files: Vec<String>,
}

/// Request body for unpacking an archive.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DecompressDescriptor {
    pub root: String,
    pub file: String,
}

/// Request body for deleting files under a common root.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DeleteFilesDescriptor {
    pub root: String,
    pub files: Vec<String>,
}

/// Request body for creating a directory.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateFolderDescriptor {
    pub root: String,
    pub name: String,
}

/// Request body for changing file modes under a common root.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ChmodDescriptor {
    pub root: String,
    pub files: Vec<ChmodFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChmodFile {
    pub file: String,
    /// Octal mode as a number, e.g. 755.
    pub mode: u32,
}

/// Request body for pulling a remote URL onto the server's volume.
#[derive(Debug, Clone, Serialize, Default)]
pub struct PullDescriptor {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<bool>,
}

// ---------------------------------------------------------------------------
// Client scope: network
// ---------------------------------------------------------------------------

/// A network binding as seen by the server owner.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Allocation {
    pub id: i64,
    pub ip: String,
    pub ip_alias: Option<String>,
    pub port: i64,
    pub notes: Option<String>,
    /// Whether this is the server's primary allocation.
    pub is_default: bool,
}

// ---------------------------------------------------------------------------
// Client scope: startup
// ---------------------------------------------------------------------------

/// Startup metadata reported alongside the variable list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StartupMeta {
    /// Startup command with variables substituted.
    pub startup_command: String,
    #[serde(default)]
    pub docker_images: HashMap<String, String>,
    /// Startup command with variable placeholders intact.
    pub raw_startup_command: String,
}

/// A startup variable as seen by the server owner.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientVariable {
    pub name: String,
    pub description: String,
    pub env_variable: String,
    pub default_value: String,
    /// The value currently set for this server.
    pub server_value: Option<String>,
    pub is_editable: bool,
    pub rules: String,
}

// ---------------------------------------------------------------------------
// Client scope: schedules
// ---------------------------------------------------------------------------

/// A recurring job attached to a server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Schedule {
    pub id: i64,
    pub name: String,
    pub cron: Cron,
    pub is_active: bool,
    pub is_processing: bool,
    #[serde(default)]
    pub only_when_online: bool,
    pub last_run_at: Option<DateTime<Utc>>,
    pub next_run_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Cron expression fields, each as the panel's text form.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Cron {
    pub day_of_week: String,
    pub day_of_month: String,
    pub hour: String,
    pub minute: String,
    #[serde(default)]
    pub month: String,
}

/// Request body for creating or updating a schedule.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ScheduleDescriptor {
    pub name: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub day_of_week: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    pub is_active: bool,
    pub only_when_online: bool,
}

/// A step inside a schedule.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaskInfo {
    /// "command", "power" or "backup".
    pub action: String,
    pub payload: String,
    pub time_offset: String,
}

/// Request body for creating or updating a schedule task.
#[derive(Debug, Clone, Serialize, Default)]
pub struct TaskDescriptor {
    pub action: String,
    pub payload: String,
    pub time_offset: String,
    pub continue_on_failure: bool,
}

// ---------------------------------------------------------------------------
// Client scope: backups
// ---------------------------------------------------------------------------

/// A snapshot of a server's data volume.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Backup {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub ignored_files: Vec<String>,
    pub sha256_hash: Option<String>,
    /// Archive size in bytes.
    pub bytes: i64,
    pub created_at: Option<DateTime<Utc>>,
    /// Set once the backup finishes.
    pub completed_at: Option<DateTime<Utc>>,
    pub is_successful: bool,
    /// Locked backups cannot be deleted until unlocked.
    pub is_locked: bool,
}

/// Request body for creating a backup.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateBackupDescriptor {
    pub name: String,
    /// Newline-separated ignore patterns.
    pub ignored: String,
    pub is_locked: bool,
}

/// A signed, short-lived URL for fetching a backup archive.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BackupDownload {
    pub url: String,
}
