//! Error types for berth.
//!
//! This module provides the single error enum shared by the document parser,
//! the specification store, the master replication engine, the node
//! reconciliation loop, and the deploy client. Message templates on the
//! display-facing variants are part of the external contract: callers and
//! tests match on the rendered text, not just the variant.

use thiserror::Error;

/// Result type alias used throughout berth.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all berth operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced file does not exist.
    #[error("[ERROR] File {0} does not exist")]
    FileNotExist(String),

    /// A document failed to decode as YAML.
    #[error("[ERROR] Your Yaml file is invalid")]
    YamlInvalid,

    /// A document declared an unsupported `version`.
    #[error("[ERROR] Yaml Error, unknown version")]
    YamlVersion,

    /// One or more `${VAR}` placeholders were left unresolved after substitution.
    #[error("[ERROR] Missing variable ({names}), try same command ended by:\n  {examples}")]
    VarMissing {
        /// Space-separated list of unresolved variable names.
        names: String,
        /// Space-separated list of suggested `--var NAME=<value>` flags.
        examples: String,
    },

    /// Deploy input declared a non-empty `masters` field.
    #[error("[ERROR] Your yaml is invalid. you cannot use \"masters\" field")]
    NoMasters,

    /// Deploy input declared a `hash` field.
    #[error("[ERROR] Your yaml is invalid. You cannot use \"hash\" field")]
    NoHash,

    /// Deploy input declared a `time` field.
    #[error("[ERROR] Your yaml is invalid. You cannot use \"time\" field")]
    NoTime,

    /// A service declared two external ports that collide.
    #[error("[ERROR] You try to bind entry port {0} multiple times")]
    PortConflict(String),

    /// A `ext:int` port binding string could not be parsed.
    #[error("[ERROR] It seems binding \"{0}\" is invalid")]
    PortsInvalid(String),

    /// A service declared an empty port binding string.
    #[error("[ERROR] Ports cannot be an empty string")]
    PortsEmpty,

    /// A required field was missing on a service or container.
    #[error("[ERROR] '{field}' for service '{service}' is required or invalid")]
    ServiceFieldNeeded {
        /// Name of the missing field.
        field: String,
        /// Name of the service (or container's owning service) missing it.
        service: String,
    },

    /// A master start was attempted while a live master already owns the port.
    #[error("\n[ERROR] A swapper master is already running on this machine! To add new master to the ring, execute:\n  swapper master start --join <previous-master-hostname>\n")]
    MasterAlreadyStarted,

    /// A master join was attempted while a live master already owns this port.
    #[error("\n[ERROR] A swapper master is already running on this machine with this port! You have to specify a new one:\n  swapper master start --join {0} -p <FREE PORT>\n")]
    WrongPort(String),

    /// No peer responded with any document during join.
    #[error("\n[ERROR] Swapper master is not responding!\n")]
    CannotContactMaster,

    /// The deploy target master did not respond.
    #[error("\n[ERROR] Swapper master is not running, or its hostname \"{0}\" is not responding. \nStart master with:\n  swapper master start\nOr you can specify its address with following command:\n  swapper master start --master master-hostname:1207\n")]
    BadMasterAddr(String),

    /// The HTTP server failed to bind, or the requested port was invalid.
    #[error("[ERROR] Swapper master failed to start: {0}")]
    MasterFailed(String),

    /// No master is currently running on this machine.
    #[error("\n[ERROR] Swapper master is not running! Try to start with:\n  swapper master start\n")]
    MasterNotRunning,

    /// A node was started without a `--join` peer list.
    #[error("\n[ERROR] Swapper node can't start without joining anything. Try with:\n  swapper node start --join <master-hostname>\n")]
    NeedMasterAddr,

    /// The container runtime failed to start a container.
    #[error("[ERROR] Container {0} failed to start")]
    ContainerFailed(String),

    /// The container runtime could not report a container's IP address.
    #[error("[ERROR] Can't find container's IP for {0}")]
    ContainerIpFailed(String),

    /// The proxy sidecar failed to start.
    #[error("[ERROR] Swapper proxy failed to start")]
    ProxyFailed,

    /// The proxy sidecar failed to stop during a forced recreate.
    #[error("[ERROR] Swapper proxy failed to stop")]
    ProxyStopFailed,

    /// The synthesized proxy configuration had no frontends or backends.
    #[error("[ERROR] Swapper Proxy's conf is empty")]
    ProxyConfEmpty,

    /// `node stop` found no running `swapper-container.*` containers.
    #[error("\n[ERROR] Any swapper-container running! Try to start with:\n  swapper node start --join <master-hostname>\n")]
    ContainersNotRunning,

    /// A deploy POST returned a non-200 status.
    #[error("[ERROR] Deploy failed.\n  {0}")]
    DeployFailed(String),

    /// A `$(command)` substitution inside the document failed to execute.
    #[error("[ERROR] A command inside your yaml failed:\n{0}")]
    CommandFailed(String),

    /// An HTTP request to a peer or master failed.
    #[error("[ERROR] Request failed.\n  {0}")]
    RequestFailed(String),

    /// An underlying I/O error.
    #[error("I/O error during {operation}: {source}")]
    Io {
        /// The operation that caused the error.
        operation: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap a [`std::io::Error`] with the operation that produced it.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
