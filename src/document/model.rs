//! Typed in-memory shape of a specification document.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// A fully parsed, typed specification document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Services, in declaration order.
    pub services: Vec<Service>,
    /// Frontends derived from the services' port bindings, one per unique
    /// external port.
    pub frontends: Vec<Frontend>,
    /// Content hash of the document body, empty until stored.
    #[serde(default)]
    pub hash: String,
    /// Monotonic nanosecond timestamp, `0` until stored.
    #[serde(default)]
    pub time: i64,
    /// Sorted, deduplicated set of `host:port` masters holding a copy.
    #[serde(default)]
    pub masters: Vec<String>,
    /// Specification transport configuration (`driver: local | gcp`).
    #[serde(default)]
    pub master: MasterConfig,
    /// Optional Slack notification target.
    #[serde(default)]
    pub slack: Option<SlackConfig>,
}

/// One named service: a set of containers sharing a port binding list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Service {
    /// Service name, as declared under `services:`.
    pub name: String,
    /// Raw `"ext:int"` port bindings, in declaration order.
    pub ports: Vec<String>,
    /// Containers backing this service, in declaration order.
    pub containers: Vec<Container>,
}

/// One container within a service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Container {
    /// Name of the owning service (containers are named after their service).
    pub name: String,
    /// Zero-based index within the owning service.
    pub index: usize,
    /// Image repository.
    pub image: String,
    /// Image tag.
    pub tag: String,
    /// Load-balancing weight; defaults to 100 when unset or zero.
    pub weight: i64,
    /// Environment variables, preserving declaration order.
    pub environment: Vec<(String, String)>,
    /// Logging driver options, preserving declaration order.
    pub logging_options: Vec<(String, String)>,
    /// Logging driver name, if any.
    pub logging_driver: String,
    /// Health-check command.
    pub health_cmd: String,
    /// Health-check interval, e.g. `"10s"`.
    pub health_interval: String,
    /// Health-check retry count.
    pub health_retries: i64,
    /// Health-check timeout, e.g. `"3s"`.
    pub health_timeout: String,
    /// `--add-host` style extra host entries.
    pub extra_hosts: Vec<String>,
}

/// A load-balancer frontend, derived from a unique external port.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Frontend {
    /// `frontend_<ext>`.
    pub name: String,
    /// External ("listen") port.
    pub listen: u16,
    /// Internal ("bind") port on the containers.
    pub bind: u16,
    /// `backend_<ext>_<int>`.
    pub backend_name: String,
    /// Name of the service this frontend routes to.
    pub service_name: String,
    /// Containers backing this frontend (a copy of the owning service's).
    pub containers: Vec<Container>,
}

/// Specification-transport selection embedded in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MasterConfig {
    /// `"local"` (default) or `"gcp"`.
    pub driver: String,
    /// Required when `driver == "gcp"`.
    #[serde(default)]
    pub project_id: String,
    /// Optional path to a GCP service-account credentials file.
    #[serde(default)]
    pub credentials_file: Option<String>,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            driver: "local".to_string(),
            project_id: String::new(),
            credentials_file: None,
        }
    }
}

impl MasterConfig {
    /// True when this document should be published through the GCS blob
    /// transport rather than the local-master HTTP path.
    pub fn is_gcp(&self) -> bool {
        self.driver == "gcp"
    }
}

/// Slack webhook notification target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SlackConfig {
    /// Incoming webhook URL.
    pub webhook_url: String,
    /// Channel to post to.
    pub channel: String,
}

/// Raw, untyped view of a document as decoded YAML, used by the parser to
/// walk `services` with ordering and type flexibility `serde_yaml`'s typed
/// deserialization doesn't give us directly (mixed scalar env values, etc).
pub type RawYaml = serde_yaml::Value;

/// Ordered map helper: `serde_yaml::Mapping` preserves insertion order, but
/// callers that want a `BTreeMap` view (e.g. for deterministic test
/// fixtures) can use this alias.
pub type SortedMap = BTreeMap<String, String>;
