//! The `status` operation: list live masters and node processes (§6).

use crate::config::Config;
use crate::pidfile::remove_stale;
use crate::response::Response;

const MASTER_PID_PREFIX: &str = "swapper-master-";
const MASTER_PID_SUFFIX: &str = ".pid";
const NODE_PID_FILE: &str = "swapper-node.pid";

/// List every live `swapper-master-<port>.pid` and `swapper-node.pid` under
/// `config.pid_dir`, pruning any that no longer name a live process.
pub fn status(config: &Config) -> Response {
    let entries = match std::fs::read_dir(&config.pid_dir) {
        Ok(entries) => entries,
        Err(_) => return Response::success("No swapper process running\n"),
    };

    let mut master_ports = Vec::new();
    let mut node_running = false;

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if let Some(port) = name
            .strip_prefix(MASTER_PID_PREFIX)
            .and_then(|rest| rest.strip_suffix(MASTER_PID_SUFFIX))
        {
            if remove_stale(&path) {
                master_ports.push(port.to_string());
            }
        } else if name == NODE_PID_FILE && remove_stale(&path) {
            node_running = true;
        }
    }

    if master_ports.is_empty() && !node_running {
        return Response::success("No swapper process running\n");
    }

    master_ports.sort();
    let mut message = String::new();
    for port in &master_ports {
        message.push_str(&format!("Master running on port {port}\n"));
    }
    if node_running {
        message.push_str("Node running\n");
    }
    Response::success(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reports_no_process_running_on_empty_pid_dir() {
        let pid_dir = tempdir().unwrap();
        let config = Config {
            pid_dir: pid_dir.path().to_path_buf(),
            ..Config::default()
        };
        let response = status(&config);
        assert!(response.is_success());
        assert_eq!(response.message, "No swapper process running\n");
    }

    #[test]
    fn reports_a_live_master_and_prunes_dead_node_pid() {
        let pid_dir = tempdir().unwrap();
        let config = Config {
            pid_dir: pid_dir.path().to_path_buf(),
            ..Config::default()
        };
        crate::pidfile::write_pid(
            &pid_dir.path().join("swapper-master-1207.pid"),
            std::process::id(),
        )
        .unwrap();
        let dead_node_pid = pid_dir.path().join(NODE_PID_FILE);
        crate::pidfile::write_pid(&dead_node_pid, u32::MAX - 1).unwrap();

        let response = status(&config);
        assert!(response.is_success());
        assert!(response.message.contains("Master running on port 1207"));
        assert!(!response.message.contains("Node running"));
        assert!(!dead_node_pid.exists());
    }
}
