//! The node reconciliation loop: fetch, diff, apply, atomic switch (§4.D).

pub mod fetch;
pub mod proxy;
pub mod reconcile;

pub use reconcile::{apply, node_start, run_containers};

use crate::config::Config;
use crate::errors::Error;
use crate::response::Response;
use crate::runtime::RuntimeClient;

/// Stop the node: kill the PID-file-leased process, stop the proxy
/// sidecar, and stop every `swapper-container.*`.
pub async fn node_stop(config: &Config, runtime: &RuntimeClient) -> Response {
    let pid_path = config.pid_dir.join("swapper-node.pid");
    if let Some(pid) = crate::pidfile::read_pid(&pid_path) {
        if crate::pidfile::is_process_alive(pid) {
            kill_pid(pid);
        }
        let _ = std::fs::remove_file(&pid_path);
    }

    let _ = runtime.stop_proxy_gracefully().await;

    match runtime.stop_controller_containers().await {
        Ok(()) => Response::success("Stopped\n"),
        Err(Error::ContainersNotRunning) => Response::fail(Error::ContainersNotRunning.to_string()),
        Err(e) => Response::fail(e.to_string()),
    }
}

#[cfg(unix)]
fn kill_pid(pid: u32) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;
    let _ = kill(Pid::from_raw(pid as i32), Signal::SIGKILL);
}

#[cfg(not(unix))]
fn kill_pid(_pid: u32) {}
