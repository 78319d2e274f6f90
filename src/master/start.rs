//! Master start/stop: PID leasing, the join protocol, and wiring the HTTP
//! server together with the background loops (§4.C).

use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::config::Config;
use crate::document::{parse, split_trailer};
use crate::errors::{Error, Result};
use crate::master::http::{router, MasterState};
use crate::master::loops::{first_ping, ping_loop, refresh_loop};
use crate::peer::{normalize_peer, own_hostname, shuffled};
use crate::response::Response;
use crate::store::Store;

const MINIMUM_VIABLE_DOC: &str = r#"version: "1"

services:
  hello:
    ports:
      - 80:80
    containers:
      - image: nginx
        tag: latest
"#;

fn pid_path(config: &Config, port: &str) -> std::path::PathBuf {
    config.pid_dir.join(format!("swapper-master-{port}.pid"))
}

/// Refuse to start if any PID file in `config.pid_dir` names a live master.
/// Re-canonicalize any existing documents for `port`, preserving their
/// prior `time`. Seed a minimum-viable `default.yml` if none is valid.
pub fn prepare_new_master(config: &Config, store: &Store, port: &str) -> Result<()> {
    for entry in std::fs::read_dir(&config.pid_dir).map_err(|e| Error::io("read pid dir", e))? {
        let entry = entry.map_err(|e| Error::io("read pid dir entry", e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains("swapper-master-") {
            continue;
        }
        let path = entry.path();
        if crate::pidfile::remove_stale(&path) {
            return Err(Error::MasterAlreadyStarted);
        }
    }

    let suffix = format!(".yml_{port}");
    let mut found_valid = false;
    for entry in std::fs::read_dir(&config.yaml_dir).map_err(|e| Error::io("read yaml dir", e))? {
        let entry = entry.map_err(|e| Error::io("read yaml dir entry", e))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(&suffix) {
            continue;
        }
        let Ok(old_content) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        let Ok(old_doc) = parse(&old_content) else {
            continue;
        };
        let (body, _) = split_trailer(&old_content);
        let doc_name = file_name.strip_suffix(&format!("_{port}")).unwrap_or(&file_name);
        store.write(doc_name, body, port, &[], old_doc.time)?;
        if doc_name == "default.yml" {
            found_valid = true;
        }
    }

    if !found_valid {
        store.write("default.yml", MINIMUM_VIABLE_DOC, port, &[], 0)?;
    }
    Ok(())
}

/// Record this process's PID and launch the HTTP server plus background
/// loops. Blocks until the server stops.
pub async fn new_master(config: Config, store: Arc<Store>, port: String) -> Response {
    match run_master(config, store, port, None).await {
        Ok(()) => Response::success(""),
        Err(e) => Response::fail(format!("Swapper master failed to start: {e}")),
    }
}

/// Refuse to join if a live master already owns `port`. Normalize and
/// shuffle the join list, wipe any local documents for `port`, then import
/// every document the first reachable peer advertises.
pub async fn prepare_join_master(config: &Config, store: &Store, port: &str, join: &str) -> Result<()> {
    let pid_file = pid_path(config, port);
    if let Some(pid) = crate::pidfile::read_pid(&pid_file) {
        if crate::pidfile::is_process_alive(pid) {
            return Err(Error::WrongPort(join.to_string()));
        }
        let _ = std::fs::remove_file(&pid_file);
    }

    let masters: Vec<String> = join
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|a| normalize_peer(a, &config.default_port))
        .collect();
    let masters = shuffled(&masters);

    store.remove_all(port)?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client builds");

    #[derive(serde::Deserialize)]
    struct Root {
        yamls: Vec<String>,
    }

    let mut imported_any = false;
    for master in &masters {
        let Some(root) = client
            .get(format!("http://{master}/"))
            .send()
            .await
            .ok()
            .filter(|r| r.status().is_success())
        else {
            continue;
        };
        let Ok(root): std::result::Result<Root, _> = root.json().await else {
            continue;
        };
        if root.yamls.is_empty() {
            continue;
        }

        for name in &root.yamls {
            let Some(resp) = client
                .get(format!("http://{master}/{name}"))
                .send()
                .await
                .ok()
                .filter(|r| r.status().is_success())
            else {
                continue;
            };
            let Ok(text) = resp.text().await else {
                continue;
            };
            let (body, _) = split_trailer(&text);
            let Ok(remote_doc) = parse(&text) else {
                continue;
            };
            let mut extra_masters = remote_doc.masters;
            extra_masters.push(format!("{}:{port}", own_hostname()));
            store.write(name, body, port, &extra_masters, 0)?;
        }
        imported_any = true;
        break;
    }

    if !imported_any {
        return Err(Error::CannotContactMaster);
    }
    Ok(())
}

/// Record PID, schedule [`first_ping`], and launch the HTTP server plus the
/// refresh/ping loops. Blocks until the server stops.
pub async fn master_join(config: Config, store: Arc<Store>, port: String) -> Response {
    let first_ping_store = store.clone();
    let first_ping_port = port.clone();
    match run_master(
        config,
        store,
        port,
        Some(Box::pin(async move {
            first_ping(first_ping_store, first_ping_port).await;
        })),
    )
    .await
    {
        Ok(()) => Response::success(""),
        Err(e) => Response::fail(format!("Swapper master failed to start: {e}")),
    }
}

async fn run_master(
    config: Config,
    store: Arc<Store>,
    port: String,
    on_join_extra: Option<std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>>>,
) -> Result<()> {
    if port == "0" {
        return Err(Error::MasterFailed("port 0 is not valid".to_string()));
    }

    config.ensure_dirs().map_err(|e| Error::io("ensure directories", e))?;
    crate::pidfile::write_pid(&pid_path(&config, &port), std::process::id())
        .map_err(|e| Error::io("write pid file", e))?;

    let (stop_tx, stop_rx) = watch::channel(false);

    if let Some(fut) = on_join_extra {
        tokio::spawn(fut);
    }
    tokio::spawn(refresh_loop(
        store.clone(),
        port.clone(),
        config.refresh_interval,
        stop_rx.clone(),
    ));
    tokio::spawn(ping_loop(store.clone(), port.clone(), config.ping_interval, stop_rx));

    let state = MasterState {
        store,
        port: port.clone(),
    };
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::MasterFailed(e.to_string()))?;

    info!(%addr, "master listening");
    axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::MasterFailed(e.to_string()))?;

    let _ = stop_tx.send(true);
    Ok(())
}

/// Kill every `swapper-master-*.pid`-owned process on this machine.
pub fn master_stop(config: &Config) -> Response {
    let entries = match std::fs::read_dir(&config.pid_dir) {
        Ok(entries) => entries,
        Err(e) => return Response::fail(e.to_string()),
    };

    let mut stopped_any = false;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains("swapper-master-") {
            continue;
        }
        stopped_any = true;
        let path = entry.path();
        if let Some(pid) = crate::pidfile::read_pid(&path) {
            if crate::pidfile::is_process_alive(pid) {
                kill_pid(pid);
            }
        }
        let _ = std::fs::remove_file(&path);
    }

    if !stopped_any {
        return Response::fail(Error::MasterNotRunning.to_string());
    }
    Response::success("")
}

#[cfg(unix)]
fn kill_pid(pid: u32) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;
    let _ = kill(Pid::from_raw(pid as i32), Signal::SIGKILL);
}

#[cfg(not(unix))]
fn kill_pid(_pid: u32) {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn prepare_new_master_seeds_minimum_viable_doc() {
        let pid_dir = tempdir().unwrap();
        let yaml_dir = tempdir().unwrap();
        let config = Config {
            pid_dir: pid_dir.path().to_path_buf(),
            yaml_dir: yaml_dir.path().to_path_buf(),
            ..Config::default()
        };
        config.ensure_dirs().unwrap();
        let store = Store::new(yaml_dir.path().to_path_buf()).unwrap();

        prepare_new_master(&config, &store, "1207").unwrap();
        let stored = store.read("default.yml", "1207").unwrap();
        assert!(stored.contains("hello"));
    }

    #[test]
    fn prepare_new_master_refuses_when_pid_alive() {
        let pid_dir = tempdir().unwrap();
        let yaml_dir = tempdir().unwrap();
        let config = Config {
            pid_dir: pid_dir.path().to_path_buf(),
            yaml_dir: yaml_dir.path().to_path_buf(),
            ..Config::default()
        };
        config.ensure_dirs().unwrap();
        let store = Store::new(yaml_dir.path().to_path_buf()).unwrap();

        crate::pidfile::write_pid(&pid_path(&config, "1207"), std::process::id()).unwrap();
        let result = prepare_new_master(&config, &store, "1207");
        assert!(matches!(result, Err(Error::MasterAlreadyStarted)));
    }

    #[test]
    fn master_stop_fails_when_nothing_running() {
        let pid_dir = tempdir().unwrap();
        let config = Config {
            pid_dir: pid_dir.path().to_path_buf(),
            ..Config::default()
        };
        let response = master_stop(&config);
        assert!(!response.is_success());
    }
}
