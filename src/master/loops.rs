//! Background gossip loops: refresh, ping, and first-ping (§4.C).

use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::document::parse;
use crate::master::quorum::get_quorum;
use crate::peer::own_hostname;
use crate::store::Store;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize)]
struct RootResponse {
    yamls: Vec<String>,
    #[allow(dead_code)]
    masters: Vec<String>,
}

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("reqwest client builds")
}

/// Every `interval`, pull the newest document from one quorum peer whose
/// `/` succeeds, overwriting any local copy with a strictly newer `time`.
pub async fn refresh_loop(store: Arc<Store>, port: String, interval: Duration, mut stop: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => refresh_once(&store, &port).await,
            _ = stop.changed() => {
                if *stop.borrow() {
                    break;
                }
            }
        }
    }
}

async fn refresh_once(store: &Store, port: &str) {
    let Ok(local_body) = store.read("default.yml", port) else {
        return;
    };
    let Ok(local_doc) = parse(&local_body) else {
        return;
    };
    let quorum = get_quorum(&local_doc.masters, port);
    let client = http_client();

    for peer in quorum {
        let root: RootResponse = match client
            .get(format!("http://{peer}/"))
            .send()
            .await
            .ok()
            .filter(|r| r.status().is_success())
        {
            Some(response) => match response.json().await {
                Ok(root) => root,
                Err(_) => continue,
            },
            None => continue,
        };

        for name in &root.yamls {
            let Ok(local_record) = store.read(name, port) else {
                continue;
            };
            let Ok(local) = parse(&local_record) else {
                continue;
            };

            let Some(remote_body) = client
                .get(format!("http://{peer}/{name}"))
                .send()
                .await
                .ok()
                .filter(|r| r.status().is_success())
            else {
                continue;
            };
            let Ok(remote_text) = remote_body.text().await else {
                continue;
            };
            let Ok(remote) = parse(&remote_text) else {
                continue;
            };

            if remote.time > local.time {
                if let Err(e) = store.overwrite_raw(name, port, &remote_text) {
                    warn!(error = %e, "refresh overwrite failed");
                }
            }
        }
        break;
    }
}

/// Every `interval`, announce this master's presence to one quorum.
pub async fn ping_loop(store: Arc<Store>, port: String, interval: Duration, mut stop: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => ping_once(&store, &port).await,
            _ = stop.changed() => {
                if *stop.borrow() {
                    break;
                }
            }
        }
    }
}

async fn ping_once(store: &Store, port: &str) {
    let Ok(local_body) = store.read("default.yml", port) else {
        return;
    };
    let Ok(local_doc) = parse(&local_body) else {
        return;
    };
    let quorum = get_quorum(&local_doc.masters, port);
    let client = http_client();
    let own = format!("{}:{port}", own_hostname());

    for peer in quorum {
        let _ = client
            .get(format!("http://{peer}/ping?mynameis={own}"))
            .send()
            .await;
    }
    debug!(port, "ping tick complete");
}

/// Run once, 3 s after a fresh join: ping every known master (not just a
/// quorum) to rapidly propagate the joiner's presence.
pub async fn first_ping(store: Arc<Store>, port: String) {
    tokio::time::sleep(Duration::from_secs(3)).await;

    let Ok(local_body) = store.read("default.yml", &port) else {
        return;
    };
    let Ok(local_doc) = parse(&local_body) else {
        return;
    };
    if local_doc.masters.len() <= 1 {
        return;
    }

    let client = http_client();
    let own = format!("{}:{port}", own_hostname());
    for master in &local_doc.masters {
        let _ = client
            .get(format!("http://{master}/ping?mynameis={own}"))
            .send()
            .await;
    }
}
