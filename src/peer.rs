//! Peer-address normalization shared by master join, node start, and deploy.

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Resolve this machine's hostname.
///
/// Falls back to `"localhost"` if the OS call fails, which only matters in
/// sandboxed test environments without a resolvable hostname.
pub fn own_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}

/// Normalize a single peer address: `localhost`/`127.0.0.1` become the own
/// hostname, and a bare host gets `default_port` appended.
pub fn normalize_peer(addr: &str, default_port: &str) -> String {
    let host = if addr == "localhost" || addr == "127.0.0.1" {
        own_hostname()
    } else {
        addr.to_string()
    };
    if host.contains(':') {
        host
    } else {
        format!("{host}:{default_port}")
    }
}

/// Split a comma-separated `--join` value into normalized `host:port`
/// addresses.
pub fn parse_peer_list(join: &str, default_port: &str) -> Vec<String> {
    join.split(',')
        .filter(|s| !s.is_empty())
        .map(|s| normalize_peer(s, default_port))
        .collect()
}

/// Return a shuffled copy of `peers`.
pub fn shuffled(peers: &[String]) -> Vec<String> {
    let mut out = peers.to_vec();
    out.shuffle(&mut thread_rng());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_default_port() {
        assert_eq!(normalize_peer("example.com", "1207"), "example.com:1207");
    }

    #[test]
    fn normalize_preserves_explicit_port() {
        assert_eq!(normalize_peer("example.com:9999", "1207"), "example.com:9999");
    }

    #[test]
    fn normalize_localhost_resolves_to_own_hostname() {
        let resolved = normalize_peer("localhost", "1207");
        assert!(!resolved.starts_with("localhost"));
        assert!(resolved.ends_with(":1207"));
    }

    #[test]
    fn parse_peer_list_splits_on_comma() {
        let peers = parse_peer_list("a,b:9", "1207");
        assert_eq!(peers, vec!["a:1207".to_string(), "b:9".to_string()]);
    }

    #[test]
    fn shuffled_preserves_set() {
        let peers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut shuffled_peers = shuffled(&peers);
        shuffled_peers.sort();
        assert_eq!(shuffled_peers, peers);
    }
}
