//! Probabilistic quorum selection (§6 quorum-size table).

use crate::peer::{own_hostname, shuffled};

/// Compute the quorum size for a master set of size `n` (including self).
///
/// n=1→0, n=2→2, n=3→2, n=4→3, n=5→3, n=6→4, n=7→4: even counts get
/// `n/2 + 1`, odd counts get `ceil(n/2)`.
pub fn quorum_size(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    if n % 2 == 0 {
        n / 2 + 1
    } else {
        n.div_ceil(2)
    }
}

/// Draw a quorum of peers from `masters` (the full set, including self),
/// for `current_port`'s master.
///
/// Returns an empty vector when `masters` has only one entry (self alone).
pub fn get_quorum(masters: &[String], current_port: &str) -> Vec<String> {
    let count = masters.len();
    if count <= 1 {
        return Vec::new();
    }
    let quorum_nb = quorum_size(count);

    let shuffled_masters = shuffled(masters);
    let self_addr = format!("{}:{current_port}", own_hostname());

    shuffled_masters
        .into_iter()
        .filter(|m| m != &self_addr)
        .take(quorum_nb)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quorum_size_matches_documented_table() {
        assert_eq!(quorum_size(1), 0);
        assert_eq!(quorum_size(2), 2);
        assert_eq!(quorum_size(3), 2);
        assert_eq!(quorum_size(4), 3);
        assert_eq!(quorum_size(5), 3);
        assert_eq!(quorum_size(6), 4);
        assert_eq!(quorum_size(7), 4);
    }

    #[test]
    fn single_master_has_empty_quorum() {
        let quorum = get_quorum(&["h1:1207".to_string()], "1207");
        assert!(quorum.is_empty());
    }

    #[test]
    fn seven_masters_yields_quorum_of_four() {
        let masters: Vec<String> = (1..=7).map(|i| format!("h{i}:1207")).collect();
        let quorum = get_quorum(&masters, "1207");
        assert_eq!(quorum.len(), 4);
    }

    #[test]
    fn quorum_never_includes_self() {
        let self_addr = format!("{}:1207", crate::peer::own_hostname());
        let masters = vec![
            self_addr.clone(),
            "h2:1207".to_string(),
            "h3:1207".to_string(),
        ];
        let quorum = get_quorum(&masters, "1207");
        assert!(!quorum.contains(&self_addr));
    }
}
