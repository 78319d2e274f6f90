//! The `hash`/`time`/`masters` trailer appended to every stored document.
//!
//! The trailer is split by the literal substring `\nhash: `, not by a YAML
//! re-parse, so that a document whose body happens to contain YAML-looking
//! `hash:`/`time:`/`masters:` keys nested under a service is never mistaken
//! for the computed trailer.

/// Split a stored document into its body (without trailer) and, if present,
/// the trailer's raw text (including the leading `\nhash: `).
///
/// A document that has never been stored (no trailer yet) returns the whole
/// input as the body and `None` for the trailer.
pub fn split_trailer(stored: &str) -> (&str, Option<&str>) {
    match stored.split_once("\nhash: ") {
        Some((body, _rest)) => (body, Some(&stored[body.len()..])),
        None => (stored, None),
    }
}

/// Render the trailer block for `hash`, `time`, and a sorted master list.
///
/// `masters` is expected to already be sorted and deduplicated by the
/// caller ([`crate::store`]); this function only formats it.
pub fn format_trailer(hash: &str, time: i64, masters: &[String]) -> String {
    let mut out = String::new();
    out.push_str("\nhash: ");
    out.push_str(hash);
    out.push_str("\ntime: ");
    out.push_str(&time.to_string());
    out.push_str("\nmasters: ");
    for master in masters {
        out.push_str("\n  - ");
        out.push_str(master);
    }
    out
}

/// Append a formatted trailer onto `body`.
pub fn append_trailer(body: &str, hash: &str, time: i64, masters: &[String]) -> String {
    let mut out = body.to_string();
    out.push_str(&format_trailer(hash, time, masters));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trailer_separates_body_from_trailer() {
        let stored = "body line\nhash: abc\ntime: 5\nmasters: \n  - h:1\n";
        let (body, trailer) = split_trailer(stored);
        assert_eq!(body, "body line");
        assert!(trailer.unwrap().starts_with("\nhash: abc"));
    }

    #[test]
    fn split_trailer_on_untrailered_body_returns_whole_input() {
        let body = "just a body\nno trailer here\n";
        let (b, trailer) = split_trailer(body);
        assert_eq!(b, body);
        assert!(trailer.is_none());
    }

    #[test]
    fn format_trailer_matches_bit_exact_layout() {
        let trailer = format_trailer("abc123", 42, &["h1:1".to_string(), "h2:2".to_string()]);
        assert_eq!(trailer, "\nhash: abc123\ntime: 42\nmasters: \n  - h1:1\n  - h2:2");
    }
}
