//! Specification document: model, preparation, parsing, and trailer framing.

mod model;
mod parse;
mod prepare;
mod trailer;

pub use model::{Container, Document, Frontend, MasterConfig, Service, SlackConfig};
pub use parse::parse;
pub use prepare::{parse_var_bindings, prepare, prepare_str};
pub use trailer::{append_trailer, format_trailer, split_trailer};

use crate::errors::{Error, Result};

/// Reject a deploy input that declares any of the internal, computed
/// fields. These are only ever produced by the store, never by a user.
pub fn forbid_internal_fields(body: &str) -> Result<()> {
    if body.contains("hash: ") {
        return Err(Error::NoHash);
    }
    if body.contains("time: ") {
        return Err(Error::NoTime);
    }
    if body.contains("masters: ") {
        return Err(Error::NoMasters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbids_hash_field() {
        assert!(matches!(
            forbid_internal_fields("a: b\nhash: x"),
            Err(Error::NoHash)
        ));
    }

    #[test]
    fn forbids_time_field() {
        assert!(matches!(
            forbid_internal_fields("a: b\ntime: 123"),
            Err(Error::NoTime)
        ));
    }

    #[test]
    fn forbids_masters_field() {
        assert!(matches!(
            forbid_internal_fields("a: b\nmasters: \n  - x"),
            Err(Error::NoMasters)
        ));
    }

    #[test]
    fn accepts_clean_body() {
        assert!(forbid_internal_fields("version: \"1\"\nservices: {}").is_ok());
    }
}
