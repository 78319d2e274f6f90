//! Prepare: load raw bytes, canonicalize through a YAML round-trip, and
//! substitute `${VAR}` placeholders from caller-supplied bindings.

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::errors::{Error, Result};

/// Parse `NAME=VALUE` bindings (as given on a `--var` flag) into a map.
///
/// Empty strings are ignored, matching the CLI convention of allowing a
/// variadic flag to be omitted entirely.
pub fn parse_var_bindings(vars: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for entry in vars {
        if entry.is_empty() {
            continue;
        }
        if let Some((name, value)) = entry.split_once('=') {
            map.insert(name.to_string(), value.to_string());
        }
    }
    map
}

/// Read `source_file`, strip comments by round-tripping through YAML, and
/// substitute every `${IDENT}` placeholder using `vars`.
///
/// Fails with [`Error::VarMissing`] naming every identifier left unresolved.
pub fn prepare(source_file: &Path, vars: &[String]) -> Result<String> {
    let input = std::fs::read_to_string(source_file).map_err(|_| {
        Error::FileNotExist(source_file.display().to_string())
    })?;
    prepare_str(&input, vars)
}

/// Same as [`prepare`], but takes the document body directly rather than a
/// file path. Useful for tests and for transports that already hold bytes.
pub fn prepare_str(input: &str, vars: &[String]) -> Result<String> {
    let value: serde_yaml::Value = serde_yaml::from_str(input).map_err(|_| Error::YamlInvalid)?;
    let mut clean_yaml = serde_yaml::to_string(&value).map_err(|_| Error::YamlInvalid)?;

    let var_map = parse_var_bindings(vars);

    let placeholder = Regex::new(r"\$\{[a-zA-Z0-9_-]+\}").expect("static regex is valid");
    let matches: Vec<String> = placeholder
        .find_iter(&clean_yaml)
        .map(|m| m.as_str().to_string())
        .collect();

    for m in &matches {
        let varname = &m[2..m.len() - 1];
        if let Some(value) = var_map.get(varname) {
            clean_yaml = clean_yaml.replace(m.as_str(), value);
        }
    }

    let remaining: Vec<String> = placeholder
        .find_iter(&clean_yaml)
        .map(|m| m.as_str().to_string())
        .collect();

    if !remaining.is_empty() {
        let mut names = Vec::new();
        let mut examples = Vec::new();
        for m in &remaining {
            let varname = m[2..m.len() - 1].to_string();
            if !names.contains(&varname) {
                examples.push(format!("--var {varname}=<value>"));
                names.push(varname);
            }
        }
        return Err(Error::VarMissing {
            names: names.join(" "),
            examples: examples.join(" "),
        });
    }

    debug!(bytes = clean_yaml.len(), "prepared document");
    Ok(clean_yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_variable() {
        let input = "version: \"1\"\ntag: ${TAG}\n";
        let out = prepare_str(input, &["TAG=1.0.2".to_string()]).unwrap();
        assert!(out.contains("1.0.2"));
        assert!(!out.contains("${TAG}"));
    }

    #[test]
    fn reports_every_unresolved_variable_once() {
        let input = "a: ${FOO}\nb: ${FOO}\nc: ${BAR}\n";
        let err = prepare_str(input, &[]).unwrap_err();
        match err {
            Error::VarMissing { names, examples } => {
                assert!(names.contains("FOO"));
                assert!(names.contains("BAR"));
                assert_eq!(names.split(' ').count(), 2);
                assert!(examples.contains("--var FOO=<value>"));
            }
            other => panic!("expected VarMissing, got {other:?}"),
        }
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let err = prepare_str(": :\n  -\nbad", &[]).unwrap_err();
        assert!(matches!(err, Error::YamlInvalid));
    }

    #[test]
    fn empty_var_entries_are_ignored() {
        let map = parse_var_bindings(&[String::new(), "A=1".to_string()]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some(&"1".to_string()));
    }
}
