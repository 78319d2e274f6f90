//! Parse: decode a prepared YAML body into the typed [`Document`] model.

use std::collections::HashSet;
use serde_yaml::Value;
use tracing::debug;

use crate::document::model::{Container, Document, Frontend, MasterConfig, Service, SlackConfig};
use crate::errors::{Error, Result};

/// Decode `body` into a typed [`Document`].
///
/// Rejects `version != "1"`; validates required service/container fields;
/// builds the derived `frontends` list, detecting duplicate external ports
/// across services.
pub fn parse(body: &str) -> Result<Document> {
    let value: Value = serde_yaml::from_str(body).map_err(|_| Error::YamlInvalid)?;

    let version = get_str(&value, "version");
    if version.as_deref() != Some("1") {
        return Err(Error::YamlVersion);
    }

    let mut doc = Document {
        hash: get_str(&value, "hash").unwrap_or_default(),
        time: get_int(&value, "time").unwrap_or(0),
        masters: get_string_seq(&value, "masters"),
        master: parse_master_config(&value)?,
        slack: parse_slack_config(&value),
        ..Document::default()
    };

    let mut services = Vec::new();
    let mut frontends = Vec::new();
    let mut seen_ports: HashSet<String> = HashSet::new();

    let services_map = value
        .get("services")
        .and_then(Value::as_mapping)
        .cloned()
        .unwrap_or_default();

    for (key, service_val) in services_map.iter() {
        let service_name = key
            .as_str()
            .ok_or(Error::YamlInvalid)?
            .to_string();

        let containers = parse_containers(service_val, &service_name)?;

        let ports = get_string_seq(service_val, "ports");
        if ports.is_empty() {
            return Err(Error::ServiceFieldNeeded {
                field: "ports".to_string(),
                service: service_name,
            });
        }

        let mut service = Service {
            name: service_name.clone(),
            ports: Vec::new(),
            containers: containers.clone(),
        };

        for port_str in &ports {
            if port_str.is_empty() {
                return Err(Error::PortsEmpty);
            }
            let (ext_str, int_str) = port_str
                .split_once(':')
                .ok_or_else(|| Error::PortsInvalid(port_str.clone()))?;
            let ext: u16 = ext_str
                .parse()
                .map_err(|_| Error::PortsInvalid(port_str.clone()))?;
            let int: u16 = int_str
                .parse()
                .map_err(|_| Error::PortsInvalid(port_str.clone()))?;
            if ext == 0 || int == 0 {
                return Err(Error::PortsInvalid(port_str.clone()));
            }

            if !seen_ports.insert(ext_str.to_string()) {
                return Err(Error::PortConflict(ext_str.to_string()));
            }

            service.ports.push(port_str.clone());
            frontends.push(Frontend {
                name: format!("frontend_{ext}"),
                listen: ext,
                bind: int,
                backend_name: format!("backend_{ext}_{int}"),
                service_name: service_name.clone(),
                containers: containers.clone(),
            });
        }

        services.push(service);
    }

    doc.services = services;
    doc.frontends = frontends;

    debug!(services = doc.services.len(), frontends = doc.frontends.len(), "parsed document");
    Ok(doc)
}

fn parse_containers(service_val: &Value, service_name: &str) -> Result<Vec<Container>> {
    let containers_seq = service_val
        .get("containers")
        .and_then(Value::as_sequence)
        .cloned()
        .unwrap_or_default();

    let mut containers = Vec::with_capacity(containers_seq.len());
    for (index, container_val) in containers_seq.iter().enumerate() {
        let image = get_str(container_val, "image").unwrap_or_default();
        if image.is_empty() {
            return Err(Error::ServiceFieldNeeded {
                field: "image".to_string(),
                service: service_name.to_string(),
            });
        }
        let tag = get_str(container_val, "tag").unwrap_or_default();
        if tag.is_empty() {
            return Err(Error::ServiceFieldNeeded {
                field: "tag".to_string(),
                service: service_name.to_string(),
            });
        }

        let mut weight = get_int(container_val, "weight").unwrap_or(0);
        if weight == 0 {
            weight = 100;
        }

        let environment = get_string_pairs(container_val, "environment");
        let logging_driver = container_val
            .get("logging")
            .and_then(|l| get_str(l, "driver"))
            .unwrap_or_default();
        let logging_options = container_val
            .get("logging")
            .map(|l| get_string_pairs(l, "options"))
            .unwrap_or_default();

        let health_retries = get_int(container_val, "health-retries")
            .or_else(|| get_str(container_val, "health-retries").and_then(|s| s.parse().ok()))
            .unwrap_or(0);

        containers.push(Container {
            name: service_name.to_string(),
            index,
            image,
            tag,
            weight,
            environment,
            logging_options,
            logging_driver,
            health_cmd: get_str(container_val, "health-cmd").unwrap_or_default(),
            health_interval: get_str(container_val, "health-interval").unwrap_or_default(),
            health_retries,
            health_timeout: get_str(container_val, "health-timeout").unwrap_or_default(),
            extra_hosts: get_string_seq(container_val, "extra_hosts"),
        });
    }
    Ok(containers)
}

fn parse_master_config(value: &Value) -> Result<MasterConfig> {
    let Some(master_val) = value.get("master") else {
        return Ok(MasterConfig::default());
    };
    let driver = get_str(master_val, "driver").unwrap_or_else(|| "local".to_string());
    if driver != "gcp" {
        return Ok(MasterConfig {
            driver: "local".to_string(),
            ..MasterConfig::default()
        });
    }
    let project_id = get_str(master_val, "project-id").unwrap_or_default();
    if project_id.is_empty() {
        return Err(Error::ServiceFieldNeeded {
            field: "project-id".to_string(),
            service: "master".to_string(),
        });
    }
    Ok(MasterConfig {
        driver: "gcp".to_string(),
        project_id,
        credentials_file: get_str(master_val, "credentials-file"),
    })
}

fn parse_slack_config(value: &Value) -> Option<SlackConfig> {
    let slack_val = value.get("slack")?;
    let webhook_url = get_str(slack_val, "webhook-url")?;
    let channel = get_str(slack_val, "channel")?;
    if webhook_url.is_empty() || channel.is_empty() {
        return None;
    }
    Some(SlackConfig {
        webhook_url,
        channel,
    })
}

fn get_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn get_int(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

fn get_string_seq(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_sequence)
        .map(|seq| {
            seq.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn get_string_pairs(value: &Value, key: &str) -> Vec<(String, String)> {
    value
        .get(key)
        .and_then(Value::as_mapping)
        .map(|m| {
            m.iter()
                .filter_map(|(k, v)| {
                    let key = k.as_str()?.to_string();
                    let value = match v {
                        Value::String(s) => s.clone(),
                        Value::Number(n) => n.to_string(),
                        Value::Bool(b) => b.to_string(),
                        _ => return None,
                    };
                    Some((key, value))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
version: "1"
services:
  hello:
    ports:
      - 80:80
    containers:
      - image: nginx
        tag: latest
"#;

    #[test]
    fn parses_minimal_document() {
        let doc = parse(BASE).unwrap();
        assert_eq!(doc.services.len(), 1);
        assert_eq!(doc.frontends.len(), 1);
        assert_eq!(doc.frontends[0].listen, 80);
        assert_eq!(doc.frontends[0].bind, 80);
        assert_eq!(doc.services[0].containers[0].weight, 100);
    }

    #[test]
    fn rejects_wrong_version() {
        let body = BASE.replace("\"1\"", "\"2\"");
        assert!(matches!(parse(&body), Err(Error::YamlVersion)));
    }

    #[test]
    fn rejects_missing_image() {
        let body = r#"
version: "1"
services:
  hello:
    ports:
      - 80:80
    containers:
      - tag: latest
"#;
        assert!(matches!(
            parse(body),
            Err(Error::ServiceFieldNeeded { field, .. }) if field == "image"
        ));
    }

    #[test]
    fn detects_port_conflict_across_services() {
        let body = r#"
version: "1"
services:
  a:
    ports:
      - 80:80
    containers:
      - image: nginx
        tag: latest
  b:
    ports:
      - 80:81
    containers:
      - image: nginx
        tag: latest
"#;
        assert!(matches!(parse(body), Err(Error::PortConflict(p)) if p == "80"));
    }

    #[test]
    fn detects_invalid_port_binding() {
        let body = r#"
version: "1"
services:
  a:
    ports:
      - notaport
    containers:
      - image: nginx
        tag: latest
"#;
        assert!(matches!(parse(body), Err(Error::PortsInvalid(_))));
    }

    #[test]
    fn parses_gcp_master_config() {
        let body = r#"
version: "1"
master:
  driver: gcp
  project-id: my-project
services:
  hello:
    ports:
      - 80:80
    containers:
      - image: nginx
        tag: latest
"#;
        let doc = parse(body).unwrap();
        assert!(doc.master.is_gcp());
        assert_eq!(doc.master.project_id, "my-project");
    }

    #[test]
    fn gcp_master_requires_project_id() {
        let body = r#"
version: "1"
master:
  driver: gcp
services:
  hello:
    ports:
      - 80:80
    containers:
      - image: nginx
        tag: latest
"#;
        assert!(matches!(
            parse(body),
            Err(Error::ServiceFieldNeeded { field, .. }) if field == "project-id"
        ));
    }
}
