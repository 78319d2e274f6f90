//! The deploy client (§4.E): normalize, reject internal fields on the
//! parsed document, publish.

use std::path::Path;

use crate::config::Config;
use crate::document::{parse, prepare};
use crate::errors::Error;
use crate::notify::NotifierSet;
use crate::peer::normalize_peer;
use crate::response::Response;
use crate::transport::{LocalMasterTransport, SpecTransport};

/// Normalize `file` through §4.A, forbid internal fields, and publish it to
/// `master_hostname` (or the declared GCS bucket, when `master.driver ==
/// "gcp"`). The document's `slack` block drives success/failure
/// notification.
pub async fn deploy(
    config: &Config,
    file: &Path,
    vars: &[String],
    master_hostname: &str,
) -> Response {
    let clean_yaml = match prepare(file, vars) {
        Ok(body) => body,
        Err(e) => return Response::fail(e.to_string()),
    };

    let doc = match parse(&clean_yaml) {
        Ok(doc) => doc,
        Err(e) => return Response::fail(e.to_string()),
    };

    // Mirrors the original's field checks on the parsed document, not a
    // raw substring scan (that's the HTTP POST handler's job instead).
    if !doc.hash.is_empty() {
        return Response::fail(Error::NoHash.to_string());
    }
    if doc.time != 0 {
        return Response::fail(Error::NoTime.to_string());
    }
    if !doc.masters.is_empty() {
        return Response::fail(Error::NoMasters.to_string());
    }

    let doc_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "swapper.yml".to_string());

    let notifiers = NotifierSet::for_document(&doc);

    let publish_result = if doc.master.is_gcp() {
        publish_gcp(&doc, &clean_yaml, &doc_name).await
    } else {
        publish_local(config, master_hostname, &clean_yaml, &doc_name).await
    };

    match publish_result {
        Ok(()) => {
            notifiers.notify_success("Deployment succeed", &doc).await;
            Response::success("\n>> Deployment succeed\n")
        }
        Err(e) => {
            notifiers
                .notify_failure(&format!("Deployment failed\n{e}"), &doc)
                .await;
            Response::fail(e.to_string())
        }
    }
}

async fn publish_local(
    config: &Config,
    master_hostname: &str,
    clean_yaml: &str,
    doc_name: &str,
) -> crate::errors::Result<()> {
    let target = normalize_peer(master_hostname, &config.default_port);

    // Probe reachability first so a down master reports `BadMasterAddr`
    // rather than the less specific `DeployFailed`.
    let transport = LocalMasterTransport::new(vec![target.clone()]);
    if transport.fetch_spec(doc_name).await.is_err() {
        return Err(Error::BadMasterAddr(target));
    }

    transport.publish(doc_name, clean_yaml).await
}

#[cfg(feature = "gcp")]
async fn publish_gcp(doc: &crate::document::Document, clean_yaml: &str, doc_name: &str) -> crate::errors::Result<()> {
    let transport =
        crate::transport::GcsBlobTransport::new(doc.master.project_id.clone(), doc.master.credentials_file.as_deref())
            .await?;
    transport.publish(doc_name, clean_yaml).await
}

#[cfg(not(feature = "gcp"))]
async fn publish_gcp(
    _doc: &crate::document::Document,
    _clean_yaml: &str,
    _doc_name: &str,
) -> crate::errors::Result<()> {
    Err(Error::RequestFailed(
        "this build was compiled without the `gcp` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn deploy_fails_fast_on_forbidden_time_field() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("swapper.yml");
        let mut f = std::fs::File::create(&file).unwrap();
        writeln!(f, "version: \"1\"\ntime: 123").unwrap();

        let config = Config::default();
        let response = deploy(&config, &file, &[], "localhost:1").await;
        assert!(!response.is_success());
        assert!(response.message.contains("time"));
    }

    #[tokio::test]
    async fn deploy_fails_on_missing_file() {
        let config = Config::default();
        let response = deploy(&config, Path::new("/nonexistent/swapper.yml"), &[], "localhost:1").await;
        assert!(!response.is_success());
    }
}
