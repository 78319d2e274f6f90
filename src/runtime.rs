//! Container runtime verbs: pull, run, inspect, list, remove, exec, stop,
//! prune — reached by shelling out to the runtime's CLI binary.

use regex::Regex;
use tracing::{debug, info};

use crate::document::Container;
use crate::errors::{Error, Result};
use crate::executor::{find_runtime_binary, ExecutionConfig, ProcessExecutor};

/// Prefix every container this controller starts carries.
pub const CONTAINER_PREFIX: &str = "swapper-container.";
/// Name of the load-balancer sidecar container.
pub const PROXY_NAME: &str = "swapper-proxy";

/// Thin async client over a container runtime binary (`docker`, by default).
#[derive(Debug, Clone)]
pub struct RuntimeClient {
    executor: ProcessExecutor,
}

impl RuntimeClient {
    /// Build a client using the given binary name (looked up on `PATH`).
    pub fn new(binary: &str) -> Result<Self> {
        let path = find_runtime_binary(binary)?;
        Ok(Self {
            executor: ProcessExecutor::new(path),
        })
    }

    async fn run(&self, args: Vec<String>) -> Result<String> {
        let output = self.executor.execute(&args, None).await?;
        Ok(output.stdout.trim().to_string())
    }

    /// Deterministic container name for a given document hash / service /
    /// container index.
    pub fn container_name(doc_hash: &str, service: &str, index: usize) -> String {
        format!("{CONTAINER_PREFIX}{doc_hash}.{service}.{index}")
    }

    /// True if an image `image:tag` is already present locally.
    pub async fn image_present(&self, image: &str, tag: &str) -> Result<bool> {
        let id = self
            .run(vec![
                "images".into(),
                format!("{image}:{tag}"),
                "--format".into(),
                "{{.ID}}".into(),
            ])
            .await?;
        Ok(!id.is_empty())
    }

    /// Pull `image:tag`.
    pub async fn pull(&self, image: &str, tag: &str) -> Result<()> {
        info!(image, tag, "pulling image");
        self.run(vec!["pull".into(), format!("{image}:{tag}")])
            .await?;
        Ok(())
    }

    /// True if a container named `name` is currently running.
    pub async fn is_running(&self, name: &str) -> Result<bool> {
        let id = self
            .run(vec![
                "ps".into(),
                "--format".into(),
                "{{.ID}}".into(),
                "--filter".into(),
                format!("name={name}"),
            ])
            .await?;
        Ok(!id.is_empty())
    }

    /// Start a container for `container`, named `name`.
    ///
    /// Environment, logging-option, and extra-host values are expanded for
    /// `$(command)` substitutions before being passed to the runtime.
    pub async fn start_container(&self, name: &str, container: &Container) -> Result<()> {
        let mut args: Vec<String> = vec![
            "run".into(),
            "--rm".into(),
            "--name".into(),
            name.into(),
            "--hostname".into(),
            name.into(),
        ];

        if !container.logging_driver.is_empty() {
            args.push("--log-driver".into());
            args.push(container.logging_driver.clone());
        }
        for (key, value) in &container.logging_options {
            args.push("--log-opt".into());
            let expanded = expand_command(value).await?;
            args.push(format!("{key}={expanded}"));
        }

        if !container.health_cmd.is_empty() {
            args.push("--health-cmd".into());
            args.push(container.health_cmd.clone());
        }
        if !container.health_interval.is_empty() {
            args.push("--health-interval".into());
            args.push(container.health_interval.clone());
        }
        if container.health_retries != 0 {
            args.push("--health-retries".into());
            args.push(container.health_retries.to_string());
        }
        if !container.health_timeout.is_empty() {
            args.push("--health-timeout".into());
            args.push(container.health_timeout.clone());
        }

        for host in &container.extra_hosts {
            args.push("--add-host".into());
            args.push(expand_command(host).await?);
        }

        for (key, value) in &container.environment {
            args.push("-e".into());
            let expanded = expand_command(value).await?;
            args.push(format!("{key}={expanded}"));
        }

        args.push("-d".into());
        args.push(format!("{}:{}", container.image, container.tag));

        info!(name, "starting container");
        let output = self.executor.execute(&args, None).await?;
        if !output.success {
            return Err(Error::ContainerFailed(name.to_string()));
        }
        Ok(())
    }

    /// Resolve a running container's bridge-network IP address.
    pub async fn container_ip(&self, name: &str) -> Result<String> {
        let running = self
            .run(vec![
                "ps".into(),
                "--format".into(),
                "{{.ID}}".into(),
                "--filter".into(),
                format!("name={name}"),
            ])
            .await?;
        if running.is_empty() {
            return Err(Error::ContainerFailed(name.to_string()));
        }

        let out = self
            .run(vec![
                "inspect".into(),
                "-f".into(),
                "{{.NetworkSettings.IPAddress}}".into(),
                name.into(),
            ])
            .await
            .map_err(|_| Error::ContainerIpFailed(name.to_string()))?;
        if out.is_empty() {
            return Err(Error::ContainerIpFailed(name.to_string()));
        }
        Ok(out)
    }

    /// List `(id, name)` pairs for every running `swapper-container.*`.
    pub async fn list_controller_containers(&self) -> Result<Vec<(String, String)>> {
        let out = self
            .run(vec![
                "container".into(),
                "ls".into(),
                "--format".into(),
                "{{.ID}} {{.Names}}".into(),
                "--filter".into(),
                format!("name={CONTAINER_PREFIX}"),
            ])
            .await?;
        if out.is_empty() {
            return Ok(Vec::new());
        }
        Ok(out
            .lines()
            .filter_map(|line| line.split_once(' '))
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect())
    }

    /// Force-remove the given container IDs (with volumes).
    pub async fn remove_containers(&self, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let mut args = vec!["rm".to_string(), "-f".to_string(), "-v".to_string()];
        args.extend(ids.iter().cloned());
        self.run(args).await?;
        Ok(())
    }

    /// Remove unused images to reclaim space.
    pub async fn prune_images(&self) -> Result<()> {
        self.run(vec![
            "system".into(),
            "prune".into(),
            "--all".into(),
            "--force".into(),
        ])
        .await?;
        Ok(())
    }

    /// True if the proxy sidecar container is currently running.
    pub async fn proxy_running(&self) -> Result<bool> {
        self.is_running(PROXY_NAME).await
    }

    /// Start the proxy sidecar, publishing every `listen` port.
    pub async fn start_proxy(&self, image: &str, listen_ports: &[u16]) -> Result<()> {
        let mut args: Vec<String> = vec![
            "run".into(),
            "--rm".into(),
            "--name".into(),
            PROXY_NAME.into(),
            "--hostname".into(),
            PROXY_NAME.into(),
        ];
        for port in listen_ports {
            args.push("-p".into());
            args.push(format!("{port}:{port}"));
        }
        args.push("-d".into());
        args.push(image.into());

        let output = self.executor.execute(&args, None).await?;
        if !output.success {
            return Err(Error::ProxyFailed);
        }
        Ok(())
    }

    /// The set of host ports currently published by the proxy sidecar.
    pub async fn proxy_exposed_ports(&self) -> Result<String> {
        self.run(vec![
            "inspect".into(),
            "--format".into(),
            "{{ .Config.ExposedPorts }}".into(),
            PROXY_NAME.into(),
        ])
        .await
    }

    /// Force-remove the proxy sidecar, e.g. before recreating it with a new
    /// port set.
    pub async fn stop_proxy(&self) -> Result<()> {
        let output = self
            .executor
            .execute(&["rm".into(), "-f".into(), PROXY_NAME.into()], None)
            .await?;
        if !output.success {
            return Err(Error::ProxyStopFailed);
        }
        Ok(())
    }

    /// Stop the proxy sidecar (used by `node stop`).
    pub async fn stop_proxy_gracefully(&self) -> Result<()> {
        let _ = self.run(vec!["stop".into(), PROXY_NAME.into()]).await?;
        Ok(())
    }

    /// Write `config` into the proxy sidecar's filesystem via `exec`.
    pub async fn write_proxy_config(&self, config: &str) -> Result<()> {
        let script = format!("echo '{config}' > /app/src/haproxy.tmp.cfg");
        let output = self
            .executor
            .execute(
                &[
                    "exec".into(),
                    PROXY_NAME.into(),
                    "bash".into(),
                    "-c".into(),
                    script,
                ],
                None,
            )
            .await?;
        if !output.success {
            return Err(Error::ProxyFailed);
        }
        Ok(())
    }

    /// Stop every running `swapper-container.*`. Returns `Err` if none
    /// were found.
    pub async fn stop_controller_containers(&self) -> Result<()> {
        let out = self
            .run(vec![
                "container".into(),
                "ls".into(),
                "--format".into(),
                "{{.ID}}".into(),
                "--filter".into(),
                format!("name={CONTAINER_PREFIX}"),
            ])
            .await?;
        if out.is_empty() {
            return Err(Error::ContainersNotRunning);
        }
        let ids: Vec<String> = out.lines().map(str::to_string).collect();
        let mut args = vec!["stop".to_string()];
        args.extend(ids);
        self.run(args).await?;
        Ok(())
    }
}

/// Expand every `$(command)` substring in `input` by running it through a
/// shell and substituting its trimmed stdout.
pub async fn expand_command(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\(.+\)").expect("static regex is valid");
    let Some(m) = re.find(input) else {
        return Ok(input.to_string());
    };
    let matched = m.as_str();
    let command = &matched[2..matched.len() - 1];

    let shell = ProcessExecutor::new("bash".into());
    let config = ExecutionConfig {
        timeout: Some(std::time::Duration::from_secs(30)),
        ..ExecutionConfig::default()
    };
    let output = shell
        .execute(&["-c".to_string(), command.to_string()], Some(config))
        .await
        .map_err(|_| Error::CommandFailed(command.to_string()))?;
    if !output.success {
        return Err(Error::CommandFailed(command.to_string()));
    }

    debug!(command, "expanded shell substitution");
    Ok(input.replace(matched, output.stdout.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_name_is_deterministic() {
        assert_eq!(
            RuntimeClient::container_name("abc123", "hello", 0),
            "swapper-container.abc123.hello.0"
        );
    }

    #[tokio::test]
    async fn expand_command_passes_through_plain_values() {
        let out = expand_command("plain-value").await.unwrap();
        assert_eq!(out, "plain-value");
    }

    #[tokio::test]
    async fn expand_command_substitutes_shell_output() {
        let out = expand_command("prefix-$(echo mid)-suffix").await.unwrap();
        assert_eq!(out, "prefix-mid-suffix");
    }
}
