//! Pluggable success/failure reporting.
//!
//! Notification is best-effort: a webhook failure is logged and swallowed,
//! never propagated, since nothing downstream can act on it anyway.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::document::Document;

/// Reports the outcome of an operation to some external channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Report a success.
    async fn notify_success(&self, message: &str, doc: &Document);
    /// Report a failure.
    async fn notify_failure(&self, message: &str, doc: &Document);
}

/// Always-on notifier that logs through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify_success(&self, message: &str, doc: &Document) {
        info!(hash = %doc.hash, "{message}");
    }

    async fn notify_failure(&self, message: &str, doc: &Document) {
        error!(hash = %doc.hash, "{message}");
    }
}

#[derive(Serialize)]
struct SlackPayload<'a> {
    channel: &'a str,
    text: String,
}

/// Notifier that additionally posts to a Slack incoming webhook.
///
/// Constructed only when a document declares both `slack.webhook-url` and
/// `slack.channel`; see [`Notifier`] for the fallback when it is absent.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    webhook_url: String,
    channel: String,
    client: reqwest::Client,
}

impl SlackNotifier {
    /// Build a notifier from the document's `slack` block, if both fields
    /// are present.
    pub fn from_document(doc: &Document) -> Option<Self> {
        let slack = doc.slack.as_ref()?;
        Some(Self {
            webhook_url: slack.webhook_url.clone(),
            channel: slack.channel.clone(),
            client: reqwest::Client::new(),
        })
    }

    async fn post(&self, text: String) {
        let payload = SlackPayload {
            channel: &self.channel,
            text,
        };
        if let Err(e) = self.client.post(&self.webhook_url).json(&payload).send().await {
            warn!(error = %e, "slack notification failed");
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify_success(&self, message: &str, _doc: &Document) {
        self.post(format!(":white_check_mark: {message}")).await;
    }

    async fn notify_failure(&self, message: &str, _doc: &Document) {
        self.post(format!(":x: {message}")).await;
    }
}

/// Dispatches to the console notifier and, when configured, a Slack one.
pub struct NotifierSet {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierSet {
    /// Build the notifier set for a given document: console always,
    /// Slack only if `doc.slack` is fully configured.
    pub fn for_document(doc: &Document) -> Self {
        let mut notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(ConsoleNotifier)];
        if let Some(slack) = SlackNotifier::from_document(doc) {
            notifiers.push(Box::new(slack));
        }
        Self { notifiers }
    }

    /// Report a success to every configured notifier.
    pub async fn notify_success(&self, message: &str, doc: &Document) {
        for n in &self.notifiers {
            n.notify_success(message, doc).await;
        }
    }

    /// Report a failure to every configured notifier.
    pub async fn notify_failure(&self, message: &str, doc: &Document) {
        for n in &self.notifiers {
            n.notify_failure(message, doc).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slack_notifier_requires_both_fields() {
        let doc = Document::default();
        assert!(SlackNotifier::from_document(&doc).is_none());
    }

    #[tokio::test]
    async fn notifier_set_always_has_console() {
        let doc = Document::default();
        let set = NotifierSet::for_document(&doc);
        assert_eq!(set.notifiers.len(), 1);
        set.notify_success("ok", &doc).await;
    }
}
