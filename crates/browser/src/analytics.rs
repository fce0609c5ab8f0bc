//! Site analytics tag (`gtag`-style command API).

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Command accepted by the analytics tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsCommand {
    /// Configure a measurement target (`target` is the measurement id).
    Config,
    /// Record an event (`target` is the event name).
    Event,
    /// Set values persisted on every later event (`target` names the scope).
    Set,
    /// Update consent state (`target` is `default` or `update`).
    Consent,
    /// Read a value back from the tag (`target` is the measurement id).
    Get,
    /// Initialize the tag (`target` is an ISO timestamp).
    Js,
}

impl AnalyticsCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Event => "event",
            Self::Set => "set",
            Self::Consent => "consent",
            Self::Get => "get",
            Self::Js => "js",
        }
    }
}

impl core::fmt::Display for AnalyticsCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The analytics tag loaded on the page.
pub trait Analytics: Send + Sync {
    /// Issue one command. `config` is an optional flat JSON object of
    /// parameters (e.g. `{"send_page_view": false}` or event params).
    fn gtag(&self, command: AnalyticsCommand, target: &str, config: Option<&Map<String, Value>>);
}

/// One recorded `gtag` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsCall {
    pub command: AnalyticsCommand,
    pub target: String,
    pub config: Option<Map<String, Value>>,
}

/// Keeps every call in memory.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    calls: Mutex<Vec<AnalyticsCall>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AnalyticsCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Analytics for RecordingAnalytics {
    fn gtag(&self, command: AnalyticsCommand, target: &str, config: Option<&Map<String, Value>>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(AnalyticsCall {
                command,
                target: target.to_string(),
                config: config.cloned(),
            });
        }
    }
}
