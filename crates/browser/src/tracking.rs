//! Conversion tracker and tag-manager event queue.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a tracker call does.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackerAction {
    /// Initialize the pixel; the event argument is the pixel id.
    #[serde(rename = "init")]
    Init,
    /// Standard event (`PageView`, `ViewContent`, `AddToCart`, ...).
    #[serde(rename = "track")]
    Track,
    /// Site-defined event name.
    #[serde(rename = "trackCustom")]
    TrackCustom,
}

impl TrackerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Track => "track",
            Self::TrackCustom => "trackCustom",
        }
    }
}

/// Conversion/ads tracker loaded on the page.
pub trait Tracker: Send + Sync {
    /// `properties` is an optional JSON object of event parameters.
    fn track(&self, action: TrackerAction, event: &str, properties: Option<&Map<String, Value>>);
}

/// Tag-manager style queue; the page's tags drain it on their own schedule.
pub trait EventQueue: Send + Sync {
    /// Append one entry. Entries are JSON objects, conventionally with an
    /// `event` key naming them.
    fn push(&self, entry: Map<String, Value>);
}

/// One recorded tracker call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerCall {
    pub action: TrackerAction,
    pub event: String,
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Default)]
pub struct RecordingTracker {
    calls: Mutex<Vec<TrackerCall>>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<TrackerCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Tracker for RecordingTracker {
    fn track(&self, action: TrackerAction, event: &str, properties: Option<&Map<String, Value>>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(TrackerCall {
                action,
                event: event.to_string(),
                properties: properties.cloned(),
            });
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingEventQueue {
    entries: Mutex<Vec<Map<String, Value>>>,
}

impl RecordingEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Map<String, Value>> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl EventQueue for RecordingEventQueue {
    fn push(&self, entry: Map<String, Value>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}
