//! The set of capabilities a given page actually has.

use std::sync::Arc;

use serde_json::{Map, Value, json};

use storefront_core::{Availability, ProductId};

use crate::analytics::{Analytics, AnalyticsCommand};
use crate::payment::PaymentSdk;
use crate::tracking::{EventQueue, Tracker, TrackerAction};

/// Event name used for availability reports on every channel.
pub const AVAILABILITY_EVENT: &str = "inventory_availability";

/// Custom tracker event name for availability reports.
pub const AVAILABILITY_TRACKER_EVENT: &str = "InventoryAvailability";

/// Optional page capabilities. Anything not provided is simply absent.
#[derive(Clone, Default)]
pub struct BrowserEnvironment {
    analytics: Option<Arc<dyn Analytics>>,
    tracker: Option<Arc<dyn Tracker>>,
    event_queue: Option<Arc<dyn EventQueue>>,
    payment_sdk: Option<PaymentSdk>,
    payment_public_key: Option<String>,
}

impl BrowserEnvironment {
    /// An environment with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analytics(mut self, analytics: Arc<dyn Analytics>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn with_tracker(mut self, tracker: Arc<dyn Tracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn with_event_queue(mut self, queue: Arc<dyn EventQueue>) -> Self {
        self.event_queue = Some(queue);
        self
    }

    pub fn with_payment_sdk(mut self, sdk: PaymentSdk) -> Self {
        self.payment_sdk = Some(sdk);
        self
    }

    pub fn with_payment_public_key(mut self, key: impl Into<String>) -> Self {
        self.payment_public_key = Some(key.into());
        self
    }

    pub fn analytics(&self) -> Option<&dyn Analytics> {
        self.analytics.as_deref()
    }

    pub fn tracker(&self) -> Option<&dyn Tracker> {
        self.tracker.as_deref()
    }

    pub fn event_queue(&self) -> Option<&dyn EventQueue> {
        self.event_queue.as_deref()
    }

    pub fn payment_sdk(&self) -> Option<&PaymentSdk> {
        self.payment_sdk.as_ref()
    }

    /// Publishable payment key: the SDK's key, else the standalone key.
    /// Blank standalone keys count as missing.
    pub fn payment_key(&self) -> Option<&str> {
        self.payment_sdk
            .as_ref()
            .map(|sdk| sdk.public_key.as_str())
            .or_else(|| {
                self.payment_public_key
                    .as_deref()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    /// Announce a product's availability to every channel the page has.
    ///
    /// Pushes one queue entry, fires one analytics `event` and one custom
    /// tracker event; each only when that capability is present.
    pub fn report_availability(&self, product: &ProductId, availability: Availability) {
        if self.analytics.is_none() && self.tracker.is_none() && self.event_queue.is_none() {
            tracing::debug!(product = %product, "no analytics capabilities; availability not reported");
            return;
        }

        let units = match availability {
            Availability::InStock(n) => json!(n),
            Availability::OutOfStock => json!(0),
            Availability::Unknown => Value::Null,
        };

        let mut params = Map::new();
        params.insert("product".to_string(), json!(product.as_str()));
        params.insert("availability".to_string(), json!(availability.as_str()));
        params.insert("units".to_string(), units);

        if let Some(queue) = &self.event_queue {
            let mut entry = Map::new();
            entry.insert("event".to_string(), json!(AVAILABILITY_EVENT));
            entry.extend(params.clone());
            queue.push(entry);
        }

        if let Some(analytics) = &self.analytics {
            analytics.gtag(AnalyticsCommand::Event, AVAILABILITY_EVENT, Some(&params));
        }

        if let Some(tracker) = &self.tracker {
            tracker.track(TrackerAction::TrackCustom, AVAILABILITY_TRACKER_EVENT, Some(&params));
        }
    }
}

impl core::fmt::Debug for BrowserEnvironment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BrowserEnvironment")
            .field("analytics", &self.analytics.is_some())
            .field("tracker", &self.tracker.is_some())
            .field("event_queue", &self.event_queue.is_some())
            .field("payment_sdk", &self.payment_sdk)
            .field("payment_public_key", &self.payment_public_key.is_some())
            .finish()
    }
}
