//! `storefront-browser`: optional third-party capabilities of the page.
//!
//! A storefront page may or may not have an analytics tag, an ad/conversion
//! tracker, a tag-manager event queue and a payment SDK loaded. Each one is
//! modelled as a named, typed capability instead of an untyped global, and
//! every capability is optional: helpers silently skip what is missing.

pub mod analytics;
pub mod environment;
pub mod payment;
pub mod tracking;

pub use analytics::{Analytics, AnalyticsCommand, RecordingAnalytics};
pub use environment::BrowserEnvironment;
pub use payment::{PaymentConfigError, PaymentSdk};
pub use tracking::{EventQueue, RecordingEventQueue, RecordingTracker, Tracker, TrackerAction};
