//! Privacy & terms acceptance, remembered in `localStorage`.

use gloo::storage::{LocalStorage, Storage};

pub const CONSENT_KEY: &str = "arcade.consent";

/// Whether the visitor accepted the privacy policy and terms on this device.
#[must_use]
pub fn consent_given() -> bool {
    LocalStorage::get::<bool>(CONSENT_KEY).unwrap_or(false)
}

pub fn record_consent() {
    if let Err(err) = LocalStorage::set(CONSENT_KEY, true) {
        log::warn!("could not persist consent: {err}");
    }
}
