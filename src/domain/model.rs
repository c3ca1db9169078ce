use serde::{Deserialize, Serialize};

/// Current base/step pricing configuration, as served by the settings store.
///
/// Wire field names (`slotBaseBonus`/`slotStepBonus`) are the settings
/// store's; locally the values are just `base` and `step`. No range
/// invariant is enforced here — negative formula results are clamped
/// at quote time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(rename = "slotBaseBonus")]
    pub base: f64,
    #[serde(rename = "slotStepBonus")]
    pub step: f64,
}

/// Price quote for the next slot a subject would acquire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuote {
    pub next_slot_number: u64,
    pub price: u64,
    pub base: f64,
    pub step: f64,
}
