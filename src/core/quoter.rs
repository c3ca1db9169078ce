use crate::core::pricer::slot_price;
use crate::core::{SettingsProvider, SlotQuote};
use crate::utils::error::Result;
use crate::utils::validation::validate_finite_number;

/// Quotes the price of the next slot for a subject, reading the current
/// base/step configuration from the injected settings provider on every call.
///
/// Stateless and reentrant. Holds no cache and defines no retry or timeout
/// policy of its own: a failed settings read is the caller's problem.
pub struct SlotQuoter<P: SettingsProvider> {
    provider: P,
}

impl<P: SettingsProvider> SlotQuoter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Quote the next slot for a subject currently holding `slots_total`
    /// slots. `None` means a brand-new subject, which holds exactly one
    /// baseline slot.
    ///
    /// The slot count is floored and held at 1 minimum indirectly: the next
    /// ordinal is `max(2, floor(slots_total + 1))`, so bad upstream counts
    /// (fractional, negative) still quote slot 2 or later.
    pub async fn next_slot_quote(&self, slots_total: Option<f64>) -> Result<SlotQuote> {
        let slots_total = slots_total.unwrap_or(1.0);
        validate_finite_number("slots_total", slots_total)?;

        let next_slot_number = (slots_total + 1.0).floor().max(2.0);

        tracing::debug!("Reading slot pricing settings for slot {}", next_slot_number);
        let settings = self.provider.pricing_settings().await?;
        validate_finite_number("slotBaseBonus", settings.base)?;
        validate_finite_number("slotStepBonus", settings.step)?;

        let price = slot_price(next_slot_number, settings.base, settings.step);
        tracing::debug!(
            "Quoted slot {} at {} (base {}, step {})",
            next_slot_number,
            price,
            settings.base,
            settings.step
        );

        Ok(SlotQuote {
            next_slot_number: next_slot_number as u64,
            price,
            base: settings.base,
            step: settings.step,
        })
    }
}
