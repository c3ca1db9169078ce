pub mod pricer;
pub mod quoter;

pub use crate::domain::model::{PricingSettings, SlotQuote};
pub use crate::domain::ports::SettingsProvider;
pub use crate::utils::error::Result;
