pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{HttpSettings, SettingsSource, StaticSettings, TomlSettings};
pub use crate::core::{pricer::slot_price, quoter::SlotQuoter};
pub use crate::domain::model::{PricingSettings, SlotQuote};
pub use crate::domain::ports::SettingsProvider;
pub use crate::utils::error::{Result, SlotError};
