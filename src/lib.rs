//! # fx-exchange
//!
//! An interactive console currency converter. Exchange rates are quoted
//! against a single anchor currency (DKK in the built-in table) and every
//! conversion routes through the anchor: the amount is divided by the base
//! rate, then multiplied by the quote rate.
//!
//! The rate table is either the built-in one or loaded from a configuration
//! file, and all console interaction sits behind traits so complete
//! sessions can be scripted in tests.
//!
//! ## Example
//!
//! ```rust
//! use fx_exchange::prelude::*;
//!
//! let rates = StaticRateProvider::builtin();
//! let console = ScriptedConsole::new(["EUR/USD", "100"]);
//! let mut service = ExchangeService::new(&rates, ConsoleUi::new(&rates, console));
//!
//! service.process_currency_exchange().unwrap();
//!
//! let transcript = service.into_ui().into_console().transcript();
//! assert!(transcript.ends_with("100 EUR (Euro) = 89.13 USD (Amerikanske dollar)\n"));
//! ```

pub mod config;
pub mod console;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod rates;
pub mod ui;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::config::{CurrencyRateEntry, ExchangeRateConfig};
    pub use crate::console::{Console, ScriptedConsole, StdConsole};
    pub use crate::currency::Currency;
    pub use crate::error::{FxError, Result};
    pub use crate::exchange::ExchangeService;
    pub use crate::rates::{RateProvider, StaticRateProvider};
    pub use crate::ui::{ConsoleUi, UserInterface};
}
