//! Exchange-rate table and lookups
//!
//! Every rate is quoted against a single anchor currency: the rate of a
//! currency is how many anchor units one unit of it is worth. The built-in
//! table anchors on DKK.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::ExchangeRateConfig;
use crate::currency::Currency;
use crate::error::{FxError, Result};

/// Read access to an anchor-quoted rate table.
pub trait RateProvider {
    /// Rate for `currency`, in anchor units per unit of that currency.
    fn get_rate(&self, currency: &Currency) -> Result<Decimal>;

    /// Every known currency, in table order.
    fn supported_currencies(&self) -> Vec<Currency>;

    /// Case-insensitive lookup by code. `None` for unknown, empty or
    /// malformed codes; never an error.
    fn find_currency(&self, code: &str) -> Option<Currency>;
}

/// Fixed rate table built once at startup.
///
/// Entries keep their insertion order. A duplicate code in configuration
/// overwrites the stored rate but keeps the first entry's position and
/// display name.
///
/// # Example
/// ```
/// use fx_exchange::rates::{RateProvider, StaticRateProvider};
/// use rust_decimal_macros::dec;
///
/// let rates = StaticRateProvider::builtin();
/// let eur = rates.find_currency("eur").unwrap();
/// assert_eq!(rates.get_rate(&eur).unwrap(), dec!(7.4394));
/// ```
#[derive(Debug, Clone)]
pub struct StaticRateProvider {
    rates: Vec<(Currency, Decimal)>,
}

impl StaticRateProvider {
    /// The built-in DKK-anchored table.
    pub fn builtin() -> Self {
        let entry = |code, name, rate| (Currency::from_static(code, name), rate);

        Self {
            rates: vec![
                entry("DKK", "Danish kroner", dec!(1.0)),
                entry("EUR", "Euro", dec!(7.4394)),
                entry("USD", "Amerikanske dollar", dec!(6.6311)),
                entry("GBP", "Britiske pund", dec!(8.5285)),
                entry("SEK", "Svenske kroner", dec!(0.7610)),
                entry("NOK", "Norske kroner", dec!(0.7840)),
                entry("CHF", "Schweiziske franc", dec!(6.8358)),
                entry("JPY", "Japanske yen", dec!(0.059740)),
            ],
        }
    }

    /// Build the table the configuration asks for: the configured entries
    /// when `load_from_config` is set, the built-in table otherwise.
    pub fn from_config(config: &ExchangeRateConfig) -> Result<Self> {
        if !config.load_from_config {
            debug!("using built-in rate table");
            return Ok(Self::builtin());
        }

        let mut rates: Vec<(Currency, Decimal)> = Vec::with_capacity(config.currencies.len());
        for entry in &config.currencies {
            let currency = Currency::new(&entry.code, &entry.name).map_err(|e| {
                FxError::Config(format!("invalid currency '{}': {}", entry.code, e))
            })?;

            if entry.rate <= Decimal::ZERO {
                return Err(FxError::Config(format!(
                    "exchange rate for '{}' must be positive, got: {}",
                    currency.code(),
                    entry.rate
                )));
            }

            // Last rate wins; first position and name stay.
            match rates.iter().position(|(known, _)| known == &currency) {
                Some(index) => rates[index].1 = entry.rate,
                None => rates.push((currency, entry.rate)),
            }
        }

        debug!("loaded {} currencies from configuration", rates.len());
        Ok(Self { rates })
    }
}

impl Default for StaticRateProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RateProvider for StaticRateProvider {
    fn get_rate(&self, currency: &Currency) -> Result<Decimal> {
        self.rates
            .iter()
            .find(|(known, _)| known == currency)
            .map(|(_, rate)| *rate)
            .ok_or_else(|| {
                FxError::Validation(format!("Currency '{}' is not supported.", currency))
            })
    }

    fn supported_currencies(&self) -> Vec<Currency> {
        self.rates.iter().map(|(currency, _)| currency.clone()).collect()
    }

    fn find_currency(&self, code: &str) -> Option<Currency> {
        if code.is_empty() {
            return None;
        }
        self.rates
            .iter()
            .map(|(currency, _)| currency)
            .find(|currency| currency.matches_code(code))
            .cloned()
    }
}
