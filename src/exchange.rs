//! Conversion orchestration
//!
//! One conversion routes through the anchor currency: the amount is divided
//! by the base rate (into anchor units) and multiplied by the quote rate.
//! Results are handed to the user interface unrounded; rendering decides
//! the display precision.

use log::debug;
use rust_decimal::Decimal;

use crate::currency::Currency;
use crate::error::{FxError, Result};
use crate::rates::RateProvider;
use crate::ui::UserInterface;

/// Drives one conversion request end to end.
pub struct ExchangeService<'r, U> {
    rates: &'r dyn RateProvider,
    ui: U,
}

impl<'r, U: UserInterface> ExchangeService<'r, U> {
    pub fn new(rates: &'r dyn RateProvider, ui: U) -> Self {
        Self { rates, ui }
    }

    /// Collect a pair and an amount, convert, display. Errors from the rate
    /// source or the user interface propagate unmodified.
    pub fn process_currency_exchange(&mut self) -> Result<()> {
        let (base, quote) = self.ui.read_iso_currency_pair()?;
        let amount = self.ui.read_amount()?;
        let converted = self.convert(&base, &quote, amount)?;

        debug!(
            "converted {} {} to {} {}",
            amount,
            base.code(),
            converted,
            quote.code()
        );
        self.ui.display_result(amount, &base, converted, &quote)
    }

    /// Hand the user interface back, for inspection in tests.
    pub fn into_ui(self) -> U {
        self.ui
    }

    fn convert(&self, base: &Currency, quote: &Currency, amount: Decimal) -> Result<Decimal> {
        let base_rate = self.rates.get_rate(base)?;
        let quote_rate = self.rates.get_rate(quote)?;

        // Rates are validated positive, so only overflow can fail here.
        let amount_in_anchor = amount
            .checked_div(base_rate)
            .ok_or_else(|| out_of_range(amount))?;
        amount_in_anchor
            .checked_mul(quote_rate)
            .ok_or_else(|| out_of_range(amount))
    }
}

fn out_of_range(amount: Decimal) -> FxError {
    FxError::Validation(format!("Amount {} is too large to convert.", amount))
}
