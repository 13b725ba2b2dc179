//! Interactive prompts and result rendering
//!
//! Collects a currency pair and an amount from a console, validating
//! against a rate provider, and prints conversion results. All user-facing
//! messages live here.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::console::Console;
use crate::currency::Currency;
use crate::error::{FxError, Result};
use crate::rates::RateProvider;

/// Prompt shown before reading a currency pair.
pub const PAIR_PROMPT: &str = "Enter currency pair, e.g. EUR/DKK: ";
/// Prompt shown before reading an amount.
pub const AMOUNT_PROMPT: &str = "Enter amount to convert: ";

/// The interactive boundary of one conversion request.
pub trait UserInterface {
    /// Read and resolve a `BASE/QUOTE` currency pair.
    fn read_iso_currency_pair(&mut self) -> Result<(Currency, Currency)>;

    /// Read a strictly positive decimal amount.
    fn read_amount(&mut self) -> Result<Decimal>;

    /// Show one conversion result.
    fn display_result(
        &mut self,
        amount: Decimal,
        base: &Currency,
        converted: Decimal,
        quote: &Currency,
    ) -> Result<()>;
}

/// Console-backed `UserInterface` that validates input against a rate
/// provider.
pub struct ConsoleUi<'r, C> {
    rates: &'r dyn RateProvider,
    console: C,
}

impl<'r, C: Console> ConsoleUi<'r, C> {
    pub fn new(rates: &'r dyn RateProvider, console: C) -> Self {
        Self { rates, console }
    }

    /// Hand the console back, for transcript inspection in tests.
    pub fn into_console(self) -> C {
        self.console
    }

    fn supported_listing(&self) -> String {
        self.rates
            .supported_currencies()
            .iter()
            .map(|currency| currency.to_string())
            .collect::<Vec<_>>()
            .join(", \n")
    }
}

impl<'r, C: Console> UserInterface for ConsoleUi<'r, C> {
    fn read_iso_currency_pair(&mut self) -> Result<(Currency, Currency)> {
        self.console.write(PAIR_PROMPT)?;

        let input = match self.console.read_line()? {
            Some(line) if !line.is_empty() => line.to_uppercase(),
            _ => {
                return Err(FxError::Validation(
                    "Currency pair cannot be empty.".to_string(),
                ))
            }
        };

        let parts: Vec<&str> = input.split('/').map(str::trim).collect();
        if parts.len() != 2 || parts.iter().any(|part| part.is_empty()) {
            return Err(FxError::Validation(
                "Currency pair must be in the format 'CURRENCY1/CURRENCY2'.".to_string(),
            ));
        }

        match (
            self.rates.find_currency(parts[0]),
            self.rates.find_currency(parts[1]),
        ) {
            (Some(base), Some(quote)) => Ok((base, quote)),
            _ => Err(FxError::Validation(format!(
                "Exchange rates not available for currency pair: {}.\nSupported currencies are:\n{}.",
                input,
                self.supported_listing()
            ))),
        }
    }

    fn read_amount(&mut self) -> Result<Decimal> {
        self.console.write(AMOUNT_PROMPT)?;
        let input = self.console.read_line()?.unwrap_or_default();

        parse_positive_amount(&input)
            .ok_or_else(|| FxError::Validation("Amount must be a positive number.".to_string()))
    }

    fn display_result(
        &mut self,
        amount: Decimal,
        base: &Currency,
        converted: Decimal,
        quote: &Currency,
    ) -> Result<()> {
        self.console.write_line(&format!(
            "{} {} = {} {}",
            amount,
            base,
            format_converted(converted),
            quote
        ))
    }
}

/// Parse a user-supplied amount, accepting `.` or `,` as the decimal
/// separator. `None` for anything empty, unparsable or not strictly
/// positive.
fn parse_positive_amount(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    let amount: Decimal = normalized.parse().ok()?;
    (amount > Decimal::ZERO).then_some(amount)
}

/// Render with exactly two fraction digits, midpoints away from zero.
fn format_converted(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
