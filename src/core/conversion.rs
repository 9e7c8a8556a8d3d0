//! Home-currency to foreign-currency conversion using a parsed sheet

use super::currency::format_currency;
use super::sheet::{ExchangeSheet, parse_number};
use tracing::debug;

/// Currency the CNB quotes rates in and that entered amounts are taken to be in.
pub const HOME_CURRENCY: &str = "CZK";

/// Converts `home_amount` using the row at `row_index`.
///
/// `rate` home units buy `amount` foreign units, so the result is
/// `home_amount * amount / rate`. `None` for an out-of-range index or
/// non-numeric input. Non-numeric row data propagates as `NaN`.
pub fn convert_amount(sheet: &ExchangeSheet, row_index: usize, home_amount: &str) -> Option<f64> {
    let Some(row) = sheet.currencies.get(row_index) else {
        debug!(row_index, rows = sheet.currencies.len(), "Row index out of range");
        return None;
    };

    let home_amount = parse_number(home_amount);
    if !home_amount.is_finite() {
        debug!("Home amount is not a number");
        return None;
    }

    Some(home_amount * row.amount / row.rate)
}

/// Converts and formats the result in the selected row's currency.
///
/// Also `None` when the row's code cannot be used for formatting.
pub fn convert(sheet: &ExchangeSheet, row_index: usize, home_amount: &str) -> Option<String> {
    let value = convert_amount(sheet, row_index, home_amount)?;
    let code = &sheet.currencies[row_index].code;

    format_currency(value, code)
        .inspect_err(|e| debug!(error = %e, "Failed to format conversion result"))
        .ok()
}
