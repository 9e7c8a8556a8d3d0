//! Parsing of the CNB daily exchange-rate feed

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, trace};

/// Date formats the CNB publishes the feed date in (English, Czech, ISO).
const DATE_FORMATS: [&str; 3] = ["%d %b %Y", "%d.%m.%Y", "%Y-%m-%d"];

const FIELD_SEPARATOR: char = '|';
const SEQUENCE_MARKER: &str = " #";

/// One currency's quote: `rate` CZK buys `amount` units of `code`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRow {
    pub country: String,
    pub currency: String,
    pub amount: f64,
    pub code: String,
    pub rate: f64,
}

/// A parsed feed: publication date, column headers and quote rows in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeSheet {
    pub date: Option<NaiveDate>,
    pub headers: Vec<String>,
    pub currencies: Vec<ExchangeRow>,
}

impl ExchangeSheet {
    /// Index of the first row quoting `code`, ignoring ASCII case.
    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.currencies
            .iter()
            .position(|row| row.code.eq_ignore_ascii_case(code))
    }

    pub fn codes(&self) -> Vec<&str> {
        self.currencies.iter().map(|row| row.code.as_str()).collect()
    }
}

/// Parses raw feed text into a sheet.
///
/// Returns `None` when the text has fewer than three lines. A bad date line
/// yields `date: None`, and data lines without exactly five fields are
/// skipped; neither aborts the parse.
pub fn parse(raw: &str) -> Option<ExchangeSheet> {
    let lines: Vec<&str> = raw.split('\n').map(strip_carriage_return).collect();
    if lines.len() < 3 {
        debug!(lines = lines.len(), "Feed too short, ignoring");
        return None;
    }

    let date = parse_date(lines[0]);
    let headers = lines[1]
        .split(FIELD_SEPARATOR)
        .map(str::to_string)
        .collect();

    let currencies: Vec<ExchangeRow> = lines[2..]
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let row = parse_row(line);
            if row.is_none() {
                trace!(line = i + 3, content = %line, "Skipping malformed row");
            }
            row
        })
        .collect();

    debug!(?date, rows = currencies.len(), "Parsed exchange sheet");
    Some(ExchangeSheet {
        date,
        headers,
        currencies,
    })
}

/// Parses numeric feed or user text. Non-numeric or non-finite text is `NaN`.
///
/// Surrounding whitespace is ignored and a decimal comma is accepted.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(f64::NAN)
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_date(line: &str) -> Option<NaiveDate> {
    let text = line.split(SEQUENCE_MARKER).next().unwrap_or_default().trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

fn parse_row(line: &str) -> Option<ExchangeRow> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [country, currency, amount, code, rate] = fields[..] else {
        return None;
    };

    Some(ExchangeRow {
        country: country.to_string(),
        currency: currency.to_string(),
        amount: parse_number(amount),
        code: code.to_string(),
        rate: parse_number(rate),
    })
}
