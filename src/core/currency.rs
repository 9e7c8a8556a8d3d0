//! Currency display formatting (en-US conventions)

use anyhow::{Result, bail};

const NO_BREAK_SPACE: char = '\u{a0}';
const DEFAULT_MINOR_DIGITS: usize = 2;

/// en-US display symbols. Codes not listed are displayed as the code itself.
const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
    ("XAF", "FCFA"),
    ("XCD", "EC$"),
    ("XPF", "CFPF"),
];

/// Currencies displayed with other than two fraction digits (CLDR currency data).
const MINOR_DIGITS: &[(&str, usize)] = &[
    ("AFN", 0),
    ("ALL", 0),
    ("BHD", 3),
    ("BIF", 0),
    ("CLF", 4),
    ("CLP", 0),
    ("DJF", 0),
    ("GNF", 0),
    ("IQD", 0),
    ("IRR", 0),
    ("ISK", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KMF", 0),
    ("KPW", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("LAK", 0),
    ("LBP", 0),
    ("LYD", 3),
    ("MGA", 0),
    ("MMK", 0),
    ("OMR", 3),
    ("PYG", 0),
    ("RSD", 0),
    ("RWF", 0),
    ("SLL", 0),
    ("SOS", 0),
    ("SYP", 0),
    ("TND", 3),
    ("UGX", 0),
    ("UYI", 0),
    ("UYW", 4),
    ("VND", 0),
    ("VUV", 0),
    ("XAF", 0),
    ("XOF", 0),
    ("XPF", 0),
    ("YER", 0),
];

/// Formats `value` as an amount of the currency identified by `code`.
///
/// Any three-letter alphabetic code is accepted; codes without a known symbol
/// are rendered as text before the number (`CHF 1.00`). Other codes are an error.
/// Alphabetic prefixes are separated from the number by a no-break space.
/// Ties round away from zero.
pub fn format_currency(value: f64, code: &str) -> Result<String> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("Invalid currency code: {code:?}");
    }
    let code = code.to_ascii_uppercase();

    let mut prefix = lookup(SYMBOLS, &code).unwrap_or(code.as_str()).to_string();
    if prefix.ends_with(|c: char| c.is_alphabetic()) {
        prefix.push(NO_BREAK_SPACE);
    }
    let digits = lookup(MINOR_DIGITS, &code).unwrap_or(DEFAULT_MINOR_DIGITS);

    let sign = if value.is_sign_negative() && !value.is_nan() && value != 0.0 {
        "-"
    } else {
        ""
    };
    let number = if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        "∞".to_string()
    } else {
        group_thousands(&round_half_away(value.abs(), digits))
    };

    Ok(format!("{sign}{prefix}{number}"))
}

fn lookup<T: Copy>(table: &[(&str, T)], code: &str) -> Option<T> {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, value)| *value)
}

/// Rounds the shortest decimal form of a non-negative finite `value` to
/// `digits` fraction digits, ties away from zero. Works on the digits rather
/// than the binary value so `1.005` rounds like it reads.
fn round_half_away(value: f64, digits: usize) -> String {
    let repr = value.to_string();
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    if fraction.len() <= digits {
        let padded = format!("{fraction:0<digits$}");
        return if digits == 0 {
            integer.to_string()
        } else {
            format!("{integer}.{padded}")
        };
    }

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    if fraction.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let integer = String::from_utf8_lossy(&kept[..split]);
    if digits == 0 {
        integer.into_owned()
    } else {
        format!("{integer}.{}", String::from_utf8_lossy(&kept[split..]))
    }
}

fn group_thousands(number: &str) -> String {
    let (integer, fraction) = match number.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (number, None),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
