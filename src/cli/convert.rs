use super::ui;
use crate::core::conversion::{self, HOME_CURRENCY};
use crate::core::sheet::ExchangeSheet;
use comfy_table::{Cell, CellAlignment};
use anyhow::{Result, bail};
use tracing::debug;

/// How the target currency is picked on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencySelection {
    Index(usize),
    Code(String),
}

impl Default for CurrencySelection {
    fn default() -> Self {
        CurrencySelection::Index(0)
    }
}

/// One entry of the currency selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption {
    pub index: usize,
    pub label: String,
}

/// Conversion form state. The sheet is passed in on every call and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionForm {
    pub selected_index: usize,
    pub amount_input: String,
}

impl ConversionForm {
    pub fn new(selected_index: usize, amount_input: impl Into<String>) -> Self {
        ConversionForm {
            selected_index,
            amount_input: amount_input.into(),
        }
    }

    /// One option per row, labelled by currency code.
    pub fn options(sheet: Option<&ExchangeSheet>) -> Vec<SelectorOption> {
        sheet.map_or_else(Vec::new, |sheet| {
            sheet
                .currencies
                .iter()
                .enumerate()
                .map(|(index, row)| SelectorOption {
                    index,
                    label: row.code.clone(),
                })
                .collect()
        })
    }

    pub fn can_submit(&self) -> bool {
        !self.amount_input.is_empty()
    }

    /// Formatted converted amount, or `None` when there is nothing to show.
    pub fn submit(&self, sheet: Option<&ExchangeSheet>) -> Option<String> {
        if !self.can_submit() {
            debug!("Empty amount, nothing to convert");
            return None;
        }
        conversion::convert(sheet?, self.selected_index, &self.amount_input)
    }

    pub fn display(&self, sheet: Option<&ExchangeSheet>) -> String {
        let target = sheet
            .and_then(|s| s.currencies.get(self.selected_index))
            .map_or("N/A", |row| row.code.as_str());
        let result = self.submit(sheet).unwrap_or_default();

        format!(
            "Convert {} to {}\nResult: {}",
            ui::style_text(HOME_CURRENCY, ui::StyleType::Label),
            ui::style_text(target, ui::StyleType::Label),
            ui::style_text(&result, ui::StyleType::Value)
        )
    }
}

fn describe_options(options: &[SelectorOption]) -> String {
    if options.is_empty() {
        return "none".to_string();
    }
    options
        .iter()
        .map(|option| format!("{} {}", option.index, option.label))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps the selection to a row index of `sheet`. Selections that match no
/// row are an error listing the selector options.
pub fn resolve_selection(sheet: &ExchangeSheet, selection: &CurrencySelection) -> Result<usize> {
    let available = || describe_options(&ConversionForm::options(Some(sheet)));
    match selection {
        CurrencySelection::Index(index) if *index < sheet.currencies.len() => Ok(*index),
        CurrencySelection::Index(index) => bail!(
            "No currency at index {}. Available currencies: {}",
            index,
            available()
        ),
        CurrencySelection::Code(code) => match sheet.position_of(code) {
            Some(index) => Ok(index),
            None => bail!(
                "Unknown currency code: {}. Available currencies: {}",
                code,
                available()
            ),
        },
    }
}

/// Renders the selector options as an index/code table.
pub fn render_options(sheet: Option<&ExchangeSheet>) -> String {
    if sheet.is_none() {
        return ui::style_text(super::rates::EMPTY_MESSAGE, ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Index"), ui::header_cell("Code")]);
    for option in ConversionForm::options(sheet) {
        table.add_row(vec![
            Cell::new(option.index).set_alignment(CellAlignment::Right),
            Cell::new(option.label),
        ]);
    }
    table.to_string()
}

pub fn list(sheet: Option<&ExchangeSheet>) -> Result<()> {
    println!("{}", render_options(sheet));
    Ok(())
}

pub fn run(
    sheet: Option<&ExchangeSheet>,
    amount: &str,
    selection: &CurrencySelection,
) -> Result<()> {
    let selected_index = match sheet {
        Some(sheet) => resolve_selection(sheet, selection)?,
        None => 0,
    };
    let form = ConversionForm::new(selected_index, amount);
    println!("{}", form.display(sheet));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::parse;

    fn sheet() -> ExchangeSheet {
        parse(
            "11 Jan 2024 #7
Country|Currency|Amount|Code|Rate
USA|dollar|1|USD|23.1
EMU|euro|1|EUR|25.2",
        )
        .unwrap()
    }

    #[test]
    fn test_options_labelled_by_code() {
        let sheet = sheet();
        let options = ConversionForm::options(Some(&sheet));
        assert_eq!(
            options,
            vec![
                SelectorOption {
                    index: 0,
                    label: "USD".to_string()
                },
                SelectorOption {
                    index: 1,
                    label: "EUR".to_string()
                },
            ]
        );
        assert!(ConversionForm::options(None).is_empty());
    }

    #[test]
    fn test_submit_disabled_for_empty_amount() {
        let sheet = sheet();
        let form = ConversionForm::default();
        assert!(!form.can_submit());
        assert!(form.submit(Some(&sheet)).is_none());
    }

    #[test]
    fn test_submit_converts_selected_row() {
        let sheet = sheet();
        let form = ConversionForm::new(1, "100");
        assert!(form.can_submit());
        assert_eq!(form.submit(Some(&sheet)).as_deref(), Some("€3.97"));
        assert!(form.submit(None).is_none());
    }

    #[test]
    fn test_display_shows_blank_result_on_invalid_input() {
        console::set_colors_enabled(false);
        let sheet = sheet();

        let form = ConversionForm::new(0, "23.1");
        assert_eq!(
            form.display(Some(&sheet)),
            "Convert CZK to USD\nResult: $1.00"
        );

        let form = ConversionForm::new(0, "lots");
        assert_eq!(
            form.display(Some(&sheet)),
            "Convert CZK to USD\nResult: "
        );

        let form = ConversionForm::new(5, "10");
        assert_eq!(
            form.display(Some(&sheet)),
            "Convert CZK to N/A\nResult: "
        );
    }

    #[test]
    fn test_resolve_selection() {
        let sheet = sheet();
        assert_eq!(
            resolve_selection(&sheet, &CurrencySelection::Index(1)).unwrap(),
            1
        );
        assert_eq!(
            resolve_selection(&sheet, &CurrencySelection::Code("eur".to_string())).unwrap(),
            1
        );

        let err = resolve_selection(&sheet, &CurrencySelection::Code("GBP".to_string()))
            .unwrap_err()
            .to_string();
        assert_eq!(
            err,
            "Unknown currency code: GBP. Available currencies: 0 USD, 1 EUR"
        );
    }

    #[test]
    fn test_out_of_range_index_lists_options() {
        let sheet = sheet();
        let err = resolve_selection(&sheet, &CurrencySelection::Index(2))
            .unwrap_err()
            .to_string();
        assert_eq!(
            err,
            "No currency at index 2. Available currencies: 0 USD, 1 EUR"
        );

        let empty = parse("11 Jan 2024 #7\nCountry|Currency|Amount|Code|Rate\n").unwrap();
        let err = resolve_selection(&empty, &CurrencySelection::Index(0))
            .unwrap_err()
            .to_string();
        assert_eq!(err, "No currency at index 0. Available currencies: none");
    }

    #[test]
    fn test_render_options_table() {
        console::set_colors_enabled(false);
        let sheet = sheet();
        let output = render_options(Some(&sheet));
        for text in ["Index", "Code", "USD", "EUR"] {
            assert!(output.contains(text), "missing {text} in:\n{output}");
        }
        assert!(output.find("USD") < output.find("EUR"));

        assert_eq!(render_options(None), crate::cli::rates::EMPTY_MESSAGE);
    }
}
