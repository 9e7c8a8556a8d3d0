use super::ui;
use crate::core::sheet::ExchangeSheet;
use anyhow::{Context, Result};
use comfy_table::Cell;

pub const EMPTY_MESSAGE: &str = "No exchange data available.";

impl ExchangeSheet {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(self.headers.iter().map(|h| ui::header_cell(h)));

        for row in &self.currencies {
            table.add_row(vec![
                Cell::new(&row.country),
                Cell::new(&row.currency),
                ui::number_cell(row.amount),
                Cell::new(&row.code),
                ui::number_cell(row.rate),
            ]);
        }

        let mut output = String::new();
        if let Some(date) = self.date {
            output.push_str(&format!(
                "Exchange data as of {}\n\n",
                ui::style_text(&date.format("%-d %b %Y").to_string(), ui::StyleType::Title)
            ));
        }
        output.push_str(&table.to_string());
        output
    }
}

/// Renders the sheet as a table, or as JSON when `json` is set.
pub fn render(sheet: Option<&ExchangeSheet>, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&sheet).context("Failed to serialize exchange sheet");
    }

    Ok(match sheet {
        Some(sheet) => sheet.display_as_table(),
        None => ui::style_text(EMPTY_MESSAGE, ui::StyleType::Subtle),
    })
}

pub fn run(sheet: Option<&ExchangeSheet>, json: bool) -> Result<()> {
    println!("{}", render(sheet, json)?);
    Ok(())
}
