//! # Rendering Module
//!
//! Turns API results into the strings the CLI prints.
//!
//! - **Text** mode: a summary line followed by one aligned row per product,
//!   with names styled through `console` (styling is dropped automatically
//!   when stdout is not a terminal).
//! - **JSON** mode: a pretty-printed, API-friendly document built with
//!   `serde_json`, with no styling.

use console::style;
use serde_json::json;
use specfilter::api::{OutputFormat, Selection};
use specfilter::model::Product;

/// Width of the name column in text mode.
pub const COL_NAME: usize = 12;
/// Width of the color column in text mode.
pub const COL_COLOR: usize = 7;

/// Renders a selection under a heading describing what was asked for.
pub fn render_selection(
    heading: &str,
    selection: &Selection<'_>,
    output: OutputFormat,
) -> Result<String, anyhow::Error> {
    match output {
        OutputFormat::Json => {
            let value = json!({
                "criteria": heading,
                "scanned": selection.scanned,
                "matched": selection.len(),
                "products": selection.products,
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
        }
        OutputFormat::Text => {
            let mut out = format!(
                "{}: {} of {} {}\n",
                heading,
                selection.len(),
                selection.scanned,
                if selection.scanned == 1 {
                    "product"
                } else {
                    "products"
                }
            );
            if selection.is_empty() {
                out.push_str("  (no matching products)\n");
            }
            for product in &selection.products {
                out.push_str(&render_row(product));
                out.push('\n');
            }
            Ok(out)
        }
    }
}

fn render_row(product: &Product) -> String {
    let name = format!("{:<width$}", product.name(), width = COL_NAME);
    let color = format!("{:<width$}", product.color().as_str(), width = COL_COLOR);
    format!("  {} {} {}", style(name).bold(), color, product.size())
}

/// One section of the demo walkthrough: a label and the products it matched.
pub struct DemoSection<'a> {
    pub key: &'static str,
    pub label: &'static str,
    pub selection: Selection<'a>,
}

/// Renders the demo walkthrough, one "<name> is <label>" line per match.
pub fn render_demo(sections: &[DemoSection<'_>], output: OutputFormat) -> Result<String, anyhow::Error> {
    match output {
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            for section in sections {
                map.insert(
                    section.key.to_string(),
                    json!(section.selection.names()),
                );
            }
            Ok(format!(
                "{}\n",
                serde_json::to_string_pretty(&serde_json::Value::Object(map))?
            ))
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for section in sections {
                for product in &section.selection.products {
                    out.push_str(&format!("{} is {}\n", style(product.name()).bold(), section.label));
                }
            }
            Ok(out)
        }
    }
}
