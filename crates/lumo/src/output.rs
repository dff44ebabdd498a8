//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders query results in the format selected by `--output`. Table uses
//! `tabled` over the core listing pipeline's pre-formatted rows; structured
//! formats serialize the original light records so nothing is lost to
//! display rounding; plain emits one bulb ID per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use lumo_core::{Light, LightRow, build_rows};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Table row ────────────────────────────────────────────────────────

// Same column set and headers the tool has always printed.
#[derive(Tabled)]
struct RowDisplay {
    #[tabled(rename = "idx")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Power")]
    power: String,
    #[tabled(rename = "Brightness")]
    brightness: String,
    #[tabled(rename = "Hue")]
    hue: String,
    #[tabled(rename = "Kelvin")]
    kelvin: String,
    #[tabled(rename = "Sat")]
    saturation: String,
}

impl RowDisplay {
    fn new(row: LightRow, color: bool) -> Self {
        let power = if color {
            match row.power.as_str() {
                "on" => row.power.green().to_string(),
                "off" => row.power.dimmed().to_string(),
                _ => row.power,
            }
        } else {
            row.power
        };

        Self {
            index: row.index,
            id: row.id,
            label: row.label,
            group: row.group,
            power,
            brightness: row.brightness,
            hue: row.hue,
            kelvin: row.kelvin,
            saturation: row.saturation,
        }
    }
}

// ── Render dispatcher ────────────────────────────────────────────────

/// Render a set of light records in the chosen format.
///
/// - `table`: sorted, fixed-format rows from the core listing pipeline
/// - `json` / `json-compact` / `yaml`: the records as the service sent them
/// - `plain`: one bulb ID per line
pub fn render_lights(format: &OutputFormat, lights: &[Light], color: bool) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<RowDisplay> = build_rows(lights.to_vec())
                .into_iter()
                .map(|row| RowDisplay::new(row, color))
                .collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => render_json(lights, false),
        OutputFormat::JsonCompact => render_json(lights, true),
        OutputFormat::Yaml => render_yaml(lights),
        OutputFormat::Plain => lights
            .iter()
            .map(|l| l.id.clone())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(data).expect("serialization should not fail")
    } else {
        serde_json::to_string_pretty(data).expect("serialization should not fail")
    }
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
