//! Metric rendering

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use zqlz_monitor::Metric;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed table
    Table,
    /// One `name=value` line per metric
    Plain,
    /// JSON array
    Json,
}

pub fn render(metrics: &[Metric], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => render_table(metrics),
        OutputFormat::Plain => metrics
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(metrics)?,
    })
}

fn render_table(metrics: &[Metric]) -> String {
    if metrics.is_empty() {
        return "(no metrics)".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    for metric in metrics {
        table.add_row(vec![
            Cell::new(&metric.name),
            Cell::new(metric.value).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Metric> {
        vec![
            Metric::new("mysql_bytes_received", 100),
            Metric::new("mysql_queries", 50),
        ]
    }

    #[test]
    fn test_plain() {
        assert_eq!(
            render(&sample(), OutputFormat::Plain).unwrap(),
            "mysql_bytes_received=100\nmysql_queries=50"
        );
    }

    #[test]
    fn test_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&sample(), OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "mysql_bytes_received", "value": 100},
                {"name": "mysql_queries", "value": 50},
            ])
        );
    }

    #[test]
    fn test_table() {
        let table = render(&sample(), OutputFormat::Table).unwrap();
        assert!(table.contains("Metric"));
        assert!(table.contains("mysql_queries"));
        assert!(table.contains("50"));
        assert_eq!(render(&[], OutputFormat::Table).unwrap(), "(no metrics)");
    }
}
