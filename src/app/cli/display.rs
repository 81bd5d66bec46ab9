//! End-of-run summary rendering

use crate::core::styles::StyleRole;
use crate::simulation::SimulationReport;
use prettytable::{format, Cell, Row, Table};
use std::io::{self, Write};

use super::args::SummaryFormat;

/// Write the summary to `out` in `format`
///
/// Coloured text goes through the terminal driver, so it always lands on
/// stdout regardless of `out`.
pub fn print_summary<W: Write>(
    report: &SimulationReport,
    format: SummaryFormat,
    use_color: bool,
    out: &mut W,
) -> io::Result<()> {
    match format {
        SummaryFormat::Text => {
            let table = summary_table(report, use_color);
            if use_color {
                table
                    .print_tty(true)
                    .map_err(|e| io::Error::other(e.to_string()))?;
            } else {
                table.print(out)?;
            }
            writeln!(out, "{}", summary_footer(report))?;
        }
        SummaryFormat::Json => {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::from)?;
            writeln!(out, "{}", json)?;
        }
        SummaryFormat::None => {}
    }
    out.flush()
}

pub fn summary_footer(report: &SimulationReport) -> String {
    format!(
        "Produced {} messages in {:.2}s",
        report.produced, report.elapsed
    )
}

/// Per-sender table followed by a totals row
///
/// Cell colours only show when the table is printed to a terminal.
pub fn summary_table(report: &SimulationReport, use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    let styled = |text: String, role: StyleRole| {
        let cell = Cell::new(&text);
        match role.to_prettytable_spec() {
            Some(spec) if use_color => cell.style_spec(spec),
            _ => cell,
        }
    };

    table.set_titles(Row::new(
        ["Sender", "Sent", "Failed", "Avg Time (s)"]
            .into_iter()
            .map(|title| styled(title.to_string(), StyleRole::Header))
            .collect(),
    ));

    for tally in &report.senders {
        let average = match tally.processed() {
            0 => 0.0,
            n => tally.processing_time / n as f64,
        };
        table.add_row(Row::new(vec![
            Cell::new(&tally.slot.to_string()),
            styled(tally.sent.to_string(), StyleRole::Sent),
            styled(tally.failed.to_string(), StyleRole::Failed),
            Cell::new(&format!("{:.2}", average)),
        ]));
    }

    let snapshot = &report.snapshot;
    table.add_row(Row::new(vec![
        styled("Total".to_string(), StyleRole::Header),
        styled(snapshot.success_messages.to_string(), StyleRole::Sent),
        styled(snapshot.failed_messages.to_string(), StyleRole::Failed),
        Cell::new(&format!("{:.2}", snapshot.average_time())),
    ]));

    table
}
