//! Text and JSON rendering of experiment reports.

use std::fmt::Write;

use super::ExperimentReport;
use crate::metrics::Metric;

/// Line between scenario blocks in the text report.
pub const SEPARATOR: &str = "----------------------------------------";

/// Render the text report.
///
/// Each scenario block holds its heading, the single-trial example and one
/// `Avg <Metric> = <mean>+/-<std>` line per metric, all in percent.
/// Blocks are separated by [`SEPARATOR`].
#[must_use]
pub fn render_text(report: &ExperimentReport) -> String {
    let mut out = String::new();
    for (i, scenario) in report.scenarios.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", scenario.header);
        let _ = writeln!(out, "{}", scenario.example);
        for metric in Metric::ALL {
            let stats = scenario.stats.get(metric);
            let _ = writeln!(
                out,
                "Avg {} = {:.2}+/-{:.2}",
                metric.label(),
                stats.mean * 100.0,
                stats.std * 100.0
            );
        }
    }
    out
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error; the report types contain no maps with
/// non-string keys, so this does not happen in practice.
pub fn render_json(report: &ExperimentReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
