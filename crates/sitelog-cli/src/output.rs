//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sitelog_domain::ExtractionResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest cell shown in a table before truncation
const MAX_CELL_CHARS: usize = 80;

/// One document's extraction, labeled with where it came from.
#[derive(Debug, Clone)]
pub struct Report {
    /// Document source (a path, or `<stdin>`)
    pub source: String,

    /// Extraction result
    pub result: ExtractionResult,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the reports in argument order.
    pub fn format_reports(&self, reports: &[Report]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(reports),
            OutputFormat::Table => Ok(self.format_tables(reports)),
            OutputFormat::Summary => Ok(self.format_summary(reports)),
        }
    }

    /// A single document prints as one object, several as an array.
    fn format_json(&self, reports: &[Report]) -> Result<String> {
        match reports {
            [report] => Ok(serde_json::to_string_pretty(&report.result)?),
            _ => {
                let results: Vec<&ExtractionResult> = reports.iter().map(|r| &r.result).collect();
                Ok(serde_json::to_string_pretty(&results)?)
            }
        }
    }

    fn format_summary(&self, reports: &[Report]) -> String {
        if reports.is_empty() {
            return self.colorize("No documents processed.", "yellow");
        }

        let rows = reports.iter().map(|report| {
            let result = &report.result;
            [
                report.source.clone(),
                or_dash(result.log_date().map(|d| d.to_string()).as_deref()),
                or_dash(result.site_name()),
                result.total_tasks_completed().to_string(),
                result.total_blockers().to_string(),
                result.total_incidents().to_string(),
            ]
        });
        render_table(["File", "Date", "Site", "Tasks", "Blockers", "Incidents"], rows)
    }

    fn format_tables(&self, reports: &[Report]) -> String {
        reports
            .iter()
            .map(|report| self.format_report(report))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn format_report(&self, report: &Report) -> String {
        let result = &report.result;
        let mut sections = vec![self.colorize(&format!("== {} ==", report.source), "cyan")];

        sections.push(render_table(
            ["Field", "Value"],
            [
                ["Date".to_string(), or_dash(result.log_date().map(|d| d.to_string()).as_deref())],
                ["Site".to_string(), or_dash(result.site_name())],
                ["Submitted by".to_string(), or_dash(result.submitted_by())],
            ],
        ));

        let tasks = result.completed_tasks();
        sections.push(self.colorize(&format!("Completed tasks ({})", tasks.len()), "green"));
        if tasks.is_empty() {
            sections.push(self.colorize("No completed tasks found.", "yellow"));
        } else {
            sections.push(render_table(
                ["Task", "Location", "Crew"],
                tasks.iter().map(|t| {
                    [
                        cell(&t.task_name),
                        or_dash(t.location.as_deref()),
                        or_dash(t.crew.as_deref()),
                    ]
                }),
            ));
        }

        let blockers = result.blockers();
        sections.push(self.colorize(&format!("Blockers ({})", blockers.len()), "yellow"));
        if blockers.is_empty() {
            sections.push(self.colorize("No blockers found.", "yellow"));
        } else {
            sections.push(render_table(
                ["Issue", "Cause"],
                blockers
                    .iter()
                    .map(|b| [cell(&b.issue), or_dash(b.cause.map(|c| c.as_str()))]),
            ));
        }

        let incidents = result.incidents();
        sections.push(self.colorize(&format!("Incidents ({})", incidents.len()), "red"));
        if incidents.is_empty() {
            sections.push(self.colorize("No incidents found.", "yellow"));
        } else {
            sections.push(render_table(
                ["Type", "Severity", "Description", "Action taken"],
                incidents.iter().map(|i| {
                    [
                        i.incident_type.as_str().to_string(),
                        self.severity_label(i.severity.as_str()),
                        cell(&i.description),
                        or_dash(i.action_taken.as_deref().map(cell).as_deref()),
                    ]
                }),
            ));
        }

        sections.join("\n")
    }

    fn severity_label(&self, severity: &str) -> String {
        match severity {
            "major" => self.colorize(severity, "red"),
            "moderate" => self.colorize(severity, "yellow"),
            _ => severity.to_string(),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render_table<const N: usize>(header: [&str; N], rows: impl IntoIterator<Item = [String; N]>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Single-line cell text, truncated to [`MAX_CELL_CHARS`]
fn cell(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_CELL_CHARS {
        return flat;
    }
    let mut truncated: String = flat.chars().take(MAX_CELL_CHARS - 3).collect();
    truncated.push_str("...");
    truncated
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
