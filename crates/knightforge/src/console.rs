//! Colorful console output for solve progress.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//! Initialized on first use when the `console` feature is enabled.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "knightforge_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, falling back to `knightforge_solver=info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (tests, host apps).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TourConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 _  __      _       _     _   _____
| |/ /_ __ (_) __ _| |__ | |_|  ___|__  _ __ __ _  ___
| ' /| '_ \| |/ _` | '_ \| __| |_ / _ \| '__/ _` |/ _ \
| . \| | | | | (_| | | | | |_|  _| (_) | | | (_| |  __/
|_|\_\_| |_|_|\__, |_| |_|\__|_|  \___/|_|  \__, |\___|
              |___/                         |___/
"#;

    let version_line = format!(
        "                   v{} - Knight's Tour Solver\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct TourConsoleLayer;

impl<S: Subscriber> Layer<S> for TourConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Only handle knightforge_solver events
        if !event.metadata().target().starts_with("knightforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_solver_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    outcome: Option<String>,
    rows: Option<u64>,
    cols: Option<u64>,
    start_row: Option<u64>,
    start_col: Option<u64>,
    time_limit_ms: Option<u64>,
    nodes: Option<u64>,
    backtracks: Option<u64>,
    max_depth: Option<u64>,
    duration_ms: Option<u64>,
    nodes_per_sec: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(s),
            "outcome" => self.outcome = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_count(field.name(), value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_signed(field.name(), value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "outcome" => self.outcome = Some(value.to_string()),
            _ => {}
        }
    }
}

impl EventVisitor {
    fn record_count(&mut self, name: &str, value: u64) {
        match name {
            "rows" => self.rows = Some(value),
            "cols" => self.cols = Some(value),
            "start_row" => self.start_row = Some(value),
            "start_col" => self.start_col = Some(value),
            "time_limit_ms" => self.time_limit_ms = Some(value),
            "nodes" => self.nodes = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "max_depth" => self.max_depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "nodes_per_sec" => self.nodes_per_sec = Some(value),
            _ => {}
        }
    }

    // negative values are dropped
    fn record_signed(&mut self, name: &str, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_count(name, value);
        }
    }
}

fn format_solver_event(v: &EventVisitor) -> String {
    match v.message.as_deref().unwrap_or("") {
        "Solving started" => format_solving_started(v),
        "Solving ended" => format_solving_ended(v),
        _ => String::new(),
    }
}

fn format_solving_started(v: &EventVisitor) -> String {
    let rows = v.rows.unwrap_or(0);
    let cols = v.cols.unwrap_or(0);

    format!(
        "{} {} {} board ({}), start ({}), cells ({}), time limit ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        format!("{}x{}", rows, cols).bright_yellow(),
        format!("{}, {}", v.start_row.unwrap_or(0), v.start_col.unwrap_or(0)).bright_yellow(),
        (rows * cols).to_formatted_string(&Locale::en).bright_yellow(),
        format_duration_ms(v.time_limit_ms.unwrap_or(0)).bright_magenta()
    )
}

fn format_solving_ended(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let nodes = v.nodes.unwrap_or(0);

    let mut output = format!(
        "{} {} {} Solving ended: outcome ({}), time spent ({}), nodes ({}), backtracks ({}), node speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        format_outcome(outcome),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        nodes.to_formatted_string(&Locale::en).white(),
        v.backtracks.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.nodes_per_sec.unwrap_or(0).to_formatted_string(&Locale::en).bright_magenta().bold()
    );

    // Pretty summary box
    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');

    let status_text = match outcome {
        "found" => "TOUR FOUND",
        "not_found" => "NO TOUR FROM THIS START",
        "timed_out" => "TIME LIMIT REACHED",
        _ => "UNKNOWN OUTCOME",
    };
    let status_colored = match outcome {
        "found" => format!("  {}  ", status_text).bright_green().bold().to_string(),
        "timed_out" => format!("  {}  ", status_text).yellow().bold().to_string(),
        _ => format!("  {}  ", status_text).bright_red().bold().to_string(),
    };
    let status_padding = 56 - status_text.len() - 4;
    let left_pad = status_padding / 2;
    let right_pad = status_padding - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&"╠══════════════════════════════════════════════════════════╣".bright_cyan().to_string());
    output.push('\n');

    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Deepest Path:",
        v.max_depth.unwrap_or(0).to_formatted_string(&Locale::en),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_outcome(outcome: &str) -> String {
    match outcome {
        "found" => outcome.bright_green().to_string(),
        "timed_out" => outcome.yellow().to_string(),
        _ => outcome.bright_red().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(message: &str) -> EventVisitor {
        EventVisitor {
            message: Some(message.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(2500), "2.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_solving_started_mentions_board() {
        let v = EventVisitor {
            rows: Some(40),
            cols: Some(40),
            start_row: Some(3),
            start_col: Some(7),
            time_limit_ms: Some(10_000),
            ..visitor("Solving started")
        };
        let line = format_solver_event(&v);
        assert!(line.contains("40x40"));
        assert!(line.contains("3, 7"));
        assert!(line.contains("1,600"));
        assert!(line.contains("10.00s"));
    }

    #[test]
    fn test_solving_ended_summary() {
        let v = EventVisitor {
            outcome: Some("not_found".to_string()),
            nodes: Some(2223),
            backtracks: Some(2223),
            max_depth: Some(15),
            ..visitor("Solving ended")
        };
        let out = format_solver_event(&v);
        assert!(out.contains("NO TOUR FROM THIS START"));
        assert!(out.contains("2,223"));
        assert!(out.contains("Deepest Path:"));
    }

    #[test]
    fn test_negative_signed_fields_are_dropped() {
        let mut v = visitor("Solving started");
        v.record_signed("rows", -3);
        v.record_signed("cols", 12);
        assert_eq!(v.rows, None);
        assert_eq!(v.cols, Some(12));
    }

    #[test]
    fn test_other_messages_are_ignored() {
        assert!(format_solver_event(&visitor("backtrack")).is_empty());
        assert!(format_solver_event(&EventVisitor::default()).is_empty());
    }
}
