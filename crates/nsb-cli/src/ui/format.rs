//! Formatting for sizes, durations and the build summary.

use std::path::Path;
use std::time::Duration;

use console::Term;
use nsb_bundler::BundleStats;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format a byte count with the largest fitting unit.
///
/// ```
/// use nsb_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format a duration as milliseconds, seconds or minutes.
///
/// ```
/// use std::time::Duration;
/// use nsb_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the build summary to stderr.
///
/// `output` is where the bundle went; `None` means stdout.
pub fn print_build_summary(stats: &BundleStats, duration: Duration, output: Option<&Path>) {
    let width = (Term::stderr().size().1 as usize).clamp(20, 60);
    let rule = "─".repeat(width);
    let target = output.map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string());

    let rows = [
        ("Output", target),
        ("Modules", stats.modules.to_string()),
        ("Unowned", stats.unowned.to_string()),
        ("Edges", stats.edges.to_string()),
        ("Layers", stats.layers.to_string()),
        ("Size", format_size(stats.bytes as u64)),
        ("Time", format_duration(duration)),
    ];

    if colors_enabled() {
        eprintln!("\n{}", "Bundle Summary".bold().underline());
        eprintln!("{}", rule.dimmed());
        for (label, value) in &rows {
            eprintln!("  {} {:<8} {}", "▸".blue(), label, value.bright_white().bold());
        }
        eprintln!("{}", rule.dimmed());
    } else {
        eprintln!("\nBundle Summary");
        eprintln!("{}", rule);
        for (label, value) in &rows {
            eprintln!("  ▸ {:<8} {}", label, value);
        }
        eprintln!("{}", rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(10_240), "10.00 KB");
        assert_eq!(format_size(1_572_864), "1.50 MB");
        assert_eq!(format_size(2_147_483_648), "2.00 GB");
        assert_eq!(format_size(4 * 1_099_511_627_776), "4096.00 GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "61m 1s");
    }

    #[test]
    fn test_print_build_summary() {
        let stats = BundleStats {
            modules: 3,
            unowned: 1,
            edges: 2,
            layers: 2,
            bytes: 1_234,
        };
        print_build_summary(&stats, Duration::from_millis(12), None);
        print_build_summary(&stats, Duration::from_millis(12), Some(Path::new("dist/app.js")));
    }
}
