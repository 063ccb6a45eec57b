use crate::core::error::Result;
use crate::tasks::TestReport;
use crate::ui::types::choices::OutputFormat;
use std::fmt::Write;

const FRACTION_DIGITS: usize = 12;
// Enough fractional digits to print any finite f64 exactly.
const EXACT_DIGITS: usize = 1074;

/// Formats a probability with at most twelve fractional digits, rounding
/// half up on the exact decimal value of `p`, dropping trailing zeros and
/// the leading zero: `0.5` is `.5`, `1.0` is `1`, `0.0` is `0`.
pub fn format_probability(p: f64) -> String {
    if !p.is_finite() {
        return p.to_string();
    }
    let exact = format!("{:.prec$}", p.abs(), prec = EXACT_DIGITS);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, dropped) = fraction.split_at(FRACTION_DIGITS.min(fraction.len()));

    let mut digits: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    if dropped.as_bytes().first().is_some_and(|&d| d >= b'5') {
        round_up(&mut digits);
    }
    let split = digits.len() - kept.len();
    let whole = std::str::from_utf8(&digits[..split])
        .unwrap_or_default()
        .trim_start_matches('0');
    let fraction = std::str::from_utf8(&digits[split..])
        .unwrap_or_default()
        .trim_end_matches('0');

    let mut out = String::new();
    if p < 0.0 && !(whole.is_empty() && fraction.is_empty()) {
        out.push('-');
    }
    if fraction.is_empty() {
        out.push_str(if whole.is_empty() { "0" } else { whole });
        return out;
    }
    out.push_str(whole);
    out.push('.');
    out.push_str(fraction);
    out
}

/// Adds one unit in the last place of a string of ASCII digits.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// The plain-text layout: one structure line per attribute, a blank line,
/// one `predicted actual posterior` line per test example, a blank line and
/// the number of correct predictions.
pub fn render_summary(report: &TestReport) -> String {
    let mut out = String::new();
    for line in &report.structure {
        out.push_str(&line.attribute);
        for parent in &line.parents {
            out.push(' ');
            out.push_str(parent);
        }
        out.push('\n');
    }
    out.push('\n');
    for row in &report.predictions {
        let _ = writeln!(
            out,
            "{} {} {}",
            row.predicted,
            row.actual,
            format_probability(row.posterior)
        );
    }
    let _ = writeln!(out, "\n{}", report.correct);
    out
}

pub fn render_json(report: &TestReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render(report: &TestReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(render_summary(report)),
        OutputFormat::Json => render_json(report),
    }
}
