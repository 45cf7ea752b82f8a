//! Terminal renderers for the presentation events.
//!
//! Each function returns the text to print so the REPL and the tests share
//! one code path.

use chrono::Local;
use crossterm::style::{Color, Stylize};

use crate::figure::FigureDimensions;
use crate::history::{ChartPoint, HistoryCollection};
use crate::metrics::BmiReading;
use crate::predictor::Prediction;

const GAUGE_WIDTH: usize = 40;
const CHART_WIDTH: usize = 30;

/// `#rrggbb` to a terminal color.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn paint(text: &str, hex: &str) -> String {
    match hex_color(hex) {
        Some(color) => text.with(color).bold().to_string(),
        None => text.to_string(),
    }
}

pub fn render_result_card(prediction: &Prediction) -> String {
    format!(
        "📏 Predicted Height: {} cm\n   Coefficient: {}   Intercept: {}\n   {}",
        prediction.height,
        prediction.coefficient,
        prediction.intercept,
        prediction.formula()
    )
}

pub fn render_bmi_gauge(bmi: &BmiReading) -> String {
    let marker = (usize::from(bmi.gauge_position()) * GAUGE_WIDTH / 100).min(GAUGE_WIDTH - 1);
    let gauge: String = (0..GAUGE_WIDTH)
        .map(|i| if i == marker { '●' } else { '─' })
        .collect();

    format!(
        "⚖️  BMI: {}  {}\n   [{}]",
        bmi.value,
        paint(&format!(" {} ", bmi.label()), bmi.color()),
        paint(&gauge, bmi.color())
    )
}

pub fn render_figure(weight: f64, height: f64, figure: &FigureDimensions) -> String {
    format!(
        "🧍 {} cm • {} kg\n   torso {:.1}×{:.1}  head r{:.1}  legs {:.1}  arms {:.1}  {}",
        height,
        weight,
        figure.torso_rx,
        figure.torso_ry,
        figure.head_radius,
        figure.leg_width,
        figure.arm_width,
        paint("■", &figure.body_color)
    )
}

/// History list, newest first. `None` when there is nothing to show.
pub fn render_history(history: &HistoryCollection) -> Option<String> {
    if history.is_empty() {
        return None;
    }

    let lines: Vec<String> = history
        .iter()
        .map(|item| {
            let local = item.timestamp().with_timezone(&Local);
            format!(
                "⚖️ {} kg → 📏 {} cm    {} • {}",
                item.weight(),
                item.height(),
                local.format("%I:%M %p"),
                local.format("%b %-d")
            )
        })
        .collect();

    Some(format!("📜 Prediction History\n{}", lines.join("\n")))
}

/// Horizontal bar chart of heights, oldest first. `None` when empty.
pub fn render_chart(points: &[ChartPoint]) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.height), hi.max(p.height))
        });
    let span = max - min;

    let lines: Vec<String> = points
        .iter()
        .map(|p| {
            // Keep at least one cell so the lowest point stays visible.
            let cells = if span > 0.0 {
                1 + ((p.height - min) / span * (CHART_WIDTH - 1) as f64).round() as usize
            } else {
                CHART_WIDTH
            };
            format!(
                "{:>4} {:<width$} {} ({})",
                p.label(),
                "█".repeat(cells),
                p.tooltip_label(),
                p.tooltip_title(),
                width = CHART_WIDTH
            )
        })
        .collect();

    Some(format!("📈 Height (cm)\n{}", lines.join("\n")))
}
