//! Height Predictor
//!
//! Interactive terminal client: enter a weight, get a predicted height,
//! BMI, figure proportions and a running history.

use anyhow::Result;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, info};

use height_predictor::history::{FileStore, HistoryStore};
use height_predictor::orchestrator::{PredictionOrchestrator, PredictorEvent};
use height_predictor::predictor::HttpPredictor;
use height_predictor::{render, telemetry, AppConfig};

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_history(orchestrator: &PredictionOrchestrator) {
    match render::render_history(orchestrator.history()) {
        Some(list) => println!("\n{list}\n"),
        None => println!("\n📜 No predictions yet.\n"),
    }
}

fn print_chart(orchestrator: &PredictionOrchestrator) {
    if let Some(chart) = render::render_chart(&orchestrator.history().chart_series()) {
        println!("\n{chart}\n");
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_logging()?;

    let config = AppConfig::from_env();
    info!("Using predictor at {}", config.predictor_url);

    println!("\n{}", "═".repeat(60));
    println!("📏 Height Predictor v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "═".repeat(60));

    let predictor = Arc::new(HttpPredictor::new(
        config.predictor_url.clone(),
        config.request_timeout,
    ));
    let history = HistoryStore::new(Arc::new(FileStore::new(&config.history_dir)));
    let mut orchestrator =
        PredictionOrchestrator::new(predictor, history).with_effects(config.effects_enabled);

    // Timed effects arrive after the REPL has moved on; log them only.
    let mut effects_rx = orchestrator.events().subscribe();
    tokio::spawn(async move {
        while let Ok(event) = effects_rx.recv().await {
            match event {
                PredictorEvent::ConfettiFrame { frame, .. } => debug!("confetti frame {}", frame),
                PredictorEvent::WaveFrame { step, arm_y2, .. } => {
                    debug!("wave step {} arm y2={}", step, arm_y2)
                }
                _ => {}
            }
        }
    });

    let restored = orchestrator.restore().await;
    if !restored.is_empty() {
        print_history(&orchestrator);
        print_chart(&orchestrator);
    }

    println!("💡 Commands: <kg> | 'predict <kg>' | 'history' | 'chart' | 'clear' | 'quit'\n");

    loop {
        let line = prompt("⚖️  Weight (kg): ")?;
        if line.is_empty() {
            continue;
        }

        let lowered = line.to_lowercase();
        let weight_input = match lowered.as_str() {
            "quit" | "exit" | "q" => {
                println!("\n👋 Goodbye!\n");
                break;
            }
            "history" => {
                print_history(&orchestrator);
                continue;
            }
            "chart" => {
                match render::render_chart(&orchestrator.history().chart_series()) {
                    Some(chart) => println!("\n{chart}\n"),
                    None => println!("\n📈 Nothing to chart yet.\n"),
                }
                continue;
            }
            "clear" => {
                let answer =
                    prompt("Are you sure you want to clear all prediction history? [y/N] ")?;
                if matches!(answer.to_lowercase().as_str(), "y" | "yes") {
                    match orchestrator.clear_history().await {
                        Ok(()) => println!("\n🗑️  History cleared.\n"),
                        Err(e) => println!("\n❌ Error: {e:#}\n"),
                    }
                }
                continue;
            }
            other => other.strip_prefix("predict").unwrap_or(other).trim().to_string(),
        };

        println!("⏳ Predicting...");
        match orchestrator.submit(&weight_input).await {
            Ok(outcome) => {
                println!("\n{}", render::render_result_card(&outcome.prediction));
                println!("{}", render::render_bmi_gauge(&outcome.bmi));
                println!(
                    "{}",
                    render::render_figure(outcome.weight, outcome.prediction.height, &outcome.figure)
                );
                if let Some(chart) = render::render_chart(&outcome.chart) {
                    println!("{chart}");
                }
                println!("🎉 Prediction complete!\n");
            }
            Err(e) => println!("\n{}\n", e.user_message()),
        }
    }

    Ok(())
}
