//! # GrindCalc CLI Demo
//!
//! Interactive terminal front end for the grinding calculators. Prompts for
//! wheel parameters, evaluates the surface-speed calculator in both unit
//! systems, renders the speed gauge, and saves the snapshot into a local
//! history file.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use grind_core::catalog::registry;
use grind_core::engine::{evaluate, parse_inputs};
use grind_core::file_io::{load_history, save_history};
use grind_core::history::{History, SavedCalculation};
use grind_core::scale::gauge_position;
use grind_core::units::UnitSystem;

fn prompt(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("GrindCalc CLI - Grinding Wheel Calculators");
    println!("==========================================");
    println!();

    let def = registry::find("wheel-surface-speed").expect("built-in catalog");
    println!("{}", def.name);
    println!("{}", def.description);
    println!();

    let diameter = prompt("Enter wheel diameter (mm) [400]: ", "400");
    let rpm = prompt("Enter spindle speed (rpm) [1910]: ", "1910");
    println!();

    let raw = HashMap::from([
        ("diameter".to_string(), diameter),
        ("rpm".to_string(), rpm),
    ]);
    let inputs = parse_inputs(&raw, &def.inputs);

    let metric = evaluate(def, &inputs, UnitSystem::Metric);

    // Imperial view of the same setup: diameter converts, rpm is rpm
    let imperial_inputs: HashMap<String, f64> = inputs
        .iter()
        .map(|(k, v)| {
            let v = if k == "diameter" {
                v / grind_core::units::MM_PER_INCH
            } else {
                *v
            };
            (k.clone(), v)
        })
        .collect();
    let imperial = evaluate(def, &imperial_inputs, UnitSystem::Imperial);

    println!("═══════════════════════════════════════");
    println!("  SURFACE SPEED RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    match (metric.value, imperial.value) {
        (Some(mps), Some(sfpm)) => {
            println!("  Metric:   {:.1} {}", mps, metric.unit.metric);
            println!("  Imperial: {:.0} {}", sfpm, imperial.unit.imperial);

            if let Some(scale) = metric.scale {
                let gauge = gauge_position(&scale, mps);
                println!();
                println!("  Gauge: {}", render_gauge(&gauge));
                let in_band = mps >= scale.optimal.min && mps <= scale.optimal.max;
                println!(
                    "  Optimal band: {:.0}-{:.0} {} {}",
                    scale.optimal.min,
                    scale.optimal.max,
                    metric.unit.metric,
                    status_icon(in_band)
                );
            }
        }
        _ => {
            println!("  No data yet - enter a diameter and spindle speed.");
        }
    }
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&metric) {
        println!("{}", json);
    }

    // Append the snapshot to the demo history file
    let path = Path::new("grindcalc_demo.gcal");
    let mut history = load_history(path).unwrap_or_else(|_| History::new("cli-demo"));
    history.add_entry(SavedCalculation::new(
        &def.id,
        "CLI demo",
        inputs,
        metric,
        UnitSystem::Metric,
    ));
    match save_history(&history, path) {
        Ok(()) => println!("\nSaved snapshot to {} ({} entries)", path.display(), history.entry_count()),
        Err(e) => eprintln!("\nCould not save history: {}", e),
    }
}

/// Render a 30-column gauge bar with the value marker and optimal band.
fn render_gauge(gauge: &grind_core::scale::GaugePosition) -> String {
    const WIDTH: usize = 30;
    let col = |t: f64| ((t * (WIDTH - 1) as f64).round() as usize).min(WIDTH - 1);

    let marker = col(gauge.position);
    let band = col(gauge.optimal_start)..=col(gauge.optimal_end);

    (0..WIDTH)
        .map(|i| {
            if i == marker {
                '▲'
            } else if band.contains(&i) {
                '='
            } else {
                '-'
            }
        })
        .collect()
}

fn status_icon(ok: bool) -> &'static str {
    if ok {
        "[OK]"
    } else {
        "[CHECK]"
    }
}
