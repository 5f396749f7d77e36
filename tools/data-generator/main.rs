use clap::Parser;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde_json::json;
use std::fs;

/// A CLI tool to generate legacy-format program JSON for the ladderspec
/// conversion layer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_program.json")]
    output: String,

    /// The minimum number of top-level steps to generate
    #[arg(long, default_value_t = 3)]
    min: usize,

    /// The maximum number of top-level steps to generate
    #[arg(long, default_value_t = 12)]
    max: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating program (top-level steps: {} to {})...",
        cli.min, cli.max
    );

    let step_count = rng.random_range(cli.min..=cli.max);
    let steps: Vec<serde_json::Value> = (0..step_count).map(|_| generate_step(&mut rng)).collect();
    println!("-> Generated {} top-level step(s).", step_count);

    let io_list = generate_io_list(&mut rng);
    println!("-> Generated {} I/O point(s).", io_list.len());

    let program = json!({
        "name": "Generated Program",
        "steps": steps,
        "ioList": io_list,
    });

    let json_output = serde_json::to_string_pretty(&program)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved program to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_step(rng: &mut ThreadRng) -> serde_json::Value {
    match rng.random_range(0..5) {
        0 => json!({
            "type": "INPUT",
            "elements": [
                { "label": "Clamp_Fwd", "value": true },
                { "label": "Part_Present", "value": rng.random_range(0..2) == 1 },
            ],
            "operators": ["AND"],
        }),
        1 => json!({
            "type": "OUTPUT",
            "elements": [{ "label": "L_AC.Fwd", "value": true }],
        }),
        2 => json!({
            "type": "DELAY",
            "elements": [
                { "label": "Delay", "value": rng.random_range(10..500), "unit": "ms" },
            ],
        }),
        3 => json!({
            "type": "LOOP START",
            "elements": [{ "label": "Cycle Count", "value": 0 }],
            "repeatCount": rng.random_range(1..10),
        }),
        // A small group with a couple of leaf steps inside.
        _ => json!({
            "type": "GROUP",
            "groupName": "Clamp Sequence",
            "groupSteps": [
                { "type": "OUTPUT", "elements": [{ "label": "Clamp", "value": true }] },
                {
                    "type": "DELAY",
                    "elements": [
                        { "label": "Delay", "value": rng.random_range(10..200), "unit": "ms" },
                    ],
                },
            ],
        }),
    }
}

fn generate_io_list(rng: &mut ThreadRng) -> Vec<serde_json::Value> {
    let input_count = rng.random_range(1..5);
    let output_count = rng.random_range(1..5);

    let mut points = Vec::new();
    for i in 0..input_count {
        points.push(json!({
            "address": format!("X{}", i),
            "type": "INPUT",
            "label": format!("Sensor_{}", i),
            "dataType": "BOOL",
            "description": "Generated input",
        }));
    }
    for i in 0..output_count {
        points.push(json!({
            "address": format!("Y{}", i),
            "type": "OUTPUT",
            "label": format!("Actuator_{}", i),
            "dataType": "BOOL",
            "description": "Generated output",
        }));
    }
    points
}
