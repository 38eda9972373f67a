use clap::Parser;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde_json::json;
use std::fs;

/// A CLI tool to generate random decision-tool configurations and matching
/// input sets for soak-testing the resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated configuration JSON to
    #[arg(short, long, default_value = "generated_config.json")]
    output: String,

    /// The path to write a matching random inputs JSON to
    #[arg(long, default_value = "generated_inputs.json")]
    inputs_output: String,

    /// Number of number-typed fields to generate
    #[arg(long, default_value_t = 4)]
    number_fields: usize,

    /// Number of select-typed fields to generate
    #[arg(long, default_value_t = 2)]
    select_fields: usize,

    /// Number of rules to generate
    #[arg(long, default_value_t = 8)]
    rules: usize,
}

const STATUSES: [&str; 3] = ["ok", "restrict", "no"];
const OPERATORS: [&str; 6] = ["==", "!=", ">", ">=", "<", "<="];
const SELECT_CHOICES: [&str; 4] = ["basic", "standard", "pro", "enterprise"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.number_fields + cli.select_fields == 0 {
        eprintln!("Error: at least one field must be generated");
        std::process::exit(1);
    }

    println!(
        "Generating configuration ({} number fields, {} select fields, {} rules)...",
        cli.number_fields, cli.select_fields, cli.rules
    );

    let fields = generate_fields(&mut rng, cli.number_fields, cli.select_fields);
    let rules = generate_rules(&mut rng, &fields, cli.rules);

    let config = json!({
        "title": "Generated decision tool",
        "cta": "Evaluate",
        "fields": fields,
        "rules": rules,
    });
    fs::write(&cli.output, serde_json::to_string_pretty(&config)?)?;
    println!("-> Wrote configuration to '{}'.", cli.output);

    let inputs = generate_inputs(&mut rng, &fields);
    fs::write(&cli.inputs_output, serde_json::to_string_pretty(&inputs)?)?;
    println!("-> Wrote matching inputs to '{}'.", cli.inputs_output);

    Ok(())
}

fn generate_fields(
    rng: &mut ThreadRng,
    number_fields: usize,
    select_fields: usize,
) -> Vec<serde_json::Value> {
    let mut fields = Vec::new();

    for index in 0..number_fields {
        fields.push(json!({
            "id": format!("metric_{}", index),
            "label": format!("Metric {}", index),
            "type": "number",
            "min": 0,
            "max": 100,
            "required": rng.random_bool(0.5),
        }));
    }

    for index in 0..select_fields {
        let options: Vec<serde_json::Value> = SELECT_CHOICES
            .iter()
            .map(|choice| json!({ "value": choice, "label": choice }))
            .collect();
        fields.push(json!({
            "id": format!("choice_{}", index),
            "label": format!("Choice {}", index),
            "type": "select",
            "options": options,
            "required": rng.random_bool(0.5),
        }));
    }

    fields
}

fn generate_condition(rng: &mut ThreadRng, fields: &[serde_json::Value]) -> serde_json::Value {
    let field = &fields[rng.random_range(0..fields.len())];
    let id = field["id"].as_str().unwrap_or_default();

    if field["type"] == "select" {
        let member_count = rng.random_range(1..=SELECT_CHOICES.len());
        let members: Vec<&str> = SELECT_CHOICES[..member_count].to_vec();
        json!({ "in": { "field": id, "values": members } })
    } else {
        let op = OPERATORS[rng.random_range(0..OPERATORS.len())];
        let threshold = rng.random_range(0..100i64);
        json!({ "field": id, "op": op, "value": threshold })
    }
}

fn generate_rules(
    rng: &mut ThreadRng,
    fields: &[serde_json::Value],
    count: usize,
) -> Vec<serde_json::Value> {
    (0..count)
        .map(|index| {
            let status = STATUSES[rng.random_range(0..STATUSES.len())];
            let condition = if rng.random_bool(0.4) {
                let children: Vec<serde_json::Value> = (0..rng.random_range(2..=3))
                    .map(|_| generate_condition(rng, fields))
                    .collect();
                if rng.random_bool(0.5) {
                    json!({ "all": children })
                } else {
                    json!({ "any": children })
                }
            } else {
                generate_condition(rng, fields)
            };
            json!({
                "if": condition,
                "then": { "status": status, "message": format!("Generated outcome {}", index) },
            })
        })
        .collect()
}

fn generate_inputs(rng: &mut ThreadRng, fields: &[serde_json::Value]) -> serde_json::Value {
    let mut inputs = serde_json::Map::new();
    for field in fields {
        let id = field["id"].as_str().unwrap_or_default().to_string();
        let value = if field["type"] == "select" {
            json!(SELECT_CHOICES[rng.random_range(0..SELECT_CHOICES.len())])
        } else {
            json!(rng.random_range(0..100i64).to_string())
        };
        inputs.insert(id, value);
    }
    serde_json::Value::Object(inputs)
}
