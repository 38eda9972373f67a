use clap::Parser;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use suisen::prelude::*;

/// A first-match rule evaluation engine CLI for decision-tool forms
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration JSON file
    config_path: Option<String>,
    /// Optional path to an inputs JSON file (field id -> raw value)
    inputs_path: Option<String>,

    /// Round-trip the configuration through a binary artifact at this path
    /// before evaluating
    #[arg(short, long)]
    artifact: Option<String>,

    /// Run in interactive mode to be prompted for each field
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn load_configuration(config_path: &str, artifact_path: Option<&str>) -> Configuration {
    let load_start = Instant::now();
    let config_json = fs::read_to_string(config_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read configuration file '{}': {}",
            config_path, e
        ))
    });

    let config = Configuration::from_json(&config_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Configuration conversion failed: {}", e)));
    println!(
        "Loaded configuration '{}' ({} fields, {} rules) in {:?}",
        config.title,
        config.fields.len(),
        config.rules.len(),
        load_start.elapsed()
    );

    // Optional artifact round-trip: freeze the validated configuration to
    // disk and reload it, as an embedding application's cache would.
    if let Some(path) = artifact_path {
        let artifact_start = Instant::now();
        ToolArtifact::new(config)
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Artifact save failed: {}", e)));
        let reloaded = ToolArtifact::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Artifact reload failed: {}", e)));
        println!(
            "Artifact round-trip through '{}' in {:?}",
            path,
            artifact_start.elapsed()
        );
        return reloaded.into_configuration();
    }

    config
}

fn run_evaluation(config: Configuration, raw_inputs: HashMap<String, serde_json::Value>) {
    let mut form = FormController::new(config);
    for (field_id, value) in raw_inputs {
        form.set_input(&field_id, raw_input_string(&value));
    }

    let eval_start = Instant::now();
    let recommendation = form.submit();
    let eval_duration = eval_start.elapsed();

    print_recommendation(&recommendation);
    println!("\nEvaluation took {:?}", eval_duration);
}

fn print_recommendation(recommendation: &Recommendation) {
    println!("\nEvaluation Finished!");
    println!(
        "  -> Status: {} ({})",
        recommendation.label, recommendation.status
    );
    println!("  -> Message: {}", recommendation.message);
    if let Some(reason) = &recommendation.reason {
        println!("  -> Reason: {}", reason);
    }
    println!(
        "  -> Badge colors: text {}, background {}, border {}",
        recommendation.style.text, recommendation.style.bg, recommendation.style.border
    );
}

/// Renders a raw JSON input value the way a form input would hold it.
fn raw_input_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let config_path = cli.config_path.unwrap_or_else(|| {
        exit_with_error("Configuration path is required in non-interactive mode.");
    });
    let config = load_configuration(&config_path, cli.artifact.as_deref());

    let raw_inputs = match cli.inputs_path {
        Some(inputs_path) => {
            let inputs_json = fs::read_to_string(&inputs_path).unwrap_or_else(|e| {
                exit_with_error(&format!(
                    "Failed to read inputs file '{}': {}",
                    inputs_path, e
                ))
            });
            serde_json::from_str(&inputs_json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse inputs JSON: {}", e)))
        }
        None => {
            println!("No inputs file provided. Evaluating with empty inputs.");
            HashMap::new()
        }
    };

    run_evaluation(config, raw_inputs);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- Suisen Interactive Mode ---");

    let config_path = match cli.config_path {
        Some(path) => path,
        None => prompt_for_input("Enter configuration path", Some("data/config.json")),
    };
    let config = load_configuration(&config_path, cli.artifact.as_deref());

    println!("\n{}", config.title);
    let mut raw_inputs = HashMap::new();
    for field in &config.fields {
        let mut prompt = field.label.clone();
        if field.required {
            prompt.push_str(" (required)");
        }
        let raw = prompt_for_input(&prompt, field.placeholder.as_deref());
        raw_inputs.insert(field.id.clone(), serde_json::Value::String(raw));
    }

    run_evaluation(config, raw_inputs);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
