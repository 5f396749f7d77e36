use clap::{Parser, ValueEnum};
use ladderspec::export::{format_io_as_text, format_variables, NotesFormatter};
use ladderspec::prelude::*;
use std::fs;
use std::io::{self, Write};

/// Which text artifact to produce.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Human-readable notes form
    Notes,
    /// Pseudo-CODESYS variable dump
    Variables,
    /// Plain-text I/O list
    Io,
}

/// A step-sequence editor and export engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the legacy-format program JSON file
    program_path: Option<String>,

    /// The export format to render
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Write the export here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Path to a recipe store file
    #[arg(long)]
    store: Option<String>,

    /// Save the converted program into the store under this recipe name
    #[arg(long)]
    save: Option<String>,

    /// List the recipe names in the store and exit
    #[arg(long)]
    list: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        run_list(cli);
        return;
    }

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn run_list(cli: Cli) {
    let store_path = cli
        .store
        .unwrap_or_else(|| exit_with_error("--list requires --store <path>"));
    let store = FileRecipeStore::open(&store_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open store: {}", e)));

    let names = store.names();
    if names.is_empty() {
        println!("(No recipes saved in '{}')", store_path);
        return;
    }
    println!("Recipes in '{}':", store_path);
    for name in names {
        println!("  - {}", name);
    }
}

fn run_export(cli: Cli, program_path: String) {
    // --- 1. Load and convert ---
    let program_json = fs::read_to_string(&program_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read program file '{}': {}",
            &program_path, e
        ))
    });

    let raw = RawProgram::from_json(&program_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse program JSON: {}", e)));
    let program = raw
        .into_program()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert program: {}", e)));

    println!(
        "Loaded '{}': {} step(s), {} I/O point(s).",
        program.name,
        program.total_steps,
        program.io_list.len()
    );

    // --- 2. Optional recipe save ---
    if let Some(recipe_name) = &cli.save {
        let store_path = cli
            .store
            .clone()
            .unwrap_or_else(|| exit_with_error("--save requires --store <path>"));
        let mut store = FileRecipeStore::open(&store_path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to open store: {}", e)));
        store
            .save(recipe_name, &program)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save recipe: {}", e)));
        println!("Saved recipe '{}' to '{}'.", recipe_name, store_path);
    }

    // --- 3. Render ---
    let rendered = match cli.format.unwrap_or(ExportFormat::Notes) {
        ExportFormat::Notes => NotesFormatter::format_program(&program),
        ExportFormat::Variables => format_variables(&program),
        ExportFormat::Io => format_io_as_text(&program.io_list),
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path, e)));
            println!("Wrote export to '{}'.", path);
        }
        None => println!("\n{}", rendered),
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let program_path = cli
        .program_path
        .clone()
        .unwrap_or_else(|| exit_with_error("Program path is required in non-interactive mode."));
    run_export(cli, program_path);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(mut cli: Cli) {
    println!("--- Ladderspec Interactive Mode ---");

    let program_path = prompt_for_input("Enter program path", Some("data/program.json"));

    let format = loop {
        println!("\nPlease select an export format:");
        println!("  1: Notes (human-readable)");
        println!("  2: Variables (pseudo-CODESYS dump)");
        println!("  3: I/O list");
        let choice_str = prompt_for_input("Enter choice", Some("1"));

        match choice_str.trim() {
            "1" => break ExportFormat::Notes,
            "2" => break ExportFormat::Variables,
            "3" => break ExportFormat::Io,
            _ => println!("Invalid choice. Please enter 1, 2 or 3."),
        }
    };
    cli.format = Some(format);

    let output = prompt_for_input("Enter output path (empty for stdout)", None);
    cli.output = if output.is_empty() { None } else { Some(output) };

    run_export(cli, program_path);
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
