use ladderspec::export::{format_io_as_text, format_variables, NotesFormatter};
use ladderspec::program::IntoProgram;
use ladderspec::ui::RawProgram;
use std::env;
use std::fs;

fn main() {
    // Create output directory
    const TMP_DIR: &str = "tmp";
    if let Err(e) = fs::create_dir_all(TMP_DIR) {
        eprintln!("Failed to create tmp directory: {}", e);
        std::process::exit(1);
    }
    println!("Created output directory at '{}'", TMP_DIR);

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run -- <path/to/program.json>");
        std::process::exit(1);
    }

    let program_path = &args[1];
    println!("Loading program from: {}", program_path);

    let program_json = match fs::read_to_string(program_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read program file '{}': {}", program_path, e);
            std::process::exit(1);
        }
    };

    // Conversion phase
    println!("\nConverting legacy program format...");

    let raw = match RawProgram::from_json(&program_json) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Failed to parse program: {}", e);
            std::process::exit(1);
        }
    };

    let program = match raw.into_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Conversion successful! '{}' with {} step(s) and {} I/O point(s).",
        program.name,
        program.total_steps,
        program.io_list.len()
    );

    // Export phase
    println!("\nWriting export artifacts");

    let notes = NotesFormatter::format_program(&program);
    let notes_path = format!("{}/program_notes.txt", TMP_DIR);
    if let Err(e) = fs::write(&notes_path, notes) {
        eprintln!("Failed to write notes export: {}", e);
        std::process::exit(1);
    }
    println!("  -> Wrote notes export to '{}'", notes_path);

    let variables = format_variables(&program);
    let variables_path = format!("{}/program_variables.txt", TMP_DIR);
    if let Err(e) = fs::write(&variables_path, variables) {
        eprintln!("Failed to write variable dump: {}", e);
        std::process::exit(1);
    }
    println!("  -> Wrote variable dump to '{}'", variables_path);

    let io_text = format_io_as_text(&program.io_list);
    let io_path = format!("{}/io_list.txt", TMP_DIR);
    if let Err(e) = fs::write(&io_path, io_text) {
        eprintln!("Failed to write I/O list: {}", e);
        std::process::exit(1);
    }
    println!("  -> Wrote I/O list to '{}'", io_path);

    println!("\nDone!");
}
