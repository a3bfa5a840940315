use clap::Parser;
use sqldmn::prelude::*;
use sqldmn::ui::ConvertResponse;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A SQL to DMN decision table converter CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a file containing the SQL query to convert
    query_path: Option<String>,

    /// Convert this query text instead of reading it from a file
    #[arg(short, long)]
    query: Option<String>,

    /// Write the DMN XML document to this path
    #[arg(long)]
    xml_out: Option<String>,

    /// Write the Mermaid diagram to this path
    #[arg(long)]
    diagram_out: Option<String>,

    /// Write the full JSON response to this path
    #[arg(long)]
    json_out: Option<String>,

    /// Write a binary conversion record to this path
    #[arg(long)]
    record_out: Option<String>,

    /// Use a fixed document identifier instead of the wall clock
    #[arg(long)]
    id: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

/// The output files requested for one run; every field is optional.
#[derive(Debug, Default)]
struct Outputs {
    xml: Option<String>,
    diagram: Option<String>,
    json: Option<String>,
    record: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_conversion(sql: String, outputs: Outputs, fixed_id: Option<String>) {
    let total_start = Instant::now();

    // --- 1. Converter Setup ---
    let converter = match fixed_id {
        Some(id) => Converter::builder()
            .with_id_source(Box::new(FixedIdSource::new(&id)))
            .build(),
        None => Converter::new(),
    };

    // --- 2. Conversion ---
    println!("\nConverting SQL query to DMN...");
    let convert_start = Instant::now();
    let conversion = converter
        .convert(&sql)
        .unwrap_or_else(|e| exit_with_error(&format!("Conversion failed: {}", e)));
    let convert_duration = convert_start.elapsed();

    // --- 3. Results ---
    let table = &conversion.table;
    println!("\nConversion Finished!");
    println!("  -> Decision: {}", table.name);
    println!("  -> Inputs: {}", table.inputs.len());
    for input in &table.inputs {
        println!("     - {} ({})", input.name, input.input_type);
    }
    println!("  -> Rules: {}", table.rules.len());
    for rule in &table.rules {
        println!("     - when {} then {}", rule.condition, rule.output);
    }
    match &conversion.diagram {
        Ok(diagram) => println!("  -> Diagram: {} line(s)", diagram.lines().count()),
        Err(e) => println!("  -> Diagram unavailable: {}", e),
    }

    // --- 4. Output Files ---
    let write_start = Instant::now();
    if let Some(path) = &outputs.xml {
        write_output(path, &table.xml, "DMN XML");
    }
    if let Some(path) = &outputs.diagram {
        match &conversion.diagram {
            Ok(diagram) => write_output(path, diagram, "diagram"),
            Err(e) => eprintln!("Skipping diagram output, none was rendered: {}", e),
        }
    }
    if let Some(path) = &outputs.json {
        let response = ConvertResponse::success(&conversion);
        let json = serde_json::to_string_pretty(&response)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize response: {}", e)));
        write_output(path, &json, "JSON response");
    }
    if let Some(path) = &outputs.record {
        conversion.into_record().save(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to save record to '{}': {}", path, e))
        });
        println!("Saved conversion record to '{}'", path);
    }
    let write_duration = write_start.elapsed();

    // --- 5. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("Conversion:      {:?}", convert_duration);
    println!("Output Writing:  {:?}", write_duration);
    println!("---------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let sql = if let Some(query) = cli.query {
        query
    } else if let Some(path) = cli.query_path {
        fs::read_to_string(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read query file '{}': {}", &path, e))
        })
    } else {
        exit_with_error("A query file path or --query is required in non-interactive mode.");
    };

    let outputs = Outputs {
        xml: cli.xml_out,
        diagram: cli.diagram_out,
        json: cli.json_out,
        record: cli.record_out,
    };

    run_conversion(sql, outputs, cli.id);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Sqldmn Interactive Mode ---");

    let sql = prompt_for_input(
        "Enter SQL query",
        Some("SELECT * FROM orders WHERE status = active AND total > 100"),
    );
    let xml_out = prompt_for_input("Enter DMN XML output path (optional)", Some("decision.dmn"));
    let diagram_out = prompt_for_input("Enter diagram output path (optional)", None);

    let outputs = Outputs {
        xml: if xml_out.is_empty() { None } else { Some(xml_out) },
        diagram: if diagram_out.is_empty() {
            None
        } else {
            Some(diagram_out)
        },
        ..Outputs::default()
    };

    run_conversion(sql, outputs, None);
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

fn write_output(path: &str, contents: &str, label: &str) {
    fs::write(path, contents).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to write {} to '{}': {}", label, path, e))
    });
    println!("Saved {} to '{}'", label, path);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
