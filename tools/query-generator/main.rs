use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use sqldmn::ui::ConvertRequest;
use std::fs;

/// A CLI tool to generate sample SQL queries for the sqldmn converter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_queries.json")]
    output: String,

    /// The number of queries to generate
    #[arg(long, default_value_t = 25)]
    count: usize,

    /// The maximum number of AND-joined conditions per query
    #[arg(long, default_value_t = 4)]
    max_conditions: usize,
}

const TABLES: [&str; 5] = ["orders", "customers", "shipments", "invoices", "products"];
const COLUMNS: [&str; 8] = [
    "status", "total", "region", "priority", "quantity", "category", "age", "discount",
];
const OPERATORS: [&str; 6] = ["=", ">", "<", ">=", "<=", "!="];
const WORD_VALUES: [&str; 6] = ["active", "pending", "closed", "gold", "north", "retail"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.max_conditions == 0 {
        eprintln!("Error: --max-conditions must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} quer(ies) with up to {} condition(s) each...",
        cli.count, cli.max_conditions
    );

    let requests: Vec<ConvertRequest> = (0..cli.count)
        .map(|_| ConvertRequest {
            sql: generate_query(&mut rng, cli.max_conditions),
        })
        .collect();

    let with_where = requests.iter().filter(|r| r.sql.contains("WHERE")).count();
    println!("-> {} quer(ies) carry a WHERE clause.", with_where);

    let json_output = serde_json::to_string_pretty(&requests)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved queries to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates one SELECT query. Roughly one query in five has no WHERE
/// clause at all, exercising the empty-table path of the converter.
fn generate_query(rng: &mut ThreadRng, max_conditions: usize) -> String {
    let table = TABLES[rng.random_range(0..TABLES.len())];

    if rng.random_range(0..5) == 0 {
        return format!("SELECT * FROM {}", table);
    }

    let condition_count = rng.random_range(1..=max_conditions);
    let conditions: Vec<String> = (0..condition_count)
        .map(|_| generate_condition(rng))
        .collect();

    format!(
        "SELECT * FROM {} WHERE {}",
        table,
        conditions.join(" AND ")
    )
}

fn generate_condition(rng: &mut ThreadRng) -> String {
    let column = COLUMNS[rng.random_range(0..COLUMNS.len())];
    let operator = OPERATORS[rng.random_range(0..OPERATORS.len())];

    // Equality reads better against words, the rest against numbers
    let value = if operator == "=" && rng.random_range(0..2) == 0 {
        WORD_VALUES[rng.random_range(0..WORD_VALUES.len())].to_string()
    } else {
        rng.random_range(1..1000).to_string()
    };

    format!("{} {} {}", column, operator, value)
}
