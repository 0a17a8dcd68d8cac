//! # Seed Data Generator
//!
//! Populates the database with sample customers for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 customers (default)
//! cargo run -p clientele-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p clientele-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p clientele-db --bin seed -- --db ./data/clientele.db
//! ```
//!
//! Each customer gets a unique phone `555-NNNN`, so re-running the seed
//! upserts the same rows instead of duplicating them. Every tenth customer
//! is blocked to give `/customers.getAllActive` something to filter.

use std::env;

use clientele_core::validation::validate_save;
use clientele_core::NEW_CUSTOMER_ID;
use clientele_db::{Database, DbConfig};

const FIRST_NAMES: &[&str] = &[
    "Ann", "Bob", "Carla", "Dmitri", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jamal",
    "Kira", "Luis", "Mona", "Nils", "Olga", "Priya", "Quinn", "Rosa", "Sven", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Brooks", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Hansen", "Ivanova", "Jones",
];

/// Phone numbers are 4-digit suffixes, so the seed tops out here.
const MAX_COUNT: usize = 10_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./clientele_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let Some(value) = args.get(i + 1) else {
                    anyhow::bail!("--count requires a value");
                };
                count = parse_count(value)?;
                i += 1;
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Clientele Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of customers to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./clientele_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let count = count.min(MAX_COUNT);

    println!("Clientele Seed Data Generator");
    println!("=============================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    let repo = db.customers();
    let start = std::time::Instant::now();
    let mut saved = 0;

    for n in 0..count {
        let name = format!(
            "{} {}",
            FIRST_NAMES[n % FIRST_NAMES.len()],
            LAST_NAMES[(n / FIRST_NAMES.len()) % LAST_NAMES.len()]
        );
        let phone = format!("555-{:04}", n);
        let input = validate_save(NEW_CUSTOMER_ID, &name, &phone)?;

        let customer = match repo.save(&input).await {
            Ok(customer) => customer,
            Err(e) => {
                eprintln!("Failed to save {}: {}", phone, e);
                continue;
            }
        };

        if n % 10 == 9 {
            repo.block_by_id(customer.id).await?;
        }

        saved += 1;
    }

    println!();
    println!("✓ Saved {} customers in {:?}", saved, start.elapsed());
    println!("  Total rows:  {}", repo.count().await?);
    println!("  Active rows: {}", repo.all_active().await?.len());

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Parses the `--count` argument; anything but a non-negative integer is an error.
fn parse_count(raw: &str) -> anyhow::Result<usize> {
    raw.parse::<usize>()
        .map_err(|e| anyhow::anyhow!("invalid --count value {:?}: {}", raw, e))
}
