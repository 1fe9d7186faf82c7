//! # Seed Data Generator
//!
//! Runs the first-run seeding check against a database file.
//!
//! ## Usage
//! ```bash
//! # Seed ./stockroom_dev.db (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! A store that already holds products is left untouched.

use clap::Parser;
use std::path::PathBuf;
use stockroom_db::{Database, DbConfig, SeedOutcome, Seeder, SEED_BATCH_SIZE};

#[derive(Debug, Parser)]
#[command(name = "seed")]
#[command(about = "Stockroom Seed Data Generator")]
struct Args {
    /// Database file path
    #[arg(short, long, default_value = "./stockroom_dev.db")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let db_path = args.db;

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path.display());
    println!("Batch:    {} products", SEED_BATCH_SIZE);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let start = std::time::Instant::now();
    let seeder = Seeder::new(db.products());

    match seeder.seed_if_empty().await? {
        SeedOutcome::Seeded(count) => {
            println!("✓ Generated {} products in {:?}", count, start.elapsed());
        }
        SeedOutcome::AlreadyPopulated(existing) => {
            println!("⚠ Database already has {} products", existing);
            println!("  Skipping seed to avoid duplicates.");
            println!("  Delete the database file to regenerate.");
        }
        SeedOutcome::InFlight => {
            println!("⚠ Seeding already in progress");
        }
    }

    let newest = db.products().list_recent().await?;
    if let Some(product) = newest.first() {
        println!();
        println!(
            "  Newest: #{} {} ({} × {})",
            product.id,
            product.name,
            product.quantity,
            product.price()
        );
    }

    db.close().await;
    Ok(())
}
