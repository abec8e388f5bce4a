//! Lunchly — CLI
//!
//! Command-line access to the customer and reservation store.
//!
//! ```sh
//! # Create tables in the configured database
//! lunchly init
//!
//! # List, search and rank customers
//! lunchly customers
//! lunchly search jan
//! lunchly best --json
//!
//! # Add records
//! lunchly add-customer --first Jane --last Doe --phone 555-1234
//! lunchly add-reservation --customer 1 --guests 4 --start 2024-01-01T18:30:00
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use lunchly::config::AppConfig;
use lunchly::domain::reservation::parse_start_at;
use lunchly::telemetry::init_tracing;
use lunchly::{
    close_database, create_schema, init_database, Customer, DomainResult, RepositoryProvider,
    Reservation, SeaOrmRepositoryProvider,
};

/// Lunchly — customers and reservations of the restaurant.
#[derive(Parser, Debug)]
#[command(name = "lunchly", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "LUNCHLY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the customers and reservations tables if missing.
    Init,
    /// List all customers by last name.
    Customers,
    /// Show one customer and their reservations.
    Customer { id: i32 },
    /// Find customers whose full name contains the text.
    Search { name: String },
    /// Top 10 customers by number of reservations.
    Best,
    /// Add a new customer.
    AddCustomer {
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Add a reservation for an existing customer.
    AddReservation {
        #[arg(long)]
        customer: i32,
        #[arg(long)]
        guests: i32,
        /// Start time, e.g. 2024-01-01T18:30:00
        #[arg(long)]
        start: String,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(lunchly::default_config_path);
    let (mut config, load_error) = if config_path.exists() {
        match AppConfig::load(&config_path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (AppConfig::default(), Some(e)),
        }
    } else {
        (AppConfig::default(), None)
    };
    config.apply_env();
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config.logging);
    if let Some(e) = load_error {
        error!("Failed to load config from {}: {}", config_path.display(), e);
        error!("Using default configuration.");
    }

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&config.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    if matches!(cli.command, Command::Init) {
        create_schema(&db).await?;
        info!("Tables created");
        close_database(db).await?;
        return Ok(());
    }

    let repos = SeaOrmRepositoryProvider::new(db.clone());
    let result = run(&repos, cli.command, cli.json).await;

    close_database(db).await?;
    result?;
    Ok(())
}

async fn run(repos: &dyn RepositoryProvider, command: Command, json: bool) -> DomainResult<()> {
    match command {
        Command::Init => {}
        Command::Customers => print_customers(&repos.customers().all().await?, json),
        Command::Search { name } => {
            print_customers(&repos.customers().search_by_name(&name).await?, json)
        }
        Command::Best => print_customers(&repos.customers().best_customers().await?, json),
        Command::Customer { id } => {
            let customer = repos.customers().get(id).await?;
            let reservations = customer.reservations(repos.reservations()).await?;
            if json {
                let body = serde_json::json!({
                    "customer": customer,
                    "reservations": reservations,
                });
                println!("{}", body);
            } else {
                println!("{}", customer_line(&customer));
                if !customer.notes().is_empty() {
                    println!("  notes: {}", customer.notes());
                }
                for r in &reservations {
                    println!("  {}", reservation_line(r));
                }
            }
        }
        Command::AddCustomer {
            first,
            last,
            phone,
            notes,
        } => {
            let mut customer = Customer::new(first, last);
            customer.set_phone(phone.as_deref());
            customer.set_notes(notes.as_deref());
            repos.customers().save(&mut customer).await?;
            info!("Customer saved: {}", customer.full_name());
            print_customers(std::slice::from_ref(&customer), json);
        }
        Command::AddReservation {
            customer,
            guests,
            start,
            notes,
        } => {
            // fail with NotFound before inserting a dangling reservation
            repos.customers().get(customer).await?;
            let mut reservation = Reservation::new(customer, guests, parse_start_at(&start)?)?;
            reservation.set_notes(notes.as_deref());
            repos.reservations().save(&mut reservation).await?;
            if json {
                println!("{}", serde_json::json!(reservation));
            } else {
                println!("{}", reservation_line(&reservation));
            }
        }
    }
    Ok(())
}

fn print_customers(customers: &[Customer], json: bool) {
    if json {
        println!("{}", serde_json::json!(customers));
        return;
    }
    for c in customers {
        println!("{}", customer_line(c));
    }
}

fn customer_line(c: &Customer) -> String {
    let id = c.id().map(|id| id.to_string()).unwrap_or_default();
    let mut line = format!("#{:<4} {}", id, c.full_name());
    if let Some(phone) = c.phone() {
        line.push_str(&format!("  ({})", phone));
    }
    if c.reservation_count() > 0 {
        line.push_str(&format!("  [{} reservations]", c.reservation_count()));
    }
    line
}

fn reservation_line(r: &Reservation) -> String {
    let mut line = format!("{}  party of {}", r.formatted_start_at(), r.num_guests());
    if !r.notes().is_empty() {
        line.push_str(&format!("  - {}", r.notes()));
    }
    line
}
