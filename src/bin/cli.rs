//! FolioDB CLI
//!
//! Command-line interface for inspecting and editing a FolioDB directory.

use clap::{Parser, Subcommand};
use foliodb::{Driver, Level, Options};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// FolioDB CLI
#[derive(Parser, Debug)]
#[command(name = "foliodb-cli")]
#[command(about = "CLI for the FolioDB JSON document store")]
#[command(version)]
struct Args {
    /// Database root directory
    #[arg(short, long, default_value = "./foliodb_data")]
    dir: String,

    /// Log level (fatal, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store a JSON document
    Write {
        collection: String,
        resource: String,

        /// The document, as JSON text
        json: String,
    },

    /// Print one document
    Read {
        collection: String,
        resource: String,
    },

    /// Print every document in a collection
    ReadAll { collection: String },

    /// Delete a document (or the whole collection when no resource is given)
    Delete {
        collection: String,
        resource: Option<String>,
    },

    /// Fill a collection with sample employee records
    Seed {
        #[arg(default_value = "users")]
        collection: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Address {
    city: String,
    state: String,
    country: String,
    pin_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    name: String,
    age: String,
    contact: String,
    company: String,
    address: Address,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,foliodb={}", tracing_filter(&args.log_level))));

    fmt().with_env_filter(filter).with_target(true).init();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> foliodb::Result<()> {
    let level: Level = args.log_level.parse()?;
    let options = Options::builder().log_level(level).build();
    let db = Driver::open(&args.dir, options)?;

    match args.command {
        Commands::Write { collection, resource, json } => {
            let value: Value = serde_json::from_str(&json)?;
            db.write(&collection, &resource, &value)?;
        }
        Commands::Read { collection, resource } => {
            let value: Value = db.read(&collection, &resource)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::ReadAll { collection } => {
            for record in db.read_all(&collection)? {
                print!("{}", record);
            }
        }
        Commands::Delete { collection, resource } => {
            db.delete(&collection, resource.as_deref().unwrap_or_default())?;
        }
        Commands::Seed { collection } => {
            for user in sample_users() {
                db.write(&collection, &user.name, &user)?;
            }
            let users: Vec<User> = db.read_all_as(&collection)?;
            for user in users {
                println!("{:?}", user);
            }
        }
    }

    Ok(())
}

/// Map a FolioDB level name onto a tracing filter directive
fn tracing_filter(level: &str) -> &'static str {
    match level.parse::<Level>() {
        Ok(Level::Fatal) | Ok(Level::Error) => "error",
        Ok(Level::Warn) => "warn",
        Ok(Level::Debug) => "debug",
        Ok(Level::Trace) => "trace",
        _ => "info",
    }
}

fn sample_users() -> Vec<User> {
    let user = |name: &str, age: &str, contact: &str, company: &str, city: &str, state: &str, pin: &str| User {
        name: name.to_string(),
        age: age.to_string(),
        contact: contact.to_string(),
        company: company.to_string(),
        address: Address {
            city: city.to_string(),
            state: state.to_string(),
            country: "India".to_string(),
            pin_code: pin.to_string(),
        },
    };

    vec![
        user("Arnab", "29", "322444566", "DAPL", "Kolkata", "W.B.", "755855"),
        user("John", "23", "322444564", "Microsoft", "Bangalore", "Karnataka", "400014"),
        user("Harry", "25", "322444567", "Google", "Hyderabad", "Telangana", "500019"),
        user("Paul", "27", "422444567", "Adobe", "Mumbai", "Maharastra", "485669"),
        user("Rahul", "28", "453444567", "IBM", "Pune", "Maharastra", "610019"),
        user("Jane", "26", "453341567", "Twilio", "Bangalore", "Karnataka", "400017"),
    ]
}
