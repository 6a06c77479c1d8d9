//! rollcall CLI
//!
//! Command-line interface for the guest/event directory

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rollcall_core::logging_facility::{self, Profile};

mod commands;

use commands::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    /// Human-readable logs on stderr, debug level
    Dev,
    /// JSON logs on stderr, info level
    Prod,
    /// No logging
    Quiet,
}

#[derive(Debug, Parser)]
#[command(name = "rollcall")]
#[command(about = "rollcall - guests, events and who attends what", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, env = "ROLLCALL_DB", default_value = ".rollcall/rollcall.db")]
    db: PathBuf,

    #[arg(long, global = true, env = "ROLLCALL_LOG", value_enum, default_value_t = LogMode::Quiet)]
    log: LogMode,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database and apply migrations
    Init,
    /// Reset the database and run the sample scenario
    Demo,
    /// Guest operations
    Guest(commands::guest::GuestArgs),
    /// Event operations
    Event(commands::event::EventArgs),
    /// Membership operations
    Member(commands::member::MemberArgs),
    /// Directory queries
    Query(commands::query::QueryArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogMode::Dev => logging_facility::init(Profile::Development),
        LogMode::Prod => logging_facility::init(Profile::Production),
        LogMode::Quiet => {}
    }

    let ctx = Context {
        db: cli.db,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(&ctx),
        Commands::Demo => commands::demo::execute(&ctx),
        Commands::Guest(args) => commands::guest::execute(&ctx, args),
        Commands::Event(args) => commands::event::execute(&ctx, args),
        Commands::Member(args) => commands::member::execute(&ctx, args),
        Commands::Query(args) => commands::query::execute(&ctx, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
