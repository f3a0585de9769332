//! Command-line shell for the course catalog.
//!
//! The shell owns all user interaction; the data-access layer below it knows
//! nothing about presentation. Startup loads the configuration, selects the
//! backend, and runs the first-run bootstrap when the initialized flag is
//! still unset.

mod commands;
pub mod error;
mod utils;

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::db::{Backend, initialize};

#[derive(Parser)]
#[command(name = "coursecat")]
#[command(author, version, about = "Course catalog manager", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses with filtering and pagination
    List {
        /// Course type id, or "all"
        #[arg(long = "type", default_value = "all")]
        course_type: String,
        /// Department id, or "all"
        #[arg(long, default_value = "all")]
        department: String,
        /// Case-insensitive substring match on the course name
        #[arg(long)]
        search: Option<String>,
        /// Page number (starting at 1)
        #[arg(long, default_value = "1")]
        page: u64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show the course card
    Show {
        /// Course id
        id: i64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add a new course
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Department id
        #[arg(long)]
        department: i64,
        /// Course type id
        #[arg(long = "type")]
        course_type: i64,
    },
    /// Overwrite an existing course
    Edit {
        /// Course id
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Department id
        #[arg(long)]
        department: i64,
        /// Course type id
        #[arg(long = "type")]
        course_type: i64,
    },
    /// Delete a course
    Delete {
        /// Course id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List departments
    Departments {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List course types
    Types {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursecat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> miette::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    let backend = Backend::from_config(&config.database)?;

    if !config.app.initialized {
        info!("first run: creating schema and seed data");
        initialize(&backend).await?;
        config.app.initialized = true;
        config.save(&cli.config)?;
    }

    let output = match cli.command {
        Commands::List {
            course_type,
            department,
            search,
            page,
            format,
        } => {
            commands::course::list(
                &backend,
                &course_type,
                &department,
                search.as_deref(),
                page,
                &format,
            )
            .await
        }
        Commands::Show { id, format } => commands::course::show(&backend, id, &format).await,
        Commands::Add {
            name,
            description,
            department,
            course_type,
        } => {
            commands::course::add(
                &backend,
                &name,
                description.as_deref(),
                department,
                course_type,
            )
            .await
        }
        Commands::Edit {
            id,
            name,
            description,
            department,
            course_type,
        } => {
            commands::course::edit(
                &backend,
                id,
                &name,
                description.as_deref(),
                department,
                course_type,
            )
            .await
        }
        Commands::Delete { id, yes } => commands::course::delete(&backend, id, yes).await,
        Commands::Departments { format } => {
            commands::reference::departments(&backend, &format).await
        }
        Commands::Types { format } => commands::reference::course_types(&backend, &format).await,
    };

    match output {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
