#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::io::Write;

use resdb::config::ToolConfig;
use resdb::import::import_file;
use resdb::query::dsl::predicate;
use resdb::{ResourceDatabase, Statement};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resdb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match ToolConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: statements_file={}, select_predicate={:?}, dump={}",
        config.statements_file.display(),
        config.select_predicate,
        config.dump
    );

    let mut database = ResourceDatabase::new();
    match import_file(&mut database, &config.statements_file) {
        Ok(count) => tracing::info!("imported {count} statements"),
        Err(e) => {
            tracing::error!(
                "Failed to import {}: {e}",
                config.statements_file.display()
            );
            std::process::exit(1);
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = if let Some(name) = &config.select_predicate {
        print_matching(&database, name, &mut out)
    } else if config.dump {
        database.write_dump(&mut out).map_err(|e| e.to_string())
    } else {
        Ok(())
    };

    if let Err(e) = written.and_then(|()| out.flush().map_err(|e| e.to_string())) {
        tracing::error!("Failed to write output: {e}");
        std::process::exit(1);
    }
}

/// Print every statement whose predicate is `name`.
fn print_matching(
    database: &ResourceDatabase,
    name: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let statements: Vec<Statement> = database
        .select_statements(&predicate().equals(name))
        .map_err(|e| e.to_string())?;
    tracing::info!("{} statements with predicate {name}", statements.len());
    for statement in statements {
        writeln!(out, "{statement}").map_err(|e| e.to_string())?;
    }
    Ok(())
}
