#[cfg(not(feature = "cli"))]
compile_error!("The `refx` binary requires the `cli` feature. Build with `--features cli`.");

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::process;

use refdb::cli;
use refdb::cli::app::{Cli, ColorMode, Commands};
use refdb::RefdbError;

fn main() {
    let cli = Cli::parse();

    // Pipeline diagnostics go to stderr, controlled by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let writer_result: Result<Box<dyn Write>, RefdbError> = match &cli.output {
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|e| RefdbError::Io(format!("Cannot create {}: {}", path, e))),
        None => Ok(Box::new(std::io::stdout()) as Box<dyn Write>),
    };

    let mut writer = match writer_result {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Extract {
            root,
            database,
            table,
            cap,
            json,
        } => cli::extract::execute(
            &cli::extract::ExtractOptions {
                root,
                database,
                table,
                cap,
                json,
            },
            &mut writer,
        ),

        Commands::Tables {
            root,
            database,
            cap,
            json,
        } => cli::tables::execute(
            &cli::tables::TablesOptions {
                root,
                database,
                cap,
                json,
            },
            &mut writer,
        ),

        Commands::Archives {
            root,
            database,
            json,
        } => cli::archives::execute(
            &cli::archives::ArchivesOptions {
                root,
                database,
                json,
            },
            &mut writer,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
