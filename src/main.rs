use clap::Parser;
use colored::Colorize;
use compose_gen::{
    cli::Cli,
    common::file_utils::LocalFileStore,
    config,
    generator::TeraRenderer,
    prompt::TerminalPrompt,
    wizard::{GenerateOutcome, GenerateRequest, GenerateWizard},
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> compose_gen::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();

    let file_config = config::load_config(cli.config.as_deref())?;

    if !cli.quiet && !cli.json && !cli.dry_run {
        println!("compose-gen - interactive docker-compose.yml generator");
        println!("Answer a few questions to scaffold your compose file.");
        println!();
    }

    // Blank paths fall through to the wizard's default.
    let config_path = (!file_config.output.path.is_empty())
        .then(|| PathBuf::from(&file_config.output.path));
    let request = GenerateRequest {
        output_path: cli.output.clone().or(config_path),
        force: cli.force || file_config.output.overwrite_existing,
        dry_run: cli.dry_run,
    };

    let prompt = TerminalPrompt::new();
    let files = LocalFileStore;
    let renderer = TeraRenderer::new()?;
    let wizard = GenerateWizard::new(&prompt, &files, &renderer);

    let outcome = wizard.run(&request)?;

    if cli.dry_run {
        println!("--- {} (dry run) ---", outcome.path.display());
        println!("{}", outcome.content);
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary(&outcome))?);
        return Ok(());
    }

    if !cli.quiet {
        report(&outcome);
    }

    Ok(())
}

#[derive(Serialize)]
struct RunSummary<'a> {
    path: &'a Path,
    project_name: &'a str,
    framework: &'a str,
    database: Option<DatabaseSummary<'a>>,
}

#[derive(Serialize)]
struct DatabaseSummary<'a> {
    engine: &'a str,
    version: &'a str,
    port: &'a str,
}

fn summary(outcome: &GenerateOutcome) -> RunSummary<'_> {
    let config = &outcome.config;

    RunSummary {
        path: &outcome.path,
        project_name: &config.project_name,
        framework: config.framework.map(|f| f.display_name()).unwrap_or(""),
        database: config.database.is_enabled().then(|| DatabaseSummary {
            engine: config.database.db_type.display_name(),
            version: &config.database.version,
            port: &config.database.port,
        }),
    }
}

fn report(outcome: &GenerateOutcome) {
    let config = &outcome.config;

    println!();
    println!(
        "✅ {}",
        format!("Generated {}", outcome.path.display()).green()
    );
    println!("   Project:   {}", config.project_name);
    println!(
        "   Framework: {}",
        config.framework.map(|f| f.display_name()).unwrap_or("")
    );
    if config.database.is_enabled() {
        println!(
            "   Database:  {} {} (port {})",
            config.database.db_type.display_name(),
            config.database.version,
            config.database.port
        );
    } else {
        println!("   Database:  none");
    }
    println!();
    println!("Next steps:");
    println!("  docker compose up -d");
}
