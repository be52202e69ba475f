use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use dotenv::dotenv;
use photo_mirror::cli::{Cli, Commands};
use photo_mirror::config::{self, AppConfig};
use photo_mirror::library::JsonCatalog;
use photo_mirror::{ambiguity, extensions, logging, mirror, report, verify};
use std::path::Path;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let result = match &args.command {
        Some(Commands::Scan) => run_scan(&args),
        Some(Commands::Mirror) => run_mirror(&args),
        Some(Commands::Verify) => run_verify(&args),
        Some(Commands::PrintConfig) => run_print_config(&args),
        None => {
            let _ = Cli::command().print_long_help();
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// Config.toml values with CLI overrides applied. Both paths must end up
/// non-empty for any command that touches the tree or the library.
fn effective_config(args: &Cli) -> Result<AppConfig> {
    let mut config = config::load_configuration().context("Error loading configuration")?;

    if let Some(export_path) = &args.export_path {
        config.export_path = export_path.clone();
    }
    if let Some(library_path) = &args.library_path {
        config.library_path = library_path.clone();
    }

    if config.export_path.is_empty() {
        bail!("No export path configured (set export_path in Config.toml or pass --export-path)");
    }

    Ok(config)
}

fn run_scan(args: &Cli) -> Result<()> {
    let config = effective_config(args)?;
    let root = Path::new(&config.export_path);

    let media_extensions = extensions::collect_extensions(root)?;
    info!("{} media extensions found", media_extensions.len());

    let flagged = ambiguity::find_ambiguous(root, &media_extensions)?;

    println!("Folders that contain files and folders:");
    if flagged.is_empty() {
        println!("None found.");
    } else {
        for path in &flagged {
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn run_mirror(args: &Cli) -> Result<()> {
    let config = effective_config(args)?;
    if config.library_path.is_empty() {
        bail!("No library path configured (set library_path in Config.toml or pass --library-path)");
    }
    let root = Path::new(&config.export_path);

    let media_extensions = extensions::collect_extensions(root)?;
    info!("{} media extensions found", media_extensions.len());

    let expected = mirror::expected_counts(root, &media_extensions)?;
    info!(
        "Expecting to create {} folders and {} albums",
        expected.folders, expected.albums
    );

    // The only fatal failure: no library, no run.
    let mut library = JsonCatalog::open(Path::new(&config.library_path))?;
    info!("Library \"{}\" opened", config.library_path);

    info!("Starting in directory \"{}\"", root.display());
    let counts = mirror::mirror_tree(root, None, &mut library, &media_extensions)?;

    if mirror::reconcile(&expected, &counts) {
        println!(
            "{}",
            format!(
                "Created {} folders and {} albums, all as expected.",
                counts.folders_created, counts.albums_created
            )
            .green()
        );
    } else {
        println!(
            "{}",
            "Created counts do not match expected counts. See the log for failures.".red()
        );
    }

    info!("Mirror run finished.");
    Ok(())
}

fn run_verify(args: &Cli) -> Result<()> {
    let config = effective_config(args)?;
    if config.library_path.is_empty() {
        bail!("No library path configured (set library_path in Config.toml or pass --library-path)");
    }
    let root = Path::new(&config.export_path);

    let library = JsonCatalog::open(Path::new(&config.library_path))?;
    info!("Library \"{}\" opened", config.library_path);

    let outcome = verify::verify_import(&library, root)?;

    if !outcome.missing.is_empty() {
        report::write_missing_report(Path::new(&config.report_path), &outcome.missing)?;
        info!("See {} for list of missing items.", config.report_path);
        println!(
            "{}",
            format!(
                "{} of {} albums are missing items. Report written to {}.",
                outcome.albums_with_problems.len(),
                outcome.albums_checked,
                config.report_path
            )
            .red()
        );
    } else {
        println!(
            "{}",
            format!("All {} albums verified, nothing missing.", outcome.albums_checked).green()
        );
    }

    info!("Verify run finished.");
    Ok(())
}

fn run_print_config(args: &Cli) -> Result<()> {
    let config = effective_config(args)?;
    println!("export_path:  {}", config.export_path);
    println!("library_path: {}", config.library_path);
    println!("report_path:  {}", config.report_path);
    Ok(())
}
