mod render;
mod setup;

use anyhow::Context;
use clap::Parser;
use specfilter::api::{CatalogApi, Color, OutputFormat, Size, SpecFilterConfig};
use specfilter::catalog::Catalog;
use specfilter::spec::{And, ColorSpecification, SizeSpecification, SpecificationExt};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use render::{render_demo, render_selection, DemoSection};
use setup::{Cli, Commands};

/// Environment variable holding a tracing filter directive (e.g. `debug`).
pub const LOG_ENV: &str = "SPECFILTER_LOG";

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = SpecFilterConfig::load(&cwd).map_err(|e| anyhow::anyhow!("{}", e))?;
    let output = cli.output.unwrap_or(config.output);

    let catalog = load_catalog(cli.catalog.clone().or_else(|| config.catalog_path(&cwd)))?;
    let api = CatalogApi::new(catalog);

    let rendered = match cli.command.unwrap_or(Commands::List) {
        Commands::List => render_selection("all products", &api.list(), output)?,
        Commands::Filter(args) => {
            let criteria = args.to_criteria();
            render_selection(&criteria.to_string(), &api.select(&criteria), output)?
        }
        Commands::Demo => run_demo(&api, output)?,
    };

    print!("{}", rendered);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using catalog file");
            read_catalog(&path)
        }
        None => {
            tracing::debug!("using demo catalog");
            Ok(Catalog::demo())
        }
    }
}

fn read_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::load(path)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("could not read catalog {}", path.display()))
}

/// Green things, then green-and-large things built two ways: an explicit
/// `And` over borrowed leaf specifications, and fluent composition.
fn run_demo(api: &CatalogApi, output: OutputFormat) -> anyhow::Result<String> {
    let green = ColorSpecification::new(Color::Green);
    let large = SizeSpecification::new(Size::Large);
    let green_and_large = And::new(&green, &large);
    let composed = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));

    let sections = [
        DemoSection {
            key: "green",
            label: "green",
            selection: api.select_with(&green),
        },
        DemoSection {
            key: "green_and_large",
            label: "green and large",
            selection: api.select_with(&green_and_large),
        },
        DemoSection {
            key: "green_and_large_composed",
            label: "green and large",
            selection: api.select_with(&composed),
        },
    ];

    render_demo(&sections, output)
}
