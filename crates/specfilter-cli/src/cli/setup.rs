use clap::{Args, Parser, Subcommand};
use specfilter::api::{Color, OutputFormat, Size};
use specfilter::criteria::Criteria;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "specfilter",
    bin_name = "specfilter",
    version,
    disable_help_subcommand = true,
    after_help = "Examples:\n  specfilter filter --color green --size large\n  specfilter filter --color red --color blue --not\n  specfilter --output json list"
)]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON catalog to read instead of the built-in demo catalog
    #[arg(short, long, global = true, help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true, value_parser = parse_output, help_heading = "Options")]
    pub output: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every product in the catalog
    #[command(alias = "ls")]
    List,

    /// Show the products matching the given criteria
    #[command(alias = "f")]
    Filter(FilterArgs),

    /// Walk through the green / green-and-large example
    Demo,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Match this color (repeatable, values are alternatives)
    #[arg(long = "color", value_parser = parse_color)]
    pub colors: Vec<Color>,

    /// Match this size (repeatable, values are alternatives)
    #[arg(long = "size", value_parser = parse_size)]
    pub sizes: Vec<Size>,

    /// Match names containing this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Match products satisfying any clause instead of all of them
    #[arg(long)]
    pub any: bool,

    /// Invert the match
    #[arg(long = "not")]
    pub negate: bool,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> Criteria {
        let mut criteria = Criteria::new().match_any(self.any).negate(self.negate);
        for &color in &self.colors {
            criteria = criteria.color(color);
        }
        for &size in &self.sizes {
            criteria = criteria.size(size);
        }
        if let Some(name) = &self.name {
            criteria = criteria.name(name.clone());
        }
        criteria
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e: specfilter::error::SpecFilterError| e.to_string())
}

fn parse_size(s: &str) -> Result<Size, String> {
    s.parse().map_err(|e: specfilter::error::SpecFilterError| e.to_string())
}

fn parse_output(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: specfilter::error::SpecFilterError| e.to_string())
}
