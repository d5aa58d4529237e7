//! The `vista search` command - one-shot query across the configured
//! providers, printed as text lines or JSON.

use clap::{Args, ValueEnum};
use console::Style;
use vista_core::{filter, Aggregator, Config, FetchOptions, Orientation, ProviderFactory};

/// Arguments for the `search` command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query text, e.g. "Paris Louvre"
    pub query: String,

    /// Keep only one orientation
    #[arg(long, value_enum)]
    pub orientation: Option<OrientationArg>,

    /// Drop records matching the content-exclusion vocabulary
    #[arg(long)]
    pub content_filter: bool,

    /// Fetch pages per provider (defaults to the configured max)
    #[arg(long)]
    pub pages: Option<u32>,

    /// Print records as JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

/// Orientation flag values.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(value: OrientationArg) -> Self {
        match value {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

/// Execute the search command.
pub async fn execute(args: SearchArgs, config: &Config) -> anyhow::Result<()> {
    let orientation = args.orientation.map(Orientation::from);
    let aggregator = Aggregator::new(ProviderFactory::from_config(config)?);

    let options = FetchOptions {
        orientation,
        max_pages: args.pages.unwrap_or(config.search.max_pages),
        page_size: config.search.fetch_batch_size,
    };

    let outcome = aggregator.fetch(&args.query, &options).await;

    let warn = Style::new().for_stderr().yellow();
    for failure in &outcome.failures {
        eprintln!("{}", warn.apply_to(format!("warning: {failure}")));
    }

    let records = filter::apply(
        outcome.records,
        orientation,
        args.content_filter || config.search.content_filter,
    );

    if records.is_empty() {
        eprintln!("No results for \"{}\"", args.query);
        return Ok(());
    }

    if args.json {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
        return Ok(());
    }

    let dim = Style::new().dim();
    for (i, record) in records.iter().enumerate() {
        let dimensions = match (record.width, record.height) {
            (Some(w), Some(h)) => format!("{w}x{h}"),
            _ => "unknown size".to_string(),
        };
        println!(
            "{:>3}. [{}] {} {}",
            i + 1,
            record.provider,
            record.description.as_deref().unwrap_or("(no description)"),
            dim.apply_to(format!("({dimensions})"))
        );
        println!("     {}", record.full_url);
        println!("     {}", dim.apply_to(&record.attribution));
    }
    eprintln!("{} results", records.len());

    Ok(())
}
