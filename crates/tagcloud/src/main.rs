/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tagcloud_core::{CloudFormat, Locale, Order, OrderBy, TagCloudArgs};
use tagcloud_processor::{
    io::{load_args, load_shortcode_args, load_tags},
    CloudOutput, Html, LinkPatterns, PlainText, Processor,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tag cloud
    Render {
        /// Path to the tags file (YAML/JSON)
        #[arg(index = 1)]
        tags: PathBuf,

        /// Path to an options file (YAML/JSON)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Sort key: name or count
        #[arg(long)]
        orderby: Option<String>,

        /// Sort direction: asc, desc or rand
        #[arg(long)]
        order: Option<String>,

        /// Maximum number of tags (0 for all)
        #[arg(short, long)]
        number: Option<usize>,

        #[arg(long)]
        smallest: Option<f64>,

        #[arg(long)]
        largest: Option<f64>,

        /// Font size unit, e.g. pt, px, em
        #[arg(long)]
        unit: Option<String>,

        /// Separator between links in flat format
        #[arg(long)]
        separator: Option<String>,

        /// Show the count after each tag
        #[arg(long)]
        show_count: bool,

        /// Seed for reproducible random order
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render the shortcode, using the tags file as the tag source
    Shortcode {
        /// Path to the tags file (YAML/JSON)
        #[arg(index = 1)]
        tags: PathBuf,

        /// Path to a shortcode arguments file (YAML/JSON)
        #[arg(long)]
        args: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Validate an options file
    Validate {
        /// Path to the options YAML/JSON file
        path: PathBuf,
    },
    /// Generate JSON schema for tag cloud options
    #[cfg(feature = "schema")]
    Schema,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Render plain text instead of HTML
    #[arg(long)]
    plain: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Locale for count text, e.g. de-DE
    #[arg(long)]
    locale: Option<String>,

    /// Directory holding <locale>.yaml files
    #[arg(long, requires = "locale")]
    locales_dir: Option<PathBuf>,
}

impl OutputArgs {
    fn processor(&self) -> Processor {
        match &self.locale {
            Some(id) => {
                let dir = self
                    .locales_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("locales"));
                Processor::with_locale(Locale::load(id, &dir))
            }
            None => Processor::new(),
        }
    }

    fn print(&self, output: &CloudOutput) -> Result<()> {
        if self.json {
            let json =
                serde_json::to_string_pretty(output).context("failed to serialize output")?;
            println!("{}", json);
        } else {
            println!("{}", output);
        }
        Ok(())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Format {
    Flat,
    List,
    Array,
}

impl From<Format> for CloudFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Flat => CloudFormat::Flat,
            Format::List => CloudFormat::List,
            Format::Array => CloudFormat::Array,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            tags,
            options,
            format,
            orderby,
            order,
            number,
            smallest,
            largest,
            unit,
            separator,
            show_count,
            seed,
            output,
        } => {
            let tags = load_tags(&tags)
                .with_context(|| format!("failed to load tags: {:?}", tags))?;

            let base = match &options {
                Some(path) => load_args(path)
                    .with_context(|| format!("failed to load options: {:?}", path))?,
                None => TagCloudArgs::default(),
            };
            let flags = TagCloudArgs {
                format: format.map(CloudFormat::from),
                orderby: orderby.map(OrderBy::from),
                order: order.map(Order::from),
                number,
                smallest,
                largest,
                unit,
                separator: separator.map(|s| unescape(&s)),
                show_count: show_count.then_some(true),
                seed,
                ..Default::default()
            };
            let options = base.merge(flags).resolve();
            debug!(?options, "resolved options");

            let processor = output.processor();
            let cloud = if output.plain {
                processor.generate_with::<PlainText>(&tags, &options)
            } else {
                processor.generate_with::<Html>(&tags, &options)
            };
            output.print(&cloud)?;
        }
        Commands::Shortcode { tags, args, output } => {
            let tags = load_tags(&tags)
                .with_context(|| format!("failed to load tags: {:?}", tags))?;
            let args = match &args {
                Some(path) => load_shortcode_args(path)
                    .with_context(|| format!("failed to load shortcode arguments: {:?}", path))?,
                None => Default::default(),
            };

            let processor = output.processor();
            let links = LinkPatterns::default();
            let cloud = if output.plain {
                processor.shortcode_with::<PlainText>(&args, &tags, &links)
            } else {
                processor.shortcode(&args, &tags, &links)
            };
            match cloud {
                Some(cloud) if args.echo() => output.print(&cloud)?,
                Some(_) => {}
                None => eprintln!("No tags to display."),
            }
        }
        Commands::Validate { path } => {
            let args = load_args(&path).with_context(|| format!("validation failed: {:?}", path))?;
            if !args.extra.is_empty() {
                let mut keys: Vec<&String> = args.extra.keys().collect();
                keys.sort();
                eprintln!("Unrecognized keys (passed through): {:?}", keys);
            }
            println!("Tag cloud options are valid.");
        }
        #[cfg(feature = "schema")]
        Commands::Schema => {
            let schema = schemars::schema_for!(TagCloudArgs);
            let json = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TAGCLOUD_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand `\n` and `\t` typed on the command line.
fn unescape(s: &str) -> String {
    s.replace("\\n", "\n").replace("\\t", "\t")
}
