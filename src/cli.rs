use crate::api::{self, Components};
use crate::services::log::init_logging;
use crate::types::{ApiResponse, HydrateConfig, MediaType, Source};
use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "top10", version, about = "Top 10 chart hydration (JSON only)")]
pub struct Cli {
    /// JSON config file; unset fields keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Sections hydrated at once (1 = strictly sequential)
    #[arg(long, global = true)]
    concurrency: Option<usize>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hydrate every `#charts .row` section declared in a page
    Hydrate {
        /// Page markup file, or `-` for stdin
        page: String,
    },
    /// Hydrate a single chart
    Chart(ChartArgs),
    /// Run one extractor over saved markup
    Parse {
        #[arg(value_enum)]
        source: SourceArg,
        /// Markup file, or `-` for stdin
        input: String,
    },
}

#[derive(Args)]
struct ChartArgs {
    #[arg(long, value_enum, default_value_t = SourceArg::Primary)]
    source: SourceArg,
    /// Region or country; defaults to the configured region
    #[arg(long)]
    region: Option<String>,
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Films)]
    media_type: TypeArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Primary,
    Fallback,
}

impl From<SourceArg> for Source {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Primary => Source::Primary,
            SourceArg::Fallback => Source::Fallback,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Films,
    Tv,
}

impl From<TypeArg> for MediaType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Films => MediaType::Films,
            TypeArg::Tv => MediaType::Tv,
        }
    }
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli) {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => {
            print_json(ApiResponse::<()>::err(format!("{e:#}")));
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<serde_json::Value> {
    let config = load_config(cli.config.as_deref(), cli.concurrency)?;

    match cli.cmd {
        Command::Hydrate { page } => {
            let markup = read_input(&page)?;
            let components = Components::new(config)?;
            let report = crate::runtime::block_on(api::hydrate_page(&markup, &components));
            Ok(serde_json::to_value(report)?)
        }
        Command::Chart(args) => {
            let components = Components::new(config)?;
            let report = crate::runtime::block_on(api::hydrate_chart(
                args.source.into(),
                args.region.as_deref(),
                args.media_type.into(),
                &components,
            ));
            Ok(serde_json::to_value(report)?)
        }
        Command::Parse { source, input } => {
            let markup = read_input(&input)?;
            let entries = api::parse_markup(source.into(), &markup, &config);
            Ok(serde_json::to_value(entries)?)
        }
    }
}

fn load_config(
    path: Option<&std::path::Path>,
    concurrency: Option<usize>,
) -> anyhow::Result<HydrateConfig> {
    let mut config = match path {
        Some(p) => HydrateConfig::from_path(p)
            .with_context(|| format!("loading config {}", p.display()))?,
        None => HydrateConfig::default(),
    };
    if let Some(n) = concurrency {
        config.concurrency = n;
    }
    config.validate()?;
    Ok(config)
}

/// Read a file, or stdin for `-`.
fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
}

fn print_json<T: serde::Serialize>(val: T) {
    // pretty JSON output
    match serde_json::to_string_pretty(&val) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("failed to serialize output: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_chart_flags() {
        let cli = Cli::try_parse_from([
            "top10", "chart", "--source", "fallback", "--region", "Brazil", "--type", "tv", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.cmd {
            Command::Chart(args) => {
                assert_eq!(Source::from(args.source), Source::Fallback);
                assert_eq!(args.region.as_deref(), Some("Brazil"));
                assert_eq!(MediaType::from(args.media_type), MediaType::Tv);
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn cli_chart_defaults() {
        let cli = Cli::try_parse_from(["top10", "chart"]).unwrap();
        match cli.cmd {
            Command::Chart(args) => {
                assert_eq!(Source::from(args.source), Source::Primary);
                assert!(args.region.is_none());
                assert_eq!(MediaType::from(args.media_type), MediaType::Films);
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_source() {
        assert!(Cli::try_parse_from(["top10", "parse", "imdb", "-"]).is_err());
    }

    #[test]
    fn concurrency_flag_overrides_config() {
        let config = load_config(None, Some(3)).unwrap();
        assert_eq!(config.concurrency, 3);
        assert!(load_config(None, Some(0)).is_err());
    }
}
