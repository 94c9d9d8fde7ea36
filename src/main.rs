use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use subpagelist::{
    Config, InMemoryPageIndex, SubPageCount, SubPageList, TitleFactory, WikitextListRenderer,
    COUNT_DIRECTIVE, LIST_DIRECTIVE,
};
use tracing_subscriber::{fmt, EnvFilter};

fn pages_arg() -> Arg {
    Arg::new("pages")
        .long("pages")
        .short('p')
        .help("Page index file, one title per line")
        .value_parser(clap::value_parser!(PathBuf))
        .required(true)
}

fn params_arg() -> Arg {
    Arg::new("params")
        .help("Directive arguments: name=value pairs or positional values")
        .num_args(0..)
        .trailing_var_arg(true)
        .allow_hyphen_values(true)
}

fn cli() -> Command {
    Command::new("subpagelist")
        .about("Render the sub pages of a wiki page as a wikitext list")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON config file with namespaces and parameter defaults")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .visible_aliases(LIST_DIRECTIVE.names.iter().copied())
                .about("Render the list of sub pages")
                .arg(pages_arg())
                .arg(params_arg()),
        )
        .subcommand(
            Command::new("count")
                .visible_aliases(COUNT_DIRECTIVE.names.iter().copied())
                .about("Count the sub pages of a page")
                .arg(pages_arg())
                .arg(params_arg()),
        )
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Config defaults first so the caller's arguments override them
fn directive_args(config: &Config, matches: &ArgMatches) -> Vec<String> {
    let mut args = config.default_args();
    if let Some(params) = matches.get_many::<String>("params") {
        args.extend(params.cloned());
    }
    args
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let title_factory = TitleFactory::new().with_namespaces(config.namespaces.iter().cloned());

    let output = match matches.subcommand() {
        Some(("list", sub)) => {
            let index = load_index(&title_factory, sub)?;
            let handler = SubPageList::new(&index, &WikitextListRenderer, title_factory);
            handler.handle(&directive_args(&config, sub))?
        }
        Some(("count", sub)) => {
            let index = load_index(&title_factory, sub)?;
            let handler = SubPageCount::new(&index, title_factory);
            handler.handle(&directive_args(&config, sub))?
        }
        _ => unreachable!("subcommand is required"),
    };

    println!("{}", output);

    Ok(())
}

fn load_index(title_factory: &TitleFactory, matches: &ArgMatches) -> Result<InMemoryPageIndex> {
    let path = matches
        .get_one::<PathBuf>("pages")
        .ok_or_else(|| anyhow::anyhow!("--pages is required"))?;
    InMemoryPageIndex::from_file(title_factory, path)
}
