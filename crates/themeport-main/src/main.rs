use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod config;
mod convert_cmd;
mod expand_cmd;
mod logging;

use convert_cmd::{run_convert, ConvertArgs};
use expand_cmd::{run_expand, ExpandArgs};
use logging::Verbosity;

#[derive(Parser, Debug)]
#[command(
    name = "themeport",
    version,
    about = "Convert editor color themes between JSON theme schemas"
)]
struct Cli {
    /// Config file (default: ./themeport.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Disable console logging.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Option<RootCommand>,
    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Subcommand, Debug, Clone)]
enum RootCommand {
    /// Convert every theme listed in the manifest (default).
    Convert(ConvertArgs),
    /// Fill keys missing from a generated theme using a reference theme.
    Expand(ExpandArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let app_config = config::load_app_config(cli.config.as_deref())?;
    logging::init_tracing(
        &app_config.log,
        Verbosity {
            verbose: cli.verbose,
            quiet: cli.quiet,
        },
    );

    match select_command(cli.command, cli.convert)? {
        RootCommand::Convert(args) => run_convert(&args, &app_config).map(|_| ()),
        RootCommand::Expand(args) => run_expand(&args, &app_config),
    }
}

/// Convert options given before the subcommand apply to `convert`; options
/// after it take precedence.
fn select_command(
    command: Option<RootCommand>,
    top_level: ConvertArgs,
) -> Result<RootCommand, String> {
    match command {
        None => Ok(RootCommand::Convert(top_level)),
        Some(RootCommand::Convert(args)) => Ok(RootCommand::Convert(args.or(top_level))),
        Some(RootCommand::Expand(_)) if !top_level.is_empty() => Err(
            "--manifest, --out-dir and --indent before expand are not supported; \
pass expand options after the subcommand"
                .to_string(),
        ),
        Some(expand @ RootCommand::Expand(_)) => Ok(expand),
    }
}
