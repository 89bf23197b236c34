//! Command tree and config resolution

use aihsr_mapping::{ConfigError, Stages, UpdaterConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// What the invocation asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Rewrite files for the given stages, then print the summary
    Update(Stages),
    /// Print the static summary only
    Summary,
}

pub(crate) fn command() -> Command {
    Command::new("update-control-mappings")
        .version(aihsr_mapping::VERSION)
        .about("Update control mappings with AIHSR phase, tech type and risk assignments")
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("TOML file with updater settings"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Directory holding the data files [default: static/data]"),
        )
        .arg(
            Arg::new("controls-file")
                .long("controls")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Control catalog file name [default: technical-controls.json]"),
        )
        .arg(
            Arg::new("traceability-file")
                .long("traceability")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Traceability file name [default: traceability.json]"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Compute and report without writing files"),
        )
        .arg(
            Arg::new("no-atomic")
                .long("no-atomic")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Overwrite files in place instead of temp file + rename"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log progress to stderr (-v info, -vv debug)"),
        )
        .subcommand(Command::new("run").about("Annotate controls, regenerate links, print summary (default)"))
        .subcommand(Command::new("controls").about("Annotate the control catalog only"))
        .subcommand(Command::new("links").about("Regenerate risk -> control subcategory links only"))
        .subcommand(Command::new("summary").about("Print the mapping tables without touching files"))
}

/// Subcommand action plus the matches holding its flags
pub(crate) fn action(matches: &ArgMatches) -> (Action, &ArgMatches) {
    match matches.subcommand() {
        Some(("controls", args)) => (Action::Update(Stages::CONTROLS), args),
        Some(("links", args)) => (Action::Update(Stages::LINKS), args),
        Some(("summary", args)) => (Action::Summary, args),
        Some((_, args)) => (Action::Update(Stages::ALL), args),
        None => (Action::Update(Stages::ALL), matches),
    }
}

/// Defaults, then the `--config` file, then individual flags
pub(crate) fn resolve_config(args: &ArgMatches) -> Result<UpdaterConfig, ConfigError> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => UpdaterConfig::from_toml_file(path)?,
        None => UpdaterConfig::new(),
    };

    if let Some(dir) = args.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir.clone());
    }
    if let Some(file) = args.get_one::<PathBuf>("controls-file") {
        config = config.with_controls_file(file.clone());
    }
    if let Some(file) = args.get_one::<PathBuf>("traceability-file") {
        config = config.with_traceability_file(file.clone());
    }
    if args.get_flag("dry-run") {
        config = config.with_dry_run(true);
    }
    if args.get_flag("no-atomic") {
        config = config.with_atomic_writes(false);
    }
    Ok(config)
}
