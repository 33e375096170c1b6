use anyhow::Result;
use clap::{Parser, Subcommand};
use linediff::areas::repository::Repository;
use linediff::artifacts::core::{PagerWriter, should_page};
use linediff::artifacts::diff::line_diff::DEFAULT_THRESHOLD;
use linediff::{DiffFormat, DiffOptions};
use minus::Pager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LINEDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    about = "Line diffs for synced files, their versions and conflict copies",
    long_about = "Compares text files line by line. Works on any two files, on stored \
    versions of a synced file against its current content, and on conflict copies \
    against the file they diverged from.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "LINEDIFF_ROOT",
        help = "The sync root holding current files and _versions/ (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "LINEDIFF_THRESHOLD",
        default_value_t = DEFAULT_THRESHOLD,
        help = "Largest line count diffed exactly; bigger inputs are compared by position"
    )]
    threshold: usize,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = DiffFormat::SideBySide,
        help = "How diff lines are printed"
    )]
    format: DiffFormat,
    #[arg(long, global = true, help = "Print only the added/removed summary")]
    stat: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "ops",
        about = "Print the edit script of two files as JSON",
        long_about = "This command prints the ops, stats and algorithm path of a diff between \
        two files as JSON, for use by other tools."
    )]
    Ops {
        #[arg(index = 1, help = "The old file")]
        old: PathBuf,
        #[arg(index = 2, help = "The new file")]
        new: PathBuf,
    },
    #[command(name = "compare", about = "Show the diff between two files")]
    Compare {
        #[arg(index = 1, help = "The old file")]
        old: PathBuf,
        #[arg(index = 2, help = "The new file")]
        new: PathBuf,
    },
    #[command(name = "versions", about = "List the stored versions of a synced file")]
    Versions {
        #[arg(index = 1, help = "The file path inside the sync root")]
        file: PathBuf,
    },
    #[command(
        name = "version-diff",
        about = "Show the diff between a stored version and the current content",
        long_about = "This command compares version N of a synced file, stored under \
        _versions/<path>/N, with the file's current content."
    )]
    VersionDiff {
        #[arg(index = 1, help = "The file path inside the sync root")]
        file: PathBuf,
        #[arg(index = 2, help = "The stored version number (starting at 1)")]
        version: u32,
    },
    #[command(name = "conflicts", about = "List conflict copies in the sync root")]
    Conflicts,
    #[command(
        name = "conflict-diff",
        about = "Show the diff between a conflict copy and its original",
        long_about = "This command compares a file named '<name> (conflict YYYY-MM-DD).<ext>' \
        with '<name>.<ext>' next to it."
    )]
    ConflictDiff {
        #[arg(index = 1, help = "The conflict copy path inside the sync root")]
        copy: PathBuf,
    },
}

impl Commands {
    /// `ops` and `compare` read plain paths, so a stale `--root` must not
    /// stop them.
    fn uses_sync_root(&self) -> bool {
        !matches!(self, Commands::Ops { .. } | Commands::Compare { .. })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) if cli.command.uses_sync_root() => root,
        _ => std::env::current_dir()?,
    };
    let options = DiffOptions::new(cli.threshold, cli.format, cli.stat);

    let pager = (!matches!(cli.command, Commands::Ops { .. }) && should_page()).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let repository = Repository::new(&root, writer, options)?;

    match &cli.command {
        Commands::Ops { old, new } => repository.ops(old, new).await?,
        Commands::Compare { old, new } => repository.compare(old, new).await?,
        Commands::Versions { file } => repository.list_versions(file).await?,
        Commands::VersionDiff { file, version } => {
            repository.version_diff(file, *version).await?
        }
        Commands::Conflicts => repository.conflicts().await?,
        Commands::ConflictDiff { copy } => repository.conflict_diff(copy).await?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
