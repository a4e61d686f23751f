//! Command implementations and argument parsing for the kruskal CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{KruskalBuilder, MinimumSpanningForest, MstError, SortStrategy};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{EdgeList, InputError, parse_edge_list};

/// Edge list used by the `demo` command.
pub const SAMPLE_GRAPH: &str = include_str!("sample_graph.txt");

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Build minimum spanning forests with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the minimum spanning forest of an edge-list file.
    Run(RunCommand),
    /// Build the minimum spanning tree of a built-in six-vertex graph.
    Demo(DemoCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file to read, or `-` for stdin.
    pub path: PathBuf,

    /// How edges are sorted before the union phase.
    #[arg(long, value_enum, default_value_t = SortArg::Auto)]
    pub sort: SortArg,
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// How edges are sorted before the union phase.
    #[arg(long, value_enum, default_value_t = SortArg::Auto)]
    pub sort: SortArg,
}

/// Sort strategies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Parallel for large inputs when available, sequential otherwise.
    Auto,
    /// Always sort on the calling thread.
    Sequential,
    /// Always sort with Rayon.
    Parallel,
}

impl From<SortArg> for SortStrategy {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Auto => Self::Auto,
            SortArg::Sequential => Self::Sequential,
            SortArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed.
    #[error("invalid edge list `{source_name}`: {source}")]
    Input {
        /// Name of the input that failed to parse.
        source_name: String,
        /// Parse failure.
        #[source]
        source: InputError,
    },
    /// The core builder rejected the graph or configuration.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns a stable machine-readable code for the failure.
    ///
    /// # Examples
    /// ```
    /// use kruskal_cli::cli::CliError;
    /// use kruskal_core::MstError;
    ///
    /// let err = CliError::from(MstError::WeightOverflow { edge_index: 0 });
    /// assert_eq!(err.code(), "MST_WEIGHT_OVERFLOW");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Input { source, .. } => source.code().as_str(),
            Self::Core(core) => core.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Human-readable name of the input graph.
    pub source: String,
    /// The forest built from the input.
    pub forest: MinimumSpanningForest<i64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or building fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, RunCommand, SortArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 4\n1 2 1\n0 2 2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         sort: SortArg::Auto,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run)
        }
        Command::Demo(demo) => {
            span.record("command", field::display("demo"));
            run_demo(&demo)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, sort = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, sort } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("sort", field::debug(sort));

    let source = source_name(&path);
    let reader = open_reader(&path)?;
    let list = parse_edge_list(reader).map_err(|source_err| CliError::Input {
        source_name: source.clone(),
        source: source_err,
    })?;
    execute(source, &list, sort)
}

#[instrument(name = "cli.demo", err, skip(command))]
pub(super) fn run_demo(command: &DemoCommand) -> Result<ExecutionSummary, CliError> {
    let source = "demo".to_owned();
    let list = parse_edge_list(SAMPLE_GRAPH.as_bytes()).map_err(|source_err| CliError::Input {
        source_name: source.clone(),
        source: source_err,
    })?;
    execute(source, &list, command.sort)
}

fn execute(source: String, list: &EdgeList, sort: SortArg) -> Result<ExecutionSummary, CliError> {
    let kruskal = KruskalBuilder::new()
        .with_sort_strategy(sort.into())
        .build()?;
    let forest = kruskal.run(list.node_count, &list.edges)?;
    info!(
        source = source.as_str(),
        vertices = forest.node_count(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary { source, forest })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, CliError> {
    Span::current().record("path", field::display(path.display()));
    if is_stdin(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub(super) fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        return "stdin".to_owned();
    }
    path.file_name()
        .and_then(|value| value.to_str())
        .map_or_else(|| path.display().to_string(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as a short header followed by one
/// tab-separated `start end weight` line per selected edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{ExecutionSummary, render_summary};
/// # use kruskal_core::{Edge, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = kruskal(2, &[Edge::new(0, 1, 7_i64)])?;
/// let summary = ExecutionSummary { source: "pair".into(), forest };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "vertices: 2\ncomponents: 1\ntotal weight: 7\nedges: 1\n0\t1\t7\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(writer, "vertices: {}", forest.node_count())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    writeln!(writer, "edges: {}", forest.edges().len())?;
    for edge in forest.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.start(), edge.end(), edge.weight())?;
    }
    Ok(())
}
