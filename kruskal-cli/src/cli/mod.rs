//! Command-line interface orchestration for the kruskal builder.
//!
//! `run` reads an edge list from a file or stdin and prints its minimum
//! spanning forest; `demo` does the same for a built-in sample graph.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, DemoCommand, ExecutionSummary, RunCommand, SAMPLE_GRAPH, SortArg,
    render_summary, run_cli,
};
pub use input::{EdgeField, EdgeList, InputError, InputErrorCode, parse_edge_list};
