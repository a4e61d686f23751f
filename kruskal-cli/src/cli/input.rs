//! Edge-list parsing for the `run` command.
//!
//! The format is line based. The first line that is neither blank nor a
//! comment holds the vertex count; every later such line holds one edge as
//! `start end weight`. A `#` starts a comment that runs to the end of the
//! line.

use std::fmt;
use std::io::{self, BufRead};

use kruskal_core::Edge;
use thiserror::Error;
use tracing::{debug, instrument};

/// A parsed graph ready to hand to the core builder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeList {
    /// Number of vertices, labelled `0..node_count`.
    pub node_count: usize,
    /// Edges in file order.
    pub edges: Vec<Edge<i64>>,
}

/// Fields of an edge line, used to point at the offending token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeField {
    /// First endpoint.
    Start,
    /// Second endpoint.
    End,
    /// Edge weight.
    Weight,
}

impl fmt::Display for EdgeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Weight => "weight",
        })
    }
}

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// Reading from the underlying stream failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The input held no vertex count.
    #[error("input is empty; expected a vertex count")]
    MissingNodeCount,
    /// The vertex count line was not an integer.
    #[error("line {line}: expected a vertex count, found `{raw}`")]
    InvalidNodeCount {
        /// One-based line number.
        line: usize,
        /// Offending text.
        raw: String,
    },
    /// The vertex count was negative.
    #[error("line {line}: vertex count must not be negative, found {value}")]
    NegativeNodeCount {
        /// One-based line number.
        line: usize,
        /// Parsed value.
        value: i64,
    },
    /// An edge line did not have exactly three fields.
    #[error("line {line}: expected `start end weight`, found {fields} field(s)")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },
    /// An edge field failed to parse.
    #[error("line {line}: invalid {field} `{raw}`")]
    InvalidField {
        /// One-based line number.
        line: usize,
        /// Which field was rejected.
        field: EdgeField,
        /// Offending text.
        raw: String,
    },
}

/// Stable codes describing [`InputError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum InputErrorCode {
    /// Reading from the underlying stream failed.
    Read,
    /// The input held no vertex count.
    MissingNodeCount,
    /// The vertex count line was not an integer.
    InvalidNodeCount,
    /// The vertex count was negative.
    NegativeNodeCount,
    /// An edge line did not have exactly three fields.
    MalformedEdge,
    /// An edge field failed to parse.
    InvalidField,
}

impl InputErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "INPUT_READ",
            Self::MissingNodeCount => "INPUT_MISSING_NODE_COUNT",
            Self::InvalidNodeCount => "INPUT_INVALID_NODE_COUNT",
            Self::NegativeNodeCount => "INPUT_NEGATIVE_NODE_COUNT",
            Self::MalformedEdge => "INPUT_MALFORMED_EDGE",
            Self::InvalidField => "INPUT_INVALID_FIELD",
        }
    }
}

impl fmt::Display for InputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InputError {
    /// Retrieve the stable [`InputErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> InputErrorCode {
        match self {
            Self::Read { .. } => InputErrorCode::Read,
            Self::MissingNodeCount => InputErrorCode::MissingNodeCount,
            Self::InvalidNodeCount { .. } => InputErrorCode::InvalidNodeCount,
            Self::NegativeNodeCount { .. } => InputErrorCode::NegativeNodeCount,
            Self::MalformedEdge { .. } => InputErrorCode::MalformedEdge,
            Self::InvalidField { .. } => InputErrorCode::InvalidField,
        }
    }
}

/// Parses an edge list from `reader`.
///
/// Vertex ids are only checked for syntax here; range checks against the
/// vertex count happen in the core builder so the error carries the edge
/// index.
///
/// # Errors
/// Returns [`InputError`] when the stream cannot be read or a line is
/// malformed.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::parse_edge_list;
///
/// let text = "# triangle\n3\n0 1 5\n1 2 5  # tie\n0 2 5\n";
/// let list = parse_edge_list(text.as_bytes())?;
/// assert_eq!(list.node_count, 3);
/// assert_eq!(list.edges.len(), 3);
/// # Ok::<(), kruskal_cli::cli::InputError>(())
/// ```
#[instrument(name = "cli.parse_edge_list", err, skip(reader))]
pub fn parse_edge_list(reader: impl BufRead) -> Result<EdgeList, InputError> {
    let mut node_count = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| InputError::Read {
            line: line_number,
            source,
        })?;
        let content = strip_comment(&line);
        if content.is_empty() {
            continue;
        }
        match node_count {
            None => node_count = Some(parse_node_count(line_number, content)?),
            Some(_) => edges.push(parse_edge(line_number, content)?),
        }
    }

    let node_count = node_count.ok_or(InputError::MissingNodeCount)?;
    debug!(node_count, edge_count = edges.len(), "edge list parsed");
    Ok(EdgeList { node_count, edges })
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before).trim()
}

fn parse_node_count(line: usize, content: &str) -> Result<usize, InputError> {
    let invalid = || InputError::InvalidNodeCount {
        line,
        raw: content.to_owned(),
    };
    let value: i64 = content.parse().map_err(|_| invalid())?;
    if value < 0 {
        return Err(InputError::NegativeNodeCount { line, value });
    }
    usize::try_from(value).map_err(|_| invalid())
}

fn parse_edge(line: usize, content: &str) -> Result<Edge<i64>, InputError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [start, end, weight] = fields[..] else {
        return Err(InputError::MalformedEdge {
            line,
            fields: fields.len(),
        });
    };
    Ok(Edge::new(
        parse_field(line, EdgeField::Start, start)?,
        parse_field(line, EdgeField::End, end)?,
        parse_field(line, EdgeField::Weight, weight)?,
    ))
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    field: EdgeField,
    raw: &str,
) -> Result<T, InputError> {
    raw.parse().map_err(|_| InputError::InvalidField {
        line,
        field,
        raw: raw.to_owned(),
    })
}
