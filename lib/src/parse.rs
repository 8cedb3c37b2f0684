//! # Edge-list text format
//!
//! The problem format is a header line with the two partition sizes and
//! the edge count, followed by one record per edge naming one vertex on
//! each side by a partition tag and local index:
//!
//! ```text
//! 2 2 3
//! A0 B0
//! A0 B1
//! A1 B0
//! ```

use crate::matcher::Matcher;
use crate::vertex::{Partition, Vertex};
use regex::Regex;
use std::error::Error;
use std::fmt;

/// Error raised for text the edge-list parser cannot accept. Carries a
/// description of the offending line.
#[derive(Debug)]
pub struct ParseError(pub String);

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Error for ParseError {}

/// Parses a problem text into a populated Matcher. Blank lines and `#`
/// line comments are skipped. The tags within an edge record may appear
/// in either order; `B7 A3` names the same edge as `A3 B7`. The number
/// of edge records must match the count declared in the header.
pub fn problem_from_str(input: &str) -> Result<Matcher, ParseError> {
  lazy_static! {
    static ref EDGE_RECORD_REGEX: Regex =
      Regex::new(r"^(?P<ltag>[AB])(?P<lidx>\d+)\s+(?P<rtag>[AB])(?P<ridx>\d+)$")
        .expect("Failed to compile EDGE_RECORD_REGEX");
  }
  let mut lines = input
    .lines()
    .map(|line| line.trim())
    .filter(|line| !line.is_empty() && !line.starts_with('#'));
  let header = lines
    .next()
    .ok_or_else(|| ParseError("Missing header line".to_string()))?;
  let fields: Vec<&str> = header.split_whitespace().collect();
  if fields.len() != 3 {
    return Err(ParseError(format!(
      "Expected header \"size_A size_B num_edges\", got: {}",
      header
    )));
  }
  let size_a = parse_count(fields[0], header)?;
  let size_b = parse_count(fields[1], header)?;
  let num_edges = parse_count(fields[2], header)?;
  let mut matcher = Matcher::new(size_a, size_b);
  let mut edge_count = 0;
  for line in lines {
    let caps = EDGE_RECORD_REGEX
      .captures(line)
      .ok_or_else(|| ParseError(format!("Cannot parse edge record: {}", line)))?;
    let u = vertex_from_parts(&caps["ltag"], &caps["lidx"], line)?;
    let v = vertex_from_parts(&caps["rtag"], &caps["ridx"], line)?;
    matcher
      .add_edge(u, v)
      .map_err(|err| ParseError(format!("{} in edge record: {}", err, line)))?;
    edge_count += 1;
  }
  if edge_count != num_edges {
    return Err(ParseError(format!(
      "Header declares {} edges but input contains {}",
      num_edges, edge_count
    )));
  }
  Ok(matcher)
}

fn parse_count(field: &str, header: &str) -> Result<usize, ParseError> {
  field.parse::<usize>().map_err(|_| {
    ParseError(format!(
      "Cannot parse count \"{}\" in header: {}",
      field, header
    ))
  })
}

fn vertex_from_parts(tag: &str, index: &str, line: &str) -> Result<Vertex, ParseError> {
  let index = index
    .parse::<usize>()
    .map_err(|_| ParseError(format!("Cannot parse vertex index in edge record: {}", line)))?;
  let partition = match tag {
    "A" => Partition::A,
    _ => Partition::B,
  };
  Ok(Vertex { partition, index })
}

#[cfg(test)]
mod tests {
  use crate::parse::*;

  #[test]
  fn good_problem_0() {
    let matcher = problem_from_str(
      "2 2 3
       A0 B0
       A0 B1
       A1 B0",
    )
    .unwrap();
    assert_eq!(matcher.size_a(), 2);
    assert_eq!(matcher.size_b(), 2);
    assert_eq!(matcher.compute().len(), 2);
  }

  #[test]
  fn good_problem_tags_reversed() {
    let matcher = problem_from_str(
      "1 1 1
       B0 A0",
    )
    .unwrap();
    assert_eq!(matcher.compute().len(), 1);
  }

  #[test]
  fn good_problem_no_edges() {
    let matcher = problem_from_str("1 1 0").unwrap();
    assert_eq!(matcher.compute().len(), 0);
  }

  #[test]
  fn good_problem_empty_partitions() {
    let matcher = problem_from_str("0 0 0").unwrap();
    assert_eq!(matcher.compute().len(), 0);
  }

  #[test]
  fn comments_and_blank_lines_are_skipped() {
    let matcher = problem_from_str(
      "# star graph
       1 5 5

       A0 B0
       A0 B1
       A0 B2
       A0 B3
       A0 B4",
    )
    .unwrap();
    assert_eq!(matcher.compute().len(), 1);
  }

  #[test]
  fn empty_input_is_rejected() {
    assert!(problem_from_str("").is_err());
    assert!(problem_from_str("\n  \n# only a comment\n").is_err());
  }

  #[test]
  fn short_header_is_rejected() {
    assert!(problem_from_str("2 2").is_err());
  }

  #[test]
  fn non_numeric_header_is_rejected() {
    assert!(problem_from_str("two 2 0").is_err());
  }

  #[test]
  fn malformed_record_is_rejected() {
    assert!(problem_from_str("1 1 1\nA0-B0").is_err());
    assert!(problem_from_str("1 1 1\nC0 B0").is_err());
    assert!(problem_from_str("1 1 1\nA B0").is_err());
  }

  #[test]
  fn out_of_range_index_is_rejected() {
    let err = problem_from_str("2 2 1\nA2 B0").unwrap_err();
    assert!(err.to_string().contains("out of range"));
  }

  #[test]
  fn same_side_record_is_rejected() {
    let err = problem_from_str("2 2 1\nA0 A1").unwrap_err();
    assert!(err.to_string().contains("bipartition"));
  }

  #[test]
  fn edge_count_mismatch_is_rejected() {
    assert!(problem_from_str("2 2 2\nA0 B0").is_err());
    assert!(problem_from_str("2 2 0\nA0 B0").is_err());
  }
}
