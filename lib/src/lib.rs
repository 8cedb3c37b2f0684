//! # Maximum bipartite matching library
//!
//! bimatch computes a maximum cardinality matching in a bipartite graph:
//! given two disjoint vertex partitions A and B and a set of edges between
//! them, it finds the largest set of edges in which no vertex appears more
//! than once. The implementation is the classic augmenting-path algorithm
//! (Kuhn's algorithm) run from every free A-side vertex.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate regex;

pub mod matcher;
pub mod parse;
pub mod vertex;

pub use crate::matcher::{GraphError, MatchedPair, Matcher, Matching};
pub use crate::parse::{problem_from_str, ParseError};
pub use crate::vertex::{Partition, Vertex};
