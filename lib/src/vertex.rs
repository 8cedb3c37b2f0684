//! # Vertex identifiers
use std::fmt;

/// The two sides of the bipartition
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partition {
  A,
  B,
}

/// A vertex named by its partition and its local index within that
/// partition. Constructed from input, never mutated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
  pub partition: Partition,
  pub index: usize,
}

impl Vertex {
  /// Returns the A-side vertex with the given local index
  pub fn a(index: usize) -> Self {
    Self {
      partition: Partition::A,
      index,
    }
  }

  /// Returns the B-side vertex with the given local index
  pub fn b(index: usize) -> Self {
    Self {
      partition: Partition::B,
      index,
    }
  }
}

impl fmt::Display for Vertex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tag = match self.partition {
      Partition::A => 'A',
      Partition::B => 'B',
    };
    write!(f, "{}{}", tag, self.index)
  }
}
