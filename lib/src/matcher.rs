//! # Graph construction and the augmenting-path search

// Background reading
// - https://en.wikipedia.org/wiki/Matching_(graph_theory)
// - https://en.wikipedia.org/wiki/Ford%E2%80%93Fulkerson_algorithm
// - http://olympiad.cs.uct.ac.za/presentations/camp2_2017/bipartitematching-robin.pdf

use crate::vertex::{Partition, Vertex};
use std::error::Error;
use std::fmt;

/// Errors reported while building the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
  /// The local index names a vertex outside its declared partition size
  IndexOutOfRange { vertex: Vertex, size: usize },
  /// Both endpoints of an edge fall in the same partition
  SameSideEdge { u: Vertex, v: Vertex },
}

impl fmt::Display for GraphError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::IndexOutOfRange { vertex, size } => write!(
        f,
        "vertex {} is out of range for its partition of size {}",
        vertex, size
      ),
      Self::SameSideEdge { u, v } => {
        write!(f, "edge {} {} does not cross the bipartition", u, v)
      }
    }
  }
}

impl Error for GraphError {}

/// A matched edge, named by the local indices of its endpoints
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
  /// Local index of the partition-A endpoint
  pub a: usize,
  /// Local index of the partition-B endpoint
  pub b: usize,
}

/// The result of a maximum matching computation. `pairs` is ordered by
/// the A-side index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Matching {
  pub pairs: Vec<MatchedPair>,
}

impl Matching {
  /// Returns the number of matched edges
  pub fn len(&self) -> usize {
    self.pairs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }
}

/// Matcher owns the graph representation for one matching computation.
/// The partition sizes are fixed at construction, edges are appended one
/// at a time, and `compute` consumes the graph read-only, so a single
/// Matcher can be computed repeatedly with identical results.
///
/// Internally both partitions share one flat index space: A-side vertex
/// `i` is uid `i`, B-side vertex `j` is uid `size_a + j`. This lets the
/// search walk the graph without branching on partition identity.
#[derive(Debug, Clone)]
pub struct Matcher {
  size_a: usize,
  size_b: usize,
  /// Adjacency lists over the unified index space. Symmetric, in edge
  /// insertion order; duplicate edges are kept as-is.
  adjacency: Vec<Vec<usize>>,
}

impl Matcher {
  /// Returns a new Matcher for partitions of the given sizes, with no edges
  pub fn new(size_a: usize, size_b: usize) -> Self {
    Self {
      size_a,
      size_b,
      adjacency: vec![Vec::new(); size_a + size_b],
    }
  }

  pub fn size_a(&self) -> usize {
    self.size_a
  }

  pub fn size_b(&self) -> usize {
    self.size_b
  }

  /// Maps a vertex to its unified index
  pub fn to_uid(&self, v: Vertex) -> usize {
    match v.partition {
      Partition::A => v.index,
      Partition::B => self.size_a + v.index,
    }
  }

  /// Inverse of `to_uid`
  pub fn vertex_of(&self, uid: usize) -> Vertex {
    if uid < self.size_a {
      Vertex::a(uid)
    } else {
      Vertex::b(uid - self.size_a)
    }
  }

  fn check_in_range(&self, v: Vertex) -> Result<(), GraphError> {
    let size = match v.partition {
      Partition::A => self.size_a,
      Partition::B => self.size_b,
    };
    if v.index >= size {
      return Err(GraphError::IndexOutOfRange { vertex: v, size });
    }
    Ok(())
  }

  /// Records an undirected edge between `u` and `v`, which must lie in
  /// opposite partitions and within the declared sizes. Adding the same
  /// edge twice stores it twice; the search tolerates duplicates, they
  /// only cost a skipped iteration.
  pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<(), GraphError> {
    if u.partition == v.partition {
      return Err(GraphError::SameSideEdge { u, v });
    }
    self.check_in_range(u)?;
    self.check_in_range(v)?;
    let uid_u = self.to_uid(u);
    let uid_v = self.to_uid(v);
    self.adjacency[uid_u].push(uid_v);
    self.adjacency[uid_v].push(uid_u);
    Ok(())
  }

  /// Computes a maximum matching by attempting to augment from every free
  /// A-side vertex in increasing index order. Starting from one side only
  /// is sufficient: a matched edge covers exactly one vertex per side, so
  /// any augmenting path has a free A-side endpoint.
  ///
  /// The size of the result is canonical; which edges realize it depends
  /// on edge insertion order, since the search takes the first augmenting
  /// path it finds rather than hunting for a distinguished one.
  pub fn compute(&self) -> Matching {
    let uid_count = self.size_a + self.size_b;
    let mut matched: Vec<Option<usize>> = vec![None; uid_count];
    let mut visited: Vec<bool> = vec![false; uid_count];
    let mut match_count = 0;
    for uid in 0..self.size_a {
      if matched[uid].is_some() {
        continue;
      }
      // The visited marks are scoped to one augmenting attempt
      for seen in visited.iter_mut() {
        *seen = false;
      }
      if self.augment(uid, &mut matched, &mut visited) {
        match_count += 1;
      }
    }
    debug!(
      "matched {} of {} A-side vertices against {} B-side vertices",
      match_count, self.size_a, self.size_b
    );
    let pairs: Vec<MatchedPair> = (0..self.size_a)
      .filter_map(|uid| {
        matched[uid].map(|partner| MatchedPair {
          a: uid,
          b: partner - self.size_a,
        })
      })
      .collect();
    debug_assert_eq!(pairs.len(), match_count);
    Matching { pairs }
  }

  /// Attempts to extend the matching with an alternating path starting at
  /// the free vertex `uid`. Neighbours are tried in insertion order: a
  /// free neighbour terminates the path immediately, while a taken
  /// neighbour is stolen if its current partner can be re-matched
  /// elsewhere by the recursive call. Returning false is the normal
  /// outcome for a vertex that cannot be matched given earlier
  /// assignments, not an error.
  ///
  /// Recursion depth is bounded by the number of B-side vertices, since
  /// each recursive step first marks an unvisited neighbour.
  fn augment(&self, uid: usize, matched: &mut Vec<Option<usize>>, visited: &mut Vec<bool>) -> bool {
    for &neighbour in &self.adjacency[uid] {
      if visited[neighbour] {
        continue;
      }
      match matched[neighbour] {
        None => {
          matched[uid] = Some(neighbour);
          matched[neighbour] = Some(uid);
          return true;
        }
        // The partner != uid check keeps the search from walking
        // straight back along the edge it just arrived by
        Some(partner) if partner != uid => {
          visited[neighbour] = true;
          if self.augment(partner, matched, visited) {
            matched[uid] = Some(neighbour);
            matched[neighbour] = Some(uid);
            return true;
          }
        }
        Some(_) => {}
      }
    }
    false
  }
}
