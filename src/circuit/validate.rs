//! Optional post-pruning connectivity check.
//!
//! Pruning gives no structural guarantee: a circuit may come out
//! disconnected or with dangling chains, and that is an accepted outcome.
//! Callers that want stricter realism can check connectivity with
//! [`is_connected`] and redraw; it is never applied implicitly.

use std::collections::HashMap;

use crate::circuit::{Circuit, Position};

/// Union-find over segment endpoints.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Whether every segment endpoint is reachable from every other one
/// through shared endpoints.
///
/// An empty circuit is trivially connected.
pub fn is_connected(circuit: &Circuit) -> bool {
    let mut indices: HashMap<Position, usize> = HashMap::new();
    for segment in circuit {
        for position in [segment.from, segment.to] {
            let next = indices.len();
            indices.entry(position).or_insert(next);
        }
    }
    if indices.len() < 2 {
        return true;
    }

    let mut components = DisjointSet::new(indices.len());
    for segment in circuit {
        components.union(indices[&segment.from], indices[&segment.to]);
    }

    let root = components.find(0);
    (1..indices.len()).all(|node| components.find(node) == root)
}
