//! Station graph.
//!
//! Undirected graph over integer station ids. Each edge carries the set of
//! transport modes connecting the pair. Built once through
//! [`StationGraphBuilder`] and never mutated afterwards.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use super::ticket::{Transport, TransportSet};

/// A station identifier.
pub type Station = u32;

/// Immutable transport graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationGraph {
    /// Adjacency keyed by station; every node has an entry, possibly empty.
    adjacency: BTreeMap<Station, BTreeMap<Station, TransportSet>>,
    edge_count: usize,
}

impl StationGraph {
    /// Returns the set of stations.
    pub fn nodes(&self) -> BTreeSet<Station> {
        self.adjacency.keys().copied().collect()
    }

    /// Iterates stations in ascending order.
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct station pairs joined by at least one mode.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, station: Station) -> bool {
        self.adjacency.contains_key(&station)
    }

    /// Returns the stations adjacent to `station`. Empty for unknown stations.
    pub fn neighbors(&self, station: Station) -> BTreeSet<Station> {
        self.adjacent(station).map(|(s, _)| s).collect()
    }

    /// Iterates (neighbor, modes) pairs of `station` in ascending station order.
    pub fn adjacent(&self, station: Station) -> impl Iterator<Item = (Station, TransportSet)> + '_ {
        self.adjacency
            .get(&station)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(s, m)| (*s, *m)))
    }

    /// Returns the modes joining `a` and `b`; empty if they are not connected.
    pub fn edge_modes(&self, a: Station, b: Station) -> TransportSet {
        self.adjacency
            .get(&a)
            .and_then(|edges| edges.get(&b))
            .copied()
            .unwrap_or(TransportSet::EMPTY)
    }

    /// Breadth-first hop distances from `source`, ignoring transport modes.
    ///
    /// Unreachable stations are absent from the result.
    pub fn distances_from(&self, source: Station) -> HashMap<Station, u32> {
        let mut dist = HashMap::with_capacity(self.adjacency.len());
        if !self.contains(source) {
            return dist;
        }
        dist.insert(source, 0);
        let mut queue = VecDeque::from([(source, 0u32)]);
        while let Some((cur, d)) = queue.pop_front() {
            for (next, _) in self.adjacent(cur) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back((next, d + 1));
                }
            }
        }
        dist
    }
}

/// Accumulates stations and edges before freezing them into a graph.
#[derive(Debug, Default)]
pub struct StationGraphBuilder {
    graph: StationGraph,
}

impl StationGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a station. Returns false if it was already declared.
    pub fn add_station(&mut self, station: Station) -> bool {
        if self.graph.adjacency.contains_key(&station) {
            return false;
        }
        self.graph.adjacency.insert(station, BTreeMap::new());
        true
    }

    pub fn contains(&self, station: Station) -> bool {
        self.graph.contains(station)
    }

    /// Adds `mode` to the edge between `a` and `b`, accumulating with any
    /// modes already present. Returns false if either endpoint is undeclared.
    pub fn add_edge(&mut self, a: Station, b: Station, mode: Transport) -> bool {
        if !self.graph.contains(a) || !self.graph.contains(b) {
            return false;
        }
        let existing = self.graph.edge_modes(a, b);
        if existing.is_empty() {
            self.graph.edge_count += 1;
        }
        let merged = existing.with(mode);
        for (from, to) in [(a, b), (b, a)] {
            if let Some(edges) = self.graph.adjacency.get_mut(&from) {
                edges.insert(to, merged);
            }
        }
        true
    }

    pub fn build(self) -> StationGraph {
        self.graph
    }
}
