//! Ordered node → dependency-list mapping
//!
//! This is the only input the cycle detector consumes. Key order is the
//! insertion order and is what makes detection output deterministic.

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// A directed dependency graph keyed by node, preserving insertion order
///
/// Edges point from a node to the nodes it depends on. A node that only ever
/// appears as a dependency has no outgoing edges. Duplicate edges are kept
/// as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyMap<N: Eq + Hash> {
    entries: IndexMap<N, Vec<N>>,
}

impl<N: Eq + Hash> Default for DependencyMap<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> DependencyMap<N> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Set the dependency list of `node`, returning the previous list
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, node: N, dependencies: Vec<N>) -> Option<Vec<N>> {
        self.entries.insert(node, dependencies)
    }

    /// Ensure `node` is a key, with no dependencies if it was absent
    pub fn add_node(&mut self, node: N) {
        self.entries.entry(node).or_default();
    }

    /// Append a single edge `node → dependency`
    pub fn add_dependency(&mut self, node: N, dependency: N) {
        self.entries.entry(node).or_default().push(dependency);
    }

    /// Dependencies of `node`, empty for nodes that are not keys
    pub fn dependencies(&self, node: &N) -> &[N] {
        self.entries.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, node: &N) -> bool {
        self.entries.contains_key(node)
    }

    /// Whether `node` appears anywhere, as a key or as a dependency
    pub fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node) || self.entries.values().any(|deps| deps.contains(node))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &N> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.entries.iter().map(|(node, deps)| (node, deps.as_slice()))
    }

    /// Every node, keys first, then implicit leaves in first-seen order
    pub fn nodes(&self) -> Vec<&N> {
        let mut seen: IndexMap<&N, ()> = self.entries.keys().map(|node| (node, ())).collect();
        for deps in self.entries.values() {
            for dep in deps {
                seen.entry(dep).or_insert(());
            }
        }
        seen.into_keys().collect()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of edges, counting duplicates
    pub fn edge_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl<N: Eq + Hash + Clone> DependencyMap<N> {
    /// Build a map from a petgraph graph
    ///
    /// Nodes become keys in index order and edges are appended in edge index
    /// order, so the result is deterministic for a given graph.
    pub fn from_digraph<E>(graph: &DiGraph<N, E>) -> Self {
        let mut map = Self::with_capacity(graph.node_count());
        for idx in graph.node_indices() {
            map.add_node(graph[idx].clone());
        }
        for edge in graph.edge_references() {
            map.add_dependency(graph[edge.source()].clone(), graph[edge.target()].clone());
        }
        map
    }

    /// Convert to a petgraph graph, including implicit leaves as nodes
    pub fn to_digraph(&self) -> (DiGraph<N, ()>, HashMap<N, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<N, NodeIndex> = HashMap::new();

        for node in self.nodes() {
            let idx = graph.add_node(node.clone());
            indices.insert(node.clone(), idx);
        }

        for (node, deps) in &self.entries {
            let from = indices[node];
            for dep in deps {
                graph.add_edge(from, indices[dep], ());
            }
        }

        (graph, indices)
    }
}

impl<N: Eq + Hash> From<IndexMap<N, Vec<N>>> for DependencyMap<N> {
    fn from(entries: IndexMap<N, Vec<N>>) -> Self {
        Self { entries }
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for DependencyMap<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<N: Eq + Hash> Extend<(N, Vec<N>)> for DependencyMap<N> {
    fn extend<I: IntoIterator<Item = (N, Vec<N>)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, N: Eq + Hash> IntoIterator for &'a DependencyMap<N> {
    type Item = (&'a N, &'a Vec<N>);
    type IntoIter = indexmap::map::Iter<'a, N, Vec<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
