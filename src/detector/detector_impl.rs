use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::slice;

use serde::Serialize;

use crate::constants::output::CYCLE_SEPARATOR;
use crate::graph::DependencyMap;

/// One cycle as the literal path walked, closed on its first node
///
/// `[A, B, C, A]` means A depends on B, B on C and C back on A. A self-loop
/// is `[A, A]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle<N> {
    nodes: Vec<N>,
}

impl<N> Cycle<N> {
    fn new(nodes: Vec<N>) -> Self {
        debug_assert!(nodes.len() >= 2, "a cycle path has at least two entries");
        Self { nodes }
    }

    /// The closed path, first and last entries equal
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// The node the back edge pointed at
    pub fn entry(&self) -> &N {
        &self.nodes[0]
    }

    /// Number of distinct nodes on the loop (1 for a self-loop)
    pub fn distinct_len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_self_loop(&self) -> bool {
        self.nodes.len() == 2
    }

    /// Consecutive `(from, to)` pairs along the loop
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Convert every node, e.g. tokens into their display names
    pub fn map<M, F: FnMut(&N) -> M>(&self, f: F) -> Cycle<M> {
        Cycle {
            nodes: self.nodes.iter().map(f).collect(),
        }
    }

    pub fn format_with<F: FnMut(&N) -> String>(&self, formatter: F) -> String {
        format_cycle_with(&self.nodes, formatter)
    }
}

impl<N: PartialEq> Cycle<N> {
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }
}

impl<N: fmt::Display> fmt::Display for Cycle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cycle(&self.nodes))
    }
}

impl<'a, N> IntoIterator for &'a Cycle<N> {
    type Item = &'a N;
    type IntoIter = slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Outcome of one detection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult<N> {
    cycles: Vec<Cycle<N>>,
}

impl<N> Default for DetectionResult<N> {
    fn default() -> Self {
        Self { cycles: Vec::new() }
    }
}

impl<N> DetectionResult<N> {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// All cycles in discovery order
    pub fn cycles(&self) -> &[Cycle<N>] {
        &self.cycles
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<Cycle<N>> {
        self.cycles
    }

    /// Keep only the cycles passing `predicate`
    pub fn retain<F: FnMut(&Cycle<N>) -> bool>(&mut self, predicate: F) {
        self.cycles.retain(predicate);
    }
}

impl<N: PartialEq> DetectionResult<N> {
    /// Cycles that pass through `node`
    pub fn cycles_involving<'r>(&'r self, node: &'r N) -> impl Iterator<Item = &'r Cycle<N>> {
        self.cycles.iter().filter(move |cycle| cycle.contains(node))
    }
}

impl<N> FromIterator<Cycle<N>> for DetectionResult<N> {
    fn from_iter<I: IntoIterator<Item = Cycle<N>>>(iter: I) -> Self {
        Self {
            cycles: iter.into_iter().collect(),
        }
    }
}

/// Depth-first cycle detector over a [`DependencyMap`]
///
/// The detector borrows the map for its whole lifetime and owns the traversal
/// buffers, which are cleared at the start of every [`detect`] call. Because
/// `detect` takes `&mut self`, two runs on one detector can never overlap;
/// use one detector per thread over a shared map instead.
///
/// Every back edge found during the walk yields one cycle, so overlapping
/// cycles whose shared nodes were already fully explored are not
/// re-enumerated. At least one cycle is reported for every strongly
/// connected component the walk enters.
///
/// [`detect`]: CycleDetector::detect
pub struct CycleDetector<'a, N: Eq + Hash> {
    graph: &'a DependencyMap<N>,
    visited: HashSet<&'a N>,
    on_stack: HashSet<&'a N>,
    path: Vec<&'a N>,
}

impl<'a, N: Eq + Hash + Clone> CycleDetector<'a, N> {
    /// Create a detector over `graph`; no traversal happens yet
    pub fn new(graph: &'a DependencyMap<N>) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            on_stack: HashSet::new(),
            path: Vec::new(),
        }
    }

    pub fn graph(&self) -> &'a DependencyMap<N> {
        self.graph
    }

    /// Run cycle detection over the whole map
    ///
    /// Roots are taken in key order and dependencies in list order, so the
    /// result is identical across calls as long as the map is unchanged.
    pub fn detect(&mut self) -> DetectionResult<N> {
        self.reset();

        let graph = self.graph;
        let mut cycles = Vec::new();
        for root in graph.keys() {
            if !self.visited.contains(root) {
                self.explore(root, &mut cycles);
            }
        }

        DetectionResult { cycles }
    }

    fn reset(&mut self) {
        self.visited.clear();
        self.on_stack.clear();
        self.path.clear();
    }

    // Iterative DFS: each frame holds the remaining dependencies of a node on
    // the current path, which keeps deep chains off the thread stack.
    fn explore(&mut self, root: &'a N, cycles: &mut Vec<Cycle<N>>) {
        let graph = self.graph;
        let mut frames: Vec<(&'a N, slice::Iter<'a, N>)> = Vec::new();

        self.enter(root);
        frames.push((root, graph.dependencies(root).iter()));

        while let Some((node, remaining)) = frames.last_mut() {
            let node: &'a N = *node;
            match remaining.next() {
                Some(dep) if !self.visited.contains(dep) => {
                    self.enter(dep);
                    frames.push((dep, graph.dependencies(dep).iter()));
                }
                Some(dep) if self.on_stack.contains(dep) => {
                    cycles.push(self.close_cycle(dep));
                }
                // Cross edge into a finished subtree
                Some(_) => {}
                None => {
                    frames.pop();
                    self.on_stack.remove(node);
                    self.path.pop();
                }
            }
        }
    }

    fn enter(&mut self, node: &'a N) {
        self.visited.insert(node);
        self.on_stack.insert(node);
        self.path.push(node);
    }

    fn close_cycle(&self, target: &N) -> Cycle<N> {
        let start = self
            .path
            .iter()
            .position(|&node| node == target)
            .expect("back-edge target must be on the current DFS path");

        let mut nodes: Vec<N> = self.path[start..].iter().map(|&node| node.clone()).collect();
        nodes.push(target.clone());
        Cycle::new(nodes)
    }
}

impl<N: Eq + Hash> CycleDetector<'_, N> {
    /// See [`format_cycle`]
    pub fn format_cycle(cycle: &[N]) -> String
    where
        N: fmt::Display,
    {
        format_cycle(cycle)
    }

    /// See [`format_cycle_with`]
    pub fn format_cycle_with<F>(cycle: &[N], formatter: F) -> String
    where
        F: FnMut(&N) -> String,
    {
        format_cycle_with(cycle, formatter)
    }

    /// See [`try_format_cycle_with`]
    pub fn try_format_cycle_with<F, E>(cycle: &[N], formatter: F) -> Result<String, E>
    where
        F: FnMut(&N) -> Result<String, E>,
    {
        try_format_cycle_with(cycle, formatter)
    }
}

/// Join the nodes' `Display` text with `" → "`
///
/// An empty slice formats as the empty string.
pub fn format_cycle<N: fmt::Display>(cycle: &[N]) -> String {
    format_cycle_with(cycle, ToString::to_string)
}

/// Join the formatter's text for each node with `" → "`
pub fn format_cycle_with<N, F>(cycle: &[N], formatter: F) -> String
where
    F: FnMut(&N) -> String,
{
    cycle
        .iter()
        .map(formatter)
        .collect::<Vec<_>>()
        .join(CYCLE_SEPARATOR)
}

/// Like [`format_cycle_with`], returning the first formatter error
pub fn try_format_cycle_with<N, F, E>(cycle: &[N], formatter: F) -> Result<String, E>
where
    F: FnMut(&N) -> Result<String, E>,
{
    let parts = cycle.iter().map(formatter).collect::<Result<Vec<_>, E>>()?;
    Ok(parts.join(CYCLE_SEPARATOR))
}
