//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `LocationId n`, its neighbors occupy the slice:
//!
//! ```text
//! road_to[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! Every road is stored in both directions.  Roads are sorted by source with
//! a stable sort, so each neighbor list keeps the order in which roads were
//! added.  The breadth-first search in [`router`](crate::router) expands
//! neighbors in that order, which makes its tie-break between equally short
//! routes deterministic for a given road list.
//!
//! # Labels
//!
//! Places are named by string labels.  The builder interns each label the
//! first time it is seen; `RoadGraph::location` and `RoadGraph::name`
//! translate in either direction.

use rustc_hash::FxHashMap;

use mf_core::LocationId;

use crate::{GraphError, GraphResult};

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected road graph over a fixed set of named places.
///
/// Built once and immutable afterwards, so a single instance can be shared
/// by reference across every state transition, route query and trial.
/// Construct with [`RoadGraphBuilder`] or [`RoadGraph::from_edges`].
#[derive(Debug, Clone)]
pub struct RoadGraph {
    /// Label of each place.  Indexed by `LocationId`.
    names: Vec<String>,

    /// Reverse lookup from label to id.
    index: FxHashMap<String, LocationId>,

    /// CSR row pointer.  Length = `location_count + 1`.
    out_start: Vec<u32>,

    /// Destination of each directed road, grouped by source.
    road_to: Vec<LocationId>,
}

impl RoadGraph {
    /// Build a graph from `"From-To"` road descriptors.
    ///
    /// Each descriptor adds a road in both directions.  Fails with
    /// [`GraphError::MalformedEdge`] if a descriptor does not split into
    /// exactly two non-empty labels.
    ///
    /// ```
    /// use mf_graph::RoadGraph;
    ///
    /// let graph = RoadGraph::from_edges(["A-B", "B-C"]).unwrap();
    /// assert_eq!(graph.location_count(), 3);
    /// assert_eq!(graph.road_count(), 4); // bidirectional
    /// ```
    pub fn from_edges<I, S>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut b = RoadGraphBuilder::new();
        for edge in edges {
            let edge = edge.as_ref();
            let (from, to) = split_edge(edge)?;
            let a = b.add_location(from);
            let c = b.add_location(to);
            b.add_road(a, c);
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed roads (twice the number of descriptors).
    pub fn road_count(&self) -> usize {
        self.road_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Labels ────────────────────────────────────────────────────────────

    /// Look up a place by label.
    pub fn location(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    /// Like [`location`](Self::location), but an unknown label is an error.
    pub fn require(&self, name: &str) -> GraphResult<LocationId> {
        self.location(name)
            .ok_or_else(|| GraphError::UnknownLocation(name.to_owned()))
    }

    /// Label of `id`.  Returns `"?"` for ids not issued by this graph.
    pub fn name(&self, id: LocationId) -> &str {
        self.names.get(id.index()).map_or("?", String::as_str)
    }

    /// Every place, in id order.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.names.len()).map(|i| LocationId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Places directly reachable from `from`, in road insertion order.
    ///
    /// Returns an empty slice for ids not issued by this graph.
    #[inline]
    pub fn neighbors(&self, from: LocationId) -> &[LocationId] {
        let i = from.index();
        if i + 1 >= self.out_start.len() {
            return &[];
        }
        let start = self.out_start[i] as usize;
        let end   = self.out_start[i + 1] as usize;
        &self.road_to[start..end]
    }

    /// `true` if a road leads directly from `from` to `to`.
    #[inline]
    pub fn is_adjacent(&self, from: LocationId, to: LocationId) -> bool {
        self.neighbors(from).contains(&to)
    }
}

/// Split `"From-To"` into its two labels.
fn split_edge(edge: &str) -> GraphResult<(&str, &str)> {
    let mut parts = edge.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) if !from.is_empty() && !to.is_empty() => Ok((from, to)),
        _ => Err(GraphError::MalformedEdge(edge.to_owned())),
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use mf_graph::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// let post = b.add_location("Post Office");
/// let alice = b.add_location("Alice's House");
/// b.add_road(post, alice);
/// let graph = b.build();
/// assert!(graph.is_adjacent(alice, post));
/// ```
#[derive(Debug, Default)]
pub struct RoadGraphBuilder {
    names:     Vec<String>,
    index:     FxHashMap<String, LocationId>,
    raw_roads: Vec<(LocationId, LocationId)>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `name`, returning its id.  Adding the same label twice returns
    /// the id issued the first time.
    pub fn add_location(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        id
    }

    /// Add a road usable in **both directions**.
    pub fn add_road(&mut self, a: LocationId, b: LocationId) {
        self.raw_roads.push((a, b));
        self.raw_roads.push((b, a));
    }

    /// Consume the builder and produce a [`RoadGraph`].
    pub fn build(self) -> RoadGraph {
        let location_count = self.names.len();

        // Stable: neighbor lists keep road insertion order.
        let mut raw = self.raw_roads;
        raw.sort_by_key(|&(from, _)| from.0);

        let road_to: Vec<LocationId> = raw.iter().map(|&(_, to)| to).collect();

        let mut out_start = vec![0u32; location_count + 1];
        for &(from, _) in &raw {
            out_start[from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[location_count] as usize, road_to.len());

        RoadGraph {
            names: self.names,
            index: self.index,
            out_start,
            road_to,
        }
    }
}
