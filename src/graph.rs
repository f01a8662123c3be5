use std::io::BufRead;
use std::str::FromStr;

use indexmap::IndexSet;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{info, warn};

use crate::config::Directedness;
use crate::error::Result;

/// External node identifier as it appears in the edge list.
pub type NodeId = i64;

/// Edge weights are expected to be non-negative, costs are meaningless otherwise.
pub type Weight = i64;

/// One `<from><sep><to><sep><weight>` line of the edge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        EdgeRecord { from, to, weight }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEdgeError {
    #[error("expected an integer at column {0}")]
    ExpectedInteger(usize),
    #[error("integer at column {0} is out of range")]
    IntegerOutOfRange(usize),
    #[error("expected a separator at column {0}")]
    ExpectedSeparator(usize),
}

/// Reads whitespace separated tokens the way a formatted stream extraction does.
struct LineCursor<'a> {
    line: &'a str,
    offset: usize,
}

impl<'a> LineCursor<'a> {
    fn new(line: &'a str) -> Self {
        LineCursor { line, offset: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.line[self.offset..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start().len();
    }

    fn integer(&mut self) -> std::result::Result<i64, ParseEdgeError> {
        self.skip_whitespace();
        let start = self.offset;
        let bytes = self.rest().as_bytes();

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits_start {
            return Err(ParseEdgeError::ExpectedInteger(start + 1));
        }

        let token = &self.rest()[..end];
        let value = token
            .parse::<i64>()
            .map_err(|_| ParseEdgeError::IntegerOutOfRange(start + 1))?;
        self.offset += end;
        Ok(value)
    }

    fn separator(&mut self) -> std::result::Result<char, ParseEdgeError> {
        self.skip_whitespace();
        let column = self.offset + 1;
        match self.rest().chars().next() {
            Some(c) if !c.is_ascii_digit() => {
                self.offset += c.len_utf8();
                Ok(c)
            }
            _ => Err(ParseEdgeError::ExpectedSeparator(column)),
        }
    }
}

impl FromStr for EdgeRecord {
    type Err = ParseEdgeError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut cursor = LineCursor::new(line);
        let from = cursor.integer()?;
        cursor.separator()?;
        let to = cursor.integer()?;
        cursor.separator()?;
        let weight = cursor.integer()?;
        Ok(EdgeRecord { from, to, weight })
    }
}

/// Adjacency entry referencing another compact index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub index: usize,
    pub weight: Weight,
}

/// Edge list compacted into a dense index space.
///
/// Node ids receive compact indices in the order they are first seen, source
/// before destination on each line. The id set doubles as the inverse mapping
/// from compact index back to the external id.
#[derive(Clone, Debug)]
pub struct GraphModel {
    ids: IndexSet<NodeId>,
    graph: DiGraph<NodeId, Weight>,
    adjacency: Vec<Vec<Neighbor>>,
    skipped_lines: usize,
}

impl GraphModel {
    pub fn from_edges<I>(edges: I, directedness: Directedness) -> Self
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut ids = IndexSet::new();
        let mut graph = DiGraph::new();

        for edge in edges {
            let from = Self::intern(&mut ids, &mut graph, edge.from);
            let to = Self::intern(&mut ids, &mut graph, edge.to);
            graph.add_edge(from, to, edge.weight);
        }

        let adjacency = compact_adjacency(&graph, directedness);
        GraphModel {
            ids,
            graph,
            adjacency,
            skipped_lines: 0,
        }
    }

    /// Parses an edge list, skipping lines that do not match the record shape.
    #[tracing::instrument(skip_all)]
    pub fn from_reader<R: BufRead>(reader: R, directedness: Directedness) -> Result<Self> {
        let mut edges = Vec::new();
        let mut skipped_lines = 0;

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            match line.parse::<EdgeRecord>() {
                Ok(edge) => edges.push(edge),
                Err(err) => {
                    warn!(line = lineno + 1, "failed to parse {:?}: {}", line, err);
                    skipped_lines += 1;
                }
            }
        }

        let mut model = Self::from_edges(edges, directedness);
        model.skipped_lines = skipped_lines;

        info!("Number of nodes: {}", model.node_count());
        info!("Number of graph entries: {}", model.edge_count());
        if skipped_lines > 0 {
            info!("Skipped lines: {}", skipped_lines);
        }
        Ok(model)
    }

    fn intern(ids: &mut IndexSet<NodeId>, graph: &mut DiGraph<NodeId, Weight>, id: NodeId) -> NodeIndex {
        let (index, is_new) = ids.insert_full(id);
        if is_new {
            graph.add_node(id);
        }
        NodeIndex::new(index)
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of edge records, parallel edges and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn node_index(&self, id: NodeId) -> Option<usize> {
        self.ids.get_index_of(&id)
    }

    pub fn node_id(&self, index: usize) -> Option<NodeId> {
        self.ids.get_index(index).copied()
    }

    /// External ids in compact index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    pub fn neighbors(&self, index: usize) -> &[Neighbor] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn graph(&self) -> &DiGraph<NodeId, Weight> {
        &self.graph
    }
}

/// Flattens the edge records into per-node adjacency lists in record order.
fn compact_adjacency(graph: &DiGraph<NodeId, Weight>, directedness: Directedness) -> Vec<Vec<Neighbor>> {
    let mut adjacency = vec![Vec::new(); graph.node_count()];
    for edge in graph.edge_references() {
        let from = edge.source().index();
        let to = edge.target().index();
        let weight = *edge.weight();
        adjacency[from].push(Neighbor { index: to, weight });
        if directedness == Directedness::Undirected {
            adjacency[to].push(Neighbor { index: from, weight });
        }
    }
    adjacency
}
