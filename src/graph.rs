/*
 * A small directed graph over interned nodes, used both for the per-command
 * control-flow graph and for the declaration dependency graph.
 * Nodes are interned on first touch; insertion order is preserved so that
 * identical inputs produce identical iteration order.
 */
use indexmap::IndexMap;
use std::hash::Hash;

type NodeIndex = usize;

struct Node<T> {
    t: T,
    succs: Vec<NodeIndex>,
    preds: Vec<NodeIndex>,
}

pub struct Graph<T: Eq + Hash + Clone> {
    // Map T to index in nodes
    h: IndexMap<T, NodeIndex>,
    nodes: Vec<Node<T>>,
}

impl<T: Eq + Hash + Clone> Graph<T> {
    pub fn new() -> Self {
        Graph { h: IndexMap::new(), nodes: Vec::new() }
    }

    fn get_or_add(&mut self, t: &T) -> NodeIndex {
        match self.h.get(t) {
            Some(i) => *i,
            None => {
                let i = self.nodes.len();
                self.h.insert(t.clone(), i);
                self.nodes.push(Node { t: t.clone(), succs: Vec::new(), preds: Vec::new() });
                i
            }
        }
    }

    pub fn add_node(&mut self, t: &T) {
        self.get_or_add(t);
    }

    pub fn add_edge(&mut self, src: &T, dst: &T) {
        let s = self.get_or_add(src);
        let d = self.get_or_add(dst);
        self.nodes[s].succs.push(d);
        self.nodes[d].preds.push(s);
    }

    pub fn contains(&self, t: &T) -> bool {
        self.h.contains_key(t)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().map(|n| &n.t)
    }

    pub fn successors(&self, t: &T) -> Vec<T> {
        match self.h.get(t) {
            None => Vec::new(),
            Some(i) => self.nodes[*i].succs.iter().map(|j| self.nodes[*j].t.clone()).collect(),
        }
    }

    pub fn predecessors(&self, t: &T) -> Vec<T> {
        match self.h.get(t) {
            None => Vec::new(),
            Some(i) => self.nodes[*i].preds.iter().map(|j| self.nodes[*j].t.clone()).collect(),
        }
    }

    /// Nodes with no incoming edge, in insertion order.
    pub fn sources(&self) -> Vec<T> {
        self.nodes.iter().filter(|n| n.preds.is_empty()).map(|n| n.t.clone()).collect()
    }

    /// The first node inserted, used as a traversal root when the graph
    /// is fully cyclic and has no source.
    pub fn first(&self) -> Option<&T> {
        self.nodes.first().map(|n| &n.t)
    }
}

impl<T: Eq + Hash + Clone + std::fmt::Debug> std::fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Graph:\n")?;
        for node in self.nodes.iter() {
            write!(f, "    {:?}\n", node.t)?;
            for idx in node.succs.iter() {
                let succ_t = &self.nodes[*idx].t;
                write!(f, "        --> {:?}\n", succ_t)?;
            }
        }
        Ok(())
    }
}
