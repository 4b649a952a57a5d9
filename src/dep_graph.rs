use crate::ast::{DeclRef, Program};
use crate::deps::program_dependencies;
use crate::graph::Graph;
use std::collections::HashSet;
use std::sync::Arc;

/// Node of the declaration dependency graph: a declaration, or a synthetic
/// merge node standing for a group of declarations that are required
/// together. Merge nodes with identical member tuples are shared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DepNode {
    Decl(DeclRef),
    Merge(Arc<Vec<DeclRef>>),
}

/// The global declaration dependency graph. Built once per program from the
/// per-declaration summaries and read-only afterwards; an edge means the
/// source's inclusion justifies the target's.
pub struct DepGraph {
    graph: Graph<DepNode>,
}

impl DepGraph {
    pub fn build(program: &Program) -> DepGraph {
        let mut graph: Graph<DepNode> = Graph::new();
        for summary in program_dependencies(program) {
            let target = DepNode::Decl(DeclRef::new(&summary.declaration));
            for group in &summary.incoming {
                if group.is_empty() {
                    continue;
                }
                let source = if group.len() == 1 {
                    DepNode::Decl(DeclRef::new(&group[0]))
                } else {
                    let members: Vec<DeclRef> = group.iter().map(DeclRef::new).collect();
                    let merge = DepNode::Merge(Arc::new(members.clone()));
                    for member in members {
                        graph.add_edge(&DepNode::Decl(member), &merge);
                    }
                    merge
                };
                graph.add_edge(&source, &target);
            }
            for outgoing in &summary.outgoing {
                graph.add_edge(&target, &DepNode::Decl(DeclRef::new(outgoing)));
            }
        }
        DepGraph { graph }
    }

    /// Reachability from the roots, following only edges that traverse_edge
    /// allows. A merge node activates only when all of its members have been
    /// visited; every member visit re-offers it, so discovery order does not
    /// matter. Roots that have no edges at all still count as reached.
    pub fn reachable_from<F>(&self, roots: Vec<DepNode>, traverse_edge: F) -> HashSet<DepNode>
    where
        F: Fn(&DepNode, &DepNode) -> bool,
    {
        let mut todo: Vec<DepNode> = roots;
        let mut visited: HashSet<DepNode> = HashSet::new();
        while let Some(node) = todo.pop() {
            if visited.contains(&node) {
                continue;
            }
            if let DepNode::Merge(members) = &node {
                if members.iter().any(|m| !visited.contains(&DepNode::Decl(m.clone()))) {
                    continue;
                }
            }
            visited.insert(node.clone());
            for next in self.graph.successors(&node) {
                if traverse_edge(&node, &next) {
                    todo.push(next);
                }
            }
        }
        visited
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DepNode> {
        self.graph.nodes()
    }
}
