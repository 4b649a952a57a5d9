use crate::ast::{Block, Blocks, CmdRef, Ident};
use crate::errors::{error_with_label, Error};
use crate::graph::Graph;
use std::collections::HashMap;

/// Map from block label to the blocks that transfer control to it.
/// The blocks handed over after splitting carry successor labels only.
pub fn compute_predecessors(blocks: &Blocks) -> HashMap<Ident, Vec<Block>> {
    let mut predecessors: HashMap<Ident, Vec<Block>> = HashMap::new();
    for block in blocks.iter() {
        for successor in &block.successors {
            predecessors.entry(successor.clone()).or_insert_with(Vec::new).push(block.clone());
        }
    }
    predecessors
}

/// Build the per-command control-flow graph of a procedure body: an edge
/// between consecutive commands of each block, and an edge from the last
/// command of each predecessor block to the first command of its successor.
///
/// An empty predecessor that has predecessors of its own is an internal
/// invariant violation (block splitting fuses empty intermediate blocks
/// away); an empty predecessor without any is skipped.
pub fn command_flow_graph(blocks: &Blocks) -> Result<Graph<CmdRef>, Error> {
    let predecessors = compute_predecessors(blocks);
    let mut graph: Graph<CmdRef> = Graph::new();
    for block in blocks.iter() {
        for cmd in block.cmds.iter() {
            graph.add_node(&CmdRef::new(cmd));
        }
        if let Some(first) = block.cmds.first() {
            for predecessor in predecessors.get(&block.label).unwrap_or(&Vec::new()) {
                match predecessor.cmds.last() {
                    Some(last) => {
                        graph.add_edge(&CmdRef::new(last), &CmdRef::new(first));
                    }
                    None => {
                        if predecessors.contains_key(&predecessor.label) {
                            return Err(error_with_label(
                                "internal error: empty block on a control-flow path",
                                &predecessor.label,
                            ));
                        }
                    }
                }
            }
        }
        for pair in block.cmds.windows(2) {
            graph.add_edge(&CmdRef::new(&pair[0]), &CmdRef::new(&pair[1]));
        }
    }
    Ok(graph)
}

/// Roots for a forward analysis over the command graph: the commands without
/// incoming edges, or the first command overall when the graph is one big
/// cycle. For well-formed input this is the entry block's first command.
pub fn analysis_roots(graph: &Graph<CmdRef>) -> Vec<CmdRef> {
    let sources = graph.sources();
    if sources.is_empty() {
        graph.first().cloned().into_iter().collect()
    } else {
        sources
    }
}
