/// 1) Shrink the prover query by dropping axioms, functions, and constants
///    that the procedure under verification cannot reach. Dropping facts can
///    only weaken the query, so this never makes a wrong proof go through.
/// 2) Honor hide/reveal directives: a hideable defining axiom is only kept
///    when its function is revealed at some assertion of the procedure (or
///    when the axiom cannot be hidden at all).
use crate::ast::{Blocks, CmdX, Decl, DeclRef, DeclX, Program};
use crate::ast_util::{decl_keep, prunable};
use crate::cfg::{analysis_roots, command_flow_graph};
use crate::context::{Ctx, PruneOptions};
use crate::dataflow::DataflowAnalysis;
use crate::dep_graph::{DepGraph, DepNode};
use crate::deps::block_roots;
use crate::errors::Error;
use crate::revealed::{merge_states, RevealedAnalysis, RevealedState};
use std::sync::Arc;

pub fn compute_declaration_dependencies(
    options: &PruneOptions,
    program: &Program,
) -> Option<Arc<DepGraph>> {
    if !options.prune {
        return None;
    }
    Some(Arc::new(DepGraph::build(program)))
}

/// Whole-procedure visibility: the converged revealed state at every
/// assertion of the body, joined together, starting from all-hidden.
/// A body without directives needs no fixpoint: every assertion sees the
/// initial all-revealed state.
pub fn get_revealed_state(blocks: &Blocks) -> Result<RevealedState, Error> {
    let has_directives = blocks.iter().any(|block| {
        block
            .cmds
            .iter()
            .any(|cmd| matches!(&**cmd, CmdX::HideReveal(..) | CmdX::ChangeScope(_)))
    });
    let has_asserts = blocks
        .iter()
        .any(|block| block.cmds.iter().any(|cmd| matches!(&**cmd, CmdX::Assert(_))));
    if !has_directives {
        return Ok(if has_asserts {
            RevealedState::all_revealed()
        } else {
            RevealedState::all_hidden()
        });
    }

    let graph = command_flow_graph(blocks)?;
    let roots = analysis_roots(&graph);
    let mut analysis = DataflowAnalysis::new(
        RevealedAnalysis,
        roots,
        |cmd| graph.successors(cmd),
        |cmd| graph.predecessors(cmd),
    );
    analysis.run();

    let mut result = RevealedState::all_hidden();
    for node in graph.nodes() {
        if let CmdX::Assert(_) = &*node.0 {
            if let Some(stack) = analysis.state(node) {
                result = merge_states(&result, stack.peek());
            }
        }
    }
    Ok(result)
}

/*
 * Global variables, type declarations, and procedures are never pruned;
 * of those only type declarations affect the query text at all.
 */
/// The declarations worth sending to the prover for one procedure body.
/// With pruning disabled, no dependency graph, or no body, this is every
/// top-level declaration, unchanged.
pub fn get_live_declarations(ctx: &Ctx, blocks: Option<&Blocks>) -> Result<Vec<Decl>, Error> {
    let declarations = &ctx.program.declarations;
    let (dependencies, blocks) = match (ctx.declaration_dependencies(), blocks) {
        (Some(dependencies), Some(blocks)) => (dependencies, blocks),
        _ => return Ok(declarations.iter().cloned().collect()),
    };

    let revealed_state = get_revealed_state(blocks)?;
    let (referenced, _) = block_roots(blocks);
    let mut roots: Vec<DepNode> = referenced.into_iter().map(DepNode::Decl).collect();
    for decl in declarations.iter() {
        if decl_keep(decl) {
            roots.push(DepNode::Decl(DeclRef::new(decl)));
        }
    }

    let traverse_declaration = |parent: &DepNode, child: &DepNode| {
        let function = match parent {
            DepNode::Decl(p) if matches!(&*p.0, DeclX::Function { .. }) => p,
            _ => return true,
        };
        let can_hide = match child {
            DepNode::Decl(c) => match &*c.0 {
                DeclX::Axiom { can_hide, .. } => *can_hide,
                _ => return true,
            },
            DepNode::Merge(_) => return true,
        };
        revealed_state.is_revealed(&function.0) || !can_hide
    };
    let reachable = dependencies.reachable_from(roots, traverse_declaration);

    Ok(declarations
        .iter()
        .filter(|d| !prunable(d) || reachable.contains(&DepNode::Decl(DeclRef::new(d))))
        .cloned()
        .collect())
}
