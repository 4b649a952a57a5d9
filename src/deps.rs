use crate::ast::{Blocks, CmdX, Decl, DeclRef, DeclX, Expr, ExprX, Program, Trigger};
use crate::ast_visitor::{expr_visitor, expr_visitor_skip_triggers};
use indexmap::IndexSet;
use std::collections::HashMap;
use std::sync::Arc;

/// What one declaration contributes to the dependency graph: groups of
/// declarations that, together, justify including it (incoming), and
/// declarations it needs declared whenever it is included (outgoing).
pub struct DependencySummary {
    pub declaration: Decl,
    pub incoming: Vec<Vec<Decl>>,
    pub outgoing: Vec<Decl>,
}

fn insert_mention(mentions: &mut IndexSet<DeclRef>, expr: &Expr) {
    match &**expr {
        ExprX::Global(decl) => {
            mentions.insert(DeclRef::new(decl));
        }
        ExprX::Apply(decl, _) => {
            mentions.insert(DeclRef::new(decl));
        }
        _ => {}
    }
}

/// The functions applied anywhere inside one trigger, in traversal order.
fn trigger_group(trigger: &Trigger) -> Vec<Decl> {
    let mut group: IndexSet<DeclRef> = IndexSet::new();
    for e in trigger.iter() {
        expr_visitor(e, &mut |e: &Expr| {
            if let ExprX::Apply(decl, _) = &**e {
                group.insert(DeclRef::new(decl));
            }
        });
    }
    group.into_iter().map(|r| r.0).collect()
}

fn collect_trigger_groups(expr: &Expr, groups: &mut Vec<Vec<Decl>>) {
    expr_visitor(expr, &mut |e: &Expr| {
        if let ExprX::Quant(_, _, triggers, _) = &**e {
            for trigger in triggers.iter() {
                let group = trigger_group(trigger);
                if !group.is_empty() {
                    groups.push(group);
                }
            }
        }
    });
}

/// An axiom with triggers (or a defining axiom) is justified by its triggers:
/// a multi-pattern trigger only fires when all of its functions appear, which
/// is what a merge node expresses. An axiom without either is justified by any
/// symbol it mentions. Either way, everything the axiom speaks about must stay
/// declared once the axiom is included.
fn axiom_dependencies(decl: &Decl) -> DependencySummary {
    let (expr, defines) = match &**decl {
        DeclX::Axiom { expr, defines, .. } => (expr, defines),
        _ => panic!("internal error: axiom_dependencies on a non-axiom"),
    };

    let mut incoming: Vec<Vec<Decl>> = Vec::new();
    collect_trigger_groups(expr, &mut incoming);
    if let Some(f) = defines {
        incoming.push(vec![f.clone()]);
    }

    let mut body_mentions: IndexSet<DeclRef> = IndexSet::new();
    expr_visitor_skip_triggers(expr, &mut |e: &Expr| insert_mention(&mut body_mentions, e));

    if incoming.is_empty() {
        // ground axiom: relevant as soon as any mentioned symbol is
        let singletons = body_mentions.iter().map(|r| vec![r.0.clone()]).collect();
        let outgoing = body_mentions.into_iter().map(|r| r.0).collect();
        return DependencySummary { declaration: decl.clone(), incoming: singletons, outgoing };
    }

    // constants inside trigger patterns still need their declarations
    let mut outgoing = body_mentions;
    expr_visitor(expr, &mut |e: &Expr| {
        if let ExprX::Global(d) = &**e {
            outgoing.insert(DeclRef::new(d));
        }
    });
    DependencySummary {
        declaration: decl.clone(),
        incoming,
        outgoing: outgoing.into_iter().map(|r| r.0).collect(),
    }
}

/// A function pulls in its defining axiom (subject to reveal gating at
/// traversal time) and every symbol its body or defining formula mentions,
/// so that those stay declared even when the formula itself is hidden.
fn function_dependencies(decl: &Decl, defining_axiom: Option<&Decl>) -> DependencySummary {
    let body = match &**decl {
        DeclX::Function { body, .. } => body,
        _ => panic!("internal error: function_dependencies on a non-function"),
    };

    let mut outgoing: IndexSet<DeclRef> = IndexSet::new();
    if let Some(axiom) = defining_axiom {
        outgoing.insert(DeclRef::new(axiom));
    }
    let mut mention = |e: &Expr| match &**e {
        ExprX::Global(d) => {
            outgoing.insert(DeclRef::new(d));
        }
        ExprX::Apply(d, _) if !Arc::ptr_eq(d, decl) => {
            outgoing.insert(DeclRef::new(d));
        }
        _ => {}
    };
    if let Some(body) = body {
        expr_visitor(body, &mut mention);
    }
    if let Some(axiom) = defining_axiom {
        if let DeclX::Axiom { expr, .. } = &**axiom {
            expr_visitor(expr, &mut mention);
        }
    }
    DependencySummary {
        declaration: decl.clone(),
        incoming: Vec::new(),
        outgoing: outgoing.into_iter().map(|r| r.0).collect(),
    }
}

fn constant_dependencies(decl: &Decl) -> DependencySummary {
    DependencySummary { declaration: decl.clone(), incoming: Vec::new(), outgoing: Vec::new() }
}

/// Dependency summaries for every prunable declaration of the program, in
/// program order: axioms, then functions, then constants. A function's
/// defining axiom is the first program axiom whose `defines` names it.
pub fn program_dependencies(program: &Program) -> Vec<DependencySummary> {
    let mut defining: HashMap<DeclRef, Decl> = HashMap::new();
    for axiom in program.axioms() {
        if let DeclX::Axiom { defines: Some(f), .. } = &**axiom {
            defining.entry(DeclRef::new(f)).or_insert_with(|| axiom.clone());
        }
    }

    let mut summaries: Vec<DependencySummary> = Vec::new();
    for axiom in program.axioms() {
        summaries.push(axiom_dependencies(axiom));
    }
    for function in program.functions() {
        let axiom = defining.get(&DeclRef::new(function));
        summaries.push(function_dependencies(function, axiom));
    }
    for constant in program.constants() {
        summaries.push(constant_dependencies(constant));
    }
    summaries
}

/// Scan a procedure's blocks for the declarations its commands reference
/// directly (the reachability roots) and for whether any hide/reveal or
/// scope-change command occurs. A function that is named by a directive but
/// never used is not a root.
pub fn block_roots(blocks: &Blocks) -> (IndexSet<DeclRef>, bool) {
    let mut roots: IndexSet<DeclRef> = IndexSet::new();
    let mut has_directives = false;
    for block in blocks.iter() {
        for cmd in block.cmds.iter() {
            match &**cmd {
                CmdX::Assert(e) | CmdX::Assume(e) | CmdX::Assign(_, e) => {
                    expr_visitor(e, &mut |e: &Expr| insert_mention(&mut roots, e));
                }
                CmdX::Havoc(_) => {}
                CmdX::HideReveal(..) | CmdX::ChangeScope(_) => {
                    has_directives = true;
                }
            }
        }
    }
    (roots, has_directives)
}
