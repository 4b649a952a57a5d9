use crate::ast::Program;
use crate::dep_graph::DepGraph;
use crate::prune;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PruneOptions {
    /// When false, every procedure receives the full declaration list.
    pub prune: bool,
}

impl Default for PruneOptions {
    fn default() -> Self {
        PruneOptions { prune: true }
    }
}

/// Per-program pruning context. The dependency graph is built at most once,
/// on first use, even when procedures are pruned from multiple threads; the
/// graph is immutable afterwards and all reads are lock-free.
pub struct Ctx {
    pub program: Program,
    pub options: PruneOptions,
    dependencies: OnceCell<Option<Arc<DepGraph>>>,
}

impl Ctx {
    pub fn new(program: &Program, options: PruneOptions) -> Ctx {
        Ctx { program: program.clone(), options, dependencies: OnceCell::new() }
    }

    /// The program's declaration dependency graph, or None when pruning is
    /// disabled.
    pub fn declaration_dependencies(&self) -> Option<&Arc<DepGraph>> {
        self.dependencies
            .get_or_init(|| prune::compute_declaration_dependencies(&self.options, &self.program))
            .as_ref()
    }
}
