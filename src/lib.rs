pub mod ast;
pub mod ast_util;
pub mod cfg;
pub mod context;
pub mod dataflow;
pub mod dep_graph;
pub mod deps;
pub mod errors;
pub mod graph;
pub mod printer;
pub mod prune;
pub mod revealed;
pub mod util;

mod ast_visitor;
