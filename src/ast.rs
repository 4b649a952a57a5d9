use crate::util::ArcKey;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type Ident = Arc<String>;

pub type Typ = Arc<TypX>;
pub type Typs = Arc<Vec<Typ>>;
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TypX {
    Bool,
    Int,
    Named(Ident),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Constant {
    Bool(bool),
    Int(BigInt),
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Eq,
    Le,
    Ge,
    Lt,
    Gt,
    Add,
    Sub,
    Mul,
}

pub type Binder<A> = Arc<BinderX<A>>;
pub type Binders<A> = Arc<Vec<Binder<A>>>;
#[derive(Clone, Serialize, Deserialize)] // for Debug, see printer
pub struct BinderX<A: Clone> {
    pub name: Ident,
    pub a: A,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Quant {
    Forall,
    Exists,
}

pub type Trigger = Exprs;
pub type Triggers = Arc<Vec<Trigger>>;

pub type Expr = Arc<ExprX>;
pub type Exprs = Arc<Vec<Expr>>;
#[derive(Serialize, Deserialize)] // for Debug, see printer
pub enum ExprX {
    Const(Constant),
    // bound or procedure-local variable
    Var(Ident),
    // resolved reference to a Const or GlobalVar declaration
    Global(Decl),
    // resolved application of a Function declaration
    Apply(Decl, Exprs),
    Unary(UnaryOp, Expr),
    Binary(BinaryOp, Expr, Expr),
    Quant(Quant, Binders<Typ>, Triggers, Expr),
}

/// Top-level declarations. Declarations are immutable once created and are
/// identified by reference (see DeclRef); two structurally equal declarations
/// built separately are distinct.
pub type Decl = Arc<DeclX>;
pub type Decls = Arc<Vec<Decl>>;
#[derive(Serialize, Deserialize)] // for Debug, see printer
pub enum DeclX {
    /// A closed formula. `can_hide` marks the axiom as hideable by
    /// hide/reveal directives; `defines` names the Function whose definition
    /// this axiom characterizes, if any.
    Axiom { expr: Expr, can_hide: bool, defines: Option<Decl>, keep: bool },
    /// An uninterpreted or defined symbol. A defined function's formula lives
    /// in the Axiom whose `defines` names this declaration.
    Function { name: Ident, params: Typs, ret: Typ, body: Option<Expr>, keep: bool },
    Const { name: Ident, typ: Typ, keep: bool },
    // the kinds below are never pruned
    GlobalVar { name: Ident, typ: Typ },
    TypeDecl { name: Ident },
    Procedure { name: Ident, blocks: Option<Blocks> },
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HideRevealMode {
    Hide,
    Reveal,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScopeMode {
    Push,
    Pop,
}

pub type Cmd = Arc<CmdX>;
pub type Cmds = Arc<Vec<Cmd>>;
#[derive(Serialize, Deserialize)] // for Debug, see printer
pub enum CmdX {
    Assert(Expr),
    Assume(Expr),
    Assign(Ident, Expr),
    Havoc(Ident),
    /// Hide or reveal one function's definition at this point, or, with no
    /// function, hide or reveal everything at once.
    HideReveal(HideRevealMode, Option<Decl>),
    /// Enter (Push) or leave (Pop) a hide/reveal scope.
    ChangeScope(ScopeMode),
}

pub type Block = Arc<BlockX>;
pub type Blocks = Arc<Vec<Block>>;
#[derive(Serialize, Deserialize)] // for Debug, see printer
pub struct BlockX {
    pub label: Ident,
    pub cmds: Cmds,
    /// labels of the blocks control flow may transfer to
    pub successors: Vec<Ident>,
}

pub type Program = Arc<ProgramX>;
#[derive(Serialize, Deserialize)] // for Debug, see printer
pub struct ProgramX {
    /// all top-level declarations, in program order
    pub declarations: Decls,
}

/// Pointer-identity keys for declarations and commands, usable in maps/sets.
pub type DeclRef = ArcKey<DeclX>;
pub type CmdRef = ArcKey<CmdX>;
