use crate::ast::{
    BinaryOp, Binder, BinderX, Binders, Block, BlockX, Blocks, Cmd, CmdX, Cmds, Constant, Decl,
    DeclX, Expr, ExprX, HideRevealMode, Ident, Program, ProgramX, Quant, ScopeMode, Trigger,
    Triggers, Typ, TypX, Typs, UnaryOp,
};
use num_bigint::BigInt;
use std::sync::Arc;

pub fn str_ident(x: &str) -> Ident {
    Arc::new(x.to_string())
}

pub fn int_typ() -> Typ {
    Arc::new(TypX::Int)
}

pub fn bool_typ() -> Typ {
    Arc::new(TypX::Bool)
}

pub fn str_typ(x: &str) -> Typ {
    Arc::new(TypX::Named(str_ident(x)))
}

pub fn mk_typs(typs: Vec<Typ>) -> Typs {
    Arc::new(typs)
}

pub fn mk_bool(b: bool) -> Expr {
    Arc::new(ExprX::Const(Constant::Bool(b)))
}

pub fn mk_int(i: i64) -> Expr {
    Arc::new(ExprX::Const(Constant::Int(BigInt::from(i))))
}

pub fn ident_var(x: &Ident) -> Expr {
    Arc::new(ExprX::Var(x.clone()))
}

pub fn str_var(x: &str) -> Expr {
    Arc::new(ExprX::Var(str_ident(x)))
}

pub fn mk_global(decl: &Decl) -> Expr {
    Arc::new(ExprX::Global(decl.clone()))
}

pub fn mk_apply(f: &Decl, args: Vec<Expr>) -> Expr {
    Arc::new(ExprX::Apply(f.clone(), Arc::new(args)))
}

pub fn mk_not(e: &Expr) -> Expr {
    Arc::new(ExprX::Unary(UnaryOp::Not, e.clone()))
}

pub fn mk_binary(op: BinaryOp, e1: &Expr, e2: &Expr) -> Expr {
    Arc::new(ExprX::Binary(op, e1.clone(), e2.clone()))
}

pub fn mk_implies(e1: &Expr, e2: &Expr) -> Expr {
    mk_binary(BinaryOp::Implies, e1, e2)
}

pub fn ident_binder(x: &Ident, typ: &Typ) -> Binder<Typ> {
    Arc::new(BinderX { name: x.clone(), a: typ.clone() })
}

pub fn mk_binders(binders: Vec<Binder<Typ>>) -> Binders<Typ> {
    Arc::new(binders)
}

pub fn mk_trigger(exprs: Vec<Expr>) -> Trigger {
    Arc::new(exprs)
}

pub fn mk_triggers(triggers: Vec<Trigger>) -> Triggers {
    Arc::new(triggers)
}

pub fn mk_forall(binders: &Binders<Typ>, triggers: &Triggers, body: &Expr) -> Expr {
    Arc::new(ExprX::Quant(Quant::Forall, binders.clone(), triggers.clone(), body.clone()))
}

pub fn mk_exists(binders: &Binders<Typ>, triggers: &Triggers, body: &Expr) -> Expr {
    Arc::new(ExprX::Quant(Quant::Exists, binders.clone(), triggers.clone(), body.clone()))
}

pub fn mk_axiom(expr: &Expr, can_hide: bool, defines: Option<&Decl>, keep: bool) -> Decl {
    Arc::new(DeclX::Axiom {
        expr: expr.clone(),
        can_hide,
        defines: defines.cloned(),
        keep,
    })
}

/// The common case: a hideable axiom characterizing a function's definition.
pub fn mk_defining_axiom(expr: &Expr, defines: &Decl) -> Decl {
    mk_axiom(expr, true, Some(defines), false)
}

pub fn mk_function(name: &str, params: Vec<Typ>, ret: &Typ) -> Decl {
    Arc::new(DeclX::Function {
        name: str_ident(name),
        params: mk_typs(params),
        ret: ret.clone(),
        body: None,
        keep: false,
    })
}

pub fn mk_const(name: &str, typ: &Typ) -> Decl {
    Arc::new(DeclX::Const { name: str_ident(name), typ: typ.clone(), keep: false })
}

pub fn mk_global_var(name: &str, typ: &Typ) -> Decl {
    Arc::new(DeclX::GlobalVar { name: str_ident(name), typ: typ.clone() })
}

pub fn mk_type_decl(name: &str) -> Decl {
    Arc::new(DeclX::TypeDecl { name: str_ident(name) })
}

pub fn mk_procedure(name: &str, blocks: Option<&Blocks>) -> Decl {
    Arc::new(DeclX::Procedure { name: str_ident(name), blocks: blocks.cloned() })
}

pub fn mk_assert(e: &Expr) -> Cmd {
    Arc::new(CmdX::Assert(e.clone()))
}

pub fn mk_assume(e: &Expr) -> Cmd {
    Arc::new(CmdX::Assume(e.clone()))
}

pub fn mk_assign(x: &Ident, e: &Expr) -> Cmd {
    Arc::new(CmdX::Assign(x.clone(), e.clone()))
}

pub fn mk_havoc(x: &Ident) -> Cmd {
    Arc::new(CmdX::Havoc(x.clone()))
}

pub fn mk_hide(f: &Decl) -> Cmd {
    Arc::new(CmdX::HideReveal(HideRevealMode::Hide, Some(f.clone())))
}

pub fn mk_reveal(f: &Decl) -> Cmd {
    Arc::new(CmdX::HideReveal(HideRevealMode::Reveal, Some(f.clone())))
}

pub fn mk_hide_all() -> Cmd {
    Arc::new(CmdX::HideReveal(HideRevealMode::Hide, None))
}

pub fn mk_reveal_all() -> Cmd {
    Arc::new(CmdX::HideReveal(HideRevealMode::Reveal, None))
}

pub fn mk_push_scope() -> Cmd {
    Arc::new(CmdX::ChangeScope(ScopeMode::Push))
}

pub fn mk_pop_scope() -> Cmd {
    Arc::new(CmdX::ChangeScope(ScopeMode::Pop))
}

pub fn mk_cmds(cmds: Vec<Cmd>) -> Cmds {
    Arc::new(cmds)
}

pub fn mk_block(label: &str, cmds: Vec<Cmd>, successors: Vec<&str>) -> Block {
    Arc::new(BlockX {
        label: str_ident(label),
        cmds: mk_cmds(cmds),
        successors: successors.into_iter().map(str_ident).collect(),
    })
}

pub fn mk_blocks(blocks: Vec<Block>) -> Blocks {
    Arc::new(blocks)
}

pub fn mk_program(declarations: Vec<Decl>) -> Program {
    Arc::new(ProgramX { declarations: Arc::new(declarations) })
}

/// Name of a declaration, if its kind has one (axioms are anonymous).
pub fn decl_name(decl: &Decl) -> Option<&Ident> {
    match &**decl {
        DeclX::Axiom { .. } => None,
        DeclX::Function { name, .. } => Some(name),
        DeclX::Const { name, .. } => Some(name),
        DeclX::GlobalVar { name, .. } => Some(name),
        DeclX::TypeDecl { name } => Some(name),
        DeclX::Procedure { name, .. } => Some(name),
    }
}

/// Whether the declaration is keep-marked (always treated as a root).
pub fn decl_keep(decl: &Decl) -> bool {
    match &**decl {
        DeclX::Axiom { keep, .. } => *keep,
        DeclX::Function { keep, .. } => *keep,
        DeclX::Const { keep, .. } => *keep,
        _ => false,
    }
}

/// Whether the declaration's kind participates in pruning at all.
/// Everything else always survives.
pub fn prunable(decl: &Decl) -> bool {
    matches!(&**decl, DeclX::Axiom { .. } | DeclX::Function { .. } | DeclX::Const { .. })
}

impl ProgramX {
    pub fn axioms(&self) -> impl Iterator<Item = &Decl> {
        self.declarations.iter().filter(|d| matches!(&***d, DeclX::Axiom { .. }))
    }

    pub fn functions(&self) -> impl Iterator<Item = &Decl> {
        self.declarations.iter().filter(|d| matches!(&***d, DeclX::Function { .. }))
    }

    pub fn constants(&self) -> impl Iterator<Item = &Decl> {
        self.declarations.iter().filter(|d| matches!(&***d, DeclX::Const { .. }))
    }
}
