use crate::ast::{Expr, ExprX};

fn expr_visitor_rec<F: FnMut(&Expr)>(expr: &Expr, visit_triggers: bool, f: &mut F) {
    f(expr);
    match &**expr {
        ExprX::Const(_) => {}
        ExprX::Var(_) => {}
        ExprX::Global(_) => {}
        ExprX::Apply(_, args) => {
            for arg in args.iter() {
                expr_visitor_rec(arg, visit_triggers, f);
            }
        }
        ExprX::Unary(_, e1) => {
            expr_visitor_rec(e1, visit_triggers, f);
        }
        ExprX::Binary(_, e1, e2) => {
            expr_visitor_rec(e1, visit_triggers, f);
            expr_visitor_rec(e2, visit_triggers, f);
        }
        ExprX::Quant(_, _, triggers, body) => {
            if visit_triggers {
                for trigger in triggers.iter() {
                    for e in trigger.iter() {
                        expr_visitor_rec(e, visit_triggers, f);
                    }
                }
            }
            expr_visitor_rec(body, visit_triggers, f);
        }
    }
}

/// Preorder walk over an expression and all its descendants, trigger
/// expressions included.
pub(crate) fn expr_visitor<F: FnMut(&Expr)>(expr: &Expr, f: &mut F) {
    expr_visitor_rec(expr, true, f);
}

/// Preorder walk that does not descend into trigger positions
/// (used when triggers are handled separately).
pub(crate) fn expr_visitor_skip_triggers<F: FnMut(&Expr)>(expr: &Expr, f: &mut F) {
    expr_visitor_rec(expr, false, f);
}
