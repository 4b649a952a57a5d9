use crate::ast::{
    BinaryOp, BinderX, Binders, BlockX, CmdX, Constant, DeclX, ExprX, HideRevealMode, ProgramX,
    Quant, ScopeMode, Trigger, Typ, TypX, Typs, UnaryOp,
};
use crate::ast_util::decl_name;
use crate::util::vec_map;
use sise::{Node, Writer};

pub fn str_to_node(s: &str) -> Node {
    Node::Atom(s.to_string())
}

pub fn macro_push_node(nodes: &mut Vec<Node>, node: Node) {
    // turn a - b into a-b
    let len = nodes.len();
    if len != 0 {
        if let Node::Atom(cur) = &node {
            if let Node::Atom(prev) = &nodes[len - 1] {
                if node == "-" || prev == ":" || (prev != "-" && prev.ends_with("-")) {
                    nodes[len - 1] = Node::Atom(prev.to_owned() + cur);
                    return;
                }
            }
        }
    }
    nodes.push(node);
}

/*
examples:
  node!(my_atom)
  node!((atom1 atom2 atom-3))
  node!((atom1 (10 20 30) atom-3))
  let x = node!((10 20 30));
  node!((atom1 {x} atom-3))
There's some limited support for atoms containing hyphens, at least for atoms inside a list.
*/
#[macro_export]
macro_rules! node {
    ( - ) => { Node::Atom("-".to_string()) };
    ( { $x:expr } ) => { $x };
    ( [ $x:expr ] ) => { $x.clone() };
    ( $x:literal ) => { Node::Atom($x.to_string()) };
    ( ( $( $x:tt )* ) ) => {
        {
            #[allow(unused_mut)]
            let mut v = Vec::new();
            $(macro_push_node(&mut v, node!($x));)*
            Node::List(v)
        }
    };
    ( $x:tt ) => { Node::Atom(stringify!($x).to_string()) };
}
#[macro_export]
macro_rules! nodes {
   ( $( $x:tt )* ) => {
       {
           let mut v = Vec::new();
           $(macro_push_node(&mut v, node!($x));)*
           Node::List(v)
       }
   };
}

pub fn typ_to_node(typ: &TypX) -> Node {
    match typ {
        TypX::Bool => str_to_node("Bool"),
        TypX::Int => str_to_node("Int"),
        TypX::Named(name) => str_to_node(name),
    }
}

pub fn typs_to_node(typs: &Typs) -> Node {
    Node::List(vec_map(typs, |t| typ_to_node(t)))
}

fn binder_to_node(binder: &BinderX<Typ>) -> Node {
    Node::List(vec![str_to_node(&binder.name), typ_to_node(&binder.a)])
}

fn binders_to_node(binders: &Binders<Typ>) -> Node {
    Node::List(vec_map(binders, |b| binder_to_node(b)))
}

fn trigger_to_node(trigger: &Trigger) -> Node {
    Node::List(vec_map(trigger, |e| expr_to_node(e)))
}

pub fn expr_to_node(expr: &ExprX) -> Node {
    match expr {
        ExprX::Const(Constant::Bool(b)) => Node::Atom(b.to_string()),
        ExprX::Const(Constant::Int(i)) => Node::Atom(i.to_string()),
        ExprX::Var(x) => str_to_node(x),
        ExprX::Global(decl) => match decl_name(decl) {
            Some(name) => str_to_node(name),
            None => str_to_node("_"),
        },
        ExprX::Apply(decl, exprs) => {
            let mut nodes: Vec<Node> = Vec::new();
            match decl_name(decl) {
                Some(name) => nodes.push(str_to_node(name)),
                None => nodes.push(str_to_node("_")),
            }
            for expr in exprs.iter() {
                nodes.push(expr_to_node(expr));
            }
            Node::List(nodes)
        }
        ExprX::Unary(UnaryOp::Not, e) => nodes!(not {expr_to_node(e)}),
        ExprX::Binary(op, lhs, rhs) => {
            let sop = match op {
                BinaryOp::And => "and",
                BinaryOp::Or => "or",
                BinaryOp::Implies => "=>",
                BinaryOp::Eq => "=",
                BinaryOp::Le => "<=",
                BinaryOp::Ge => ">=",
                BinaryOp::Lt => "<",
                BinaryOp::Gt => ">",
                BinaryOp::Add => "+",
                BinaryOp::Sub => "-",
                BinaryOp::Mul => "*",
            };
            Node::List(vec![str_to_node(sop), expr_to_node(lhs), expr_to_node(rhs)])
        }
        ExprX::Quant(quant, binders, triggers, body) => {
            let squant = match quant {
                Quant::Forall => "forall",
                Quant::Exists => "exists",
            };
            let body_node = if triggers.is_empty() {
                expr_to_node(body)
            } else {
                let mut nodes: Vec<Node> = Vec::new();
                nodes.push(str_to_node("!"));
                nodes.push(expr_to_node(body));
                for trigger in triggers.iter() {
                    nodes.push(str_to_node(":pattern"));
                    nodes.push(trigger_to_node(trigger));
                }
                Node::List(nodes)
            };
            Node::List(vec![str_to_node(squant), binders_to_node(binders), body_node])
        }
    }
}

pub fn cmd_to_node(cmd: &CmdX) -> Node {
    match cmd {
        CmdX::Assert(e) => nodes!(assert {expr_to_node(e)}),
        CmdX::Assume(e) => nodes!(assume {expr_to_node(e)}),
        CmdX::Assign(x, e) => nodes!(assign {str_to_node(x)} {expr_to_node(e)}),
        CmdX::Havoc(x) => nodes!(havoc {str_to_node(x)}),
        CmdX::HideReveal(mode, function) => {
            let mut nodes: Vec<Node> = Vec::new();
            nodes.push(match mode {
                HideRevealMode::Hide => str_to_node("hide"),
                HideRevealMode::Reveal => str_to_node("reveal"),
            });
            if let Some(f) = function {
                if let Some(name) = decl_name(f) {
                    nodes.push(str_to_node(name));
                }
            }
            Node::List(nodes)
        }
        CmdX::ChangeScope(ScopeMode::Push) => nodes!(push),
        CmdX::ChangeScope(ScopeMode::Pop) => nodes!(pop),
    }
}

pub fn block_to_node(block: &BlockX) -> Node {
    let mut nodes: Vec<Node> = Vec::new();
    nodes.push(str_to_node("block"));
    nodes.push(str_to_node(&block.label));
    for cmd in block.cmds.iter() {
        nodes.push(cmd_to_node(cmd));
    }
    if !block.successors.is_empty() {
        let mut goto: Vec<Node> = Vec::new();
        goto.push(str_to_node("goto"));
        for successor in &block.successors {
            goto.push(str_to_node(successor));
        }
        nodes.push(Node::List(goto));
    }
    Node::List(nodes)
}

pub fn decl_to_node(decl: &DeclX) -> Node {
    match decl {
        DeclX::Axiom { expr, can_hide, defines, keep } => {
            let mut nodes: Vec<Node> = Vec::new();
            nodes.push(str_to_node("axiom"));
            if *can_hide {
                nodes.push(str_to_node(":can-hide"));
            }
            if *keep {
                nodes.push(str_to_node(":keep"));
            }
            if let Some(f) = defines {
                if let Some(name) = decl_name(f) {
                    nodes.push(Node::List(vec![str_to_node("defines"), str_to_node(name)]));
                }
            }
            nodes.push(expr_to_node(expr));
            Node::List(nodes)
        }
        DeclX::Function { name, params, ret, body, keep } => {
            let mut nodes: Vec<Node> = Vec::new();
            nodes.push(str_to_node("declare-fun"));
            if *keep {
                nodes.push(str_to_node(":keep"));
            }
            nodes.push(str_to_node(name));
            nodes.push(typs_to_node(params));
            nodes.push(typ_to_node(ret));
            if let Some(body) = body {
                nodes.push(expr_to_node(body));
            }
            Node::List(nodes)
        }
        DeclX::Const { name, typ, keep } => {
            let mut nodes: Vec<Node> = Vec::new();
            nodes.push(str_to_node("declare-const"));
            if *keep {
                nodes.push(str_to_node(":keep"));
            }
            nodes.push(str_to_node(name));
            nodes.push(typ_to_node(typ));
            Node::List(nodes)
        }
        DeclX::GlobalVar { name, typ } => {
            nodes!(declare-var {str_to_node(name)} {typ_to_node(typ)})
        }
        DeclX::TypeDecl { name } => nodes!(declare-sort {str_to_node(name)}),
        DeclX::Procedure { name, blocks } => {
            let mut nodes: Vec<Node> = Vec::new();
            nodes.push(str_to_node("procedure"));
            nodes.push(str_to_node(name));
            if let Some(blocks) = blocks {
                for block in blocks.iter() {
                    nodes.push(block_to_node(block));
                }
            }
            Node::List(nodes)
        }
    }
}

pub fn program_to_node(program: &ProgramX) -> Node {
    let mut nodes: Vec<Node> = Vec::new();
    nodes.push(str_to_node("program"));
    for decl in program.declarations.iter() {
        nodes.push(decl_to_node(decl));
    }
    Node::List(nodes)
}

pub struct NodeWriter {}

impl NodeWriter {
    pub(crate) fn new() -> Self {
        NodeWriter {}
    }

    pub(crate) fn write_node(
        &mut self,
        writer: &mut sise::SpacedStringWriter,
        node: &Node,
        break_len: usize,
        brk: bool,
    ) {
        let opts =
            sise::SpacedStringWriterNodeOptions { break_line_len: if brk { 0 } else { break_len } };
        match node {
            Node::Atom(a) => {
                writer.write_atom(a, opts).unwrap();
            }
            Node::List(l) => {
                writer.begin_list(opts).unwrap();
                let mut brk = false;
                let mut was_pattern = false;
                for n in l {
                    self.write_node(writer, n, break_len + 1, brk && !was_pattern);
                    was_pattern = false;
                    match n {
                        Node::Atom(a)
                            if a == "axiom"
                                || a == "procedure"
                                || a == "block"
                                || a == "assert"
                                || a == "assume"
                                || a == "forall"
                                || a == "exists"
                                || a == "!" =>
                        {
                            brk = true;
                        }
                        Node::Atom(a) if a == ":pattern" => {
                            was_pattern = true;
                        }
                        _ => {}
                    }
                }
                writer.end_list(()).unwrap();
            }
        }
    }

    pub(crate) fn node_to_string_indent(&mut self, indent: &String, node: &Node) -> String {
        let indentation = " ";
        let style = sise::SpacedStringWriterStyle {
            line_break: &("\n".to_string() + &indent),
            indentation,
        };
        let mut result = String::new();
        let mut string_writer = sise::SpacedStringWriter::new(style, &mut result);
        self.write_node(&mut string_writer, &node, 80, false);
        string_writer.finish(()).unwrap();
        // Clean up result:
        let lines: Vec<&str> = result.lines().collect();
        let mut result: String = "".to_string();
        let mut i = 0;
        while i < lines.len() {
            let mut line = lines[i].to_owned();
            // Consolidate closing ) lines:
            if line.trim() == ")" {
                while i + 1 < lines.len() && lines[i + 1].trim() == ")" {
                    line = lines[i + 1].to_string() + &indentation[1..] + line.trim();
                    i += 1;
                }
            }
            result.push_str(&line);
            i += 1;
            if i < lines.len() {
                result.push_str("\n");
            }
        }
        result
    }
}

pub fn node_to_string(node: &Node) -> String {
    NodeWriter::new().node_to_string_indent(&"".to_string(), node)
}

impl std::fmt::Debug for BinderX<Typ> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&node_to_string(&binder_to_node(self)))
    }
}

impl std::fmt::Debug for ExprX {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&node_to_string(&expr_to_node(self)))
    }
}

impl std::fmt::Debug for CmdX {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&node_to_string(&cmd_to_node(self)))
    }
}

impl std::fmt::Debug for BlockX {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&node_to_string(&block_to_node(self)))
    }
}

impl std::fmt::Debug for DeclX {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&node_to_string(&decl_to_node(self)))
    }
}

impl std::fmt::Debug for ProgramX {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&node_to_string(&program_to_node(self)))
    }
}
