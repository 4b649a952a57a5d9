use crate::ast::{CmdRef, CmdX, Decl, DeclRef, HideRevealMode, ScopeMode};
use crate::dataflow::Transfer;
use im::{HashSet, Vector};

/// Which function definitions are visible at a program point: a mode plus an
/// offset set of exceptions to it. (Reveal, {}) means everything is visible,
/// (Hide, {f}) means only f is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealedState {
    pub mode: HideRevealMode,
    pub offset: HashSet<DeclRef>,
}

impl RevealedState {
    pub fn all_revealed() -> RevealedState {
        RevealedState { mode: HideRevealMode::Reveal, offset: HashSet::new() }
    }

    pub fn all_hidden() -> RevealedState {
        RevealedState { mode: HideRevealMode::Hide, offset: HashSet::new() }
    }

    pub fn is_revealed(&self, function: &Decl) -> bool {
        (self.mode == HideRevealMode::Hide) == self.offset.contains(&DeclRef::new(function))
    }
}

/// Takes the union of what is revealed. When exactly one side is in Reveal
/// mode, that side is returned as is.
pub fn merge_states(first: &RevealedState, second: &RevealedState) -> RevealedState {
    if first.mode == HideRevealMode::Reveal && second.mode == HideRevealMode::Reveal {
        let intersect = first.offset.clone().intersection(second.offset.clone());
        if intersect.len() == first.offset.len() {
            return first.clone();
        }
        return RevealedState { mode: HideRevealMode::Reveal, offset: intersect };
    }

    if first.mode == HideRevealMode::Reveal {
        return first.clone();
    }

    if second.mode == HideRevealMode::Reveal {
        return second.clone();
    }

    let union = first.offset.clone().union(second.offset.clone());
    if union.len() == first.offset.len() {
        return first.clone();
    }
    RevealedState { mode: HideRevealMode::Hide, offset: union }
}

/// Persistent stack of revealed states, one entry per open hide/reveal scope.
/// The top is the innermost scope. Never empty.
#[derive(Clone, Debug)]
pub struct ScopeStack {
    entries: Vector<RevealedState>,
}

impl ScopeStack {
    /// The state outside any scope: everything revealed.
    pub fn initial() -> ScopeStack {
        let mut entries = Vector::new();
        entries.push_back(RevealedState::all_revealed());
        ScopeStack { entries }
    }

    pub fn peek(&self) -> &RevealedState {
        self.entries.last().expect("internal error: empty hide/reveal scope stack")
    }

    pub fn push(&self, state: RevealedState) -> ScopeStack {
        let mut entries = self.entries.clone();
        entries.push_back(state);
        ScopeStack { entries }
    }

    /// Leave the innermost scope, restoring the enclosing scope's state
    /// verbatim. The scopes of well-formed input are balanced; popping the
    /// outermost entry means the caller broke that invariant.
    pub fn pop(&self) -> ScopeStack {
        assert!(self.entries.len() > 1, "internal error: unbalanced hide/reveal scopes");
        let mut entries = self.entries.clone();
        entries.pop_back();
        ScopeStack { entries }
    }

    fn replace_top(&self, state: RevealedState) -> ScopeStack {
        let mut entries = self.entries.clone();
        entries.pop_back();
        entries.push_back(state);
        ScopeStack { entries }
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

fn updated_state(
    mode: HideRevealMode,
    function: &Option<Decl>,
    state: &RevealedState,
) -> RevealedState {
    let function = match function {
        // a directive with no function resets the current scope wholesale
        None => return RevealedState { mode, offset: HashSet::new() },
        Some(f) => f,
    };
    if mode == state.mode {
        // hiding under Hide (or revealing under Reveal) changes nothing
        return state.clone();
    }
    let mut offset = state.offset.clone();
    offset.insert(DeclRef::new(function));
    RevealedState { mode: state.mode, offset }
}

/// Dataflow instantiation: nodes are commands of the per-command CFG, states
/// are scope stacks. Only the top entries participate in joins; deeper
/// entries are identical across joined paths because scope nesting is
/// structured and balanced.
pub struct RevealedAnalysis;

impl Transfer for RevealedAnalysis {
    type Node = CmdRef;
    type State = ScopeStack;

    fn empty(&self) -> ScopeStack {
        ScopeStack::initial()
    }

    fn merge(&self, first: &ScopeStack, second: &ScopeStack) -> ScopeStack {
        let merged = merge_states(first.peek(), second.peek());
        first.replace_top(merged)
    }

    fn state_equals(&self, first: &ScopeStack, second: &ScopeStack) -> bool {
        first.peek() == second.peek()
    }

    fn update(&self, node: &CmdRef, state: &ScopeStack) -> ScopeStack {
        match &*node.0 {
            CmdX::ChangeScope(ScopeMode::Push) => state.push(state.peek().clone()),
            CmdX::ChangeScope(ScopeMode::Pop) => state.pop(),
            CmdX::HideReveal(mode, function) => {
                let latest = state.peek();
                let updated = updated_state(*mode, function, latest);
                if updated == *latest {
                    state.clone()
                } else {
                    state.replace_top(updated)
                }
            }
            _ => state.clone(),
        }
    }
}
