use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Join-semilattice transfer functions for a forward worklist analysis.
pub trait Transfer {
    type Node: Eq + Hash + Clone;
    type State: Clone;

    /// The state seeded at each root.
    fn empty(&self) -> Self::State;
    /// Join two states. Must be commutative, associative, and idempotent
    /// up to state_equals.
    fn merge(&self, first: &Self::State, second: &Self::State) -> Self::State;
    fn state_equals(&self, first: &Self::State, second: &Self::State) -> bool;
    /// The effect of one node on an incoming state.
    fn update(&self, node: &Self::Node, state: &Self::State) -> Self::State;
}

/// Forward worklist fixpoint over an arbitrary node type. Termination is the
/// instantiation's obligation: the state lattice must have finite height and
/// update must be monotone.
pub struct DataflowAnalysis<T, FNext, FPrev>
where
    T: Transfer,
    FNext: Fn(&T::Node) -> Vec<T::Node>,
    FPrev: Fn(&T::Node) -> Vec<T::Node>,
{
    transfer: T,
    roots: Vec<T::Node>,
    get_next: FNext,
    get_previous: FPrev,
    states: HashMap<T::Node, T::State>,
}

impl<T, FNext, FPrev> DataflowAnalysis<T, FNext, FPrev>
where
    T: Transfer,
    FNext: Fn(&T::Node) -> Vec<T::Node>,
    FPrev: Fn(&T::Node) -> Vec<T::Node>,
{
    pub fn new(transfer: T, roots: Vec<T::Node>, get_next: FNext, get_previous: FPrev) -> Self {
        DataflowAnalysis { transfer, roots, get_next, get_previous, states: HashMap::new() }
    }

    /// Run to fixpoint. Each root is seeded with the empty state; a node's
    /// incoming state is the join of all predecessor states computed so far
    /// (falling back to the node's own stored state when no predecessor has
    /// run yet); successors are re-queued whenever a node's state changes.
    pub fn run(&mut self) {
        let mut queue: VecDeque<T::Node> = VecDeque::new();
        for root in &self.roots {
            self.states.insert(root.clone(), self.transfer.empty());
            queue.push_back(root.clone());
        }
        let mut steps: usize = 0;
        while let Some(node) = queue.pop_front() {
            steps += 1;
            // diagnostic aid for non-monotone instantiations; not a semantic limit
            debug_assert!(
                steps <= (self.states.len() + 1) * 1024,
                "internal error: dataflow analysis failed to converge"
            );
            let previous = (self.get_previous)(&node);
            let mut incoming: Option<T::State> = None;
            for p in &previous {
                if let Some(s) = self.states.get(p) {
                    incoming = Some(match incoming {
                        None => s.clone(),
                        Some(acc) => self.transfer.merge(&acc, s),
                    });
                }
            }
            let incoming = match incoming {
                Some(s) => s,
                None => self
                    .states
                    .get(&node)
                    .expect("internal error: dequeued node with no incoming state")
                    .clone(),
            };
            let new_state = self.transfer.update(&node, &incoming);
            let changed = match self.states.get(&node) {
                None => true,
                Some(old) => !self.transfer.state_equals(old, &new_state),
            };
            if changed {
                self.states.insert(node.clone(), new_state);
                for next in (self.get_next)(&node) {
                    queue.push_back(next);
                }
            }
        }
    }

    pub fn state(&self, node: &T::Node) -> Option<&T::State> {
        self.states.get(node)
    }

    pub fn states(&self) -> &HashMap<T::Node, T::State> {
        &self.states
    }
}
