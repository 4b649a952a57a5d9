use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub(crate) fn vec_map<A, B, F: Fn(&A) -> B>(v: &Vec<A>, f: F) -> Vec<B> {
    v.iter().map(f).collect::<Vec<B>>()
}

/// Map/set key that hashes and compares an Arc by pointer identity,
/// not by the pointed-to value.
pub struct ArcKey<X>(pub Arc<X>);

impl<X> ArcKey<X> {
    pub fn new(x: &Arc<X>) -> Self {
        ArcKey(x.clone())
    }
}

impl<X> Clone for ArcKey<X> {
    fn clone(&self) -> Self {
        ArcKey(self.0.clone())
    }
}

impl<X> PartialEq for ArcKey<X> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<X> Eq for ArcKey<X> {}

impl<X> Hash for ArcKey<X> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl<X: std::fmt::Debug> std::fmt::Debug for ArcKey<X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
