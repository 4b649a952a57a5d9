use crate::ast::Ident;
use std::sync::Arc;

/// Internal-invariant failures surfaced by graph construction.
/// These indicate broken input from the caller (e.g. an empty intermediate
/// block that an earlier pass should have fused away), not user errors.
#[derive(Clone, Debug)]
pub struct ErrorX {
    pub msg: String,
    pub label: Option<Ident>,
}
pub type Error = Arc<ErrorX>;

pub fn error<S: Into<String>>(msg: S) -> Error {
    Arc::new(ErrorX { msg: msg.into(), label: None })
}

pub fn error_with_label<S: Into<String>>(msg: S, label: &Ident) -> Error {
    Arc::new(ErrorX { msg: msg.into(), label: Some(label.clone()) })
}

impl std::fmt::Display for ErrorX {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            None => write!(f, "{}", self.msg),
            Some(label) => write!(f, "{} ({})", self.msg, label),
        }
    }
}
