//! Node Identity
//!
//! Every payload stored in a [`DAGraph`](crate::graph::DAGraph) exposes a
//! stable identity string. Lookup and equality inside the graph go through
//! this identity only, never through the payload's own `PartialEq`.

use std::rc::Rc;
use std::sync::Arc;

/// A payload that can be stored in the graph.
///
/// Two payloads returning the same id are the same node as far as the
/// graph is concerned.
pub trait Identifiable {
    /// The unique identity of this payload.
    fn id(&self) -> &str;
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Rc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Bare strings are their own identity.
impl Identifiable for str {
    fn id(&self) -> &str {
        self
    }
}

impl Identifiable for String {
    fn id(&self) -> &str {
        self.as_str()
    }
}
