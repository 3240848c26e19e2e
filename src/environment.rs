use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Scope {
    store: HashMap<String, Object>,
    outer: Option<Environment>,
}

/// A lexical scope, shared by every closure that captured it. Outer links
/// always point toward an ancestor scope, so the chain is acyclic.
#[derive(Debug, Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_enclosed(outer: &Environment) -> Self {
        Self(Rc::new(RefCell::new(Scope {
            store: HashMap::new(),
            outer: Some(outer.clone()),
        })))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        let scope = self.0.borrow();
        scope
            .store
            .get(name)
            .cloned()
            .or_else(|| scope.outer.as_ref().and_then(|outer| outer.get(name)))
    }

    pub fn set(&self, name: &str, val: Object) {
        self.0.borrow_mut().store.insert(name.to_owned(), val);
    }
}

// Functions compare by the identity of their captured scope.
impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let env = Environment::new();
        assert_eq!(env.get("x"), None);

        env.set("x", Object::Integer(5));
        assert_eq!(env.get("x"), Some(Object::Integer(5)));

        env.set("x", Object::Integer(6));
        assert_eq!(env.get("x"), Some(Object::Integer(6)));
    }

    #[test]
    fn test_lookup_walks_outer_chain() {
        let outer = Environment::new();
        outer.set("x", Object::Integer(1));
        outer.set("y", Object::Integer(2));

        let inner = Environment::with_enclosed(&outer);
        inner.set("y", Object::Integer(20));

        assert_eq!(inner.get("x"), Some(Object::Integer(1)));
        assert_eq!(inner.get("y"), Some(Object::Integer(20)));
        assert_eq!(outer.get("y"), Some(Object::Integer(2)));
        assert_eq!(inner.get("z"), None);
    }

    #[test]
    fn test_inner_binding_does_not_leak_outward() {
        let outer = Environment::new();
        let inner = Environment::with_enclosed(&outer);
        inner.set("x", Object::Integer(1));

        assert_eq!(outer.get("x"), None);
    }

    #[test]
    fn test_shared_scope_sees_later_bindings() {
        // Two enclosed scopes over the same outer environment observe
        // bindings added to it after they were created.
        let outer = Environment::new();
        let a = Environment::with_enclosed(&outer);
        let b = Environment::with_enclosed(&outer);

        outer.set("x", Object::Integer(7));
        assert_eq!(a.get("x"), Some(Object::Integer(7)));
        assert_eq!(b.get("x"), Some(Object::Integer(7)));
    }
}
