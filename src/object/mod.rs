use crate::ast;
use crate::builtins::Builtin;
use crate::environment::Environment;
use std::cell::RefCell;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

mod eval_error;
pub use eval_error::EvalError;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Arrays are shared by reference; aliasing mutation is part of the
/// language semantics.
pub type ArrayValue = Rc<RefCell<Vec<Object>>>;

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Function(FunctionObject),
    Builtin(Builtin),
    ReturnValue(Box<Object>),
    Integer(i64),
    Boolean(bool),
    String(String),
    Array(ArrayValue),
    Null,
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Function(func) => write!(f, "{}", func),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(obj) => write!(f, "{}", obj),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Boolean(true) => write!(f, "truth"),
            Self::Boolean(false) => write!(f, "lie"),
            Self::String(s) => write!(f, "{}", s),
            Self::Array(a) => {
                let element_names: Vec<String> =
                    a.borrow().iter().map(Object::to_string).collect();

                write!(f, "[{}]", element_names.join(", "))
            }
            Self::Null => write!(f, "null"),
        }
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::Null
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        s.to_owned().into()
    }
}

impl From<Vec<Object>> for Object {
    fn from(elements: Vec<Object>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }
}

impl Object {
    pub fn is_return_value(&self) -> bool {
        match self {
            Self::ReturnValue(_) => true,
            _ => false,
        }
    }

    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(o) => *o,
            obj => obj,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::ReturnValue(o) => o.type_name(),
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Null => "NULL",
        }
    }

    pub fn truth_value(&self) -> bool {
        match self {
            Self::Boolean(false) => false,
            Self::Null => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionObject {
    pub name: Option<String>,
    pub parameters: Vec<ast::FunctionParameter>,
    pub return_type: Option<ast::TypeAnnotation>,
    pub body: ast::BlockStatement,
    pub env: Environment,
}

impl Display for FunctionObject {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(ast::FunctionParameter::to_string)
            .collect();

        write!(f, "fn")?;
        if let Some(name) = &self.name {
            write!(f, " {}", name)?;
        }
        write!(f, "({})", parameters.join(", "))?;
        if let Some(return_type) = &self.return_type {
            write!(f, ":{}", return_type)?;
        }
        write!(f, " {{\n{}\n}}", self.body)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_inspect() {
        assert_eq!(format!("{}", Object::Integer(-11)), "-11");
        assert_eq!(format!("{}", Object::Boolean(true)), "truth");
        assert_eq!(format!("{}", Object::Boolean(false)), "lie");
        assert_eq!(format!("{}", Object::from("hello")), "hello");
        assert_eq!(format!("{}", Object::Null), "null");
        assert_eq!(
            format!("{}", Object::from(vec![Object::Integer(1), Object::from("a")])),
            "[1, a]"
        );
    }

    #[test]
    fn test_truth_value() {
        assert!(Object::Integer(0).truth_value());
        assert!(Object::Boolean(true).truth_value());
        assert!(!Object::Boolean(false).truth_value());
        assert!(!Object::Null.truth_value());
    }

    #[test]
    fn test_unwrap_return() {
        let wrapped = Object::ReturnValue(Box::new(Object::Integer(5)));
        assert!(wrapped.is_return_value());
        assert_eq!(wrapped.unwrap_return(), Object::Integer(5));
        assert_eq!(Object::Integer(5).unwrap_return(), Object::Integer(5));
    }
}
