mod expression;
mod statement;
pub use expression::*;
pub use statement::*;

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for stmt in self.statements.iter() {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self { value }
    }
}

/// A parameter or return type marker (`int`, `string`). Recorded for
/// diagnostics and reconstruction; never checked against call sites.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub value: String,
}

impl Display for TypeAnnotation {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for TypeAnnotation {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let program = Program {
            statements: vec![Statement::Var(VarStatement {
                name: "myVar".into(),
                value: Expression::Identifier("anotherVar".into()),
            })],
        };

        assert_eq!(format!("{}", program), "var myVar = anotherVar;");
    }
}
