use super::{statement::BlockStatement, Identifier, TypeAnnotation};
use crate::token::Token;
use derive_more::Display;
use std::fmt::{self, Formatter};
use strum_macros;

#[derive(Display, Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    StringLiteral(String),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Operator {
    #[strum(to_string = "!")]
    Bang,
    #[strum(to_string = "-")]
    Minus,
    #[strum(to_string = "+")]
    Plus,
    #[strum(to_string = "*")]
    Asterisk,
    #[strum(to_string = "/")]
    Slash,
    #[strum(to_string = "^")]
    Power,
    #[strum(to_string = "%")]
    Modulus,
    #[strum(to_string = "<")]
    LT,
    #[strum(to_string = ">")]
    GT,
    #[strum(to_string = "==")]
    Eq,
    #[strum(to_string = "!=")]
    NotEq,
    #[strum(to_string = "&")]
    BitAnd,
    #[strum(to_string = "|")]
    BitOr,
    #[strum(to_string = "~")]
    BitNot,
    #[strum(to_string = "#")]
    BitXor,
}

impl From<&Token> for Operator {
    fn from(input: &Token) -> Self {
        match input {
            Token::Bang => Self::Bang,
            Token::Minus => Self::Minus,
            Token::Plus => Self::Plus,
            Token::Asterisk => Self::Asterisk,
            Token::Slash => Self::Slash,
            Token::Power => Self::Power,
            Token::Modulus => Self::Modulus,
            Token::LT => Self::LT,
            Token::GT => Self::GT,
            Token::Eq => Self::Eq,
            Token::NotEq => Self::NotEq,
            Token::BitAnd => Self::BitAnd,
            Token::BitOr => Self::BitOr,
            Token::BitNot => Self::BitNot,
            Token::BitXor => Self::BitXor,
            _ => panic!("invalid operator token"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boolean(pub bool);

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // Source spelling, not Rust's
        write!(f, "{}", if self.0 { "truth" } else { "lie" })
    }
}

impl From<&Token> for Boolean {
    fn from(token: &Token) -> Self {
        Self(match token {
            Token::Truth => true,
            Token::Lie => false,
            _ => panic!("converting non-boolean token to boolean expr"),
        })
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, "else {}", alt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParameter {
    pub name: Identifier,
    pub type_annotation: TypeAnnotation,
}

impl fmt::Display for FunctionParameter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.type_annotation)
    }
}

/// `fn` form, both as a named declaration and as an anonymous expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub name: Option<String>,
    pub parameters: Vec<FunctionParameter>,
    pub return_type: Option<TypeAnnotation>,
    pub body: BlockStatement,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(FunctionParameter::to_string)
            .collect();

        let preamble = match &self.name {
            Some(name) => format!("fn {}", name),
            None => "fn".to_owned(),
        };

        write!(f, "{}({})", preamble, parameters.join(", "))?;
        if let Some(return_type) = &self.return_type {
            write!(f, ":{}", return_type)?;
        }
        write!(f, " {{{}}}", self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let argument_names: Vec<String> =
            self.arguments.iter().map(Expression::to_string).collect();

        write!(f, "{}({})", self.function, argument_names.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
}

impl fmt::Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let element_names: Vec<String> = self.elements.iter().map(Expression::to_string).collect();

        write!(f, "[{}]", element_names.join(", "))
    }
}

impl From<Vec<Expression>> for ArrayLiteral {
    fn from(elements: Vec<Expression>) -> Self {
        Self { elements }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}
