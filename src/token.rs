use std::fmt::{self, Display, Formatter};
use strum_macros::EnumDiscriminants;

#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(TokenType))]
pub enum Token {
    Illegal(u8),
    Eof,

    // Identifiers and literals
    Ident(String),
    Int(String),
    String(String),

    // Type markers (`int` and `string` lex as these, not as identifiers)
    IntType,
    StringType,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Power,
    Modulus,
    Eq,
    NotEq,
    LT,
    GT,
    BitAnd,
    BitOr,
    BitNot,
    BitXor,

    // Delimiters
    Comma,
    Semicolon,
    Colon,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Else,
    Function,
    If,
    Lie,
    Print,
    Return,
    Truth,
    Var,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        match text {
            "fn" => Self::Function,
            "var" => Self::Var,
            "truth" => Self::Truth,
            "lie" => Self::Lie,
            "if" => Self::If,
            "else" => Self::Else,
            "return" => Self::Return,
            "print" => Self::Print,
            "int" => Self::IntType,
            "string" => Self::StringType,
            identifier => Self::Ident(identifier.to_owned()),
        }
    }
}

impl Token {
    pub fn is(&self, token_type: TokenType) -> bool {
        TokenType::from(self) == token_type
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int | Self::IntType => "INT",
            Self::String | Self::StringType => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Power => "^",
            Self::Modulus => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::LT => "<",
            Self::GT => ">",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitNot => "~",
            Self::BitXor => "#",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Else => "ELSE",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Lie => "LIE",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Truth => "TRUTH",
            Self::Var => "VAR",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Token::from("var"), Token::Var);
        assert_eq!(Token::from("truth"), Token::Truth);
        assert_eq!(Token::from("lie"), Token::Lie);
        assert_eq!(Token::from("int"), Token::IntType);
        assert_eq!(Token::from("string"), Token::StringType);
        assert_eq!(Token::from("integer"), Token::Ident("integer".to_owned()));
        assert_eq!(Token::from("ints"), Token::Ident("ints".to_owned()));
    }

    #[test]
    fn test_token_type_display() {
        assert_eq!(format!("{}", TokenType::Semicolon), ";");
        assert_eq!(format!("{}", TokenType::Ident), "IDENT");
        assert_eq!(format!("{}", TokenType::IntType), "INT");
        assert_eq!(format!("{}", TokenType::Print), "PRINT");
    }
}
