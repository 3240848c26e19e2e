use crate::ast;
use crate::ast::{Expression, Operator, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

/// Binding power of each infix position, lowest first. The `<` comparison
/// in the Pratt loop is what makes every operator left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Bitwise,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

fn token_precedence(token: &Token) -> Precedence {
    match token {
        Token::Eq | Token::NotEq => Precedence::Equals,
        Token::LT | Token::GT => Precedence::LessGreater,
        Token::BitAnd | Token::BitOr | Token::BitXor => Precedence::Bitwise,
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Asterisk | Token::Slash | Token::Power | Token::Modulus => Precedence::Product,
        Token::BitNot => Precedence::Prefix,
        Token::LParen => Precedence::Call,
        Token::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

fn has_infix_rule(token: &Token) -> bool {
    match token {
        Token::Plus
        | Token::Minus
        | Token::Asterisk
        | Token::Slash
        | Token::Power
        | Token::Modulus
        | Token::Eq
        | Token::NotEq
        | Token::LT
        | Token::GT
        | Token::BitAnd
        | Token::BitOr
        | Token::BitXor
        | Token::LParen
        | Token::LBracket => true,
        _ => false,
    }
}

pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<String>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Self {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
        }
    }

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// A program with any parse error is never handed to the evaluator.
    pub fn parse_program(mut self) -> Result<ast::Program, Vec<String>> {
        let mut program = ast::Program::default();

        while !self.cur_token.is(TokenType::Eof) {
            if self.cur_token.is(TokenType::Semicolon) {
                self.next_token();
                continue;
            }
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt)
            }
            self.next_token();
        }

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match &self.cur_token {
            Token::Var => self.parse_var_statement().map(Statement::Var),
            Token::Return => self.parse_return_statement().map(Statement::Return),
            // `fn` followed by a name is a declaration; bare `fn` falls
            // through to expression position as an anonymous literal.
            Token::Function if self.peek_token.is(TokenType::Ident) => {
                self.parse_function_statement().map(Statement::Function)
            }
            _ => self.parse_expression_statement().map(Statement::Expr),
        }
    }

    fn parse_var_statement(&mut self) -> Option<ast::VarStatement> {
        if !self.expect_peek(TokenType::Ident) {
            return None;
        }

        let name = self.cur_identifier()?;

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        // A malformed statement scans to the terminating semicolon (or, in
        // the degenerate missing-semicolon case, to end-of-input).
        while !self.cur_token.is(TokenType::Semicolon) && !self.cur_token.is(TokenType::Eof) {
            self.next_token();
        }

        Some(ast::VarStatement {
            name,
            value: value?,
        })
    }

    fn parse_return_statement(&mut self) -> Option<ast::ReturnStatement> {
        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
            return Some(ast::ReturnStatement { return_value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);

        while !self.cur_token.is(TokenType::Semicolon) && !self.cur_token.is(TokenType::Eof) {
            self.next_token();
        }

        Some(ast::ReturnStatement {
            return_value: Some(value?),
        })
    }

    fn parse_expression_statement(&mut self) -> Option<ast::ExpressionStatement> {
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ExpressionStatement {
            expression: expression?,
        })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token.is(TokenType::Semicolon)
            && precedence < token_precedence(&self.peek_token)
        {
            if !has_infix_rule(&self.peek_token) {
                return Some(left);
            }
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match &self.cur_token {
            Token::Ident(name) => Some(Expression::Identifier(name.clone().into())),
            Token::Int(literal) => match literal.parse::<i64>() {
                Ok(value) => Some(Expression::IntegerLiteral(value)),
                Err(_) => {
                    self.errors
                        .push(format!("couldn't parse \"{}\" as an integer", literal));
                    None
                }
            },
            Token::String(value) => Some(Expression::StringLiteral(value.clone())),
            Token::Truth | Token::Lie => {
                Some(Expression::Boolean(ast::Boolean::from(&self.cur_token)))
            }
            Token::Bang | Token::Minus | Token::BitNot => self
                .parse_prefix_expression()
                .map(Expression::Prefix),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression().map(Expression::If),
            Token::LBracket => self
                .parse_expression_list(TokenType::RBracket)
                .map(|elements| Expression::Array(elements.into())),
            Token::Function => self.parse_function_literal(None).map(Expression::Function),
            token => {
                self.errors.push(format!(
                    "no prefix parser function found for {}",
                    TokenType::from(token)
                ));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match &self.cur_token {
            Token::LParen => self.parse_call_expression(left).map(Expression::Call),
            Token::LBracket => self.parse_index_expression(left).map(Expression::Index),
            token => {
                let operator = Operator::from(token);
                let precedence = token_precedence(token);
                self.next_token();
                let right = self.parse_expression(precedence)?;

                Some(Expression::Infix(ast::InfixExpression {
                    left: Box::new(left),
                    operator,
                    right: Box::new(right),
                }))
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<ast::PrefixExpression> {
        let operator = Operator::from(&self.cur_token);
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(ast::PrefixExpression {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        expression
    }

    fn parse_if_expression(&mut self) -> Option<ast::IfExpression> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token.is(TokenType::Else) {
            self.next_token();
            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(ast::IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_block_statement(&mut self) -> ast::BlockStatement {
        let mut block = ast::BlockStatement::default();

        self.next_token();

        while !self.cur_token.is(TokenType::RBrace) && !self.cur_token.is(TokenType::Eof) {
            if self.cur_token.is(TokenType::Semicolon) {
                self.next_token();
                continue;
            }
            if let Some(stmt) = self.parse_statement() {
                block.statements.push(stmt);
            }
            self.next_token();
        }

        block
    }

    fn parse_function_statement(&mut self) -> Option<ast::FunctionLiteral> {
        self.next_token();
        let name = self.cur_identifier()?;

        self.parse_function_literal(Some(name.value))
    }

    // Shared by the statement and expression forms; cur is the token
    // preceding the parameter list's `(`.
    fn parse_function_literal(&mut self, name: Option<String>) -> Option<ast::FunctionLiteral> {
        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        let return_type = if self.peek_token.is(TokenType::Colon) {
            self.next_token();
            self.next_token();
            Some(self.parse_type_annotation()?)
        } else {
            None
        };

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(ast::FunctionLiteral {
            name,
            parameters,
            return_type,
            body,
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<ast::FunctionParameter>> {
        let mut parameters = vec![];

        if self.peek_token.is(TokenType::RParen) {
            self.next_token();
            return Some(parameters);
        }
        self.next_token();

        loop {
            let name = self.cur_identifier()?;

            if !self.expect_peek(TokenType::Colon) {
                return None;
            }
            self.next_token();
            let type_annotation = self.parse_type_annotation()?;

            parameters.push(ast::FunctionParameter {
                name,
                type_annotation,
            });

            if !self.peek_token.is(TokenType::Comma) {
                break;
            }
            self.next_token();
            self.next_token();
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        Some(parameters)
    }

    fn parse_type_annotation(&mut self) -> Option<ast::TypeAnnotation> {
        match &self.cur_token {
            Token::IntType => Some("int".into()),
            Token::StringType => Some("string".into()),
            Token::Ident(name) => Some(ast::TypeAnnotation {
                value: name.clone(),
            }),
            _ => {
                self.errors
                    .push("Compile error: no parameter type declared".to_owned());
                None
            }
        }
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<ast::CallExpression> {
        let arguments = self.parse_expression_list(TokenType::RParen)?;

        Some(ast::CallExpression {
            function: Box::new(function),
            arguments,
        })
    }

    // Comma-delimited expressions up to a closing delimiter; shared by
    // call arguments and array literals.
    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = vec![];

        if self.peek_token.is(end) {
            self.next_token();
            return Some(list);
        }
        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<ast::IndexExpression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RBracket) {
            return None;
        }

        Some(ast::IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    fn cur_identifier(&mut self) -> Option<ast::Identifier> {
        match &self.cur_token {
            Token::Ident(name) => Some(name.clone().into()),
            token => {
                self.errors.push(format!(
                    "expected current token to be {}, but got {} instead",
                    TokenType::Ident,
                    TokenType::from(token)
                ));
                None
            }
        }
    }

    fn expect_peek(&mut self, expected: TokenType) -> bool {
        if self.peek_token.is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenType) {
        self.errors.push(format!(
            "expected next token to be '{}', but got '{}' instead",
            expected,
            TokenType::from(&self.peek_token)
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(input: &str) -> ast::Program {
        Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect("Parse errors found")
    }

    fn parse_errors(input: &str) -> Vec<String> {
        Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect_err("expected parse errors")
    }

    fn single_expression(input: &str) -> Expression {
        let program = parse(input);
        assert_eq!(program.statements.len(), 1);
        match program.statements.into_iter().next().unwrap() {
            Statement::Expr(stmt) => stmt.expression,
            stmt => panic!("expected expression statement, got {}", stmt),
        }
    }

    #[test]
    fn test_var_statements() {
        let program = parse("var x = 5; var y = truth; var foobar = y;");

        let cases = [("x", "5"), ("y", "truth"), ("foobar", "y")];
        assert_eq!(program.statements.len(), cases.len());

        for (stmt, (name, value)) in program.statements.iter().zip(cases.iter()) {
            match stmt {
                Statement::Var(var_stmt) => {
                    assert_eq!(var_stmt.name.value, *name);
                    assert_eq!(var_stmt.value.to_string(), *value);
                }
                _ => panic!("expected var statement"),
            }
        }
    }

    #[test]
    fn test_return_statements() {
        let program = parse("return 5; return 10 + 5; return;");

        assert_eq!(program.statements.len(), 3);

        let cases = [Some("5"), Some("(10 + 5)"), None];
        for (stmt, expected) in program.statements.iter().zip(cases.iter()) {
            match stmt {
                Statement::Return(ret_stmt) => {
                    assert_eq!(
                        ret_stmt.return_value.as_ref().map(Expression::to_string),
                        expected.map(str::to_owned)
                    );
                }
                _ => panic!("expected return statement"),
            }
        }
    }

    #[test]
    fn test_identifier_expression() {
        assert_eq!(
            single_expression("foobar;"),
            Expression::Identifier("foobar".into())
        );
    }

    #[test]
    fn test_literal_expressions() {
        assert_eq!(single_expression("5;"), Expression::IntegerLiteral(5));
        assert_eq!(
            single_expression("\"hello world\";"),
            Expression::StringLiteral("hello world".to_owned())
        );
        assert_eq!(
            single_expression("truth;"),
            Expression::Boolean(true.into())
        );
        assert_eq!(single_expression("lie;"), Expression::Boolean(false.into()));
    }

    #[test]
    fn test_prefix_expressions() {
        let cases = vec![
            ("!5;", Operator::Bang, "5"),
            ("-15;", Operator::Minus, "15"),
            ("~10;", Operator::BitNot, "10"),
            ("!truth;", Operator::Bang, "truth"),
        ];

        for (input, operator, right) in cases.into_iter() {
            match single_expression(input) {
                Expression::Prefix(prefix) => {
                    assert_eq!(prefix.operator, operator);
                    assert_eq!(prefix.right.to_string(), right);
                }
                expr => panic!("expected prefix expression, got {}", expr),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let cases = vec![
            ("5 + 5;", Operator::Plus),
            ("5 - 5;", Operator::Minus),
            ("5 * 5;", Operator::Asterisk),
            ("5 / 5;", Operator::Slash),
            ("5 ^ 5;", Operator::Power),
            ("5 % 5;", Operator::Modulus),
            ("5 > 5;", Operator::GT),
            ("5 < 5;", Operator::LT),
            ("5 == 5;", Operator::Eq),
            ("5 != 5;", Operator::NotEq),
            ("5 & 5;", Operator::BitAnd),
            ("5 | 5;", Operator::BitOr),
            ("5 # 5;", Operator::BitXor),
        ];

        for (input, operator) in cases.into_iter() {
            match single_expression(input) {
                Expression::Infix(infix) => {
                    assert_eq!(infix.operator, operator);
                    assert_eq!(*infix.left, Expression::IntegerLiteral(5));
                    assert_eq!(*infix.right, Expression::IntegerLiteral(5));
                }
                expr => panic!("expected infix expression, got {}", expr),
            }
        }
    }

    #[test]
    fn test_operator_precedence() {
        let cases = vec![
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
            ("2 ^ 3 * 4", "((2 ^ 3) * 4)"),
            ("10 % 3 + 1", "((10 % 3) + 1)"),
            ("1 & 2 + 3", "(1 & (2 + 3))"),
            ("1 | 2 # 3 & 4", "(((1 | 2) # 3) & 4)"),
            ("1 < 2 & 3", "(1 < (2 & 3))"),
            ("~a * b", "((~a) * b)"),
            ("truth == !lie", "(truth == (!lie))"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(truth == truth)", "(!(truth == truth))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "a * [1, 2, 3, 4][b * c] * d",
                "((a * ([1, 2, 3, 4][(b * c)])) * d)",
            ),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in cases.into_iter() {
            assert_eq!(parse(input).to_string(), expected);
        }
    }

    #[test]
    fn test_if_expression() {
        match single_expression("if (x < y) { x }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert!(if_expr.alternative.is_none());
            }
            expr => panic!("expected if expression, got {}", expr),
        }
    }

    #[test]
    fn test_if_else_expression() {
        match single_expression("if (x < y) { x } else { y }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert_eq!(if_expr.alternative.unwrap().to_string(), "y");
            }
            expr => panic!("expected if expression, got {}", expr),
        }
    }

    #[test]
    fn test_function_statement() {
        let program = parse("fn add(x:int, y:int):int { x + y; }");
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Statement::Function(func) => {
                assert_eq!(func.name.as_deref(), Some("add"));
                assert_eq!(func.parameters.len(), 2);
                assert_eq!(func.parameters[0].to_string(), "x:int");
                assert_eq!(func.parameters[1].to_string(), "y:int");
                assert_eq!(func.return_type.as_ref().unwrap().value, "int");
                assert_eq!(func.body.to_string(), "(x + y)");
            }
            stmt => panic!("expected function statement, got {}", stmt),
        }
    }

    #[test]
    fn test_function_statement_without_return_type() {
        let program = parse("fn greet(name:string) { name; }");

        match &program.statements[0] {
            Statement::Function(func) => {
                assert_eq!(func.name.as_deref(), Some("greet"));
                assert_eq!(func.parameters[0].to_string(), "name:string");
                assert!(func.return_type.is_none());
            }
            stmt => panic!("expected function statement, got {}", stmt),
        }
    }

    #[test]
    fn test_empty_parameter_list() {
        let program = parse("fn nullary() { 5; }");

        match &program.statements[0] {
            Statement::Function(func) => assert!(func.parameters.is_empty()),
            stmt => panic!("expected function statement, got {}", stmt),
        }
    }

    #[test]
    fn test_anonymous_function_literal() {
        match single_expression("fn(x:int) { x; };") {
            Expression::Function(func) => {
                assert_eq!(func.name, None);
                assert_eq!(func.parameters[0].to_string(), "x:int");
            }
            expr => panic!("expected function literal, got {}", expr),
        }
    }

    #[test]
    fn test_call_expression() {
        match single_expression("add(1, 2 * 3, 4 + 5);") {
            Expression::Call(call) => {
                assert_eq!(call.function.to_string(), "add");
                let arguments: Vec<String> =
                    call.arguments.iter().map(Expression::to_string).collect();
                assert_eq!(arguments, vec!["1", "(2 * 3)", "(4 + 5)"]);
            }
            expr => panic!("expected call expression, got {}", expr),
        }
    }

    #[test]
    fn test_array_literal() {
        match single_expression("[1, 2 * 2, 3 + 3]") {
            Expression::Array(array) => {
                let elements: Vec<String> =
                    array.elements.iter().map(Expression::to_string).collect();
                assert_eq!(elements, vec!["1", "(2 * 2)", "(3 + 3)"]);
            }
            expr => panic!("expected array literal, got {}", expr),
        }
    }

    #[test]
    fn test_empty_array_literal() {
        match single_expression("[]") {
            Expression::Array(array) => assert!(array.elements.is_empty()),
            expr => panic!("expected array literal, got {}", expr),
        }
    }

    #[test]
    fn test_index_expression() {
        match single_expression("myArray[1 + 1]") {
            Expression::Index(index) => {
                assert_eq!(index.left.to_string(), "myArray");
                assert_eq!(index.index.to_string(), "(1 + 1)");
            }
            expr => panic!("expected index expression, got {}", expr),
        }
    }

    #[test]
    fn test_stray_semicolons_are_skipped() {
        let program = parse("fn add(x:int, y:int) { return x + y; }; add(1, 2);");
        assert_eq!(program.statements.len(), 2);

        let program = parse("1;; 2;");
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_peek_error_template() {
        let errors = parse_errors("var x 5;");
        assert_eq!(
            errors[0],
            "expected next token to be '=', but got 'INT' instead"
        );
    }

    #[test]
    fn test_no_prefix_parser_error() {
        let errors = parse_errors("var x = );");
        assert_eq!(errors[0], "no prefix parser function found for )");

        // `print` lexes as a keyword but has no parse rule wired up.
        let errors = parse_errors("print 5;");
        assert_eq!(errors[0], "no prefix parser function found for PRINT");
    }

    #[test]
    fn test_illegal_byte_surfaces_as_parse_error() {
        let errors = parse_errors("var x = @;");
        assert_eq!(errors[0], "no prefix parser function found for ILLEGAL");
    }

    #[test]
    fn test_current_token_error_template() {
        let errors = parse_errors("fn add(5:int) { 5; }");
        assert_eq!(
            errors[0],
            "expected current token to be IDENT, but got INT instead"
        );
    }

    #[test]
    fn test_missing_parameter_type() {
        let errors = parse_errors("fn add(x:5) { 5; }");
        assert_eq!(errors[0], "Compile error: no parameter type declared");
    }

    #[test]
    fn test_errors_accumulate() {
        let errors = parse_errors("var x 5; var = 10; var 838383;");
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_missing_semicolon_consumes_to_eof() {
        // Degenerate recovery: a var statement with no terminating semicolon
        // scans the remainder of the input, capped at end-of-input.
        let program = parse("var x = 5 var y = 6");
        assert_eq!(program.statements.len(), 1);
    }
}
