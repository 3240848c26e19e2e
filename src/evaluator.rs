use crate::ast;
use crate::builtins::Builtins;
use crate::environment::Environment;
use crate::object::{EvalError, FunctionObject, Object, Result};

/// Tree walker. Carries the builtin registry so independent runs never
/// share lookup state.
#[derive(Default)]
pub struct Evaluator {
    builtins: Builtins,
}

impl Evaluator {
    pub fn new(builtins: Builtins) -> Self {
        Self { builtins }
    }

    pub fn eval_program(&self, program: &ast::Program, env: &Environment) -> Result<Object> {
        // A top-level `return` stops the program; the wrapper never leaks
        // out as the final result.
        Ok(self
            .eval_statements(&program.statements, env)?
            .unwrap_return())
    }

    fn eval_statements(&self, statements: &[ast::Statement], env: &Environment) -> Result<Object> {
        let mut result = Object::Null;

        for stmt in statements.iter() {
            result = self.eval_statement(stmt, env)?;
            if result.is_return_value() {
                break;
            }
        }

        Ok(result)
    }

    fn eval_statement(&self, statement: &ast::Statement, env: &Environment) -> Result<Object> {
        match statement {
            ast::Statement::Var(stmt) => {
                let value = self.eval_expression(&stmt.value, env)?;
                env.set(&stmt.name.value, value);
                Ok(Object::Null)
            }
            ast::Statement::Return(stmt) => {
                let value = match &stmt.return_value {
                    Some(expression) => self.eval_expression(expression, env)?,
                    None => Object::Null,
                };
                Ok(Object::ReturnValue(Box::new(value)))
            }
            ast::Statement::Function(literal) => {
                let function = self.make_function(literal, env);
                if let Some(name) = &literal.name {
                    // Bound in the environment the function captured, so a
                    // call by name inside the body resolves.
                    env.set(name, function);
                }
                Ok(Object::Null)
            }
            ast::Statement::Expr(stmt) => self.eval_expression(&stmt.expression, env),
        }
    }

    fn eval_expression(&self, expression: &ast::Expression, env: &Environment) -> Result<Object> {
        match expression {
            ast::Expression::Identifier(ident) => self.eval_identifier(&ident.value, env),
            ast::Expression::IntegerLiteral(n) => Ok(Object::Integer(*n)),
            ast::Expression::StringLiteral(s) => Ok(Object::String(s.clone())),
            ast::Expression::Boolean(b) => Ok(Object::Boolean(b.0)),
            ast::Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right, env)?;
                eval_prefix_expression(prefix.operator, right)
            }
            ast::Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left, env)?;
                let right = self.eval_expression(&infix.right, env)?;
                eval_infix_expression(infix.operator, left, right)
            }
            ast::Expression::If(if_expr) => {
                let condition = self.eval_expression(&if_expr.condition, env)?;
                if condition.truth_value() {
                    self.eval_statements(&if_expr.consequence.statements, env)
                } else if let Some(alternative) = &if_expr.alternative {
                    self.eval_statements(&alternative.statements, env)
                } else {
                    Ok(Object::Null)
                }
            }
            ast::Expression::Function(literal) => Ok(self.make_function(literal, env)),
            ast::Expression::Call(call) => {
                let function = self.eval_expression(&call.function, env)?;
                let arguments = call
                    .arguments
                    .iter()
                    .map(|argument| self.eval_expression(argument, env))
                    .collect::<Result<Vec<Object>>>()?;
                self.apply_function(function, arguments)
            }
            ast::Expression::Array(array) => {
                let elements = array
                    .elements
                    .iter()
                    .map(|element| self.eval_expression(element, env))
                    .collect::<Result<Vec<Object>>>()?;
                Ok(elements.into())
            }
            ast::Expression::Index(index_expr) => {
                let left = self.eval_expression(&index_expr.left, env)?;
                let index = self.eval_expression(&index_expr.index, env)?;
                eval_index_expression(left, index)
            }
        }
    }

    fn eval_identifier(&self, name: &str, env: &Environment) -> Result<Object> {
        // Environment bindings shadow builtins.
        env.get(name)
            .or_else(|| self.builtins.get(name))
            .ok_or_else(|| EvalError::IdentifierNotFound {
                id: name.to_owned(),
            })
    }

    fn make_function(&self, literal: &ast::FunctionLiteral, env: &Environment) -> Object {
        Object::Function(FunctionObject {
            name: literal.name.clone(),
            parameters: literal.parameters.clone(),
            return_type: literal.return_type.clone(),
            body: literal.body.clone(),
            env: env.clone(),
        })
    }

    fn apply_function(&self, function: Object, arguments: Vec<Object>) -> Result<Object> {
        match function {
            Object::Function(func) => {
                if arguments.len() != func.parameters.len() {
                    return Err(EvalError::IncorrectArity {
                        got: arguments.len(),
                        want: func.parameters.len(),
                    });
                }

                // The call frame extends the function's captured scope, not
                // the caller's.
                let call_env = Environment::with_enclosed(&func.env);
                for (parameter, argument) in func.parameters.iter().zip(arguments) {
                    call_env.set(&parameter.name.value, argument);
                }

                Ok(self
                    .eval_statements(&func.body.statements, &call_env)?
                    .unwrap_return())
            }
            Object::Builtin(func) => func(arguments),
            other => Err(EvalError::NotAFunction {
                type_name: other.type_name(),
            }),
        }
    }
}

fn eval_prefix_expression(operator: ast::Operator, right: Object) -> Result<Object> {
    match operator {
        ast::Operator::Bang => Ok(Object::Boolean(!right.truth_value())),
        ast::Operator::Minus => match right {
            Object::Integer(n) => Ok(Object::Integer(-n)),
            obj => Err(EvalError::UnknownPrefixOperator {
                operator,
                operand: obj.type_name(),
            }),
        },
        ast::Operator::BitNot => match right {
            Object::Integer(n) => Ok(Object::Integer(!n)),
            obj => Err(EvalError::UnknownPrefixOperator {
                operator,
                operand: obj.type_name(),
            }),
        },
        _ => Err(EvalError::UnknownPrefixOperator {
            operator,
            operand: right.type_name(),
        }),
    }
}

fn eval_infix_expression(operator: ast::Operator, left: Object, right: Object) -> Result<Object> {
    match (left, right) {
        (Object::Integer(x), Object::Integer(y)) => eval_integer_infix_expression(operator, x, y),
        (Object::String(x), Object::String(y)) => match operator {
            ast::Operator::Plus => Ok(Object::String(x + &y)),
            op => Err(EvalError::UnknownInfixOperator {
                left: "STRING",
                operator: op,
                right: "STRING",
            }),
        },
        (Object::Boolean(x), Object::Boolean(y)) => match operator {
            ast::Operator::Eq => Ok(Object::Boolean(x == y)),
            ast::Operator::NotEq => Ok(Object::Boolean(x != y)),
            op => Err(EvalError::UnknownInfixOperator {
                left: "BOOLEAN",
                operator: op,
                right: "BOOLEAN",
            }),
        },
        (left, right) => Err(EvalError::binary_op_error(
            left.type_name(),
            operator,
            right.type_name(),
        )),
    }
}

fn eval_integer_infix_expression(operator: ast::Operator, left: i64, right: i64) -> Result<Object> {
    Ok(match operator {
        ast::Operator::Plus => Object::Integer(left + right),
        ast::Operator::Minus => Object::Integer(left - right),
        ast::Operator::Asterisk => Object::Integer(left * right),
        ast::Operator::Slash => Object::Integer(left / right),
        ast::Operator::Power => Object::Integer(integer_power(left, right)),
        ast::Operator::Modulus => Object::Integer(left % right),
        ast::Operator::BitAnd => Object::Integer(left & right),
        ast::Operator::BitOr => Object::Integer(left | right),
        ast::Operator::BitXor => Object::Integer(left ^ right),
        ast::Operator::LT => Object::Boolean(left < right),
        ast::Operator::GT => Object::Boolean(left > right),
        ast::Operator::Eq => Object::Boolean(left == right),
        ast::Operator::NotEq => Object::Boolean(left != right),
        op => {
            return Err(EvalError::UnknownInfixOperator {
                left: "INTEGER",
                operator: op,
                right: "INTEGER",
            })
        }
    })
}

// A negative exponent truncates to zero, like float exponentiation cast
// back to an integer would.
fn integer_power(base: i64, exponent: i64) -> i64 {
    if exponent < 0 {
        0
    } else {
        base.pow(exponent as u32)
    }
}

fn eval_index_expression(left: Object, index: Object) -> Result<Object> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => {
            let elements = elements.borrow();
            // Out of range is null, never an error.
            if i < 0 || i >= elements.len() as i64 {
                Ok(Object::Null)
            } else {
                Ok(elements[i as usize].clone())
            }
        }
        (left, _) => Err(EvalError::NotIndexable {
            type_name: left.type_name(),
        }),
    }
}
