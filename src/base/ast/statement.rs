use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};

use crate::base::ast::{Expression, Identifier, NodeId, Statement};
use crate::base::token::Token;

#[derive(Debug)]
pub struct BlockStatement {
    id: NodeId,
    token: Token,
    statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(token: Token, statements: Vec<Statement>) -> Self {
        BlockStatement {
            id: NodeId::next(),
            token,
            statements,
        }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

/// 语句之间没有分隔符
impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// let identifier = expression
#[derive(Debug)]
pub struct LetStatement {
    id: NodeId,
    token: Token,
    name: Identifier,
    value: Expression,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier, value: Expression) -> Self {
        LetStatement {
            id: NodeId::next(),
            token,
            name,
            value,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "let {} = {}", self.name, self.value)
    }
}

/// return expression
#[derive(Debug)]
pub struct ReturnStatement {
    token: Token,
    return_value: Expression,
}

impl ReturnStatement {
    pub fn new(token: Token, return_value: Expression) -> Self {
        ReturnStatement {
            token,
            return_value,
        }
    }

    pub fn return_value(&self) -> &Expression {
        &self.return_value
    }
}

impl PartialEq for ReturnStatement {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.return_value == other.return_value
    }
}

impl Eq for ReturnStatement {}

impl Hash for ReturnStatement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
        self.return_value.hash(state);
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "return {}", self.return_value)
    }
}

/// 表达式语句, token 为表达式的第一个 token
#[derive(Debug)]
pub struct ExpressionStatement {
    id: NodeId,
    token: Token,
    expression: Expression,
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: Expression) -> Self {
        ExpressionStatement {
            id: NodeId::next(),
            token,
            expression,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }
}

impl From<Expression> for ExpressionStatement {
    fn from(expression: Expression) -> Self {
        let token = expression.token().clone();
        ExpressionStatement::new(token, expression)
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.expression)
    }
}

identity_eq!(BlockStatement, LetStatement, ExpressionStatement);

token_node!(
    BlockStatement,
    LetStatement,
    ReturnStatement,
    ExpressionStatement
);
