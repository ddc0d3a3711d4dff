//! 语法树节点
//!
//! 语句和表达式都是封闭的枚举, 使用方通过 `match` 穷举所有节点类型.
//! 节点构建后不可修改, 子节点由父节点独占.
//!
//! 相等性并不统一: `IfExpression`, `Boolean`, `ReturnStatement`, `IntegerLiteral`
//! 按结构比较(包含 token), 其余节点只与自身相等(按构建时分配的 [`NodeId`] 比较).

use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};
use std::mem;

use crate::base::token::Token;

/// 只与自身相等的节点: 比较 id, 按 id 求哈希
macro_rules! identity_eq {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $node {
                pub fn id(&self) -> crate::base::ast::NodeId {
                    self.id
                }
            }

            impl PartialEq for $node {
                fn eq(&self, other: &Self) -> bool {
                    self.id == other.id
                }
            }

            impl Eq for $node {}

            impl std::hash::Hash for $node {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash(&self.id, state)
                }
            }
        )+
    };
}

/// 带有起始 token 的节点
macro_rules! token_node {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $node {
                pub fn token(&self) -> &crate::base::token::Token {
                    &self.token
                }
            }

            impl crate::base::ast::Node for $node {
                fn token_literal(&self) -> &str {
                    self.token.literal()
                }
            }
        )+
    };
}

mod expression;
mod node_id;
mod statement;

pub use node_id::NodeId;

pub use expression::{
    Boolean, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
    IntegerLiteral, PrefixExpression, StringLiteral,
};
pub use statement::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement};

pub trait Node: Display + Hash {
    /// 起始 token 的原始文本
    fn token_literal(&self) -> &str;

    /// 规范文本形式, 用于诊断和测试
    fn render(&self) -> String {
        self.to_string()
    }

    fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// 语法树的根
#[derive(Debug)]
pub struct Program {
    id: NodeId,
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program {
            id: NodeId::next(),
            statements,
        }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token().literal())
    }
}

identity_eq!(Program);

/// 只输出第一条语句
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.statements.first() {
            Some(statement) => write!(f, "{}", statement),
            None => Ok(()),
        }
    }
}

#[derive(Debug)]
pub enum Statement {
    // { statement... }
    Block(BlockStatement),
    // let ident = expr
    Let(LetStatement),
    // return expr
    Return(ReturnStatement),
    // expr
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Block(block) => block.token(),
            Statement::Let(stmt) => stmt.token(),
            Statement::Return(stmt) => stmt.token(),
            Statement::Expression(stmt) => stmt.token(),
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        self.token().literal()
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Statement::Block(a), Statement::Block(b)) => a == b,
            (Statement::Let(a), Statement::Let(b)) => a == b,
            (Statement::Return(a), Statement::Return(b)) => a == b,
            (Statement::Expression(a), Statement::Expression(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Statement {}

impl Hash for Statement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Statement::Block(block) => block.hash(state),
            Statement::Let(stmt) => stmt.hash(state),
            Statement::Return(stmt) => stmt.hash(state),
            Statement::Expression(stmt) => stmt.hash(state),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Statement::Block(block) => write!(f, "{}", block),
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

#[derive(Debug)]
pub enum Expression {
    // 标识符
    Identifier(Identifier),
    // 整数字面量
    IntegerLiteral(IntegerLiteral),
    // 字符串字面量
    StringLiteral(StringLiteral),
    // 布尔值字面量
    Boolean(Boolean),
    // 前缀表达式
    Prefix(PrefixExpression),
    // 中缀表达式
    Infix(InfixExpression),
    // if表达式
    If(IfExpression),
    // 函数字面量
    Function(FunctionLiteral),
    // 函数调用表达式, (函数, 参数)
    Call(CallExpression),
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(ident) => ident.token(),
            Expression::IntegerLiteral(int) => int.token(),
            Expression::StringLiteral(string) => string.token(),
            Expression::Boolean(boolean) => boolean.token(),
            Expression::Prefix(prefix) => prefix.token(),
            Expression::Infix(infix) => infix.token(),
            Expression::If(if_expr) => if_expr.token(),
            Expression::Function(fun) => fun.token(),
            Expression::Call(call) => call.token(),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        self.token().literal()
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expression::Identifier(a), Expression::Identifier(b)) => a == b,
            (Expression::IntegerLiteral(a), Expression::IntegerLiteral(b)) => a == b,
            (Expression::StringLiteral(a), Expression::StringLiteral(b)) => a == b,
            (Expression::Boolean(a), Expression::Boolean(b)) => a == b,
            (Expression::Prefix(a), Expression::Prefix(b)) => a == b,
            (Expression::Infix(a), Expression::Infix(b)) => a == b,
            (Expression::If(a), Expression::If(b)) => a == b,
            (Expression::Function(a), Expression::Function(b)) => a == b,
            (Expression::Call(a), Expression::Call(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Expression::Identifier(ident) => ident.hash(state),
            Expression::IntegerLiteral(int) => int.hash(state),
            Expression::StringLiteral(string) => string.hash(state),
            Expression::Boolean(boolean) => boolean.hash(state),
            Expression::Prefix(prefix) => prefix.hash(state),
            Expression::Infix(infix) => infix.hash(state),
            Expression::If(if_expr) => if_expr.hash(state),
            Expression::Function(fun) => fun.hash(state),
            Expression::Call(call) => call.hash(state),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral(int) => write!(f, "{}", int),
            Expression::StringLiteral(string) => write!(f, "{}", string),
            Expression::Boolean(boolean) => write!(f, "{}", boolean),
            Expression::Prefix(prefix) => write!(f, "{}", prefix),
            Expression::Infix(infix) => write!(f, "{}", infix),
            Expression::If(if_expr) => write!(f, "{}", if_expr),
            Expression::Function(fun) => write!(f, "{}", fun),
            Expression::Call(call) => write!(f, "{}", call),
        }
    }
}

macro_rules! lift {
    ($target:ident { $($variant:ident($node:ty)),+ $(,)? }) => {
        $(
            impl From<$node> for $target {
                fn from(node: $node) -> Self {
                    $target::$variant(node)
                }
            }
        )+
    };
}

lift!(Statement {
    Block(BlockStatement),
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
});

lift!(Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    StringLiteral(StringLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
});
