use std::fmt::{Display, Formatter, Result};
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::base::ast::{BlockStatement, Expression, NodeId};
use crate::base::error::{self, AstError};
use crate::base::token::{Token, TokenKind};

fn reject(token: &Token, expected: &str) {
    debug!(
        kind = %token.kind(),
        position = %token.position(),
        expected,
        "token rejected for leaf expression"
    );
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// 标识符
#[derive(Debug)]
pub struct Identifier {
    id: NodeId,
    token: Token,
    value: String,
}

impl Identifier {
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        Identifier {
            id: NodeId::next(),
            token,
            value: value.into(),
        }
    }
    /// 从 Ident token 构建, 名字即原始文本
    pub fn from_token(token: Token) -> error::Result<Self> {
        if token.kind() != TokenKind::Ident {
            reject(&token, "identifier");
            return Err(AstError::ExpectedIdentifier(token));
        }
        let value = token.literal().to_string();
        Ok(Identifier::new(token, value))
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

/// 整数字面量
#[derive(Debug)]
pub struct IntegerLiteral {
    token: Token,
    value: i64,
}

impl IntegerLiteral {
    pub fn new(token: Token, value: i64) -> Self {
        IntegerLiteral { token, value }
    }

    pub fn from_token(token: Token) -> error::Result<Self> {
        if token.kind() != TokenKind::Int {
            reject(&token, "integer");
            return Err(AstError::ExpectedInteger(token));
        }
        let parsed = token.literal().parse::<i64>();
        match parsed {
            Ok(value) => Ok(IntegerLiteral { token, value }),
            Err(source) => {
                reject(&token, "integer");
                Err(AstError::ParseInt {
                    literal: token.literal().to_string(),
                    source,
                })
            }
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl PartialEq for IntegerLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.token == other.token
    }
}

impl Eq for IntegerLiteral {}

impl Hash for IntegerLiteral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.token.hash(state);
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

/// 字符串字面量
///
/// `value` 保存解码后的内容, 但输出和 `token_literal` 都使用 token 的原始文本.
#[derive(Debug)]
pub struct StringLiteral {
    id: NodeId,
    token: Token,
    value: String,
}

impl StringLiteral {
    pub fn new(token: Token, value: impl Into<String>) -> Self {
        StringLiteral {
            id: NodeId::next(),
            token,
            value: value.into(),
        }
    }
    /// 不做转义处理, value 与原始文本相同
    pub fn from_token(token: Token) -> error::Result<Self> {
        if token.kind() != TokenKind::String {
            reject(&token, "string");
            return Err(AstError::ExpectedString(token));
        }
        let value = token.literal().to_string();
        Ok(StringLiteral::new(token, value))
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token.literal())
    }
}

/// 布尔值字面量
#[derive(Debug)]
pub struct Boolean {
    token: Token,
    value: bool,
}

impl Boolean {
    pub fn new(token: Token, value: bool) -> Self {
        Boolean { token, value }
    }

    pub fn from_token(token: Token) -> error::Result<Self> {
        let value = match token.kind() {
            TokenKind::True => true,
            TokenKind::False => false,
            _ => {
                reject(&token, "boolean");
                return Err(AstError::ExpectedBoolean(token));
            }
        };
        Ok(Boolean { token, value })
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl PartialEq for Boolean {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.value == other.value
    }
}

impl Eq for Boolean {}

impl Hash for Boolean {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
        self.value.hash(state);
    }
}

/// 输出 `True` / `False`
impl Display for Boolean {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.value {
            write!(f, "True")
        } else {
            write!(f, "False")
        }
    }
}

/// 前缀表达式: -x or !x
#[derive(Debug)]
pub struct PrefixExpression {
    id: NodeId,
    token: Token,
    operator: String,
    right: Box<Expression>,
}

impl PrefixExpression {
    pub fn new(token: Token, operator: impl Into<String>, right: Expression) -> Self {
        PrefixExpression {
            id: NodeId::next(),
            token,
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// 中缀表达式: left op right
#[derive(Debug)]
pub struct InfixExpression {
    id: NodeId,
    token: Token,
    left: Box<Expression>,
    operator: String,
    right: Box<Expression>,
}

impl InfixExpression {
    pub fn new(
        token: Token,
        left: Expression,
        operator: impl Into<String>,
        right: Expression,
    ) -> Self {
        InfixExpression {
            id: NodeId::next(),
            token,
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// if表达式, 没有 else 分支时 alternative 为 None
#[derive(Debug)]
pub struct IfExpression {
    token: Token,
    condition: Box<Expression>,
    consequent: BlockStatement,
    alternative: Option<BlockStatement>,
}

impl IfExpression {
    pub fn new(
        token: Token,
        condition: Expression,
        consequent: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        IfExpression {
            token,
            condition: Box::new(condition),
            consequent,
            alternative,
        }
    }

    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    pub fn consequent(&self) -> &BlockStatement {
        &self.consequent
    }

    pub fn alternative(&self) -> Option<&BlockStatement> {
        self.alternative.as_ref()
    }
}

/// 两边都没有 else 分支, 或者都有且相等
impl PartialEq for IfExpression {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
            && self.condition == other.condition
            && self.consequent == other.consequent
            && self.alternative == other.alternative
    }
}

impl Eq for IfExpression {}

impl Hash for IfExpression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
        self.condition.hash(state);
        self.consequent.hash(state);
        match &self.alternative {
            Some(alternative) => alternative.hash(state),
            None => 0u64.hash(state),
        }
    }
}

/// 没有 else 分支时条件后不输出右括号
impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.alternative {
            Some(alternative) => write!(
                f,
                "if ({}) then {} else {}",
                self.condition, self.consequent, alternative
            ),
            None => write!(f, "if ({} then {}", self.condition, self.consequent),
        }
    }
}

/// 函数字面量: fn(params) { body }
#[derive(Debug)]
pub struct FunctionLiteral {
    id: NodeId,
    token: Token,
    parameters: Vec<Identifier>,
    body: BlockStatement,
}

impl FunctionLiteral {
    pub fn new(token: Token, parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        FunctionLiteral {
            id: NodeId::next(),
            token,
            parameters,
            body,
        }
    }

    pub fn parameters(&self) -> &[Identifier] {
        &self.parameters
    }

    pub fn body(&self) -> &BlockStatement {
        &self.body
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{fun} ({params}) {body}",
            fun = self.token.literal(),
            params = join(&self.parameters),
            body = self.body
        )
    }
}

/// 函数调用表达式, (函数, 参数)
#[derive(Debug)]
pub struct CallExpression {
    id: NodeId,
    token: Token,
    function: Box<Expression>,
    arguments: Vec<Expression>,
}

impl CallExpression {
    pub fn new(token: Token, function: Expression, arguments: Vec<Expression>) -> Self {
        CallExpression {
            id: NodeId::next(),
            token,
            function: Box::new(function),
            arguments,
        }
    }

    pub fn function(&self) -> &Expression {
        &self.function
    }

    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{fun} ({args})",
            fun = self.function,
            args = join(&self.arguments)
        )
    }
}

identity_eq!(
    Identifier,
    StringLiteral,
    PrefixExpression,
    InfixExpression,
    FunctionLiteral,
    CallExpression,
);

token_node!(
    Identifier,
    IntegerLiteral,
    StringLiteral,
    Boolean,
    PrefixExpression,
    InfixExpression,
    IfExpression,
    FunctionLiteral,
    CallExpression,
);
