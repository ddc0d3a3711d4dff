//! 👽 语言的语法树层: 节点类型, 相等性和规范文本输出.
//!
//! 词法分析, 语法分析和求值都在本 crate 之外.

pub mod base;

pub use base::ast::{Expression, Node, Program, Statement};
pub use base::error::{AstError, Result};
pub use base::token::{Position, Token, TokenKind};
