use std::num::ParseIntError;

use thiserror::Error;

use crate::base::token::Token;

pub type Result<T> = std::result::Result<T, AstError>;

/// 从词法单元构建叶子节点时的错误
#[derive(Debug, Error)]
pub enum AstError {
    #[error("expected identifier, got {0}")]
    ExpectedIdentifier(Token),
    #[error("expected integer, got {0}")]
    ExpectedInteger(Token),
    #[error("expected boolean, got {0}")]
    ExpectedBoolean(Token),
    #[error("expected string, got {0}")]
    ExpectedString(Token),
    #[error("could not parse {literal:?} as integer")]
    ParseInt {
        literal: String,
        #[source]
        source: ParseIntError,
    },
}
