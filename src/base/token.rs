use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 非法字符
    Illegal,
    /// End Of File
    Eof,
    //标识符和字面量
    Ident,
    Int,
    String,
    //操作符
    /// =
    Assign,
    /// +
    Plus,
    /// -
    Minus,
    /// !
    Bang,
    /// *
    Asterisk,
    /// /
    Slash,
    /// <
    Lt,
    /// >
    Gt,
    /// ==
    Eq,
    /// !=
    NotEq,
    /// <=
    Le,
    /// >=
    Ge,
    //分隔符等其他符号
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// (
    Lparen,
    /// )
    Rparen,
    /// {
    Lbrace,
    /// }
    Rbrace,

    //关键字
    /// fn
    Function,
    /// let
    Let,
    /// true
    True,
    /// false
    False,
    /// if
    If,
    /// else
    Else,
    /// return
    Return,
}

impl TokenKind {
    /// 关键字表, 其余均为标识符
    pub fn lookup_ident(key: &str) -> Self {
        match key {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Illegal => write!(f, "ILLEGAL"),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Ident => write!(f, "IDENT"),
            TokenKind::Int => write!(f, "INT"),
            TokenKind::String => write!(f, "STRING"),
            TokenKind::Assign => write!(f, "="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Bang => write!(f, "!"),
            TokenKind::Asterisk => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Eq => write!(f, "=="),
            TokenKind::NotEq => write!(f, "!="),
            TokenKind::Le => write!(f, "<="),
            TokenKind::Ge => write!(f, ">="),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Lparen => write!(f, "("),
            TokenKind::Rparen => write!(f, ")"),
            TokenKind::Lbrace => write!(f, "{{"),
            TokenKind::Rbrace => write!(f, "}}"),
            TokenKind::Function => write!(f, "fn"),
            TokenKind::Let => write!(f, "let"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::Return => write!(f, "return"),
        }
    }
}

/// 源码位置, 行列均从1开始
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 词法单元: 类型, 原始文本, 起始位置
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }
    /// 标识符或关键字, 类型由 [`TokenKind::lookup_ident`] 决定
    pub fn from_word(literal: &str, position: Position) -> Self {
        Token::new(TokenKind::lookup_ident(literal), literal, position)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})@{}", self.kind, self.literal, self.position)
    }
}
