use std::fmt;

/// Lexical category of a token.
///
/// Every category is a distinct power of two so that categories can be
/// combined into a [`TokenGroup`] and tested with a single bitwise AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TokenKind {
    // Arguments
    /// Identifier, used for field names and bare values
    ///
    /// Starts with a letter or `_`, continues with letters, digits, `_`, `.` or `-`.
    ///
    /// # Examples
    /// ```text
    /// name
    /// user.address
    /// abc-1
    /// ```
    Ident = 1 << 0,

    /// Bare run that is neither numeric nor identifier-shaped
    ///
    /// # Examples
    /// ```text
    /// 2024-01-01
    /// John Smith
    /// *.txt
    /// ```
    String = 1 << 1,

    /// Integer with optional sign
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -1
    /// +7
    /// ```
    Integer = 1 << 2,

    /// Float with a decimal point or an exponent
    ///
    /// # Examples
    /// ```text
    /// 1.5
    /// -1.0
    /// 1e10
    /// ```
    Float = 1 << 3,

    /// `false`
    False = 1 << 4,

    /// `true`
    True = 1 << 5,

    /// `null`
    Null = 1 << 6,

    // Comparison
    /// `==` or `=eq=`
    Eq = 1 << 7,

    /// `!=` or `=ne=`
    Ne = 1 << 8,

    /// `=in=`
    In = 1 << 9,

    /// `=out=`
    Out = 1 << 10,

    /// `<` or `=lt=`
    Lt = 1 << 11,

    /// `<=` or `=le=`
    Le = 1 << 12,

    /// `>` or `=gt=`
    Gt = 1 << 13,

    /// `>=` or `=ge=`
    Ge = 1 << 14,

    // Logical
    /// `;`
    And = 1 << 15,

    /// `,` (also separates membership list values)
    Or = 1 << 16,

    // Delimiters
    /// `(`
    LParen = 1 << 17,

    /// `)`
    RParen = 1 << 18,

    /// Malformed operator, e.g. `=foo=` or `!x`
    Invalid = 1 << 19,

    /// End of input
    Eof = 1 << 20,
}

impl TokenKind {
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Check membership in a group with one bitwise AND.
    pub const fn belongs_to(self, group: TokenGroup) -> bool {
        self.bit() & group.0 != 0
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "Ident",
            TokenKind::String => "String",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::False => "False",
            TokenKind::True => "True",
            TokenKind::Null => "Null",
            TokenKind::Eq => "Eq",
            TokenKind::Ne => "Ne",
            TokenKind::In => "In",
            TokenKind::Out => "Out",
            TokenKind::Lt => "Lt",
            TokenKind::Le => "Le",
            TokenKind::Gt => "Gt",
            TokenKind::Ge => "Ge",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Invalid => "Invalid",
            TokenKind::Eof => "Eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A precomputed union of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenGroup(u32);

impl TokenGroup {
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        TokenGroup(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// `==`, `!=`, `=in=`, `=out=`, `<`, `<=`, `>`, `>=` and their FIQL spellings
pub const COMPARISON: TokenGroup = TokenGroup::of(&[
    TokenKind::Eq,
    TokenKind::Ne,
    TokenKind::In,
    TokenKind::Out,
    TokenKind::Lt,
    TokenKind::Le,
    TokenKind::Gt,
    TokenKind::Ge,
]);

/// Operators that accept any literal, including booleans and null
pub const EQUALITY: TokenGroup =
    TokenGroup::of(&[TokenKind::Eq, TokenKind::Ne, TokenKind::In, TokenKind::Out]);

/// Operators that take a parenthesized list
pub const MEMBERSHIP: TokenGroup = TokenGroup::of(&[TokenKind::In, TokenKind::Out]);

/// Ordering operators, undefined for booleans and null
pub const RELATION: TokenGroup =
    TokenGroup::of(&[TokenKind::Lt, TokenKind::Le, TokenKind::Gt, TokenKind::Ge]);

/// Tokens that can stand as a literal argument
pub const ARGUMENT: TokenGroup = TokenGroup::of(&[
    TokenKind::Ident,
    TokenKind::String,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::False,
    TokenKind::True,
    TokenKind::Null,
]);

pub const LOGICAL: TokenGroup = TokenGroup::of(&[TokenKind::And, TokenKind::Or]);

/// A lexical token: its category, the exact source text it matched, and the
/// byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            offset,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn belongs_to(&self, group: TokenGroup) -> bool {
        self.kind.belongs_to(group)
    }

    /// True for `Eof` and `Invalid`, after which the lexer stops advancing.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::Eof | TokenKind::Invalid)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            kind => write!(f, "{}({:?})", kind, self.literal),
        }
    }
}
