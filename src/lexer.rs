use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::ast::{Token, TokenKind};

// `\d` and `\p{L}` are Unicode-aware, so non-ASCII letters and decimal digits
// classify the same way ASCII ones do.
static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("valid regex"));

// A float needs a decimal point or an exponent, and at least one digit before
// the exponent.
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d+\.\d*|\.\d+)(?:[eE][+-]?\d+)?|\d+[eE][+-]?\d+)$")
        .expect("valid regex")
});

static IDENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_.\-]*$").expect("valid regex")
});

/// Characters that end a bare run.
pub fn is_reserved(ch: char) -> bool {
    matches!(ch, '=' | '<' | '>' | '!' | '(' | ')' | ';' | ',')
}

/// Classify a bare run: integer, then float, then identifier (or keyword),
/// otherwise a plain string.
pub fn classify(literal: &str) -> TokenKind {
    if INTEGER_RE.is_match(literal) {
        TokenKind::Integer
    } else if FLOAT_RE.is_match(literal) {
        TokenKind::Float
    } else if IDENT_RE.is_match(literal) {
        match literal {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Ident,
        }
    } else {
        TokenKind::String
    }
}

/// Pull-based tokenizer over a source string.
///
/// Tracks the current character and the byte offsets of the current and the
/// next character, which gives exactly one character of lookahead.
pub struct Lexer<'a> {
    src: &'a str,
    curr: usize,
    next: usize,
    ch: Option<char>,
    terminal: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            src: input,
            curr: 0,
            next: 0,
            ch: None,
            terminal: None,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.curr = self.next;
        self.ch = self.src[self.next..].chars().next();
        if let Some(ch) = self.ch {
            self.next += ch.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.next..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(char::is_whitespace) {
            self.read_char();
        }
    }

    fn single(&mut self, kind: TokenKind, start: usize) -> Token {
        self.read_char();
        Token::new(kind, &self.src[start..self.curr], start)
    }

    /// Produce the next token.
    ///
    /// Once `Eof` or `Invalid` has been produced, every further call returns
    /// that same token.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = &self.terminal {
            return token.clone();
        }

        let token = self.scan();
        trace!("lexed {} at offset {}", token, token.offset);

        if token.is_terminal() {
            self.terminal = Some(token.clone());
        }
        token
    }

    fn scan(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.curr;

        match self.ch {
            None => Token::new(TokenKind::Eof, "", start),
            Some('=') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    self.read_char();
                    Token::new(TokenKind::Eq, "==", start)
                } else {
                    self.read_char();
                    self.read_fiql(start)
                }
            }
            Some('!') => {
                self.read_char();
                match self.ch {
                    Some('=') => self.single(TokenKind::Ne, start),
                    Some(ch) => {
                        let end = self.curr + ch.len_utf8();
                        Token::new(TokenKind::Invalid, &self.src[start..end], start)
                    }
                    None => Token::new(TokenKind::Invalid, "!", start),
                }
            }
            Some('<') => {
                self.read_char();
                if self.ch == Some('=') {
                    self.single(TokenKind::Le, start)
                } else {
                    Token::new(TokenKind::Lt, "<", start)
                }
            }
            Some('>') => {
                self.read_char();
                if self.ch == Some('=') {
                    self.single(TokenKind::Ge, start)
                } else {
                    Token::new(TokenKind::Gt, ">", start)
                }
            }
            Some(';') => self.single(TokenKind::And, start),
            Some(',') => self.single(TokenKind::Or, start),
            Some('(') => self.single(TokenKind::LParen, start),
            Some(')') => self.single(TokenKind::RParen, start),
            Some(_) => self.read_bare(start),
        }
    }

    /// Read the word of a `=xx=` operator; the leading `=` is already consumed.
    fn read_fiql(&mut self, start: usize) -> Token {
        let word_start = self.curr;
        while self.ch.is_some_and(char::is_alphabetic) {
            self.read_char();
        }

        if self.ch != Some('=') {
            return Token::new(TokenKind::Invalid, &self.src[start..self.curr], start);
        }

        let kind = match &self.src[word_start..self.curr] {
            "eq" => TokenKind::Eq,
            "ne" => TokenKind::Ne,
            "in" => TokenKind::In,
            "out" => TokenKind::Out,
            "lt" => TokenKind::Lt,
            "le" => TokenKind::Le,
            "gt" => TokenKind::Gt,
            "ge" => TokenKind::Ge,
            _ => return Token::new(TokenKind::Invalid, &self.src[start..self.curr], start),
        };

        self.single(kind, start)
    }

    /// Read a maximal run of non-reserved characters. Interior whitespace is
    /// kept, trailing whitespace is not part of the literal.
    fn read_bare(&mut self, start: usize) -> Token {
        while self.ch.is_some_and(|ch| !is_reserved(ch)) {
            self.read_char();
        }

        let literal = self.src[start..self.curr].trim_end();
        Token::new(classify(literal), literal, start)
    }
}

/// Collect every token of `input`, ending with the terminal token.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_terminal();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("true;false;null");
    assert_eq!(lexer.next_token().kind, TokenKind::True);
    assert_eq!(lexer.next_token().kind, TokenKind::And);
    assert_eq!(lexer.next_token().kind, TokenKind::False);
    assert_eq!(lexer.next_token().kind, TokenKind::And);
    assert_eq!(lexer.next_token().kind, TokenKind::Null);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_constraint() {
    let mut lexer = Lexer::new("age=gt=21");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "age", 0));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Gt, "=gt=", 3));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Integer, "21", 7));
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Eof, "", 9));
}
