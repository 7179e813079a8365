// tests/lexer_tests.rs

use rsql_filter::ast::{Token, TokenKind};
use rsql_filter::lexer::{Lexer, classify, tokenize};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        (";", TokenKind::And),
        (",", TokenKind::Or),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("<", TokenKind::Lt),
        (">", TokenKind::Gt),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.literal, input, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

// ============================================================================
// Multi Character Operators
// ============================================================================

#[test]
fn test_symbolic_operators() {
    let test_cases = vec![
        ("==", TokenKind::Eq),
        ("!=", TokenKind::Ne),
        ("<=", TokenKind::Le),
        (">=", TokenKind::Ge),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.literal, input, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn test_fiql_operators() {
    let test_cases = vec![
        ("=eq=", TokenKind::Eq),
        ("=ne=", TokenKind::Ne),
        ("=in=", TokenKind::In),
        ("=out=", TokenKind::Out),
        ("=lt=", TokenKind::Lt),
        ("=le=", TokenKind::Le),
        ("=gt=", TokenKind::Gt),
        ("=ge=", TokenKind::Ge),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.literal, input, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn test_lt_vs_le() {
    assert_eq!(
        kinds("< <="),
        vec![TokenKind::Lt, TokenKind::Le, TokenKind::Eof]
    );
    assert_eq!(
        kinds("a<1"),
        vec![TokenKind::Ident, TokenKind::Lt, TokenKind::Integer, TokenKind::Eof]
    );
    assert_eq!(
        kinds("a>=1"),
        vec![TokenKind::Ident, TokenKind::Ge, TokenKind::Integer, TokenKind::Eof]
    );
}

#[test]
fn test_eq_vs_fiql() {
    // `==` wins over FIQL mode
    let tokens = tokenize("a==b");
    assert_eq!(tokens[1], Token::new(TokenKind::Eq, "==", 1));

    let tokens = tokenize("a=in=(b)");
    assert_eq!(tokens[1], Token::new(TokenKind::In, "=in=", 1));
    assert_eq!(tokens[2], Token::new(TokenKind::LParen, "(", 5));
}

// ============================================================================
// Invalid Operators
// ============================================================================

#[test]
fn test_unknown_fiql_word() {
    let mut lexer = Lexer::new("a=foo=1");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Invalid, "=foo", 1));
}

#[test]
fn test_fiql_word_without_closing_equals() {
    let mut lexer = Lexer::new("a=gt5");
    lexer.next_token();
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Invalid, "=gt", 1));
}

#[test]
fn test_bare_equals() {
    let mut lexer = Lexer::new("a=5");
    lexer.next_token();
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Invalid, "=", 1));
}

#[test]
fn test_bang_without_equals() {
    let mut lexer = Lexer::new("a!5");
    lexer.next_token();
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Invalid, "!5", 1));

    let mut lexer = Lexer::new("!");
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Invalid, "!", 0));
}

// ============================================================================
// Terminal Tokens
// ============================================================================

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Eof, "", 1));
    }
}

#[test]
fn test_invalid_is_idempotent() {
    let mut lexer = Lexer::new("=xx= b==c");
    let first = lexer.next_token();
    assert_eq!(first.kind, TokenKind::Invalid);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), first);
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![Token::new(TokenKind::Eof, "", 0)]);
    assert_eq!(tokenize("   \t\n"), vec![Token::new(TokenKind::Eof, "", 5)]);
}

// ============================================================================
// Literal Classification
// ============================================================================

#[test]
fn test_integers() {
    let test_cases = vec!["0", "42", "-1", "+7", "007", "123456789"];

    for input in test_cases {
        assert_eq!(classify(input), TokenKind::Integer, "Failed for input: {}", input);
    }
}

#[test]
fn test_floats() {
    let test_cases = vec![
        "1.5", "-1.0", "+2.25", "1e10", "1E10", "1e+3", "2.5e-3", ".5", "1.", "-.5e2",
    ];

    for input in test_cases {
        assert_eq!(classify(input), TokenKind::Float, "Failed for input: {}", input);
    }
}

#[test]
fn test_not_numeric() {
    let test_cases = vec![
        ("-", TokenKind::String),
        ("+", TokenKind::String),
        (".", TokenKind::String),
        ("1e", TokenKind::String),
        ("1e+", TokenKind::String),
        (".e5", TokenKind::String),
        ("1.2.3", TokenKind::String),
        ("1a", TokenKind::String),
        ("e10", TokenKind::Ident),
    ];

    for (input, expected) in test_cases {
        assert_eq!(classify(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_identifiers() {
    let test_cases = vec![
        "x",
        "name",
        "_private",
        "abc-1",
        "user.address.city",
        "snake_case",
        "camelCase",
        "Ünïcødé",
        "名前",
    ];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident, "Failed for input: {}", input);
        assert_eq!(token.literal, input, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    let test_cases = vec![
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("null", TokenKind::Null),
        ("True", TokenKind::Ident),
        ("NULL", TokenKind::Ident),
        ("nullable", TokenKind::Ident),
        ("truthy", TokenKind::Ident),
    ];

    for (input, expected) in test_cases {
        assert_eq!(classify(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_strings() {
    let test_cases = vec!["2024-01-01", "*.txt", "-abc", "1-2", "@home", "a b"];

    for input in test_cases {
        assert_eq!(classify(input), TokenKind::String, "Failed for input: {}", input);
    }
}

#[test]
fn test_whitespace_around_bare_runs() {
    let tokens = tokenize("  name == John Smith ; age > 3 ");
    let summary: Vec<(TokenKind, &str)> =
        tokens.iter().map(|t| (t.kind, t.literal.as_str())).collect();

    assert_eq!(
        summary,
        vec![
            (TokenKind::Ident, "name"),
            (TokenKind::Eq, "=="),
            (TokenKind::String, "John Smith"),
            (TokenKind::And, ";"),
            (TokenKind::Ident, "age"),
            (TokenKind::Gt, ">"),
            (TokenKind::Integer, "3"),
            (TokenKind::Eof, ""),
        ]
    );
}

// ============================================================================
// Full Expressions
// ============================================================================

#[test]
fn test_complex_expression() {
    assert_eq!(
        kinds("a==1;(b!=2,c=in=(x,y))"),
        vec![
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::Integer,
            TokenKind::And,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Ne,
            TokenKind::Integer,
            TokenKind::Or,
            TokenKind::Ident,
            TokenKind::In,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Or,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_offsets_are_byte_offsets() {
    let tokens = tokenize("名==é;x<1");
    let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
    // 名 is 3 bytes, é is 2 bytes
    assert_eq!(offsets, vec![0, 3, 5, 7, 8, 9, 10, 11]);
}
