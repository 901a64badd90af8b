use sexpr_reader::cursor::{Cursor, Match};
use sexpr_reader::lexer::{tokens, Lexer};
use sexpr_reader::pos::Pos;
use sexpr_reader::syntax::{BooleanWords, NumberLiteral, Pair, Recognizer, Syntax};
use sexpr_reader::token::{LexError, TokenKind};

fn lex(input: &str, syntax: &Syntax) -> Vec<(TokenKind, String)> {
    tokens(input.as_bytes(), syntax)
        .map(|t| (t.kind, String::from_utf8_lossy(t.data).into_owned()))
        .collect()
}

fn tok(kind: TokenKind, data: &str) -> (TokenKind, String) {
    (kind, data.to_string())
}

fn numbers_only() -> Syntax {
    Syntax {
        number: Some(Box::new(NumberLiteral)),
        ..Syntax::default()
    }
}

#[test]
fn number_literals_are_one_token() {
    let syntax = numbers_only();
    for lit in ["1234", "12.34", "-0.1234", "+12.34", "12e-12", "+1E+32",
                "0xff12AE", "0b010110101", "0644"] {
        let mut lexer = Lexer::new(lit.as_bytes(), &syntax);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Number, "{}", lit);
        assert_eq!(token.data, lit.as_bytes());
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn number_recognizer_rejects_words() {
    let mut c = Cursor::new(b"abc");
    assert_eq!(NumberLiteral.try_match(&mut c), Match::NoMatch);
    assert_eq!(NumberLiteral.try_match(&mut Cursor::new(b"")), Match::Exhausted);
    assert_eq!(lex("abc", &numbers_only()),
               vec![tok(TokenKind::Ident, "abc"), tok(TokenKind::Eof, "")]);
    // a lone sign is not a number
    assert_eq!(lex("- 12e", &numbers_only()),
               vec![tok(TokenKind::Ident, "-"),
                    tok(TokenKind::Ident, "12e"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn simple_list() {
    let syntax = Syntax {
        delimiters: vec![Pair::new("(", ")")],
        ..Syntax::default()
    };
    assert_eq!(lex("(a)", &syntax),
               vec![tok(TokenKind::ListOpen, "("),
                    tok(TokenKind::Ident, "a"),
                    tok(TokenKind::ListClose, ")"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn multi_character_delimiters() {
    let syntax = Syntax {
        delimiters: vec![Pair::new("{{", "}}")],
        ..Syntax::default()
    };
    assert_eq!(lex("{{ a }}", &syntax),
               vec![tok(TokenKind::ListOpen, "{{"),
                    tok(TokenKind::Ident, "a"),
                    tok(TokenKind::ListClose, "}}"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn unterminated_string_points_at_opening_quote() {
    let syntax = Syntax {
        string_lit: Some(Pair::new("\"", "\"")),
        ..Syntax::default()
    };
    let mut lexer = Lexer::new(b"  \"abc", &syntax);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Err(LexError::MissingDelimiter("string")));
    assert_eq!(token.pos, Pos { line: 1, col: 3 });
    assert_eq!(LexError::MissingDelimiter("string").to_string(),
               "missing string delimiter");
}

#[test]
fn literal_content_and_position() {
    let syntax = Syntax::scheme();
    let mut lexer = Lexer::new(b"(\"hi there\")", &syntax);
    assert_eq!(lexer.next_token().kind, TokenKind::ListOpen);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.data, b"hi there");
    assert_eq!(token.pos, Pos { line: 1, col: 3 });
    assert_eq!(token.span(), 2..10);
    assert_eq!(lexer.next_token().kind, TokenKind::ListClose);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn escapes_apply_to_strings_but_not_raw_strings() {
    let syntax = Syntax {
        string_lit: Some(Pair::new("\"", "\"")),
        raw_string_lit: Some(Pair::new("`", "`")),
        escape: Some('\\'),
        ..Syntax::default()
    };
    assert_eq!(lex(r#""a\"b" `c\`"#, &syntax),
               vec![tok(TokenKind::String, r#"a\"b"#),
                    tok(TokenKind::RawString, r"c\"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn comments() {
    let syntax = Syntax::scheme();
    let mut lexer = Lexer::new(b"; hello\n(x)", &syntax);
    let comment = lexer.next_token();
    assert_eq!(comment.kind, TokenKind::Comment);
    assert_eq!(comment.data, b" hello");
    assert_eq!(comment.pos, Pos { line: 1, col: 2 });
    let open = lexer.next_token();
    assert_eq!(open.kind, TokenKind::ListOpen);
    assert_eq!(open.pos, Pos { line: 2, col: 1 });

    let mut lexer = Lexer::new(b"#| a\nb |#x", &syntax);
    let comment = lexer.next_token();
    assert_eq!(comment.kind, TokenKind::Comment);
    assert_eq!(comment.data, b" a\nb ");
    let ident = lexer.next_token();
    assert_eq!(ident.kind, TokenKind::Ident);
    assert_eq!(ident.pos, Pos { line: 2, col: 5 });

    assert_eq!(lex("#| open", &syntax),
               vec![tok(TokenKind::Err(LexError::MissingDelimiter("comment")), "#|")]);
}

#[test]
fn scheme_booleans_and_positions() {
    let syntax = Syntax::scheme();
    assert_eq!(lex("(#t #f λ)", &syntax),
               vec![tok(TokenKind::ListOpen, "("),
                    tok(TokenKind::Boolean, "#t"),
                    tok(TokenKind::Boolean, "#f"),
                    tok(TokenKind::Ident, "λ"),
                    tok(TokenKind::ListClose, ")"),
                    tok(TokenKind::Eof, "")]);
    let positions: Vec<Pos> = tokens("(λ x)".as_bytes(), &syntax)
        .map(|t| t.pos)
        .collect();
    assert_eq!(positions[1], Pos { line: 1, col: 2 });
    assert_eq!(positions[2], Pos { line: 1, col: 4 });
}

#[test]
fn default_booleans() {
    let syntax = Syntax {
        boolean: Some(Box::new(BooleanWords::default())),
        ..Syntax::default()
    };
    assert_eq!(lex("true false maybe", &syntax),
               vec![tok(TokenKind::Boolean, "true"),
                    tok(TokenKind::Boolean, "false"),
                    tok(TokenKind::Ident, "maybe"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn closures_as_recognizers() {
    let syntax = Syntax {
        boolean: Some(Box::new(|c: &mut Cursor<'_>| {
            if c.accept_literal("yes") || c.accept_literal("no") {
                Match::Matched
            } else {
                Match::NoMatch
            }
        })),
        ..Syntax::default()
    };
    assert_eq!(lex("yes nope", &syntax),
               vec![tok(TokenKind::Boolean, "yes"),
                    tok(TokenKind::Boolean, "no"),
                    tok(TokenKind::Ident, "pe"),
                    tok(TokenKind::Eof, "")]);
}

#[test]
fn recognizer_consuming_nothing_is_an_error() {
    let syntax = Syntax {
        number: Some(Box::new(|_: &mut Cursor<'_>| Match::Matched)),
        ..Syntax::default()
    };
    let mut lexer = Lexer::new(b"x", &syntax);
    assert_eq!(lexer.next_token().kind, TokenKind::Err(LexError::EmptyToken));
}

#[test]
fn unexpected_character() {
    let syntax = Syntax::default();
    let mut lexer = Lexer::new(b" \x07", &syntax);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Err(LexError::UnexpectedChar('\x07')));
    assert_eq!(token.pos, Pos { line: 1, col: 2 });
    assert_eq!(token.data, b"\x07");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn eof_repeats() {
    let syntax = Syntax::scheme();
    let mut lexer = Lexer::new(b"  \n ", &syntax);
    let eof = lexer.next_token();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.pos, Pos { line: 2, col: 2 });
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn reserved_code_points() {
    let syntax = Syntax::scheme();
    for c in ['(', ')', '[', ']', ';', '#', '|', '"'] {
        assert!(syntax.is_reserved(c), "{}", c);
    }
    for c in ['a', '-', '+', '0', 'λ'] {
        assert!(! syntax.is_reserved(c), "{}", c);
    }
    assert!(! Syntax::default().is_reserved('('));
}

#[test]
fn char_literals_and_rule_precedence() {
    // char literals are tried before strings with the same opener
    let syntax = Syntax {
        char_lit: Some(Pair::new("'", "'")),
        string_lit: Some(Pair::new("'", "'")),
        raw_string_lit: Some(Pair::new("`", "`")),
        ..Syntax::default()
    };
    assert_eq!(lex("'ab' `r`", &syntax),
               vec![tok(TokenKind::Char, "ab"),
                    tok(TokenKind::RawString, "r"),
                    tok(TokenKind::Eof, "")]);
    assert_eq!(lex("'a", &syntax),
               vec![tok(TokenKind::Err(LexError::MissingDelimiter("char")), "'")]);
    assert_eq!(lex(" `raw", &syntax),
               vec![tok(TokenKind::Err(LexError::MissingDelimiter("raw string")),
                        "`")]);
    assert_eq!(LexError::MissingDelimiter("raw string").to_string(),
               "missing raw string delimiter");
}

#[test]
fn delimiters_tried_in_registration_order() {
    let syntax = Syntax {
        delimiters: vec![Pair::new("(", ")"), Pair::new("(*", "*)")],
        ..Syntax::default()
    };
    assert_eq!(lex("(*)", &syntax),
               vec![tok(TokenKind::ListOpen, "("),
                    tok(TokenKind::ListClose, "*)"),
                    tok(TokenKind::Eof, "")]);

    let syntax = Syntax {
        delimiters: vec![Pair::new("(*", "*)"), Pair::new("(", ")")],
        ..Syntax::default()
    };
    assert_eq!(lex("(*)", &syntax),
               vec![tok(TokenKind::ListOpen, "(*"),
                    tok(TokenKind::ListClose, ")"),
                    tok(TokenKind::Eof, "")]);
}
