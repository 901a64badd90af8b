use sexpr_reader::cursor::{Cursor, Match};
use sexpr_reader::pos::Pos;
use sexpr_reader::syntax::Syntax;

fn pos(line: u32, col: u32) -> Pos {
    Pos { line, col }
}

#[test]
fn rewind_restores_state_across_newline() {
    let mut c = Cursor::new(b"a\nb");
    assert_eq!(c.next_char(), Some('a'));
    assert_eq!(c.pos(), pos(1, 2));
    let before = c.mark();
    assert_eq!(c.next_char(), Some('\n'));
    assert_eq!(c.pos(), pos(2, 1));
    assert!(c.rewind());
    assert_eq!(c.mark(), before);
    assert_eq!(c.offset(), 1);
    assert_eq!(c.pos(), pos(1, 2));
}

#[test]
fn second_rewind_does_nothing() {
    let mut c = Cursor::new(b"xy");
    c.next_char();
    c.next_char();
    assert!(c.rewind());
    assert!(! c.rewind());
    assert_eq!(c.offset(), 1);
    assert_eq!(c.pos(), pos(1, 2));
}

#[test]
fn decodes_multibyte_and_invalid_input() {
    let mut c = Cursor::new("é(".as_bytes());
    assert_eq!(c.next_char(), Some('é'));
    assert_eq!(c.offset(), 2);
    assert_eq!(c.pos(), pos(1, 2));
    assert!(c.rewind());
    assert_eq!(c.offset(), 0);

    let mut c = Cursor::new(&[0xff, b'a']);
    assert_eq!(c.next_char(), Some('\u{FFFD}'));
    assert_eq!(c.next_char(), Some('a'));
    assert_eq!(c.next_char(), None);
}

#[test]
fn accept_reports_exhaustion() {
    let mut c = Cursor::new(b"x");
    assert_eq!(c.accept("abc"), Match::NoMatch);
    assert_eq!(c.offset(), 0);
    assert_eq!(c.accept("x"), Match::Matched);
    assert_eq!(c.accept("x"), Match::Exhausted);
}

#[test]
fn accept_run_and_until() {
    let mut c = Cursor::new(b"0123x;rest\nnext");
    assert_eq!(c.accept_run("0123456789"), 4);
    assert_eq!(c.accept_run("0123456789"), 0);
    assert_eq!(c.accept_until("\r\n"), 6);
    assert_eq!(c.peek(), Some('\n'));
    assert_eq!(c.accept_space(), 1);
    assert_eq!(c.pos(), pos(2, 1));
}

#[test]
fn literal_matching_up_to_end_of_input() {
    let mut c = Cursor::new(b"abc");
    assert!(! c.accept_literal("abd"));
    assert_eq!(c.offset(), 0);
    assert!(! c.accept_literal("abcd"));
    assert!(c.accept_literal("abc"));
    assert!(c.is_eof());
    assert_eq!(c.pos(), pos(1, 4));
}

#[test]
fn until_literal_tracks_lines() {
    let mut c = Cursor::new(b"ab\ncd*/ef");
    assert!(c.accept_until_literal("*/"));
    assert_eq!(c.offset(), 5);
    assert_eq!(c.pos(), pos(2, 3));

    let mut c = Cursor::new(b"ab\ncd");
    assert!(! c.accept_until_literal("*/"));
    assert_eq!(c.offset(), 0);
    assert_eq!(c.pos(), pos(1, 1));
}

#[test]
fn until_literal_skips_escaped_delimiters() {
    let mut c = Cursor::new(br#"a\"b"c"#);
    assert!(c.accept_until_literal_escaped("\"", Some('\\')));
    assert_eq!(c.offset(), 4);

    let mut c = Cursor::new(br#"a\""#);
    assert!(! c.accept_until_literal_escaped("\"", Some('\\')));
    assert_eq!(c.offset(), 0);
}

#[test]
fn identifiers_stop_at_reserved_code_points() {
    let syntax = Syntax::scheme();
    let mut c = Cursor::new("λfoo(bar".as_bytes());
    assert_eq!(c.accept_identifier(&syntax), 4);
    assert_eq!(c.peek(), Some('('));

    let mut c = Cursor::new(b"a\x07b");
    assert_eq!(c.accept_identifier(&syntax), 1);
}
