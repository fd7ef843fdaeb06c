use minipas::interpreter::lexer::{Lexer, Token, TokenCategory};

fn tokens(src: &str) -> Vec<Token> {
    Lexer::new(src).collect::<Result<_, _>>()
                   .unwrap_or_else(|e| panic!("Lexing failed: {e}"))
}

#[test]
fn reserved_words_and_identifiers() {
    assert_eq!(tokens("PROGRAM VAR DIV INTEGER REAL BEGIN END"),
               [Token::Program,
                Token::Var,
                Token::IntegerDiv,
                Token::Integer,
                Token::Real,
                Token::Begin,
                Token::End,
                Token::Eof]);

    assert_eq!(tokens("Begin ENDx a1 BEGIN2"),
               [Token::Identifier("Begin".to_string()),
                Token::Identifier("ENDx".to_string()),
                Token::Identifier("a1".to_string()),
                Token::Identifier("BEGIN2".to_string()),
                Token::Eof]);
}

#[test]
fn numbers_keep_their_kind() {
    assert_eq!(tokens("42 2.75 7. 0.5"),
               [Token::IntegerConst(42.0),
                Token::RealConst(2.75),
                Token::RealConst(7.0),
                Token::RealConst(0.5),
                Token::Eof]);
}

#[test]
fn assignment_needs_both_characters() {
    assert_eq!(tokens("a:=1"),
               [Token::Identifier("a".to_string()),
                Token::Assign,
                Token::IntegerConst(1.0),
                Token::Eof]);

    let mut lexer = Lexer::new("a : = 1");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("a".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Colon);
    assert_eq!(lexer.next_token().unwrap_err().character, '=');
}

#[test]
fn punctuation() {
    assert_eq!(tokens(";:,+-*/().")
                   .iter()
                   .map(Token::category)
                   .collect::<Vec<_>>(),
               [TokenCategory::Punctuation,
                TokenCategory::Punctuation,
                TokenCategory::Punctuation,
                TokenCategory::Operator,
                TokenCategory::Operator,
                TokenCategory::Operator,
                TokenCategory::Operator,
                TokenCategory::Punctuation,
                TokenCategory::Punctuation,
                TokenCategory::Punctuation,
                TokenCategory::EndOfInput]);
}

#[test]
fn whitespace_and_comments_are_skipped() {
    assert_eq!(tokens(" \t\r\n{ BEGIN x := 1 }\n  END {trailing}"),
               [Token::End, Token::Eof]);
}

#[test]
fn unterminated_comment_yields_end_of_input() {
    let mut lexer = Lexer::new("x { no closing brace\n y := 2");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("x".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("x".to_string()));
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn unrecognized_character_reports_position() {
    let mut lexer = Lexer::new("a :=\n  b # c");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("a".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Assign);
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("b".to_string()));

    let e = lexer.next_token().unwrap_err();
    assert_eq!(e.character, '#');
    assert_eq!(e.position, 9);
    assert_eq!(e.line, 2);
}

#[test]
fn iteration_stops_after_first_error() {
    let items: Vec<_> = Lexer::new("a ? b").collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

#[test]
fn lines_are_counted_through_comments() {
    let mut lexer = Lexer::new("{ one\ntwo\n}\nx");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("x".to_string()));
    assert_eq!(lexer.line(), 4);
}
