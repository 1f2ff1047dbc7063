use logos::Logos;

use crate::error::LexError;

/// A source position, 1-based in both coordinates.
///
/// Columns are counted in characters, not bytes, so multi-byte text in
/// comments or strings does not skew diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    /// The 1-based source line.
    pub line:   usize,
    /// The 1-based source column.
    pub column: usize,
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Classifies a lexical failure before it is attached to a position.
///
/// This is the error type logos reports from token callbacks; `tokenize`
/// turns it into a public [`LexError`] carrying line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character with no meaning in the language.
    #[default]
    UnexpectedCharacter,
    /// A string literal with no closing quote on its line.
    UnterminatedString,
    /// A numeric literal with more than one decimal point.
    MalformedNumber,
    /// An integer literal that overflows 64 bits.
    NumberTooLarge,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line starts,
/// which together let any span be resolved to a line/column pair.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Keywords are
/// matched case-insensitively; identifiers keep their original casing.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Floating-point literal tokens, such as `3.14`, `1.` or `.5`.
    /// The second pattern traps numbers with more than one decimal point.
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+", parse_real)]
    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)\.[0-9.]*", reject_malformed_number)]
    Real(f64),
    /// String literal tokens, single- or double-quoted, with no escapes.
    /// The prefix patterns trap strings that never close on their line.
    #[regex(r#""[^"\n]*""#, parse_string)]
    #[regex(r"'[^'\n]*'", parse_string)]
    #[regex(r#""[^"\n]*"#, reject_unterminated_string)]
    #[regex(r"'[^'\n]*", reject_unterminated_string)]
    Str(String),
    /// Identifier tokens; variable names such as `x` or `LOOPCOUNT`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `SAY` — plain output.
    #[token("SAY", ignore(ascii_case))]
    Say,
    /// `YELL` — loud output.
    #[token("YELL", ignore(ascii_case))]
    Yell,
    /// `WHISPER` — quiet output.
    #[token("WHISPER", ignore(ascii_case))]
    Whisper,
    /// `CONFUSE` — shuffled output.
    #[token("CONFUSE", ignore(ascii_case))]
    Confuse,
    /// `REPEAT` — repeated output.
    #[token("REPEAT", ignore(ascii_case))]
    Repeat,
    /// `TIMES` — closes a REPEAT or LOOP count.
    #[token("TIMES", ignore(ascii_case))]
    Times,
    /// `YEET` — decorated output.
    #[token("YEET", ignore(ascii_case))]
    Yeet,

    /// `SET` — variable declaration.
    #[token("SET", ignore(ascii_case))]
    Set,
    /// `TO` — separates a SET name from its value.
    #[token("TO", ignore(ascii_case))]
    To,
    /// `ADD` — add to a variable.
    #[token("ADD", ignore(ascii_case))]
    Add,
    /// `SUB` — subtract from a variable.
    #[token("SUB", ignore(ascii_case))]
    Sub,
    /// `MUL` — multiply a variable.
    #[token("MUL", ignore(ascii_case))]
    Mul,
    /// `DIV` — divide a variable.
    #[token("DIV", ignore(ascii_case))]
    Div,
    /// `BY` — separates a mutation name from its amount.
    #[token("BY", ignore(ascii_case))]
    By,

    /// `IF` — opens a conditional.
    #[token("IF", ignore(ascii_case))]
    If,
    /// `THEN` — separates an IF condition from its body.
    #[token("THEN", ignore(ascii_case))]
    Then,
    /// `ELSE` — starts the alternative branch.
    #[token("ELSE", ignore(ascii_case))]
    Else,
    /// `ENDIF` — closes a conditional.
    #[token("ENDIF", ignore(ascii_case))]
    EndIf,
    /// `AND` — logical conjunction.
    #[token("AND", ignore(ascii_case))]
    And,
    /// `OR` — logical disjunction.
    #[token("OR", ignore(ascii_case))]
    Or,
    /// `NOT` — logical negation.
    #[token("NOT", ignore(ascii_case))]
    Not,

    /// `LOOP` — opens a counted loop.
    #[token("LOOP", ignore(ascii_case))]
    Loop,
    /// `ENDLOOP` — closes a counted loop.
    #[token("ENDLOOP", ignore(ascii_case))]
    EndLoop,
    /// `BREAKOUT` — exits the innermost loop.
    #[token("BREAKOUT", ignore(ascii_case))]
    Breakout,

    /// `WAIT` — timed delay.
    #[token("WAIT", ignore(ascii_case))]
    Wait,
    /// `SECONDS` — closes a WAIT duration.
    #[token("SECONDS", ignore(ascii_case))]
    Seconds,
    /// `DUMP` — variable listing.
    #[token("DUMP", ignore(ascii_case))]
    Dump,
    /// `STOP` — deliberate program end.
    #[token("STOP", ignore(ascii_case))]
    Stop,

    /// `RICKROLL` — you know the song.
    #[token("RICKROLL", ignore(ascii_case))]
    Rickroll,
    /// `MYSTERY` — random message.
    #[token("MYSTERY", ignore(ascii_case))]
    Mystery,
    /// `OOPS` — fake crash.
    #[token("OOPS", ignore(ascii_case))]
    Oops,
    /// `FLIP` — coin flip.
    #[token("FLIP", ignore(ascii_case))]
    Flip,
    /// `DICE` — die roll.
    #[token("DICE", ignore(ascii_case))]
    Dice,
    /// `BRUH` — bruh.
    #[token("BRUH", ignore(ascii_case))]
    Bruh,
    /// `POGGERS` — celebration.
    #[token("POGGERS", ignore(ascii_case))]
    Poggers,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    Power,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Line break. Emitted as a token (the parser strips them) so the line
    /// counter stays exact.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
    })]
    NewLine,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    SlashComment,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    HashComment,
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::NumberTooLarge)
}

/// Parses a floating-point literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Strips the surrounding quotes from a string literal slice.
fn parse_string(lex: &logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    Ok(slice[1..slice.len() - 1].to_string())
}

/// Callback for a numeric literal with more than one decimal point.
fn reject_malformed_number(_: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    Err(LexErrorKind::MalformedNumber)
}

/// Callback for a string literal that never closes on its line.
fn reject_unterminated_string(_: &logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

/// Converts source text into an ordered token stream.
///
/// Whitespace and comments are skipped; every other piece of text becomes a
/// token paired with its starting position. The stream ends when the vector
/// does — consumers treat exhaustion as the end of input.
///
/// # Parameters
/// - `source`: The raw program text.
///
/// # Returns
/// The token stream, or the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use franzcode::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("SET x TO 3").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Set,
///                 Token::Identifier("x".to_string()),
///                 Token::To,
///                 Token::Integer(3)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Pos)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        // A newline's callback has already moved the line start past its own
        // span; clamping keeps the slice below well-formed.
        let line_start = lexer.extras.line_start.min(span.start);
        let pos = Pos { line:   lexer.extras.line,
                        column: source[line_start..span.start].chars().count() + 1, };

        match result {
            Ok(token) => tokens.push((token, pos)),
            Err(kind) => {
                return Err(match kind {
                    LexErrorKind::UnexpectedCharacter => {
                        let character = source[span.start..].chars().next().unwrap_or('\0');
                        LexError::UnexpectedCharacter { character,
                                                       line: pos.line,
                                                       column: pos.column, }
                    },
                    LexErrorKind::UnterminatedString => {
                        LexError::UnterminatedString { line:   pos.line,
                                                       column: pos.column, }
                    },
                    LexErrorKind::MalformedNumber => {
                        LexError::MalformedNumber { line:   pos.line,
                                                    column: pos.column, }
                    },
                    LexErrorKind::NumberTooLarge => {
                        LexError::NumberTooLarge { line:   pos.line,
                                                   column: pos.column, }
                    },
                });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(kinds("say Say SAY"), vec![Token::Say, Token::Say, Token::Say]);
    }

    #[test]
    fn identifiers_keep_their_casing() {
        assert_eq!(kinds("Sayonara"),
                   vec![Token::Identifier("Sayonara".to_string())]);
    }

    #[test]
    fn numbers_split_into_integer_and_real() {
        assert_eq!(kinds("42 3.14 .5"),
                   vec![Token::Integer(42), Token::Real(3.14), Token::Real(0.5)]);
    }

    #[test]
    fn two_character_operators_win_over_prefixes() {
        assert_eq!(kinds("** * >= > == <="),
                   vec![Token::Power,
                        Token::Star,
                        Token::GreaterEqual,
                        Token::Greater,
                        Token::EqualEqual,
                        Token::LessEqual]);
    }

    #[test]
    fn both_quote_styles_lex_to_strings() {
        assert_eq!(kinds(r#""hi" 'ho'"#),
                   vec![Token::Str("hi".to_string()), Token::Str("ho".to_string())]);
    }

    #[test]
    fn comments_are_discarded() {
        assert_eq!(kinds("1 # the rest vanishes\n2 // this too"),
                   vec![Token::Integer(1), Token::NewLine, Token::Integer(2)]);
    }

    #[test]
    fn newlines_carry_the_line_counter() {
        let tokens = tokenize("SAY 1\nSAY 2").unwrap();
        assert_eq!(tokens[0].1.line, 1);
        assert_eq!(tokens[3].1.line, 2);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(matches!(tokenize("SAY \"oops"),
                         Err(LexError::UnterminatedString { line: 1, .. })));
    }

    #[test]
    fn double_decimal_point_is_an_error() {
        assert!(matches!(tokenize("SET x TO 1.2.3"),
                         Err(LexError::MalformedNumber { line: 1, .. })));
    }

    #[test]
    fn stray_characters_are_errors() {
        assert!(matches!(tokenize("SAY @"),
                         Err(LexError::UnexpectedCharacter { character: '@', .. })));
    }

    #[test]
    fn tokenizing_twice_is_deterministic() {
        let source = "LOOP 3 TIMES\n  SAY \"n {LOOPCOUNT}\"\nENDLOOP";
        assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    }
}
