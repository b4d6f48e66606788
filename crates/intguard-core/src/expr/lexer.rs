// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::engine::Operation;
use crate::error::ParseError;
use crate::kind::IntegerKind;
use logos::Logos;

/// Raw lexemes. Kind codes and operators are fixed tokens; any other
/// alphanumeric run is a word that names no kind.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[token("u8")]
    U8,
    #[token("s8")]
    S8,
    #[token("u16")]
    U16,
    #[token("s16")]
    S16,
    #[token("u32")]
    U32,
    #[token("s32")]
    S32,
    #[token("u64")]
    U64,
    #[token("s64")]
    S64,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<<")]
    ShiftLeft,
    #[token(">>")]
    ShiftRight,

    #[regex(r"[A-Za-z0-9]+")]
    Word,

    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,
}

impl Lexeme {
    fn kind(self) -> Option<IntegerKind> {
        match self {
            Self::U8 => Some(IntegerKind::U8),
            Self::S8 => Some(IntegerKind::S8),
            Self::U16 => Some(IntegerKind::U16),
            Self::S16 => Some(IntegerKind::S16),
            Self::U32 => Some(IntegerKind::U32),
            Self::S32 => Some(IntegerKind::S32),
            Self::U64 => Some(IntegerKind::U64),
            Self::S64 => Some(IntegerKind::S64),
            _ => None,
        }
    }

    fn operation(self) -> Option<Operation> {
        match self {
            Self::Plus => Some(Operation::Add),
            Self::Minus => Some(Operation::Sub),
            Self::Star => Some(Operation::Mul),
            Self::Slash => Some(Operation::Div),
            Self::Percent => Some(Operation::Rem),
            Self::ShiftLeft => Some(Operation::Shl),
            Self::ShiftRight => Some(Operation::Shr),
            _ => None,
        }
    }
}

/// A lexical token together with its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Term { offset: usize, kind: IntegerKind },
    Op { offset: usize, op: Operation },
}

impl Token {
    #[inline]
    pub fn offset(&self) -> usize {
        match self {
            Self::Term { offset, .. } | Self::Op { offset, .. } => *offset,
        }
    }
}

/// Splits an expression string into tokens.
///
/// Kind codes are maximal runs of ASCII alphanumerics; operators are `+ - * / %`
/// and the two-character `<<` and `>>`. ASCII whitespace separates tokens and is
/// otherwise ignored. Stops at the first word that names no kind or the first
/// character that starts no token.
pub fn tokenize(src: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(src.len() / 2 + 1);
    let mut lexer = Lexeme::lexer(src);

    while let Some(lexeme) = lexer.next() {
        let offset = lexer.span().start;
        let lexeme = match lexeme {
            Ok(lexeme) => lexeme,
            Err(()) => {
                let ch = src[offset..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ParseError::UnexpectedChar { offset, ch });
            }
        };

        if let Some(kind) = lexeme.kind() {
            tokens.push(Token::Term { offset, kind });
        } else if let Some(op) = lexeme.operation() {
            tokens.push(Token::Op { offset, op });
        } else if lexeme == Lexeme::Word {
            return Err(ParseError::UnknownKind {
                offset,
                text: lexer.slice().to_string(),
            });
        }
    }

    Ok(tokens)
}
