use logos::{Lexer as LogosLexer, Logos};

use super::Token;
use crate::error::ScriptError;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ScriptError> {
        match self.inner.next() {
            Some(Ok(token)) => {
                if token == Token::Newline {
                    self.current_line += 1;
                }
                Ok(Some(token))
            }
            Some(Err(_)) => {
                let span = self.inner.span();
                let text = &self.input[span.start..span.end];
                Err(ScriptError::Parse {
                    line: self.current_line,
                    message: format!("Unexpected token: '{}'", text),
                })
            }
            None => Ok(None),
        }
    }

    /// Line of the most recently returned token
    pub fn line(&self) -> usize {
        self.current_line
    }
}
