use combo_core::{ComboPattern, EngineConfig};

use crate::error::ScriptError;
use crate::lexer::{Lexer, Token};
use crate::ComboScript;

/// Line-oriented recursive-descent parser for combo scripts
///
/// A script is a sequence of setting lines (`retention = 1.2`) and combo
/// lines (`"Ruptura" => Right LP@0.3`), with `//` comments. Settings not
/// mentioned keep the engine defaults.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
    /// Line the statement being parsed started on, for diagnostics
    statement_line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: None,
            statement_line: 1,
        }
    }

    pub fn parse(&mut self) -> Result<ComboScript, ScriptError> {
        let mut config = EngineConfig::default();
        let mut patterns = Vec::new();

        self.advance()?;
        while let Some(token) = self.current.clone() {
            self.statement_line = self.lexer.line();
            match token {
                Token::Newline => {
                    self.advance()?;
                }
                Token::Ident(name) => {
                    self.advance()?;
                    if self.current == Some(Token::Equals) {
                        self.parse_setting(&name, &mut config)?;
                    } else {
                        // Unquoted combo id
                        patterns.push(self.parse_combo(name)?);
                    }
                }
                Token::Quoted(id) => {
                    self.advance()?;
                    patterns.push(self.parse_combo(id)?);
                }
                other => {
                    return Err(self.unexpected(&other, "a setting or combo declaration"));
                }
            }
        }

        Ok(ComboScript { config, patterns })
    }

    /// Parses `= NUMBER` after a setting name
    fn parse_setting(&mut self, name: &str, config: &mut EngineConfig) -> Result<(), ScriptError> {
        self.expect_equals()?;
        let value = self.expect_number()?;

        match name {
            "retention" => config.retention = value,
            "max_delta" => config.default_max_delta = value,
            "extension_window" => config.extension_window = value,
            _ => {
                return Err(self.error(format!("Unknown setting: '{}'", name)));
            }
        }

        self.end_of_line()
    }

    /// Parses `=> STEP+` after the combo id
    fn parse_combo(&mut self, id: String) -> Result<ComboPattern, ScriptError> {
        match self.current {
            Some(Token::Arrow) => self.advance()?,
            _ => {
                return Err(self.error(format!("Expected '=>' after combo id \"{}\"", id)));
            }
        }

        let mut sequence = Vec::new();
        let mut deltas = Vec::new();
        loop {
            match self.current.clone() {
                Some(Token::Ident(step)) => {
                    self.advance()?;
                    sequence.push(step.into());
                    if self.current == Some(Token::At) {
                        self.advance()?;
                        deltas.push(Some(self.expect_number()?));
                    } else {
                        deltas.push(None);
                    }
                }
                Some(Token::Newline) | None => break,
                Some(other) => {
                    return Err(self.unexpected(&other, "a token step"));
                }
            }
        }

        if sequence.is_empty() {
            return Err(self.error(format!("Combo \"{}\" declares no steps", id)));
        }

        // Only carry the override list when at least one step declares one
        if deltas.iter().all(Option::is_none) {
            deltas.clear();
        }

        self.end_of_line()?;
        Ok(ComboPattern {
            id,
            sequence,
            step_max_delta: deltas,
        })
    }

    fn expect_equals(&mut self) -> Result<(), ScriptError> {
        match self.current {
            Some(Token::Equals) => self.advance(),
            _ => Err(self.error("Expected '='".to_string())),
        }
    }

    fn expect_number(&mut self) -> Result<f64, ScriptError> {
        match self.current {
            Some(Token::Number(value)) => {
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.error("Expected a number".to_string())),
        }
    }

    /// Consumes the trailing newline, tolerating end of input
    fn end_of_line(&mut self) -> Result<(), ScriptError> {
        match self.current {
            Some(Token::Newline) => self.advance(),
            None => Ok(()),
            Some(ref other) => {
                let other = other.clone();
                Err(self.unexpected(&other, "end of line"))
            }
        }
    }

    fn unexpected(&self, token: &Token, expected: &str) -> ScriptError {
        self.error(format!("Unexpected {:?}, expected {}", token, expected))
    }

    fn error(&self, message: String) -> ScriptError {
        ScriptError::Parse {
            line: self.statement_line,
            message,
        }
    }

    fn advance(&mut self) -> Result<(), ScriptError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }
}
