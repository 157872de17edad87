use crate::ast::{Prop, Section, StyleDocument, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Ident(s) => {
                self.advance();
                Ok(s)
            }
            tok => Err(self.err(format!("expected identifier, got {:?}", tok))),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, self.peek())))
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<StyleDocument, ParseError> {
        let mut sections = Vec::new();
        while self.peek() != &Token::Eof {
            sections.push(self.parse_section()?);
        }
        Ok(StyleDocument { sections })
    }

    // ── Section ───────────────────────────────────────────────────────────

    fn parse_section(&mut self) -> Result<Section, ParseError> {
        let (line, _) = self.current_pos();
        let name = self.expect_ident()?;
        self.expect_token(&Token::LBrace)?;

        let mut props = Vec::new();
        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(self.err(format!("unclosed '{{' block for section `{name}`"))),
                Token::Ident(_) => props.push(self.parse_prop()?),
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside `{}` - expected `key: value`",
                        tok, name
                    )));
                }
            }
        }

        Ok(Section { name, props, line })
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let (line, col) = self.current_pos();
        let key = self.expect_ident()?;
        self.expect_token(&Token::Colon)?;
        let value = self.parse_value()?;
        Ok(Prop { key, value, line, col })
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let value = match self.peek() {
            Token::Number(n) => Value::Number(*n),
            Token::Color(c) => Value::Color(*c),
            Token::Ident(s) => Value::Ident(s.clone()),
            tok => return Err(self.err(format!("expected a value, got {:?}", tok))),
        };
        self.advance();
        Ok(value)
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.dial` source string into a [`StyleDocument`].
pub fn parse_str(src: &str) -> Result<StyleDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
