//! Strict parser for generator-produced type hints.
//!
//! Grammar (whitespace allowed between tokens):
//!
//! ```text
//! hint    := term ('|' term)*
//! term    := quoted | ident ('[' hint (',' hint)* ']')?
//! quoted  := '\'' .* '\'' | '"' .* '"'
//! ident   := [A-Za-z0-9_.]+
//! ```
//!
//! A quoted term is a forward reference; its content is parsed as a hint of
//! its own and kept as an opaque literal when that fails (`Literal['a b']`).

use std::fmt;

use crate::error::HintError;

/// Parsed form of a type hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Bare name: `str`, `Foo`, `datetime.datetime`.
    Name(String),
    /// Subscripted name: `list[Foo]`, `Union[Unset, int]`.
    Generic { name: String, args: Vec<TypeExpr> },
    /// PEP 604 union: `int | None`.
    Union(Vec<TypeExpr>),
    /// Quoted text that is not itself a hint.
    Literal(String),
}

impl TypeExpr {
    /// Members of a union, whichever spelling was used.
    pub fn union_members(&self) -> Option<&[TypeExpr]> {
        match self {
            Self::Union(members) => Some(members),
            Self::Generic { name, args } if is_union_name(name) => Some(args),
            _ => None,
        }
    }

    pub fn is_name(&self, expected: &str) -> bool {
        matches!(self, Self::Name(name) if name == expected)
    }
}

fn is_union_name(name: &str) -> bool {
    matches!(name, "Union" | "typing.Union")
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Generic { name, args } => {
                write!(f, "{name}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str("]")
            }
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Self::Literal(text) => write!(f, "'{text}'"),
        }
    }
}

/// Deepest `[...]` nesting accepted, quoted forward references included.
pub const MAX_HINT_DEPTH: usize = 64;

/// Parse a type hint, rejecting anything outside the grammar.
pub fn parse_hint(hint: &str) -> Result<TypeExpr, HintError> {
    parse_at_depth(hint, 0)
}

fn parse_at_depth(hint: &str, depth: usize) -> Result<TypeExpr, HintError> {
    let mut parser = HintParser::new(hint, depth);
    parser.ws();
    if parser.eof() {
        return Err(HintError::Empty);
    }
    let expr = parser.union()?;
    parser.ws();
    if !parser.eof() {
        return Err(HintError::TrailingInput { pos: parser.pos });
    }
    Ok(expr)
}

struct HintParser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> HintParser<'a> {
    fn new(src: &'a str, depth: usize) -> Self {
        Self { src, pos: 0, depth }
    }

    fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    fn union(&mut self) -> Result<TypeExpr, HintError> {
        let mut members = vec![self.term()?];
        loop {
            self.ws();
            match self.peek() {
                Some('|') => {
                    self.bump('|');
                    members.push(self.term()?);
                }
                _ => break,
            }
        }
        if members.len() == 1 {
            return Ok(members.remove(0));
        }
        Ok(TypeExpr::Union(members))
    }

    fn term(&mut self) -> Result<TypeExpr, HintError> {
        self.ws();
        match self.peek() {
            Some(q @ ('\'' | '"')) => self.quoted(q),
            Some(c) if is_ident_char(c) => {
                let name = self.ident();
                self.ws();
                if self.peek() == Some('[') {
                    let open = self.pos;
                    self.bump('[');
                    let args = self.args(&name, open)?;
                    return Ok(TypeExpr::Generic { name, args });
                }
                Ok(TypeExpr::Name(name))
            }
            Some(ch) => Err(HintError::Unexpected { ch, pos: self.pos }),
            None => Err(HintError::UnexpectedEnd),
        }
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_ident_char(c) {
                break;
            }
            self.bump(c);
        }
        self.src[start..self.pos].to_string()
    }

    fn args(&mut self, name: &str, open: usize) -> Result<Vec<TypeExpr>, HintError> {
        if self.depth >= MAX_HINT_DEPTH {
            return Err(HintError::TooDeep { pos: open });
        }
        self.depth += 1;
        let args = self.arg_list(name, open);
        self.depth -= 1;
        args
    }

    fn arg_list(&mut self, name: &str, open: usize) -> Result<Vec<TypeExpr>, HintError> {
        let mut args = Vec::new();
        self.ws();
        if self.peek() == Some(']') {
            return Err(HintError::EmptyArguments {
                name: name.to_string(),
            });
        }
        loop {
            args.push(self.union()?);
            self.ws();
            match self.peek() {
                Some(',') => self.bump(','),
                Some(']') => {
                    self.bump(']');
                    return Ok(args);
                }
                Some(ch) => return Err(HintError::Unexpected { ch, pos: self.pos }),
                None => return Err(HintError::Unclosed { pos: open }),
            }
        }
    }

    fn quoted(&mut self, quote: char) -> Result<TypeExpr, HintError> {
        let start = self.pos;
        self.bump(quote);
        let body_start = self.pos;
        let Some(len) = self.src[body_start..].find(quote) else {
            return Err(HintError::UnterminatedQuote { pos: start });
        };
        let body = &self.src[body_start..body_start + len];
        self.pos = body_start + len + quote.len_utf8();
        match parse_at_depth(body, self.depth) {
            Err(err @ HintError::TooDeep { .. }) => Err(err),
            parsed => Ok(parsed.unwrap_or_else(|_| TypeExpr::Literal(body.to_string()))),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}
