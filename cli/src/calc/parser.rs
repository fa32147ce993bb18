use crate::calc::error::CalcError;
use crate::calc::lexer::{tokenize, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    // Named constant or the graph variable
    Variable(String),
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
}

/// Deepest expression tree the parser will build
pub const MAX_DEPTH: usize = 256;

/// Parse an expression.
///
/// Precedence, loosest first: `+ -`, then `* / %` and implicit
/// multiplication (`2x`, `3(1+2)`), then unary minus, then `^`
/// (right-associative, so `-2^2` is -4 and `2^3^2` is 512).
///
/// Every nesting level (parentheses, signs, exponents, call arguments)
/// and every chained operator counts toward `MAX_DEPTH`, which bounds
/// the height of the returned tree.
pub fn parse_expression(source: &str) -> Result<Expr, CalcError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.additive()?;

    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(unexpected(token)),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

fn unexpected(token: &Token) -> CalcError {
    CalcError::UnexpectedToken {
        found: token.kind.to_string(),
        position: token.position,
    }
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), CalcError> {
        match self.next() {
            Some(token) if &token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(&token)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    fn enter(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::TooDeep { max: MAX_DEPTH });
        }
        Ok(())
    }

    fn additive(&mut self) -> Result<Expr, CalcError> {
        let entry = self.depth;
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => {
                    self.depth = entry;
                    return Ok(lhs);
                }
            };
            self.pos += 1;
            self.enter()?;
            let rhs = self.multiplicative()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn multiplicative(&mut self) -> Result<Expr, CalcError> {
        let entry = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                Some(TokenKind::Percent) => BinaryOp::Mod,
                // Juxtaposition: "2x", "2(x+1)", "(a)(b)"
                Some(TokenKind::Number(_) | TokenKind::Ident(_) | TokenKind::LParen) => {
                    self.enter()?;
                    let rhs = self.power()?;
                    lhs = Expr::Binary(BinaryOp::Mul, Box::new(lhs), Box::new(rhs));
                    continue;
                }
                _ => {
                    self.depth = entry;
                    return Ok(lhs);
                }
            };
            self.pos += 1;
            self.enter()?;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, CalcError> {
        self.enter()?;
        let expr = self.signed();
        self.depth -= 1;
        expr
    }

    fn signed(&mut self) -> Result<Expr, CalcError> {
        if self.eat(&TokenKind::Minus) {
            return Ok(Expr::Neg(Box::new(self.unary()?)));
        }
        if self.eat(&TokenKind::Plus) {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, CalcError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            // Exponent may carry its own sign: 2^-1
            let exponent = self.unary()?;
            return Ok(Expr::Binary(
                BinaryOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, CalcError> {
        let token = self.next().ok_or(CalcError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::Ident(name) => {
                if self.eat(&TokenKind::LParen) {
                    let args = self.arguments()?;
                    Ok(Expr::Call(name, args))
                } else {
                    Ok(Expr::Variable(name))
                }
            }
            TokenKind::LParen => {
                let inner = self.additive()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(unexpected(&token)),
        }
    }

    // Opening parenthesis already consumed
    fn arguments(&mut self) -> Result<Vec<Expr>, CalcError> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.additive()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect(&TokenKind::RParen)?;
            return Ok(args);
        }
    }
}
