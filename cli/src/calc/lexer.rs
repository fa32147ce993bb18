use crate::calc::error::CalcError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset in the source expression
    pub position: usize,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Ident(name) => write!(f, "{}", name),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Percent => write!(f, "%"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let start = i;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || (c == '.' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()))
        {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            // Only an exponent when digits follow; "2e" is 2 times e
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }

            // "1.2.3" is not two numbers
            if i < chars.len() && chars[i] == '.' {
                return Err(CalcError::UnexpectedChar('.', i));
            }

            let text: String = chars[start..i].iter().collect();
            let value = text
                .parse::<f64>()
                .map_err(|_| CalcError::UnexpectedChar(c, start))?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                position: start,
            });
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Ident(chars[start..i].iter().collect()),
                position: start,
            });
            continue;
        }

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' | '−' => TokenKind::Minus,
            '*' | '×' => TokenKind::Star,
            '/' | '÷' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            other => return Err(CalcError::UnexpectedChar(other, start)),
        };
        tokens.push(Token {
            kind,
            position: start,
        });
        i += 1;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("12.5"), vec![TokenKind::Number(12.5)]);
        assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5)]);
        assert_eq!(kinds("1e3"), vec![TokenKind::Number(1000.0)]);
        assert_eq!(kinds("2.5E-1"), vec![TokenKind::Number(0.25)]);
    }

    #[test]
    fn test_trailing_e_is_an_identifier() {
        assert_eq!(
            kinds("2e"),
            vec![TokenKind::Number(2.0), TokenKind::Ident("e".to_string())]
        );
    }

    #[test]
    fn test_operators_and_positions() {
        let tokens = tokenize("x ^ 2").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Caret);
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[2].position, 4);
    }

    #[test]
    fn test_display_operators() {
        assert_eq!(kinds("6 × 7 ÷ 2 − 1")[1], TokenKind::Star);
    }

    #[test]
    fn test_second_decimal_point_is_rejected() {
        assert_eq!(tokenize("1.2.3"), Err(CalcError::UnexpectedChar('.', 3)));
        assert_eq!(tokenize("1..2"), Err(CalcError::UnexpectedChar('.', 2)));
        assert_eq!(tokenize(".5.5"), Err(CalcError::UnexpectedChar('.', 2)));
        assert_eq!(tokenize("1e5.5"), Err(CalcError::UnexpectedChar('.', 3)));
        assert_eq!(kinds("3."), vec![TokenKind::Number(3.0)]);
    }

    #[test]
    fn test_rejects_unknown_characters() {
        assert_eq!(tokenize("2 $ 3"), Err(CalcError::UnexpectedChar('$', 2)));
    }
}
