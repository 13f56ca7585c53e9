//! Surface syntax for expressions over `String` variables.
//!
//! The grammar, from loosest binding to tightest:
//!
//! ```none
//! disjunction := conjunction ('|' conjunction)*
//! conjunction := unary ('&' unary)*
//! unary       := '!' unary | atom
//! atom        := '(' disjunction ')' | identifier | 'true' | 'false'
//! ```
//!
//! The logical glyphs `∨ ∧ ¬ ⊤ ⊥` are accepted alongside their ASCII spellings.
//! Chained connectives associate left, so the parse preserves surface associativity as a left-leaning tree.

use crate::types::err::ParseError;

use super::Expression;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    Not,
    And,
    Or,
    Open,
    Close,
    Top,
    Bottom,
    Ident(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Not => write!(f, "!"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Top => write!(f, "true"),
            Token::Bottom => write!(f, "false"),
            Token::Ident(name) => write!(f, "{name}"),
        }
    }
}

fn tokenize(src: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut characters = src.chars().peekable();

    while let Some(character) = characters.next() {
        match character {
            c if c.is_whitespace() => {}

            '!' | '¬' => tokens.push(Token::Not),
            '&' | '∧' => tokens.push(Token::And),
            '|' | '∨' => tokens.push(Token::Or),
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            '⊤' => tokens.push(Token::Top),
            '⊥' => tokens.push(Token::Bottom),

            c if c.is_alphanumeric() || c == '_' => {
                let mut ident = String::from(c);
                while let Some(next) = characters.peek() {
                    match next {
                        n if n.is_alphanumeric() || *n == '_' => {
                            ident.push(*n);
                            characters.next();
                        }
                        _ => break,
                    }
                }
                match ident.as_str() {
                    "true" => tokens.push(Token::Top),
                    "false" => tokens.push(Token::Bottom),
                    _ => tokens.push(Token::Ident(ident)),
                }
            }

            unexpected => return Err(ParseError::UnexpectedCharacter(unexpected)),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn disjunction(&mut self) -> Result<Expression<String>, ParseError> {
        let mut expression = self.conjunction()?;
        while let Some(Token::Or) = self.peek() {
            self.cursor += 1;
            expression = expression.or(self.conjunction()?);
        }
        Ok(expression)
    }

    fn conjunction(&mut self) -> Result<Expression<String>, ParseError> {
        let mut expression = self.unary()?;
        while let Some(Token::And) = self.peek() {
            self.cursor += 1;
            expression = expression.and(self.unary()?);
        }
        Ok(expression)
    }

    fn unary(&mut self) -> Result<Expression<String>, ParseError> {
        match self.peek() {
            Some(Token::Not) => {
                self.cursor += 1;
                Ok(self.unary()?.not())
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<Expression<String>, ParseError> {
        match self.advance() {
            None => Err(ParseError::UnexpectedEnd),

            Some(Token::Open) => {
                let expression = self.disjunction()?;
                match self.advance() {
                    Some(Token::Close) => Ok(expression),
                    Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
                    None => Err(ParseError::Unbalanced),
                }
            }

            Some(Token::Top) => Ok(Expression::Const(true)),
            Some(Token::Bottom) => Ok(Expression::Const(false)),
            Some(Token::Ident(name)) => Ok(Expression::Var(name)),

            Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }
}

impl std::str::FromStr for Expression<String> {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(src)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut parser = Parser { tokens, cursor: 0 };
        let expression = parser.disjunction()?;

        match parser.peek() {
            None => Ok(expression),
            Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn var(name: &str) -> Expression<String> {
        Expression::var(name.to_string())
    }

    #[test]
    fn precedence() {
        let parsed: Expression<String> = "a | b & !c".parse().unwrap();
        let expected = var("a").or(var("b").and(var("c").not()));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn left_leaning_chains() {
        let parsed: Expression<String> = "a & b & c".parse().unwrap();
        let expected = var("a").and(var("b")).and(var("c"));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn glyphs_and_ascii_agree() {
        let glyphs: Expression<String> = "¬(a ∧ ⊥) ∨ ⊤".parse().unwrap();
        let ascii: Expression<String> = "!(a & false) | true".parse().unwrap();
        assert_eq!(glyphs, ascii);
    }

    #[test]
    fn grouping_overrides_precedence() {
        let parsed: Expression<String> = "(a | b) & c".parse().unwrap();
        let expected = var("a").or(var("b")).and(var("c"));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn rejections() {
        assert_eq!("".parse::<Expression<String>>(), Err(ParseError::Empty));
        assert_eq!(
            "a &".parse::<Expression<String>>(),
            Err(ParseError::UnexpectedEnd)
        );
        assert_eq!(
            "(a | b".parse::<Expression<String>>(),
            Err(ParseError::Unbalanced)
        );
        assert_eq!(
            "a + b".parse::<Expression<String>>(),
            Err(ParseError::UnexpectedCharacter('+'))
        );
        assert_eq!(
            "a b".parse::<Expression<String>>(),
            Err(ParseError::UnexpectedToken("b".to_string()))
        );
    }
}
