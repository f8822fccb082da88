//! Restricted arithmetic evaluator shared by the Calculator window and Spotlight.
//!
//! Grammar (recursive descent, standard precedence):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-') factor | number | '(' expr ')'
//! ```

use thiserror::Error;

/// Text shown in place of a result when evaluation fails.
pub const INVALID_CALCULATION: &str = "Invalid calculation";

const MAX_NESTING: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Evaluation failures.
pub enum CalcError {
    /// The input is empty or blank.
    #[error("empty expression")]
    Empty,
    /// A character outside digits, whitespace, `+-*/().` was found.
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    /// A literal such as `1.2.3` or a lone `.`.
    #[error("malformed number `{0}`")]
    MalformedNumber(String),
    /// Tokens do not form a complete expression.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// A token appeared where it cannot be used.
    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),
    /// Parentheses nest deeper than the evaluator allows.
    #[error("expression nests too deeply")]
    TooDeep,
    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// The result overflowed to infinity or NaN.
    #[error("result is not a finite number")]
    NonFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Returns `true` when a non-blank query contains only arithmetic characters.
pub fn is_arithmetic_query(query: &str) -> bool {
    !query.trim().is_empty()
        && query
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "+-*/().".contains(c))
}

/// Evaluates an arithmetic expression.
///
/// # Errors
///
/// Returns [`CalcError`] for malformed input, division by zero, or non-finite results.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(CalcError::UnexpectedToken(parser.pos));
    }
    if !value.is_finite() {
        return Err(CalcError::NonFinite);
    }
    Ok(value)
}

/// Evaluates `input` and formats the outcome for display.
pub fn evaluate_to_display(input: &str) -> String {
    match evaluate(input) {
        Ok(value) => format_number(value),
        Err(_) => INVALID_CALCULATION.to_string(),
    }
}

/// Formats a finite number the way JavaScript's `Number.prototype.toString` does.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    while let Some((start, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(idx, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        end = idx + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[start..end];
                if literal.matches('.').count() > 1 || literal == "." {
                    return Err(CalcError::MalformedNumber(literal.to_string()));
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::MalformedNumber(literal.to_string()))?;
                Token::Number(value)
            }
            other => return Err(CalcError::UnexpectedChar(other)),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus {
                value + rhs
            } else {
                value - rhs
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            value = if op == Token::Star {
                value * rhs
            } else {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                value / rhs
            };
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(CalcError::TooDeep);
        }
        let result = match self.next() {
            None => Err(CalcError::UnexpectedEnd),
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Plus) => self.factor(),
            Some(Token::Minus) => self.factor().map(|value| -value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    Some(_) => Err(CalcError::UnexpectedToken(self.pos - 1)),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some(_) => Err(CalcError::UnexpectedToken(self.pos - 1)),
        };
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn evaluates_with_standard_precedence() {
        let cases = [
            ("12+5", "17"),
            ("2 + 3 * 4", "14"),
            ("(2 + 3) * 4", "20"),
            ("10 / 4", "2.5"),
            ("-3 - -2", "-1"),
            ("1.5 * 2", "3"),
            (".5 + 1.", "1.5"),
            ("0.1 + 0.2", "0.30000000000000004"),
            ("((7))", "7"),
        ];
        for (input, expected) in cases {
            assert_eq!(evaluate_to_display(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn invalid_inputs_render_invalid_calculation() {
        for input in ["", "   ", "1 +", "(1 + 2", "1 + 2)", "1..2", "4 / 0", "2 ** 3", "()", "."] {
            assert_eq!(
                evaluate_to_display(input),
                INVALID_CALCULATION,
                "input={input:?}"
            );
        }
    }

    #[test]
    fn errors_are_typed() {
        assert_eq!(evaluate("8/0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("2x"), Err(CalcError::UnexpectedChar('x')));
        assert_eq!(evaluate("1.2.3"), Err(CalcError::MalformedNumber("1.2.3".to_string())));
        assert_eq!(evaluate(&"(".repeat(100)), Err(CalcError::TooDeep));
    }

    #[test]
    fn arithmetic_query_detection() {
        assert!(is_arithmetic_query("12+5"));
        assert!(is_arithmetic_query(" (1 - 2) / 3 "));
        assert!(!is_arithmetic_query("notes"));
        assert!(!is_arithmetic_query("   "));
    }

    #[test]
    fn formats_like_javascript() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(123456789.0), "123456789");
        assert_eq!(format_number(1e-6), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-8), "1.5e-8");
    }
}
