/// Grammar Parsers
///
/// The primary interface for this module is `parse`, which turns source text
/// into a list of statements. Internally, it dispatches out to individual
/// parsers for specific grammar tokens, with operator precedence resolved by
/// a pratt parser.
///
use std::sync::OnceLock;

use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::PrattParser;
use pest::Parser;

use super::ast::*;
use super::Style;
use crate::error::{Error, Result};
use crate::internal_err;

#[derive(Parser, Clone, Copy)]
#[grammar = "lang/grammar.pest"]
pub struct LangParser;

fn pratt() -> &'static PrattParser<Rule> {
    static PRATT_PARSER: OnceLock<PrattParser<Rule>> = OnceLock::new();
    PRATT_PARSER.get_or_init(|| {
        use pest::pratt_parser::{Assoc::*, Op};
        use Rule::*;

        // Precedence is defined lowest to highest
        PrattParser::new()
            .op(Op::infix(add, Left) | Op::infix(subtract, Left))
            .op(Op::infix(multiply, Left) | Op::infix(divide, Left))
            .op(Op::prefix(negate))
            .op(Op::postfix(method_slice) | Op::postfix(index))
    })
}

/// Parse source text into statements
///
/// ```
/// use lazyvec::lang::{parse, Statement};
///
/// let stmts = parse("x <- 1 + 2\nx * 3").unwrap();
/// assert_eq!(stmts.len(), 2);
/// assert!(matches!(stmts[0], Statement::Assign(..)));
/// ```
///
pub fn parse(input: &str) -> Result<Vec<Statement>> {
    let mut pairs = LangParser::parse(Rule::program, input)
        .map_err(|e| Error::ParseFailure(Box::new(e)))?;

    let program = pairs.next().map_or(Err(internal_err!()), Ok)?;
    program
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(parse_statement)
        .collect()
}

/// Split source text into highlighted tokens
///
/// Never fails on incomplete input, so it can be used while typing.
///
pub fn parse_highlight(input: &str) -> Result<Vec<(String, Style)>> {
    let mut pairs = LangParser::parse(Rule::highlight, input)
        .map_err(|e| Error::ParseFailure(Box::new(e)))?;

    let tokens = pairs.next().map_or(Err(internal_err!()), Ok)?;
    Ok(tokens
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(|pair| (pair.as_str().to_string(), Style::from(pair.as_rule())))
        .collect())
}

/// Whether input needs more lines before it can be parsed
///
/// Input is incomplete while brackets remain open, or when it ends with an
/// operator still waiting for its right hand side.
///
pub fn is_incomplete(input: &str) -> bool {
    let Ok(tokens) = parse_highlight(input) else {
        return false;
    };

    let mut depth = 0_i64;
    let mut trailing = Style::None;
    for (text, style) in tokens.iter() {
        match (style, text.as_str()) {
            (Style::Brackets, "(" | "[") => depth += 1,
            (Style::Brackets, ")" | "]") => depth -= 1,
            _ => (),
        }

        if !matches!(style, Style::None | Style::Comment) {
            trailing = *style;
        }
    }

    depth > 0 || matches!(trailing, Style::Operators | Style::Assign)
}

fn parse_statement(pair: Pair<Rule>) -> Result<Statement> {
    match pair.as_rule() {
        Rule::assignment => {
            let mut inner = pair.into_inner();
            let name = inner.next().map_or(Err(internal_err!()), Ok)?;
            let value = inner.next().map_or(Err(internal_err!()), Ok)?;
            Ok(Statement::Assign(
                name.as_str().to_string(),
                parse_expr(value.into_inner())?,
            ))
        }
        Rule::expr => Ok(Statement::Expr(parse_expr(pair.into_inner())?)),
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

fn parse_expr(pairs: Pairs<Rule>) -> Result<Expr> {
    pratt()
        .map_primary(parse_primary)
        .map_prefix(|op, rhs| match op.as_rule() {
            Rule::negate => Ok(Expr::Neg(Box::new(rhs?))),
            rule => Err(Error::ParseUnexpected(rule)),
        })
        .map_postfix(|lhs, op| match op.as_rule() {
            Rule::method_slice => {
                let mut inner = op.into_inner();
                let start = inner.next().map_or(Err(internal_err!()), Ok)?;
                let length = inner.next().map_or(Err(internal_err!()), Ok)?;
                Ok(Expr::Slice {
                    source: Box::new(lhs?),
                    start: Box::new(parse_expr(start.into_inner())?),
                    length: Box::new(parse_expr(length.into_inner())?),
                })
            }
            Rule::index => {
                let index = op.into_inner().next().map_or(Err(internal_err!()), Ok)?;
                Ok(Expr::Index(Box::new(lhs?), Box::new(parse_expr(index.into_inner())?)))
            }
            rule => Err(Error::ParseUnexpected(rule)),
        })
        .map_infix(|lhs, op, rhs| {
            let op = match op.as_rule() {
                Rule::add => InfixOp::Add,
                Rule::subtract => InfixOp::Sub,
                Rule::multiply => InfixOp::Mul,
                Rule::divide => InfixOp::Div,
                rule => return Err(Error::ParseUnexpected(rule)),
            };

            Ok(Expr::Infix(op, Box::new(lhs?), Box::new(rhs?)))
        })
        .parse(pairs)
}

fn parse_primary(pair: Pair<Rule>) -> Result<Expr> {
    match pair.as_rule() {
        // bracketed expression
        Rule::expr => parse_expr(pair.into_inner()),

        // atomic values
        Rule::number => Ok(Expr::Number(
            pair.as_str()
                .parse::<f64>()
                .map_or(Err(internal_err!(pair.as_str())), Ok)?,
        )),

        // calls and symbols
        Rule::call => parse_call(pair),
        Rule::ident => Ok(Expr::Symbol(pair.as_str().to_string())),

        // otherwise fail
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

fn parse_call(pair: Pair<Rule>) -> Result<Expr> {
    let mut inner = pair.into_inner();
    let name = inner.next().map_or(Err(internal_err!()), Ok)?;
    let args = inner.next().map_or(Err(internal_err!()), Ok)?;

    let args = args
        .into_inner()
        .map(parse_arg)
        .collect::<Result<Vec<_>>>()?;

    Ok(Expr::Call(name.as_str().to_string(), args))
}

fn parse_arg(pair: Pair<Rule>) -> Result<Arg> {
    let mut inner = pair.into_inner();
    let first = inner.next().map_or(Err(internal_err!()), Ok)?;

    match first.as_rule() {
        Rule::ident => {
            let value = inner.next().map_or(Err(internal_err!()), Ok)?;
            Ok(Arg::named(first.as_str(), parse_expr(value.into_inner())?))
        }
        Rule::expr => Ok(Arg::positional(parse_expr(first.into_inner())?)),
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_one(input: &str) -> Statement {
        let mut stmts = parse(input).unwrap();
        assert_eq!(stmts.len(), 1);
        stmts.remove(0)
    }

    #[test]
    fn precedence() {
        let stmt = parse_one("-3*(v1+2*v2).slice(0,2)/2");
        assert_eq!(stmt.to_string(), "-3 * (v1 + 2 * v2).slice(0, 2) / 2");

        let Statement::Expr(Expr::Infix(InfixOp::Div, lhs, _)) = stmt else {
            panic!("expected division at the root");
        };
        assert!(matches!(*lhs, Expr::Infix(InfixOp::Mul, ..)));
    }

    #[test]
    fn left_associative() {
        let stmt = parse_one("a - b - c");
        let Statement::Expr(Expr::Infix(InfixOp::Sub, lhs, rhs)) = stmt else {
            panic!("expected subtraction at the root");
        };
        assert!(matches!(*lhs, Expr::Infix(InfixOp::Sub, ..)));
        assert_eq!(*rhs, Expr::Symbol("c".to_string()));
    }

    #[test]
    fn negation_binds_looser_than_postfix() {
        let stmt = parse_one("-v[1]");
        let Statement::Expr(Expr::Neg(inner)) = stmt else {
            panic!("expected negation at the root");
        };
        assert!(matches!(*inner, Expr::Index(..)));
    }

    #[test]
    fn assignments() {
        assert_eq!(parse_one("x <- 1").to_string(), "x <- 1");
        assert_eq!(parse_one("x = 2.5e1").to_string(), "x <- 25");
        assert!(matches!(parse_one("x"), Statement::Expr(Expr::Symbol(_))));
    }

    #[test]
    fn calls_with_named_args() {
        let stmt = parse_one("rnorm(3, sd = 2)");
        let Statement::Expr(Expr::Call(name, args)) = stmt else {
            panic!("expected a call");
        };
        assert_eq!(name, "rnorm");
        assert_eq!(args[0], Arg::positional(Expr::Number(3.)));
        assert_eq!(args[1], Arg::named("sd", Expr::Number(2.)));

        assert_eq!(parse_one("c()").to_string(), "c()");
    }

    #[test]
    fn programs() {
        let stmts = parse("# setup\nv1 <- c(1, 2, 3); v2 <- c(6, 3, 1)\n\nv1 + v2 # sum\n").unwrap();
        assert_eq!(stmts.len(), 3);
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn multiline_inside_brackets() {
        let stmt = parse_one("c(1,\n  2,\n  3) +\n  v");
        assert_eq!(stmt.to_string(), "c(1, 2, 3) + v");
    }

    #[test]
    fn parse_failures() {
        assert!(matches!(parse("1 +"), Err(Error::ParseFailure(_))));
        assert!(matches!(parse("(1"), Err(Error::ParseFailure(_))));
        assert!(matches!(parse("x <- "), Err(Error::ParseFailure(_))));
    }

    #[test]
    fn highlighting() {
        let tokens = parse_highlight("x <- f(1) # note").unwrap();
        let styles: Vec<_> = tokens.iter().map(|(_, s)| *s).collect();
        assert_eq!(
            styles,
            vec![
                Style::Symbol,
                Style::None,
                Style::Assign,
                Style::None,
                Style::Call,
                Style::Brackets,
                Style::Number,
                Style::Brackets,
                Style::None,
                Style::Comment,
            ]
        );

        // incomplete input still highlights
        let tokens = parse_highlight("v.slice(0,").unwrap();
        assert_eq!(tokens[1], (".slice".to_string(), Style::Call));
    }

    #[test]
    fn incomplete_input() {
        assert!(is_incomplete("c(1,"));
        assert!(is_incomplete("v[c(1"));
        assert!(is_incomplete("1 +"));
        assert!(is_incomplete("x <- # value follows"));

        assert!(!is_incomplete("c(1)"));
        assert!(!is_incomplete("x <- 1 # ("));
        assert!(!is_incomplete("1)"));
        assert!(!is_incomplete(""));
    }
}
