use std::fmt::Display;

/// Binary arithmetic operators
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum InfixOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl InfixOp {
    /// Binding strength, higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            InfixOp::Add | InfixOp::Sub => 1,
            InfixOp::Mul | InfixOp::Div => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Symbol(String),
    Neg(Box<Expr>),
    Infix(InfixOp, Box<Expr>, Box<Expr>),
    Slice {
        source: Box<Expr>,
        start: Box<Expr>,
        length: Box<Expr>,
    },
    Index(Box<Expr>, Box<Expr>),
    Call(String, Vec<Arg>),
}

/// A call argument, optionally named
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub name: Option<String>,
    pub value: Expr,
}

impl Arg {
    pub fn positional(value: Expr) -> Self {
        Arg { name: None, value }
    }

    pub fn named(name: &str, value: Expr) -> Self {
        Arg {
            name: Some(name.to_string()),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(String, Expr),
    Expr(Expr),
}

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Infix(op, ..) => op.precedence(),
            Expr::Neg(_) => 3,
            _ => 4,
        }
    }

    fn fmt_operand(&self, f: &mut std::fmt::Formatter<'_>, min: u8) -> std::fmt::Result {
        if self.precedence() < min {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(x) => write!(f, "{}", x),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::Neg(x) => {
                write!(f, "-")?;
                x.fmt_operand(f, 3)
            }
            Expr::Infix(op, lhs, rhs) => {
                // operators are left associative, so equal precedence on the
                // right needs parentheses
                let prec = op.precedence();
                lhs.fmt_operand(f, prec)?;
                write!(f, " {} ", op)?;
                rhs.fmt_operand(f, prec + 1)
            }
            Expr::Slice {
                source,
                start,
                length,
            } => {
                source.fmt_operand(f, 4)?;
                write!(f, ".slice({}, {})", start, length)
            }
            Expr::Index(source, index) => {
                source.fmt_operand(f, 4)?;
                write!(f, "[{}]", index)
            }
            Expr::Call(name, args) => {
                let args = args
                    .iter()
                    .map(|arg| match &arg.name {
                        Some(name) => format!("{} = {}", name, arg.value),
                        None => format!("{}", arg.value),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({})", name, args)
            }
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Assign(name, value) => write!(f, "{} <- {}", name, value),
            Statement::Expr(value) => write!(f, "{}", value),
        }
    }
}
