use std::cell::RefCell;
use std::fmt::Display;
use std::str::FromStr;

use hashbrown::HashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use super::ast::{Expr, InfixOp, Statement};
use super::builtins::Builtin;
use super::parse;
use crate::error::{Error, Result};
use crate::vector::expr::{Neg, ScalarDiv, ScalarMul};
use crate::vector::{TryAdd, TrySub, Vector, VectorLike};

/// A value stored in an [Environment]
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized {
    Scalar(f64),
    Vector(Vector<f64>),
}

impl Display for Materialized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Materialized::Scalar(x) => write!(f, "{}", x),
            Materialized::Vector(v) => write!(f, "{}", v),
        }
    }
}

pub type Environment = HashMap<String, Materialized>;

/// The result of evaluating an expression
///
/// Vectors are unevaluated expression trees. They borrow the environment
/// they were built from, so the environment cannot change until the value
/// is materialized or dropped.
///
pub enum Value<'a> {
    Scalar(f64),
    Vector(Box<dyn VectorLike<Elem = f64> + 'a>),
}

impl<'a> Value<'a> {
    /// Wrap freshly computed storage, such as the result of a builtin
    pub fn owned(data: Vector<f64>) -> Self {
        Value::Vector(Box::new(Temporary(data)))
    }

    pub fn materialize(&self) -> Materialized {
        match self {
            Value::Scalar(x) => Materialized::Scalar(*x),
            Value::Vector(v) => Materialized::Vector(v.materialize()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Vector(_) => "vector",
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(x) => f.debug_tuple("Scalar").field(x).finish(),
            Value::Vector(v) => f.debug_struct("Vector").field("size", &v.size()).finish(),
        }
    }
}

// Storage owned by an expression tree rather than the environment
struct Temporary(Vector<f64>);

impl VectorLike for Temporary {
    type Elem = f64;

    fn size(&self) -> usize {
        self.0.len()
    }

    fn element_at(&self, index: usize) -> f64 {
        self.0[index]
    }
}

/// Evaluation session
///
/// Holds named, materialized values and the random number generator used by
/// the random builtins.
///
pub struct Session {
    env: Environment,
    rng: RefCell<StdRng>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(None)
    }
}

impl Session {
    /// Create an empty session
    ///
    /// A `seed` makes the random builtins reproducible.
    ///
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Session {
            env: Environment::new(),
            rng: RefCell::new(rng),
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn get(&self, name: &str) -> Option<&Materialized> {
        self.env.get(name)
    }

    pub fn assign(&mut self, name: &str, value: Materialized) {
        debug!(name, %value, "assigning");
        self.env.insert(name.to_string(), value);
    }

    pub(crate) fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        f(&mut self.rng.borrow_mut())
    }

    /// Parse and run source text
    ///
    /// Returns the value of the final statement, or `None` if it was an
    /// assignment (or there were no statements).
    ///
    /// ```
    /// use lazyvec::lang::{Materialized, Session};
    /// use lazyvec::vector;
    ///
    /// let mut session = Session::default();
    /// session.run("v1 <- c(1, 2, 3); v2 <- c(6, 3, 1)")?;
    ///
    /// let result = session.run("-3 * (v1 + 2 * v2).slice(0, 2) / 2")?;
    /// assert_eq!(result, Some(Materialized::Vector(vector![-19.5, -12.0])));
    /// # Ok::<(), lazyvec::error::Error>(())
    /// ```
    ///
    pub fn run(&mut self, input: &str) -> Result<Option<Materialized>> {
        let mut last = None;
        for stmt in parse(input)? {
            last = self.exec(&stmt)?;
        }
        Ok(last)
    }

    pub fn exec(&mut self, stmt: &Statement) -> Result<Option<Materialized>> {
        match stmt {
            Statement::Assign(name, expr) => {
                let value = self.eval(expr)?.materialize();
                self.assign(name, value);
                Ok(None)
            }
            Statement::Expr(expr) => Ok(Some(self.eval(expr)?.materialize())),
        }
    }

    /// Evaluate an expression into a lazy value
    pub fn eval(&self, expr: &Expr) -> Result<Value<'_>> {
        match expr {
            Expr::Number(x) => Ok(Value::Scalar(*x)),
            Expr::Symbol(name) => match self.env.get(name) {
                Some(Materialized::Scalar(x)) => Ok(Value::Scalar(*x)),
                Some(Materialized::Vector(v)) => Ok(Value::Vector(Box::new(v))),
                None => Err(Error::VariableNotFound(name.clone())),
            },
            Expr::Neg(x) => match self.eval(x)? {
                Value::Scalar(x) => Ok(Value::Scalar(-x)),
                Value::Vector(v) => Ok(Value::Vector(Box::new(Neg::new(v)))),
            },
            Expr::Infix(op, lhs, rhs) => infix(*op, self.eval(lhs)?, self.eval(rhs)?),
            Expr::Slice {
                source,
                start,
                length,
            } => {
                let start = self.eval_count(start, "start")?;
                let length = self.eval_count(length, "length")?;
                match self.eval(source)? {
                    Value::Vector(v) => Ok(Value::Vector(Box::new(v.slice(start, length)?))),
                    Value::Scalar(_) => Err(Error::NonConformable("cannot slice a scalar".into())),
                }
            }
            Expr::Index(source, index) => {
                let index = self.eval_count(index, "index")?;
                match self.eval(source)? {
                    Value::Vector(v) => Ok(Value::Scalar(v.get(index)?)),
                    Value::Scalar(_) => Err(Error::NonConformable("cannot index a scalar".into())),
                }
            }
            Expr::Call(name, args) => {
                let builtin =
                    Builtin::from_str(name).map_err(|_| Error::UnknownFunction(name.clone()))?;
                trace!(%builtin, nargs = args.len(), "calling builtin");
                builtin.call(self, args)
            }
        }
    }

    /// Evaluate an expression that must produce a non-negative whole number
    pub(crate) fn eval_count(&self, expr: &Expr, name: &str) -> Result<usize> {
        match self.eval(expr)? {
            Value::Scalar(x) if x >= 0. && x.fract() == 0. && x <= usize::MAX as f64 => {
                Ok(x as usize)
            }
            _ => Err(Error::ArgumentInvalid(name.to_string())),
        }
    }
}

fn infix<'a>(op: InfixOp, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>> {
    use InfixOp::*;

    match (op, lhs, rhs) {
        // scalars fold eagerly
        (op, Value::Scalar(l), Value::Scalar(r)) => Ok(Value::Scalar(match op {
            Add => l + r,
            Sub => l - r,
            Mul => l * r,
            Div => l / r,
        })),

        (Add, Value::Vector(l), Value::Vector(r)) => Ok(Value::Vector(Box::new(l.try_add(r)?))),
        (Sub, Value::Vector(l), Value::Vector(r)) => Ok(Value::Vector(Box::new(l.try_sub(r)?))),
        (Mul, Value::Scalar(s), Value::Vector(v)) | (Mul, Value::Vector(v), Value::Scalar(s)) => {
            Ok(Value::Vector(Box::new(ScalarMul::new(s, v))))
        }
        (Div, Value::Vector(v), Value::Scalar(s)) => {
            Ok(Value::Vector(Box::new(ScalarDiv::new(s, v))))
        }

        (op, lhs, rhs) => Err(Error::NonConformable(format!(
            "{} {} {}",
            lhs.kind(),
            op,
            rhs.kind()
        ))),
    }
}
