use rand::distributions::{Distribution, Uniform};
use rand_distr::Normal;

use super::ast::{Arg, Expr};
use super::session::{Session, Value};
use crate::error::{Error, Result};
use crate::vector::{Vector, VectorLike};

type Formals = &'static [(&'static str, Option<f64>)];

/// Builtin functions, looked up by name
#[derive(Debug, Copy, Clone, PartialEq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Builtin {
    C,
    Length,
    Runif,
    Rnorm,
}

impl Builtin {
    /// Named parameters and their defaults
    ///
    /// `c` accepts any number of unnamed arguments and has no formals.
    ///
    pub fn formals(&self) -> Formals {
        use Builtin::*;
        match self {
            C => &[],
            Length => &[("x", None)],
            Runif => &[("n", None), ("min", Some(0.)), ("max", Some(1.))],
            Rnorm => &[("n", None), ("mean", Some(0.)), ("sd", Some(1.))],
        }
    }

    pub fn call<'a>(&self, session: &'a Session, args: &[Arg]) -> Result<Value<'a>> {
        match self {
            Builtin::C => concatenate(session, args),
            Builtin::Length => {
                let args = Matched::new(self.formals(), args)?;
                let size = match session.eval(args.expr(0)?)? {
                    Value::Scalar(_) => 1,
                    Value::Vector(v) => v.size(),
                };
                Ok(Value::Scalar(size as f64))
            }
            Builtin::Runif => {
                let args = Matched::new(self.formals(), args)?;
                let n = args.count(session, 0)?;
                let min = args.scalar(session, 1)?;
                let max = args.scalar(session, 2)?;

                // the sampler also needs a finite width
                if !(min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite()) {
                    return Err(Error::ArgumentInvalid(String::from("max")));
                }

                let between = Uniform::new_inclusive(min, max);
                let data = session.with_rng(|rng| between.sample_iter(rng).take(n).collect());
                Ok(Value::owned(data))
            }
            Builtin::Rnorm => {
                let args = Matched::new(self.formals(), args)?;
                let n = args.count(session, 0)?;
                let mean = args.scalar(session, 1)?;
                let sd = args.scalar(session, 2)?;

                if !mean.is_finite() {
                    return Err(Error::ArgumentInvalid(String::from("mean")));
                }
                if !(sd.is_finite() && sd >= 0.) {
                    return Err(Error::ArgumentInvalid(String::from("sd")));
                }

                let normal =
                    Normal::new(mean, sd).map_err(|_| Error::ArgumentInvalid(String::from("sd")))?;
                let data = session.with_rng(|rng| normal.sample_iter(rng).take(n).collect());
                Ok(Value::owned(data))
            }
        }
    }
}

fn concatenate<'a>(session: &'a Session, args: &[Arg]) -> Result<Value<'a>> {
    let mut data = Vec::new();
    for arg in args {
        match session.eval(&arg.value)? {
            Value::Scalar(x) => data.push(x),
            Value::Vector(v) => data.extend(v.elements()),
        }
    }
    Ok(Value::owned(Vector::from(data)))
}

/// Call arguments matched against formals
///
/// Named arguments are matched first, then unnamed arguments fill the
/// remaining parameters in order.
///
struct Matched<'e> {
    formals: Formals,
    values: Vec<Option<&'e Expr>>,
}

impl<'e> Matched<'e> {
    fn new(formals: Formals, args: &'e [Arg]) -> Result<Self> {
        let mut values: Vec<Option<&Expr>> = vec![None; formals.len()];

        for arg in args {
            let Some(name) = &arg.name else { continue };
            let i = formals
                .iter()
                .position(|(formal, _)| formal == name)
                .ok_or_else(|| Error::ArgumentInvalid(name.clone()))?;

            if values[i].is_some() {
                return Err(Error::ArgumentInvalid(name.clone()));
            }
            values[i] = Some(&arg.value);
        }

        let free: Vec<usize> = (0..formals.len()).filter(|&i| values[i].is_none()).collect();
        let mut free = free.into_iter();
        for arg in args.iter().filter(|arg| arg.name.is_none()) {
            // more unnamed arguments than free parameters
            let i = free
                .next()
                .ok_or_else(|| Error::ArgumentInvalid(arg.value.to_string()))?;
            values[i] = Some(&arg.value);
        }

        Ok(Matched { formals, values })
    }

    fn expr(&self, i: usize) -> Result<&'e Expr> {
        self.values[i].ok_or_else(|| Error::ArgumentMissing(self.formals[i].0.to_string()))
    }

    fn scalar(&self, session: &Session, i: usize) -> Result<f64> {
        let (name, default) = self.formals[i];
        match self.values[i] {
            Some(expr) => match session.eval(expr)? {
                Value::Scalar(x) => Ok(x),
                Value::Vector(_) => Err(Error::ArgumentInvalid(name.to_string())),
            },
            None => default.ok_or_else(|| Error::ArgumentMissing(name.to_string())),
        }
    }

    fn count(&self, session: &Session, i: usize) -> Result<usize> {
        session.eval_count(self.expr(i)?, self.formals[i].0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lang::Materialized;

    fn vector_result(s: &mut Session, input: &str) -> Vector<f64> {
        match s.run(input) {
            Ok(Some(Materialized::Vector(v))) => v,
            other => panic!("expected a vector from '{input}', found {other:?}"),
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!("c".parse::<Builtin>(), Ok(Builtin::C));
        assert_eq!("rnorm".parse::<Builtin>(), Ok(Builtin::Rnorm));
        assert!("slice".parse::<Builtin>().is_err());
        assert_eq!(Builtin::Runif.to_string(), "runif");
    }

    #[test]
    fn concatenation() {
        let mut s = Session::default();
        s.run("x <- c(1, 2)").unwrap();
        assert_eq!(
            vector_result(&mut s, "c(x, 3, -x, c())"),
            crate::vector![1., 2., 3., -1., -2.]
        );
        assert_eq!(vector_result(&mut s, "c()").len(), 0);
    }

    #[test]
    fn runif_respects_bounds() {
        let mut s = Session::new(Some(1));
        let v = vector_result(&mut s, "runif(100, max = 3, min = 2)");
        assert_eq!(v.len(), 100);
        assert!(v.iter().all(|&x| (2. ..=3.).contains(&x)));

        let v = vector_result(&mut s, "runif(3, 5, 5)");
        assert_eq!(v, crate::vector![5., 5., 5.]);
    }

    #[test]
    fn runif_rejects_unbounded_width() {
        let mut s = Session::new(Some(1));
        assert_eq!(
            s.run("runif(1, -1e308, 1e308)"),
            Err(Error::ArgumentInvalid("max".into()))
        );
        assert_eq!(s.run("runif(1, 0, 1e309)"), Err(Error::ArgumentInvalid("max".into())));

        // wide but representable ranges still sample
        let v = vector_result(&mut s, "runif(4, -1e307, 1e307)");
        assert!(v.iter().all(|&x| (-1e307..=1e307).contains(&x)));
    }

    #[test]
    fn rnorm_rejects_bad_parameters() {
        let mut s = Session::new(Some(1));
        assert_eq!(s.run("rnorm(2, sd = -1)"), Err(Error::ArgumentInvalid("sd".into())));
        assert_eq!(s.run("rnorm(2, sd = 1e309)"), Err(Error::ArgumentInvalid("sd".into())));
        assert_eq!(s.run("rnorm(2, mean = -1e309)"), Err(Error::ArgumentInvalid("mean".into())));

        // a zero standard deviation is a constant
        assert_eq!(vector_result(&mut s, "rnorm(2, 3, 0)"), crate::vector![3., 3.]);
    }

    #[test]
    fn seeded_sessions_agree() {
        let mut a = Session::new(Some(7));
        let mut b = Session::new(Some(7));
        assert_eq!(
            vector_result(&mut a, "rnorm(5, mean = 10)"),
            vector_result(&mut b, "rnorm(5, mean = 10)")
        );
        assert_ne!(vector_result(&mut a, "runif(5)"), vector_result(&mut a, "runif(5)"));
    }

    #[test]
    fn argument_matching() {
        let mut s = Session::default();
        assert_eq!(s.run("runif()"), Err(Error::ArgumentMissing("n".into())));
        assert_eq!(s.run("runif(2, 5, 1)"), Err(Error::ArgumentInvalid("max".into())));
        assert_eq!(s.run("runif(1.5)"), Err(Error::ArgumentInvalid("n".into())));
        assert_eq!(s.run("runif(1, 0, 1, 2)"), Err(Error::ArgumentInvalid("2".into())));
        // named arguments take their slot before positional ones fill the rest
        assert_eq!(vector_result(&mut s, "runif(1, n = 2)"), crate::vector![1., 1.]);
        assert_eq!(s.run("rnorm(2, sd = -1)"), Err(Error::ArgumentInvalid("sd".into())));
        assert_eq!(s.run("rnorm(2, size = 1)"), Err(Error::ArgumentInvalid("size".into())));
        assert_eq!(s.run("rnorm(n = 1, n = 2)"), Err(Error::ArgumentInvalid("n".into())));
        assert_eq!(s.run("length()"), Err(Error::ArgumentMissing("x".into())));
    }
}
