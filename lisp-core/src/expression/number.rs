use std::{cmp::Ordering, fmt::Display};

use num::{BigInt, BigRational, One, ToPrimitive, Zero};

/// A numeric atom.
///
/// Integer and rational literals are exact and stay exact under `+ - * /`.
/// Floating literals are inexact, and any inexact operand makes the result
/// inexact. Comparison is by mathematical value across both representations,
/// so `1/2`, `2/4` and `0.5` are all equal.
#[derive(Debug, Clone)]
pub enum Number {
    Exact(BigRational),
    Inexact(f64),
}

impl Number {
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::Exact(BigRational::from_integer(value.into()))
    }

    /// `None` when `denom` is zero.
    pub fn rational(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Option<Self> {
        let denom = denom.into();

        if denom.is_zero() {
            return None;
        }

        Some(Self::Exact(BigRational::new(numer.into(), denom)))
    }

    pub fn zero() -> Self {
        Self::Exact(BigRational::zero())
    }

    pub fn one() -> Self {
        Self::Exact(BigRational::one())
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Exact(value) => value.is_zero(),
            Self::Inexact(value) => *value == 0.0,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Exact(value) => ratio_to_f64(value),
            Self::Inexact(value) => *value,
        }
    }

    pub fn add(&self, other: &Number) -> Number {
        self.combine(other, |a, b| a + b, |a, b| a + b)
    }

    pub fn sub(&self, other: &Number) -> Number {
        self.combine(other, |a, b| a - b, |a, b| a - b)
    }

    pub fn mul(&self, other: &Number) -> Number {
        self.combine(other, |a, b| a * b, |a, b| a * b)
    }

    /// `None` on exact division by zero. Inexact division follows IEEE 754.
    pub fn div(&self, other: &Number) -> Option<Number> {
        if let (Self::Exact(_), Self::Exact(divisor)) = (self, other) {
            if divisor.is_zero() {
                return None;
            }
        }

        Some(self.combine(other, |a, b| a / b, |a, b| a / b))
    }

    pub fn neg(&self) -> Number {
        match self {
            Self::Exact(value) => Self::Exact(-value),
            Self::Inexact(value) => Self::Inexact(-value),
        }
    }

    fn combine(
        &self,
        other: &Number,
        exact: impl Fn(&BigRational, &BigRational) -> BigRational,
        inexact: impl Fn(f64, f64) -> f64,
    ) -> Number {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => Self::Exact(exact(a, b)),
            _ => Self::Inexact(inexact(self.to_f64(), other.to_f64())),
        }
    }

    /// `None` only when a NaN is involved.
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => Some(a.cmp(b)),
            (Self::Exact(a), Self::Inexact(b)) => match BigRational::from_float(*b) {
                Some(b) => Some(a.cmp(&b)),
                None => ratio_to_f64(a).partial_cmp(b),
            },
            (Self::Inexact(a), Self::Exact(b)) => match BigRational::from_float(*a) {
                Some(a) => Some(a.cmp(b)),
                None => a.partial_cmp(&ratio_to_f64(b)),
            },
            (Self::Inexact(a), Self::Inexact(b)) => a.partial_cmp(b),
        }
    }
}

/// Scales the quotient as a whole, so huge numerators and denominators do
/// not overflow separately.
fn ratio_to_f64(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::integer(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::integer(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Self::Exact(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Inexact(value)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(value) if value.is_integer() => write!(f, "{}", value.numer()),
            Self::Exact(value) => write!(f, "{}/{}", value.numer(), value.denom()),
            Self::Inexact(value) if value.is_nan() => write!(f, "+nan.0"),
            Self::Inexact(value) if value.is_infinite() => {
                write!(f, "{}inf.0", if value.is_sign_negative() { "-" } else { "+" })
            },
            Self::Inexact(value) => write!(f, "{value:?}"),
        }
    }
}
