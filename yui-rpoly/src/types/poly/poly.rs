use std::ops::Deref;
use itertools::Itertools;
use num_traits::Zero;

use super::Mono;

pub type Coeff = i64;
pub type Exp = usize;

// A polynomial in the variables x₀, x₁, ... in recursive form:
// either a constant, or a sum Σ cᵢ x₀^eᵢ where each cᵢ is a polynomial
// in x₁, x₂, ... (with indices shifted down by one).
//
// Every value produced by the arithmetic is canonical:
//  - a `Sum` is non-empty and holds no zero coefficient,
//  - its terms are strictly descending by exponent,
//  - `Sum[(0, Const(c))]` is collapsed to `Const(c)`,
//  - a zero scalar result is `Zero`, never `Const(0)`.
//
// `Terms` can only be built inside the crate, so every `Sum` a caller
// can observe went through `from_monos` or the arithmetic.

#[derive(Clone, Default, Debug)]
pub enum Poly {
    #[default]
    Zero,
    Const(Coeff),
    Sum(Terms)
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Terms(pub(crate) Vec<Mono>);

impl Deref for Terms {
    type Target = [Mono];
    fn deref(&self) -> &[Mono] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Terms {
    type Item = &'a Mono;
    type IntoIter = std::slice::Iter<'a, Mono>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

static ZERO: Poly = Poly::Zero;

impl Poly {
    pub fn from_coeff(c: Coeff) -> Self {
        Self::Const(c)
    }

    // x_i, nested i levels deep.
    pub fn variable(i: usize) -> Self {
        let inner = if i == 0 {
            Self::Const(1)
        } else {
            Self::variable(i - 1)
        };
        let e = if i == 0 { 1 } else { 0 };
        Self::Sum(Terms(vec![Mono::new(inner, e)]))
    }

    pub(crate) fn reduced_const(c: Coeff) -> Self {
        if c == 0 {
            Self::Zero
        } else {
            Self::Const(c)
        }
    }

    // `terms` must be strictly descending with non-zero coefficients.
    pub(crate) fn from_sorted(terms: Vec<Mono>) -> Self {
        debug_assert!(terms.iter().tuple_windows().all(|(m1, m2)| m1.exp > m2.exp));

        let single_const = match terms.as_slice() {
            [Mono { exp: 0, coeff: Poly::Const(c) }] => Some(*c),
            _ => None
        };

        if terms.is_empty() {
            Self::Zero
        } else if let Some(c) = single_const {
            Self::reduced_const(c)
        } else {
            Self::Sum(Terms(terms))
        }
    }

    // Constants are lifted to a single term at exponent 0.
    pub(crate) fn into_terms(self) -> Vec<Mono> {
        match self {
            Poly::Zero | Poly::Const(0) => vec![],
            Poly::Const(c) => vec![Mono::new(Poly::Const(c), 0)],
            Poly::Sum(terms) => terms.0
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Poly::Const(_))
    }

    pub fn const_value(&self) -> Option<Coeff> {
        match self {
            _ if self.is_zero() => Some(0),
            Poly::Const(c) => Some(*c),
            _ => None
        }
    }

    pub fn terms(&self) -> &[Mono] {
        match self {
            Poly::Sum(terms) => &terms[..],
            _ => &[]
        }
    }

    // Constants have no terms, matching `terms()`.
    pub fn nterms(&self) -> usize {
        self.terms().len()
    }

    pub fn lead_term(&self) -> Option<&Mono> {
        self.terms().first()
    }

    // The coefficient of x₀^e, a polynomial in the remaining variables.
    pub fn coeff_for(&self, e: Exp) -> &Poly {
        match self {
            Poly::Const(_) if e == 0 => self,
            Poly::Sum(terms) => terms
                .iter()
                .find(|m| m.exp == e)
                .map(|m| &m.coeff)
                .unwrap_or(&ZERO),
            _ => &ZERO
        }
    }

    pub fn is_canonical(&self) -> bool {
        let Poly::Sum(terms) = self else {
            return true
        };

        !terms.is_empty()
            && terms.iter().tuple_windows().all(|(m1, m2)| m1.exp > m2.exp)
            && terms.iter().all(|m| !m.coeff.is_zero() && m.coeff.is_canonical())
            && !matches!(&terms[..], [Mono { exp: 0, coeff: Poly::Const(_) }])
    }

    pub fn deg(&self) -> isize {
        match self {
            _ if self.is_zero() => -1,
            Poly::Sum(terms) => terms.first().map_or(-1, |m| m.exp as isize),
            _ => 0
        }
    }

    // Degree in x_i. A constant has degree 0 in every variable it does
    // not mention, hence `deg_by(c, i) = 0` for any i.
    pub fn deg_by(&self, i: usize) -> isize {
        if self.is_zero() {
            return -1
        }

        match self {
            _ if i == 0 => self.deg(),
            Poly::Sum(terms) => terms
                .iter()
                .map(|m| m.coeff.deg_by(i - 1))
                .max()
                .unwrap_or(-1),
            _ => 0
        }
    }

    pub fn is_eq(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero()
        }

        match (self, other) {
            (Poly::Const(a), Poly::Const(b)) => a == b,
            (Poly::Sum(ts1), Poly::Sum(ts2)) => {
                ts1.len() == ts2.len() &&
                ts1.iter().zip(ts2).all(|(m1, m2)|
                    m1.exp == m2.exp && m1.coeff.is_eq(&m2.coeff)
                )
            },
            _ => false
        }
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Poly::Zero
    }

    fn is_zero(&self) -> bool {
        match self {
            Poly::Zero => true,
            Poly::Const(c) => *c == 0,
            Poly::Sum(terms) => terms.is_empty()
        }
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.is_eq(other)
    }
}

impl Eq for Poly {}
