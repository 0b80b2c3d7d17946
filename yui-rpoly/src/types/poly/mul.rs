use std::mem;
use std::ops::{Mul, MulAssign, Neg, Sub, SubAssign};
use itertools::iproduct;
use num_traits::{Zero, One, Pow};
use auto_impl_ops::auto_ops;

use crate::util::hook::{notify, Op};
use super::{Poly, Mono, Coeff};

impl Poly {
    // Multiplies every constant leaf by `c`, dropping terms that vanish.
    pub(crate) fn scale_assign(&mut self, c: Coeff) {
        if c == 0 {
            self.set_zero();
            return
        } else if c == 1 {
            return
        }

        match self {
            Poly::Zero => {},
            Poly::Const(a) => {
                let a = a.wrapping_mul(c);
                *self = Poly::reduced_const(a);
            },
            Poly::Sum(terms) => {
                for m in terms.0.iter_mut() {
                    m.coeff.scale_assign(c);
                }
                terms.0.retain(|m| !m.coeff.is_zero());

                let terms = mem::take(&mut terms.0);
                *self = Poly::from_sorted(terms);
            }
        }
    }

    fn negate(&mut self) {
        notify(Op::Neg);

        match self {
            Poly::Zero => {},
            Poly::Const(a) => {
                let a = a.wrapping_neg();
                *self = Poly::reduced_const(a);
            },
            Poly::Sum(terms) => {
                for m in terms.0.iter_mut() {
                    m.coeff.negate()
                }
            }
        }
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b Poly> for &'a Poly {
    type Output = Poly;

    fn mul(self, rhs: &'b Poly) -> Poly {
        notify(Op::Mul);

        if self.is_zero() || rhs.is_zero() {
            return Poly::Zero
        }

        match (self, rhs) {
            (Poly::Const(a), Poly::Const(b)) => {
                Poly::reduced_const(a.wrapping_mul(*b))
            },
            (Poly::Const(a), f) | (f, Poly::Const(a)) => {
                let mut res = f.clone();
                res.scale_assign(*a);
                res
            },
            (Poly::Sum(ts1), Poly::Sum(ts2)) => {
                let prods = iproduct!(ts1.iter(), ts2.iter()).map(|(m1, m2)|
                    Mono::new(&m1.coeff * &m2.coeff, m1.exp + m2.exp)
                );
                Poly::from_monos(prods)
            },
            (Poly::Zero, _) | (_, Poly::Zero) => Poly::Zero
        }
    }
}

impl Neg for Poly {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[auto_ops]
impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, rhs: &Poly) {
        notify(Op::Sub);
        *self += -rhs
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl Pow<$t> for &Poly {
            type Output = Poly;
            fn pow(self, n: $t) -> Self::Output {
                notify(Op::Pow);

                let mut res = Poly::one();
                for _ in 0..n {
                    res *= self
                }
                res
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(u64);
impl_pow_unsigned!(usize);
