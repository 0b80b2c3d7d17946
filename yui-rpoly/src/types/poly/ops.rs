use std::iter::{Sum, Product};
use std::ops::{AddAssign, MulAssign};
use num_traits::{Zero, One};

use super::{Poly, Mono, Coeff};

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Self::from_coeff(c)
    }
}

impl From<Mono> for Poly {
    fn from(m: Mono) -> Self {
        Self::from_monos([m])
    }
}

impl FromIterator<Mono> for Poly {
    fn from_iter<T: IntoIterator<Item = Mono>>(iter: T) -> Self {
        Self::from_monos(iter)
    }
}

impl One for Poly {
    fn one() -> Self {
        Poly::Const(1)
    }

    fn is_one(&self) -> bool {
        matches!(self, Poly::Const(1))
    }
}

macro_rules! impl_accum {
    ($trait:ident, $method:ident, $accum_trait:ident, $accum_method:ident, $accum_init:ident) => {
        impl $trait for Poly {
            fn $method<Iter: Iterator<Item = Self>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| {
                    $accum_trait::$accum_method(&mut res, r);
                    res
                })
            }
        }

        impl<'a> $trait<&'a Poly> for Poly {
            fn $method<Iter: Iterator<Item = &'a Poly>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| {
                    $accum_trait::$accum_method(&mut res, r);
                    res
                })
            }
        }
    }
}

impl_accum!(Sum, sum, AddAssign, add_assign, zero);
impl_accum!(Product, product, MulAssign, mul_assign, one);
