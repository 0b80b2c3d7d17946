use super::{Poly, Exp};

// `Mono` : a term `c x^e` of a `Poly::Sum`, where `c` is a polynomial
// in the next variable. Not canonical by itself.

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Mono {
    pub(crate) exp: Exp,
    pub(crate) coeff: Poly
}

impl Mono {
    pub fn new(coeff: Poly, exp: Exp) -> Self {
        Self { exp, coeff }
    }

    pub fn exp(&self) -> Exp {
        self.exp
    }

    pub fn coeff(&self) -> &Poly {
        &self.coeff
    }

    pub fn into_coeff(self) -> Poly {
        self.coeff
    }
}

impl From<(Poly, Exp)> for Mono {
    fn from(pair: (Poly, Exp)) -> Self {
        Self::new(pair.0, pair.1)
    }
}
