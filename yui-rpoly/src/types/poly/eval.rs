use num_traits::Zero;

use crate::util::hook::{notify, Op};
use super::{Poly, Coeff, Exp};

impl Poly {
    // Substitutes x₀ = x. The remaining variables shift down by one,
    // i.e. p(x₀, x₁, ...) ↦ p(x, x₀, x₁, ...).
    pub fn eval_at(&self, x: Coeff) -> Poly {
        notify(Op::Eval);

        if self.is_zero() {
            return Poly::Zero
        }

        let Poly::Sum(terms) = self else {
            return self.clone()
        };

        // Horner: c₀ x^(e₀ - e₁) + c₁ ...
        let mut res = Poly::Zero;
        let mut prev = terms.first().map_or(0, |m| m.exp);

        for m in terms {
            res.scale_assign(pow(x, prev - m.exp));
            res += &m.coeff;
            prev = m.exp;
        }

        res.scale_assign(pow(x, prev));
        res
    }
}

fn pow(x: Coeff, mut n: Exp) -> Coeff {
    let mut base = x;
    let mut res: Coeff = 1;

    while n > 0 {
        if n & 1 == 1 {
            res = res.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        n >>= 1;
    }

    res
}
