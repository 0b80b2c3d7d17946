use std::mem;
use std::ops::{Add, AddAssign};
use itertools::{EitherOrBoth, Itertools};
use num_traits::Zero;
use auto_impl_ops::auto_ops;

use crate::util::hook::{notify, Op};
use super::{Poly, Mono};

impl Poly {
    // Sums up an unordered collection of terms.
    pub fn from_monos<I>(monos: I) -> Self
    where I: IntoIterator<Item = Mono> {
        notify(Op::AddMonos);

        let mut monos = monos.into_iter().collect_vec();
        monos.sort_by(|m1, m2| m2.exp.cmp(&m1.exp)); // stable, descending

        let terms = monos.into_iter().coalesce(|mut m1, m2|
            if m1.exp == m2.exp {
                m1.coeff += m2.coeff;
                Ok(m1)
            } else {
                Err((m1, m2))
            }
        ).filter(|m|
            !m.coeff.is_zero()
        ).collect();

        Self::from_sorted(terms)
    }

    fn add_into(self, rhs: &Poly) -> Poly {
        notify(Op::Add);

        match (self, rhs) {
            (lhs, rhs) if rhs.is_zero() => {
                if lhs.is_zero() { Poly::Zero } else { lhs }
            },
            (lhs, rhs) if lhs.is_zero() => rhs.clone(),
            (Poly::Const(a), Poly::Const(b)) => Poly::reduced_const(a.wrapping_add(*b)),
            (lhs, rhs) => {
                let lifted;
                let rhs_terms = match rhs {
                    Poly::Const(c) => {
                        lifted = [Mono::new(Poly::Const(*c), 0)];
                        &lifted[..]
                    },
                    _ => rhs.terms()
                };
                let terms = merge_terms(lhs.into_terms(), rhs_terms);
                Poly::from_sorted(terms)
            }
        }
    }
}

// Merges two descending term lists. Terms of `lhs` are moved, those of
// `rhs` are cloned.
fn merge_terms(lhs: Vec<Mono>, rhs: &[Mono]) -> Vec<Mono> {
    lhs.into_iter()
        .merge_join_by(rhs.iter(), |m1, m2| m2.exp.cmp(&m1.exp))
        .filter_map(|e| match e {
            EitherOrBoth::Left(m1) => Some(m1),
            EitherOrBoth::Right(m2) => Some(m2.clone()),
            EitherOrBoth::Both(mut m1, m2) => {
                m1.coeff += &m2.coeff;
                if m1.coeff.is_zero() { None } else { Some(m1) }
            }
        })
        .collect()
}

#[auto_ops]
impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        let lhs = mem::take(self);
        *self = lhs.add_into(rhs);
    }
}
