use proptest::prelude::*;
use num_traits::{Zero, One};

use crate::{Poly, Mono};

fn small_coeff() -> impl Strategy<Value = i64> {
    -5i64..=5
}

fn small_const() -> impl Strategy<Value = Poly> {
    small_coeff().prop_map(|a| Poly::from_monos([Mono::new(Poly::from_coeff(a), 0)]))
}

// Random polynomials nested up to three variables deep.
fn small_poly() -> impl Strategy<Value = Poly> {
    small_const().prop_recursive(2, 24, 4, |inner| {
        proptest::collection::vec((inner, 0usize..4), 0..4).prop_map(|terms|
            terms.into_iter().map(|(c, e)| Mono::new(c, e)).collect::<Poly>()
        )
    })
}

fn nonzero_poly() -> impl Strategy<Value = Poly> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

proptest! {
    #[test]
    fn generated_is_canonical(a in small_poly()) {
        prop_assert!(a.is_canonical());
    }

    #[test]
    fn add_identity(a in small_poly()) {
        let z = Poly::zero();
        prop_assert_eq!(&a + &z, a.clone());
        prop_assert_eq!(&z + &a, a);
    }

    #[test]
    fn mul_zero(a in small_poly()) {
        let z = Poly::zero();
        prop_assert!(matches!(&a * &z, Poly::Zero));
        prop_assert!(matches!(&z * &a, Poly::Zero));
    }

    #[test]
    fn mul_identity(a in small_poly()) {
        let one = Poly::one();
        prop_assert_eq!(&a * &one, a.clone());
        prop_assert_eq!(&one * &a, a);
    }

    #[test]
    fn add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        let left = &a * &(&b + &c);
        let right = &(&a * &b) + &(&a * &c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn additive_inverse(a in small_poly()) {
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert!(matches!(&a - &a, Poly::Zero));
    }

    #[test]
    fn sub_then_add(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(&(&a - &b) + &b, a);
    }

    #[test]
    fn closure(a in small_poly(), b in small_poly(), x in small_coeff()) {
        prop_assert!((&a + &b).is_canonical());
        prop_assert!((&a - &b).is_canonical());
        prop_assert!((&a * &b).is_canonical());
        prop_assert!((-&a).is_canonical());
        prop_assert!(a.eval_at(x).is_canonical());
    }

    #[test]
    fn clone_round_trip(a in small_poly()) {
        let b = a.clone();
        prop_assert!(a.is_eq(&b));
        drop(b);
        prop_assert!(a.is_canonical());
    }

    #[test]
    fn from_monos_order_free(terms in proptest::collection::vec((small_poly(), 0usize..4), 0..5)) {
        let monos = terms.into_iter().map(|(c, e)| Mono::new(c, e)).collect::<Vec<_>>();
        let rev = monos.iter().rev().cloned().collect::<Vec<_>>();
        prop_assert_eq!(Poly::from_monos(monos), Poly::from_monos(rev));
    }

    #[test]
    fn mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
        let p = &a * &b;
        prop_assert_eq!(p.deg(), a.deg() + b.deg());
        for i in 0..3 {
            prop_assert_eq!(p.deg_by(i), a.deg_by(i) + b.deg_by(i));
        }
    }

    #[test]
    fn add_degree_bound(a in small_poly(), b in small_poly()) {
        prop_assert!((&a + &b).deg() <= a.deg().max(b.deg()));
    }

    #[test]
    fn eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
        let s = &a + &b;
        prop_assert_eq!(s.eval_at(x), &a.eval_at(x) + &b.eval_at(x));
    }

    #[test]
    fn eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
        let p = &a * &b;
        prop_assert_eq!(p.eval_at(x), &a.eval_at(x) * &b.eval_at(x));
    }
}
