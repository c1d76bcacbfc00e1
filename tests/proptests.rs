//! Property-based tests.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;
use textbook_rsa::arithmetic::{euclidean_div, extended_gcd, gcd, mod_exp, mod_inverse};
use textbook_rsa::crt::ModulusSystem;
use textbook_rsa::rsa;

proptest! {
    #[test]
    fn euclidean_div_invariant(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let (big_a, big_b) = (BigInt::from(a), BigInt::from(b));

        let (q, r) = euclidean_div(&big_a, &big_b).unwrap();
        prop_assert_eq!(&big_b * &q + &r, big_a);
        prop_assert!(!r.is_negative());
        prop_assert!(r < big_b.abs());
    }

    #[test]
    fn gcd_divides_both_and_is_symmetric(a in 1i64..=i64::MAX, b in 1i64..=i64::MAX) {
        let (big_a, big_b) = (BigInt::from(a), BigInt::from(b));

        let g = gcd(&big_a, &big_b).unwrap();
        prop_assert_eq!(&g, &gcd(&big_b, &big_a).unwrap());
        prop_assert!(euclidean_div(&big_a, &g).unwrap().1.is_zero());
        prop_assert!(euclidean_div(&big_b, &g).unwrap().1.is_zero());

        // gcd(a,b) = 1 exactly when the extended form says so.
        let (ext_g, _, _) = extended_gcd(&big_a, &big_b);
        prop_assert_eq!(g.is_one(), ext_g.is_one());
    }

    #[test]
    fn bezout_identity(a in any::<i64>(), b in any::<i64>()) {
        let (big_a, big_b) = (BigInt::from(a), BigInt::from(b));

        let (g, u, v) = extended_gcd(&big_a, &big_b);
        prop_assert!(!g.is_negative());
        prop_assert_eq!(u * big_a + v * big_b, g);
    }

    #[test]
    fn mod_inverse_property(a in 1u64..=u64::MAX, n in 2u64..=u64::MAX) {
        let (big_a, big_n) = (BigInt::from(a), BigInt::from(n));
        prop_assume!(extended_gcd(&big_a, &big_n).0.is_one());

        let inv = mod_inverse(&big_a, &big_n).unwrap();
        prop_assert!(!inv.is_negative());
        prop_assert!(inv < big_n);
        prop_assert!((inv * big_a % big_n).is_one());
    }

    #[test]
    fn mod_exp_additivity(a in any::<u32>(), e1 in 0u32..2048, e2 in 0u32..2048, n in 1u64..=u64::MAX) {
        let (big_a, big_n) = (BigInt::from(a), BigInt::from(n));

        let lhs = mod_exp(&big_a, &BigInt::from(e1 + e2), &big_n).unwrap();
        let rhs = mod_exp(&big_a, &BigInt::from(e1), &big_n).unwrap()
            * mod_exp(&big_a, &BigInt::from(e2), &big_n).unwrap()
            % &big_n;
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn crt_reconstruction(m1 in 2u32..=u32::MAX, m2 in 2u32..=u32::MAX, r1 in any::<i64>(), r2 in any::<i64>()) {
        let moduli = vec![BigInt::from(m1), BigInt::from(m2)];
        prop_assume!(gcd(&moduli[0], &moduli[1]).unwrap().is_one());
        let remainders = vec![BigInt::from(r1), BigInt::from(r2)];

        let x = ModulusSystem::new(moduli.clone(), remainders.clone())
            .unwrap()
            .solve()
            .unwrap();

        prop_assert!(!x.is_negative());
        prop_assert!(x < &moduli[0] * &moduli[1]);
        for (m, r) in moduli.iter().zip(&remainders) {
            prop_assert_eq!(
                euclidean_div(&x, m).unwrap().1,
                euclidean_div(r, m).unwrap().1
            );
        }
    }

    #[test]
    fn rsa_round_trip_textbook_key(m in 0i64..3233) {
        let (p, q) = (BigInt::from(61), BigInt::from(53));
        let (n, e, d) = (BigInt::from(3233), BigInt::from(17), BigInt::from(2753));

        let m = BigInt::from(m);
        let c = rsa::encrypt(&m, &e, &n).unwrap();
        prop_assert_eq!(&rsa::decrypt(&c, &n, &d).unwrap(), &m);
        prop_assert_eq!(&rsa::decrypt_derived(&c, &n, &e, &p, &q).unwrap(), &m);
    }

    #[test]
    fn rsa_round_trip_larger_key(m in any::<u32>()) {
        // p, q prime; d derived from e = 65537.
        let (p, q) = (BigInt::from(104_729u32), BigInt::from(104_723u32));
        let n = &p * &q;
        let e = BigInt::from(65_537u32);
        let phi = (&p - 1u32) * (&q - 1u32);
        let d = mod_inverse(&e, &phi).unwrap();
        let dp = euclidean_div(&d, &(&p - 1u32)).unwrap().1;
        let dq = euclidean_div(&d, &(&q - 1u32)).unwrap().1;

        let m = euclidean_div(&BigInt::from(m), &n).unwrap().1;
        let c = rsa::encrypt(&m, &e, &n).unwrap();
        prop_assert_eq!(&rsa::decrypt(&c, &n, &d).unwrap(), &m);
        prop_assert_eq!(
            &rsa::decrypt_crt(&c, &p, &q, &dp, &dq, None, Some(&n)).unwrap(),
            &m
        );
    }
}
