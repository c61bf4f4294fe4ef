//! Property based tests, checked against `num::BigInt` where an oracle is useful.

use num::BigInt;
use proptest::prelude::*;

use crate::BigInteger;

// canonical decimal text, up to 60 digits
fn canonical() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "-?[1-9][0-9]{0,59}"]
}

fn big() -> impl Strategy<Value = BigInteger> {
    canonical().prop_map(|s| BigInteger::new(&s).expect("strategy produced invalid text"))
}

fn oracle(a: &BigInteger) -> BigInt {
    a.to_string().parse().expect("display produced invalid text")
}

proptest! {
    #[test]
    fn roundtrip(s in canonical()) {
        let a = BigInteger::new(&s).unwrap();
        prop_assert_eq!(a.to_string(), s);
    }

    #[test]
    fn leading_zeros_are_dropped(zeros in 0usize..5, s in canonical()) {
        let padded = match s.strip_prefix('-') {
            Some(rest) => format!("-{}{rest}", "0".repeat(zeros)),
            None => format!("{}{s}", "0".repeat(zeros)),
        };
        let a = BigInteger::new(&padded).unwrap();
        prop_assert_eq!(a.to_string(), s);
    }

    #[test]
    fn add_commutative(a in big(), b in big()) {
        prop_assert_eq!(a.plus(&b), b.plus(&a));
    }

    #[test]
    fn add_associative(a in big(), b in big(), c in big()) {
        prop_assert_eq!(a.plus(&b).plus(&c), a.plus(&b.plus(&c)));
    }

    #[test]
    fn additive_inverse_is_canonical_zero(a in big()) {
        let z = a.plus(&a.negated());
        prop_assert!(z.is_zero());
        prop_assert!(!z.is_negative());
        prop_assert_eq!(z.digits().collect::<Vec<_>>(), vec![0]);
        prop_assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn sub_is_add_negated(a in big(), b in big()) {
        prop_assert_eq!(a.minus(&b), a.plus(&b.negated()));
    }

    #[test]
    fn mul_distributes(a in big(), b in big(), c in big()) {
        prop_assert_eq!(a.times(&b.plus(&c)), a.times(&b).plus(&a.times(&c)));
    }

    #[test]
    fn mul_commutative(a in big(), b in big()) {
        prop_assert_eq!(a.times(&b), b.times(&a));
    }

    #[test]
    fn compare_agrees_with_eq(a in big(), b in big()) {
        prop_assert_eq!(a.compare_to(&b) == std::cmp::Ordering::Equal, a == b);
        prop_assert_eq!(a.compare_to(&a.clone()), std::cmp::Ordering::Equal);
    }

    #[test]
    fn results_stay_canonical(a in big(), b in big()) {
        for r in [a.plus(&b), a.minus(&b), a.times(&b)] {
            let s = r.to_string();
            let reparsed = BigInteger::new(&s).unwrap();
            prop_assert_eq!(reparsed.digit_count(), r.digit_count());
            prop_assert!(s != "-0");
            prop_assert!(!s.trim_start_matches('-').starts_with('0') || s == "0");
        }
    }

    #[test]
    fn matches_oracle(a in big(), b in big()) {
        let (x, y) = (oracle(&a), oracle(&b));
        prop_assert_eq!(oracle(&a.plus(&b)), &x + &y);
        prop_assert_eq!(oracle(&a.minus(&b)), &x - &y);
        prop_assert_eq!(oracle(&a.times(&b)), &x * &y);
        prop_assert_eq!(a.compare_to(&b), x.cmp(&y));
    }

    #[test]
    fn from_native_matches_text(n in any::<i128>()) {
        prop_assert_eq!(BigInteger::from(n).to_string(), n.to_string());
    }

    #[test]
    fn pow_matches_repeated_mul(a in big(), exp in 0u32..8) {
        let expected = (0..exp).fold(BigInteger::ONE, |acc, _| acc.times(&a));
        prop_assert_eq!(a.pow(exp), expected);
    }
}
