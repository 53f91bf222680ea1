use std::cmp::Ordering;

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{BigInt, Sign};

/// Independent O(n*m) product of two limb slices, least significant first.
pub(crate) fn schoolbook(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut z = vec![0u32; x.len() + y.len()];
    for (i, &xi) in x.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &yj) in y.iter().enumerate() {
            let product = (xi as u64) * (yj as u64) + z[i + j] as u64 + carry;
            z[i + j] = product as u32;
            carry = product >> 32;
        }
        z[i + y.len()] = carry as u32;
    }
    z
}

fn signed(limbs: Vec<u32>, negative: bool) -> BigInt {
    let sign = if negative { Sign::Negative } else { Sign::Positive };
    BigInt::from_raw(limbs, sign)
}

fn random_big_int(rng: &mut StdRng, max_limbs: usize) -> BigInt {
    let len = rng.random_range(1..=max_limbs);
    let limbs = (0..len).map(|_| rng.random::<u32>()).collect();
    signed(limbs, rng.random::<bool>())
}

fn arb_big_int() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        any::<i64>().prop_map(BigInt::from),
        (any::<bool>(), prop::collection::vec(any::<u32>(), 1..12))
            .prop_map(|(negative, limbs)| signed(limbs, negative)),
        // long runs of all-ones limbs stress every carry and borrow path
        (any::<bool>(), 1..10usize)
            .prop_map(|(negative, len)| signed(vec![u32::MAX; len], negative)),
    ]
}

fn normalize(s: &str) -> String {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

proptest! {
    #[test]
    fn render_parse_normalizes(s in "-?[0-9]{1,80}") {
        let value: BigInt = s.parse().unwrap();
        prop_assert_eq!(value.to_string(), normalize(&s));
    }

    #[test]
    fn additive_and_multiplicative_identities(a in arb_big_int()) {
        let zero = BigInt::zero();
        let one = BigInt::from(1_i64);
        prop_assert_eq!(&a + &zero, a.clone());
        prop_assert_eq!(&a - &zero, a.clone());
        prop_assert_eq!(&a - &a, zero.clone());
        prop_assert_eq!((&a - &a).sign(), Sign::Zero);
        prop_assert_eq!(&a * &zero, zero.clone());
        prop_assert_eq!(&a * &one, a.clone());
        prop_assert_eq!(&a + &(-&a), zero);
    }

    #[test]
    fn add_sub_inverse(a in arb_big_int(), b in arb_big_int()) {
        let sum = &a + &b;
        prop_assert_eq!(&sum - &b, a.clone());
        prop_assert_eq!(&sum - &a, b.clone());
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a - &b, -(&b - &a));
    }

    #[test]
    fn division_law(a in arb_big_int(), b in arb_big_int()) {
        prop_assume!(!b.is_zero());
        let quotient = &a / &b;
        let remainder = &a % &b;
        prop_assert_eq!(&(&quotient * &b) + &remainder, a.clone());
        prop_assert!(remainder.abs() < b.abs());
        prop_assert!(remainder.is_zero() || remainder.sign() == a.sign());
    }

    #[test]
    fn comparator_total_and_antisymmetric(a in arb_big_int(), b in arb_big_int()) {
        let forward = a.compare(&b);
        prop_assert_eq!(forward, b.compare(&a).reverse());
        let holds = [a < b, a == b, a > b];
        prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        prop_assert_eq!(forward == Ordering::Equal, (&a - &b).is_zero());
    }

    #[test]
    fn karatsuba_matches_schoolbook(a in arb_big_int(), b in arb_big_int()) {
        let expected = BigInt::from_raw(schoolbook(a.limbs(), b.limbs()), a.sign() * b.sign());
        prop_assert_eq!(BigInt::recursive_multiplication(&a, &b), expected);
    }

    #[test]
    fn agrees_with_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (wa, wb) = (a as i128, b as i128);
        prop_assert_eq!((&x + &y).to_string(), (wa + wb).to_string());
        prop_assert_eq!((&x - &y).to_string(), (wa - wb).to_string());
        prop_assert_eq!((&x * &y).to_string(), (wa * wb).to_string());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!((&x / &y).to_string(), (wa / wb).to_string());
            prop_assert_eq!((&x % &y).to_string(), (wa % wb).to_string());
        } else {
            prop_assert!((&x / &y).is_zero());
            prop_assert!((&x % &y).is_zero());
        }
    }
}

#[test]
fn bin_search_brackets_every_window() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let divisor = random_big_int(&mut rng, 6).abs();
        if divisor.is_zero() {
            continue;
        }
        // any window below divisor * B
        let mut bound = divisor.clone();
        bound.shift(1);
        let window = &random_big_int(&mut rng, 7).abs() % &bound;

        let digit = BigInt::bin_search_division(&window, &divisor);
        let low = &divisor * &BigInt::from(digit);
        let high = &low + &divisor;
        assert!(low <= window, "{} * {} > {}", divisor, digit, window);
        assert!(window < high, "{} * ({} + 1) <= {}", divisor, digit, window);
    }
}

#[test]
fn random_long_division() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let a = random_big_int(&mut rng, 24);
        let b = random_big_int(&mut rng, 10);
        if b.is_zero() {
            continue;
        }
        let quotient = &a / &b;
        let remainder = &a % &b;
        assert_eq!(&(&quotient * &b) + &remainder, a, "{} / {}", a, b);
        assert!(remainder.abs() < b.abs());
    }
}

#[test]
fn scenarios() {
    assert_eq!(
        BigInt::from("123456789012345678901234567890") * BigInt::from("2"),
        BigInt::from("246913578024691357802469135780")
    );
    let (a, b) = (BigInt::from("-7"), BigInt::from("2"));
    assert_eq!(&a / &b, BigInt::from("-3"));
    assert_eq!(&a % &b, BigInt::from("-1"));
    assert_eq!(&(&(&a / &b) * &b) + &(&a % &b), a);
    assert_eq!(
        BigInt::from("1000000000000000000") - BigInt::from("999999999999999999"),
        BigInt::from("1")
    );
    assert_eq!(-BigInt::from(i64::MIN), BigInt::from("9223372036854775808"));
    assert_eq!(BigInt::from("0"), BigInt::from("-0"));
    assert_eq!(BigInt::from("-0").to_string(), "0");
}
