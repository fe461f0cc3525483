use num_bigint::BigInt;
use unveil::exact::Fraction;

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(BigInt::from(n), BigInt::from(d))
}

#[test]
fn integers_have_denominator_one() {
    let f = Fraction::from(BigInt::from(42));

    assert!(f.is_integer());
    assert_eq!(f.into_parts(), (BigInt::from(42), BigInt::from(1)));
}

#[test]
fn construction_reduces_to_lowest_terms() {
    assert_eq!(frac(2, 4).into_parts(), (BigInt::from(1), BigInt::from(2)));
    assert_eq!(
        frac(45, 60).into_parts(),
        (BigInt::from(3), BigInt::from(4))
    );
}

#[test]
fn negative_denominators_are_normalized() {
    assert_eq!(
        frac(1, -2).into_parts(),
        (BigInt::from(-1), BigInt::from(2))
    );
    assert_eq!(
        frac(-3, -6).into_parts(),
        (BigInt::from(1), BigInt::from(2))
    );
}

#[test]
fn zero_reduces_to_canonical_form() {
    assert_eq!(frac(0, 17).into_parts(), (BigInt::from(0), BigInt::from(1)));
    assert!(frac(0, -5).is_integer());
}

#[test]
fn degenerate_zero_over_zero_is_passed_through() {
    // Never produced by valid use; the guard keeps reduction total.
    assert_eq!(frac(0, 0).into_parts(), (BigInt::from(0), BigInt::from(0)));
}

#[test]
fn addition_cross_multiplies_and_reduces() {
    assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
    assert_eq!(frac(1, 2) + frac(1, 2), frac(1, 1));
    assert_eq!(frac(1, 2) + frac(-1, 2), Fraction::zero());
}

#[test]
fn addition_is_commutative() {
    let pairs = [(1, 2, 1, 3), (-7, 4, 5, 6), (0, 1, 9, 13), (-2, 3, -3, 5)];

    for (a, b, c, d) in pairs {
        assert_eq!(frac(a, b) + frac(c, d), frac(c, d) + frac(a, b));
    }
}

#[test]
fn addition_is_associative() {
    let a = frac(1, 2);
    let b = frac(-2, 3);
    let c = frac(7, 5);

    assert_eq!((a.clone() + b.clone()) + c.clone(), a + (b + c));
}

#[test]
fn zero_is_the_additive_identity() {
    let f = frac(-9, 14);

    assert_eq!(f.clone() + Fraction::zero(), f);
}

#[test]
fn scaling_by_an_integer_reduces() {
    let half = frac(1, 2);
    let scaled = half * &BigInt::from(4);

    assert!(scaled.is_integer());
    assert_eq!(scaled.into_parts(), (BigInt::from(2), BigInt::from(1)));
}

#[test]
fn displays_as_integer_when_reduced_to_one() {
    assert_eq!(frac(6, 3).to_string(), "2");
    assert_eq!(frac(5, -6).to_string(), "-5/6");
}
