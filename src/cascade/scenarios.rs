//! End-to-end accuracy scenarios on classically ill-conditioned problems.

use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};

use crate::dd;
use crate::cascade::rational::rational_from_decimal;

/// Rump's polynomial `333.75 b⁶ + a²(11a²b² − b⁶ − 121b⁴ − 2) + 5.5 b⁸ + a/(2b)` at
/// `a = 77617`, `b = 33096`. The polynomial part cancels to exactly −2, but its intermediate
/// terms reach 123 bits, so every precision below that loses the cancellation.
fn rump<const N: usize>() -> Cascade<N> {
  let a = Cascade::<N>::from(77617.0);
  let b = Cascade::<N>::from(33096.0);
  let a2 = a.sqr();
  let b2 = b.sqr();
  let b4 = b2.sqr();
  let b6 = b4 * b2;
  let b8 = b4.sqr();
  let inner = (a2 * b2).mul_f64(11.0) - b6 - b4.mul_f64(121.0) - Cascade::from(2.0);
  a2 * inner + b8.mul_f64(5.5) + b6.mul_f64(333.75) + a / b.mul_f64(2.0)
}

fn rump_f64() -> f64 {
  let (a, b) = (77617.0f64, 33096.0f64);
  let b2 = b * b;
  let b4 = b2 * b2;
  let b6 = b4 * b2;
  let b8 = b4 * b4;
  333.75 * b6 + a * a * (11.0 * a * a * b2 - b6 - 121.0 * b4 - 2.0) + 5.5 * b8 + a / (2.0 * b)
}

#[test]
fn rump_polynomial() {
  // f(77617, 33096) = a/(2b) − 2 = −54767/66192 ≈ −0.8273960599.
  let exact = Rational::from_signeds(-54767, 66192);
  assert!(rational::agrees_to_bits(rump::<4>(), &exact, Cascade::<4>::PRECISION - 4));

  // 106 bits are not enough: double-double drops the −2 term of the 123-bit cancellation and
  // lands near a/(2b) ≈ 1.17, roughly 2 away from the true value. Plain doubles are off by
  // twenty-one orders of magnitude.
  let dd_err = (Rational::try_from(rump::<2>()).unwrap() - &exact).abs();
  let qd_err = (Rational::try_from(rump::<4>()).unwrap() - &exact).abs();
  assert!(dd_err > Rational::from(1));
  assert!(dd_err < Rational::from(3));
  assert!(dd_err > qd_err);
  assert!(rump_f64().abs() > 1e20);
}

#[test]
fn compensated_summation() {
  // 0.5 + 2⁻⁶⁰, then a hundred additions of 1 + 2⁻⁶⁰. Every partial sum is exactly
  // representable in two limbs, so the cascade tracks the correction terms bit for bit.
  let tiny = crate::eft::pow2(-60);
  let step = dd::ONE + dd::from(tiny);
  let mut sum = dd::from(0.5) + dd::from(tiny);
  for _ in 0..100 {
    sum = sum + step;
  }
  assert_eq!(sum, dd::from_limbs([100.5, 101.0 * tiny]));
  let exact = Rational::from_signeds(201, 2) + Rational::from(101) * Rational::power_of_2(-60i64);
  assert_eq!(Rational::try_from(sum), Ok(exact));

  // A plain double rounds away every correction term along the way.
  let mut naive = 0.5 + tiny;
  for _ in 0..100 {
    naive += 1.0 + tiny;
  }
  assert_eq!(naive, 100.5);
}

#[test]
fn quad_double_pi_reference() {
  // π to 70 digits; the table should match everything a quad-double can represent.
  let pi = rational_from_decimal(
    "3.141592653589793238462643383279502884197169399375105820974944592307816",
  );
  assert!(rational::agrees_to_bits(Cascade::<4>::PI, &pi, 208));
}
