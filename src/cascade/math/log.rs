use super::*;

impl<const N: usize> Cascade<N> {
  /// Natural logarithm. Zero and negative operands return NaN; see
  /// [checked_ln](Self::checked_ln).
  ///
  /// Newton iteration on the *inverse* function: `x ← x + a·e^(-x) - 1` converges to `ln a`,
  /// and each pass doubles the correct bits. The double-precision seed leaves `N - 1` passes.
  pub fn ln(self) -> Self {
    if self.is_nan() {
      return self;
    }
    if self == Self::ONE {
      return Self::ZERO;
    }
    if self.is_zero() || self.is_sign_negative() {
      return Self::NAN;
    }
    if self.is_infinite() {
      return Self::INFINITY;
    }

    let mut x = Self::from(self.0[0].ln());
    for _ in 0..N - 1 {
      x = x + self * (-x).exp() - Self::ONE;
    }
    x
  }

  /// Base-2 logarithm.
  pub fn log2(self) -> Self {
    self.ln() * Self::log2_e()
  }

  /// Base-10 logarithm.
  pub fn log10(self) -> Self {
    self.ln() * Self::log10_e()
  }

  /// Natural logarithm that reports a non-positive operand instead of returning NaN.
  pub fn checked_ln(self) -> Result<Self, DomainError> {
    if !self.is_nan() && (self.is_zero() || self.is_sign_negative()) {
      Err(DomainError::NonPositiveLog)
    } else {
      Ok(self.ln())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dd, td, qd, DomainError};
  use crate::cascade::rational::{agrees_to_bits, rational_from_decimal};
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn fixed_points() {
    assert_eq!(dd::ONE.ln(), dd::ZERO);
    assert_eq!(qd::ONE.ln(), qd::ZERO);
    assert!(dd::ZERO.ln().is_nan());
    assert!(dd::NEG_ONE.ln().is_nan());
    assert!(dd::NAN.ln().is_nan());
    assert_eq!(dd::INFINITY.ln(), dd::INFINITY);
  }

  #[test]
  fn checked() {
    assert_eq!(dd::ZERO.checked_ln(), Err(DomainError::NonPositiveLog));
    assert_eq!(dd::NEG_ONE.checked_ln(), Err(DomainError::NonPositiveLog));
    assert_eq!(dd::ONE.checked_ln(), Ok(dd::ZERO));
    assert!(dd::NAN.checked_ln().unwrap().is_nan());
  }

  #[test]
  fn references() {
    let ln_2 = rational_from_decimal(
      "0.693147180559945309417232121458176568075500134360255254120680009493393621969695");
    let ln_10 = rational_from_decimal(
      "2.30258509299404568401799145468436420760110148862877297603332790096757260967735");
    assert!(agrees_to_bits(dd::from(2.0).ln(), &ln_2, 100));
    assert!(agrees_to_bits(td::from(2.0).ln(), &ln_2, 152));
    assert!(agrees_to_bits(qd::from(2.0).ln(), &ln_2, 204));
    assert!(agrees_to_bits(qd::from(10.0).ln(), &ln_10, 204));

    // log2(8) = 3 and log10(1000) = 3, to full precision less a few ulps.
    let three = Rational::from(3);
    assert!(agrees_to_bits(qd::from(8.0).log2(), &three, 204));
    assert!(agrees_to_bits(qd::from(1000.0).log10(), &three, 204));
  }

  #[test]
  fn ln_e_is_one() {
    let one = Rational::from(1);
    assert!(agrees_to_bits(dd::E.ln(), &one, 100));
    assert!(agrees_to_bits(qd::E.ln(), &one, 204));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn exp_undoes_ln(a in qd::cases_proptest_exp(-40..40)) {
      let a = a.abs();
      let roundtrip = a.ln().exp();
      let err = (roundtrip - a).abs();
      // ln then exp compounds both errors, amplified by |ln a| ≤ 28.
      prop_assert!(err <= a.mul_f64(qd::EPSILON * 4096.0), "{:?}", a);
      prop_assert!(crate::cascade::renorm::is_renormalized(&a.ln()));
    }

    #[test]
    fn ln_undoes_exp(a in dd::cases_proptest_exp(-3..5)) {
      let roundtrip = a.exp().ln();
      let err = (roundtrip - a).abs();
      prop_assert!(err <= dd::from(dd::EPSILON * 4096.0), "{:?}", a);
    }
  }
}
