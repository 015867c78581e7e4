use super::*;

impl<const N: usize> Cascade<N> {
  /// Returns the square root of `self`. Negative operands return NaN; see
  /// [checked_sqrt](Self::checked_sqrt).
  ///
  /// Newton iteration on `x ← x + (a - x²)/(2x)`, seeded with the hardware square root of the
  /// leading limb. The seed already carries 53 correct bits and each iteration doubles them, so
  /// one pass suffices for double-double and two for the wider cascades.
  pub fn sqrt(self) -> Self {
    if self.is_zero() {
      return self;  // keeps √(-0) = -0, as for doubles
    }
    if self.is_sign_negative() {
      return Self::NAN;
    }
    if !self.is_finite() {
      return self;  // √∞ = ∞, √NaN = NaN
    }

    let mut x = Self::from(self.0[0].sqrt());
    let iterations = if N == 2 { 1 } else { 2 };
    for _ in 0..iterations {
      let residual = self - x.sqr();
      x = x + (residual / x).mul_pwr2(0.5);
    }
    x
  }

  /// Square root that reports a negative operand instead of returning NaN.
  pub fn checked_sqrt(self) -> Result<Self, DomainError> {
    if self.is_sign_negative() && !self.is_zero() && !self.is_nan() {
      Err(DomainError::NegativeSqrt)
    } else {
      Ok(self.sqrt())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dd, td, qd, DomainError};
  use crate::cascade::rational::agrees_to_bits;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn exact_squares() {
    assert_eq!(dd::from(4.0).sqrt(), dd::from(2.0));
    assert_eq!(qd::from(9.0).sqrt(), qd::from(3.0));
    assert_eq!(td::from(2.25).sqrt(), td::from(1.5));
    assert_eq!(dd::ZERO.sqrt(), dd::ZERO);
    assert_eq!(dd::ONE.sqrt(), dd::ONE);
  }

  #[test]
  fn specials() {
    assert!(dd::NEG_ONE.sqrt().is_nan());
    assert!(qd::NAN.sqrt().is_nan());
    assert_eq!(qd::INFINITY.sqrt(), qd::INFINITY);
    assert!(dd::from(-0.0).sqrt().is_zero());
  }

  #[test]
  fn checked() {
    assert_eq!(dd::NEG_ONE.checked_sqrt(), Err(DomainError::NegativeSqrt));
    assert_eq!(dd::from(4.0).checked_sqrt(), Ok(dd::from(2.0)));
    assert!(dd::NAN.checked_sqrt().unwrap().is_nan());
  }

  /// `sqrt(a)²` must recover `a` to within a few ulps of the last limb, for every width.
  macro_rules! test_proptest {
    ($name:ident, $cascade:ty) => {
      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
        #[test]
        fn $name(a in <$cascade>::cases_proptest()) {
          let a = a.abs();
          let root = a.sqrt();
          prop_assert!(crate::cascade::renorm::is_renormalized(&root));
          let exact = Rational::try_from(a).unwrap();
          let squared = Rational::try_from(root).unwrap();
          let squared = &squared * &squared;
          // Compare a against sqrt(a)² in rational arithmetic: relative error at most
          // 2^-(PRECISION - 5), i.e. the root itself is good to ~PRECISION - 4 bits.
          let err = if squared > exact { &squared - &exact } else { &exact - &squared };
          use malachite::base::num::arithmetic::traits::PowerOf2;
          prop_assert!(
            err <= exact * Rational::power_of_2(-((<$cascade>::PRECISION - 5) as i64)),
            "sqrt({:?})", a,
          );
        }
      }
    };
  }

  test_proptest!{dd_proptest, crate::dd}
  test_proptest!{td_proptest, crate::td}
  test_proptest!{qd_proptest, crate::qd}

  #[test]
  fn against_reference() {
    let sqrt_pi = crate::cascade::rational::rational_from_decimal(
      "1.77245385090551602729816748334114518279754945612238712821380778985291128459103");
    assert!(agrees_to_bits(qd::PI.sqrt(), &sqrt_pi, 205));
    assert!(agrees_to_bits(dd::PI.sqrt(), &sqrt_pi, 100));
  }
}
