use super::*;

/// Addition and subtraction (both use the same exact-merge algorithm; `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication and squaring.
mod mul;

/// Division, reciprocal, and the scalar kernels.
mod div;

use core::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg};

impl<const N: usize> Neg for Cascade<N> {
  type Output = Self;

  /// Exact: negating every limb preserves the invariant.
  #[inline]
  fn neg(mut self) -> Self {
    for limb in &mut self.0 {
      *limb = -*limb;
    }
    self
  }
}

impl<const N: usize> Neg for &Cascade<N> {
  type Output = Cascade<N>;

  #[inline]
  fn neg(self) -> Cascade<N> { -*self }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const N: usize> $trait<Cascade<N>> for Cascade<N> {
      type Output = Cascade<N>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const N: usize> $trait<&Cascade<N>> for Cascade<N> {
      type Output = Cascade<N>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const N: usize> $trait<Cascade<N>> for &Cascade<N> {
      type Output = Cascade<N>;

      #[inline]
      fn $name(self, rhs: Cascade<N>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const N: usize> $trait<&Cascade<N>> for &Cascade<N> {
      type Output = Cascade<N>;

      #[inline]
      fn $name(self, rhs: &Cascade<N>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const N: usize> $trait_assign<Cascade<N>> for Cascade<N> {
      #[inline]
      fn $name_assign(&mut self, rhs: Cascade<N>) { *self = self.$name(rhs) }
    }

    impl<const N: usize> $trait_assign<&Cascade<N>> for Cascade<N> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Cascade<N>) { *self = self.$name(*rhs) }
    }
  }
}

mk_ops!(Add, AddAssign, add, add_assign);
mk_ops!(Sub, SubAssign, sub, sub_assign);
mk_ops!(Mul, MulAssign, mul, mul_assign);
mk_ops!(Div, DivAssign, div, div_assign);

/// Macro for instantiating the suite of differential tests for a binary operator: the result
/// must stay renormalized and agree with the exact [Rational] result to within `$slack` bits of
/// the full significand.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $slack:expr) => {
    use crate::Cascade;
    use crate::cascade::rational::agrees_to_bits;
    use crate::cascade::renorm::is_renormalized;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::dd::ONE;
      let mut b = crate::dd::NEG_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is accurate against the exact rational result.
    fn is_accurate<const N: usize>(a: Cascade<N>, b: Cascade<N>) -> bool {
      let result = a $op b;
      if !is_renormalized(&result) { return false }
      let (Ok(ra), Ok(rb)) = (Rational::try_from(a), Rational::try_from(b)) else {
        return !result.is_finite()
      };
      if stringify!($op) == "/" && rb == Rational::from(0) {
        return !result.is_finite()
      }
      let exact = ra $op rb;
      agrees_to_bits(result, &exact, Cascade::<N>::PRECISION - $slack)
    }

    macro_rules! test_proptest {
      ($name:ident, $cascade:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$cascade>::cases_proptest(),
            b in <$cascade>::cases_proptest(),
          ) {
            prop_assert!(is_accurate(a, b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    test_proptest!{dd_proptest, crate::dd}
    test_proptest!{td_proptest, crate::td}
    test_proptest!{qd_proptest, crate::qd}
  }
}

pub(crate) use mk_tests;
