use super::*;

impl<const N: usize> From<f64> for Cascade<N> {
  /// Exact: a double is a one-limb cascade.
  #[inline]
  fn from(value: f64) -> Self {
    Self::from_f64_raw(value)
  }
}

impl<const N: usize> From<f32> for Cascade<N> {
  #[inline]
  fn from(value: f32) -> Self {
    Self::from_f64_raw(value as f64)
  }
}

impl<const N: usize> From<Cascade<N>> for f64 {
  /// Rounds to the nearest double, i.e. returns the leading limb.
  #[inline]
  fn from(value: Cascade<N>) -> Self {
    value.hi()
  }
}

/// Narrow integers convert exactly through a single double.
macro_rules! mk_from_int {
  ($($int:ty)*) => {$(
    impl<const N: usize> From<$int> for Cascade<N> {
      #[inline]
      fn from(value: $int) -> Self {
        Self::from_f64_raw(value as f64)
      }
    }
  )*}
}

mk_from_int!(i8 i16 i32 u8 u16 u32);

/// Wide integers may exceed 53 bits; split into a rounded head and an exact residue, which by
/// construction do not overlap.
macro_rules! mk_from_wide_int {
  ($($int:ty)*) => {$(
    impl<const N: usize> From<$int> for Cascade<N> {
      fn from(value: $int) -> Self {
        // The head may round up past the integer's range (e.g. i64::MAX), so take the residue
        // in i128.
        let hi = value as f64;
        let lo = (value as i128 - hi as i128) as f64;
        let mut limbs = [0.0; N];
        (limbs[0], limbs[1]) = quick_two_sum(hi, lo);
        Self(limbs)
      }
    }
  )*}
}

mk_from_wide_int!(i64 u64);

impl<const N: usize> Cascade<N> {
  /// Re-round to a cascade of a different width. Widening is exact; narrowing rounds.
  pub fn resize<const M: usize>(self) -> Cascade<M> {
    if !self.is_finite() {
      return Cascade::from_f64_raw(self.hi());
    }
    Cascade::from_terms(&self.0)
  }
}

impl<const N: usize> Default for Cascade<N> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
