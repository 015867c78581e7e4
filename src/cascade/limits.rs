use super::*;

impl<const N: usize> Cascade<N> {
  /// Machine epsilon: 2<sup>-52·N</sup>, the relative spacing of `N`-limb cascades.
  ///
  /// An `f64`, since it is representable as one (even for `N = 4`) and is almost always wanted
  /// as a plain threshold.
  pub const EPSILON: f64 = crate::eft::pow2(-52 * N as i32);

  /// Largest finite cascade: leading limb [f64::MAX], each trailing limb as large as
  /// non-overlap allows without the total rounding up to infinity (2<sup>1024 - 54k</sup>).
  pub const MAX: Self = {
    let mut limbs = [0.0; N];
    limbs[0] = f64::MAX;
    let mut k = 1;
    while k < N {
      limbs[k] = crate::eft::pow2(1024 - 54 * k as i32);
      k += 1;
    }
    Self(limbs)
  };

  /// Smallest finite cascade, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE`]!
  pub const MIN: Self = {
    let mut limbs = [0.0; N];
    let mut k = 0;
    while k < N {
      limbs[k] = -Self::MAX.0[k];
      k += 1;
    }
    Self(limbs)
  };

  /// Smallest positive *normal* value. Same as for `f64`: below this, trailing limbs cannot
  /// extend the significand (there is no room below the subnormal range), so precision degrades
  /// gracefully to a bare double.
  pub const MIN_POSITIVE: Self = Self::from_f64_raw(f64::MIN_POSITIVE);

  pub const INFINITY: Self = Self::from_f64_raw(f64::INFINITY);

  pub const NEG_INFINITY: Self = Self::from_f64_raw(f64::NEG_INFINITY);

  pub const NAN: Self = Self::from_f64_raw(f64::NAN);

  /// Significand width in bits, same as [PRECISION](Self::PRECISION).
  pub const DIGITS: u32 = Self::PRECISION;

  /// Approximate number of significant decimal digits ( ⌊(DIGITS - 1)·log₁₀2⌋ ).
  pub const DIGITS10: u32 = (Self::PRECISION - 1) * 30103 / 100000;

  pub const RADIX: u32 = 2;
}
