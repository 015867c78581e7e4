use super::*;

impl<const N: usize> Cascade<N> {
  /// The number of limbs. Also the compile-time width guard: `N` outside `2..=4` fails to
  /// compile.
  ///
  /// ```compile_fail
  /// # use soft_cascade::Cascade;
  /// let x = Cascade::<1>::ZERO;  // A 1-limb cascade is just an f64; not supported.
  /// ```
  ///
  /// ```compile_fail
  /// # use soft_cascade::Cascade;
  /// let x = Cascade::<5>::ZERO;  // Widths above quad-double are not supported.
  /// ```
  pub const LIMBS: usize = {
    assert!(2 <= N && N <= 4, "Cascade width must be 2, 3, or 4");
    N
  };

  /// Significand width in bits.
  pub const PRECISION: u32 = 53 * Self::LIMBS as u32;

  /// Build a cascade directly from its limbs, without renormalizing.
  ///
  /// The caller is responsible for the representation invariant (decreasing magnitude,
  /// non-overlapping); limbs that violate it produce a garbage value (but no UB). Use the
  /// `From` conversions or [FromStr](core::str::FromStr) to build values safely.
  #[inline]
  pub const fn from_limbs(limbs: [f64; N]) -> Self {
    let _ = Self::LIMBS;
    Self(limbs)
  }

  /// The raw limbs, most significant first.
  #[inline]
  pub const fn limbs(&self) -> [f64; N] {
    self.0
  }

  /// The leading limb: the double nearest the represented value.
  #[inline]
  pub const fn hi(&self) -> f64 {
    self.0[0]
  }

  /// Round to the nearest double. Same as [hi](Self::hi).
  #[inline]
  pub const fn to_f64(&self) -> f64 {
    self.0[0]
  }

  #[inline]
  pub const fn is_zero(&self) -> bool {
    self.0[0] == 0.0
  }

  #[inline]
  pub const fn is_nan(&self) -> bool {
    self.0[0].is_nan()
  }

  #[inline]
  pub const fn is_infinite(&self) -> bool {
    self.0[0].is_infinite()
  }

  #[inline]
  pub const fn is_finite(&self) -> bool {
    self.0[0].is_finite()
  }

  /// True iff the sign bit of the leading limb is set (including `-0.0` and `-∞`).
  #[inline]
  pub const fn is_sign_negative(&self) -> bool {
    self.0[0].is_sign_negative()
  }

  #[inline]
  pub const fn is_sign_positive(&self) -> bool {
    self.0[0].is_sign_positive()
  }

  /// Absolute value.
  #[inline]
  pub fn abs(self) -> Self {
    if self.is_sign_negative() { -self } else { self }
  }

  /// Round to the nearest integer, ties to even. The whole cascade participates: a leading limb
  /// sitting exactly on a tie is broken by the sign of the tail.
  pub fn round(self) -> Self {
    if !self.is_finite() { return self }
    let mut terms = [0.0; N];
    for i in 0..N {
      let r = self.0[i].round_ties_even();
      terms[i] = r;
      if r != self.0[i] {
        if (r - self.0[i]).abs() == 0.5 {
          // Exact tie on this limb: the finer limbs decide. By non-overlap the tail's sign is
          // the sign of the next limb.
          let tail = if i + 1 < N { self.0[i + 1] } else { 0.0 };
          if r > self.0[i] && tail < 0.0 {
            terms[i] = r - 1.0;
          } else if r < self.0[i] && tail > 0.0 {
            terms[i] = r + 1.0;
          }
        }
        break;
      }
      // This limb is already integral; the fractional part lives further down the cascade.
    }
    Self::from_terms(&terms)
  }

  /// Largest integer not above `self`.
  ///
  /// Works limb by limb: an integral limb passes the fractional part down the cascade, and
  /// non-overlap guarantees the limbs below the first non-integral one cannot move the result
  /// across an integer boundary.
  pub fn floor(self) -> Self {
    if !self.is_finite() { return self }
    let mut terms = [0.0; N];
    for i in 0..N {
      terms[i] = self.0[i].floor();
      if terms[i] != self.0[i] {
        break;
      }
    }
    Self::from_terms(&terms)
  }

  /// Smallest integer not below `self`.
  pub fn ceil(self) -> Self {
    if !self.is_finite() { return self }
    let mut terms = [0.0; N];
    for i in 0..N {
      terms[i] = self.0[i].ceil();
      if terms[i] != self.0[i] {
        break;
      }
    }
    Self::from_terms(&terms)
  }

  /// Round toward zero.
  #[inline]
  pub fn trunc(self) -> Self {
    if self.is_sign_negative() { self.ceil() } else { self.floor() }
  }
}
