use super::*;

impl<const N: usize> Cascade<N> {
  /// Hyperbolic sine.
  ///
  /// For `|x| > 0.05` the defining exponentials are safe; below that, `e^x` and `e^-x` cancel
  /// catastrophically, so a short Taylor series takes over.
  pub fn sinh(self) -> Self {
    if self.is_zero() || !self.is_finite() {
      return self;  // sinh(±0) = ±0, sinh(±∞) = ±∞, NaN propagates
    }
    if self.0[0].abs() > 0.05 {
      let ea = self.exp();
      return (ea - ea.recip()).mul_pwr2(0.5);
    }

    // sinh x = x + x³/3! + x⁵/5! + ...
    let t2 = self.sqr();
    let mut sum = self;
    let mut term = self;
    let mut k = 1.0;
    loop {
      term = (term * t2).div_f64((k + 1.0) * (k + 2.0));
      sum = sum + term;
      k += 2.0;
      if term.0[0].abs() <= Self::EPSILON * self.0[0].abs() || k > 40.0 {
        return sum;
      }
    }
  }

  /// Hyperbolic cosine.
  pub fn cosh(self) -> Self {
    if self.is_zero() {
      return Self::ONE;
    }
    if !self.is_finite() {
      return if self.is_nan() { self } else { Self::INFINITY };
    }
    let ea = self.exp();
    (ea + ea.recip()).mul_pwr2(0.5)
  }

  /// Hyperbolic tangent.
  pub fn tanh(self) -> Self {
    if self.is_zero() || self.is_nan() {
      return self;
    }
    if self.is_infinite() {
      return if self.is_sign_negative() { Self::NEG_ONE } else { Self::ONE };
    }
    if self.0[0].abs() > 0.05 {
      let ea = self.exp();
      // e^x saturates near |x| ≈ 709.78; the quotient below would then be ∞/∞. The true
      // value is already ±1 to full precision long before that point.
      if ea.is_infinite() {
        return Self::ONE;
      }
      if ea.is_zero() {
        return Self::NEG_ONE;
      }
      let inv = ea.recip();
      return (ea - inv) / (ea + inv);
    }
    // Small arguments: tanh x = sinh x / √(1 + sinh²x) avoids the cancellation in e^x - e^-x.
    let s = self.sinh();
    s / (Self::ONE + s.sqr()).sqrt()
  }

  /// Inverse hyperbolic sine: ln(x + √(x² + 1)).
  pub fn asinh(self) -> Self {
    if self.is_zero() || !self.is_finite() {
      return self;
    }
    if self.is_sign_negative() {
      // Evaluate on the positive side, where the log argument cannot cancel.
      return -(-self).asinh();
    }
    (self + (self.sqr() + Self::ONE).sqrt()).ln()
  }

  /// Inverse hyperbolic cosine: ln(x + √(x² - 1)), defined for `x ≥ 1`.
  pub fn acosh(self) -> Self {
    if self.is_nan() || self < Self::ONE {
      return Self::NAN;
    }
    (self + (self.sqr() - Self::ONE).sqrt()).ln()
  }

  /// Inverse hyperbolic tangent: ½·ln((1+x)/(1-x)), defined for `|x| ≤ 1` with poles at ±1.
  pub fn atanh(self) -> Self {
    if self.is_nan() {
      return self;
    }
    let one = Self::ONE;
    if self.abs() > one {
      return Self::NAN;
    }
    if self.abs() == one {
      return Self::from_f64_raw(f64::INFINITY.copysign(self.0[0]));
    }
    ((one + self) / (one - self)).ln().mul_pwr2(0.5)
  }
}
