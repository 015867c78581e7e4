use super::*;

impl<const N: usize> Cascade<N> {
  /// Sine and cosine together (they share the argument reduction, and `tan` wants both).
  ///
  /// Reduction: subtract the nearest multiple of 2π (using the full-precision tabled 2π), then
  /// pick the quadrant by the nearest multiple of π/2. What is left satisfies `|t| ≤ π/4 + ε`
  /// and goes to the Taylor kernels.
  ///
  /// As with every fixed-table reduction, arguments astronomically larger than 2π lose the
  /// digits the table cannot see; accuracy is relative to the reduced argument.
  pub fn sin_cos(self) -> (Self, Self) {
    if !self.is_finite() {
      // sin/cos of NaN or ±∞ are NaN.
      return (Self::NAN, Self::NAN);
    }
    if self.is_zero() {
      return (self, Self::ONE);  // sin(-0) = -0
    }

    let z = (self / Self::TAU).round();
    let r = self - Self::TAU * z;

    // |r| ≤ π (plus reduction noise), so the quadrant index is in -2..=2.
    let q = (r.0[0] / Self::FRAC_PI_2.0[0]).round();
    let t = r - Self::FRAC_PI_2.mul_f64(q);

    let (sin_t, cos_t) = (Self::sin_taylor(t), Self::cos_taylor(t));
    match q as i32 {
      0 => (sin_t, cos_t),
      1 => (cos_t, -sin_t),
      -1 => (-cos_t, sin_t),
      _ => (-sin_t, -cos_t),  // q = ±2: the far side of the circle
    }
  }

  pub fn sin(self) -> Self {
    self.sin_cos().0
  }

  pub fn cos(self) -> Self {
    self.sin_cos().1
  }

  pub fn tan(self) -> Self {
    let (sin, cos) = self.sin_cos();
    sin / cos
  }

  /// Taylor sine on `|t| ≤ π/4`: `t - t³/3! + t⁵/5! - ...`.
  fn sin_taylor(t: Self) -> Self {
    if t.is_zero() {
      return t;
    }
    let t2 = t.sqr();
    let mut sum = t;
    let mut term = t;
    let mut k = 1.0;
    loop {
      // term_{k+2} = -term_k · t² / ((k+1)(k+2))
      term = (term * t2).div_f64(-((k + 1.0) * (k + 2.0)));
      sum = sum + term;
      k += 2.0;
      if term.0[0].abs() <= Self::EPSILON || k > 60.0 {
        return sum;
      }
    }
  }

  /// Taylor cosine on `|t| ≤ π/4`: `1 - t²/2! + t⁴/4! - ...`.
  fn cos_taylor(t: Self) -> Self {
    if t.is_zero() {
      return Self::ONE;
    }
    let t2 = t.sqr();
    let mut sum = Self::ONE;
    let mut term = Self::ONE;
    let mut k = 0.0;
    loop {
      term = (term * t2).div_f64(-((k + 1.0) * (k + 2.0)));
      sum = sum + term;
      k += 2.0;
      if term.0[0].abs() <= Self::EPSILON || k > 60.0 {
        return sum;
      }
    }
  }
}
