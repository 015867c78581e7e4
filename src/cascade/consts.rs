use super::*;

/// Frozen 4-limb tables for the transcendental constants. Each table is the greedy limb
/// decomposition of the constant (each limb is the nearest double to the remaining residue), so
/// truncating to the first `N` limbs yields a valid `N`-limb cascade.
///
/// Values match the QD library (Hida/Li/Bailey) tables.
mod table {
  pub const PI: [f64; 4] =
    [3.141592653589793, 1.2246467991473532e-16, -2.9947698097183397e-33, 1.1124542208633653e-49];
  pub const TAU: [f64; 4] =
    [6.283185307179586, 2.4492935982947064e-16, -5.989539619436679e-33, 2.2249084417267306e-49];
  pub const FRAC_PI_2: [f64; 4] =
    [1.5707963267948966, 6.123233995736766e-17, -1.4973849048591698e-33, 5.562271104316826e-50];
  pub const FRAC_PI_4: [f64; 4] =
    [0.7853981633974483, 3.061616997868383e-17, -7.486924524295849e-34, 2.781135552158413e-50];
  pub const E: [f64; 4] =
    [2.718281828459045, 1.4456468917292502e-16, -2.1277171080381768e-33, 1.5156301598412191e-49];
  pub const LN_2: [f64; 4] =
    [0.6931471805599453, 2.3190468138462996e-17, 5.707708438416212e-34, -3.5824322106018114e-50];
  pub const LN_10: [f64; 4] =
    [2.302585092994046, -2.1707562233822494e-16, -9.984262454465777e-33, -4.023357454450206e-49];
}

impl<const N: usize> Cascade<N> {
  /// Truncate a 4-limb table to `N` limbs (valid for any greedy limb decomposition).
  const fn from_table(table: [f64; 4]) -> Self {
    let _ = Self::LIMBS;
    let mut limbs = [0.0; N];
    let mut i = 0;
    while i < N {
      limbs[i] = table[i];
      i += 1;
    }
    Self(limbs)
  }

  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self::from_f64_raw(0.0);

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self::from_f64_raw(1.0);

  /// Negative one (`-1`).
  pub const NEG_ONE: Self = Self::from_f64_raw(-1.0);

  /// Archimedes' constant (π).
  pub const PI: Self = Self::from_table(table::PI);

  /// The full circle constant (τ = 2π).
  pub const TAU: Self = Self::from_table(table::TAU);

  /// π/2.
  pub const FRAC_PI_2: Self = Self::from_table(table::FRAC_PI_2);

  /// π/4.
  pub const FRAC_PI_4: Self = Self::from_table(table::FRAC_PI_4);

  /// Euler's number (e).
  pub const E: Self = Self::from_table(table::E);

  /// ln(2).
  pub const LN_2: Self = Self::from_table(table::LN_2);

  /// ln(10).
  pub const LN_10: Self = Self::from_table(table::LN_10);

  // The remaining constants are derived from the frozen tables on demand. (Generic associated
  // consts cannot be initialised by non-const arithmetic, and tabling every derived constant for
  // every width buys nothing: each is one division or square root away.)

  /// √2.
  pub fn sqrt_2() -> Self {
    Self::from(2.0).sqrt()
  }

  /// log₂(e) = 1/ln(2).
  pub fn log2_e() -> Self {
    Self::LN_2.recip()
  }

  /// log₁₀(e) = 1/ln(10).
  pub fn log10_e() -> Self {
    Self::LN_10.recip()
  }

  /// 1/π.
  pub fn frac_1_pi() -> Self {
    Self::PI.recip()
  }

  /// 2/√π.
  pub fn frac_2_sqrt_pi() -> Self {
    Self::PI.sqrt().recip().mul_pwr2(2.0)
  }

  /// The golden ratio (φ = (1 + √5)/2).
  pub fn phi() -> Self {
    (Self::ONE + Self::from(5.0).sqrt()).mul_pwr2(0.5)
  }
}
