//! Error-free transformations: the primitive kernels every cascade operation is built from.
//!
//! Each transform computes a native floating-point operation *and* its exact rounding error, as a
//! `(result, error)` pair of doubles. As long as no intermediate overflows, the identities
//! `a + b == s + e` and `a * b == p + e` hold *exactly*; this is what lets an N-limb cascade
//! carry `53·N` significant bits through hardware double arithmetic.

/// Sum `a + b` as `(s, e)` with `s = fl(a + b)` and `e` the exact rounding error.
///
/// Knuth's branch-free version: 6 flops, no precondition on the magnitudes of `a` and `b`.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  // `bb` is the part of `b` that made it into `s`; `a - (s - bb)` and `b - bb` are then both
  // exact, and their sum is the error.
  let bb = s - a;
  let e = (a - (s - bb)) + (b - bb);
  (s, e)
}

/// Sum `a + b` as `(s, e)`, like [two_sum], in 3 flops.
///
/// Dekker's version, only valid if `|a| >= |b|` (or either argument is zero or non-finite).
#[inline]
pub(crate) fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
  debug_assert!(
    a == 0. || b == 0. || !a.is_finite() || !b.is_finite() || a.abs() >= b.abs(),
    "quick_two_sum precondition: |{a}| >= |{b}|",
  );
  let s = a + b;
  let e = b - (s - a);
  (s, e)
}

/// Product `a * b` as `(p, e)` with `p = fl(a * b)` and `e` the exact rounding error.
///
/// Uses a fused multiply-add for the residual; on targets without hardware FMA this lowers to a
/// (slow but correct) soft implementation.
#[inline]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
  let p = a * b;
  let e = a.mul_add(b, -p);
  (p, e)
}

/// Square `a * a` as `(p, e)`, like [two_prod].
#[inline]
pub(crate) fn two_sqr(a: f64) -> (f64, f64) {
  let p = a * a;
  let e = a.mul_add(a, -p);
  (p, e)
}

/// Unit in the last place of `x`: the gap between `|x|` and the next representable double up.
/// Returns a subnormal gap for subnormal `x`, and propagates NaN/∞.
#[inline]
pub(crate) fn ulp(x: f64) -> f64 {
  // Strip the significand, keep the exponent, scale down by 2^-52.
  f64::from_bits(x.to_bits() & 0x7ff0_0000_0000_0000) * f64::EPSILON
}

/// Exactly 2^k, for `-1022 <= k <= 1023`.
#[inline]
pub(crate) const fn pow2(k: i32) -> f64 {
  debug_assert!(-1022 <= k && k <= 1023);
  f64::from_bits(((1023 + k) as u64) << 52)
}

/// `x * 2^k`, scaling in two steps so the scale factor itself stays representable even for
/// `|k| > 1023` (needed when recombining `exp` results whose significand is below 1).
#[inline]
pub(crate) fn ldexp(x: f64, k: i32) -> f64 {
  let k = k.clamp(-2044, 2046);
  let half = k / 2;
  x * pow2(half) * pow2(k - half)
}
