use super::*;

use core::cmp::Ordering;

// Because limbs are non-overlapping and ordered, comparison is lexicographic on the limbs; the
// first differing limb decides. NaN poisons everything, exactly as for f64.

impl<const N: usize> PartialEq for Cascade<N> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl<const N: usize> PartialOrd for Cascade<N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    for i in 0..N {
      match self.0[i].partial_cmp(&other.0[i]) {
        Some(Ordering::Equal) => continue,
        other => return other,
      }
    }
    Some(Ordering::Equal)
  }
}

impl<const N: usize> PartialEq<f64> for Cascade<N> {
  #[inline]
  fn eq(&self, other: &f64) -> bool {
    *self == Self::from(*other)
  }
}

impl<const N: usize> PartialEq<Cascade<N>> for f64 {
  #[inline]
  fn eq(&self, other: &Cascade<N>) -> bool {
    Cascade::from(*self) == *other
  }
}

impl<const N: usize> PartialOrd<f64> for Cascade<N> {
  #[inline]
  fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
    self.partial_cmp(&Self::from(*other))
  }
}

impl<const N: usize> PartialOrd<Cascade<N>> for f64 {
  #[inline]
  fn partial_cmp(&self, other: &Cascade<N>) -> Option<Ordering> {
    Cascade::from(*self).partial_cmp(other)
  }
}
