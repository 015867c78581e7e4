//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{dd, td, qd};

pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
  crate::eft::two_sum(a, b)
}

pub fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
  crate::eft::quick_two_sum(a, b)
}

pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
  crate::eft::two_prod(a, b)
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn add_dd(x: dd, y: dd) -> dd {
  x + y
}

#[unsafe(no_mangle)]
pub fn add_td(x: td, y: td) -> td {
  x + y
}

#[unsafe(no_mangle)]
pub fn add_qd(x: qd, y: qd) -> qd {
  x + y
}

#[unsafe(no_mangle)]
pub fn mul_dd(x: dd, y: dd) -> dd {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_td(x: td, y: td) -> td {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_qd(x: qd, y: qd) -> qd {
  x * y
}

#[unsafe(no_mangle)]
pub fn div_dd(x: dd, y: dd) -> dd {
  x / y
}

#[unsafe(no_mangle)]
pub fn div_qd(x: qd, y: qd) -> qd {
  x / y
}

#[unsafe(no_mangle)]
pub fn sqr_qd(x: qd) -> qd {
  x.sqr()
}

#[unsafe(no_mangle)]
pub fn sqrt_dd(x: dd) -> dd {
  x.sqrt()
}

#[unsafe(no_mangle)]
pub fn sqrt_qd(x: qd) -> qd {
  x.sqrt()
}
