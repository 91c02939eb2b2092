// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.

pub use approx::assert_abs_diff_eq;
