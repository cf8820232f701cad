//! Lossless narrowing of integer values.
//!
//! [`down_cast`] converts a wide integer into a narrower type and treats any
//! loss of information as a bug in the caller: it panics instead of returning
//! a truncated value. Use it only where the surrounding code already
//! guarantees the value fits. [`try_down_cast`] performs the same check but
//! hands the failure back to the caller.
//!
//! Conversions go through [`TryFrom`], which for the primitive integer types
//! succeeds exactly when widening the result back reproduces the original
//! value. This also covers signed/unsigned pairs of any width, e.g. `-1i64`
//! never narrows to `u8`, and `u64::MAX` never narrows to `i64`.

use alloc::string::ToString;
use core::fmt::Display;

use crate::error::CastError;

/// Narrows `large` into `Small`, panicking if the value does not fit.
///
/// # Panics
///
/// Panics if `large` is not exactly representable as `Small`. The panic is
/// attributed to the caller's location. Built with `panic = "abort"`, this
/// terminates the process.
///
/// # Examples
///
/// ```rust
/// use dlog_common::down_cast;
///
/// let len: u64 = 300;
/// let small: u16 = down_cast(len);
/// assert_eq!(small, 300);
///
/// let delta: i32 = down_cast(-7i64);
/// assert_eq!(delta, -7);
/// ```
///
/// ```rust,should_panic
/// use dlog_common::down_cast;
///
/// let _: u8 = down_cast(256u32);
/// ```
#[track_caller]
#[must_use]
pub fn down_cast<Small, Large>(large: Large) -> Small
where
    Small: TryFrom<Large>,
    Large: Copy + Display,
{
    match Small::try_from(large) {
        Ok(small) => small,
        Err(_) => lost_precision::<Small>(&large),
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn lost_precision<Small>(large: &dyn Display) -> ! {
    let target = core::any::type_name::<Small>();
    log::error!("down_cast: {large} does not fit in {target}");
    panic!("down_cast: {large} does not fit in {target}")
}

/// Narrows `large` into `Small`, returning an error if the value does not
/// fit.
///
/// # Errors
///
/// Returns [`CastError`] carrying the rejected value and the target type
/// name when `large` is not exactly representable as `Small`.
///
/// ```rust
/// use dlog_common::try_down_cast;
///
/// assert_eq!(try_down_cast::<u8, i32>(200), Ok(200u8));
///
/// let err = try_down_cast::<u8, i32>(-1).unwrap_err();
/// assert_eq!(err.value(), "-1");
/// assert_eq!(err.target(), "u8");
/// ```
pub fn try_down_cast<Small, Large>(large: Large) -> Result<Small, CastError>
where
    Small: TryFrom<Large>,
    Large: Copy + Display,
{
    Small::try_from(large).map_err(|_| CastError {
        value: large.to_string(),
        target: core::any::type_name::<Small>(),
    })
}

/// Returns `size_of::<T>()` as a `u32`.
///
/// # Panics
///
/// Panics if the size of `T` exceeds `u32::MAX`.
#[track_caller]
#[must_use]
pub fn size_of_u32<T>() -> u32 {
    down_cast(core::mem::size_of::<T>())
}

/// Returns `size_of_val(value)` as a `u32`.
///
/// # Panics
///
/// Panics if the size of `value` exceeds `u32::MAX`.
#[track_caller]
#[must_use]
pub fn size_of_val_u32<T: ?Sized>(value: &T) -> u32 {
    down_cast(core::mem::size_of_val(value))
}
