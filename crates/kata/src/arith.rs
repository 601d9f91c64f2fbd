use core::ops::Add;

mod private {
    pub trait Sealed {}
}

/// Numeric types accepted by [`add_two_numbers`].
///
/// This trait is sealed: it covers the common floating and signed integer
/// primitives and cannot be implemented outside this crate.
pub trait Number: private::Sealed + Add<Output = Self> + Copy {}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl Number for $ty {}
        )*
    };
}

impl_number!(f32, f64, i32, i64, isize);

/// Returns the sum of `x` and `y`.
///
/// # Example
///
/// ```
/// use kata::add_two_numbers;
///
/// assert_eq!(add_two_numbers(3, 6), 9);
/// assert!((add_two_numbers(0.2_f64, 0.1) - 0.3).abs() < 1e-6);
/// ```
pub fn add_two_numbers<T: Number>(x: T, y: T) -> T {
    x + y
}
