use core::fmt::Display;

mod sealed {
    pub trait Sealed {}
}

/// Ordered integer types accepted by
/// [`is_number_between`](crate::checks::is_number_between).
///
/// Covers every signed and unsigned width, including the pointer-sized
/// ones. The trait is sealed.
pub trait Integer: Copy + Ord + Display + sealed::Sealed {}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Integer for $ty {}
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
