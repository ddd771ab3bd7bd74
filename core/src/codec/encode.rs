//! codec/encode.rs
//!
//! Scalar and text to header-value bytes.
//!
//! Design notes:
//! - Integers are written little-endian with trailing zero bytes removed.
//!   A zero value keeps a single `00` so a present header never has length 0.
//! - Floats are written as their full little-endian IEEE-754 bytes. Trimming
//!   would change the value.
//! - Text is passed through untouched.
//! - Only the types below implement `HeaderValue`; anything else is a
//!   compile error at the call site.

mod sealed {
    pub trait Sealed {}
}

/// A value that can be stored in a header record.
pub trait HeaderValue: sealed::Sealed {
    /// Minimal wire bytes for this value.
    fn to_header_bytes(&self) -> Vec<u8>;
}

/// Drop trailing zero bytes, keeping at least one byte.
#[inline]
pub fn trim_trailing_zeros(mut bytes: Vec<u8>) -> Vec<u8> {
    while bytes.len() > 1 && bytes.last() == Some(&0) {
        bytes.pop();
    }
    if bytes.is_empty() {
        bytes.push(0);
    }
    bytes
}

/// Encode any supported header value.
#[inline]
pub fn encode_value<V: HeaderValue + ?Sized>(value: &V) -> Vec<u8> {
    value.to_header_bytes()
}

macro_rules! impl_integer_value {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}
        impl HeaderValue for $t {
            #[inline]
            fn to_header_bytes(&self) -> Vec<u8> {
                trim_trailing_zeros(self.to_le_bytes().to_vec())
            }
        }
    )*};
}

macro_rules! impl_float_value {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}
        impl HeaderValue for $t {
            #[inline]
            fn to_header_bytes(&self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }
        }
    )*};
}

impl_integer_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_float_value!(f32, f64);

impl sealed::Sealed for bool {}
impl HeaderValue for bool {
    #[inline]
    fn to_header_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }
}

impl sealed::Sealed for str {}
impl HeaderValue for str {
    #[inline]
    fn to_header_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl sealed::Sealed for String {}
impl HeaderValue for String {
    #[inline]
    fn to_header_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl<T: HeaderValue + ?Sized> sealed::Sealed for &T {}
impl<T: HeaderValue + ?Sized> HeaderValue for &T {
    #[inline]
    fn to_header_bytes(&self) -> Vec<u8> {
        (**self).to_header_bytes()
    }
}
