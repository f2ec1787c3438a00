//! Safe byte-slice conversion for GPU vertex uploads.

/// View a `#[repr(C)]` value as raw bytes for `glBufferData`.
///
/// # Safety
///
/// Only implement on `#[repr(C)]` types whose fields are all plain numeric
/// types (f32, i32, u32, etc.) with no pointers, references, or padding.
///
/// # Example
///
/// ```rust,ignore
/// #[repr(C)]
/// struct Vertex {
///     position: [f32; 2],
/// }
///
/// unsafe impl AsBytes for Vertex {}
///
/// let bytes = [Vertex { position: [0.0, 1.0] }; 3].as_bytes();
/// ```
pub unsafe trait AsBytes: Sized {
    /// View `self` as a byte slice. The returned slice has length
    /// `std::mem::size_of::<Self>()`.
    fn as_bytes(&self) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(self as *const Self as *const u8, std::mem::size_of::<Self>())
        }
    }
}

// SAFETY: arrays of padding-free elements are laid out contiguously with no
// padding between elements.
unsafe impl<T: AsBytes, const N: usize> AsBytes for [T; N] {}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    struct Pair {
        a: f32,
        b: u32,
    }

    unsafe impl AsBytes for Pair {}

    #[test]
    fn struct_bytes_follow_field_order() {
        let pair = Pair { a: 1.0, b: 7 };
        let bytes = pair.as_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..], &7u32.to_ne_bytes());
    }

    #[test]
    fn array_bytes_are_contiguous() {
        let pairs = [Pair { a: 0.5, b: 1 }, Pair { a: 2.0, b: 3 }];
        let bytes = pairs.as_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[8..12], &2.0f32.to_ne_bytes());
    }
}
