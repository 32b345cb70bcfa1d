extern crate alloc;

use alloc::string::String;
use core::slice;
use wdk_sys::{GUID, UNICODE_STRING};

/// Field-wise GUID comparison; `IsEqualGUID` is a header macro with no
/// binding in `wdk-sys`.
pub fn guid_eq(a: &GUID, b: &GUID) -> bool {
    a.Data1 == b.Data1 && a.Data2 == b.Data2 && a.Data3 == b.Data3 && a.Data4 == b.Data4
}

/// Convert a `UNICODE_STRING*` to a Rust `String`.
///
/// # Safety
/// `uni` must be a valid, initialised pointer from the kernel.
pub unsafe fn uni_to_string(uni: *const UNICODE_STRING) -> String {
    if uni.is_null() {
        return String::new();
    }
    // SAFETY: caller guarantees pointer validity.
    let u = unsafe { &*uni };
    let len = (u.Length / 2) as usize;
    // SAFETY: buffer points to `len` UTF-16 code units.
    let buf = unsafe { slice::from_raw_parts(u.Buffer, len) };
    String::from_utf16_lossy(buf)
}
