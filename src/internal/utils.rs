use std::ffi::{CStr, CString, c_char};

use crate::error::{Error, Result};

/// Decodes a NUL-terminated fixed buffer. A buffer filled to the end without a
/// terminator is read in full.
pub(crate) fn read_fixed(buf: &[c_char]) -> String {
    // SAFETY: c_char and u8 share size and alignment.
    let bytes: &[u8] = unsafe { std::slice::from_raw_parts(buf.as_ptr().cast(), buf.len()) };
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Encodes `value` into a fixed buffer, leaving room for the terminator.
pub(crate) fn write_fixed(buf: &mut [c_char], value: &str, field: &'static str) -> Result<()> {
    let value = CString::new(value)?;
    let bytes = value.as_bytes_with_nul();
    if bytes.len() > buf.len() {
        return Err(Error::TextTooLong {
            field,
            max: buf.len() - 1,
        });
    }
    for (dst, &src) in buf.iter_mut().zip(bytes) {
        *dst = src as c_char;
    }
    buf[bytes.len()..].fill(0);
    Ok(())
}

/// Copies a borrowed C string handed over by the SDK.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string valid for the call.
pub(crate) unsafe fn read_cstring(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Copies a borrowed byte buffer handed over by the SDK.
///
/// # Safety
///
/// `data` must be null or valid for `len` bytes for the duration of the call.
pub(crate) unsafe fn read_bytes(data: *const u8, len: u32) -> Vec<u8> {
    if data.is_null() || len == 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(data, len as usize) }.to_vec()
}

pub(crate) fn buffer_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::PayloadTooLarge(len))
}
