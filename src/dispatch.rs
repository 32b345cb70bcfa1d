//! dispatch.rs
//! The single IRP dispatch routine installed for every major function.

use core::ptr;
use wdk_sys::{
    DEVICE_OBJECT, DRIVER_OBJECT, IRP, NTSTATUS,
    ntddk::IofCompleteRequest,
    IO_NO_INCREMENT, STATUS_SUCCESS,
};

/// Terminal handler for every IRP aimed at a filter device.
///
/// Zeroes the system buffer up to the reported transfer length, then
/// completes the request with success and zero bytes transferred. The IRP is
/// never forwarded to the device beneath, so the real device sees no traffic
/// at all. There is no failure path: refusing a request would surface
/// unfiltered device behaviour upward.
///
/// # Safety
/// Invoked by the I/O manager with a valid IRP at IRQL <= DISPATCH_LEVEL.
pub unsafe extern "C" fn intercept(
    _device_object: *mut DEVICE_OBJECT,
    irp: *mut IRP,
) -> NTSTATUS {
    unsafe {
        // Requests without a system buffer (zero-length, METHOD_NEITHER)
        // are completed identically, just without the zero-fill.
        let buffer = (*irp).AssociatedIrp.SystemBuffer;
        if !buffer.is_null() {
            // The reported transfer length is authoritative, not the
            // buffer's allocated size.
            let len = (*irp).IoStatus.Information as usize;
            ptr::write_bytes(buffer.cast::<u8>(), 0, len);
        }

        (*irp).IoStatus.__bindgen_anon_1.Status = STATUS_SUCCESS;
        // Zero tells the I/O manager nothing was transferred.
        (*irp).IoStatus.Information = 0;
        IofCompleteRequest(irp, IO_NO_INCREMENT as i8);
    }
    STATUS_SUCCESS
}

/// Point every major-function slot of `driver` at [`intercept`].
///
/// No request category is treated specially, so the whole table gets the
/// same handler. Idempotent; the attacher runs it once per arrival.
///
/// # Safety
/// `driver` must be the valid driver object owning the filter device.
pub unsafe fn install_all(driver: *mut DRIVER_OBJECT) {
    let drv = unsafe { &mut *driver };
    for slot in drv.MajorFunction.iter_mut() {
        *slot = Some(intercept);
    }
}
