//! Device-interface arrival subscription → [`crate::filter::on_interface_change`]
//!
//! Registers process-wide interest in interface-change events for the HID
//! interface class. The PnP manager then invokes the filter attacher once
//! per event, on a kernel-selected thread. Without this registration no
//! filtering ever happens, so a failure here is fatal to the driver's
//! purpose and is propagated unchanged out of `DriverEntry`.

use core::{
    ffi::c_void,
    ptr,
    sync::atomic::{AtomicPtr, Ordering},
};

use wdk_sys::{
    _IO_NOTIFICATION_EVENT_CATEGORY, DRIVER_OBJECT, GUID, NTSTATUS, PVOID, STATUS_SUCCESS,
    ntddk::{IoRegisterPlugPlayNotification, IoUnregisterPlugPlayNotification},
};

use crate::consts::GUID_DEVINTERFACE_HID;
use crate::filter;

/// Opaque registration handle (written once in [`register`], consumed by
/// [`unregister`]).
static NOTIFICATION_ENTRY: AtomicPtr<c_void> = AtomicPtr::new(ptr::null_mut());

/// Install the subscription.
///
/// The driver object serves twice: as the registering driver and as the
/// callback context, because the attacher needs it to create filter devices.
/// Call exactly once during driver initialisation.
pub fn register(driver: *mut DRIVER_OBJECT) -> Result<(), NTSTATUS> {
    let mut entry: PVOID = ptr::null_mut();
    // SAFETY: parameters match the WDK prototype; `entry` receives the
    // registration handle on success.
    let st = unsafe {
        IoRegisterPlugPlayNotification(
            _IO_NOTIFICATION_EVENT_CATEGORY::EventCategoryDeviceInterfaceChange,
            0,
            &GUID_DEVINTERFACE_HID as *const GUID as PVOID,
            driver,
            Some(filter::on_interface_change),
            driver.cast(),
            &mut entry,
        )
    };
    if st == STATUS_SUCCESS {
        NOTIFICATION_ENTRY.store(entry, Ordering::Release);
        Ok(())
    } else {
        Err(st)
    }
}

/// Remove the subscription (mirror of [`register`]).
///
/// Already-attached filters stay in place; this only stops new arrivals
/// from being filtered.
///
/// # Safety
/// Call once during driver unload.
pub unsafe fn unregister() -> Result<(), NTSTATUS> {
    let entry = NOTIFICATION_ENTRY.swap(ptr::null_mut(), Ordering::AcqRel);
    if entry.is_null() {
        return Ok(());
    }
    // SAFETY: `entry` came from a successful registration and is consumed
    // exactly once.
    let st = unsafe { IoUnregisterPlugPlayNotification(entry) };
    if st == STATUS_SUCCESS { Ok(()) } else { Err(st) }
}
