//! Filter device construction and stack attachment.
//!
//! One filter device per matching interface arrival. The splice follows the
//! sequence the I/O manager expects of a WDM filter: create, copy the
//! capability bits, attach, install dispatch, clear the initializing flag.
//! Violating that order is a correctness bug, not a style choice.

use core::{mem, ptr};
use wdk::println;
use wdk_sys::{
    DEVICE_INTERFACE_CHANGE_NOTIFICATION, DO_BUFFERED_IO, DO_DEVICE_INITIALIZING, DO_DIRECT_IO,
    DO_POWER_PAGABLE, DRIVER_OBJECT, FILE_DEVICE_UNKNOWN, NT_SUCCESS, NTSTATUS, PDEVICE_OBJECT,
    PFILE_OBJECT, PVOID, STATUS_SUCCESS, STATUS_UNSUCCESSFUL,
    ntddk::{
        IoAttachDeviceToDeviceStack, IoCreateDevice, IoDeleteDevice, IoGetDeviceObjectPointer,
        ObfDereferenceObject,
    },
};

use crate::consts::{FILE_READ_DATA, GUID_DEVICE_INTERFACE_ARRIVAL};
use crate::dispatch;
use crate::helpers::{guid_eq, uni_to_string};

/// Per-filter device extension. Written once during attachment, read-only
/// afterwards, so no locking is needed.
#[repr(C)]
pub struct FilterExtension {
    /// Device immediately beneath us after the splice. Structural back-link
    /// kept for the stack's sake; never dereferenced for data access.
    pub lower_device: PDEVICE_OBJECT,
}

/// Capability bits that must be consistent across stack members. A filter
/// whose buffering or power bits disagree with the device below can fault
/// the kernel.
pub const CAPABILITY_MASK: u32 = DO_BUFFERED_IO | DO_DIRECT_IO | DO_POWER_PAGABLE;

/// Device-interface change callback. `context` carries the owning driver
/// object, as registered in [`crate::callbacks::ifnotify`].
///
/// Arrivals of the subscribed interface class get a filter spliced above the
/// resolved device; every other event class passes by untouched (filtering
/// is add-only). Resolution and creation failures are soft: the status is
/// returned, that one interface stays unfiltered, and future arrivals are
/// unaffected.
///
/// # Safety
/// Invoked by the PnP manager with a valid
/// `DEVICE_INTERFACE_CHANGE_NOTIFICATION` and the context passed at
/// registration.
pub unsafe extern "C" fn on_interface_change(notification: PVOID, context: PVOID) -> NTSTATUS {
    let notif = notification.cast::<DEVICE_INTERFACE_CHANGE_NOTIFICATION>();

    // SAFETY: the PnP manager hands us a valid notification record.
    if !guid_eq(unsafe { &(*notif).Event }, &GUID_DEVICE_INTERFACE_ARRIVAL) {
        return STATUS_SUCCESS;
    }

    let symlink = unsafe { (*notif).SymbolicLinkName };

    /*──── resolve the target device ────*/

    let mut file_object: PFILE_OBJECT = ptr::null_mut();
    let mut target: PDEVICE_OBJECT = ptr::null_mut();
    // Read access only; we never need more than the lookup.
    let status =
        unsafe { IoGetDeviceObjectPointer(symlink, FILE_READ_DATA, &mut file_object, &mut target) };
    if !NT_SUCCESS(status) {
        // Neither output pointer is valid on failure; nothing to release.
        return status;
    }
    // The file object only served the lookup. Drop the reference now, before
    // anything else can depend on it.
    unsafe { ObfDereferenceObject(file_object.cast()) };

    /*──── create the filter device ────*/

    let mut filter: PDEVICE_OBJECT = ptr::null_mut();
    let status = unsafe {
        IoCreateDevice(
            context.cast::<DRIVER_OBJECT>(),
            mem::size_of::<FilterExtension>() as u32,
            // Anonymous: nothing outside the kernel ever addresses it.
            ptr::null_mut(),
            FILE_DEVICE_UNKNOWN,
            0,
            0u8,
            &mut filter,
        )
    };
    if !NT_SUCCESS(status) {
        return status;
    }

    /*──── copy capabilities, splice, arm ────*/

    unsafe {
        let dev = &mut *filter;
        let tgt = &*target;

        // Must precede the attach: the I/O manager validates stack-wide
        // consistency of these attributes.
        dev.Flags |= tgt.Flags & CAPABILITY_MASK;
        dev.DeviceType = tgt.DeviceType;
        dev.Characteristics = tgt.Characteristics;

        let lower = IoAttachDeviceToDeviceStack(filter, target);
        if lower.is_null() {
            IoDeleteDevice(filter);
            return STATUS_UNSUCCESSFUL;
        }
        (*dev.DeviceExtension.cast::<FilterExtension>()).lower_device = lower;

        dispatch::install_all(dev.DriverObject);

        // Last step: only now may IRPs reach the fully configured filter.
        dev.Flags &= !DO_DEVICE_INITIALIZING;
    }

    println!("hidveil: filter attached above {}", unsafe {
        uni_to_string(symlink)
    });

    STATUS_SUCCESS
}
