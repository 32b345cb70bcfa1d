//! HID input-suppression WDM filter driver.
//!
//! For every human-input device interface that comes online, a filter
//! device is spliced directly above the real device in its stack, and every
//! IRP routed toward that device is completed locally with success and an
//! empty payload. Upper layers see a device that works but never produces
//! data; the device itself sees no traffic at all.
//!
//! There is no user-mode surface, no configuration and no persisted state:
//! the driver is unconditionally active on every matching interface from
//! load to unload.

#![no_std]

extern crate alloc;
#[cfg(not(test))]
extern crate wdk_panic;

use wdk::println;
use wdk_alloc::WdkAllocator;
use wdk_sys::{DRIVER_OBJECT, NTSTATUS, PCUNICODE_STRING, STATUS_SUCCESS};

mod callbacks;
mod consts;
mod dispatch;
mod filter;
mod helpers;

use callbacks::ifnotify;

/*------------ allocator -------------------------------*/

#[cfg(not(test))]
#[global_allocator]
static GLOBAL: WdkAllocator = WdkAllocator;

/*------------ DriverEntry -----------------------------*/

#[unsafe(export_name = "DriverEntry")]
pub extern "system" fn driver_entry(
    driver: *mut DRIVER_OBJECT,
    _registry_path: PCUNICODE_STRING,
) -> NTSTATUS {
    println!("hidveil loading…");

    // The subscription is the driver's whole reason to exist; a failure
    // here is fatal and surfaces unchanged to the loader.
    if let Err(st) = ifnotify::register(driver) {
        println!("hidveil: notification registration failed: {st:#010X}");
        return st;
    }

    unsafe { (*driver).DriverUnload = Some(driver_exit) };

    println!("hidveil loaded");
    STATUS_SUCCESS
}

/*------------ unload ----------------------------------*/

extern "C" fn driver_exit(_driver: *mut DRIVER_OBJECT) {
    // Stops new arrivals from being filtered. Filters already attached have
    // no teardown path; they live until the stacks they sit in go away.
    unsafe {
        ifnotify::unregister().ok();
    }
    println!("hidveil unloaded");
}
