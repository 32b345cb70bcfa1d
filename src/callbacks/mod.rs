//! Plug-and-play notification callbacks.
//!
//! The driver's single system callback: device-interface change events
//! scoped to the HID interface class. Registered in `DriverEntry`,
//! unregistered in the unload routine.

pub mod ifnotify;
