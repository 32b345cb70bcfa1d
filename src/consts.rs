//! Assorted WDK constants missing in `wdk-sys`.

use wdk_sys::{ACCESS_MASK, GUID};

/*────────── device interface GUIDs ─────────*/

/// Interface class for human-input devices, `GUID_DEVINTERFACE_HID`.
/// {4D1E55B2-F16F-11CF-88CB-001111000030}
pub const GUID_DEVINTERFACE_HID: GUID = GUID {
    Data1: 0x4D1E_55B2u32,
    Data2: 0xF16Fu16,
    Data3: 0x11CFu16,
    Data4: [
        0x88u8, 0xCBu8, 0x00u8, 0x11u8, 0x11u8, 0x00u8, 0x00u8, 0x30u8,
    ],
};

/// Event class reported when an interface instance comes online.
/// {CB3A4004-46F0-11D0-B08F-00609713053F}
pub const GUID_DEVICE_INTERFACE_ARRIVAL: GUID = GUID {
    Data1: 0xCB3A_4004u32,
    Data2: 0x46F0u16,
    Data3: 0x11D0u16,
    Data4: [
        0xB0u8, 0x8Fu8, 0x00u8, 0x60u8, 0x97u8, 0x13u8, 0x05u8, 0x3Fu8,
    ],
};

/*────────── access rights ─────────*/

/* `FILE_READ_DATA` is a C macro the bindings do not surface. */
pub const FILE_READ_DATA: ACCESS_MASK = 0x0001;
