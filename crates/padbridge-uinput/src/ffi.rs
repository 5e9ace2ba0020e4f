//! Minimal `linux/uinput.h` bindings.

use std::io;
use std::os::fd::RawFd;

pub(crate) const UINPUT_MAX_NAME_SIZE: usize = 80;
pub(crate) const BUS_USB: u16 = 0x03;

const UINPUT_IOCTL_BASE: u32 = b'U' as u32;
const IOC_WRITE: u32 = 1;

const fn io(nr: u32) -> u32 {
    (UINPUT_IOCTL_BASE << 8) | nr
}

const fn iow(nr: u32, size: usize) -> u32 {
    (IOC_WRITE << 30) | ((size as u32) << 16) | (UINPUT_IOCTL_BASE << 8) | nr
}

pub(crate) const UI_DEV_CREATE: u32 = io(1);
pub(crate) const UI_DEV_DESTROY: u32 = io(2);
pub(crate) const UI_DEV_SETUP: u32 = iow(3, std::mem::size_of::<UinputSetup>());
pub(crate) const UI_ABS_SETUP: u32 = iow(4, std::mem::size_of::<UinputAbsSetup>());
pub(crate) const UI_SET_EVBIT: u32 = iow(100, std::mem::size_of::<libc::c_int>());
pub(crate) const UI_SET_KEYBIT: u32 = iow(101, std::mem::size_of::<libc::c_int>());
pub(crate) const UI_SET_ABSBIT: u32 = iow(103, std::mem::size_of::<libc::c_int>());

#[repr(C)]
pub(crate) struct UinputSetup {
    pub(crate) id: libc::input_id,
    pub(crate) name: [libc::c_char; UINPUT_MAX_NAME_SIZE],
    pub(crate) ff_effects_max: u32,
}

#[repr(C)]
pub(crate) struct UinputAbsSetup {
    pub(crate) code: u16,
    pub(crate) absinfo: libc::input_absinfo,
}

fn check(ret: libc::c_int) -> io::Result<()> {
    if ret < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

/// Ioctl taking an integer argument.
pub(crate) fn ioctl_int(fd: RawFd, request: u32, value: libc::c_int) -> io::Result<()> {
    // SAFETY: the request takes its argument by value.
    check(unsafe { libc::ioctl(fd, request as _, value) })
}

/// Ioctl without an argument.
pub(crate) fn ioctl_none(fd: RawFd, request: u32) -> io::Result<()> {
    // SAFETY: the request takes no argument.
    check(unsafe { libc::ioctl(fd, request as _) })
}

/// Ioctl reading a `T` from userspace.
pub(crate) fn ioctl_ptr<T>(fd: RawFd, request: u32, value: &T) -> io::Result<()> {
    // SAFETY: `request` encodes `size_of::<T>()` and the kernel only reads from
    // the pointer for the duration of the call.
    check(unsafe { libc::ioctl(fd, request as _, std::ptr::from_ref(value)) })
}

/// Raw bytes of a kernel `input_event`.
pub(crate) fn event_bytes(kind: u16, code: u16, value: i32) -> [u8; std::mem::size_of::<libc::input_event>()] {
    let event = libc::input_event {
        time: libc::timeval {
            tv_sec: 0,
            tv_usec: 0,
        },
        type_: kind,
        code,
        value,
    };
    // SAFETY: input_event is plain old data without padding between fields
    // that the kernel would interpret.
    unsafe { std::mem::transmute(event) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_sizes_match_kernel_abi() {
        assert_eq!(std::mem::size_of::<UinputSetup>(), 92);
        assert_eq!(std::mem::size_of::<UinputAbsSetup>(), 28);
    }

    #[test]
    fn request_numbers() {
        assert_eq!(UI_DEV_CREATE, 0x5501);
        assert_eq!(UI_DEV_DESTROY, 0x5502);
        assert_eq!(UI_DEV_SETUP, 0x405c_5503);
        assert_eq!(UI_ABS_SETUP, 0x401c_5504);
        assert_eq!(UI_SET_EVBIT, 0x4004_5564);
        assert_eq!(UI_SET_KEYBIT, 0x4004_5565);
        assert_eq!(UI_SET_ABSBIT, 0x4004_5567);
    }

    #[test]
    fn event_bytes_carry_type_code_value() {
        let bytes = event_bytes(3, 0x11, -1);
        let tail = &bytes[bytes.len() - 8..];
        assert_eq!(&tail[0..2], &3u16.to_ne_bytes());
        assert_eq!(&tail[2..4], &0x11u16.to_ne_bytes());
        assert_eq!(&tail[4..8], &(-1i32).to_ne_bytes());
    }
}
