//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the ttyinfo project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Read-only queries against a terminal file descriptor.

use crate::platform::P_WINSIZE_REQUEST_CODE;
use std::ffi::OsStr;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::io::RawFd;
use std::path::PathBuf;

/// Initial buffer size for `ttyname_r`; grown on `ERANGE`.
const TTYNAME_BUFSZ: usize = 128;

/// Terminal display size at the moment of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinSize {
    pub rows: u16,
    pub cols: u16,
}

/// Query the window size of the terminal open on `fd`.
///
/// Fails with `ENOTTY` when `fd` is not a terminal.
pub fn window_size(fd: RawFd) -> io::Result<WinSize> {
    let mut winsize: MaybeUninit<libc::winsize> = MaybeUninit::zeroed();

    let ret = unsafe { libc::ioctl(fd, P_WINSIZE_REQUEST_CODE, winsize.as_mut_ptr()) };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    let winsize = unsafe { winsize.assume_init() };
    Ok(WinSize {
        rows: winsize.ws_row,
        cols: winsize.ws_col,
    })
}

/// Resolve the path of the terminal special file open on `fd`.
pub fn tty_path(fd: RawFd) -> io::Result<PathBuf> {
    let mut buf: Vec<u8> = vec![0; TTYNAME_BUFSZ];

    loop {
        // ttyname_r reports failure through its return value, not errno
        let ret =
            unsafe { libc::ttyname_r(fd, buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
        match ret {
            0 => break,
            libc::ERANGE => {
                let len = buf.len() * 2;
                buf.resize(len, 0);
            }
            errnum => return Err(io::Error::from_raw_os_error(errnum)),
        }
    }

    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(len);

    Ok(PathBuf::from(OsStr::from_bytes(&buf)))
}
