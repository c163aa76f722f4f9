//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the ttyinfo project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

// ioctl() takes its request as c_int on musl and c_ulong everywhere else
cfg_if::cfg_if! {
    if #[cfg(target_env = "musl")] {
        type LocalPIoctlOp = libc::c_int;
    } else {
        type LocalPIoctlOp = libc::c_ulong;
    }
}

// TIOCGWINSZ per platform
pub(crate) const P_WINSIZE_REQUEST_CODE: LocalPIoctlOp = ({
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        0x5413
    }

    #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd"
    ))]
    {
        0x40087468
    }

    #[cfg(target_os = "solaris")]
    {
        0x5468
    }
}) as LocalPIoctlOp;
