//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the ttyinfo project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::ffi::{CStr, CString};
use std::io;
use std::os::unix::io::RawFd;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::Mutex;

/// ptsname() returns a static buffer
static PTY_LOCK: Mutex<()> = Mutex::new(());

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Locate a workspace binary built for the current profile.
///
/// Integration tests run from the package directory, so the workspace
/// root is one level up.
pub fn bin_path(cmd: &str) -> PathBuf {
    let relpath = if cfg!(debug_assertions) {
        format!("target/debug/{}", cmd)
    } else {
        format!("target/release/{}", cmd)
    };

    std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap()
        .join(relpath)
}

/// Run a command with stdout and stderr captured through pipes.
///
/// Stdin is `/dev/null`; none of the tested commands read it. The C locale
/// keeps system error strings stable.
pub fn run_test_base(cmd: &str, args: &Vec<String>) -> Output {
    Command::new(bin_path(cmd))
        .args(args)
        .env("LC_ALL", "C")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap_or_else(|_| panic!("failed to run command {cmd}"))
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args);
    checker(&plan, &output);
}

/// A pseudo-terminal pair with the slave side held open.
///
/// Neither end becomes the controlling terminal of the test process. Both
/// descriptors are closed on drop.
pub struct Pty {
    pub master: RawFd,
    pub slave: RawFd,
    pub slave_path: String,
}

impl Pty {
    pub fn open() -> io::Result<Pty> {
        let _guard = PTY_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        unsafe {
            let master = libc::posix_openpt(libc::O_RDWR | libc::O_NOCTTY);
            if master < 0 {
                return Err(io::Error::last_os_error());
            }

            if libc::grantpt(master) < 0 || libc::unlockpt(master) < 0 {
                let err = io::Error::last_os_error();
                libc::close(master);
                return Err(err);
            }

            let name = libc::ptsname(master);
            if name.is_null() {
                let err = io::Error::last_os_error();
                libc::close(master);
                return Err(err);
            }
            let slave_path = CStr::from_ptr(name).to_string_lossy().into_owned();

            let c_path = CString::new(slave_path.as_str()).unwrap();
            let slave = libc::open(c_path.as_ptr(), libc::O_RDWR | libc::O_NOCTTY);
            if slave < 0 {
                let err = io::Error::last_os_error();
                libc::close(master);
                return Err(err);
            }

            Ok(Pty {
                master,
                slave,
                slave_path,
            })
        }
    }

    pub fn set_window_size(&self, rows: u16, cols: u16) -> io::Result<()> {
        let ws = libc::winsize {
            ws_row: rows,
            ws_col: cols,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };

        let ret =
            unsafe { libc::ioctl(self.slave, libc::TIOCSWINSZ, &ws as *const libc::winsize) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

impl Drop for Pty {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.slave);
            libc::close(self.master);
        }
    }
}
