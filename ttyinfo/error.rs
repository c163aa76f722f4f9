//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the ttyinfo project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Error types for the terminal queries.

use std::fmt;
use std::io;

/// A failed terminal query. Each variant maps to its own exit status.
#[derive(Debug)]
pub enum QueryError {
    /// Window size ioctl failed
    WindowSize(io::Error),
    /// tcgetattr failed
    ModeFlags(io::Error),
    /// Device name could not be resolved
    DevicePath(io::Error),
}

impl QueryError {
    pub fn exit_code(&self) -> i32 {
        match self {
            QueryError::WindowSize(_) => 1,
            QueryError::ModeFlags(_) => 2,
            QueryError::DevicePath(_) => 3,
        }
    }

    /// Name of the failing system call, as shown in diagnostics.
    pub fn operation(&self) -> &'static str {
        match self {
            QueryError::WindowSize(_) => "ioctl",
            QueryError::ModeFlags(_) => "tcgetattr",
            QueryError::DevicePath(_) => "ttyname",
        }
    }

    fn io_error(&self) -> &io::Error {
        match self {
            QueryError::WindowSize(e) | QueryError::ModeFlags(e) | QueryError::DevicePath(e) => e,
        }
    }
}

// Bare strerror() text, without io::Error's "(os error N)" suffix.
fn reason(e: &io::Error) -> String {
    match e.raw_os_error() {
        Some(code) => errno::Errno(code).to_string(),
        None => e.to_string(),
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation(), reason(self.io_error()))
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}
