//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the ttyinfo project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

mod error;

use std::ffi::OsString;
use std::io::{self, Write};
use std::os::unix::io::RawFd;
use std::path::Path;
use std::process;

use clap::Parser;
use error::QueryError;
use gettextrs::{bind_textdomain_codeset, setlocale, textdomain, LocaleCategory};
use plib::terminal::{tty_path, window_size};
use plib::PROJECT_NAME;
use termios::Termios;

/// ttyinfo - report the size, modes and device of the terminal on standard output
#[derive(Parser, Default)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Accepted and ignored.
    #[allow(dead_code)]
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    operands: Vec<OsString>,
}

/// Input and output processing flags, widened to unsigned long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ModeFlags {
    input: libc::c_ulong,
    output: libc::c_ulong,
}

fn mode_flags(fd: RawFd) -> io::Result<ModeFlags> {
    let ti = Termios::from_fd(fd)?;

    Ok(ModeFlags {
        input: ti.c_iflag as libc::c_ulong,
        output: ti.c_oflag as libc::c_ulong,
    })
}

/// Query the terminal on `fd` and write one line per result to `out`.
///
/// Stops at the first failed query. A result line that cannot be written
/// counts as a failure of the query that produced it.
fn inspect<W: Write>(fd: RawFd, out: &mut W) -> Result<(), QueryError> {
    let ws = window_size(fd).map_err(QueryError::WindowSize)?;
    writeln!(out, "Rows: {}, Cols: {}", ws.rows, ws.cols).map_err(QueryError::WindowSize)?;

    let flags = mode_flags(fd).map_err(QueryError::ModeFlags)?;
    writeln!(
        out,
        "Input flags: {}, Output flags: {}",
        flags.input, flags.output
    )
    .map_err(QueryError::ModeFlags)?;

    let path = tty_path(fd).map_err(QueryError::DevicePath)?;
    writeln!(out, "tty: {}", path.display()).map_err(QueryError::DevicePath)?;

    Ok(())
}

fn program_name() -> String {
    let arg0 = std::env::args_os().next();

    arg0.as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(PROJECT_NAME))
}

fn main() {
    // operands are never interpreted, so a command line clap rejects is no different
    let _args = Args::try_parse().unwrap_or_default();

    setlocale(LocaleCategory::LcAll, "");
    // untranslated messages are still usable
    textdomain(PROJECT_NAME).ok();
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8").ok();

    let mut stdout = io::stdout().lock();
    let res = inspect(libc::STDOUT_FILENO, &mut stdout);
    drop(stdout);

    if let Err(err) = res {
        eprintln!("{}: {}", program_name(), err);
        process::exit(err.exit_code());
    }
}
