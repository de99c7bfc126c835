/*
 * This file is part of Zmqcat.
 *
 * Copyright © 2017 Riley Trautman
 *
 * Zmqcat is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Zmqcat is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Zmqcat.  If not, see <http://www.gnu.org/licenses/>.
 */

//! The error type shared by every stage of a transfer.

use std::io::Error as IoError;

use thiserror::Error;
use zmq::Error as ZmqError;

/// Exit status for bad invocations.
pub const USAGE_EXIT_CODE: i32 = 254;

/// Exit status for socket and stream failures.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, Error)]
pub enum Error {
    /// Anything libzmq reported: socket creation, bind, connect, send, recv, term.
    #[error("{0}")]
    Zmq(#[from] ZmqError),

    /// Reading stdin or writing stdout failed.
    #[error("{0}")]
    Io(#[from] IoError),

    #[error("unknown socket type '{0}', expected one of PUSH, PULL, REQ, REP, PUB, SUB")]
    UnknownSocketType(String),
}

impl Error {
    /// The raw error number behind this error, if there is one.
    pub fn errno(&self) -> Option<i32> {
        match *self {
            Error::Zmq(ref e) => Some(e.to_raw()),
            Error::Io(ref e) => e.raw_os_error(),
            Error::UnknownSocketType(_) => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match *self {
            Error::UnknownSocketType(_) => USAGE_EXIT_CODE,
            _ => FAILURE_EXIT_CODE,
        }
    }

    /// Render the error the way it is printed on stderr before exiting.
    pub fn report(&self) -> String {
        match self.errno() {
            Some(errno) => format!("error {}: {}", errno, self),
            None => format!("error: {}", self),
        }
    }
}
