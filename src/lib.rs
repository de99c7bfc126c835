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

//! Zmqcat connects stdin and stdout to a single ZeroMQ socket.
//!
//! Sending sockets read their input to the end and send it as one message. Receiving sockets
//! wait for one message, possibly made of several parts, and write it out. REQ sends then
//! receives, REP receives then sends.

#[macro_use]
extern crate log;

pub mod buffer;
pub mod cli;
pub mod error;
pub mod message;
pub mod socket;
pub mod transfer;

pub use crate::buffer::{ChunkedBuffer, SEND_BUFFER_SIZE};
pub use crate::cli::{Cli, Config};
pub use crate::error::Error;
pub use crate::message::Multipart;
pub use crate::socket::{SockConfig, Socket, SocketBuilder, SocketKind};
pub use crate::transfer::{Report, Transfer};

use std::io::{Read, Write};

/// Build the socket described by `config` inside `ctx`.
pub fn open(ctx: &zmq::Context, config: &Config) -> Result<Socket, Error> {
    let mut endpoints = config.endpoints.iter();

    let first = match endpoints.next() {
        Some(endpoint) => endpoint,
        None => return Err(Error::Zmq(zmq::Error::EINVAL)),
    };

    let mut sock_config = if config.bind {
        Socket::builder(ctx).bind(first)
    } else {
        Socket::builder(ctx).connect(first)
    };

    for endpoint in endpoints {
        sock_config = if config.bind {
            sock_config.bind(endpoint)
        } else {
            sock_config.connect(endpoint)
        };
    }

    for prefix in &config.subscriptions {
        sock_config = sock_config.subscribe(prefix);
    }

    sock_config.build(config.kind)
}

/// Run one transfer with a socket in an existing context. The socket is closed before returning.
pub fn run_in<R, W>(ctx: &zmq::Context, config: &Config, input: R, output: W) -> Result<Report, Error>
where
    R: Read,
    W: Write,
{
    let socket = open(ctx, config)?;
    let report = Transfer::new(&socket, input, output).run();
    socket.close();

    report
}

/// Run one transfer in a fresh context, and terminate the context afterwards.
///
/// Terminating waits until libzmq has handed off anything still queued for sending.
pub fn run<R, W>(config: &Config, input: R, output: W) -> Result<Report, Error>
where
    R: Read,
    W: Write,
{
    let mut ctx = zmq::Context::new();

    let report = run_in(&ctx, config, input, output)?;

    debug!("terminating context");
    ctx.destroy()?;

    Ok(report)
}
