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

//! This module moves exactly one message in each direction the socket allows.

use std::io::{Read, Write};

use crate::buffer::ChunkedBuffer;
use crate::error::Error;
use crate::message::Multipart;
use crate::socket::Socket;

/// Byte counts for a finished transfer. `None` means the stage did not run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub sent: Option<usize>,
    pub received: Option<usize>,
}

/// Ties a socket to an input and an output stream.
pub struct Transfer<'a, R, W> {
    socket: &'a Socket,
    input: R,
    output: W,
}

impl<'a, R, W> Transfer<'a, R, W>
where
    R: Read,
    W: Write,
{
    pub fn new(socket: &'a Socket, input: R, output: W) -> Self {
        Transfer {
            socket,
            input,
            output,
        }
    }

    /// Run both stages in the order the socket kind requires.
    pub fn run(&mut self) -> Result<Report, Error> {
        let mut report = Report::default();

        if self.socket.kind().receives_first() {
            report.received = self.recv_stage()?;
            report.sent = self.send_stage()?;
        } else {
            report.sent = self.send_stage()?;
            report.received = self.recv_stage()?;
        }

        Ok(report)
    }

    /// Read all of the input and send it as one message.
    pub fn send_stage(&mut self) -> Result<Option<usize>, Error> {
        if !self.socket.kind().sends() {
            return Ok(None);
        }

        let mut buffer = ChunkedBuffer::new();
        buffer.fill_from(&mut self.input)?;

        let total = buffer.len();
        info!("sending {} bytes", total);

        self.socket.send(Multipart::from(buffer.into_message()))?;

        Ok(Some(total))
    }

    /// Receive one message and write all of its parts to the output.
    pub fn recv_stage(&mut self) -> Result<Option<usize>, Error> {
        if !self.socket.kind().receives() {
            return Ok(None);
        }

        let multipart = self.socket.recv()?;
        let total = multipart.write_to(&mut self.output)?;
        self.output.flush()?;

        debug!("wrote {} parts, {} bytes", multipart.len(), total);
        Ok(Some(total))
    }
}
