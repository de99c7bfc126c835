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

pub mod config;
pub mod kind;

pub use self::config::{SockConfig, SocketBuilder};
pub use self::kind::SocketKind;

use crate::error::Error;
use crate::message::Multipart;

/// A blocking ZeroMQ socket that remembers what kind it is.
pub struct Socket {
    sock: zmq::Socket,
    kind: SocketKind,
}

impl Socket {
    pub fn builder(ctx: &zmq::Context) -> SocketBuilder<'_> {
        SocketBuilder::new(ctx)
    }

    pub fn from_sock(sock: zmq::Socket, kind: SocketKind) -> Self {
        Socket { sock, kind }
    }

    pub fn kind(&self) -> SocketKind {
        self.kind
    }

    /// Send every part of `multipart`, flagging all but the last with SNDMORE.
    pub fn send(&self, multipart: Multipart) -> Result<(), Error> {
        let mut parts = multipart.into_iter().peekable();

        while let Some(msg) = parts.next() {
            let flags = if parts.peek().is_some() { zmq::SNDMORE } else { 0 };
            self.sock.send(msg, flags)?;
        }

        Ok(())
    }

    /// Block until one whole message has arrived, collecting every part of it.
    pub fn recv(&self) -> Result<Multipart, Error> {
        let mut multipart = Multipart::new();

        loop {
            let msg = self.sock.recv_msg(0)?;
            info!("receiving {} bytes", msg.len());
            multipart.push_back(msg);

            if !self.sock.get_rcvmore()? {
                break;
            }
        }

        Ok(multipart)
    }

    /// Close the socket by dropping it. libzmq keeps delivering queued messages until the context
    /// is terminated.
    pub fn close(self) {
        let Socket { sock, kind } = self;

        debug!("closing {} socket", kind);
        drop(sock);
    }
}
