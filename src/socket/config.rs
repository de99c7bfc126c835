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

use crate::error::Error;
use crate::socket::{Socket, SocketKind};

fn bind_all(sock: zmq::Socket, binds: &[&str]) -> zmq::Result<zmq::Socket> {
    for bind in binds {
        sock.bind(bind)?;
        info!("bound to {}", bind);
    }
    Ok(sock)
}

fn connect_all(sock: zmq::Socket, connects: &[&str]) -> zmq::Result<zmq::Socket> {
    for connect in connects {
        sock.connect(connect)?;
        info!("connecting to {}", connect);
    }
    Ok(sock)
}

/// The root struct for a Socket builder
///
/// This struct holds the context every socket is created in.
pub struct SocketBuilder<'a> {
    ctx: &'a zmq::Context,
}

impl<'a> SocketBuilder<'a> {
    pub fn new(ctx: &'a zmq::Context) -> Self {
        SocketBuilder { ctx }
    }

    /// Bind the socket to an address
    ///
    /// Since this is just part of the builder, and the socket doesn't exist yet, we store the
    /// address for later retrieval.
    pub fn bind(self, addr: &'a str) -> SockConfig<'a> {
        SockConfig {
            ctx: self.ctx,
            bind: vec![addr],
            connect: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Connect the socket to an address
    ///
    /// Since this is just part of the builder, and the socket doesn't exist yet, we store the
    /// address for later retrieval.
    pub fn connect(self, addr: &'a str) -> SockConfig<'a> {
        SockConfig {
            ctx: self.ctx,
            bind: Vec::new(),
            connect: vec![addr],
            filters: Vec::new(),
        }
    }
}

/// The final builder step
///
/// This contains all the information required to construct a socket of any supported kind.
pub struct SockConfig<'a> {
    pub ctx: &'a zmq::Context,
    pub bind: Vec<&'a str>,
    pub connect: Vec<&'a str>,
    pub filters: Vec<&'a [u8]>,
}

impl<'a> SockConfig<'a> {
    /// Bind the `SockConfig` to an address, returning a `SockConfig`
    ///
    /// This allows for a single socket to be bound to multiple addresses.
    pub fn bind(mut self, addr: &'a str) -> Self {
        self.bind.push(addr);
        self
    }

    /// Connect the `SockConfig` to an address, returning a `SockConfig`
    ///
    /// This allows for a single socket to be connected to multiple addresses.
    pub fn connect(mut self, addr: &'a str) -> Self {
        self.connect.push(addr);
        self
    }

    /// Add a subscription prefix. Only used when building a SUB socket.
    pub fn subscribe(mut self, pattern: &'a [u8]) -> Self {
        self.filters.push(pattern);
        self
    }

    /// Finalize the `SockConfig` into a `Socket` if the creation is successful, or into an Error
    /// if something went wrong.
    ///
    /// A SUB socket with no filters subscribes to everything, otherwise it would never receive.
    pub fn build(self, kind: SocketKind) -> Result<Socket, Error> {
        let SockConfig {
            ctx,
            bind,
            connect,
            filters,
        } = self;

        debug!("creating {} socket", kind);
        let sock = ctx.socket(kind.as_zmq())?;

        if kind == SocketKind::Sub {
            if filters.is_empty() {
                sock.set_subscribe(b"")?;
            }
            for filter in &filters {
                sock.set_subscribe(filter)?;
                debug!("subscribed to {:?}", String::from_utf8_lossy(filter));
            }
        } else if !filters.is_empty() {
            warn!("ignoring {} subscription(s) on a {} socket", filters.len(), kind);
        }

        let sock = bind_all(sock, &bind)?;
        let sock = connect_all(sock, &connect)?;

        Ok(Socket::from_sock(sock, kind))
    }
}
