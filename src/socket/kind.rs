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

//! This module defines the socket types zmqcat can drive, and which directions each of them is
//! allowed to move data in.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The supported `zmq::SocketType`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocketKind {
    /// Send only.
    Push,
    /// Receive only.
    Pull,
    /// Send a request, then receive the reply.
    Req,
    /// Receive a request, then send the reply.
    Rep,
    /// Send only.
    Pub,
    /// Receive only.
    Sub,
}

impl SocketKind {
    pub const ALL: [SocketKind; 6] = [
        SocketKind::Push,
        SocketKind::Pull,
        SocketKind::Req,
        SocketKind::Rep,
        SocketKind::Pub,
        SocketKind::Sub,
    ];

    pub fn as_zmq(self) -> zmq::SocketType {
        match self {
            SocketKind::Push => zmq::PUSH,
            SocketKind::Pull => zmq::PULL,
            SocketKind::Req => zmq::REQ,
            SocketKind::Rep => zmq::REP,
            SocketKind::Pub => zmq::PUB,
            SocketKind::Sub => zmq::SUB,
        }
    }

    /// Whether stdin is read and sent on this kind of socket.
    pub fn sends(self) -> bool {
        match self {
            SocketKind::Pull | SocketKind::Sub => false,
            _ => true,
        }
    }

    /// Whether a message is received and written to stdout on this kind of socket.
    pub fn receives(self) -> bool {
        match self {
            SocketKind::Push | SocketKind::Pub => false,
            _ => true,
        }
    }

    /// REP must receive the request before it may send anything.
    pub fn receives_first(self) -> bool {
        self == SocketKind::Rep
    }

    pub fn name(self) -> &'static str {
        match self {
            SocketKind::Push => "PUSH",
            SocketKind::Pull => "PULL",
            SocketKind::Req => "REQ",
            SocketKind::Rep => "REP",
            SocketKind::Pub => "PUB",
            SocketKind::Sub => "SUB",
        }
    }
}

impl Default for SocketKind {
    fn default() -> Self {
        SocketKind::Push
    }
}

impl fmt::Display for SocketKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SocketKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocketKind::ALL
            .iter()
            .cloned()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSocketType(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("pull".parse::<SocketKind>().unwrap(), SocketKind::Pull);
        assert_eq!("Rep".parse::<SocketKind>().unwrap(), SocketKind::Rep);
        assert_eq!("PUB".parse::<SocketKind>().unwrap(), SocketKind::Pub);
    }

    #[test]
    fn sub_is_a_subscriber() {
        let kind = "sub".parse::<SocketKind>().unwrap();

        assert_eq!(kind, SocketKind::Sub);
        assert_eq!(kind.as_zmq(), zmq::SUB);
    }

    #[test]
    fn unknown_names_are_rejected() {
        match "dealer".parse::<SocketKind>() {
            Err(Error::UnknownSocketType(name)) => assert_eq!(name, "dealer"),
            other => panic!("expected UnknownSocketType, got {:?}", other),
        }
        assert!("".parse::<SocketKind>().is_err());
    }

    #[test]
    fn directions() {
        let all = SocketKind::ALL;
        let senders: Vec<_> = all.iter().filter(|k| k.sends()).collect();
        let receivers: Vec<_> = all.iter().filter(|k| k.receives()).collect();

        assert_eq!(
            senders,
            vec![&SocketKind::Push, &SocketKind::Req, &SocketKind::Rep, &SocketKind::Pub]
        );
        assert_eq!(
            receivers,
            vec![&SocketKind::Pull, &SocketKind::Req, &SocketKind::Rep, &SocketKind::Sub]
        );
    }

    #[test]
    fn only_rep_receives_first() {
        for kind in SocketKind::ALL.iter() {
            assert_eq!(kind.receives_first(), *kind == SocketKind::Rep);
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in SocketKind::ALL.iter() {
            assert_eq!(kind.to_string().parse::<SocketKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn defaults_to_push() {
        assert_eq!(SocketKind::default(), SocketKind::Push);
    }
}
