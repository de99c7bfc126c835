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

//! This module contains the Multipart type, a wrapper around a VecDeque of `zmq::Message`s that
//! knows how to dump itself onto an output stream.

use std::collections::vec_deque::{IntoIter, Iter};
use std::collections::VecDeque;
use std::io::{self, Write};

/// One logical ZeroMQ message, made of one or more frames.
///
/// Parts are written back to back, with nothing between them:
///
/// ```rust
/// use zmqcat::Multipart;
///
/// let mut multipart = Multipart::new();
/// multipart.push_back(zmq::Message::from(&b"hello, "[..]));
/// multipart.push_back(zmq::Message::from(&b"world"[..]));
///
/// let mut out = Vec::new();
/// multipart.write_to(&mut out).unwrap();
///
/// assert_eq!(out, b"hello, world");
/// assert_eq!(multipart.total_len(), 12);
/// ```
#[derive(Debug)]
pub struct Multipart {
    inner: VecDeque<zmq::Message>,
}

impl Multipart {
    pub fn new() -> Self {
        Multipart::default()
    }

    pub fn get(&self, index: usize) -> Option<&zmq::Message> {
        self.inner.get(index)
    }

    pub fn push_front(&mut self, msg: zmq::Message) {
        self.inner.push_front(msg)
    }

    pub fn push_back(&mut self, msg: zmq::Message) {
        self.inner.push_back(msg)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Number of payload bytes across all frames.
    pub fn total_len(&self) -> usize {
        self.inner.iter().map(|msg| msg.len()).sum()
    }

    pub fn iter(&self) -> Iter<zmq::Message> {
        self.inner.iter()
    }

    /// Write every frame, in order, to `out`. Does not flush.
    pub fn write_to<W>(&self, out: &mut W) -> io::Result<usize>
    where
        W: Write,
    {
        for msg in self {
            out.write_all(msg)?;
        }

        Ok(self.total_len())
    }
}

impl Default for Multipart {
    fn default() -> Self {
        Multipart {
            inner: VecDeque::new(),
        }
    }
}

impl From<zmq::Message> for Multipart {
    fn from(msg: zmq::Message) -> Self {
        let mut multipart = Multipart::new();
        multipart.push_back(msg);
        multipart
    }
}

impl From<Vec<zmq::Message>> for Multipart {
    fn from(v: Vec<zmq::Message>) -> Self {
        Multipart { inner: v.into() }
    }
}

impl<'a> IntoIterator for &'a Multipart {
    type Item = &'a zmq::Message;
    type IntoIter = Iter<'a, zmq::Message>;

    fn into_iter(self) -> Iter<'a, zmq::Message> {
        self.iter()
    }
}

impl IntoIterator for Multipart {
    type Item = zmq::Message;
    type IntoIter = IntoIter<zmq::Message>;

    fn into_iter(self) -> IntoIter<zmq::Message> {
        self.inner.into_iter()
    }
}
