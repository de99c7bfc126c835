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

//! This module contains the `ChunkedBuffer`, which collects an input stream of unknown length
//! so that it can be sent as a single message.
//!
//! The stream is read into fixed size chunks. Once the stream ends the total size is known, a
//! message of exactly that size is allocated, and the chunks are copied into it. Growing one
//! contiguous buffer instead would copy everything already read on every resize.

use std::io::{self, ErrorKind, Read};

/// Size of a single chunk.
pub const SEND_BUFFER_SIZE: usize = 8192;

/// An append-only sequence of `SEND_BUFFER_SIZE` chunks.
///
/// Every chunk but the last is full.
#[derive(Debug, Default)]
pub struct ChunkedBuffer {
    chunks: Vec<Box<[u8]>>,
    len: usize,
}

impl ChunkedBuffer {
    pub fn new() -> Self {
        ChunkedBuffer::default()
    }

    /// Read `reader` until it reports end of stream, returning the number of bytes read by this
    /// call.
    pub fn fill_from<R>(&mut self, reader: &mut R) -> io::Result<usize>
    where
        R: Read,
    {
        let start = self.len;

        loop {
            let index = self.len / SEND_BUFFER_SIZE;
            let offset = self.len % SEND_BUFFER_SIZE;
            if index == self.chunks.len() {
                self.chunks.push(vec![0; SEND_BUFFER_SIZE].into_boxed_slice());
            }

            match reader.read(&mut self.chunks[index][offset..]) {
                Ok(0) => break,
                Ok(read) => self.len += read,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        trace!("read {} bytes in {} chunks", self.len - start, self.chunk_count());
        Ok(self.len - start)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks holding data.
    pub fn chunk_count(&self) -> usize {
        (self.len + SEND_BUFFER_SIZE - 1) / SEND_BUFFER_SIZE
    }

    /// Iterate over the filled part of each chunk.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> {
        let len = self.len;

        self.chunks
            .iter()
            .take(self.chunk_count())
            .enumerate()
            .map(move |(i, chunk)| {
                let end = (len - i * SEND_BUFFER_SIZE).min(SEND_BUFFER_SIZE);
                &chunk[..end]
            })
    }

    /// Copy the contents into one message of exactly `len()` bytes.
    pub fn into_message(self) -> zmq::Message {
        let mut msg = zmq::Message::with_size(self.len);

        let mut dest = 0;
        for chunk in self.chunks() {
            msg[dest..dest + chunk.len()].copy_from_slice(chunk);
            dest += chunk.len();
        }

        msg
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use super::*;

    /// Hands out at most `step` bytes per read, the way a pipe does.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
        interrupt_next: bool,
    }

    impl Trickle {
        fn new(data: Vec<u8>, step: usize) -> Self {
            Trickle {
                data,
                pos: 0,
                step,
                interrupt_next: true,
            }
        }
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupt_next {
                self.interrupt_next = false;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            self.interrupt_next = true;

            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn empty_input_gives_empty_message() {
        let mut buffer = ChunkedBuffer::new();

        assert_eq!(buffer.fill_from(&mut Cursor::new(Vec::new())).unwrap(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.chunk_count(), 0);
        assert_eq!(buffer.into_message().len(), 0);
    }

    #[test]
    fn exactly_one_chunk() {
        let data = pattern(SEND_BUFFER_SIZE);
        let mut buffer = ChunkedBuffer::new();

        buffer.fill_from(&mut Cursor::new(data.clone())).unwrap();

        assert_eq!(buffer.chunk_count(), 1);
        assert_eq!(&buffer.into_message()[..], &data[..]);
    }

    #[test]
    fn spans_several_chunks() {
        let data = pattern(3 * SEND_BUFFER_SIZE + 17);
        let mut buffer = ChunkedBuffer::new();

        let read = buffer.fill_from(&mut Cursor::new(data.clone())).unwrap();

        assert_eq!(read, data.len());
        assert_eq!(buffer.chunk_count(), 4);
        assert_eq!(buffer.chunks().map(|c| c.len()).sum::<usize>(), data.len());
        assert_eq!(&buffer.into_message()[..], &data[..]);
    }

    #[test]
    fn short_reads_do_not_end_the_stream() {
        let data = pattern(2 * SEND_BUFFER_SIZE + 1000);
        let mut buffer = ChunkedBuffer::new();

        buffer.fill_from(&mut Trickle::new(data.clone(), 1000)).unwrap();

        assert_eq!(buffer.len(), data.len());
        assert_eq!(&buffer.into_message()[..], &data[..]);
    }

    #[test]
    fn later_fills_append() {
        let mut buffer = ChunkedBuffer::new();

        buffer.fill_from(&mut Cursor::new(pattern(SEND_BUFFER_SIZE - 1))).unwrap();
        let second = buffer.fill_from(&mut Cursor::new(vec![7u8; 5])).unwrap();

        assert_eq!(second, 5);
        assert_eq!(buffer.len(), SEND_BUFFER_SIZE + 4);

        let msg = buffer.into_message();
        assert_eq!(&msg[SEND_BUFFER_SIZE - 1..], &[7u8; 5][..]);
    }

    #[test]
    fn read_errors_propagate() {
        let mut buffer = ChunkedBuffer::new();
        let err = buffer.fill_from(&mut Broken).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
