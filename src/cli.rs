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

//! Command line arguments, and the `Config` they turn into.

use clap::Parser;
use log::LevelFilter;

use crate::socket::SocketKind;

#[derive(Parser, Debug)]
#[command(
    name = "zmqcat",
    version,
    about = "Send stdin as one ZeroMQ message, and write one received message to stdout"
)]
pub struct Cli {
    /// PUSH | PULL | REQ | REP | PUB | SUB
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        env = "ZMQCAT_TYPE",
        default_value_t = SocketKind::Push
    )]
    pub kind: SocketKind,

    /// Endpoint, e.g. "tcp://127.0.0.1:5000". Repeat to use several.
    #[arg(short, long = "endpoint", value_name = "ENDPOINT", env = "ZMQCAT_ENDPOINT", required = true)]
    pub endpoints: Vec<String>,

    /// Bind instead of connect
    #[arg(short, long)]
    pub bind: bool,

    /// Subscription prefix for SUB sockets. Repeatable, defaults to everything.
    #[arg(short, long = "subscribe", value_name = "PREFIX")]
    pub subscriptions: Vec<String>,

    /// Verbose output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(self) -> Config {
        Config {
            kind: self.kind,
            endpoints: self.endpoints,
            bind: self.bind,
            subscriptions: self.subscriptions.into_iter().map(String::into_bytes).collect(),
            verbose: self.verbose,
        }
    }
}

/// Everything needed to set up the socket and run one transfer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub kind: SocketKind,
    pub endpoints: Vec<String>,
    pub bind: bool,
    pub subscriptions: Vec<Vec<u8>>,
    pub verbose: bool,
}

impl Config {
    pub fn new<S>(kind: SocketKind, endpoint: S) -> Self
    where
        S: Into<String>,
    {
        Config {
            kind,
            endpoints: vec![endpoint.into()],
            ..Config::default()
        }
    }

    pub fn bind(mut self) -> Self {
        self.bind = true;
        self
    }

    pub fn subscribe<P>(mut self, prefix: P) -> Self
    where
        P: Into<Vec<u8>>,
    {
        self.subscriptions.push(prefix.into());
        self
    }

    /// Level for the logger when `RUST_LOG` does not say otherwise.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}
