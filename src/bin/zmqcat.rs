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

#[macro_use]
extern crate log;

use std::io::{self, Write};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use zmqcat::error::USAGE_EXIT_CODE;
use zmqcat::{Cli, Config};

fn init_logger(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(USAGE_EXIT_CODE);
            }
        },
    };

    let config = cli.config();
    init_logger(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();

    match zmqcat::run(&config, stdin.lock(), stdout.lock()) {
        Ok(report) => debug!("done: {:?}", report),
        Err(e) => {
            eprintln!("{}", e.report());
            process::exit(e.exit_code());
        }
    }
}
