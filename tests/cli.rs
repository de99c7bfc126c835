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

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn zmqcat() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_zmqcat"));
    cmd.env_remove("ZMQCAT_ENDPOINT")
        .env_remove("ZMQCAT_TYPE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    cmd
}

fn run(args: &[&str]) -> Output {
    zmqcat().args(args).output().unwrap()
}

#[test]
fn missing_endpoint_is_a_usage_error() {
    let output = run(&["-t", "pull"]);

    assert_eq!(output.status.code(), Some(254));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--endpoint"));
}

#[test]
fn unknown_type_is_a_usage_error() {
    let output = run(&["-t", "router", "-e", "tcp://127.0.0.1:5000"]);

    assert_eq!(output.status.code(), Some(254));
}

#[test]
fn help_exits_cleanly() {
    let output = run(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--bind"));
}

#[test]
fn socket_failure_prints_errno_and_exits_one() {
    let output = run(&["-e", "carrier-pigeon://x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error "));
    assert!(output.stdout.is_empty());
}

#[test]
fn verbose_lines_are_plain() {
    let mut child = zmqcat()
        .args(&["-v", "-t", "pub", "-b", "-e", "tcp://127.0.0.1:*"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(b"abc").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();

    assert!(lines.contains(&"bound to tcp://127.0.0.1:*"), "{}", stderr);
    assert!(lines.contains(&"sending 3 bytes"), "{}", stderr);
    assert!(!stderr.contains("INFO"), "{}", stderr);
}
