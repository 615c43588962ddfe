#![allow(unused)]

use assert_cmd::{Command, cargo};

#[cfg(windows)]
pub const BINARY_NAME: &str = "tilefence.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "tilefence";

/// A 20°×20° box around longitude/latitude 0/0.
pub const NULL_ISLAND: &str =
	r#"["within",{"type":"Polygon","coordinates":[[[-10,-10],[10,-10],[10,10],[-10,10],[-10,-10]]]}]"#;

pub fn tilefence_cmd() -> Command {
	Command::new(cargo::cargo_bin!("tilefence"))
}
