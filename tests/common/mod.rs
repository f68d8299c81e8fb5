#![allow(dead_code)]

use assert_cmd::cargo_bin;
use assert_cmd::Command;

/// Joins menu inputs into the text a user would type, one entry per line.
pub fn script(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn rentroll() -> Command {
    Command::new(cargo_bin!("rentroll"))
}

/// Menu inputs that add one apartment. `choice` is the type selector.
pub fn add(name: &str, rent: &str, choice: &str) -> Vec<String> {
    vec![
        "1".to_string(),
        name.to_string(),
        rent.to_string(),
        choice.to_string(),
    ]
}
