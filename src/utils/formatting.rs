//! Formatting utilities used for CLI output.

use crate::utils::colors::{BOLD, RESET};

pub fn bold(s: &str) -> String {
    format!("{}{}{}", BOLD, s, RESET)
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins < 0 { "-" } else { "" };

    if short {
        // e.g. 02:25
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. 02h 25m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
