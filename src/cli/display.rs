// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the namekeys CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `NAMEKEYS_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and non-TTY stdout.

use std::sync::OnceLock;

use namekeys::build::{CheckReport, IndexReport};
use namekeys::{KeywordSet, ResolvedFeedbackRequest};

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("NAMEKEYS_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);       // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// One fragment per line; the sentinel is shown as `""`.
pub fn print_keywords(keywords: &KeywordSet) {
    for fragment in keywords.iter() {
        if fragment.is_empty() {
            println!("{}", themed(GRAY, &[DIM], "\"\""));
        } else {
            println!("{}", fragment);
        }
    }
}

pub fn print_index_report(report: &IndexReport) {
    println!(
        "{} {} profiles │ {} indexed │ {} changed │ {} skipped",
        themed(GREEN, &[BOLD], "✓"),
        report.profiles,
        report.indexed,
        report.changed,
        report.skipped()
    );
}

pub fn print_check_report(report: &CheckReport) {
    for violation in &report.violations {
        println!(
            "{} {} {}",
            themed(RED, &[BOLD], "✗"),
            themed(YELLOW, &[], &violation.uid),
            violation.kind
        );
    }
    let mark = if report.is_clean() {
        themed(GREEN, &[BOLD], "✓")
    } else {
        themed(RED, &[BOLD], "✗")
    };
    println!(
        "{} {} profiles checked, {} violations",
        mark,
        report.checked,
        report.violations.len()
    );
}

fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("(unknown)")
}

pub fn print_requests(requests: &[ResolvedFeedbackRequest]) {
    for r in requests {
        let status = if r.request.completed {
            themed(GREEN, &[], "answered")
        } else {
            themed(YELLOW, &[], "open    ")
        };
        println!(
            "{} {} {} → {}",
            status,
            themed(GRAY, &[DIM], &r.request.doc_id),
            themed(CYAN, &[], display_name(r.answered_by_full.display_name.as_deref())),
            display_name(r.requested_on_full.display_name.as_deref()),
        );
    }
    println!("{} requests", requests.len());
}
