//! Build script for alphaseg-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Windows a single I2C bus can address (A2..A0 jumpers)
const MAX_WINDOWS: i64 = 8;

/// Longest continuous-scroll spacer the firmware accepts
const MAX_SPACER_LEN: usize = 16;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml at build time.                 ║\n\
            ║  Please create one in the alphaseg-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();
    validate_display(&config, &mut errors);
    validate_scroll(&config, &mut errors);
    validate_continuous(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display.toml                                     ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        _ => None,
    }
}

/// `[display]` is required
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = section(config, "display") else {
        errors.push("Missing [display] section".to_string());
        return;
    };

    match display.get("windows") {
        Some(toml::Value::Integer(n)) if (1..=MAX_WINDOWS).contains(n) => {}
        Some(_) => errors.push(format!("[display] windows must be 1-{}", MAX_WINDOWS)),
        None => errors.push("[display] missing 'windows'".to_string()),
    }

    match display.get("brightness") {
        Some(toml::Value::Float(f)) if (0.0..=1.0).contains(f) => {}
        Some(toml::Value::Integer(i)) if (0..=1).contains(i) => {}
        Some(_) => errors.push("[display] brightness must be 0.0-1.0".to_string()),
        None => {}
    }
}

fn validate_scroll(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(scroll) = section(config, "scroll") else {
        return;
    };

    for key in ["delay_ms", "dwell_ms", "speed_ms"] {
        match scroll.get(key) {
            Some(toml::Value::Integer(ms)) if *ms >= 0 && *ms <= u32::MAX as i64 => {}
            Some(_) => errors.push(format!("[scroll] {} must be a u32 millisecond count", key)),
            None => {}
        }
    }

    if let Some(enabled) = scroll.get("enabled") {
        if !enabled.is_bool() {
            errors.push("[scroll] enabled must be true or false".to_string());
        }
    }
}

fn validate_continuous(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(continuous) = section(config, "continuous_scroll") else {
        return;
    };

    match continuous.get("spacer") {
        Some(toml::Value::String(s)) if s.is_ascii() && s.len() <= MAX_SPACER_LEN => {}
        Some(_) => errors.push(format!(
            "[continuous_scroll] spacer must be ASCII, at most {} bytes",
            MAX_SPACER_LEN
        )),
        None => {}
    }

    match continuous.get("visible_len") {
        Some(toml::Value::Integer(n)) if (1..=255).contains(n) => {}
        Some(_) => errors.push("[continuous_scroll] visible_len must be 1-255".to_string()),
        None => {}
    }
}
