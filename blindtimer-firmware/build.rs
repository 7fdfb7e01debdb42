//! Build script for blindtimer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates timer.toml at compile time
//! - Generates the board tunables as constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timer.toml and return the parsed document
fn validate_config() -> toml::Value {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a timer.toml configuration file.          ║\n\
            ║  Please create one in the blindtimer-firmware directory.         ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timer.toml                                ║\n\
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
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in timer.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_required_sections(&config);

    let mut errors = Vec::new();
    validate_input(&config, &mut errors);
    validate_game(&config, &mut errors);
    validate_audio(&config, &mut errors);
    report("Invalid timer configuration", &errors);

    println!("cargo:warning=timer.toml validated successfully");
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with a boxed list of errors, if there are any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let errors: Vec<String> = ["input", "game", "audio"]
        .iter()
        .filter(|section| !matches!(config.get(**section), Some(toml::Value::Table(_))))
        .map(|section| format!("Missing [{}] section", section))
        .collect();

    report("Missing required sections in timer.toml", &errors);
}

/// Read `[section].key` as an integer within `range`
fn integer_in(
    config: &toml::Value,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(value)) if range.contains(value) => Some(*value),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                section,
                key,
                range.start(),
                range.end()
            ));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

/// Validate button timing
fn validate_input(config: &toml::Value, errors: &mut Vec<String>) {
    let debounce = integer_in(config, "input", "debounce_ms", 1..=1000, errors);
    let long_press = integer_in(config, "input", "long_press_ms", 100..=10_000, errors);

    if let (Some(debounce), Some(long_press)) = (debounce, long_press) {
        if long_press <= debounce {
            errors.push("[input] long_press_ms must exceed debounce_ms".to_string());
        }
    }
}

/// Validate game settings
fn validate_game(config: &toml::Value, errors: &mut Vec<String>) {
    let stack = integer_in(config, "game", "starting_stack", 100..=1_000_000, errors);

    if let Some(stack) = stack {
        if stack % 25 != 0 {
            errors.push("[game] starting_stack must be a multiple of 25".to_string());
        }
    }
}

/// Validate buzzer settings
fn validate_audio(config: &toml::Value, errors: &mut Vec<String>) {
    integer_in(config, "audio", "default_volume", 0..=10, errors);
}

/// Write the validated values to `$OUT_DIR/timer_config.rs`
fn generate_config(config: &toml::Value) {
    let value = |section: &str, key: &str| {
        config
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(toml::Value::as_integer)
            .unwrap()
    };

    let generated = format!(
        "// Generated from timer.toml by build.rs\n\
        pub const DEBOUNCE_MS: u32 = {};\n\
        pub const LONG_PRESS_MS: u32 = {};\n\
        pub const STARTING_STACK: u32 = {};\n\
        pub const DEFAULT_VOLUME: u8 = {};\n",
        value("input", "debounce_ms"),
        value("input", "long_press_ms"),
        value("game", "starting_stack"),
        value("audio", "default_volume"),
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("timer_config.rs"), generated).unwrap();
}
