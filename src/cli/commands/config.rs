//! Config command handler

use super::fail;
use crate::args::ConfigSubcommand;
use gpa_advisor::config::Config;
use std::io::{self, Write};

/// Keys accepted by `config get/set/unset`
const KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "scheme",
    "faculty",
    "curriculum",
    "reports_dir",
];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn unknown_key(key: &str) -> ! {
    fail(&format!(
        "Unknown config key: '{key}' (expected one of: {})",
        KEYS.join(", ")
    ))
}

fn save(config: &Config) {
    if let Err(e) = config.save() {
        fail(&format!("Failed to save config: {e}"));
    }
}

/// Print one value, or the whole configuration
fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => unknown_key(k),
        },
        None => {
            println!("\n=== Configuration ===");
            println!("({})\n", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
}

fn set(config: &mut Config, key: &str, value: &str) {
    if config.get(key).is_none() {
        unknown_key(key);
    }
    if let Err(e) = config.set(key, value) {
        fail(&e);
    }
    save(config);
    // Echo the stored form, which may be normalized (e.g. "eng" -> "engineering")
    println!(
        "✓ Set {key} = {}",
        config.get(key).unwrap_or_else(|| value.to_string())
    );
}

fn unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        fail(&e);
    }
    save(config);
    println!("✓ Reset {key} to default");
}

/// Delete the config file after confirmation
fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            fail(&format!("Failed to remove config file: {e}"));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
