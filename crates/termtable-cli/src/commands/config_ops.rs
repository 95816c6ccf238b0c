use std::fs;

use termtable::{settings, CharMaps};

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let locales: Vec<&str> = s.locales.keys().map(String::as_str).collect();
    println!(
        "OK: {} locales ({}), spaceless={}",
        locales.len(),
        locales.join(", "),
        s.spacing.spaceless_languages.join(",")
    );
}

pub fn charmaps_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let maps = die!(CharMaps::parse(&content), "Error: {}");
    let normalizers: Vec<&str> = maps.normalizer_names().collect();
    let readings: Vec<String> = maps.reading_locales().map(ToString::to_string).collect();
    println!(
        "OK: normalizers [{}], readings [{}]",
        normalizers.join(", "),
        readings.join(", ")
    );
}
