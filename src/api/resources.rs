use std::fs;
use std::path::Path;
use std::sync::Arc;

use termtable_core::settings::parse_settings_toml;
use termtable_core::{CharMaps, Registry, Settings};

use super::TermTableError;

fn read(path: &Path) -> Result<String, TermTableError> {
    fs::read_to_string(path).map_err(|source| TermTableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings from `path`, or the embedded defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, TermTableError> {
    match path {
        Some(path) => Ok(parse_settings_toml(&read(path)?)?),
        None => Ok(Settings::builtin().clone()),
    }
}

/// The embedded character maps, overlaid with `path` when given.
pub fn load_charmaps(path: Option<&Path>) -> Result<CharMaps, TermTableError> {
    let mut maps = CharMaps::builtin();
    if let Some(path) = path {
        maps.merge(CharMaps::parse(&read(path)?)?);
    }
    Ok(maps)
}

/// Registry wired from optional settings and character-map overrides.
pub fn load_registry(
    settings: Option<&Path>,
    charmaps: Option<&Path>,
) -> Result<Arc<Registry>, TermTableError> {
    let settings = load_settings(settings)?;
    let charmaps = load_charmaps(charmaps)?;
    Ok(Arc::new(Registry::from_settings(&settings, &charmaps)?))
}
