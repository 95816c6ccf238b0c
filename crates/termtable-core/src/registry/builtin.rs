use crate::charmap::CharMaps;
use crate::readers;
use crate::romanize;
use crate::settings::{Settings, SettingsError};

use super::{Registry, RegistryBuilder};

impl Registry {
    /// Registry wired from the embedded default settings and character maps.
    pub fn builtin() -> Registry {
        Registry::from_settings(Settings::builtin(), &CharMaps::builtin())
            .expect("embedded settings must match embedded charmaps")
    }

    /// Wire builtin collaborators per locale as `settings` names them.
    ///
    /// A reader is only installed when `charmaps` has a reading table for
    /// the locale; without one the locale falls back to its own readings.
    pub fn from_settings(settings: &Settings, charmaps: &CharMaps) -> Result<Registry, SettingsError> {
        let mut builder = RegistryBuilder::default();
        for language in &settings.spacing.spaceless_languages {
            builder = builder.spaceless_language(language.clone());
        }

        for entry in settings.parsed_locales() {
            let (locale, ls) = entry?;
            let invalid = |field: &str, reason: String| SettingsError::InvalidValue {
                field: format!("locales.{locale}.{field}"),
                reason,
            };

            if let Some(name) = &ls.romanizer {
                let romanizer = romanize::builtin(name)
                    .ok_or_else(|| invalid("romanizer", format!("unknown romanizer {name:?}")))?;
                builder = builder.boxed_romanizer(locale.clone(), romanizer);
            }
            if let Some(name) = &ls.normalizer {
                let map = charmaps
                    .normalizer(name)
                    .ok_or_else(|| invalid("normalizer", format!("no character map {name:?}")))?;
                builder = builder.normalizer(locale.clone(), map.clone());
            }
            if let Some(name) = &ls.reader {
                if let Some(readings) = charmaps.readings(&locale) {
                    let reader = readers::builtin(name, readings.clone())
                        .ok_or_else(|| invalid("reader", format!("unknown reader {name:?}")))?;
                    builder = builder.boxed_reader(locale.clone(), reader);
                } else {
                    tracing::debug!(%locale, reader = %name, "no reading table, reader skipped");
                }
            }
            if let Some(tag) = &ls.tag {
                builder = builder.tag(locale.clone(), tag.clone());
            }
        }
        Ok(builder.build())
    }
}
