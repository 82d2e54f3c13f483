use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use shared::domain::LatLng;
use thiserror::Error;
use walkers::{HeaderValue, HttpOptions};

use crate::map::TemplateTiles;

/// Tile zoom levels above this are not served by any public provider.
const MAX_TILE_ZOOM: f64 = 22.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapSettings {
    pub tile_url: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub user_agent: String,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub initial_zoom: f64,
    /// `[lat, lng]` in degrees.
    pub initial_center: [f64; 2],
    /// On-disk HTTP cache for tiles; `None` keeps tiles in memory only.
    pub tile_cache_dir: Option<PathBuf>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            attribution: "© OpenStreetMap contributors".into(),
            user_agent: concat!("places_gui/", env!("CARGO_PKG_VERSION")).into(),
            min_zoom: 2.0,
            max_zoom: 18.0,
            initial_zoom: 3.0,
            initial_center: [20.0, 0.0],
            tile_cache_dir: dirs::cache_dir().map(|dir| dir.join("places").join("tiles")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid map settings: {0}")]
    Invalid(String),
}

impl MapSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.tile_url.contains(placeholder) {
                return Err(ConfigError::Invalid(format!(
                    "tile_url '{}' is missing the {placeholder} placeholder",
                    self.tile_url
                )));
            }
        }
        if self.tile_url.contains("{s}") && self.subdomains.is_empty() {
            return Err(ConfigError::Invalid(
                "tile_url uses {s} but no subdomains are configured".into(),
            ));
        }
        if self.attribution.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "attribution must not be empty".into(),
            ));
        }
        if !(0.0..=MAX_TILE_ZOOM).contains(&self.min_zoom)
            || !(0.0..=MAX_TILE_ZOOM).contains(&self.max_zoom)
            || self.min_zoom > self.max_zoom
        {
            return Err(ConfigError::Invalid(format!(
                "zoom bounds {}..={} must satisfy 0 <= min <= max <= {MAX_TILE_ZOOM}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.initial_zoom) {
            return Err(ConfigError::Invalid(format!(
                "initial_zoom {} is outside {}..={}",
                self.initial_zoom, self.min_zoom, self.max_zoom
            )));
        }
        let [lat, lng] = self.initial_center;
        LatLng::new(lat, lng)
            .map_err(|err| ConfigError::Invalid(format!("initial_center: {err}")))?;
        if HeaderValue::from_str(&self.user_agent).is_err() {
            return Err(ConfigError::Invalid(format!(
                "user_agent {:?} is not a valid header value",
                self.user_agent
            )));
        }
        Ok(())
    }

    pub fn tile_source(&self) -> TemplateTiles {
        TemplateTiles::new(
            self.tile_url.clone(),
            self.subdomains.clone(),
            self.attribution.clone(),
        )
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            cache: self.tile_cache_dir.clone(),
            user_agent: HeaderValue::from_str(&self.user_agent).ok(),
            ..HttpOptions::default()
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("places").join("places.toml"))
}

pub fn parse_settings(raw: &str) -> Result<MapSettings, toml::de::Error> {
    toml::from_str(raw)
}

/// Loads settings from `explicit`, else from the default config path when a
/// file exists there, else built-in defaults. The result is validated.
pub fn load_settings(explicit: Option<&Path>) -> Result<MapSettings, ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.is_file()),
    };

    let settings = match path {
        Some(path) => {
            let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "loaded map settings");
            parse_settings(&raw).map_err(|source| ConfigError::Parse { path, source })?
        }
        None => MapSettings::default(),
    };

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
