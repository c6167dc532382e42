//! Runtime tunables
//!
//! Defaults match the classic screensaver feel. On the web build individual
//! values can be overridden through URL query parameters, e.g.
//! `?speed=6&scale=1.5&fps=0`. Nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCALE, DEFAULT_SPEED};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Velocity magnitude in pixels per tick
    pub speed: f32,
    /// Logo texture to screen pixel scale
    pub sprite_scale: f32,
    /// Show the FPS readout in the HUD
    pub show_fps: bool,
    /// Clear color behind the sprites
    pub background: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            sprite_scale: DEFAULT_SCALE,
            show_fps: true,
            background: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl Config {
    /// Parse overrides from a URL query string (`"?speed=6&fps=0"`).
    ///
    /// Unknown keys and unparsable or out-of-range values fall back to the
    /// defaults; parsing never fails.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "speed" => {
                    if let Ok(v) = value.parse::<f32>()
                        && v > 0.0
                    {
                        config.speed = v;
                    }
                }
                "scale" => {
                    if let Ok(v) = value.parse::<f32>()
                        && v > 0.0
                    {
                        config.sprite_scale = v;
                    }
                }
                "fps" => {
                    config.show_fps = value != "0" && !value.eq_ignore_ascii_case("false");
                }
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert_eq!(config.sprite_scale, DEFAULT_SCALE);
        assert!(config.show_fps);
    }

    #[test]
    fn test_query_overrides() {
        let config = Config::from_query("?speed=6&scale=1.5&fps=0");
        assert_eq!(config.speed, 6.0);
        assert_eq!(config.sprite_scale, 1.5);
        assert!(!config.show_fps);
    }

    #[test]
    fn test_query_rejects_garbage() {
        let config = Config::from_query("?speed=fast&scale=-2&noise&what=ever");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(Config::from_query(""), Config::default());
        assert_eq!(Config::from_query("?"), Config::default());
    }
}
