//! Button options and their defaults.
//!
//! Options arrive as string key/value pairs (HTML `data-*` attributes or a JS
//! object). Keys are matched case-insensitively with `-` and `_` ignored, so
//! `forceFactor`, `force-factor` and `FORCE_FACTOR` are the same option, and
//! `layer-2-mouse-force` matches `layer-2-mouseForce`. A value that does not
//! parse or falls outside its range is logged and the default is kept.

use crate::constants::*;
use crate::error::ConfigError;
use crate::force::ForceField;
use crate::geometry::{Bounds, Outline, Surface};
use crate::layer::LayerSettings;
use fnv::FnvHashMap;

/// Colours used by the compositor, as CSS colour strings.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Fill of every layer below the highlight.
    pub body: String,
    /// Highlight fill, and the outer stop of its contact gradients.
    pub highlight: String,
    /// Inner stop of the contact gradients.
    pub accent: String,
    pub text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            body: DEFAULT_BODY_COLOR.to_string(),
            highlight: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            accent: DEFAULT_ACCENT_COLOR.to_string(),
            text: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonConfig {
    pub outline: Outline,
    pub tension: f32,
    pub force_factor: f32,
    pub hover_factor: f32,
    pub noise: f32,
    /// Bottom layer first; the last one is the highlight.
    pub layers: Vec<LayerSettings>,
    pub palette: Palette,
    pub label: String,
    pub debug: bool,
    /// Id of the element a created surface is appended to.
    pub wrapper: Option<String>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            outline: Outline {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                margin: DEFAULT_MARGIN,
                gap: DEFAULT_GAP,
            },
            tension: DEFAULT_TENSION,
            force_factor: DEFAULT_FORCE_FACTOR,
            hover_factor: DEFAULT_HOVER_FACTOR,
            noise: DEFAULT_NOISE,
            layers: (0..DEFAULT_LAYERS.len())
                .map(LayerSettings::default_for)
                .collect(),
            palette: Palette::default(),
            label: DEFAULT_LABEL.to_string(),
            debug: false,
            wrapper: None,
        }
    }
}

impl ButtonConfig {
    /// Defaults overridden by `options`. Never fails; rejected options are
    /// logged and ignored.
    pub fn from_options<I, K, V>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::default().with_options(options)
    }

    /// Apply `options` on top of `self`.
    pub fn with_options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        // later duplicates win
        let map: FnvHashMap<String, (String, String)> = options
            .into_iter()
            .map(|(k, v)| {
                let raw = k.as_ref().to_string();
                (normalize_key(&raw), (raw, v.as_ref().to_string()))
            })
            .collect();

        // sorted so warnings come out in a stable order
        let mut keys: Vec<_> = map.keys().cloned().collect();
        keys.sort();
        for key in keys {
            let (raw, value) = &map[&key];
            match self.apply(&key, raw, value) {
                Ok(()) => {}
                Err(e @ ConfigError::UnknownOption(_)) => log::debug!("[config] {}", e),
                Err(e) => log::warn!("[config] {}; keeping default", e),
            }
        }
        self
    }

    /// Replace the layer stack. An empty stack keeps the defaults.
    pub fn with_layers(mut self, layers: Vec<LayerSettings>) -> Self {
        if !layers.is_empty() {
            self.layers = layers;
        }
        self
    }

    pub fn surface(&self) -> Surface {
        self.outline.surface()
    }

    pub fn bounds(&self) -> Bounds {
        self.outline.bounds()
    }

    pub fn force_field(&self) -> ForceField {
        ForceField {
            force_factor: self.force_factor,
            hover_factor: self.hover_factor,
            bounds: self.bounds(),
        }
    }

    fn apply(&mut self, key: &str, raw: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "width" => self.outline.width = dimension(raw, value)?,
            "height" => self.outline.height = dimension(raw, value)?,
            "gap" => {
                self.outline.gap = bounded(
                    raw,
                    value,
                    |v| (MIN_GAP..=MAX_DIMENSION).contains(&v),
                    "[0.5, 10000]",
                )?
            }
            "margin" => {
                self.outline.margin =
                    bounded(raw, value, |v| (0.0..=MAX_DIMENSION).contains(&v), "[0, 10000]")?
            }
            "tension" => self.tension = finite(raw, value)?,
            "forcefactor" => self.force_factor = finite(raw, value)?,
            "hoverfactor" => self.hover_factor = finite(raw, value)?,
            "noise" => self.noise = non_negative(raw, value)?,
            "debug" => self.debug = flag(value),
            "color1" => self.palette.body = text(raw, value)?,
            "color2" => self.palette.highlight = text(raw, value)?,
            "color3" => self.palette.accent = text(raw, value)?,
            "textcolor" => self.palette.text = text(raw, value)?,
            "text" | "label" => self.label = text(raw, value)?,
            "wrapper" | "wrapperelement" => self.wrapper = Some(text(raw, value)?),
            _ => return self.apply_layer(key, raw, value),
        }
        Ok(())
    }

    fn apply_layer(&mut self, key: &str, raw: &str, value: &str) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownOption(raw.to_string());
        let rest = key.strip_prefix("layer").ok_or_else(unknown)?;
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        let (index, field) = rest.split_at(digits);
        let layer: usize = index.parse().map_err(|_| unknown())?;
        let count = self.layers.len();
        let settings = layer
            .checked_sub(1)
            .and_then(|i| self.layers.get_mut(i))
            .ok_or_else(|| ConfigError::UnknownLayer {
                key: raw.to_string(),
                layer,
                count,
            })?;
        match field {
            "viscosity" => {
                let v = finite(raw, value)?;
                if !(v > 0.0 && v <= 1.0) {
                    return Err(ConfigError::OutOfRange {
                        key: raw.to_string(),
                        value: v,
                        range: "(0, 1]",
                    });
                }
                settings.viscosity = v;
            }
            "mouseforce" => settings.mouse_force = finite(raw, value)?,
            "forcelimit" => settings.force_limit = positive(raw, value)?,
            _ => return Err(unknown()),
        }
        Ok(())
    }
}

/// Lower-case `key` and drop `-` and `_`.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn finite(key: &str, value: &str) -> Result<f32, ConfigError> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::NotANumber {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn bounded(
    key: &str,
    value: &str,
    accept: impl Fn(f32) -> bool,
    range: &'static str,
) -> Result<f32, ConfigError> {
    let v = finite(key, value)?;
    if accept(v) {
        Ok(v)
    } else {
        Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: v,
            range,
        })
    }
}

fn positive(key: &str, value: &str) -> Result<f32, ConfigError> {
    bounded(key, value, |v| v > 0.0, "(0, inf)")
}

fn non_negative(key: &str, value: &str) -> Result<f32, ConfigError> {
    bounded(key, value, |v| v >= 0.0, "[0, inf)")
}

fn dimension(key: &str, value: &str) -> Result<f32, ConfigError> {
    bounded(key, value, |v| v > 0.0 && v <= MAX_DIMENSION, "(0, 10000]")
}

fn text(key: &str, value: &str) -> Result<String, ConfigError> {
    let v = value.trim();
    if v.is_empty() {
        Err(ConfigError::Empty {
            key: key.to_string(),
        })
    } else {
        Ok(v.to_string())
    }
}

fn flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = ButtonConfig::default();
        assert_eq!(c.outline.width, 200.0);
        assert_eq!(c.outline.height, 50.0);
        assert_eq!(c.outline.margin, 40.0);
        assert_eq!(c.outline.gap, 5.0);
        assert_eq!(c.tension, 0.4);
        assert_eq!(c.layers.len(), 2);
        assert_eq!(c.layers[1], LayerSettings::new(0.8, 150.0, 3.0));
        assert_eq!(c.surface(), Surface { width: 280.0, height: 130.0 });
    }

    #[test]
    fn keys_are_matched_in_any_spelling() {
        let c = ButtonConfig::from_options([
            ("forceFactor", "0.3"),
            ("hover-factor", "0.25"),
            ("layer-1-mouse-force", "400"),
            ("layer-2-forceLimit", "5"),
            ("TEXT_COLOR", "black"),
        ]);
        assert_eq!(c.force_factor, 0.3);
        assert_eq!(c.hover_factor, 0.25);
        assert_eq!(c.layers[0].mouse_force, 400.0);
        assert_eq!(c.layers[1].force_limit, 5.0);
        assert_eq!(c.palette.text, "black");
    }

    #[test]
    fn rejected_values_keep_defaults() {
        let c = ButtonConfig::from_options([
            ("width", "wide"),
            ("height", "-5"),
            ("gap", "0"),
            ("margin", "NaN"),
            ("layer-1-viscosity", "1.5"),
            ("layer-2-viscosity", "0"),
            ("color1", "   "),
            ("layer-9-viscosity", "0.3"),
            ("sparkle", "yes"),
        ]);
        assert_eq!(c, ButtonConfig::default());
    }

    #[test]
    fn extreme_geometry_keeps_defaults() {
        let c = ButtonConfig::from_options([
            ("gap", "0.0000001"),
            ("width", "1e12"),
            ("height", "20000"),
            ("margin", "1e9"),
        ]);
        assert_eq!(c, ButtonConfig::default());
        assert!(!c.outline.rest_ring().is_empty());

        // each limit is itself accepted
        let c = ButtonConfig::from_options([("gap", "0.5"), ("width", "10000")]);
        assert_eq!(c.outline.gap, MIN_GAP);
        assert_eq!(c.outline.width, MAX_DIMENSION);
    }

    #[test]
    fn margin_may_be_zero() {
        let c = ButtonConfig::from_options([("margin", "0")]);
        assert_eq!(c.outline.margin, 0.0);
    }

    #[test]
    fn debug_flag_accepts_presence() {
        assert!(ButtonConfig::from_options([("debug", "")]).debug);
        assert!(!ButtonConfig::from_options([("debug", "false")]).debug);
    }

    #[test]
    fn layer_options_apply_to_extra_layers() {
        let c = ButtonConfig::default()
            .with_layers(vec![LayerSettings::default(); 3])
            .with_options([("layer-3-viscosity", "0.9")]);
        assert_eq!(c.layers[2].viscosity, 0.9);
    }
}
