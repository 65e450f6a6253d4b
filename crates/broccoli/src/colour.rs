//! HSL colours and named palettes.
//!
//! Hue is stored unwrapped: `perturb_hue` may push it outside `[0, 360)` and the
//! renderer is responsible for any wrap. Named colours are associated constants;
//! a `Palette` is an explicit, immutable value passed to whoever needs lookups.

use rand::Rng;
use std::fmt;

/// `hsla(hue, saturation%, lightness%, opacity)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colour {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub opacity: f64,
}

impl Colour {
    pub const BLACK: Colour = Colour::hsl(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::hsl(0.0, 100.0, 100.0);
    pub const RED: Colour = Colour::hsl(0.0, 100.0, 50.0);
    pub const ORANGE: Colour = Colour::hsl(30.0, 100.0, 50.0);
    pub const YELLOW: Colour = Colour::hsl(60.0, 100.0, 50.0);
    pub const GREEN: Colour = Colour::hsl(120.0, 100.0, 50.0);
    pub const BLUE: Colour = Colour::hsl(240.0, 100.0, 50.0);
    pub const PURPLE: Colour = Colour::hsl(300.0, 100.0, 50.0);

    /// Opaque colour.
    pub const fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            opacity: 1.0,
        }
    }

    #[inline]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    /// Shift the hue by `amount` degrees (no wraparound).
    #[inline]
    pub fn perturb_hue(self, amount: f64) -> Self {
        Self {
            hue: self.hue + amount,
            ..self
        }
    }

    /// Shift the hue by a uniform draw from `[-size, size]`.
    pub fn random_hue_perturbation<R: Rng>(self, size: f64, rng: &mut R) -> Self {
        self.perturb_hue((2.0 * rng.gen::<f64>() - 1.0) * size)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.opacity
        )
    }
}

/// Named colour lookup, e.g. for parsing a colour scheme string.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: Vec<(&'static str, Colour)>,
}

impl Palette {
    /// The eight named colours of the standard scheme.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ("red", Colour::RED),
                ("orange", Colour::ORANGE),
                ("yellow", Colour::YELLOW),
                ("green", Colour::GREEN),
                ("blue", Colour::BLUE),
                ("purple", Colour::PURPLE),
                ("black", Colour::BLACK),
                ("white", Colour::WHITE),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<Colour> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    /// Whitespace-separated names to colours; unknown names are skipped.
    pub fn scheme(&self, names: &str) -> Vec<Colour> {
        names.split_whitespace().filter_map(|n| self.get(n)).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
