//! The node algebra presets speak, so one preset works against any host.
//!
//! A host framework implements [`Surface`] for its node type once; every
//! preset then composes through these three combinators and the visual
//! parameter types below. Custom layouts that target a single host can
//! skip this seam entirely and implement `ModalLayout` directly.

use std::fmt;

use color::{AlphaColor, Srgb};
use scrim::CloseHandle;
use serde::{Deserialize, Serialize};

/// Node combinators a host provides to render preset layouts.
pub trait Surface: Sized {
    /// Overlay `layers` into one node, bottom to top.
    fn stacked(layers: Vec<Self>) -> Self;

    /// Place one entry's content with the given per-layer effects.
    fn layer(self, effects: &LayerEffects) -> Self;

    /// Wrap the composed pile in a dismissal backdrop.
    ///
    /// When `effects.close_on_click` is set, activating the backdrop
    /// region must invoke `on_close` — and activations on the nested
    /// layers must not propagate to it (a click inside a modal never
    /// closes it).
    fn backdrop(self, effects: &BackdropEffects, on_close: CloseHandle) -> Self;
}

/// Edge or center a layer is positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// Visual parameters a preset computes for one stack layer.
///
/// Units are host-defined (cells, pixels); the engine only guarantees the
/// `depth` and `is_top` inputs these were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerEffects {
    /// Placement anchor for the layer.
    pub anchor: Anchor,
    /// Horizontal offset from the anchor.
    pub offset_x: f32,
    /// Vertical offset from the anchor.
    pub offset_y: f32,
    /// Uniform scale, 1.0 = unscaled.
    pub scale: f32,
    /// Layer opacity, 0.0 (hidden) to 1.0.
    pub opacity: f32,
    /// Whether the layer receives pointer/keyboard input. True for the
    /// top entry only; hosts must render the rest inert.
    pub interactive: bool,
}

impl Default for LayerEffects {
    fn default() -> Self {
        Self {
            anchor: Anchor::Center,
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            interactive: true,
        }
    }
}

/// Visual parameters for the backdrop behind the pile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackdropEffects {
    /// Tint laid over the obscured content.
    pub tint: Tint,
    /// Whether activating the backdrop dismisses the top entry.
    pub close_on_click: bool,
}

impl Default for BackdropEffects {
    fn default() -> Self {
        Self {
            tint: Tint::rgba(0.0, 0.0, 0.0, 0.4),
            close_on_click: true,
        }
    }
}

/// An rgba tint with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl Tint {
    /// Create a tint from raw components.
    pub const fn rgba(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Parse a CSS color string (`#rrggbb`, `rgb(...)`, named colors).
    pub fn parse(s: &str) -> Option<Self> {
        let parsed = color::parse_color(s).ok()?;
        let srgb: AlphaColor<Srgb> = parsed.to_alpha_color();
        let [r, g, b, alpha] = srgb.components;
        Some(Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        })
    }

    /// Convert to 8-bit rgba components.
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
            (self.alpha.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba8();
        write!(f, "rgba({r}, {g}, {b}, {a})")
    }
}
