//! The minimal preset: only the top entry is visible, centered over a
//! light backdrop. No depth effects.

use scrim::{CloseHandle, ModalLayout};
use serde::{Deserialize, Serialize};

use crate::surface::{BackdropEffects, LayerEffects, Surface, Tint};

/// Centered single-visible-layer style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimalPreset {
    /// Backdrop behind the pile.
    pub backdrop: BackdropEffects,
}

impl Default for MinimalPreset {
    fn default() -> Self {
        Self {
            backdrop: BackdropEffects {
                tint: Tint::rgba(0.0, 0.0, 0.0, 0.25),
                close_on_click: true,
            },
        }
    }
}

impl MinimalPreset {
    /// Override the backdrop.
    pub fn with_backdrop(mut self, backdrop: BackdropEffects) -> Self {
        self.backdrop = backdrop;
        self
    }
}

impl<N: Surface> ModalLayout<N> for MinimalPreset {
    fn modal_wrap(&self, content: N, _depth: usize, is_top: bool) -> N {
        content.layer(&LayerEffects {
            opacity: if is_top { 1.0 } else { 0.0 },
            interactive: is_top,
            ..LayerEffects::default()
        })
    }

    fn background(&self, layers: Vec<N>, on_close: CloseHandle) -> N {
        N::stacked(layers).backdrop(&self.backdrop, on_close)
    }
}
