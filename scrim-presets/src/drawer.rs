//! The drawer preset: edge-anchored panels, deeper entries receding
//! toward the edge.

use scrim::{CloseHandle, ModalLayout};
use serde::{Deserialize, Serialize};

use crate::surface::{Anchor, BackdropEffects, LayerEffects, Surface};

/// Screen edge the drawer slides from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerSide {
    Left,
    #[default]
    Right,
}

/// Edge-anchored panel stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerPreset {
    /// Edge the panels anchor against.
    pub side: DrawerSide,
    /// How far each deeper panel recedes toward the edge.
    pub peek: f32,
    /// Scale lost per depth step.
    pub scale_step: f32,
    /// Opacity lost per depth step.
    pub fade_step: f32,
    /// Backdrop behind the panels.
    pub backdrop: BackdropEffects,
}

impl Default for DrawerPreset {
    fn default() -> Self {
        Self {
            side: DrawerSide::Right,
            peek: 24.0,
            scale_step: 0.03,
            fade_step: 0.1,
            backdrop: BackdropEffects::default(),
        }
    }
}

impl DrawerPreset {
    /// Anchor the panels to the given edge.
    pub fn with_side(mut self, side: DrawerSide) -> Self {
        self.side = side;
        self
    }

    /// Override the backdrop.
    pub fn with_backdrop(mut self, backdrop: BackdropEffects) -> Self {
        self.backdrop = backdrop;
        self
    }

    fn effects(&self, depth: usize, is_top: bool) -> LayerEffects {
        let depth = depth as f32;
        let recede = depth * self.peek;
        let (anchor, offset_x) = match self.side {
            DrawerSide::Right => (Anchor::Right, recede),
            DrawerSide::Left => (Anchor::Left, -recede),
        };
        LayerEffects {
            anchor,
            offset_x,
            offset_y: 0.0,
            scale: (1.0 - depth * self.scale_step).max(0.0),
            opacity: (1.0 - depth * self.fade_step).clamp(0.0, 1.0),
            interactive: is_top,
        }
    }
}

impl<N: Surface> ModalLayout<N> for DrawerPreset {
    fn modal_wrap(&self, content: N, depth: usize, is_top: bool) -> N {
        content.layer(&self.effects(depth, is_top))
    }

    fn background(&self, layers: Vec<N>, on_close: CloseHandle) -> N {
        N::stacked(layers).backdrop(&self.backdrop, on_close)
    }
}
