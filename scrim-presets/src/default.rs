//! The default preset: a centered pile where deeper entries shift aside,
//! shrink and fade.

use scrim::{CloseHandle, ModalLayout};
use serde::{Deserialize, Serialize};

use crate::surface::{Anchor, BackdropEffects, LayerEffects, Surface};

/// Centered stack with per-depth offset, scale and fade steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultPreset {
    /// Horizontal shift applied per depth step, pushing deeper entries
    /// aside so the pile reads as a stack.
    pub stack_offset: f32,
    /// Scale lost per depth step.
    pub scale_step: f32,
    /// Opacity lost per depth step.
    pub fade_step: f32,
    /// Backdrop behind the pile.
    pub backdrop: BackdropEffects,
}

impl Default for DefaultPreset {
    fn default() -> Self {
        Self {
            stack_offset: 80.0,
            scale_step: 0.06,
            fade_step: 0.08,
            backdrop: BackdropEffects::default(),
        }
    }
}

impl DefaultPreset {
    /// Override the per-depth horizontal shift.
    pub fn with_stack_offset(mut self, offset: f32) -> Self {
        self.stack_offset = offset;
        self
    }

    /// Override the backdrop.
    pub fn with_backdrop(mut self, backdrop: BackdropEffects) -> Self {
        self.backdrop = backdrop;
        self
    }

    fn effects(&self, depth: usize, is_top: bool) -> LayerEffects {
        let depth = depth as f32;
        LayerEffects {
            anchor: Anchor::Center,
            offset_x: -depth * self.stack_offset,
            offset_y: 0.0,
            scale: (1.0 - depth * self.scale_step).max(0.0),
            opacity: (1.0 - depth * self.fade_step).clamp(0.0, 1.0),
            interactive: is_top,
        }
    }
}

impl<N: Surface> ModalLayout<N> for DefaultPreset {
    fn modal_wrap(&self, content: N, depth: usize, is_top: bool) -> N {
        content.layer(&self.effects(depth, is_top))
    }

    fn background(&self, layers: Vec<N>, on_close: CloseHandle) -> N {
        N::stacked(layers).backdrop(&self.backdrop, on_close)
    }
}
