//! Named, ready-made layouts selectable at construction time.
//!
//! The catalog is a closed set: selection by [`PresetName`] cannot fail,
//! and string selection fails fast at construction with [`UnknownPreset`]
//! so a facade is never left half-configured.

use std::fmt;
use std::str::FromStr;

use scrim::ModalLayout;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::default::DefaultPreset;
use crate::drawer::DrawerPreset;
use crate::minimal::MinimalPreset;
use crate::surface::Surface;

/// The closed set of preset names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    /// Centered pile with depth offsets, shrink and fade.
    #[default]
    Default,
    /// Top entry only, centered, no depth effects.
    Minimal,
    /// Edge-anchored panels.
    Drawer,
}

impl PresetName {
    /// Every preset the catalog carries.
    pub const ALL: [PresetName; 3] = [PresetName::Default, PresetName::Minimal, PresetName::Drawer];

    /// The name as used for string selection.
    pub const fn as_str(self) -> &'static str {
        match self {
            PresetName::Default => "default",
            PresetName::Minimal => "minimal",
            PresetName::Drawer => "drawer",
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetName {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(PresetName::Default),
            "minimal" => Ok(PresetName::Minimal),
            "drawer" => Ok(PresetName::Drawer),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

/// A preset name that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset `{0}`, expected one of: default, minimal, drawer")]
pub struct UnknownPreset(pub String);

/// The ready-made layout for `name`, with its default configuration.
///
/// To tune a preset, construct it directly (`DrawerPreset::default()
/// .with_side(..)`) and pass it to the orchestrator instead.
pub fn layout<N: Surface + 'static>(name: PresetName) -> Box<dyn ModalLayout<N>> {
    log::debug!("preset `{name}` selected");
    match name {
        PresetName::Default => Box::new(DefaultPreset::default()),
        PresetName::Minimal => Box::new(MinimalPreset::default()),
        PresetName::Drawer => Box::new(DrawerPreset::default()),
    }
}

/// String-keyed selection for callers wiring preset names through
/// configuration. Unknown names are a construction-time contract
/// violation.
pub fn layout_by_name<N: Surface + 'static>(
    name: &str,
) -> Result<Box<dyn ModalLayout<N>>, UnknownPreset> {
    Ok(layout(name.parse()?))
}
