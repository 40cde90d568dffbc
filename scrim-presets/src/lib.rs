pub mod catalog;
pub mod default;
pub mod drawer;
pub mod minimal;
pub mod surface;

pub use catalog::{PresetName, UnknownPreset, layout, layout_by_name};
pub use default::DefaultPreset;
pub use drawer::{DrawerPreset, DrawerSide};
pub use minimal::MinimalPreset;
pub use surface::{Anchor, BackdropEffects, LayerEffects, Surface, Tint};
