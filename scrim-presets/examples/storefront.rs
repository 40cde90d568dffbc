//! Storefront walkthrough: drives a preset-composed modal stack and
//! prints the scene after each step.
//!
//! Pick a different preset with e.g. `cargo run --example storefront -- drawer`.

use std::fs::File;

use scrim::{CloseHandle, ModalRegistry, Orchestrator};
use scrim_presets::{BackdropEffects, LayerEffects, PresetName, Surface};
use simplelog::{Config, LevelFilter, WriteLogger};

/// A plain-text scene: each node renders as an indented outline, which is
/// all a walkthrough needs to show what the layout composed.
#[derive(Debug, Clone)]
struct Scene(Vec<String>);

impl Scene {
    fn content(lines: &[&str]) -> Self {
        Scene(lines.iter().map(|line| (*line).to_string()).collect())
    }

    fn print(&self) {
        for line in &self.0 {
            println!("{line}");
        }
    }
}

impl Surface for Scene {
    fn stacked(layers: Vec<Self>) -> Self {
        Scene(layers.into_iter().flat_map(|scene| scene.0).collect())
    }

    fn layer(self, effects: &LayerEffects) -> Self {
        let mut lines = vec![format!(
            "layer anchor={:?} offset=({:.0}, {:.0}) scale={:.2} opacity={:.2}{}",
            effects.anchor,
            effects.offset_x,
            effects.offset_y,
            effects.scale,
            effects.opacity,
            if effects.interactive { " [interactive]" } else { "" },
        )];
        lines.extend(self.0.into_iter().map(|line| format!("  {line}")));
        Scene(lines)
    }

    fn backdrop(self, effects: &BackdropEffects, _on_close: CloseHandle) -> Self {
        let mut lines = vec![format!(
            "backdrop tint={}{}",
            effects.tint,
            if effects.close_on_click { " [click closes]" } else { "" },
        )];
        lines.extend(self.0.into_iter().map(|line| format!("  {line}")));
        Scene(lines)
    }
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("storefront.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let preset = std::env::args()
        .nth(1)
        .map(|name| name.parse::<PresetName>().expect("known preset name"))
        .unwrap_or_default();

    let modal = Orchestrator::new(storefront_registry(), scrim_presets::layout(preset));

    println!("== preset: {preset} ==");

    modal.push("product-detail").expect("registered");
    modal.push("cart").expect("registered");
    modal.push("confirm-delete").expect("registered");
    show(&modal, "three modals open");

    modal.pop();
    show(&modal, "confirmation dismissed");

    modal.pop();
    modal.pop();
    show(&modal, "everything closed");

    Ok(())
}

fn storefront_registry() -> ModalRegistry<Scene> {
    ModalRegistry::builder()
        .modal("login", || {
            Scene::content(&["Login", "email: _", "password: _"])
        })
        .modal("signup", || {
            Scene::content(&["Signup", "email: _", "password: _"])
        })
        .modal("product-detail", || {
            Scene::content(&["ProductDetail", "Stack Modal Hoodie"])
        })
        .modal("cart", || Scene::content(&["Cart", "1 item"]))
        .modal("confirm-delete", || {
            Scene::content(&["ConfirmDelete", "Are you sure?"])
        })
        .build()
}

fn show(modal: &Orchestrator<Scene>, caption: &str) {
    println!("-- {caption}");
    match modal.view() {
        Some(scene) => scene.print(),
        None => println!("(no modal layer)"),
    }
    println!();
}
