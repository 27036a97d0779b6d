//! # Sword Swing
//!
//! A sword hanging from a point you can grab. Drag the hilt around and the
//! blade swings after it; let go and it flies under gravity until it leaves
//! the screen, where it freezes until you pick it up again.
//!
//! ## The Crates
//!
//! -   **`swordswing`:** this crate. Command line parsing, logging, config
//!     hot-reloading and the choice between windowed and headless runs.
//! -   **[`physics`]:** the two-particle Verlet rig: integration, the stick
//!     constraint, pointer interaction and the viewport freeze.
//! -   **`render`** (feature `render`, on by default): the wgpu/winit
//!     window that draws the sword and feeds pointer input to the rig.
//!
//! ## Controls
//!
//! | Input            | Effect                                  |
//! |------------------|-----------------------------------------|
//! | Left drag        | Grab the hilt (within one blade length) |
//! | `]` / Up         | Gravity + 0.05                          |
//! | `[` / Down       | Gravity - 0.05                          |
//! | `R`              | Rebuild the rig at its start position   |
//! | `M`              | Toggle particle markers                 |
//!
//! Run with `--headless --steps N` to step the rig without a window, or
//! `--config rig.json --watch` to retune it while it runs.

pub mod app;
pub mod cli;
pub mod watcher;

pub use physics;
#[cfg(feature = "render")]
pub use render;
