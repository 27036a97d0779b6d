use std::sync::mpsc::Receiver;
use std::sync::Arc;

use anyhow::{Context, Result};
use physics::RigConfig;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::state::State;

/// Everything the windowed frame loop needs to start.
pub struct RunSettings {
    pub config: RigConfig,
    /// Initial window size in logical pixels
    pub width: u32,
    pub height: u32,
    /// Reloaded configs pushed by a file watcher, if one is running
    pub updates: Option<Receiver<RigConfig>>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            config: RigConfig::default(),
            width: 800,
            height: 600,
            updates: None,
        }
    }
}

/// Open a window and drive the rig until it is closed.
pub fn run(settings: RunSettings) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Sword Swing")
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let mut state = pollster::block_on(State::new(
        window.clone(),
        settings.config,
        settings.updates,
    ))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == state.window().id() => {
            if !state.input(event) {
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(physical_size) => {
                        state.resize(*physical_size);
                    }
                    WindowEvent::RedrawRequested => {
                        state.update();
                        match state.render() {
                            Ok(()) => {}
                            // Reconfigure the surface if lost
                            Err(wgpu::SurfaceError::Lost) => {
                                state.resize(state.window.inner_size());
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                tracing::error!("GPU out of memory, exiting");
                                elwt.exit();
                            }
                            // Outdated and Timeout resolve on the next frame
                            Err(e) => tracing::warn!("Surface error: {e:?}"),
                        }
                    }
                    _ => {}
                }
            }
        }
        Event::AboutToWait => {
            state.window().request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
