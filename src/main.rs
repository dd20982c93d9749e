#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::{version_label, APP_NAME};

fn main() {
    // Logging is best-effort; the planner works without it.
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("failed to init logger: {err}");
    }
    dioxus_logger::tracing::info!("Starting {APP_NAME} {}", version_label());

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer has the same explicit-sync problem.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
