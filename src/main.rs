mod content;
mod core;
mod network;
mod platform;
mod search;
mod store;
mod ui;

use crate::content::Catalog;
use crate::core::types::{StopToken, Vec2};
use crate::network::engine::NetworkAnimation;
use crate::platform::renderer::Renderer;
use crate::platform::renderer_cairo::RendererCairo;
use crate::platform::window_x11::WindowX11;
use crate::store::prefs_store::PrefsStore;
use crate::ui::dashboard_view::DashboardView;
use crate::ui::theme::ThemeKind;
use std::time::Instant;

struct Args {
    content_path: Option<String>,
    data_dir: String,
}

fn parse_args() -> Args {
    let mut args = Args {
        content_path: None,
        data_dir: ".".to_string(),
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--content" if i + 1 < argv.len() => {
                i += 1;
                args.content_path = Some(argv[i].clone());
            }
            "--data-dir" if i + 1 < argv.len() => {
                i += 1;
                args.data_dir = argv[i].clone();
            }
            "--help" => {
                println!("Usage: secdash [--content <frameworks.json>] [--data-dir <dir>]");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn main() {
    env_logger::init();

    let args = parse_args();

    // Load the framework catalog
    let catalog = match &args.content_path {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load catalog from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => match Catalog::builtin() {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Built-in catalog is invalid: {}", e);
                std::process::exit(1);
            }
        },
    };
    log::info!(
        "loaded {} frameworks, {} sections",
        catalog.framework_count(),
        catalog.section_total()
    );

    // Open preference store
    let mut store = PrefsStore::new();
    let store_path = format!("{}/.secdash.db", args.data_dir);
    store.open(&store_path);

    let theme = store
        .theme()
        .map(|name| ThemeKind::from_name(&name))
        .unwrap_or_default();

    // Create window
    let mut window = WindowX11::new();
    if !window.create(1280, 800, "CyberSecure Framework Dashboard") {
        eprintln!("Failed to create X11 window");
        std::process::exit(1);
    }

    // Create renderer
    let cr = match window.create_cairo_context() {
        Some(cr) => cr,
        None => {
            eprintln!("Failed to create Cairo context");
            std::process::exit(1);
        }
    };
    let mut renderer = RendererCairo::new(cr);

    // Background animation + dashboard view
    let mut network = NetworkAnimation::new(window.width() as f64, window.height() as f64);
    let mut view = DashboardView::new(
        &catalog,
        theme,
        window.width() as f64,
        window.height() as f64,
    );
    view.restore_expanded(&store.expanded_frameworks());

    log::debug!(
        "seeded background with {} particles, {} nodes",
        network.particle_count(),
        network.node_count()
    );

    let stop = StopToken::new();
    let mut last_time = Instant::now();

    // Main loop
    while !stop.is_stopped() {
        if !window.poll_events() {
            break;
        }

        if window.take_resized() {
            let (w, h) = (window.width() as f64, window.height() as f64);
            network.resize(w, h);
            view.resize(w, h);
        }

        let now = Instant::now();

        // Dispatch events
        for event in window.take_mouse_events() {
            if event.scroll_y.abs() < 0.01 && !event.pressed && !event.released {
                network.pointer_moved(Vec2::new(event.x, event.y));
            }
            if let Some(ui_event) = view.handle_mouse(&event, now) {
                network.apply(ui_event);
            }
        }
        if !window.pointer_inside() {
            network.pointer_left();
        }
        for event in window.take_key_events() {
            // Ctrl+Q: quit
            if event.pressed && event.ctrl && event.keycode == 24 {
                stop.stop();
                continue;
            }
            if let Some(ui_event) = view.handle_key(&event, now) {
                network.apply(ui_event);
            }
        }

        // Delta time
        let dt = now.duration_since(last_time).as_secs_f64() * 1000.0;
        last_time = now;

        network.step();
        view.update(dt, now);

        if view.take_prefs_dirty() {
            store.set_theme(view.theme_kind().name());
            store.set_expanded_frameworks(view.expanded_ids());
        }

        // Render
        if let Some(cr) = window.create_cairo_context() {
            renderer.set_context(cr);
        }

        renderer.begin_frame(window.width(), window.height());
        renderer.fill_rect(
            0.0,
            0.0,
            window.width() as f64,
            window.height() as f64,
            view.background(),
        );
        network.render(&renderer);
        view.render(&renderer);
        renderer.end_frame();

        window.flush();

        // Cap at ~60fps
        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    // Persist final state
    store.set_theme(view.theme_kind().name());
    store.set_expanded_frameworks(view.expanded_ids());
    network.shutdown();
}
