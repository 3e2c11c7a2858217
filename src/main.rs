use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info};

use showcase::config::Args;
use showcase::logging::init_logging;
use showcase::render::{InputState, PageLayout, Scene};
use showcase::viewport::Viewport;
use showcase::{Page, PageEvent};

fn main() -> anyhow::Result<()> {
    // --- Command Line & Logging ---
    let args = Args::parse();
    init_logging(args.verbose)?;
    let config = args.page_config()?;
    info!(assets = ?args.assets, "starting showcase");

    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Shree Clinic")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR); // Keep raylib's own chatter out of our logs
    rl.set_exit_key(None); // Escape closes the mobile menu, not the window

    let screen = |rl: &RaylibHandle| {
        Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32)
    };

    // --- Page State & Assets ---
    let mut viewport = screen(&rl);
    let mut layout = PageLayout::new(viewport);
    let specs = layout.reveal_specs();
    let mut scene = Scene::load(&mut rl, &thread, &args.assets, specs.len());
    let mut page = Page::load(&layout, &config, viewport, &specs, rl.get_time() * 1000.0);
    page.set_max_scroll(layout.max_scroll());
    let mut input = InputState::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let now = rl.get_time() * 1000.0; // Page clock in ms

        // --- Resize ---
        let current = screen(&rl);
        if current != viewport {
            debug!(width = current.width, height = current.height, "window resized");
            viewport = current;
            layout = PageLayout::new(viewport); // Boxes are rebuilt before the page re-measures
            page.set_max_scroll(layout.max_scroll());
            page.handle(PageEvent::Resize(viewport), &layout);
        }

        // --- Input & Timers ---
        for event in input.poll(&rl, &layout, &page) {
            page.handle(event, &layout);
        }
        page.handle(PageEvent::Frame { now, dt }, &layout);
        page.handle(PageEvent::Intersections(layout.intersections(page.scroll_y())), &layout);
        scene.update(&page, dt); // Tweens chase the targets the page just settled on

        // --- Draw ---

        let mut d = rl.begin_drawing(&thread);
        scene.draw(&mut d, &layout, &page);
    }

    info!("window closed");
    Ok(())
}
