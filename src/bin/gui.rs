// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use bulletin_plot::{chart, cli, gui};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let opts = match cli::from_env() {
        Ok(cli::Command::Run(opts)) => opts,
        Ok(cli::Command::Help) => {
            eprintln!("{}", cli::USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}\n\n{}", cli::USAGE);
            std::process::exit(2);
        }
    };
    cli::init_logging(&opts);

    let mut viewport = ViewportBuilder::default().with_inner_size([1200.0, 720.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions { viewport, ..Default::default() };

    let on_select = chart::browser_handler(opts.fetch.url_template.clone());
    if let Err(e) = gui::run(native, opts, on_select) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
