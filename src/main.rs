mod app;
mod config;
mod logger;
mod plotter;
mod scene;
mod simulation;
mod sink;
mod types;
mod utils;

use eframe::egui;
use log::{error, info};

use app::MotionApp;
use config::ConfigManager;

fn main() {
    // 先读配置再初始化日志，加载结果在日志就绪后输出
    let (config, source) = ConfigManager::load_or_default();
    logger::init_logger(&config.get_config().logging.level);
    info!("Application starting");
    source.log();

    let window = config.get_config().window.clone();
    let options = eframe::NativeOptions {
        vsync: window.vsync,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width, window.height])
            .with_resizable(window.resizable),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        &window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(MotionApp::new(config)))),
    ) {
        error!("GUI failed: {}", e);
        std::process::exit(1);
    }

    info!("GUI closed, exiting");
}
