use grammar_tracker::TrackerApp;
use grammar_tracker::config::TrackerConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrackerConfig::from_env();
    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let mut app = TrackerApp::from_config(&config);
            app.restore_from_storage(cc.storage);
            Ok(Box::new(app))
        }),
    )
}
