mod app;
mod config;
mod effects;
mod ui;

use std::error::Error;
use std::sync::Arc;

use engine_logging::{engine_error, engine_info, engine_warn};
use translate_engine::{OpenAiTranslator, RonSettingsStore, SettingsStore, Translator};

use app::TranslateApp;
use config::AppConfig;
use ui::constants::{WINDOW_SIZE, WINDOW_TITLE};

pub fn run_app() -> Result<(), Box<dyn Error>> {
    let home = config::app_home();
    let (config, config_error) = match config::load_config(&home) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    engine_logging::initialize(&config.log_settings(&home));
    if let Some(err) = config_error {
        engine_warn!("using default configuration: {}", err);
    }
    engine_info!("translate app starting, home={:?}", home);

    let settings: Arc<dyn SettingsStore> = match RonSettingsStore::open(&home) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            engine_warn!("settings unreadable, starting empty: {}", err);
            Arc::new(RonSettingsStore::empty(&home))
        }
    };
    let translator: Arc<dyn Translator> = match OpenAiTranslator::new(config.client_settings()) {
        Ok(translator) => Arc::new(translator),
        Err(err) => {
            engine_error!("failed to build http client: {}", err);
            return Err(err.into());
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Box::new(TranslateApp::new(cc, home, config, translator, settings))),
    )?;
    engine_info!("translate app closed");
    Ok(())
}
