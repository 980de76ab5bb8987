use std::sync::Arc;

use academy_billing::client::config::ClientConfig;
use academy_billing::client::gui::app::{AcademyApp, AppFlags};
use academy_billing::client::services::api_client::HttpApi;
use academy_billing::utils::logger::init_logger;
use iced::{Application, Settings, Size};

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let config = ClientConfig::from_env();
    init_logger(&config.log_level);
    let api = Arc::new(HttpApi::new(&config.api_base)?);

    let mut settings = Settings::with_flags(AppFlags { config, api });
    settings.window.size = Size::new(1280.0, 820.0);
    AcademyApp::run(settings)?;
    Ok(())
}
