use std::env;
use std::path::PathBuf;
use std::process;

use formloom_config::Config;
use formloom_dioxus::ui::{App, ExtraStylesheet};
use formloom_engine::StyleClasses;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("formloom starting up!");

    let args: Vec<String> = env::args().collect();
    let config_path = match args.len() {
        1 => Config::config_path(),
        2 => PathBuf::from(&args[1]),
        _ => {
            let program_name = args.first().map(String::as_str).unwrap_or("formloom");
            eprintln!("Usage: {program_name} [config-file]");
            process::exit(1);
        }
    };
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let styles = style_classes(&config);
    let extra_css = match config.read_stylesheet() {
        Ok(css) => css.unwrap_or_default(),
        Err(e) => {
            log::warn!("{e}; continuing with the built-in stylesheet");
            String::new()
        }
    };

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(styles)
        .with_context(ExtraStylesheet(extra_css))
        .launch(App);
}

/// Default class tables with the config's overrides applied
fn style_classes(config: &Config) -> StyleClasses {
    let mut styles = StyleClasses::default();
    let unknown = styles.apply_overrides(
        config
            .font_size_classes
            .iter()
            .map(|(key, class)| (key.as_str(), class.as_str())),
        config
            .font_weight_classes
            .iter()
            .map(|(key, class)| (key.as_str(), class.as_str())),
    );
    for key in unknown {
        log::warn!("Ignoring unknown style key {key}");
    }
    styles
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("formloom")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
