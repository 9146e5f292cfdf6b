use clap::Parser;
use gtk4::prelude::*;
use gtk4::Application;
use log::{info, warn};
use range_slider::config::AppConfig;
use range_slider::core::shutdown_animation_manager;
use range_slider::MainWindow;
use range_slider_types::{string_to_gradient, Preset};
use std::path::PathBuf;

const APP_ID: &str = "com.github.range_slider.range_slider";

/// range-slider - Range slider and gradient editor demo
#[derive(Parser, Debug, Clone)]
#[command(name = "range-slider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Gradient preset to seed the editor with (empty, jet, jet-dark, earth)
    #[arg(short = 'p', long = "preset", value_name = "NAME")]
    preset: Option<Preset>,

    /// Gradient to seed the editor with, as pos,r,g,b tuples joined by ':'
    #[arg(short = 'g', long = "gradient", value_name = "STOPS")]
    gradient: Option<String>,

    /// Edge padding of the floating sliders (0.0 to 0.2)
    #[arg(long = "padding", value_name = "FRACTION")]
    padding: Option<f64>,

    /// Configuration file to use instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting range-slider v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli);

    // Create GTK application
    let app = Application::builder().application_id(APP_ID).build();

    let config_path = cli.config.clone();
    app.connect_activate(move |app| {
        info!("Building UI");
        let window = MainWindow::new(app, &config, config_path.clone());
        window.present();
    });

    app.connect_shutdown(|_| {
        shutdown_animation_manager();
    });

    // Run the application (pass only the program name since we already parsed the args)
    app.run_with_args(&["range-slider"]);
}

/// Load the configuration file and apply command line overrides
fn load_config(cli: &Cli) -> AppConfig {
    let loaded = match cli.config.as_ref() {
        Some(path) if path.exists() => AppConfig::load_from_path(path),
        Some(path) => {
            info!("Config file {} does not exist yet, using defaults", path.display());
            Ok(AppConfig::default())
        }
        None => AppConfig::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load configuration: {}", e);
        AppConfig::default()
    });

    if let Some(preset) = cli.preset {
        config.gradient.preset = preset;
        config.gradient.serialized = None;
    }
    if let Some(ref gradient) = cli.gradient {
        if string_to_gradient(gradient).len() < 2 {
            warn!("Gradient '{}' has fewer than two valid stops", gradient);
        }
        config.gradient.serialized = Some(gradient.clone());
    }
    if let Some(padding) = cli.padding {
        config.floating.padding = padding;
    }

    info!(
        "Configuration: range [{}, {}], padding {}, preset {}",
        config.slider.minimum,
        config.slider.maximum,
        config.floating.padding,
        config.gradient.preset
    );
    config
}
