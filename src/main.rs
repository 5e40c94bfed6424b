//! Festival Desk - promo site and operations dashboard for a garba festival.

use std::path::{Path, PathBuf};

use clap::Parser;
use eframe::egui;
use festival_desk as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::roles::Role;
use app::ui::App;

/// Festival promo site and operations dashboard.
#[derive(Parser)]
#[command(name = "festival-desk")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Start in the admin dashboard instead of the site
    #[arg(long)]
    admin: bool,

    /// Admin role to start with (super-admin, admin, manager, staff)
    #[arg(long)]
    role: Option<String>,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the guard must outlive the app
    let _log_guard = init_logging(cli.log_file.as_deref());

    tracing::info!("Festival Desk starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            AppConfig::default()
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
            AppConfig::default()
        }
    };

    let role = resolve_role(cli.role.as_deref(), &config);
    tracing::info!("Admin role: {}", role.label());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Festival Desk")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([1000.0, 680.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let start_in_admin = cli.admin;
    eframe::run_native(
        "Festival Desk",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            // Icon glyphs come from the phosphor font
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(config, config_path, rt, role, start_in_admin)))
        }),
    )
}

/// Pick the starting admin role: CLI flag wins over config, and anything
/// without admin access falls back to super admin.
fn resolve_role(flag: Option<&str>, config: &AppConfig) -> Role {
    if let Some(raw) = flag {
        match Role::parse(raw) {
            Some(role) if role.has_admin_access() => return role,
            Some(_) => tracing::warn!("Role '{}' has no admin access, ignoring", raw),
            None => tracing::warn!("Unknown role '{}', ignoring", raw),
        }
    }

    match Role::parse(&config.ui.default_admin_role) {
        Some(role) if role.has_admin_access() => role,
        _ => Role::SuperAdmin,
    }
}

fn init_logging(log_file: Option<&Path>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = || {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file = path.file_name().map_or_else(
                || "festival-desk.log".to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            let appender = tracing_appender::rolling::never(dir, file);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter()).init();
            None
        }
    }
}
