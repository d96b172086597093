//! # CoinWatch Terminal
//!
//! Native desktop dashboard for cryptocurrency market data: summary
//! stats, trending/gainers/losers highlights and a sortable, filterable,
//! paginated coins table, refreshed periodically from the public market
//! data API.

use std::time::Duration;
use terminal::app::App;
use terminal::ui;
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "CoinWatch Terminal";

fn main() -> eframe::Result {
    // Optional .env: COINGECKO_API_KEY for the authenticated API tier
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // reqwest needs a tokio runtime; enter the global one so spawns from
    // UI handlers land on it
    let _runtime_guard = terminal::utils::runtime::TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1366.0, 768.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            ui::theme::Theme::apply(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new()))
        }),
    )
}

/// eframe wrapper around the application core.
struct DashboardApp {
    app: App,
}

impl DashboardApp {
    fn new() -> Self {
        Self { app: App::new() }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::screens::dashboard::render(ui, &mut self.app);
        });

        // Keep draining the event channel while idle
        ctx.request_repaint_after(Duration::from_millis(250));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.app.shutdown();
    }
}
