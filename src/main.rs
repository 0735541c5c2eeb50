//! Portfolio web app entry point.

use tarafdar_portfolio::app::App;

fn main() {
    dioxus::logger::initialize_default();

    tracing::info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    dioxus::launch(App);
}
