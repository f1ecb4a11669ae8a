//! Terminal entry point.

use anyhow::Context;

use pantry_desktop::{terminal, DesktopConfig, ProductApp};
use pantry_infra::ProductManager;

fn main() -> anyhow::Result<()> {
    pantry_observability::init();

    let config = DesktopConfig::from_env();
    tracing::info!(store = %config.store_path.display(), "starting product manager");

    let manager = ProductManager::open_file(&config.store_path).with_context(|| {
        format!(
            "failed to open product store at {}",
            config.store_path.display()
        )
    })?;
    let mut app = ProductApp::new(manager);

    let stdin = std::io::stdin();
    terminal::run(&mut app, stdin.lock(), std::io::stdout().lock())
}
