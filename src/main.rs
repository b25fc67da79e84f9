use std::sync::Arc;

use anyhow::Result;

use menulist::backend::HttpBackend;
use menulist::config::Config;
use menulist::constants::ERROR_SERVICE_UNREACHABLE;
use menulist::dashboard::Dashboard;
use menulist::logger;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().nth(1).as_deref() == Some("generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let backend = Arc::new(HttpBackend::new(config.server_base_url()));
    let mut dashboard = Dashboard::new(backend);

    if let Err(e) = dashboard.load().await {
        eprintln!("{} at {}", ERROR_SERVICE_UNREACHABLE, config.server_base_url());
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Start the food service, or");
        eprintln!("2. Point menulist at it: [server] base_url in menulist.toml");
        eprintln!("3. Run `menulist generate-config` to create a config file to edit");
        return Err(e.into());
    }

    println!("🍽️  {} item(s) on the menu", dashboard.foods().len());
    for food in dashboard.foods() {
        let flag = if food.available { "✅" } else { "⛔" };
        println!("{flag} #{:<5} {:<30} {:>10}  {}", food.id, food.name, food.price, food.description);
    }

    Ok(())
}
