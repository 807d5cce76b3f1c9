#[cfg(test)]
mod tests;

pub mod calendar_core;
pub mod config;
pub mod provider;
pub mod state;
mod ui;

use {
    crate::calendar_core::normalize_day,
    crate::config::Config,
    crate::provider::HttpCalendarSource,
    crate::state::App,
    chrono::Utc,
};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Write logs to stderr (suppressed while the UI holds the alternate screen)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env()?;

    log::info!("Starting calflow...");
    log::info!("   CALENDAR_API_URL: {}", config.calendar_url);
    log::info!("   MARKET_TIMEZONE: {}", config.market_tz);
    let currencies_str = if config.currencies.is_empty() {
        "None (all currencies)".to_string()
    } else {
        config.currencies.join(", ")
    };
    log::info!("   Currency filter: {}", currencies_str);

    // "Today" in the market's zone, so the day filter agrees with the
    // dashboard near midnight.
    let day = Utc::now().with_timezone(&config.market_tz).date_naive();

    let source = HttpCalendarSource::new(config.calendar_url.clone())?;
    let rows = provider::fetch_day(&source, day).await;
    let events = normalize_day(&rows, day, config.market_tz);
    log::info!(
        "Normalized {} events for {} ({} raw rows)",
        events.len(),
        day,
        rows.len()
    );

    let mut app = App::new(events, day, &config);
    ui::run_ui(&mut app)?;

    Ok(())
}
