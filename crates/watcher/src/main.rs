use chrono::Utc;

use relay_notifier::NotificationDispatcher;
use relay_notifier::telegram::TelegramNotifier;
use relay_watcher::api::ApiPoller;
use relay_watcher::relay::RelayLoop;
use relay_watcher::startup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_watcher=info,relay_notifier=info".into()),
        )
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();

    // Load configuration; nothing starts without the three credentials
    let config = startup::load_from_env()?;

    let poller = ApiPoller::from_config(&config)?;
    let dispatcher = NotificationDispatcher::new(TelegramNotifier::from_config(&config)?);
    let mut relay = RelayLoop::new(
        poller,
        dispatcher,
        Utc::now().timestamp(),
        config.poll_interval(),
    );

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        _ = relay.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!(cursor = relay.cursor(), "Status relay stopped.");
    Ok(())
}
