use pi_in_the_sky::config::Config;
use pi_in_the_sky::device::{ConsoleButtons, HostWifi, Supervisor};
use pi_in_the_sky::display::Canvas;
use tracing_subscriber::EnvFilter;

// Single thread of control: connections are served strictly in turn
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let wifi = HostWifi::new(cfg.wifi.ssid.clone(), cfg.wifi.address);
    let buttons = ConsoleButtons::spawn();
    let mut supervisor = Supervisor::new(cfg, wifi, buttons, Canvas::new());

    tokio::select! {
        res = supervisor.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
