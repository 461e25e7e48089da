use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use genmon_lib::device::DeviceClient;
use genmon_lib::poller::PageKind;
use genmon_lib::settings::{self, MonitorSettings};

#[derive(Parser)]
#[command(name = "genmon", version, about = "Watch a generator controller over its local network")]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Controller base URL (overrides the settings file and GENMON_DEVICE_URL)
    #[arg(long, global = true)]
    device: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Poll status, uptime and the event log until interrupted
    Watch {
        #[arg(long, value_enum, default_value_t = PageKind::Main)]
        page: PageKind,
    },
    /// Check that the controller answers
    Ping,
    /// Fire a manual override endpoint (POST /test/<action>)
    Trigger { action: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    genmon_lib::init_logging(settings::debug_enabled());

    let mut settings = MonitorSettings::load(cli.config.as_deref())?;
    settings.apply_env();
    if let Some(device) = cli.device {
        settings.device_url = device;
    }

    match cli.command {
        Command::Watch { page } => genmon_lib::watch(&settings, page).await,
        Command::Ping => {
            let client = DeviceClient::new(&settings.device_url, settings.request_timeout())?;
            let reply = client.ping().await.context("ping failed")?;
            println!("{}", reply.message);
            Ok(())
        }
        Command::Trigger { action } => {
            let client = DeviceClient::new(&settings.device_url, settings.request_timeout())?;
            client
                .trigger(&action)
                .await
                .with_context(|| format!("trigger '{action}' failed"))?;
            println!("Triggered {action}");
            Ok(())
        }
    }
}
