//! CEC Keyboard Bridge — entry point.
//!
//! Turns remote-control button presses arriving over HDMI-CEC into synthetic
//! keyboard input, and serves a JSON-over-WebSocket command channel for
//! remote key injection and CEC bus commands.
//!
//! # Usage
//!
//! ```text
//! cec-bridge [OPTIONS]
//!
//! Options:
//!   -c, --config <PATH>        Configuration file (TOML)
//!   -d, --cec-port <PORT>      CEC adapter port [default: autodetect]
//!       --device-name <NAME>   OSD name announced on the CEC bus
//!       --keyboard-name <NAME> Name of the uinput virtual keyboard
//!       --ws-port <PORT>       Command channel port [default: 9790]
//!       --ws-bind <ADDR>       Command channel bind address [default: 0.0.0.0]
//!   -m, --dump-keymap          Print the active keymap as TOML and exit
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable                 | Description                      |
//! |--------------------------|----------------------------------|
//! | `CEC_BRIDGE_CONFIG`      | Configuration file path          |
//! | `CEC_BRIDGE_CEC_PORT`    | CEC adapter port                 |
//! | `CEC_BRIDGE_WS_PORT`     | Command channel port             |
//! | `CEC_BRIDGE_WS_BIND`     | Command channel bind address     |
//!
//! # Architecture overview
//!
//! ```text
//! CEC adapter callback ──┐                        ┌── uinput keyboard
//!   (translate keymap)   ├─→ KeyEventQueue ─→ injection loop
//! WebSocket sessions ────┘          ▲
//!   (Dispatcher) ───────────────────┘  "key" commands
//!        └──────→ CecCommandExecutor ──→ CEC adapter   "cec" commands
//! ```
//!
//! Startup failures (config, uinput, adapter, autodetect) exit nonzero
//! before the injection loop starts; a runtime output-device failure is
//! fatal as well. Ctrl+C performs an ordered shutdown: injection loop first,
//! then the command channel, then the adapter.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cec_core::KeyEventQueue;

use cec_bridge::application::injection::{run_injection_loop, KeyInjector};
use cec_bridge::application::{CecKeyPressHandler, Dispatcher};
use cec_bridge::domain::{config, BridgeConfig};
use cec_bridge::infrastructure::cec::{AdapterConfig, LibcecAdapter};
use cec_bridge::infrastructure::run_command_channel;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// HDMI-CEC remote to virtual keyboard bridge.
#[derive(Debug, Parser)]
#[command(
    name = "cec-bridge",
    about = "Bridge HDMI-CEC remote key presses into synthetic keyboard input",
    version
)]
struct Cli {
    /// Configuration file (TOML). Built-in defaults apply when absent; a
    /// path that cannot be read is fatal.
    #[arg(short = 'c', long, env = "CEC_BRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// CEC adapter port (e.g. /dev/ttyACM0). Autodetected when absent.
    #[arg(short = 'd', long, env = "CEC_BRIDGE_CEC_PORT")]
    cec_port: Option<String>,

    /// OSD device name this bridge announces on the CEC bus.
    #[arg(long, default_value = "cec_bridge")]
    device_name: String,

    /// Name of the uinput virtual keyboard created at startup.
    #[arg(short = 'u', long, default_value = "cec_bridge_kb")]
    keyboard_name: String,

    /// TCP port for the command channel WebSocket listener.
    #[arg(long, default_value_t = 9790, env = "CEC_BRIDGE_WS_PORT")]
    ws_port: u16,

    /// IP address to bind the command channel to.
    ///
    /// Use `0.0.0.0` to accept commands from the LAN, or `127.0.0.1` for
    /// local clients only.
    #[arg(long, default_value = "0.0.0.0", env = "CEC_BRIDGE_WS_BIND")]
    ws_bind: String,

    /// Print the active keymap as TOML and exit.
    #[arg(short = 'm', long)]
    dump_keymap: bool,
}

impl Cli {
    /// Builds the command channel bind address from `--ws-bind` and
    /// `--ws-port`.
    fn ws_bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.ws_bind, self.ws_port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid command channel bind address: '{}:{}'",
                    self.ws_bind, self.ws_port
                )
            })
    }
}

/// Opens the synthetic keyboard output. Fatal when the platform has no
/// uinput support or the device cannot be created.
#[cfg(target_os = "linux")]
fn open_keyboard(name: &str) -> anyhow::Result<Box<dyn KeyInjector>> {
    let keyboard = cec_bridge::infrastructure::keyboard::UinputKeyboard::create(name)
        .context("can't open user input device")?;
    Ok(Box::new(keyboard))
}

#[cfg(not(target_os = "linux"))]
fn open_keyboard(_name: &str) -> anyhow::Result<Box<dyn KeyInjector>> {
    anyhow::bail!("synthetic key injection requires Linux uinput")
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let ws_addr = cli.ws_bind_addr()?;

    // ── Configuration ─────────────────────────────────────────────────────────
    let bridge_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => BridgeConfig::default(),
    };

    if cli.dump_keymap {
        let toml = config::dump_keymap(&bridge_config.table)
            .context("failed to render keymap dump")?;
        print!("{toml}");
        return Ok(());
    }

    info!("cec-bridge starting — ws={ws_addr}");

    // ── Output device ─────────────────────────────────────────────────────────
    let injector = open_keyboard(&cli.keyboard_name)?;

    // ── CEC adapter ───────────────────────────────────────────────────────────
    let adapter_config = AdapterConfig {
        device_name: cli.device_name.clone(),
        repeat_rate_ms: bridge_config.repeat_rate_ms,
        release_delay_ms: bridge_config.release_delay_ms,
        double_tap_timeout_ms: bridge_config.double_tap_timeout_ms,
    };
    let adapter = LibcecAdapter::initialize(adapter_config).context("cannot load libcec")?;

    let port = match cli.cec_port.clone() {
        Some(port) => port,
        None => {
            info!("no CEC device port provided, attempting autodetect...");
            adapter
                .detect_adapters()
                .into_iter()
                .next()
                .context("CEC device autodetection failed")?
        }
    };
    adapter
        .open(&port)
        .with_context(|| format!("unable to open CEC device on port: {port}"))?;
    info!("CEC device connected");

    let adapter = Arc::new(adapter);

    // ── Shared bridge state ───────────────────────────────────────────────────
    let table = Arc::new(bridge_config.table);
    let queue = Arc::new(KeyEventQueue::new());

    // Button presses from the adapter callback thread flow through the same
    // queue as protocol key injections.
    let handler = Arc::new(CecKeyPressHandler::new(
        Arc::clone(&table),
        Arc::clone(&queue),
    ));
    adapter.register_key_press_handler(handler);

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::clone(&queue),
        Arc::clone(&adapter) as Arc<dyn cec_bridge::application::CecAdapter>,
    ));

    // ── Graceful shutdown flag ────────────────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));

    let running_ctrlc = Arc::clone(&running);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C — initiating graceful shutdown");
                running_ctrlc.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    // ── Command channel ───────────────────────────────────────────────────────
    //
    // Runs in its own task; a bind failure clears the running flag so the
    // whole bridge comes down instead of limping on without its protocol
    // surface.
    let server_task = tokio::spawn({
        let running = Arc::clone(&running);
        async move {
            let result = run_command_channel(ws_addr, dispatcher, Arc::clone(&running)).await;
            if let Err(e) = &result {
                error!("command channel failed: {e:#}");
                running.store(false, Ordering::Relaxed);
            }
            result
        }
    });

    // ── Injection loop (foreground) ───────────────────────────────────────────
    let injection_result = run_injection_loop(queue, injector, Arc::clone(&running)).await;

    // Ordered shutdown: the loop has exited; stop the listener, join it,
    // then release the adapter.
    running.store(false, Ordering::Relaxed);
    match server_task.await {
        Ok(result) => result?,
        Err(e) => error!("command channel task failed: {e}"),
    }
    adapter.close();

    injection_result.context("output device failure")?;

    info!("cec-bridge stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_produce_correct_ws_port() {
        let cli = Cli::parse_from(["cec-bridge"]);
        assert_eq!(cli.ws_port, 9790);
    }

    #[test]
    fn test_cli_defaults_produce_correct_ws_bind() {
        let cli = Cli::parse_from(["cec-bridge"]);
        assert_eq!(cli.ws_bind, "0.0.0.0");
    }

    #[test]
    fn test_cli_defaults_have_no_config_and_no_cec_port() {
        let cli = Cli::parse_from(["cec-bridge"]);
        assert!(cli.config.is_none());
        assert!(cli.cec_port.is_none());
        assert!(!cli.dump_keymap);
    }

    #[test]
    fn test_cli_default_device_names() {
        let cli = Cli::parse_from(["cec-bridge"]);
        assert_eq!(cli.device_name, "cec_bridge");
        assert_eq!(cli.keyboard_name, "cec_bridge_kb");
    }

    #[test]
    fn test_cli_config_short_flag() {
        let cli = Cli::parse_from(["cec-bridge", "-c", "/etc/cec-bridge.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/cec-bridge.toml")));
    }

    #[test]
    fn test_cli_cec_port_short_flag() {
        let cli = Cli::parse_from(["cec-bridge", "-d", "/dev/ttyACM0"]);
        assert_eq!(cli.cec_port.as_deref(), Some("/dev/ttyACM0"));
    }

    #[test]
    fn test_cli_dump_keymap_flag() {
        let cli = Cli::parse_from(["cec-bridge", "-m"]);
        assert!(cli.dump_keymap);
    }

    #[test]
    fn test_cli_ws_port_override() {
        let cli = Cli::parse_from(["cec-bridge", "--ws-port", "9999"]);
        assert_eq!(cli.ws_port, 9999);
    }

    #[test]
    fn test_ws_bind_addr_combines_bind_and_port() {
        let cli = Cli::parse_from(["cec-bridge", "--ws-bind", "127.0.0.1", "--ws-port", "8080"]);
        let addr = cli.ws_bind_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_ws_bind_addr_rejects_invalid_bind() {
        let cli = Cli::parse_from(["cec-bridge", "--ws-bind", "not.an.ip"]);
        assert!(cli.ws_bind_addr().is_err());
    }
}
