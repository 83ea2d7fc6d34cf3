mod framing;
mod point;

use anyhow::{bail, Context};
use clap::Parser;
use influxdb::{Client, InfluxDbWriteable, WriteQuery};
use log::{error, info, warn};
use std::{
    io::Read,
    time::{Duration, Instant},
};

use crate::framing::{Framer, IDLE_GAP};
use crate::point::{Point, MEASUREMENT};

// Give up once this many points are waiting on a dead database
const MAX_PENDING: usize = 1000;

/// Stream ADT7410 samples from the board and forward them to InfluxDB
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Serial port, found by USB manufacturer if not given
    #[arg(long)]
    port: Option<String>,

    /// Baud rate doesn't matter when the port is CDC
    #[arg(long, default_value_t = 1_000_000)]
    baud: u32,

    /// InfluxDB URL, samples are only logged when unset
    #[arg(long, env = "INFLUX_IP")]
    influx_url: Option<String>,

    #[arg(long, env = "INFLUX_TOKEN", hide_env_values = true)]
    influx_token: Option<String>,

    #[arg(long, default_value = "adt7410")]
    database: String,

    /// Points per write
    #[arg(long, default_value_t = 20)]
    batch: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let client = args.influx_url.as_ref().map(|url| {
        let client = Client::new(url, &args.database);
        match &args.influx_token {
            Some(token) => client.with_token(token),
            None => client,
        }
    });
    if client.is_none() {
        warn!("no InfluxDB URL given, only logging samples");
    }

    let port_name = match args.port {
        Some(port) => port,
        None => find_port()?.context("ESP32 not found")?,
    };
    info!("ESP32 @ {}", port_name);

    let mut port = serialport::new(&port_name, args.baud)
        .timeout(Duration::from_millis(2_000))
        .open()
        .with_context(|| format!("failed to open {}", port_name))?;

    let mut framer = Framer::new(IDLE_GAP);
    let mut frames: Vec<WriteQuery> = Vec::new();
    let mut buf = [0u8; 1024];

    loop {
        let bytes_available = port.bytes_to_read()? as usize;
        if bytes_available > 0 {
            let len = bytes_available.min(buf.len());
            let n = port.read(&mut buf[..len])?;
            framer.push(&buf[..n], Instant::now());
        } else {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        if let Some(packet) = framer.poll(Instant::now()) {
            match framing::parse(&packet) {
                Some(reading) => {
                    info!(
                        "#{} {:.4} C (raw 0x{:04x}, config 0x{:02x})",
                        reading.tick, reading.temperature_c, reading.raw, reading.config
                    );
                    if client.is_some() {
                        frames.push(Point::new(&reading, chrono::Utc::now()).into_query(MEASUREMENT));
                    }
                }
                // pass through normal print statements
                None => info!("device: {}", String::from_utf8_lossy(&packet).trim_end()),
            }
        }

        if let Some(client) = &client {
            if frames.len() >= args.batch {
                flush(client, &mut frames).await?;
            }
        }
    }
}

async fn flush(client: &Client, frames: &mut Vec<WriteQuery>) -> anyhow::Result<()> {
    match client.query(&*frames).await {
        Ok(_) => frames.clear(),
        Err(e) if frames.len() >= MAX_PENDING => {
            frames.clear();
            error!("too many failed write attempts: {}", e);
            println!("\x07"); // terminal bell
            bail!("InfluxDB unreachable");
        }
        Err(e) => warn!("write failed, continuing: {}", e),
    }
    Ok(())
}

fn find_port() -> anyhow::Result<Option<String>> {
    let ports = serialport::available_ports().context("no ports found")?;
    for p in ports {
        if let serialport::SerialPortType::UsbPort(usb_port) = p.port_type {
            if usb_port
                .manufacturer
                .is_some_and(|m| m.eq_ignore_ascii_case("espressif"))
            {
                return Ok(Some(p.port_name));
            }
        }
    }
    Ok(None)
}
