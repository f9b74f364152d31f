mod console;

use std::{io::BufRead, thread};

use anyhow::{Context, anyhow};
use hudpanel_backend::{FileStore, Providers};
use hudpanel_bridge::{BridgeChannels, MessageToBackend};

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .context("failed to build logger instance")?;

    let store = FileStore::from_project_dirs()?;
    log::info!("Using documents in {:?}", store.directory());

    let BridgeChannels {
        mut host_rx,
        host_tx,
        backend_rx,
        backend_tx,
    } = BridgeChannels::default();
    let backend = hudpanel_backend::run(backend_rx, backend_tx, Box::new(store), Providers::default());

    // Everything the core asks of the host is printed as one JSON object per line.
    let printer = thread::spawn(move || {
        while let Some(message) = host_rx.blocking_recv() {
            match serde_json::to_string(&message) {
                Ok(json) => println!("{json}"),
                Err(error) => log::error!("Failed to encode {message:?}: {error}"),
            }
        }
    });

    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let message = match console::parse_line(&line) {
            Ok(Some(message)) => message,
            Ok(None) => continue,
            Err(error) => {
                log::warn!("{error}");
                continue;
            }
        };

        let shutdown = matches!(message, MessageToBackend::Shutdown);
        if host_tx.blocking_send(message).is_err() || shutdown {
            break;
        }
    }
    drop(host_tx);

    backend
        .join()
        .map_err(|_| anyhow!("backend thread panicked"))?
        .context("failed to run backend")?;
    printer
        .join()
        .map_err(|_| anyhow!("printer thread panicked"))?;
    Ok(())
}
