//! Background worker thread: the only place a fetch blocks.
//!
//! Communication with the TUI main thread is via `mpsc` channels. Commands are
//! handled in order; nothing cancels a fetch that is already running, so a
//! response always arrives for every command sent.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use screener_core::{FetchError, StockRow, StockSource};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchStocks { request_id: u64 },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    StocksLoaded {
        request_id: u64,
        result: Result<Vec<StockRow>, FetchError>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    source: Box<dyn StockSource>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("screener-worker".into())
        .spawn(move || worker_loop(rx, tx, source))
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, source: Box<dyn StockSource>) {
    info!(source = %source.describe(), "worker started");
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::FetchStocks { request_id }) => {
                debug!(request_id, "fetching stock list");
                let result = source.fetch_all();
                if tx
                    .send(WorkerResponse::StocksLoaded { request_id, result })
                    .is_err()
                {
                    // UI side is gone.
                    break;
                }
            }
        }
    }
    debug!("worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    use screener_core::data::StaticSource;

    #[test]
    fn worker_shutdown() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();

        let handle = spawn_worker(cmd_rx, resp_tx, Box::new(StaticSource::rows(Vec::new()))).unwrap();
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn one_response_per_fetch_tagged_with_request_id() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let rows = vec![StockRow::new("TSLA", "Tesla", "Doubtful")];

        let handle = spawn_worker(cmd_rx, resp_tx, Box::new(StaticSource::rows(rows))).unwrap();
        cmd_tx.send(WorkerCommand::FetchStocks { request_id: 7 }).unwrap();
        cmd_tx.send(WorkerCommand::FetchStocks { request_id: 8 }).unwrap();

        for expected in [7, 8] {
            match resp_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
                WorkerResponse::StocksLoaded { request_id, result } => {
                    assert_eq!(request_id, expected);
                    assert_eq!(result.unwrap().len(), 1);
                }
            }
        }
        assert!(resp_rx.recv_timeout(Duration::from_millis(50)).is_err());

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn failures_are_forwarded() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let source = StaticSource::failing(FetchError::Status { status: 502 });

        let handle = spawn_worker(cmd_rx, resp_tx, Box::new(source)).unwrap();
        cmd_tx.send(WorkerCommand::FetchStocks { request_id: 1 }).unwrap();
        let WorkerResponse::StocksLoaded { result, .. } =
            resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result, Err(FetchError::Status { status: 502 }));

        drop(cmd_tx);
        handle.join().unwrap();
    }
}
