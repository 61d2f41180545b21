use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_warn};

use crate::fetch::{FetchSettings, HeadlinesFetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchError, HeadlinesQuery, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        query: HeadlinesQuery,
    },
}

/// Runs fetches on a background tokio runtime and reports their completion.
///
/// Commands are executed concurrently; each result comes back tagged with the
/// request id it was issued with, in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn HeadlinesFetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            engine_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, query: HeadlinesQuery) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, query })
            .is_err()
        {
            engine_warn!("engine stopped; fetch {} not issued", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn HeadlinesFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, query } => {
            let result = fetcher.fetch(&query).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
