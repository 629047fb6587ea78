//! Application core - state, side effects, and coordination

mod actions;
mod event_loop;
pub mod render_thread;
pub mod state;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use render_thread::RenderThread;

use crate::config::Config;
use crate::input::KeyBindings;
use crate::posts::{FetchOutcome, PostClient};
use crate::store::Store;
use state::AppState;

pub struct App {
    pub(crate) state: AppState,
    pub(crate) store: Arc<Store>,
    pub(crate) client: Arc<PostClient>,
    pub(crate) bindings: KeyBindings,
    pub(crate) fetch_tx: UnboundedSender<FetchOutcome>,
    pub(crate) fetch_rx: UnboundedReceiver<FetchOutcome>,
    /// Generation of the most recently dispatched load. Outcomes carrying an
    /// older generation are stale and get dropped.
    pub(crate) fetch_generation: u64,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub async fn new(config: Config) -> Result<Self> {
        let store_path = Config::data_dir()?.join("store.db");
        let store = Arc::new(Store::open(&store_path).await?);

        let client = Arc::new(PostClient::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )?);

        let bindings = KeyBindings::new();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        // Restore the saved search text before the first load so the initial
        // filter uses it.
        let mut state = AppState {
            time_format: config.ui.time_format.clone(),
            ..Default::default()
        };
        state.status.loading = true;
        if let Some(saved) = store.load_search_text().await?
            && !saved.is_empty()
        {
            state.search.query = saved;
        }

        Ok(Self {
            state,
            store,
            client,
            bindings,
            fetch_tx,
            fetch_rx,
            fetch_generation: 0,
            dirty: true,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let render_thread = RenderThread::spawn()?;
        let result = self.event_loop(&render_thread).await;
        render_thread.shutdown();
        result
    }
}
