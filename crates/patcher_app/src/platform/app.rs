use std::sync::Arc;

use patcher_core::{update, AppState, AppViewModel, Msg};
use patcher_engine::{Backend, ChannelEventSink, EngineEvent, EngineHandle, ReqwestBackend};
use patcher_logging::{patcher_debug, patcher_info, patcher_warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::config::AppConfig;
use super::context::PageContext;
use super::effects::{map_event, EffectRunner};
use super::logging;
use super::notifications::NotificationManager;
use super::ui;
use super::ui::render::SurfaceCommand;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_args(std::env::args().skip(1))?;
    logging::initialize(config.log_destination, config.log_level);

    // One cooperative event loop, like the page it stands in for.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let backend: Arc<dyn Backend> = Arc::new(ReqwestBackend::new(config.backend.clone())?);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, backend, event_tx);

    patcher_info!("Backend: {}", config.backend.base_url);
    for line in ui::layout::usage_lines() {
        patcher_info!("{}", line);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        if !stdin_open && !app.is_busy() {
            break;
        }
        tokio::select! {
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => {
                    for msg in ui::input::parse_line(&line) {
                        app.dispatch_msg(msg);
                    }
                }
                None => stdin_open = false,
            },
            Some(event) = event_rx.recv() => app.handle_engine_event(event),
            else => break,
        }
    }

    patcher_info!("Input closed and no job running; exiting");
    Ok(())
}

pub(crate) struct App {
    state: AppState,
    context: PageContext,
    effects: EffectRunner,
    config: AppConfig,
}

impl App {
    pub(crate) fn new(
        config: &AppConfig,
        backend: Arc<dyn Backend>,
        events: mpsc::UnboundedSender<EngineEvent>,
    ) -> Self {
        let context = PageContext::new(ui::layout::initial_page());
        let engine = EngineHandle::new(
            backend,
            Arc::new(ChannelEventSink::new(events)),
            config.poll_interval,
        );
        let notifications =
            NotificationManager::new(context.notification_container(), config.notifications);

        Self {
            state: AppState::new(),
            context,
            effects: EffectRunner::new(engine, notifications),
            config: config.clone(),
        }
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.state.controller().is_busy()
    }

    pub(crate) fn handle_engine_event(&mut self, event: EngineEvent) {
        self.dispatch_msg(map_event(event));
    }

    pub(crate) fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.effects.enqueue(effects);
        if was_dirty {
            self.render(&view);
        }
    }

    fn render(&mut self, view: &AppViewModel) {
        for command in ui::render::render(view) {
            if self.context.apply(&command) {
                self.present(&command);
            }
        }
    }

    fn present(&self, command: &SurfaceCommand) {
        match command {
            SurfaceCommand::SetInputValue(_) => patcher_debug!("{}", command),
            SurfaceCommand::SetDownloadLink(link) => {
                match self.config.backend.resolve_link(&link.href) {
                    Ok(url) => patcher_info!(
                        "Download ready: {} (save as {})",
                        url,
                        link.suggested_name.as_deref().unwrap_or("<unnamed>")
                    ),
                    Err(err) => patcher_warn!("Cannot resolve download link {}: {}", link.href, err),
                }
            }
            _ => patcher_info!("{}", command),
        }
    }

    #[cfg(test)]
    pub(crate) fn context(&self) -> &PageContext {
        &self.context
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}
