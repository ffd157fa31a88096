use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use console_core::{update, AppState, AppViewModel, Msg};
use console_engine::ApiSettings;
use console_logging::{console_debug, console_info};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::ui::input::{self, UiAction};
use super::ui::layout;
use super::ui::{constants, render, UiState};

pub fn run_app(settings: ApiSettings) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx).context("starting request engine")?;
    let mut app = App::new(runner, msg_rx);
    app.dispatch_msg(Msg::Bootstrap);

    let mut terminal = ratatui::init();
    let outcome = within_session(
        || execute!(io::stdout(), EnableMouseCapture).context("enabling mouse capture"),
        || app.run(&mut terminal),
        || {
            let _ = execute!(io::stdout(), DisableMouseCapture);
            ratatui::restore();
        },
    );

    console_info!("Index console closed");
    outcome
}

/// Runs `body` after `setup` succeeds. `teardown` runs on every path,
/// including a failed `setup`.
fn within_session<T>(
    setup: impl FnOnce() -> anyhow::Result<()>,
    body: impl FnOnce() -> anyhow::Result<T>,
    teardown: impl FnOnce(),
) -> anyhow::Result<T> {
    let outcome = setup().and_then(|()| body());
    teardown();
    outcome
}

struct App {
    state: AppState,
    ui: UiState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    needs_redraw: bool,
}

impl App {
    fn new(runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            ui: UiState::default(),
            runner,
            msg_rx,
            needs_redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let poll_interval = Duration::from_millis(constants::POLL_INTERVAL_MS);
        loop {
            self.process_pending_messages();

            if self.needs_redraw {
                let view = self.state.view();
                terminal
                    .draw(|frame| render::draw(frame, &view, &mut self.ui))
                    .context("drawing frame")?;
                self.needs_redraw = false;
            }

            if !event::poll(poll_interval).context("polling terminal events")? {
                continue;
            }
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let view = self.state.view();
                    match input::map_key(key, &view, self.ui.selected_row) {
                        UiAction::Quit => return Ok(()),
                        UiAction::Dispatch(msg) => self.dispatch_msg(msg),
                        UiAction::SelectPrevious => self.move_selection(&view, false),
                        UiAction::SelectNext => self.move_selection(&view, true),
                        UiAction::None => {}
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(link) = layout::tab_at(&self.ui.tab_areas, mouse.column, mouse.row)
                    {
                        self.dispatch_msg(Msg::TabActivated {
                            panel: link.panel(),
                            origin: Some(link),
                        });
                    }
                }
                Event::Resize(..) => self.needs_redraw = true,
                _ => {}
            }
        }
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        console_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_redraw = true;
            let rows = input::result_rows(&state.view());
            self.ui.selected_row = self
                .ui
                .selected_row
                .filter(|_| rows > 0)
                .map(|row| row.min(rows - 1));
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn move_selection(&mut self, view: &AppViewModel, forward: bool) {
        let rows = input::result_rows(view);
        let next = input::step_selection(self.ui.selected_row, rows, forward);
        if next != self.ui.selected_row {
            self.ui.selected_row = next;
            self.needs_redraw = true;
        }
    }
}
