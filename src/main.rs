//! Terminal Klondike runner (default binary).
//!
//! It uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer. Mouse press / drag / release drive the drag
//! state machine; the status-row buttons and keys drive the other actions.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::info;

use tui_klondike::config::Config;
use tui_klondike::core::Game;
use tui_klondike::input::{handle_key_event, pointer_event, should_quit, PointerEvent};
use tui_klondike::logging;
use tui_klondike::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};
use tui_klondike::types::GameAction;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    if let Some(path) = &config.log_path {
        logging::init(path)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Elapsed play time; stops when the game is won.
struct Clock {
    started: Instant,
    stopped: Option<Duration>,
}

impl Clock {
    fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    fn elapsed(&mut self, won: bool) -> Duration {
        match (self.stopped, won) {
            (Some(at), _) => at,
            (None, true) => {
                let at = self.started.elapsed();
                self.stopped = Some(at);
                at
            }
            (None, false) => self.started.elapsed(),
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = Game::new(config.seed);
    info!(seed = config.seed, "starting");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = Clock::start();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let status = StatusView {
            elapsed: clock.elapsed(game.is_complete()),
        };
        view.render_into(&game, status, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(config.tick)? {
            continue;
        }
        // Apply everything queued in this interval before the next frame.
        loop {
            if handle_event(&mut game, &mut clock, term, &view, viewport, event::read()?) {
                info!(moves = game.move_count(), "quit");
                return Ok(());
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}

/// Returns true when the event asks to quit.
fn handle_event(
    game: &mut Game,
    clock: &mut Clock,
    term: &mut TerminalRenderer,
    view: &GameView,
    viewport: Viewport,
    event: Event,
) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                return true;
            }
            if let Some(action) = handle_key_event(key) {
                apply(game, clock, action);
            }
        }
        Event::Mouse(mouse) => handle_mouse(game, clock, view, viewport, mouse),
        Event::Resize(_, _) => term.invalidate(),
        _ => {}
    }
    false
}

fn handle_mouse(game: &mut Game, clock: &mut Clock, view: &GameView, viewport: Viewport, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        if let Some(action) = view.button_at(viewport, mouse.column, mouse.row) {
            apply(game, clock, action);
            return;
        }
    }

    match pointer_event(mouse, view.board_origin(viewport)) {
        Some(PointerEvent::Press(p)) => {
            game.press(p);
        }
        Some(PointerEvent::Drag(p)) => game.drag_to(p),
        Some(PointerEvent::Release(p)) => {
            game.drag_to(p);
            game.drop();
        }
        None => {}
    }
}

fn apply(game: &mut Game, clock: &mut Clock, action: GameAction) {
    game.apply_action(action);
    if action == GameAction::NewGame {
        *clock = Clock::start();
    }
}
