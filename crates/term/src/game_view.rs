//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom: a bordered board of `BOARD_WIDTH` x
//! `BOARD_HEIGHT` cells, then one status row holding the timer, the move
//! counter and the `[Undo] [Redo] [Reset]` buttons.

use std::time::Duration;

use crate::core::{Game, HitTest, Pile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Card, Color, GameAction, PileId, PileKind, Point, Rect, BOARD_HEIGHT, BOARD_WIDTH};

const FELT: Rgb = Rgb::new(20, 90, 50);
const SHADOW: Rgb = Rgb::new(10, 45, 25);
const CARD_FACE: Rgb = Rgb::new(240, 240, 230);
const CARD_BACK: Rgb = Rgb::new(30, 50, 120);

const BUTTONS: [(GameAction, &str); 3] = [
    (GameAction::Undo, "[Undo]"),
    (GameAction::Redo, "[Redo]"),
    (GameAction::NewGame, "[Reset]"),
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state shown in the status row that the engine does not track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the Klondike table.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left screen cell of the bordered frame.
    fn frame_origin(&self, viewport: Viewport) -> Point {
        let (frame_w, frame_h) = frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            // Leave room for the status row under the frame.
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };
        Point::new(x as i32, y as i32)
    }

    /// Screen cell of board coordinate (0, 0).
    ///
    /// Pointer events are translated into board coordinates by subtracting this.
    pub fn board_origin(&self, viewport: Viewport) -> Point {
        self.frame_origin(viewport).offset(1, 1)
    }

    /// Screen rectangles of the status-row buttons.
    fn button_rects(&self, viewport: Viewport) -> [(GameAction, &'static str, Rect); 3] {
        let frame = self.frame_origin(viewport);
        let (frame_w, frame_h) = frame_size();
        let row = frame.y + frame_h as i32;
        let total: i32 = BUTTONS.iter().map(|(_, label)| label.len() as i32 + 1).sum::<i32>() - 1;

        let mut x = frame.x + frame_w as i32 - total;
        BUTTONS.map(|(action, label)| {
            let rect = Rect::new(x, row, label.len() as i32, 1);
            x += label.len() as i32 + 1;
            (action, label, rect)
        })
    }

    /// The button under screen cell (`column`, `row`), if any.
    pub fn button_at(&self, viewport: Viewport, column: u16, row: u16) -> Option<GameAction> {
        let p = Point::new(column as i32, row as i32);
        self.button_rects(viewport)
            .into_iter()
            .find(|(_, _, rect)| rect.contains(p))
            .map(|(action, _, _)| action)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated
    /// when the terminal size changes.
    pub fn render_into<H: HitTest>(
        &self,
        game: &Game<H>,
        status: StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame_origin(viewport);
        let (frame_w, frame_h) = frame_size();
        let origin = self.board_origin(viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(origin.x, origin.y, BOARD_WIDTH as i32, BOARD_HEIGHT as i32, ' ', CellStyle::new(FELT, FELT));
        draw_box(fb, frame.x, frame.y, frame_w as i32, frame_h as i32, border);

        // Piles in render order, then the moving run on top of everything.
        for (id, pile) in game.table().piles() {
            if pile.is_empty() {
                self.draw_empty_slot(fb, origin, id, pile, game);
            } else {
                self.draw_pile(fb, origin, pile);
            }
        }

        let moving = game.moving();
        if !moving.is_empty() {
            let top = moving.card_rect(moving.len() - 1);
            let first = moving.card_rect(0);
            let run = Rect::new(first.x, first.y, first.w, top.y + top.h - first.y);
            let shadow = run.translate(origin.x + 1, origin.y + 1);
            fb.shade_rect(shadow.x, shadow.y, shadow.w, shadow.h, SHADOW);
            self.draw_pile(fb, origin, moving);
        }

        self.draw_status_row(fb, game, status, viewport, frame);

        if game.is_complete() {
            draw_overlay_text(fb, frame, frame_w, frame_h, "YOU WIN!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<H: HitTest>(&self, game: &Game<H>, status: StatusView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, status, viewport, &mut fb);
        fb
    }

    fn draw_pile(&self, fb: &mut FrameBuffer, origin: Point, pile: &Pile) {
        for (i, card) in pile.cards().iter().enumerate() {
            let rect = pile.card_rect(i);
            draw_card(fb, origin.x + rect.x, origin.y + rect.y, rect.w, rect.h, card);
        }
    }

    fn draw_empty_slot<H: HitTest>(
        &self,
        fb: &mut FrameBuffer,
        origin: Point,
        id: PileId,
        pile: &Pile,
        game: &Game<H>,
    ) {
        let rect = pile.slot_rect();
        let (x, y) = (origin.x + rect.x, origin.y + rect.y);
        let style = CellStyle::new(Rgb::new(120, 170, 130), FELT).dim();
        draw_box(fb, x, y, rect.w, rect.h, style);

        let mark = match id.kind() {
            PileKind::Foundation => 'A',
            // The stock can be clicked to recycle a non-empty waste.
            PileKind::Stock if !game.pile(PileId::Waste).is_empty() => '↺',
            _ => return,
        };
        let center = rect.center();
        fb.put_char(origin.x + center.x, origin.y + center.y - 1, mark, style);
    }

    fn draw_status_row<H: HitTest>(
        &self,
        fb: &mut FrameBuffer,
        game: &Game<H>,
        status: StatusView,
        viewport: Viewport,
        frame: Point,
    ) {
        let (_, frame_h) = frame_size();
        let row = frame.y + frame_h as i32;
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

        let secs = status.elapsed.as_secs();
        let text = format!(
            "Time: {:02}:{:02}  Moves: {}",
            secs / 60,
            secs % 60,
            game.move_count()
        );
        fb.put_str(frame.x + 1, row, &text, label);

        for (action, text, rect) in self.button_rects(viewport) {
            let enabled = match action {
                GameAction::Undo => game.can_undo(),
                GameAction::Redo => game.can_redo(),
                _ => true,
            };
            let style = if enabled { label.bold() } else { label.dim() };
            fb.put_str(rect.x, rect.y, text, style);
        }
    }
}

/// Frame size in cells: the board plus a one-cell border.
fn frame_size() -> (u16, u16) {
    (BOARD_WIDTH + 2, BOARD_HEIGHT + 2)
}

fn draw_box(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Draw one card. The label sits in the top border so it stays visible when
/// the next card of a fan covers everything below it.
fn draw_card(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, card: &Card) {
    if !card.face_up {
        let back = CellStyle::new(Rgb::new(110, 140, 220), CARD_BACK);
        fb.fill_rect(x + 1, y + 1, w - 2, h - 2, '▒', back);
        draw_box(fb, x, y, w, h, back);
        return;
    }

    let fg = match card.color() {
        Color::Red => Rgb::new(200, 40, 40),
        Color::Black => Rgb::new(20, 20, 20),
    };
    let face = CellStyle::new(fg, CARD_FACE);
    fb.fill_rect(x + 1, y + 1, w - 2, h - 2, ' ', face);
    draw_box(fb, x, y, w, h, face);

    let label = card.to_string();
    fb.put_str(x + 1, y, &label, face.bold());
    fb.put_char(x + w / 2, y + h / 2 - 1, card.suit.symbol(), face);
    let right = x + w - 1 - label.chars().count() as i32;
    fb.put_str(right, y + h - 2, &label, face);
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Point, frame_w: u16, frame_h: u16, text: &str) {
    let mid_y = frame.y + frame_h as i32 / 2;
    let text_w = text.chars().count() as i32;
    let x = frame.x + (frame_w as i32 - text_w) / 2;
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.fill_rect(x - 2, mid_y - 1, text_w + 4, 3, ' ', style);
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSnapshot;
    use crate::types::Suit;

    const VIEW: Viewport = Viewport {
        width: 80,
        height: 32,
    };

    fn cell_char(fb: &FrameBuffer, p: Point) -> char {
        fb.get(p.x as u16, p.y as u16).map(|c| c.ch).unwrap_or('\0')
    }

    #[test]
    fn board_is_centered_with_status_row_below() {
        let view = GameView::default();
        // Frame at ((80 - 66) / 2, (32 - 31) / 2); the board sits inside its border.
        assert_eq!(view.board_origin(VIEW), Point::new(8, 1));
        assert_eq!(view.button_at(VIEW, 52, 30), Some(GameAction::Undo));

        // With spare rows the anchors differ: (40 - 31) / 2 = 4 versus 0.
        let tall = Viewport::new(80, 40);
        assert_eq!(view.board_origin(tall), Point::new(8, 5));
        let top = GameView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(top.board_origin(tall), Point::new(8, 1));
        assert_eq!(top.button_at(tall, 52, 30), Some(GameAction::Undo));
        assert_eq!(view.button_at(tall, 52, 34), Some(GameAction::Undo));
    }

    #[test]
    fn dealt_table_shows_backs_and_faces() {
        let game = Game::new(42);
        let view = GameView::default();
        let fb = view.render(&game, StatusView::default(), VIEW);
        let origin = view.board_origin(VIEW);

        // Stock: face-down back.
        let stock = game.pile(PileId::Stock).slot_rect();
        assert_eq!(cell_char(&fb, origin.offset(stock.x, stock.y)), '┌');
        assert_eq!(cell_char(&fb, origin.offset(stock.x + 1, stock.y + 1)), '▒');

        // Tableau 0 holds a single face-up card; its label is in the top border.
        let pile = game.pile(PileId::Tableau(0));
        let card = *pile.top_card().unwrap();
        let rect = pile.card_rect(0);
        let label: String = card.to_string();
        let first = label.chars().next().unwrap();
        assert_eq!(cell_char(&fb, origin.offset(rect.x + 1, rect.y)), first);

        // Empty foundation slot is marked.
        let slot = game.pile(PileId::Foundation(0)).slot_rect();
        let c = slot.center();
        assert_eq!(cell_char(&fb, origin.offset(c.x, c.y - 1)), 'A');
    }

    #[test]
    fn status_row_shows_time_and_moves() {
        let mut game = Game::new(42);
        game.click_stock();
        let view = GameView::default();
        let status = StatusView {
            elapsed: Duration::from_secs(65),
        };
        let fb = view.render(&game, status, VIEW);

        let row = fb.row_text(30);
        assert!(row.contains("Time: 01:05"), "{}", row);
        assert!(row.contains("Moves: 1"), "{}", row);
        assert!(row.contains("[Undo] [Redo] [Reset]"), "{}", row);
    }

    #[test]
    fn buttons_hit_test_on_status_row() {
        let game = Game::new(1);
        let view = GameView::default();
        let fb = view.render(&game, StatusView::default(), VIEW);
        let row: Vec<char> = fb.row_text(30).chars().collect();
        let find = |needle: &str| {
            let n: Vec<char> = needle.chars().collect();
            row.windows(n.len()).position(|w| w == n.as_slice()).unwrap() as u16
        };

        assert_eq!(view.button_at(VIEW, find("[Undo]") + 1, 30), Some(GameAction::Undo));
        assert_eq!(view.button_at(VIEW, find("[Redo]"), 30), Some(GameAction::Redo));
        assert_eq!(view.button_at(VIEW, find("[Reset]") + 6, 30), Some(GameAction::NewGame));
        assert_eq!(view.button_at(VIEW, find("[Undo]") + 6, 30), None);
        assert_eq!(view.button_at(VIEW, find("[Undo]") + 1, 29), None);
        assert_eq!(view.button_at(VIEW, 0, 30), None);
    }

    #[test]
    fn moving_run_is_drawn_at_its_anchor() {
        let mut game = Game::new(42);
        let view = GameView::default();
        let origin = view.board_origin(VIEW);

        let pile = game.pile(PileId::Tableau(6));
        let card = *pile.top_card().unwrap();
        let grab = pile.footprint().center();
        assert!(game.pickup(PileId::Tableau(6), grab));
        game.drag_to(grab.offset(-20, 3));

        let fb = view.render(&game, StatusView::default(), VIEW);
        let rect = game.moving().card_rect(0);
        let first = card.to_string().chars().next().unwrap();
        assert_eq!(cell_char(&fb, origin.offset(rect.x + 1, rect.y)), first);

        // Shadow to the lower right.
        let shadow = fb
            .get((origin.x + rect.x + rect.w) as u16, (origin.y + rect.y + rect.h) as u16)
            .unwrap();
        assert_eq!(shadow.style.bg, SHADOW);
    }

    #[test]
    fn completed_game_shows_win_overlay() {
        let mut game = Game::new(1);
        let mut snap: GameSnapshot = game.snapshot();
        snap.tableau = Default::default();
        snap.stock.clear();
        snap.waste.clear();
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            snap.foundations[i] = (1..=13).map(|r| Card::new(r, suit).turned_up()).collect();
        }
        game.restore(&snap);
        assert!(game.is_complete());

        let fb = GameView::default().render(&game, StatusView::default(), VIEW);
        let text: Vec<String> = (0..VIEW.height).map(|y| fb.row_text(y)).collect();
        assert!(text.iter().any(|row| row.contains("YOU WIN!")));
    }
}
