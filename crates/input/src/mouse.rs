//! Mouse mapping from terminal events to board-relative pointer events.
//!
//! Only the left button drives the table. Coordinates are translated from
//! screen cells to board cells by subtracting the board's on-screen origin,
//! so they may be negative when the pointer is left of or above the board.

use crate::types::Point;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Point),
    Drag(Point),
    Release(Point),
}

impl PointerEvent {
    pub fn point(&self) -> Point {
        match *self {
            PointerEvent::Press(p) | PointerEvent::Drag(p) | PointerEvent::Release(p) => p,
        }
    }
}

/// Map a mouse event to a pointer event in board coordinates.
pub fn pointer_event(event: MouseEvent, board_origin: Point) -> Option<PointerEvent> {
    let at = Point::new(
        i32::from(event.column) - board_origin.x,
        i32::from(event.row) - board_origin.y,
    );
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press(at)),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Drag(at)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Release(at)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_button_lifecycle() {
        let origin = Point::new(4, 2);
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 8), origin),
            Some(PointerEvent::Press(Point::new(6, 6)))
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 9), origin),
            Some(PointerEvent::Drag(Point::new(8, 7)))
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 0), origin),
            Some(PointerEvent::Release(Point::new(-3, -2)))
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let origin = Point::default();
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), origin),
            None
        );
        assert_eq!(pointer_event(mouse(MouseEventKind::Moved, 1, 1), origin), None);
        assert_eq!(pointer_event(mouse(MouseEventKind::ScrollUp, 1, 1), origin), None);
    }

    #[test]
    fn test_point_accessor() {
        let p = Point::new(3, 4);
        assert_eq!(PointerEvent::Drag(p).point(), p);
    }
}
