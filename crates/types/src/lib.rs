//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond simple derivations, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Card Model
//!
//! A card is identified by `(rank, suit)`; orientation (`face_up`) is mutable state:
//!
//! | Field | Domain | Notes |
//! |-------|--------|-------|
//! | `rank` | 1..=13 | 1 = Ace, 11 = Jack, 12 = Queen, 13 = King |
//! | `suit` | clubs, diamonds, hearts, spades | color is derived |
//! | `face_up` | bool | serialized as `faceUp` |
//!
//! # Table Geometry
//!
//! Positions are expressed in terminal cells (columns, rows) relative to the board
//! origin. The default [`Layout`] places:
//!
//! | Pile | Origin |
//! |------|--------|
//! | Stock | (1, 1) |
//! | Waste | (10, 1) |
//! | Foundation *i* | (28 + 9*i, 1) |
//! | Tableau *i* | (1 + 9*i, 6) |
//!
//! Cards are 7 columns by 4 rows; tableau fans step down one row per card.
//!
//! # Examples
//!
//! ```
//! use tui_klondike_types::{Card, Color, GameAction, Suit, DECK_SIZE};
//!
//! let ace = Card::new(1, Suit::Spades);
//! assert_eq!(ace.color(), Color::Black);
//! assert!(!ace.face_up);
//!
//! let parsed = Suit::from_str("Hearts").unwrap();
//! assert_eq!(parsed.color(), Color::Red);
//!
//! assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
//! assert_eq!(DECK_SIZE, 52);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck
pub const DECK_SIZE: usize = 52;

/// Cards per suit (Ace through King)
pub const RANKS_PER_SUIT: u8 = 13;

/// Rank of the Ace
pub const ACE: u8 = 1;

/// Rank of the King
pub const KING: u8 = 13;

/// Number of tableau columns
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation piles (one per suit)
pub const FOUNDATION_COUNT: usize = 4;

/// Cards remaining in the stock after the deal (52 - 1 - 2 - ... - 7)
pub const STOCK_AFTER_DEAL: usize = DECK_SIZE - TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// Board width in terminal columns for the default layout
pub const BOARD_WIDTH: u16 = 64;

/// Board height in terminal rows for the default layout
///
/// Tallest possible tableau column: 6 face-down cards plus a King-to-Ace run.
pub const BOARD_HEIGHT: u16 = 28;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_geometry_constants() {
        assert_eq!(STOCK_AFTER_DEAL, 24);
        assert_eq!(FOUNDATION_COUNT * RANKS_PER_SUIT as usize, DECK_SIZE);

        let layout = Layout::default();
        let tallest = layout.origin(PileId::Tableau(0)).y as u16
            + (6 + RANKS_PER_SUIT as u16 - 1) * layout.metrics.fan_spacing as u16
            + layout.metrics.height as u16;
        assert_eq!(tallest, BOARD_HEIGHT);

        let rightmost = layout.origin(PileId::Tableau(6)).x as u16 + layout.metrics.width as u16;
        assert!(rightmost < BOARD_WIDTH);
    }

    #[test]
    fn card_serializes_with_camel_case_orientation() {
        let card = Card::new(12, Suit::Hearts).turned_up();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"rank":12,"suit":"hearts","faceUp":true}"#);

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn card_index_is_unique_over_deck() {
        let mut seen = [false; DECK_SIZE];
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                let idx = Card::new(rank, suit).index();
                assert!(!seen[idx], "duplicate index {}", idx);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn rect_overlap_is_strict() {
        let a = Rect::new(0, 0, 7, 4);
        assert!(a.intersects(&Rect::new(6, 3, 7, 4)));
        // Touching edges do not overlap.
        assert!(!a.intersects(&Rect::new(7, 0, 7, 4)));
        assert!(!a.intersects(&Rect::new(0, 4, 7, 4)));

        assert!(!a.intersects(&a.translate(7, 0)));
        assert!(a.intersects(&a.translate(-6, -3)));

        assert!(a.contains(Point::new(0, 0)));
        assert!(a.contains(Point::new(6, 3)));
        assert!(!a.contains(Point::new(7, 3)));
    }
}

/// The four suits, in deck enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck construction order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Card color derived from the suit (clubs/spades are black)
    pub fn color(&self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    /// Parse suit from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_klondike_types::Suit;
    ///
    /// assert_eq!(Suit::from_str("clubs"), Some(Suit::Clubs));
    /// assert_eq!(Suit::from_str("SPADES"), Some(Suit::Spades));
    /// assert_eq!(Suit::from_str("stars"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clubs" => Some(Suit::Clubs),
            "diamonds" => Some(Suit::Diamonds),
            "hearts" => Some(Suit::Hearts),
            "spades" => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn ordinal(&self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

/// Card color used by the tableau alternation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

/// A playing card.
///
/// Identity is `(rank, suit)`; `face_up` is orientation and changes during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
    #[serde(rename = "faceUp")]
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!(is_valid_rank(rank), "rank out of range: {}", rank);
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Same card turned face up
    pub fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns true if the cards are of different colors
    pub fn is_opposite_color_to(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    /// Returns true if this card ranks exactly one above `other`
    pub fn is_one_more_than(&self, other: &Card) -> bool {
        self.rank == other.rank + 1
    }

    /// Identity of the card in `0..DECK_SIZE`, independent of orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_klondike_types::{Card, Suit};
    ///
    /// assert_eq!(Card::new(1, Suit::Clubs).index(), 0);
    /// assert_eq!(Card::new(13, Suit::Spades).index(), 51);
    /// ```
    pub fn index(&self) -> usize {
        self.suit.ordinal() * RANKS_PER_SUIT as usize + (self.rank as usize - 1)
    }

    /// Short rank label: "A", "2".."10", "J", "Q", "K"
    pub fn rank_label(&self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS
            .get((self.rank as usize).wrapping_sub(1))
            .copied()
            .unwrap_or("?")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Returns true if `rank` is within Ace..=King
pub fn is_valid_rank(rank: u8) -> bool {
    (ACE..=KING).contains(&rank)
}

/// Stable reference to one of the 13 table piles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    /// Tableau column, 0..7
    Tableau(u8),
    /// Foundation pile, 0..4
    Foundation(u8),
    Stock,
    Waste,
}

impl PileId {
    /// Behavioral variant of the pile this id refers to
    pub fn kind(&self) -> PileKind {
        match self {
            PileId::Tableau(_) => PileKind::Tableau,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Tableau(i) => write!(f, "tableau[{}]", i),
            PileId::Foundation(i) => write!(f, "foundation[{}]", i),
            PileId::Stock => f.write_str("stock"),
            PileId::Waste => f.write_str("waste"),
        }
    }
}

/// Pile variants. The variant selects layout and drop-acceptance policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileKind {
    Tableau,
    Stock,
    Waste,
    Foundation,
    /// Transient buffer holding the cards under drag
    Moving,
}

/// A position in board coordinates (terminal column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn at(origin: Point, w: i32, h: i32) -> Self {
        Self::new(origin.x, origin.y, w, h)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same size, moved by `(dx, dy)`
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Cell roughly in the middle of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Strict overlap; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Card footprint and fan spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMetrics {
    pub width: i32,
    pub height: i32,
    /// Vertical step between fanned cards
    pub fan_spacing: i32,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            width: 7,
            height: 4,
            fan_spacing: 1,
        }
    }
}

/// Pile origins and card metrics for a whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub metrics: CardMetrics,
    pub stock: Point,
    pub waste: Point,
    /// Origin of foundation 0; the others follow at `pile_spacing`
    pub foundations: Point,
    /// Origin of tableau 0; the others follow at `pile_spacing`
    pub tableau: Point,
    /// Horizontal step between adjacent foundations / tableau columns
    pub pile_spacing: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            metrics: CardMetrics::default(),
            stock: Point::new(1, 1),
            waste: Point::new(10, 1),
            foundations: Point::new(28, 1),
            tableau: Point::new(1, 6),
            pile_spacing: 9,
        }
    }
}

impl Layout {
    /// Top-left corner of a pile's base slot
    pub fn origin(&self, id: PileId) -> Point {
        match id {
            PileId::Stock => self.stock,
            PileId::Waste => self.waste,
            PileId::Foundation(i) => self.foundations.offset(i as i32 * self.pile_spacing, 0),
            PileId::Tableau(i) => self.tableau.offset(i as i32 * self.pile_spacing, 0),
        }
    }
}

/// Non-pointer commands that can be applied to the game
///
/// Pointer-driven commands (pickup, drag, drop) carry coordinates and are
/// exposed as dedicated engine methods instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Discard the current game and deal a new one
    NewGame,
    /// Step back one recorded move
    Undo,
    /// Re-apply the most recently undone move
    Redo,
    /// Draw from the stock, or recycle the waste when the stock is empty
    ClickStock,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_klondike_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("REDO"), Some(GameAction::Redo));
    /// assert_eq!(GameAction::from_str("clickStock"), Some(GameAction::ClickStock));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" | "reset" => Some(GameAction::NewGame),
            "undo" => Some(GameAction::Undo),
            "redo" => Some(GameAction::Redo),
            "clickstock" | "draw" => Some(GameAction::ClickStock),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::NewGame => "newGame",
            GameAction::Undo => "undo",
            GameAction::Redo => "redo",
            GameAction::ClickStock => "clickStock",
        }
    }
}
