//! Integration tests for the game engine through the facade crate
//!
//! Moves go through the geometric path (pickup at a point, drag, drop) the way
//! the mouse drives them, not through a pile-to-pile shortcut.

use tui_klondike::core::{DragState, Game, GameSnapshot, PressOutcome, StockOutcome};
use tui_klondike::types::{Card, GameAction, PileId, Point, Suit, DECK_SIZE, STOCK_AFTER_DEAL};

fn up(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).turned_up()
}

/// A conserved board: the given piles, with every other card face down in the stock.
fn board(tableau: &[&[Card]], foundations: &[&[Card]], waste: &[Card]) -> GameSnapshot {
    let mut snap = GameSnapshot {
        tableau: Default::default(),
        foundations: Default::default(),
        stock: Vec::new(),
        waste: waste.to_vec(),
        move_count: 0,
    };
    for (i, cards) in tableau.iter().enumerate() {
        snap.tableau[i] = cards.to_vec();
    }
    for (i, cards) in foundations.iter().enumerate() {
        snap.foundations[i] = cards.to_vec();
    }

    let mut used = [false; DECK_SIZE];
    for card in snap.cards() {
        used[card.index()] = true;
    }
    for suit in Suit::ALL {
        for rank in 1..=13 {
            let card = Card::new(rank, suit);
            if !used[card.index()] {
                snap.stock.push(card);
            }
        }
    }
    assert!(snap.is_conserved());
    snap
}

fn game_with(snap: &GameSnapshot) -> Game {
    let mut game = Game::new(1);
    game.restore(snap);
    game
}

/// Grab the card at `cut` of `from` by its top row and drop the run so its lead
/// card lands exactly on `to`'s footprint.
fn drag_run(game: &mut Game, from: PileId, cut: usize, to: PileId) -> bool {
    let rect = game.pile(from).card_rect(cut);
    let grab = Point::new(rect.x + 3, rect.y);
    let dest = game.pile(to).footprint();

    assert!(game.pickup(from, grab), "pickup from {} at {}", from, cut);
    game.drag_to(grab.offset(dest.x - rect.x, dest.y - rect.y));
    game.drop()
}

fn drag_top(game: &mut Game, from: PileId, to: PileId) -> bool {
    let cut = game.pile(from).len() - 1;
    drag_run(game, from, cut, to)
}

#[test]
fn test_deal_invariant() {
    for seed in 0..20 {
        let game = Game::new(seed);

        for i in 0..7u8 {
            let pile = game.pile(PileId::Tableau(i));
            assert_eq!(pile.len(), i as usize + 1);
            let (top, rest) = pile.cards().split_last().unwrap();
            assert!(top.face_up);
            assert!(rest.iter().all(|c| !c.face_up));
        }
        let stock = game.pile(PileId::Stock);
        assert_eq!(stock.len(), STOCK_AFTER_DEAL);
        assert!(stock.cards().iter().all(|c| !c.face_up));
        assert!(game.pile(PileId::Waste).is_empty());
        for i in 0..4 {
            assert!(game.pile(PileId::Foundation(i)).is_empty());
        }

        assert!(game.snapshot().is_conserved());
        assert_eq!(game.move_count(), 0);
        assert!(!game.can_undo());
        assert!(!game.can_redo());
    }
}

#[test]
fn test_foundation_builds_up_by_suit_from_ace() {
    let snap = board(
        &[
            &[up(1, Suit::Hearts)],
            &[up(2, Suit::Hearts)],
            &[up(2, Suit::Diamonds)],
            &[up(3, Suit::Hearts)],
        ],
        &[],
        &[],
    );
    let mut game = game_with(&snap);

    // Non-ace onto an empty foundation.
    assert!(!drag_top(&mut game, PileId::Tableau(1), PileId::Foundation(0)));
    assert_eq!(game.snapshot(), snap);

    assert!(drag_top(&mut game, PileId::Tableau(0), PileId::Foundation(0)));
    // Wrong suit, then skipped rank.
    assert!(!drag_top(&mut game, PileId::Tableau(2), PileId::Foundation(0)));
    assert!(!drag_top(&mut game, PileId::Tableau(3), PileId::Foundation(0)));
    assert!(drag_top(&mut game, PileId::Tableau(1), PileId::Foundation(0)));
    assert!(drag_top(&mut game, PileId::Tableau(3), PileId::Foundation(0)));

    assert_eq!(game.pile(PileId::Foundation(0)).len(), 3);
    assert_eq!(game.move_count(), 3);
}

#[test]
fn test_tableau_builds_down_in_alternating_colors() {
    let snap = board(
        &[
            &[up(6, Suit::Hearts)],
            &[up(5, Suit::Diamonds)],
            &[up(5, Suit::Spades)],
            &[up(12, Suit::Clubs)],
            &[up(13, Suit::Hearts)],
            &[],
        ],
        &[],
        &[],
    );
    let mut game = game_with(&snap);

    assert!(!drag_top(&mut game, PileId::Tableau(1), PileId::Tableau(0)));
    assert!(drag_top(&mut game, PileId::Tableau(2), PileId::Tableau(0)));
    assert_eq!(game.pile(PileId::Tableau(0)).len(), 2);

    // Only kings go to an empty column.
    assert!(!drag_top(&mut game, PileId::Tableau(3), PileId::Tableau(5)));
    assert!(drag_top(&mut game, PileId::Tableau(4), PileId::Tableau(5)));
    assert!(drag_top(&mut game, PileId::Tableau(3), PileId::Tableau(5)));
    assert_eq!(
        game.pile(PileId::Tableau(5)).cards(),
        &[up(13, Suit::Hearts), up(12, Suit::Clubs)]
    );
}

#[test]
fn test_run_moves_as_a_unit_but_not_to_foundations() {
    let snap = board(
        &[
            &[up(13, Suit::Spades), up(12, Suit::Hearts), up(11, Suit::Clubs)],
            &[],
        ],
        &[&[
            up(1, Suit::Hearts),
            up(2, Suit::Hearts),
            up(3, Suit::Hearts),
            up(4, Suit::Hearts),
            up(5, Suit::Hearts),
            up(6, Suit::Hearts),
            up(7, Suit::Hearts),
            up(8, Suit::Hearts),
            up(9, Suit::Hearts),
            up(10, Suit::Hearts),
            up(11, Suit::Hearts),
        ]],
        &[],
    );
    let mut game = game_with(&snap);

    // Q♥ J♣ is a run; the foundation would take Q♥ alone but not the pair.
    assert!(!drag_run(&mut game, PileId::Tableau(0), 1, PileId::Foundation(0)));
    assert_eq!(game.snapshot(), snap);

    // The whole column goes to the empty one.
    assert!(drag_run(&mut game, PileId::Tableau(0), 0, PileId::Tableau(1)));
    assert!(game.pile(PileId::Tableau(0)).is_empty());
    assert_eq!(game.pile(PileId::Tableau(1)).len(), 3);
}

#[test]
fn test_reveal_after_move() {
    let snap = board(
        &[
            &[Card::new(9, Suit::Clubs), Card::new(4, Suit::Spades), up(5, Suit::Clubs)],
            &[up(6, Suit::Diamonds)],
        ],
        &[],
        &[],
    );
    let mut game = game_with(&snap);

    assert!(drag_top(&mut game, PileId::Tableau(0), PileId::Tableau(1)));
    let column = game.pile(PileId::Tableau(0)).cards();
    assert_eq!(column.len(), 2);
    assert!(column[1].face_up);
    assert!(!column[0].face_up);

    // Face-down cards cannot be picked up.
    let rect = game.pile(PileId::Tableau(0)).card_rect(0);
    assert!(!game.pickup(PileId::Tableau(0), Point::new(rect.x + 3, rect.y)));
}

#[test]
fn test_stock_cycle_restores_original_order() {
    let mut game = Game::new(99);
    let original: Vec<(u8, Suit)> = game
        .pile(PileId::Stock)
        .cards()
        .iter()
        .map(|c| (c.rank, c.suit))
        .collect();
    let expected_first = *game.pile(PileId::Stock).top_card().unwrap();

    assert_eq!(game.click_stock(), StockOutcome::Drawn(expected_first.turned_up()));
    for _ in 1..STOCK_AFTER_DEAL {
        assert!(matches!(game.click_stock(), StockOutcome::Drawn(_)));
    }
    assert!(game.pile(PileId::Stock).is_empty());
    assert!(game.pile(PileId::Waste).cards().iter().all(|c| c.face_up));

    assert_eq!(
        game.click_stock(),
        StockOutcome::Recycled {
            cards: STOCK_AFTER_DEAL
        }
    );
    assert!(game.pile(PileId::Waste).is_empty());
    let recycled: Vec<(u8, Suit)> = game
        .pile(PileId::Stock)
        .cards()
        .iter()
        .map(|c| (c.rank, c.suit))
        .collect();
    assert_eq!(recycled, original);
    assert!(game.pile(PileId::Stock).cards().iter().all(|c| !c.face_up));
    assert_eq!(game.move_count(), STOCK_AFTER_DEAL as u32 + 1);
}

#[test]
fn test_waste_card_plays_to_tableau() {
    let snap = board(&[&[up(8, Suit::Clubs)]], &[], &[up(7, Suit::Hearts)]);
    let mut game = game_with(&snap);

    assert!(drag_top(&mut game, PileId::Waste, PileId::Tableau(0)));
    assert!(game.pile(PileId::Waste).is_empty());
    assert_eq!(game.pile(PileId::Tableau(0)).len(), 2);
}

#[test]
fn test_last_card_wins() {
    let full = |suit: Suit| (1..=13).map(|r| up(r, suit)).collect::<Vec<_>>();
    let clubs = full(Suit::Clubs);
    let diamonds = full(Suit::Diamonds);
    let hearts = full(Suit::Hearts);
    let spades: Vec<Card> = (1..=12).map(|r| up(r, Suit::Spades)).collect();

    let snap = board(&[], &[&clubs, &diamonds, &hearts, &spades], &[up(13, Suit::Spades)]);
    let mut game = game_with(&snap);
    assert!(!game.is_complete());

    assert!(drag_top(&mut game, PileId::Waste, PileId::Foundation(3)));
    assert!(game.is_complete());
}

#[test]
fn test_undo_redo_round_trip_is_byte_exact() {
    let mut game = Game::new(2024);
    let s0 = game.snapshot().to_json().unwrap();

    game.click_stock();
    let s1 = game.snapshot().to_json().unwrap();
    game.click_stock();
    let s2 = game.snapshot().to_json().unwrap();

    assert!(game.undo());
    assert_eq!(game.snapshot().to_json().unwrap(), s1);
    assert!(game.undo());
    assert_eq!(game.snapshot().to_json().unwrap(), s0);
    assert!(!game.undo());

    assert!(game.redo());
    assert_eq!(game.snapshot().to_json().unwrap(), s1);
    assert!(game.redo());
    assert_eq!(game.snapshot().to_json().unwrap(), s2);
    assert!(!game.redo());
}

#[test]
fn test_new_action_discards_redo() {
    let mut game = Game::new(7);
    game.click_stock();
    game.click_stock();
    assert!(game.undo());
    assert!(game.can_redo());

    game.click_stock();
    assert!(!game.can_redo());
    assert!(!game.redo());
}

#[test]
fn test_failed_drop_is_not_recorded() {
    let snap = board(&[&[up(5, Suit::Hearts)], &[up(6, Suit::Hearts)]], &[], &[]);
    let mut game = game_with(&snap);
    game.apply_action(GameAction::ClickStock);
    let before = game.snapshot();

    assert!(!drag_top(&mut game, PileId::Tableau(0), PileId::Tableau(1)));
    assert_eq!(game.snapshot(), before);

    // The only recorded action is still the stock click.
    assert!(game.undo());
    assert!(!game.can_undo());
}

#[test]
fn test_press_resolves_stock_then_piles() {
    let mut game = Game::new(5);
    let stock = game.pile(PileId::Stock).slot_rect().center();
    assert!(matches!(game.press(stock), PressOutcome::Stock(StockOutcome::Drawn(_))));

    let waste = game.pile(PileId::Waste).footprint().center();
    assert_eq!(game.press(waste), PressOutcome::PickedUp(PileId::Waste));
    assert!(matches!(
        game.drag_state(),
        DragState::Holding {
            source: PileId::Waste,
            ..
        }
    ));

    // Pressing on empty felt cancels the held card and picks nothing up.
    assert_eq!(game.press(Point::new(60, 27)), PressOutcome::Nothing);
    assert_eq!(game.drag_state(), DragState::Idle);
    assert_eq!(game.pile(PileId::Waste).len(), 1);
}

#[test]
fn test_save_and_load_through_json() {
    let mut game = Game::new(31);
    for _ in 0..5 {
        game.click_stock();
    }
    let json = game.snapshot().to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tableau"].as_array().unwrap().len(), 7);
    assert_eq!(value["foundations"].as_array().unwrap().len(), 4);
    assert_eq!(value["waste"].as_array().unwrap().len(), 5);
    assert_eq!(value["stock"].as_array().unwrap().len(), STOCK_AFTER_DEAL - 5);
    assert_eq!(value["moveCount"], 5);
    let top = &value["waste"][4];
    assert!(top["rank"].as_u64().is_some_and(|r| (1..=13).contains(&r)));
    assert!(top["suit"].is_string());
    assert_eq!(top["faceUp"], true);

    let loaded = GameSnapshot::from_json(&json).unwrap();
    let mut other = Game::new(8);
    other.restore(&loaded);
    assert_eq!(other.snapshot(), game.snapshot());
    assert_eq!(other.move_count(), 5);
}

#[test]
fn test_new_game_resets_everything() {
    let mut game = Game::new(3);
    game.click_stock();
    assert!(game.apply_action(GameAction::NewGame));

    assert_eq!(game.move_count(), 0);
    assert!(!game.can_undo());
    assert!(game.pile(PileId::Waste).is_empty());

    let seed = game.seed();
    assert_eq!(Game::new(seed).snapshot(), game.snapshot());
}
