//! Game integration tests.

use std::collections::HashSet;

use basra::{
    Card, DECK_SIZE, DealError, Deck, Game, GameOptions, GameState, PlayError, Suit,
    parse_selection, score,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Player 0 holds `[AH, 7D, JC, 3S]`, player 1 holds `[5S, 9C, KD, 4H]`,
/// the table is `[AD, 4C, 9H, 2D]`.
fn sample_game() -> Game {
    Game::from_layout(
        GameOptions::default(),
        [
            vec![
                card(Suit::Hearts, 1),
                card(Suit::Diamonds, 7),
                card(Suit::Clubs, 11),
                card(Suit::Spades, 3),
            ],
            vec![
                card(Suit::Spades, 5),
                card(Suit::Clubs, 9),
                card(Suit::Diamonds, 13),
                card(Suit::Hearts, 4),
            ],
        ],
        vec![
            card(Suit::Diamonds, 1),
            card(Suit::Clubs, 4),
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 2),
        ],
        Vec::new(),
    )
}

fn all_cards(game: &Game) -> Vec<Card> {
    let mut cards = Vec::new();
    for player in game.players() {
        cards.extend_from_slice(player.hand());
        cards.extend_from_slice(player.pile());
    }
    cards.extend_from_slice(game.table());
    cards.extend_from_slice(game.stock());
    cards
}

#[test]
fn standard_deck_is_suit_major_and_complete() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck.cards()[0], card(Suit::Hearts, 1));
    assert_eq!(deck.cards()[12], card(Suit::Hearts, 13));
    assert_eq!(deck.cards()[13], card(Suit::Diamonds, 1));
    assert_eq!(deck.cards()[51], card(Suit::Spades, 13));
    assert_eq!(Deck::standard(), deck);
}

#[test]
fn deal_splits_front_from_remainder() {
    let (dealt, rest) = Deck::standard().deal(4).unwrap();
    assert_eq!(
        dealt,
        vec![
            card(Suit::Hearts, 1),
            card(Suit::Hearts, 2),
            card(Suit::Hearts, 3),
            card(Suit::Hearts, 4),
        ]
    );
    assert_eq!(rest.len(), DECK_SIZE - 4);
    assert_eq!(rest.cards()[0], card(Suit::Hearts, 5));

    let (all, empty) = rest.deal(DECK_SIZE - 4).unwrap();
    assert_eq!(all.len(), DECK_SIZE - 4);
    assert!(empty.is_empty());
}

#[test]
fn deal_errors() {
    let deck = Deck::from_cards(vec![card(Suit::Hearts, 2); 3]);
    assert_eq!(
        deck.deal(4).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 4,
            available: 3,
        }
    );

    let options = GameOptions::default().with_hand_size(20).with_table_size(20);
    assert_eq!(options.cards_needed(), 60);
    assert_eq!(
        Game::new(options, 1).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 60,
            available: DECK_SIZE,
        }
    );

    let huge = GameOptions::default().with_hand_size(usize::MAX / 2 + 1);
    assert_eq!(huge.cards_needed(), usize::MAX);
    assert_eq!(
        Game::new(huge, 1).unwrap_err(),
        DealError::NotEnoughCards {
            requested: usize::MAX,
            available: DECK_SIZE,
        }
    );

    let huge_table = GameOptions::default().with_table_size(usize::MAX);
    assert!(matches!(
        Game::new(huge_table, 1),
        Err(DealError::NotEnoughCards { available: DECK_SIZE, .. })
    ));
}

#[test]
fn layout_takes_player_names_from_options() {
    let game = Game::from_layout(
        GameOptions::default().with_player_names("Alice", "Bob"),
        [vec![card(Suit::Hearts, 1)], vec![card(Suit::Clubs, 5)]],
        Vec::new(),
        Vec::new(),
    );

    assert_eq!(game.current_player_name(), "Alice");
    assert_eq!(game.players()[1].name(), "Bob");
    assert_eq!(game.standings()[1].name, "Bob");
}

#[test]
fn new_game_deals_opening_layout() {
    let game = Game::new(GameOptions::default(), 42).unwrap();

    assert_eq!(game.players()[0].hand().len(), 4);
    assert_eq!(game.players()[1].hand().len(), 4);
    assert_eq!(game.table().len(), 4);
    assert_eq!(game.stock_remaining(), DECK_SIZE - 12);
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.current_player_name(), "Player 1");
    assert_eq!(game.state(), GameState::WaitingForInput { player: 0 });
    assert!(game.players().iter().all(|p| p.pile().is_empty()));

    let unique: HashSet<Card> = all_cards(&game).into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn same_seed_deals_same_layout() {
    let first = Game::new(GameOptions::default(), 99).unwrap();
    let second = Game::new(GameOptions::default(), 99).unwrap();
    assert_eq!(first, second);

    let other = Game::new(GameOptions::default(), 100).unwrap();
    assert_ne!(first.stock(), other.stock());
}

#[test]
fn entropy_seeded_game_deals() {
    let game = Game::with_entropy(GameOptions::default()).unwrap();
    assert_eq!(all_cards(&game).len(), DECK_SIZE);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(6)
        .with_table_size(2)
        .with_player_names("Alice", "Bob");

    assert_eq!(options.hand_size, 6);
    assert_eq!(options.table_size, 2);
    assert_eq!(options.player_names, ["Alice".to_string(), "Bob".to_string()]);

    let game = Game::new(options, 3).unwrap();
    assert_eq!(game.current_hand().len(), 6);
    assert_eq!(game.table().len(), 2);
    assert_eq!(game.stock_remaining(), DECK_SIZE - 14);
    assert_eq!(game.current_player_name(), "Alice");
}

#[test]
fn playing_an_ace_captures_every_ace_on_the_table() {
    let mut game = sample_game();

    let play = game.play_card(0, 1).unwrap();

    assert_eq!(play.player, 0);
    assert_eq!(play.card, card(Suit::Hearts, 1));
    assert_eq!(
        play.captured,
        vec![card(Suit::Diamonds, 1), card(Suit::Hearts, 1)]
    );
    assert!(play.captured_from_table());
    assert_eq!(play.next_player, 1);

    assert_eq!(
        game.table(),
        [
            card(Suit::Clubs, 4),
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 2),
        ]
    );
    assert_eq!(
        game.players()[0].pile(),
        [card(Suit::Diamonds, 1), card(Suit::Hearts, 1)]
    );
    assert_eq!(
        game.players()[0].hand(),
        [
            card(Suit::Diamonds, 7),
            card(Suit::Clubs, 11),
            card(Suit::Spades, 3),
        ]
    );
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.current_player_name(), "Player 2");
    assert_eq!(game.score(0), Some(2));
}

#[test]
fn play_without_match_captures_only_the_played_card() {
    let mut game = sample_game();
    let table_before = game.table().to_vec();

    let play = game.play_card(0, 2).unwrap();

    assert_eq!(play.captured, vec![card(Suit::Diamonds, 7)]);
    assert!(!play.captured_from_table());
    assert_eq!(game.table(), table_before.as_slice());
    assert_eq!(game.players()[0].pile(), [card(Suit::Diamonds, 7)]);
}

#[test]
fn capture_keeps_remaining_table_order() {
    let mut game = sample_game();

    // Player 0 plays 7D (no match), player 1 plays 4H and takes 4C.
    game.play_card(0, 2).unwrap();
    let play = game.play_card(1, 4).unwrap();

    assert_eq!(
        play.captured,
        vec![card(Suit::Clubs, 4), card(Suit::Hearts, 4)]
    );
    assert_eq!(
        game.table(),
        [
            card(Suit::Diamonds, 1),
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 2),
        ]
    );
    assert_eq!(game.current_player(), 0);
}

#[test]
fn invalid_selection_leaves_game_untouched() {
    let mut game = sample_game();
    let before = game.clone();

    assert_eq!(
        game.play_card(0, 0).unwrap_err(),
        PlayError::InvalidSelection {
            index: 0,
            hand_len: 4,
        }
    );
    assert_eq!(
        game.play_card(0, 5).unwrap_err(),
        PlayError::InvalidSelection {
            index: 5,
            hand_len: 4,
        }
    );
    assert_eq!(game, before);
    assert_eq!(game.current_player(), 0);
}

#[test]
fn out_of_turn_play_is_rejected() {
    let mut game = sample_game();
    let before = game.clone();

    assert_eq!(
        game.play_card(1, 1).unwrap_err(),
        PlayError::NotYourTurn {
            player: 1,
            current: 0,
        }
    );
    assert_eq!(game.play_card(2, 1).unwrap_err(), PlayError::PlayerNotFound);
    assert_eq!(game, before);
}

#[test]
fn submit_parses_user_input() {
    let mut game = sample_game();
    let before = game.clone();

    assert!(matches!(
        game.submit("hello"),
        Err(PlayError::InvalidSelection { index: 0, .. })
    ));
    assert!(matches!(
        game.submit("9"),
        Err(PlayError::InvalidSelection { index: 9, .. })
    ));
    assert_eq!(game, before);

    let play = game.submit(" 3\n").unwrap();
    assert_eq!(play.card, card(Suit::Clubs, 11));
    assert_eq!(game.current_player(), 1);
}

#[test]
fn parse_selection_edge_cases() {
    assert_eq!(parse_selection("1"), 1);
    assert_eq!(parse_selection("  4  "), 4);
    assert_eq!(parse_selection("+2"), 2);
    assert_eq!(parse_selection("3rd"), 3);
    assert_eq!(parse_selection(""), 0);
    assert_eq!(parse_selection("x1"), 0);
    assert_eq!(parse_selection("-1"), 0);
    assert_eq!(parse_selection("99999999999999999999999999"), 0);
}

#[test]
fn rejection_messages_are_readable() {
    let err = PlayError::InvalidSelection {
        index: 7,
        hand_len: 3,
    };
    assert_eq!(
        err.to_string(),
        "invalid card selection: 7 (hand holds 3 cards)"
    );
    assert_eq!(
        DealError::NotEnoughCards {
            requested: 5,
            available: 2,
        }
        .to_string(),
        "not enough cards in the deck: requested 5, 2 available"
    );
}

#[test]
fn scoring_table() {
    let pile = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 11),
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 2),
    ];
    assert_eq!(score(&pile), 7);
    assert_eq!(score(&[]), 0);

    let worthless = [
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 2),
        card(Suit::Clubs, 12),
        card(Suit::Spades, 13),
    ];
    assert_eq!(score(&worthless), 0);
}

#[test]
fn whole_deck_is_worth_eighteen_points() {
    // Four aces, four jacks, 10D and 2C.
    let total: u32 = Deck::standard().cards().iter().map(basra::card_points).sum();
    assert_eq!(total, 4 + 4 + 3 + 2);
}

#[test]
fn hands_empty_after_all_cards_played() {
    let mut game = sample_game();

    for _ in 0..8 {
        game.play_current(1).unwrap();
    }

    assert_eq!(game.state(), GameState::HandsEmpty);
    assert!(matches!(
        game.play_current(1),
        Err(PlayError::InvalidSelection { index: 1, hand_len: 0 })
    ));
    assert_eq!(game.current_player(), 0);

    let captured: usize = game.players().iter().map(|p| p.pile().len()).sum();
    assert_eq!(captured + game.table().len(), 12);
}

#[test]
fn standings_report_both_players() {
    let mut game = sample_game();
    game.play_card(0, 1).unwrap();

    let standings = game.standings();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].name, "Player 1");
    assert_eq!(standings[0].score, 2);
    assert_eq!(standings[0].captured, 2);
    assert_eq!(standings[0].hand_len, 3);
    assert_eq!(standings[1].score, 0);
    assert_eq!(standings[1].hand_len, 4);
    assert_eq!(game.score(2), None);
}

#[test]
fn card_display_formats() {
    assert_eq!(card(Suit::Hearts, 1).to_string(), "1 of Hearts");
    assert_eq!(card(Suit::Diamonds, 10).to_string(), "10 of Diamonds");
    assert_eq!(card(Suit::Hearts, 1).short().to_string(), "AH");
    assert_eq!(card(Suit::Diamonds, 10).short().to_string(), "10D");
    assert_eq!(card(Suit::Spades, 13).short().to_string(), "KS");
}
