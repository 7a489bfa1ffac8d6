mod helpers;
use helpers::{scripted_cards, StubDeckProvider};

use wargame_engine::cards::Card;
use wargame_engine::game::{Game, Phase};

async fn started_game(seed: u64) -> Game {
    let provider = StubDeckProvider::with_cards(scripted_cards(104));
    let mut game = Game::with_seed(seed);
    game.start_new_game(&provider, 2).await.expect("start ok");
    game
}

#[tokio::test]
async fn game_runs_to_completion_and_conserves_cards() {
    let mut game = started_game(0xC0FFEE).await;
    let total = game.total_dealt();
    let mut last_wins: Vec<u32> = game.players().iter().map(|p| p.rounds_won()).collect();

    let mut rounds = 0;
    while game.play_round() {
        rounds += 1;
        assert!(rounds < 2000, "game should terminate");

        // conservation: piles always sum to the cards dealt at start
        let piled: usize = game.players().iter().map(|p| p.pile().len()).sum();
        assert_eq!(piled, total, "cards must only move, never appear or vanish");

        // monotonic wins
        for (p, last) in game.players().iter().zip(&last_wins) {
            assert!(p.rounds_won() >= *last, "rounds_won must never decrease");
        }
        last_wins = game.players().iter().map(|p| p.rounds_won()).collect();

        assert!(game.current_round_winner().is_some());
        assert!(!game.drawn_cards().is_empty());

        if game.is_game_over() {
            break;
        }
        assert_eq!(game.phase(), Phase::RoundResolved);
        game.settle_round();
        assert_eq!(game.phase(), Phase::InProgress);
        assert!(game.drawn_cards().is_empty(), "settle clears the snapshot");
    }

    assert!(game.is_game_over());
    let winner_name = game.overall_winner().expect("overall winner set").to_string();
    let winner = game
        .players()
        .iter()
        .find(|p| p.name() == winner_name)
        .expect("winner is a player");
    assert_eq!(winner.rounds_won(), game.win_threshold());
}

#[tokio::test]
async fn play_round_is_a_noop_after_game_over() {
    let mut game = started_game(7).await;
    // rig a decisive final round
    {
        let players = game.players_mut();
        let pile0 = players[0].pile_mut();
        pile0.clear();
        pile0.push(Card::new("AS", "ACE"));
        for _ in 0..9 {
            players[0].record_win();
        }
        let pile1 = players[1].pile_mut();
        pile1.clear();
        pile1.push(Card::new("KD", "KING"));
    }

    assert!(game.play_round());
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.overall_winner(), Some("Player 1"));

    let wins_before: Vec<u32> = game.players().iter().map(|p| p.rounds_won()).collect();
    let piles_before: Vec<usize> = game.players().iter().map(|p| p.pile().len()).collect();

    assert!(!game.play_round(), "GameOver accepts no further rounds");
    assert_eq!(game.phase(), Phase::GameOver);
    let wins_after: Vec<u32> = game.players().iter().map(|p| p.rounds_won()).collect();
    let piles_after: Vec<usize> = game.players().iter().map(|p| p.pile().len()).collect();
    assert_eq!(wins_before, wins_after);
    assert_eq!(piles_before, piles_after);
}

#[test]
fn play_round_before_start_is_a_noop() {
    let mut game = Game::with_seed(1);
    assert!(!game.play_round());
    assert_eq!(game.phase(), Phase::NotStarted);
}

#[tokio::test]
async fn round_with_insufficient_players_is_skipped_silently() {
    let mut game = started_game(3).await;
    {
        let players = game.players_mut();
        players[0].pile_mut().clear();
        players[1].pile_mut().clear();
    }
    assert!(!game.play_round(), "no round can be resolved");
    assert_eq!(game.phase(), Phase::InProgress, "state is left as-is");
    assert!(game.current_round_winner().is_none());
}

#[tokio::test]
async fn settle_round_only_acts_on_round_resolved() {
    let mut game = started_game(11).await;
    game.settle_round();
    assert_eq!(game.phase(), Phase::InProgress, "settle outside RoundResolved is a no-op");

    assert!(game.play_round());
    assert_eq!(game.phase(), Phase::RoundResolved);
    game.settle_round();
    assert_eq!(game.phase(), Phase::InProgress);
    assert!(game.current_round_winner().is_none());
    assert!(game.drawn_cards().is_empty());
}

#[tokio::test]
async fn restart_resets_from_any_state() {
    // mid-game
    let mut game = started_game(21).await;
    assert!(game.play_round());
    game.restart();
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.players().is_empty());
    assert!(game.deck_id().is_none());
    assert!(game.drawn_cards().is_empty());
    assert!(game.current_round_winner().is_none());
    assert!(game.overall_winner().is_none());
    assert_eq!(game.total_dealt(), 0);
    assert_eq!(game.player_count(), 2, "player count back to default");

    // from GameOver
    let mut game = started_game(22).await;
    {
        let players = game.players_mut();
        for _ in 0..9 {
            players[0].record_win();
        }
        let pile0 = players[0].pile_mut();
        pile0.clear();
        pile0.push(Card::new("AS", "ACE"));
        let pile1 = players[1].pile_mut();
        pile1.clear();
        pile1.push(Card::new("2D", "2"));
    }
    assert!(game.play_round());
    assert!(game.is_game_over());
    game.restart();
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.players().is_empty());

    // a restarted game can start again
    let provider = StubDeckProvider::with_cards(scripted_cards(156));
    game.start_new_game(&provider, 3).await.expect("restartable");
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.players().len(), 3);
    assert_eq!(game.player_count(), 3);
}

#[tokio::test]
async fn four_player_game_excludes_emptied_piles() {
    let provider = StubDeckProvider::with_cards(scripted_cards(208));
    let mut game = Game::with_seed(99);
    game.start_new_game(&provider, 4).await.expect("start ok");

    // empty one pile; the other three keep playing
    game.players_mut()[2].pile_mut().clear();
    assert!(game.play_round());
    assert_eq!(game.drawn_cards().len(), 3);
    assert!(game
        .drawn_cards()
        .iter()
        .all(|d| d.player_name != "Player 3"));
    assert_eq!(game.players().len(), 4, "emptied player is retained");
}
