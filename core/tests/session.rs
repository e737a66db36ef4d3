use sweep16_core::*;

fn scripted(mines: &[Coord2]) -> GameSession<FixedSampler> {
    let sampler = FixedSampler::from_coords(mines).unwrap();
    GameSession::with_sampler(mines.len() as CellCount, sampler).unwrap()
}

/// Plays every safe cell in row-major order until the round ends.
fn clear_board<S: MineSampler>(game: &mut GameSession<S>) -> RevealOutcome {
    let mut last = RevealOutcome::Continue;
    for (row, col) in iter_coords() {
        if game.board().cell((row, col)).unwrap().is_mine() {
            continue;
        }
        last = game.reveal(row, col).unwrap().outcome;
        if last.is_final() {
            break;
        }
    }
    last
}

#[test]
fn random_games_can_always_be_won_by_avoiding_mines() {
    for seed in 0..25 {
        let config = GameConfig::new(DENSITY_MAX).unwrap().with_seed(seed);
        let mut game = GameSession::new(config).unwrap();

        let first = game.reveal(8, 8).unwrap();
        assert_ne!(first.outcome, RevealOutcome::Lost);

        assert_eq!(clear_board(&mut game), RevealOutcome::Won);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(
            game.board().revealed_count(),
            TOTAL_CELLS - game.mine_count()
        );
        assert!(game.board().iter_cells().all(|c| c.is_mine() != c.is_revealed()));
    }
}

#[test]
fn win_is_reported_exactly_on_the_last_safe_cell() {
    let mut game = scripted(&[(0, 0), (0, 2), (15, 15)]);
    let safe: Vec<_> = iter_coords()
        .filter(|&c| !matches!(c, (0, 0) | (0, 2) | (15, 15)))
        .collect();

    for (i, &(row, col)) in safe.iter().enumerate() {
        let outcome = game.reveal(row, col).unwrap().outcome;
        let remaining = safe[i + 1..]
            .iter()
            .any(|&c| !game.board().cell(c).unwrap().is_revealed());
        if remaining {
            assert_eq!(outcome, RevealOutcome::Continue);
        } else {
            assert_eq!(outcome, RevealOutcome::Won);
            break;
        }
    }
    assert_eq!(game.state(), GameState::Won);
}

#[test]
fn losing_exposes_every_mine_with_its_flag_verdict() {
    let mines: Vec<Coord2> = (0..16).map(|i| (i, 15 - i)).collect();
    let mut game = scripted(&mines);
    game.reveal(0, 0).unwrap();
    for &(row, col) in mines.iter().step_by(2) {
        game.toggle_flag(row, col).unwrap();
    }

    let report = game.reveal(1, 14).unwrap();

    assert_eq!(report.outcome, RevealOutcome::Lost);
    for (i, &coords) in mines.iter().enumerate() {
        let cell = game.board().cell(coords).unwrap();
        assert!(cell.is_revealed());
        assert!(!cell.is_flagged());
        let expected = match i {
            1 => MineVerdict::Triggered,
            i if i % 2 == 0 => MineVerdict::Flagged,
            _ => MineVerdict::Missed,
        };
        assert_eq!(cell.verdict(), Some(expected));
    }
    assert_eq!(game.flagged_count(), 0);
}

#[test]
fn moves_after_the_end_are_rejected_until_reset() {
    let mut game = scripted(&[(7, 7), (7, 9)]);
    game.reveal(0, 0).unwrap();
    assert_eq!(game.reveal(7, 7).unwrap().outcome, RevealOutcome::Lost);
    let frozen = game.snapshot();

    assert_eq!(game.reveal(15, 15).unwrap().outcome, RevealOutcome::Rejected);
    assert_eq!(game.toggle_flag(7, 8), Err(GameError::InvalidState));
    assert_eq!(game.set_mine_density(40), Err(GameError::InvalidState));
    assert_eq!(game.snapshot().cells, frozen.cells);

    game.reset();
    game.set_mine_density(2).unwrap();
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.snapshot().cells.iter().all(|&s| s == VisualState::Hidden));
}

#[test]
fn changed_cells_track_the_board() {
    let config = GameConfig::default().with_seed(77);
    let mut game = GameSession::new(config).unwrap();
    let mut view = game.snapshot();

    for (row, col) in [(0, 0), (15, 15), (0, 15), (15, 0), (8, 8)] {
        let report = game.reveal(row, col).unwrap();
        view.apply(&report.changed).unwrap();
        if report.outcome.is_final() {
            break;
        }
    }

    assert_eq!(view.cells, game.snapshot().cells);
}
