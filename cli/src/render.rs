use sweep16_core::{GRID_SIZE, GameState, Snapshot, VisualState};

fn symbol(state: VisualState) -> char {
    match state {
        VisualState::Hidden => '#',
        VisualState::Flagged => 'F',
        VisualState::Revealed(0) => '.',
        VisualState::Revealed(count) => char::from(b'0' + count),
        VisualState::TriggeredMine => '*',
        VisualState::FlaggedMine => '+',
        VisualState::MissedMine => 'x',
        VisualState::WrongFlag => '!',
    }
}

fn status(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "ready",
        GameState::InProgress => "playing",
        GameState::Won => "YOU WIN!!",
        GameState::Lost => "YOU LOSE!!",
    }
}

/// Draws the board as text, one row per line with row and column labels.
pub(crate) fn board(snapshot: &Snapshot) -> String {
    let mut out = format!(
        "mines {:>3}  time {:03}  {}\n",
        snapshot.mines_left,
        snapshot.elapsed_secs,
        status(snapshot.state)
    );

    out.push_str("   ");
    for col in 0..GRID_SIZE {
        out.push_str(&format!("{col:>3}"));
    }
    out.push('\n');

    for (row, cells) in snapshot.cells.outer_iter().enumerate() {
        out.push_str(&format!("{row:>3}"));
        for &state in cells.iter() {
            out.push_str(&format!("{:>3}", symbol(state)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep16_core::{FixedSampler, GameSession};

    #[test]
    fn symbols_cover_every_state() {
        assert_eq!(symbol(VisualState::Hidden), '#');
        assert_eq!(symbol(VisualState::Revealed(0)), '.');
        assert_eq!(symbol(VisualState::Revealed(8)), '8');
        assert_eq!(symbol(VisualState::WrongFlag), '!');
    }

    #[test]
    fn renders_header_and_sixteen_rows() {
        let sampler = FixedSampler::from_coords(&[(15, 15)]).unwrap();
        let mut game = GameSession::with_sampler(1, sampler).unwrap();
        game.reveal(0, 0).unwrap();

        let text = board(&game.snapshot());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 16);
        assert!(lines[0].contains("YOU WIN!!"));
        assert!(lines[2].starts_with("  0  ."));
        assert!(lines[17].ends_with('#'));
    }

    #[test]
    fn lost_board_marks_every_mine_and_wrong_flag() {
        let mut mines: Vec<_> = (0..16).map(|col| (8, col)).collect();
        mines.push((4, 4));
        let sampler = FixedSampler::from_coords(&mines).unwrap();
        let mut game = GameSession::with_sampler(17, sampler).unwrap();
        game.reveal(0, 0).unwrap();
        game.toggle_flag(8, 0).unwrap();
        game.toggle_flag(12, 12).unwrap();
        game.reveal(4, 4).unwrap();

        let text = board(&game.snapshot());
        let lines: Vec<_> = text.lines().collect();
        let cell = |row: usize, col: usize| lines[row + 2].get(3 + 3 * col..6 + 3 * col);

        assert!(lines[0].contains("YOU LOSE!!"));
        assert_eq!(cell(4, 4), Some("  *"));
        assert_eq!(cell(8, 0), Some("  +"));
        assert_eq!(cell(8, 5), Some("  x"));
        assert_eq!(cell(12, 12), Some("  !"));
        assert_eq!(cell(13, 13), Some("  #"));
    }
}
