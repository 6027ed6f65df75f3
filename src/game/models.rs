use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub board: [[Option<Player>; 3]; 3],
    pub current_turn: Player,
    pub outcome: Outcome,
    pub player_names: HashMap<Player, String>,
    pub scores: HashMap<Player, u32>,
    pub history: Vec<String>,
    pub dark_theme: bool,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: [[None; 3]; 3],
            current_turn: Player::X,
            outcome: Outcome::InProgress,
            player_names: [
                (Player::X, "Player X".to_string()),
                (Player::O, "Player O".to_string()),
            ]
            .into_iter()
            .collect(),
            scores: [(Player::X, 0), (Player::O, 0)].into_iter().collect(),
            history: Vec::new(),
            dark_theme: false,
        }
    }
}

impl Game {
    pub fn finished(&self) -> bool {
        !matches!(self.outcome, Outcome::InProgress)
    }

    pub fn display_name(&self, player: Player) -> String {
        self.player_names
            .get(&player)
            .cloned()
            .unwrap_or_else(|| format!("{:?}", player))
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores.get(&player).copied().unwrap_or(0)
    }

    // Places the current player's symbol. Illegal clicks are no-ops, not errors.
    pub fn make_move(&mut self, x: usize, y: usize) {
        if self.finished() {
            debug!("Move ignored: Game is already over.");
            return;
        }
        if x >= 3 || y >= 3 {
            debug!("Move ignored: Coordinates out of bounds.");
            return;
        }
        if self.board[x][y].is_some() {
            debug!("Move ignored: Cell already taken.");
            return;
        }

        let player = self.current_turn;
        self.board[x][y] = Some(player);

        if let Some(winner) = self.check_winner() {
            self.outcome = Outcome::Win(winner);
            *self.scores.entry(winner).or_insert(0) += 1;
            let name = self.display_name(winner);
            self.history.push(format!("{} wins!", name));
            debug!("Game over: {:?} wins. Score updated.", winner);
        } else if self.is_full() {
            self.outcome = Outcome::Draw;
            self.history.push("It's a draw!".to_string());
            debug!("Game over: It's a draw.");
        } else {
            self.current_turn = player.opponent();
            debug!("Turn switched: Now it's {:?}'s turn.", self.current_turn);
        }
    }

    // "Play Again": board and outcome reset together, X always moves first.
    // Names, scores, history and theme are left alone.
    pub fn reset(&mut self) {
        self.board = [[None; 3]; 3];
        self.outcome = Outcome::InProgress;
        self.current_turn = Player::X;

        debug!("Board reset. {:?} moves first.", self.current_turn);
    }

    // "Reset Scores": does not touch the board or the current turn.
    pub fn reset_scores(&mut self) {
        for score in self.scores.values_mut() {
            *score = 0;
        }
        self.history.clear();

        debug!("Scores and history cleared.");
    }

    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
    }

    // Checks the three rows, then the three columns, then the two diagonals.
    fn check_winner(&self) -> Option<Player> {
        for i in 0..3 {
            if self.board[i][0] == self.board[i][1] && self.board[i][1] == self.board[i][2] {
                if let Some(player) = self.board[i][0] {
                    return Some(player);
                }
            }
        }
        for i in 0..3 {
            if self.board[0][i] == self.board[1][i] && self.board[1][i] == self.board[2][i] {
                if let Some(player) = self.board[0][i] {
                    return Some(player);
                }
            }
        }

        if self.board[0][0] == self.board[1][1] && self.board[1][1] == self.board[2][2] {
            if let Some(player) = self.board[0][0] {
                return Some(player);
            }
        }
        if self.board[0][2] == self.board[1][1] && self.board[1][1] == self.board[2][0] {
            if let Some(player) = self.board[0][2] {
                return Some(player);
            }
        }

        None
    }

    fn is_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|&cell| cell.is_some()))
    }
}
