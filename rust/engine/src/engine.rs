use crate::cards::is_bust;
use crate::deck::Dealer;
use crate::errors::GameError;
use crate::game::{set_winner, SetOutcome, TurnReport};
use crate::player::Player;
use crate::rules::Rules;

/// The match state machine: owns both players, the dealer, and the
/// active-seat marker, and drives the turn/set/game loops.
///
/// The engine never touches a player's hand or board directly; it reads
/// scores and flags and asks players to act.
#[derive(Debug)]
pub struct Engine {
    dealer: Dealer,
    rules: Rules,
    players: [Player; 2],
    active: usize,
    seed: u64,
}

impl Engine {
    /// Builds an engine over two seated players. A missing seed falls
    /// back to an OS-random one, which stays readable via [`seed`].
    ///
    /// [`seed`]: Engine::seed
    pub fn new(seed: Option<u64>, rules: Rules, players: [Player; 2]) -> Result<Self, GameError> {
        let seed = seed.unwrap_or_else(rand::random);
        let dealer = Dealer::new(seed, rules)?;
        Ok(Self {
            dealer,
            rules,
            players,
            active: 0,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: usize) -> &mut Player {
        &mut self.players[seat]
    }

    /// Full reset for a fresh game: counters zeroed, hands drawn, and
    /// the opening seat chosen uniformly at random.
    pub fn setup_game(&mut self) {
        for player in &mut self.players {
            player.reset_for_game();
            player.draw_hand(&mut self.dealer);
        }
        self.active = self.dealer.first_player();
    }

    /// The active seat takes one turn, then the roles swap. A standing
    /// player's turn is a no-op but still swaps, so exactly one swap
    /// happens per call.
    pub fn play_turn(&mut self) -> TurnReport {
        let seat = self.active;
        let (opp_score, opp_stands) = {
            let opp = &self.players[1 - seat];
            (opp.score(), opp.stands())
        };
        let (drew, played) =
            self.players[seat].take_turn(opp_score, opp_stands, &mut self.dealer, self.rules.goal);
        let report = TurnReport {
            seat,
            drew,
            played,
            score: self.players[seat].score(),
            stands: self.players[seat].stands(),
        };
        self.active = 1 - seat;
        report
    }

    pub fn set_is_over(&self) -> bool {
        let [a, b] = &self.players;
        is_bust(a.score(), self.rules.goal)
            || is_bust(b.score(), self.rules.goal)
            || (a.stands() && b.stands())
    }

    /// Resolves a finished set: credits the winner and hands them the
    /// next set's opening turn. A draw changes neither counters nor
    /// roles.
    pub fn finish_set(&mut self) -> SetOutcome {
        let winner = set_winner(
            self.players[0].score(),
            self.players[1].score(),
            self.rules.goal,
        );
        match winner {
            Some(seat) => {
                self.players[seat].win_set();
                self.active = seat;
                SetOutcome::Winner(seat)
            }
            None => SetOutcome::Draw,
        }
    }

    /// Clears boards and stand flags and deals fresh hands.
    pub fn prepare_next_set(&mut self) {
        for player in &mut self.players {
            player.reset_for_set();
            player.draw_hand(&mut self.dealer);
        }
    }

    /// Runs turns until the set ends, then resolves it.
    pub fn play_set(&mut self) -> SetOutcome {
        while !self.set_is_over() {
            self.play_turn();
        }
        self.finish_set()
    }

    pub fn game_is_over(&self) -> bool {
        self.players
            .iter()
            .any(|p| p.sets_won() >= self.rules.winning_sets)
    }

    pub fn game_winner(&self) -> Option<usize> {
        self.players
            .iter()
            .position(|p| p.sets_won() >= self.rules.winning_sets)
    }

    /// Plays a whole game from scratch and returns the winning seat.
    ///
    /// Termination: a non-standing turn always grows the board score by
    /// at least one, so every set ends in a bust or a double stand.
    pub fn play_game(&mut self) -> usize {
        self.setup_game();
        loop {
            self.play_set();
            if let Some(winner) = self.game_winner() {
                return winner;
            }
            self.prepare_next_set();
        }
    }
}
