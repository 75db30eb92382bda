use pazaak_engine::{Card, Decider, Decision, Rules};

/// Deterministic rule-cascade opponent: plays toward the goal score and
/// stands like a dealer with a fixed threshold ("draws to 16, stands on
/// 17" under the defaults).
///
/// The cascade runs in three phases:
/// 1. stand immediately on an exact goal or a guaranteed win;
/// 2. otherwise scan the hand for a card reaching the goal or a
///    guaranteed win, then for one reaching goal-1, then (only when
///    already busted) check the first hand entry for a card reaching
///    goal-2;
/// 3. decide standing on the post-play score, never standing into a
///    guaranteed loss and always standing on a guaranteed win.
///
/// The phase-2c fallback inspects only the first hand entry. That
/// asymmetry is intentional behavior other strategies are benchmarked
/// against; see the regression test pinning it.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicStrategy {
    goal: i32,
    stand_threshold: i32,
}

impl HeuristicStrategy {
    pub fn new(rules: &Rules) -> Self {
        Self {
            goal: rules.goal,
            stand_threshold: rules.stand_threshold,
        }
    }
}

impl Decider for HeuristicStrategy {
    fn decide(
        &mut self,
        hand: &[Card],
        self_score: i32,
        opp_score: i32,
        opp_stands: bool,
    ) -> Decision {
        let goal = self.goal;
        // Standing at `score` wins outright iff the opponent is locked in below it.
        let guaranteed_win = |score: i32| opp_stands && opp_score < score && score <= goal;

        // Phase 1: stand without playing.
        if self_score == goal || guaranteed_win(self_score) {
            return Decision::stand();
        }

        // Phase 2a: first card reaching the goal exactly or winning outright.
        let mut play_index: Option<usize> = None;
        for (i, &card) in hand.iter().enumerate() {
            let reach = self_score + i32::from(card);
            if reach == goal || guaranteed_win(reach) {
                play_index = Some(i);
                break;
            }
        }

        // Phase 2b: first card reaching goal-1, unless the opponent sits on the goal.
        if play_index.is_none() && opp_score != goal {
            for (i, &card) in hand.iter().enumerate() {
                if self_score + i32::from(card) == goal - 1 {
                    play_index = Some(i);
                    break;
                }
            }
        }

        // Phase 2c: busted rescue toward goal-2. Only the first hand entry
        // is ever inspected here, unlike the exhaustive scans above.
        if play_index.is_none() && self_score > goal && opp_score <= goal - 2 {
            if let Some(&card) = hand.first() {
                if self_score + i32::from(card) == goal - 2 {
                    play_index = Some(0);
                }
            }
        }

        // Phase 3: stand decision on the score after any play.
        let current = match play_index {
            Some(i) => self_score + i32::from(hand[i]),
            None => self_score,
        };
        let guaranteed_loss = opp_stands && current < opp_score && opp_score <= goal;
        let stand = if guaranteed_loss {
            false
        } else if guaranteed_win(current) {
            true
        } else {
            current > self.stand_threshold
        };

        match (play_index, stand) {
            (Some(i), true) => Decision::play_and_stand(i),
            (Some(i), false) => Decision::play(i),
            (None, true) => Decision::stand(),
            (None, false) => Decision::pass(),
        }
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
