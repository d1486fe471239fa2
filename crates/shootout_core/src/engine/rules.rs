//! Win-condition rules
//!
//! Regulation early termination is a fixed list of checks taken at three
//! checkpoints. The list overlaps itself and is narrower than "lead exceeds
//! the opponent's remaining kicks" (a human lead after the computer's kick in
//! rounds 1-3 is only caught after the human's next kick). Changing any case
//! changes the tick on which matches end.
// TODO: collapse the checkpoint list into one remaining-kicks formula and
// re-baseline the scenario tests that pin finishing rounds.

use serde::{Deserialize, Serialize};

use super::match_state::{KickResult, Verdict, MAX_ROUNDS};

/// Moment at which regulation is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Checkpoint {
    /// Human kick resolved and its outcome hold elapsed
    AfterHumanKick,
    /// Computer kick resolved and its outcome hold elapsed
    AfterComputerKick,
    /// Preparation countdown elapsed, computer about to shoot
    BeforeComputerKick,
}

/// What the state machine does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Finish,
    SuddenDeath,
}

/// Regulation decision for scores `(human, computer)` in 1-based `round`.
pub fn regulation_decision(checkpoint: Checkpoint, human: u32, computer: u32, round: u8) -> Decision {
    let round = round.min(MAX_ROUNDS);
    let remaining = u32::from(MAX_ROUNDS - round);

    let finished = match checkpoint {
        Checkpoint::AfterHumanKick => {
            if round == MAX_ROUNDS {
                human > computer + 1 || computer > human
            } else {
                // Computer still has this round's kick plus `remaining`.
                human > computer + remaining + 1
            }
        }
        Checkpoint::AfterComputerKick => {
            if round == MAX_ROUNDS {
                return if human == computer { Decision::SuddenDeath } else { Decision::Finish };
            }
            computer > human + remaining || (round == 4 && round_four_shortcut(human, computer))
        }
        Checkpoint::BeforeComputerKick => round == MAX_ROUNDS && computer + remaining + 1 < human,
    };

    if finished {
        Decision::Finish
    } else {
        Decision::Continue
    }
}

/// Explicit thresholds checked once round 4 is complete.
fn round_four_shortcut(human: u32, computer: u32) -> bool {
    let lead = |a: u32, b: u32| (a >= 4 && b <= 2) || (a >= 3 && b <= 1) || (a >= 2 && b == 0);
    lead(human, computer) || lead(computer, human)
}

/// Sudden-death round verdict: only an asymmetric round decides.
pub fn sudden_death_verdict(human: KickResult, computer: KickResult) -> Option<Verdict> {
    match (human, computer) {
        (KickResult::Scored, KickResult::Missed) => Some(Verdict::HumanWins),
        (KickResult::Missed, KickResult::Scored) => Some(Verdict::ComputerWins),
        _ => None,
    }
}

pub fn verdict_from_scores(human: u32, computer: u32) -> Verdict {
    use std::cmp::Ordering;
    match human.cmp(&computer) {
        Ordering::Greater => Verdict::HumanWins,
        Ordering::Less => Verdict::ComputerWins,
        Ordering::Equal => Verdict::Draw,
    }
}

/// Reason line shown under the result headline.
pub fn describe_result(
    verdict: Verdict,
    is_sudden_death: bool,
    round: u8,
    sudden_death_round: u32,
) -> String {
    let who = match verdict {
        Verdict::HumanWins => "Player",
        Verdict::ComputerWins => "CPU",
        Verdict::Draw => return "Scores are level.".to_string(),
    };

    if is_sudden_death {
        return format!("{who} wins in sudden death round {sudden_death_round}!");
    }

    if round >= MAX_ROUNDS {
        format!("{who} wins in the final round!")
    } else {
        let remaining = MAX_ROUNDS - round;
        format!("{who} wins with {remaining} kicks remaining!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Checkpoint::*;

    #[test]
    fn test_human_lead_after_human_kick() {
        // Round 3: computer has kicks 3, 4, 5 left -> needs lead > c + 3.
        assert_eq!(regulation_decision(AfterHumanKick, 3, 0, 3), Decision::Continue);
        // Round 2: 2-0 lead with computer having 4 kicks left is open.
        assert_eq!(regulation_decision(AfterHumanKick, 2, 0, 2), Decision::Continue);
        // Round 4: 3-0, computer has 2 kicks left.
        assert_eq!(regulation_decision(AfterHumanKick, 3, 0, 4), Decision::Finish);
    }

    #[test]
    fn test_round_five_after_human_kick() {
        assert_eq!(regulation_decision(AfterHumanKick, 5, 3, 5), Decision::Finish);
        assert_eq!(regulation_decision(AfterHumanKick, 4, 3, 5), Decision::Continue);
        assert_eq!(regulation_decision(AfterHumanKick, 3, 4, 5), Decision::Finish);
        assert_eq!(regulation_decision(AfterHumanKick, 4, 4, 5), Decision::Continue);
    }

    #[test]
    fn test_computer_lead_after_computer_kick() {
        // Round 3 done: human has 2 kicks left.
        assert_eq!(regulation_decision(AfterComputerKick, 0, 3, 3), Decision::Finish);
        assert_eq!(regulation_decision(AfterComputerKick, 1, 3, 3), Decision::Continue);
        // Round 2 done: human has 3 kicks left.
        assert_eq!(regulation_decision(AfterComputerKick, 0, 3, 2), Decision::Continue);
    }

    #[test]
    fn test_human_lead_after_computer_kick_waits_outside_round_four() {
        // 3-0 after round 3: human lead is not checked at this checkpoint.
        assert_eq!(regulation_decision(AfterComputerKick, 3, 0, 3), Decision::Continue);
    }

    #[test]
    fn test_round_four_shortcuts() {
        assert_eq!(regulation_decision(AfterComputerKick, 4, 2, 4), Decision::Finish);
        assert_eq!(regulation_decision(AfterComputerKick, 3, 1, 4), Decision::Finish);
        assert_eq!(regulation_decision(AfterComputerKick, 2, 0, 4), Decision::Finish);
        assert_eq!(regulation_decision(AfterComputerKick, 2, 4, 4), Decision::Finish);
        assert_eq!(regulation_decision(AfterComputerKick, 0, 2, 4), Decision::Finish);
        assert_eq!(regulation_decision(AfterComputerKick, 3, 2, 4), Decision::Continue);
        assert_eq!(regulation_decision(AfterComputerKick, 2, 1, 4), Decision::Continue);
    }

    #[test]
    fn test_round_five_routes_ties_to_sudden_death() {
        assert_eq!(regulation_decision(AfterComputerKick, 5, 5, 5), Decision::SuddenDeath);
        assert_eq!(regulation_decision(AfterComputerKick, 3, 3, 5), Decision::SuddenDeath);
        assert_eq!(regulation_decision(AfterComputerKick, 4, 3, 5), Decision::Finish);
        assert_eq!(regulation_decision(AfterComputerKick, 3, 4, 5), Decision::Finish);
    }

    #[test]
    fn test_before_computer_kick() {
        assert_eq!(regulation_decision(BeforeComputerKick, 5, 3, 5), Decision::Finish);
        assert_eq!(regulation_decision(BeforeComputerKick, 4, 3, 5), Decision::Continue);
        assert_eq!(regulation_decision(BeforeComputerKick, 4, 0, 4), Decision::Continue);
    }

    #[test]
    fn test_sudden_death_verdict() {
        use KickResult::*;
        assert_eq!(sudden_death_verdict(Scored, Missed), Some(Verdict::HumanWins));
        assert_eq!(sudden_death_verdict(Missed, Scored), Some(Verdict::ComputerWins));
        assert_eq!(sudden_death_verdict(Scored, Scored), None);
        assert_eq!(sudden_death_verdict(Missed, Missed), None);
    }

    #[test]
    fn test_describe_result() {
        assert_eq!(
            describe_result(Verdict::HumanWins, false, 5, 0),
            "Player wins in the final round!"
        );
        assert_eq!(
            describe_result(Verdict::ComputerWins, false, 3, 0),
            "CPU wins with 2 kicks remaining!"
        );
        assert_eq!(
            describe_result(Verdict::HumanWins, true, 5, 7),
            "Player wins in sudden death round 7!"
        );
    }

    #[test]
    fn test_verdict_from_scores() {
        assert_eq!(verdict_from_scores(3, 1), Verdict::HumanWins);
        assert_eq!(verdict_from_scores(1, 3), Verdict::ComputerWins);
        assert_eq!(verdict_from_scores(2, 2), Verdict::Draw);
    }
}
