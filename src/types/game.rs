//! Game result types
//!
//! This module defines the raw rows projected out of a results CSV and the
//! validated game outcomes the engine turns into record updates.

use super::error::StandingsError;
use super::record::TeamId;

/// Raw game row as projected from a results CSV line
///
/// Only the away team, home team and result text columns are kept. No
/// validation beyond the row shape has been applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGameRow {
    /// Line number in the source file (1-based, header included)
    pub line: u64,

    /// Away team identifier, unvalidated
    pub away_team: String,

    /// Home team identifier, unvalidated
    pub home_team: String,

    /// Free-text result, e.g. `HOME WINS OT`
    pub result_text: String,
}

/// Which side of a game won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// Decided in regulation time
    Regulation,
    /// Decided in overtime or a shootout
    OvertimeOrShootout,
}

/// Fully classified game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeRegulation,
    HomeOvertimeOrShootout,
    AwayRegulation,
    AwayOvertimeOrShootout,
}

impl Outcome {
    /// Combine the winning side and the finish
    pub fn new(winner: Side, finish: Finish) -> Self {
        match (winner, finish) {
            (Side::Home, Finish::Regulation) => Outcome::HomeRegulation,
            (Side::Home, Finish::OvertimeOrShootout) => Outcome::HomeOvertimeOrShootout,
            (Side::Away, Finish::Regulation) => Outcome::AwayRegulation,
            (Side::Away, Finish::OvertimeOrShootout) => Outcome::AwayOvertimeOrShootout,
        }
    }

    pub fn winner(&self) -> Side {
        match self {
            Outcome::HomeRegulation | Outcome::HomeOvertimeOrShootout => Side::Home,
            Outcome::AwayRegulation | Outcome::AwayOvertimeOrShootout => Side::Away,
        }
    }

    pub fn finish(&self) -> Finish {
        match self {
            Outcome::HomeRegulation | Outcome::AwayRegulation => Finish::Regulation,
            Outcome::HomeOvertimeOrShootout | Outcome::AwayOvertimeOrShootout => {
                Finish::OvertimeOrShootout
            }
        }
    }
}

/// Counter a single team update increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Win,
    Loss,
    OvertimeLoss,
}

impl From<Finish> for Decision {
    fn from(finish: Finish) -> Self {
        match finish {
            Finish::Regulation => Decision::Loss,
            Finish::OvertimeOrShootout => Decision::OvertimeLoss,
        }
    }
}

/// Result text after tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultText {
    /// Winner known; `finish` is `None` when the third token is not REG/OT/SO
    Decided { winner: Side, finish: Option<Finish> },
    /// First token is neither HOME nor AWAY
    UnknownWinner,
}

impl ResultText {
    /// Tokenize a result string such as `"Home wins SO"`
    ///
    /// The text is uppercased and split on whitespace; the middle token is ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the text does not split into exactly three tokens.
    /// An unknown winner or finish is not an error; callers skip or partially apply
    /// those rows.
    pub fn parse(text: &str, line: Option<u64>) -> Result<Self, StandingsError> {
        let upper = text.to_uppercase();
        let tokens: Vec<&str> = upper.split_whitespace().collect();

        let [side, _, finish] = tokens.as_slice() else {
            return Err(StandingsError::invalid_format(
                line,
                format!(
                    "result '{}' has {} tokens, expected 3",
                    text.trim(),
                    tokens.len()
                ),
            ));
        };

        let winner = match *side {
            "HOME" => Side::Home,
            "AWAY" => Side::Away,
            _ => return Ok(ResultText::UnknownWinner),
        };

        let finish = match *finish {
            "REG" => Some(Finish::Regulation),
            "OT" | "SO" => Some(Finish::OvertimeOrShootout),
            _ => None,
        };

        Ok(ResultText::Decided { winner, finish })
    }
}

/// Validated game ready to be applied to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub away_team: TeamId,
    pub home_team: TeamId,
    pub winner: Side,
    /// `None` when the finish token was unrecognized; only the winner is credited
    pub finish: Option<Finish>,
}

impl GameResult {
    /// The classified outcome, if the finish was recognized
    pub fn outcome(&self) -> Option<Outcome> {
        self.finish.map(|finish| Outcome::new(self.winner, finish))
    }

    pub fn winning_team(&self) -> TeamId {
        match self.winner {
            Side::Home => self.home_team,
            Side::Away => self.away_team,
        }
    }

    pub fn losing_team(&self) -> TeamId {
        match self.winner {
            Side::Home => self.away_team,
            Side::Away => self.home_team,
        }
    }

    /// Record updates this game produces, winner first
    pub fn updates(&self) -> impl Iterator<Item = (TeamId, Decision)> {
        let loser = self
            .finish
            .map(|finish| (self.losing_team(), Decision::from(finish)));

        std::iter::once((self.winning_team(), Decision::Win)).chain(loser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::home_reg("HOME WINS REG", Side::Home, Some(Finish::Regulation))]
    #[case::home_ot("HOME WINS OT", Side::Home, Some(Finish::OvertimeOrShootout))]
    #[case::away_so("AWAY WINS SO", Side::Away, Some(Finish::OvertimeOrShootout))]
    #[case::lowercase("away wins reg", Side::Away, Some(Finish::Regulation))]
    #[case::mixed_case_extra_spaces("  Home   wins  Ot ", Side::Home, Some(Finish::OvertimeOrShootout))]
    #[case::unknown_finish("HOME WINS PENALTIES", Side::Home, None)]
    fn test_parse_decided(
        #[case] text: &str,
        #[case] winner: Side,
        #[case] finish: Option<Finish>,
    ) {
        assert_eq!(
            ResultText::parse(text, None).unwrap(),
            ResultText::Decided { winner, finish }
        );
    }

    #[test]
    fn test_parse_unknown_winner() {
        assert_eq!(
            ResultText::parse("TIE GAME REG", None).unwrap(),
            ResultText::UnknownWinner
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::two_tokens("HOME REG")]
    #[case::four_tokens("HOME WINS IN OT")]
    fn test_parse_wrong_token_count(#[case] text: &str) {
        let result = ResultText::parse(text, Some(5));
        assert!(matches!(
            result,
            Err(StandingsError::InvalidFormat { line: Some(5), .. })
        ));
    }

    #[rstest]
    #[case(Side::Home, Finish::Regulation, Outcome::HomeRegulation)]
    #[case(Side::Home, Finish::OvertimeOrShootout, Outcome::HomeOvertimeOrShootout)]
    #[case(Side::Away, Finish::Regulation, Outcome::AwayRegulation)]
    #[case(Side::Away, Finish::OvertimeOrShootout, Outcome::AwayOvertimeOrShootout)]
    fn test_outcome_parts(#[case] winner: Side, #[case] finish: Finish, #[case] expected: Outcome) {
        let outcome = Outcome::new(winner, finish);
        assert_eq!(outcome, expected);
        assert_eq!(outcome.winner(), winner);
        assert_eq!(outcome.finish(), finish);
    }

    #[rstest]
    #[case::home_reg(Side::Home, Some(Finish::Regulation), vec![(11, Decision::Win), (3, Decision::Loss)])]
    #[case::home_ot(Side::Home, Some(Finish::OvertimeOrShootout), vec![(11, Decision::Win), (3, Decision::OvertimeLoss)])]
    #[case::away_reg(Side::Away, Some(Finish::Regulation), vec![(3, Decision::Win), (11, Decision::Loss)])]
    #[case::away_unknown_finish(Side::Away, None, vec![(3, Decision::Win)])]
    fn test_game_updates(
        #[case] winner: Side,
        #[case] finish: Option<Finish>,
        #[case] expected: Vec<(TeamId, Decision)>,
    ) {
        let game = GameResult {
            away_team: 3,
            home_team: 11,
            winner,
            finish,
        };
        assert_eq!(game.updates().collect::<Vec<_>>(), expected);
        assert_eq!(game.outcome(), finish.map(|finish| Outcome::new(winner, finish)));
    }
}
