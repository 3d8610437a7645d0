use super::*;
use crate::DECK_SIZE;
use crate::GameError;
use crate::N;
use crate::Points;
use crate::cards::*;
use crate::players::Computer;
use crate::players::Player;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A match of AK47 between the human seat and the computer seat.
///
/// The session owns both piles and both hands and enforces turn order:
/// the seat to act draws once, then discards once. After every discard the
/// acting hand is checked for the target set; a win ends the round, pays the
/// winner the value of the opponent's hand, and may end the match.
///
/// Every operation is synchronous. The caller collects decisions (from a
/// prompt, a view, or a [`Player`]) and then invokes the matching mutation.
///
/// # Lifecycle
///
/// `Dealing → InProgress → RoundOver`, then [`Session::next_round`] deals
/// again until a seat reaches the configured threshold.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    rng: SmallRng,
    draw: Pile,
    discard: Pile,
    hands: [Hand; N],
    scores: [Points; N],
    phase: Phase,
    turn: Seat,
    step: Step,
    winner: Option<Seat>,
    points: Option<Points>,
    champion: Option<Seat>,
    round: usize,
}

/// Construction.
impl Session {
    /// Starts a match under `config`, seeding the shuffle from `config.seed`
    /// or OS entropy, and deals the first round.
    pub fn new(config: Config) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
    /// Starts a match with an explicit random source.
    pub fn with_rng(config: Config, rng: SmallRng) -> Result<Self, GameError> {
        config.validate()?;
        let mut session = Self {
            config,
            rng,
            draw: Pile::empty(),
            discard: Pile::empty(),
            hands: [Hand::empty(), Hand::empty()],
            scores: [0; N],
            phase: Phase::Dealing,
            turn: Seat::Human,
            step: Step::Draw,
            winner: None,
            points: None,
            champion: None,
            round: 0,
        };
        session.deal();
        Ok(session)
    }
    /// Starts a match with the default threshold and the given hand size and scoring.
    pub fn new_round(hand_size: usize, scoring: Scoring) -> Result<Self, GameError> {
        Self::new(Config {
            hand_size,
            scoring,
            ..Config::default()
        })
    }
}

/// Public state accessors.
impl Session {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn current_hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }
    /// Sizes of the draw pile and the discard pile.
    pub fn pile_sizes(&self) -> (usize, usize) {
        (self.draw.size(), self.discard.size())
    }
    /// Face-up card on the discard pile, if any.
    pub fn top_of_discard(&self) -> Option<Card> {
        self.discard.top()
    }
    /// Discard top when [`Session::take_discard_top`] would hand it out.
    pub fn offer(&self) -> Option<Card> {
        match self.discard.is_depleted() {
            true => None,
            false => self.discard.top(),
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_round_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }
    pub fn round_winner(&self) -> Option<Seat> {
        self.winner
    }
    /// Points awarded to the winner of the finished round.
    pub fn round_points(&self) -> Option<Points> {
        self.points
    }
    /// Seat that reached the threshold, ending the match.
    pub fn match_winner(&self) -> Option<Seat> {
        self.champion
    }
    pub fn cumulative_scores(&self) -> [Points; N] {
        self.scores
    }
    /// Seat expected to act, or `None` once the round is over.
    pub fn to_act(&self) -> Option<Seat> {
        match self.phase {
            Phase::InProgress => Some(self.turn),
            _ => None,
        }
    }
    /// Half of the turn the acting seat owes next.
    pub fn step(&self) -> Step {
        self.step
    }
    /// Rounds dealt so far, starting at one.
    pub fn round(&self) -> usize {
        self.round
    }
    /// Cards across both piles and both hands.
    pub fn census(&self) -> usize {
        self.draw.size() + self.discard.size() + self.hands.iter().map(Hand::size).sum::<usize>()
    }
}

/// Turn mutations.
impl Session {
    /// Draws the top of the draw pile into `seat`'s hand, replenishing first
    /// when the pile is depleted.
    pub fn draw_from_pile(&mut self, seat: Seat) -> Result<Card, GameError> {
        self.ensure(seat, Step::Draw)?;
        self.replenish();
        let card = self.draw.draw().ok_or(GameError::EmptyPileAccess)?;
        self.receive(seat, card);
        log::debug!("{} draws from the pile", seat);
        Ok(card)
    }
    /// Takes the face-up top of the discard pile into `seat`'s hand.
    ///
    /// Only pile draws replenish, so a refused take leaves both piles as they were.
    pub fn take_discard_top(&mut self, seat: Seat) -> Result<Card, GameError> {
        self.ensure(seat, Step::Draw)?;
        let card = self.discard.draw().ok_or(GameError::EmptyPileAccess)?;
        self.receive(seat, card);
        log::debug!("{} takes {} from the discard pile", seat, card);
        Ok(card)
    }
    /// Drops the card at `index` onto the discard pile and checks for a win.
    pub fn discard_card(&mut self, seat: Seat, index: usize) -> Result<Card, GameError> {
        self.ensure(seat, Step::Discard)?;
        let card = self.hands[seat.index()].remove(index)?;
        self.discard.add(card);
        log::debug!("{} drops {}", seat, card);
        match self.hands[seat.index()].is_winning() {
            true => self.settle(seat),
            false => {
                self.turn = seat.opponent();
                self.step = Step::Draw;
            }
        }
        debug_assert!(self.census() == DECK_SIZE);
        Ok(card)
    }
    /// Plays `seat`'s whole turn with decisions from `player`.
    pub fn play<P>(&mut self, seat: Seat, player: &mut P) -> Result<Ply, GameError>
    where
        P: Player + ?Sized,
    {
        self.ensure(seat, Step::Draw)?;
        let source = player.source(self.current_hand(seat), self.offer());
        let drawn = match source {
            Source::Pile => self.draw_from_pile(seat)?,
            Source::Discard => self.take_discard_top(seat)?,
        };
        let index = player
            .discard(self.current_hand(seat))
            .ok_or(GameError::NoDecision(seat))?;
        let discarded = self.discard_card(seat, index)?;
        Ok(Ply {
            seat,
            source,
            drawn,
            discarded,
        })
    }
    /// Plays the computer seat's turn with the greedy policy.
    pub fn computer_take_turn(&mut self) -> Result<Ply, GameError> {
        let mut computer = match self.config.greedy {
            true => Computer::greedy(),
            false => Computer::default(),
        };
        self.play(Seat::Computer, &mut computer)
    }
    /// Deals a fresh round after the previous one was won.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        match (self.phase, self.champion) {
            (_, Some(_)) => Err(GameError::MatchOver),
            (Phase::RoundOver, None) => {
                self.deal();
                Ok(())
            }
            _ => Err(GameError::RoundInProgress),
        }
    }
}

impl Session {
    fn ensure(&self, seat: Seat, step: Step) -> Result<(), GameError> {
        if self.phase != Phase::InProgress {
            return Err(GameError::RoundOver);
        }
        if self.turn != seat {
            return Err(GameError::OutOfTurn(seat));
        }
        if self.step != step {
            return Err(GameError::IllegalDraw);
        }
        Ok(())
    }
    fn receive(&mut self, seat: Seat, card: Card) {
        self.hands[seat.index()].add(card);
        self.step = Step::Discard;
    }
    /// Folds the discard pile under the remaining draw pile and reshuffles
    /// once the draw pile is depleted.
    fn replenish(&mut self) {
        if self.draw.is_depleted() {
            log::debug!(
                "reshuffling {} discards into {} remaining",
                self.discard.size(),
                self.draw.size()
            );
            self.draw.absorb(&mut self.discard);
            self.draw.shuffle(&mut self.rng);
        }
    }
    fn deal(&mut self) {
        self.phase = Phase::Dealing;
        self.round += 1;
        self.draw = Pile::deck();
        self.draw.shuffle(&mut self.rng);
        self.discard = Pile::empty();
        for seat in Seat::all() {
            self.hands[seat.index()] = Hand::from(self.draw.deal(self.config.hand_size));
        }
        self.turn = Seat::Human;
        self.step = Step::Draw;
        self.winner = None;
        self.points = None;
        self.phase = Phase::InProgress;
        log::info!("round {} dealt, {} cards each", self.round, self.config.hand_size);
        debug_assert!(self.census() == DECK_SIZE);
        if let Some(seat) = Seat::all()
            .into_iter()
            .find(|s| self.hands[s.index()].is_winning())
        {
            log::info!("{} was dealt the target set", seat);
            self.settle(seat);
        }
    }
    fn settle(&mut self, winner: Seat) {
        let points = self.hands[winner.opponent().index()].score(self.config.scoring);
        self.scores[winner.index()] += points;
        self.phase = Phase::RoundOver;
        self.winner = Some(winner);
        self.points = Some(points);
        log::info!(
            "{} wins round {} with {} points ({} total)",
            winner,
            self.round,
            points,
            self.scores[winner.index()]
        );
        if let Some(threshold) = self.config.threshold {
            if self.scores[winner.index()] >= threshold {
                self.champion = Some(winner);
                log::info!("{} wins the match", winner);
            }
        }
    }
}
