use std::fmt;

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::{Card, ClassifiedHand, Deck, Hand, PlayerBitSet, PokerError, evaluate_with_board};

use super::{TieBreaker, resolve_winners};

/// Cards each player is dealt face down.
pub const HOLE_CARDS: usize = 2;
/// Cards that end up on the board.
pub const BOARD_CARDS: usize = 5;
/// The most players one deck can deal a full hand to.
pub const MAX_PLAYERS: usize = (52 - BOARD_CARDS) / HOLE_CARDS;

/// A player's cards after the showdown evaluation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerHand {
    /// Zero based seat at the table.
    pub seat: usize,
    pub hole_cards: Hand,
    /// Best five cards out of hole and community cards.
    pub best: ClassifiedHand,
}

/// Current state of a game.
#[derive(Debug, Clone)]
pub struct HoldemGame {
    /// Cards that haven't been dealt yet.
    deck: Deck,
    /// Copy of the deck as the game started, used to verify the deal.
    reference_deck: Deck,
    /// Hole cards, one hand per seat.
    hands: Vec<Hand>,
    /// Community cards.
    board: Vec<Card>,
    /// Filled in by `evaluate_hands`.
    results: Vec<PlayerHand>,
}

impl HoldemGame {
    /// Create a new game with a full shuffled deck and `num_players` empty hands.
    ///
    /// ```
    /// use holdem_showdown::holdem::HoldemGame;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut game = HoldemGame::new(3, &mut rng).unwrap();
    /// game.play_out().unwrap();
    ///
    /// assert_eq!(3, game.player_hands().len());
    /// assert_eq!(52 - 3 * 2 - 5, game.deck().len());
    /// ```
    pub fn new<R: Rng + ?Sized>(num_players: usize, rng: &mut R) -> Result<Self, PokerError> {
        let mut deck = Deck::default();
        deck.shuffle(rng);
        Self::with_deck(num_players, deck)
    }

    /// Start a game from a deck the caller already arranged.
    pub fn with_deck(num_players: usize, deck: Deck) -> Result<Self, PokerError> {
        if num_players == 0 || num_players > MAX_PLAYERS {
            return Err(PokerError::InvalidPlayerCount(num_players));
        }
        Ok(Self {
            reference_deck: deck.clone(),
            deck,
            hands: (0..num_players).map(|_| Hand::new()).collect(),
            board: Vec::with_capacity(BOARD_CARDS),
            results: Vec::with_capacity(num_players),
        })
    }

    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hole_cards(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.board
    }

    /// Results of the last `evaluate_hands` call, empty before that.
    pub fn player_hands(&self) -> &[PlayerHand] {
        &self.results
    }

    /// Deal one card from the deck to the player at `seat`.
    pub fn deal_to(&mut self, seat: usize) -> Result<Card, PokerError> {
        let hand = self
            .hands
            .get_mut(seat)
            .ok_or(PokerError::InvalidPlayerIndex(seat))?;
        let card = self.deck.draw()?;
        hand.push(card)?;
        event!(Level::DEBUG, seat, card = %card, "Dealt hole card");
        Ok(card)
    }

    /// Deal two cards to every player, one card per player per pass.
    pub fn deal_hole_cards(&mut self) -> Result<(), PokerError> {
        for _ in 0..HOLE_CARDS {
            for seat in 0..self.num_players() {
                self.deal_to(seat)?;
            }
        }
        Ok(())
    }

    fn deal_board(&mut self, count: usize) -> Result<(), PokerError> {
        if self.board.len() + count > BOARD_CARDS {
            return Err(PokerError::BoardComplete);
        }
        for _ in 0..count {
            let card = self.deck.draw()?;
            self.board.push(card);
            event!(Level::DEBUG, card = %card, "Dealt community card");
        }
        Ok(())
    }

    /// Three community cards.
    pub fn deal_flop(&mut self) -> Result<(), PokerError> {
        self.deal_board(3)
    }

    pub fn deal_turn(&mut self) -> Result<(), PokerError> {
        self.deal_board(1)
    }

    pub fn deal_river(&mut self) -> Result<(), PokerError> {
        self.deal_board(1)
    }

    /// Deal whatever community cards are still missing.
    pub fn deal_community_cards(&mut self) -> Result<(), PokerError> {
        self.deal_board(BOARD_CARDS - self.board.len())
    }

    /// Find every player's best hand out of their hole cards and the board.
    pub fn evaluate_hands(&mut self) -> Result<&[PlayerHand], PokerError> {
        let _span = trace_span!("evaluate_hands", players = self.num_players()).entered();
        self.results = self
            .hands
            .iter()
            .enumerate()
            .map(|(seat, hole_cards)| {
                let best = evaluate_with_board(hole_cards.as_slice(), &self.board)?;
                Ok(PlayerHand {
                    seat,
                    hole_cards: hole_cards.clone(),
                    best,
                })
            })
            .collect::<Result<Vec<_>, PokerError>>()?;
        Ok(&self.results)
    }

    /// Deal the hole cards and the full board, then evaluate every hand.
    pub fn play_out(&mut self) -> Result<&[PlayerHand], PokerError> {
        self.deal_hole_cards()?;
        self.deal_community_cards()?;
        self.evaluate_hands()
    }

    /// Seats that win the pot under the given tie policy.
    /// Empty until `evaluate_hands` has run.
    pub fn winners<T: TieBreaker + ?Sized>(
        &self,
        tie_breaker: &T,
    ) -> Result<PlayerBitSet, PokerError> {
        let winners = resolve_winners(&self.results, tie_breaker)?;
        for seat in winners.ones() {
            event!(
                Level::INFO,
                seat,
                hand = %self.results[seat].best.name(),
                split = winners.count() > 1,
                "Pot awarded"
            );
        }
        Ok(winners)
    }

    /// Check that every dealt card came out of the starting deck exactly once.
    ///
    /// Returns the seats holding a card that doesn't check out. Problems with
    /// the community cards are reported as seat `num_players()`.
    pub fn verify_hands(&self) -> Result<(), Vec<usize>> {
        let mut remaining = self.reference_deck.clone();
        let dealt = self
            .hands
            .iter()
            .map(Hand::as_slice)
            .chain(std::iter::once(self.board.as_slice()));

        let invalid: Vec<usize> = dealt
            .enumerate()
            .filter_map(|(seat, cards)| {
                // Every card is taken out of the copy so it can't be counted twice.
                let all_found = cards.iter().all(|c| remaining.remove(c));
                (!all_found).then_some(seat)
            })
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            event!(Level::WARN, ?invalid, "Dealt cards don't match the deck");
            Err(invalid)
        }
    }
}

impl fmt::Display for HoldemGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Community cards:")?;
        let board: Vec<String> = self.board.iter().map(Card::to_string).collect();
        writeln!(f, "{}", board.join(" "))?;

        for (seat, hand) in self.hands.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "Player {}:", seat + 1)?;
            writeln!(f, "Hole cards: {hand}")?;
            if let Some(result) = self.results.get(seat) {
                writeln!(f, "Best hand: {}", result.best.name())?;
                let best: Vec<String> = result.best.cards().iter().map(Card::to_string).collect();
                writeln!(f, "{}", best.join(" "))?;
            }
        }
        Ok(())
    }
}
