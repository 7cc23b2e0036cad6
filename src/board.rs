//! Card deck and board layout.
//!
//! The board owns a fixed set of cards (each pair shares a hidden `PairId`)
//! plus a display-order permutation. Shuffling permutes presentation only;
//! the card/value pairing is never reordered.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a card, valid for the lifetime of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card {}", self.0)
    }
}

/// The hidden matching value shared by exactly two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub usize);

/// Visual state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    /// Face-down
    #[default]
    Hidden,

    /// Temporarily revealed by the player
    FaceUp,

    /// Permanently revealed for the rest of the session
    Matched,
}

impl CardFace {
    pub fn is_hidden(&self) -> bool {
        matches!(self, CardFace::Hidden)
    }

    pub fn is_face_up(&self) -> bool {
        matches!(self, CardFace::FaceUp)
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, CardFace::Matched)
    }
}

/// A single tile on the board.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub id: CardId,
    pub pair: PairId,
    pub face: CardFace,
}

/// The full deck plus its presentation order.
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
    /// `display_order[slot]` is the card shown at that slot.
    display_order: Vec<usize>,
}

impl Board {
    /// Create a board with `pairs` matching pairs, laid out in deal order.
    pub fn new(pairs: usize) -> Self {
        let cards = (0..pairs * 2)
            .map(|i| Card {
                id: CardId(i),
                pair: PairId(i / 2),
                face: CardFace::Hidden,
            })
            .collect();

        Self {
            cards,
            display_order: (0..pairs * 2).collect(),
        }
    }

    /// Total number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub fn face(&self, id: CardId) -> CardFace {
        self.cards.get(id.0).map(|c| c.face).unwrap_or_default()
    }

    pub fn set_face(&mut self, id: CardId, face: CardFace) {
        if let Some(card) = self.cards.get_mut(id.0) {
            card.face = face;
        }
    }

    pub fn pair_of(&self, id: CardId) -> Option<PairId> {
        self.cards.get(id.0).map(|c| c.pair)
    }

    /// True when both cards carry the same hidden value.
    pub fn is_matching_pair(&self, a: CardId, b: CardId) -> bool {
        match (self.pair_of(a), self.pair_of(b)) {
            (Some(pa), Some(pb)) => pa == pb,
            _ => false,
        }
    }

    /// Turn every card face-down, clearing matched state too.
    pub fn hide_all(&mut self) {
        for card in &mut self.cards {
            card.face = CardFace::Hidden;
        }
    }

    /// Fisher-Yates pass over the display slots.
    ///
    /// Only `display_order` changes; card ids and pair values stay put.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.display_order.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.display_order.swap(i, j);
        }
    }

    /// Cards in presentation order, for rendering.
    pub fn display_cards(&self) -> impl Iterator<Item = &Card> {
        self.display_order.iter().map(move |&idx| &self.cards[idx])
    }

    /// Resolve a display slot (what the player points at) to a card id.
    pub fn card_at_slot(&self, slot: usize) -> Option<CardId> {
        self.display_order.get(slot).map(|&idx| self.cards[idx].id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new(4);
        assert_eq!(board.len(), 8);
        assert!(board.cards().iter().all(|c| c.face.is_hidden()));

        // Adjacent deal positions share a pair value
        assert_eq!(board.pair_of(CardId(0)), board.pair_of(CardId(1)));
        assert_ne!(board.pair_of(CardId(1)), board.pair_of(CardId(2)));
    }

    #[test]
    fn test_matching_pair_check() {
        let board = Board::new(2);
        assert!(board.is_matching_pair(CardId(0), CardId(1)));
        assert!(board.is_matching_pair(CardId(2), CardId(3)));
        assert!(!board.is_matching_pair(CardId(0), CardId(2)));
        assert!(!board.is_matching_pair(CardId(0), CardId(99)));
    }

    #[test]
    fn test_face_transitions() {
        let mut board = Board::new(2);
        board.set_face(CardId(0), CardFace::FaceUp);
        assert!(board.face(CardId(0)).is_face_up());

        board.set_face(CardId(0), CardFace::Matched);
        assert!(board.face(CardId(0)).is_matched());

        board.hide_all();
        assert!(board.cards().iter().all(|c| c.face.is_hidden()));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut board = Board::new(8);
        let mut rng = StdRng::seed_from_u64(7);

        let count_values = |board: &Board| {
            let mut counts: HashMap<PairId, usize> = HashMap::new();
            for card in board.display_cards() {
                *counts.entry(card.pair).or_default() += 1;
            }
            counts
        };

        let before = count_values(&board);
        for _ in 0..10 {
            board.shuffle(&mut rng);
        }
        let after = count_values(&board);

        // The multiset of pair values is unchanged by any number of shuffles
        assert_eq!(before, after);
        assert!(after.values().all(|&n| n == 2));
    }

    #[test]
    fn test_shuffle_leaves_pairing_untouched() {
        let mut board = Board::new(4);
        let mut rng = StdRng::seed_from_u64(42);
        board.shuffle(&mut rng);

        // Card ids still map to their original pair values
        for i in 0..board.len() {
            assert_eq!(board.pair_of(CardId(i)), Some(PairId(i / 2)));
        }
    }

    #[test]
    fn test_slot_lookup_follows_shuffle() {
        let mut board = Board::new(4);
        let mut rng = StdRng::seed_from_u64(3);
        board.shuffle(&mut rng);

        let mut seen: Vec<CardId> = (0..board.len())
            .map(|slot| board.card_at_slot(slot).unwrap())
            .collect();
        seen.sort_by_key(|id| id.0);
        let expected: Vec<CardId> = (0..board.len()).map(CardId).collect();
        assert_eq!(seen, expected);

        assert!(board.card_at_slot(board.len()).is_none());
    }
}
