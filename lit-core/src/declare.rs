//! Declaration planner.
//!
//! A declaration claims how a full six-card set (one suit, one rank range)
//! is distributed among a team. [`plan`] turns a per-card assignment map
//! into the canonical grouped form, refusing to produce anything while a
//! card is unassigned. It is a pure transformation: caller-owned data is
//! never mutated.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use lit_types::{Card, Position, RankRange, Suit};

/// Number of cards in one declarable set.
pub const SET_SIZE: usize = 6;

/// Why a declaration could not be built.
///
/// Callers treat this as "do not submit", not as a surfaced error: the
/// submission is simply withheld until every card has an assignee.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclareError {
    /// A card in the set has no assignee yet.
    #[error("card {0} has no assignee")]
    Unassigned(Card),
}

/// One group of a declaration: cards claimed for a single seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredGroup {
    /// The seat claimed to hold these cards.
    pub position: Position,
    /// The cards, in set enumeration order.
    pub cards: Vec<Card>,
}

/// A complete declaration: ordered groups covering all six set cards.
///
/// Groups are ordered by ascending assignee position; each card of the set
/// appears in exactly one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The ordered groups.
    pub groups: Vec<DeclaredGroup>,
}

impl Declaration {
    /// The nested card arrays in the wire form `playDeclare` expects.
    pub fn wire_groups(&self) -> Vec<Vec<Card>> {
        self.groups.iter().map(|g| g.cards.clone()).collect()
    }

    /// All declared cards, in output order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.groups.iter().flat_map(|g| g.cards.iter().copied())
    }
}

/// The six canonical cards of a (suit, range) set, in enumeration order.
pub fn set_cards(suit: Suit, range: RankRange) -> [Card; SET_SIZE] {
    range.ranks().map(|rank| Card::new(rank, suit))
}

/// Build a declaration from a per-card assignment map.
///
/// Cards present in the declarer's own hand are auto-assigned to the
/// declarer; the remaining cards must each have an entry in `assignments`.
/// Grouping is a stable sort by assignee position, so cards with the same
/// assignee keep their set enumeration order.
pub fn plan(
    suit: Suit,
    range: RankRange,
    declarer: Position,
    hand: &[Card],
    assignments: &BTreeMap<Card, Position>,
) -> Result<Declaration, DeclareError> {
    let mut assigned: Vec<(Card, Position)> = Vec::with_capacity(SET_SIZE);
    for card in set_cards(suit, range) {
        let position = if hand.contains(&card) {
            declarer
        } else {
            assignments
                .get(&card)
                .copied()
                .ok_or(DeclareError::Unassigned(card))?
        };
        assigned.push((card, position));
    }

    // Stable sort: equal assignees keep enumeration order.
    assigned.sort_by_key(|&(_, position)| position);

    let mut groups: Vec<DeclaredGroup> = Vec::new();
    for (card, position) in assigned {
        match groups.last_mut() {
            Some(group) if group.position == position => group.cards.push(card),
            _ => groups.push(DeclaredGroup {
                position,
                cards: vec![card],
            }),
        }
    }

    Ok(Declaration { groups })
}

/// Which (range, suit) sets are offerable given the observed hand.
///
/// A set is offerable once at least one of its cards is confirmed in hand.
/// Advisory for selection UIs; not part of the validity invariant.
pub fn offerable_sets(hand: &[Card]) -> BTreeSet<(RankRange, Suit)> {
    hand.iter()
        .map(|card| (card.rank.range(), card.suit))
        .collect()
}

/// Which rank ranges are offerable given the observed hand.
pub fn offerable_ranges(hand: &[Card]) -> BTreeSet<RankRange> {
    hand.iter().map(|card| card.rank.range()).collect()
}
