//! Candidate ordering at each search node.
//!
//! [`Warnsdorff`] ranks onward moves by how many further moves each leaves
//! open, fewest first, and shuffles each group of equal degree with the
//! caller's RNG. Ordering only decides which tour is found first; every
//! implementation yields the same set of candidates, so the explored search
//! space is identical.

use std::fmt::Debug;

use knightforge_config::MoveOrderingType;
use knightforge_core::Cell;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::board_state::BoardState;

/// Onward moves from one cell, best first. Never more than 8.
pub type Candidates = SmallVec<[Cell; 8]>;

type Ranked = SmallVec<[(usize, Cell); 8]>;

/// Ranks the unvisited knight moves from a cell.
pub trait MoveOrdering: Send + Sync + Debug {
    /// Returns the on-board, unvisited neighbours of `from` in the order
    /// they should be tried.
    fn candidates<R: Rng + ?Sized>(&self, from: Cell, state: &BoardState, rng: &mut R)
        -> Candidates;
}

/// Fewest onward moves first, ties broken at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct Warnsdorff;

/// Fewest onward moves first, ties kept in knight move order.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarnsdorffStable;

/// Neighbours in knight move order, no ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSetOrder;

fn unvisited_neighbours(from: Cell, state: &BoardState) -> impl Iterator<Item = Cell> + '_ {
    state
        .board()
        .knight_moves(from)
        .filter(move |&to| !state.is_visited(to))
}

fn ranked_by_degree(from: Cell, state: &BoardState) -> Ranked {
    let mut ranked: Ranked = unvisited_neighbours(from, state)
        .map(|to| (state.degree(to), to))
        .collect();
    // stable: equal degrees stay in knight move order
    ranked.sort_by_key(|&(degree, _)| degree);
    ranked
}

impl MoveOrdering for Warnsdorff {
    fn candidates<R: Rng + ?Sized>(
        &self,
        from: Cell,
        state: &BoardState,
        rng: &mut R,
    ) -> Candidates {
        let mut ranked = ranked_by_degree(from, state);
        for group in ranked.chunk_by_mut(|a, b| a.0 == b.0) {
            group.shuffle(rng);
        }
        ranked.into_iter().map(|(_, cell)| cell).collect()
    }
}

impl MoveOrdering for WarnsdorffStable {
    fn candidates<R: Rng + ?Sized>(
        &self,
        from: Cell,
        state: &BoardState,
        _rng: &mut R,
    ) -> Candidates {
        ranked_by_degree(from, state)
            .into_iter()
            .map(|(_, cell)| cell)
            .collect()
    }
}

impl MoveOrdering for MoveSetOrder {
    fn candidates<R: Rng + ?Sized>(
        &self,
        from: Cell,
        state: &BoardState,
        _rng: &mut R,
    ) -> Candidates {
        unvisited_neighbours(from, state).collect()
    }
}

/// Configured ordering, dispatched without boxing.
#[derive(Debug, Clone, Copy)]
pub enum AnyOrdering {
    Warnsdorff(Warnsdorff),
    WarnsdorffStable(WarnsdorffStable),
    MoveSetOrder(MoveSetOrder),
}

impl From<MoveOrderingType> for AnyOrdering {
    fn from(kind: MoveOrderingType) -> Self {
        match kind {
            MoveOrderingType::Warnsdorff => AnyOrdering::Warnsdorff(Warnsdorff),
            MoveOrderingType::WarnsdorffStable => AnyOrdering::WarnsdorffStable(WarnsdorffStable),
            MoveOrderingType::MoveSetOrder => AnyOrdering::MoveSetOrder(MoveSetOrder),
        }
    }
}

impl MoveOrdering for AnyOrdering {
    fn candidates<R: Rng + ?Sized>(
        &self,
        from: Cell,
        state: &BoardState,
        rng: &mut R,
    ) -> Candidates {
        match self {
            AnyOrdering::Warnsdorff(o) => o.candidates(from, state, rng),
            AnyOrdering::WarnsdorffStable(o) => o.candidates(from, state, rng),
            AnyOrdering::MoveSetOrder(o) => o.candidates(from, state, rng),
        }
    }
}
