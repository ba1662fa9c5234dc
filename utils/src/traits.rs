use std::hash::Hash;

/// Neighbour generator for a search graph.
///
/// Implementations carry the puzzle's legality rules (walls, height steps,
/// turning) and must yield successors in a stable order so that repeated
/// searches over the same grid produce identical results.
pub trait Pather {
    type State: Copy + Eq + Hash;

    /// Append the successors of `state` into `buf`. The caller clears `buf`.
    fn neighbors(&self, state: Self::State, buf: &mut Vec<Self::State>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to the adjacent `to`.
    fn cost(&self, from: Self::State, to: Self::State) -> u64;
}

/// Pather with an admissible estimate of the remaining cost to the goal.
pub trait AstarPather: WeightedPather {
    /// Must never overestimate the true remaining cost.
    fn estimate(&self, state: Self::State) -> u64;
}
