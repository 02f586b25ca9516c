//! The merge traversal state machine.
//!
//! Every outer step pops one polygon from the work queue and grows a chain
//! from it: merge with the neighbour the finder picked, then keep merging
//! across the far side of whatever was just absorbed, until a neighbour fails
//! the color or normal test. Merged neighbours leave the queue, so the queue
//! shrinks by at least one per chain and the loop terminates.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::{Result, TopologyError};
use crate::geometry::{Edge, Polygon};
use crate::operations::envelope::EnvelopeBuilder;
use crate::operations::next_cell::{NextCell, NextCellFinder};
use crate::params::DecimateParams;
use crate::topology::{NeighbourLookup, Neighbourhood, PolygonId, PolygonStore};

use super::result::MergeResult;
use super::matching::{
    distinct_corners, free_vertices, match_color, match_normals, opposite_edge,
    perpendicular_edges,
};

/// Where the traversal stands between steps.
#[derive(Debug)]
enum Chain {
    /// `current` has a candidate neighbour to try.
    Extending { current: PolygonId, next: NextCell },
    /// `current` cannot grow any further and is ready to emit.
    Blocked { current: PolygonId },
    /// Nothing left in the queue.
    QueueExhausted,
}

/// A merge that passed every check, computed before the index is touched.
struct MergePlan {
    merged: Polygon,
    shared: Edge,
    current_opposite: Edge,
    neighbour_opposite: Edge,
    current_perpendicular: Vec<Edge>,
    neighbour_perpendicular: Vec<Edge>,
}

/// Single-use traversal state. Owns the polygons, index and queue.
pub(super) struct Traversal<'a> {
    params: &'a DecimateParams,
    store: PolygonStore,
    index: Neighbourhood,
    queue: VecDeque<PolygonId>,
    output: Vec<Polygon>,
    original_polygons: usize,
    merges_performed: usize,
    invalid_neighbours: usize,
}

impl<'a> Traversal<'a> {
    pub(super) fn new(params: &'a DecimateParams, polygons: &[Polygon]) -> Result<Self> {
        let (store, ids) = PolygonStore::from_polygons(polygons);
        let index = Neighbourhood::build(&store, &ids)?;
        Ok(Self {
            params,
            store,
            index,
            queue: ids.into(),
            output: Vec::with_capacity(polygons.len()),
            original_polygons: polygons.len(),
            merges_performed: 0,
            invalid_neighbours: 0,
        })
    }

    /// Drives the state machine until the queue is exhausted.
    pub(super) fn run(mut self) -> Result<MergeResult> {
        let mut state = self.start_chain()?;
        loop {
            state = match state {
                Chain::Extending { current, next } => self.extend(current, next)?,
                Chain::Blocked { current } => {
                    self.emit(current)?;
                    self.start_chain()?
                }
                Chain::QueueExhausted => break,
            };
        }
        Ok(MergeResult {
            final_polygons: self.output.len(),
            polygons: self.output,
            original_polygons: self.original_polygons,
            merges_performed: self.merges_performed,
            invalid_neighbours: self.invalid_neighbours,
        })
    }

    /// Pops the next live polygon and asks the finder for its first candidate.
    fn start_chain(&mut self) -> Result<Chain> {
        while let Some(current) = self.queue.pop_front() {
            // Absorbed by an earlier chain.
            if !self.store.contains(current) {
                continue;
            }
            let found = self
                .params
                .next_cell_finder
                .find(&self.store, &self.index, current);
            return match found {
                Ok(Some(next)) => Ok(Chain::Extending { current, next }),
                Ok(None) => Ok(Chain::Blocked { current }),
                Err(TopologyError::InvalidTopology { incident }) => {
                    self.invalid_neighbours += 1;
                    warn!(incident, "non-manifold edge, polygon kept unmerged");
                    Ok(Chain::Blocked { current })
                }
                Err(e) => Err(e.into()),
            };
        }
        Ok(Chain::QueueExhausted)
    }

    /// Tries to merge `current` with `next.neighbour`.
    fn extend(&mut self, current: PolygonId, next: NextCell) -> Result<Chain> {
        let Some(plan) = self.plan(current, &next)? else {
            return Ok(Chain::Blocked { current });
        };
        let traversal_edge = plan.neighbour_opposite;
        let merged = self.apply(current, next.neighbour, plan)?;
        Ok(self.follow(merged, traversal_edge))
    }

    /// Checks mergeability and builds the merged polygon without mutating
    /// any state. `None` means the pair does not merge.
    fn plan(&self, current: PolygonId, next: &NextCell) -> Result<Option<MergePlan>> {
        let a = self.store.polygon(current)?;
        let b = self.store.polygon(next.neighbour)?;
        let shared = next.shared_edge;

        if !a.is_quad() || !b.is_quad() {
            return Ok(None);
        }
        if !match_color(a, b, &shared, self.params.neighbour_color_distance_threshold)
            || !match_normals(a, b, self.params.neighbour_angle_threshold)
        {
            return Ok(None);
        }
        let (Some(current_opposite), Some(neighbour_opposite)) =
            (opposite_edge(a, &shared), opposite_edge(b, &shared))
        else {
            return Ok(None);
        };
        // Coincident faces fold onto each other instead of extending.
        if current_opposite == neighbour_opposite {
            return Ok(None);
        }

        let corners: Vec<_> = free_vertices(a, &shared)
            .chain(free_vertices(b, &shared))
            .copied()
            .collect();
        if !distinct_corners(&corners) {
            return Ok(None);
        }
        let mut merged = self.params.polygon_builder.build(&corners, a)?;
        if self.params.normalize_normals {
            merged.flags.normalize_normals = true;
        }

        Ok(Some(MergePlan {
            merged,
            shared,
            current_perpendicular: perpendicular_edges(a, &shared, &current_opposite),
            neighbour_perpendicular: perpendicular_edges(b, &shared, &neighbour_opposite),
            current_opposite,
            neighbour_opposite,
        }))
    }

    /// Commits a merge: the merged polygon takes over both far sides, every
    /// other side of the two sources is released, and both sources retire.
    fn apply(&mut self, current: PolygonId, neighbour: PolygonId, plan: MergePlan) -> Result<PolygonId> {
        let merged = self.store.add(plan.merged);

        self.index.remove_all(&plan.shared);
        self.index.replace(plan.current_opposite, current, merged);
        self.index.replace(plan.neighbour_opposite, neighbour, merged);
        for edge in &plan.current_perpendicular {
            self.index.unregister(edge, current);
        }
        for edge in &plan.neighbour_perpendicular {
            self.index.unregister(edge, neighbour);
        }

        self.store.remove(current)?;
        self.store.remove(neighbour)?;
        self.merges_performed += 1;
        debug!(merges = self.merges_performed, "merged neighbouring polygons");
        Ok(merged)
    }

    /// Continues the chain across the neighbour's former far side.
    fn follow(&mut self, merged: PolygonId, edge: Edge) -> Chain {
        match self.index.neighbour(merged, &edge, NeighbourLookup::Strict) {
            Ok(Some(neighbour)) => Chain::Extending {
                current: merged,
                next: NextCell {
                    neighbour,
                    shared_edge: edge,
                },
            },
            Ok(None) | Err(TopologyError::PolygonNotFound) => Chain::Blocked { current: merged },
            Err(TopologyError::InvalidTopology { incident }) => {
                self.invalid_neighbours += 1;
                warn!(incident, "non-manifold edge, chain stopped");
                Chain::Blocked { current: merged }
            }
        }
    }

    /// Moves a finished polygon to the output and out of the index.
    fn emit(&mut self, current: PolygonId) -> Result<()> {
        let polygon = self.store.remove(current)?;
        self.index.retire(current, &polygon);
        self.output.push(polygon);
        Ok(())
    }
}
