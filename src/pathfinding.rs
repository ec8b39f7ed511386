//! Dijkstra's and A* search over `f64` edge costs
//!
//! The search is generic over any [`CostQueue`], so the same graph can be run
//! against a plain [`MinHeap`](crate::binary::MinHeap) or a
//! [`HotColdQueue`](crate::hot_cold::HotColdQueue). The hot/cold queue suits
//! this workload well: relaxed neighbours usually cost more than anything
//! already due, so they collect in the cold heap until the frontier catches up.
//!
//! # Design
//!
//! Only lightweight indices are stored in the queue. A fast hash map (using
//! FxHash) maps node states to their index, and a vector indexed by that value
//! holds costs and back-pointers.
//!
//! The queues have no `decrease_key`, so an improved path simply pushes a new
//! entry. Stale entries are skipped when popped because their node is already
//! closed. A closed node is reopened if a cheaper path reaches it later, which
//! keeps A* optimal under heuristics that are admissible but not consistent.
//!
//! Dijkstra is A* with h(n) = 0.
//!
//! # Example
//!
//! ```rust
//! use hotcold_heaps::pathfinding::{SearchNode, dijkstra};
//! use hotcold_heaps::hot_cold::HotColdQueue;
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     fn successors(&self) -> Vec<(Self, f64)> {
//!         vec![
//!             (GridPos { x: self.x + 1, y: self.y, ..self.clone() }, 1.0),
//!             (GridPos { x: self.x - 1, y: self.y, ..self.clone() }, 1.0),
//!             (GridPos { x: self.x, y: self.y + 1, ..self.clone() }, 1.0),
//!             (GridPos { x: self.x, y: self.y - 1, ..self.clone() }, 1.0),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//!
//! let (path, cost) = dijkstra::<_, HotColdQueue<_>>(&start).unwrap();
//! assert_eq!(cost, 4.0); // Manhattan distance
//! assert_eq!(path.len(), 5);
//! ```

use crate::traits::CostQueue;
use log::debug;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Index of a discovered node; this is the item type stored in the queue.
pub type NodeIndex = usize;

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate successors and to decide
/// whether it is a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// Returns all successor nodes along with the non-negative cost to reach them.
    fn successors(&self) -> Vec<(Self, f64)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
pub trait AStarNode: SearchNode {
    /// Estimated cost from this node to the nearest goal.
    ///
    /// For A* to return optimal paths this must never overestimate. An
    /// inconsistent heuristic is allowed; closed nodes are reopened when a
    /// cheaper path to them turns up.
    fn heuristic(&self) -> f64;
}

/// Metadata stored for each discovered node.
struct NodeEntry<N> {
    node: N,
    /// Best known cost from start (g-score)
    g_score: f64,
    came_from: Option<NodeIndex>,
    closed: bool,
}

/// Open/closed bookkeeping for one search.
struct SearchState<N: SearchNode> {
    nodes: Vec<NodeEntry<N>>,
    state_to_index: FxHashMap<N, NodeIndex>,
}

impl<N: SearchNode> SearchState<N> {
    fn new(start: &N) -> Self {
        let mut state_to_index = FxHashMap::default();
        state_to_index.insert(start.clone(), 0);
        SearchState {
            nodes: vec![NodeEntry {
                node: start.clone(),
                g_score: 0.0,
                came_from: None,
                closed: false,
            }],
            state_to_index,
        }
    }

    /// Records a path to `node` through `parent` if it improves on what is known.
    ///
    /// Returns the node's index when it needs to be (re)queued. A closed node
    /// reached more cheaply is reopened.
    fn relax(&mut self, node: N, g_score: f64, parent: NodeIndex) -> Option<NodeIndex> {
        if let Some(&index) = self.state_to_index.get(&node) {
            let entry = &mut self.nodes[index];
            if g_score >= entry.g_score {
                return None;
            }
            entry.g_score = g_score;
            entry.came_from = Some(parent);
            entry.closed = false;
            return Some(index);
        }

        let index = self.nodes.len();
        self.state_to_index.insert(node.clone(), index);
        self.nodes.push(NodeEntry {
            node,
            g_score,
            came_from: Some(parent),
            closed: false,
        });
        Some(index)
    }

    /// Walks back-pointers from `current` to the start.
    fn reconstruct_path(&self, mut current: NodeIndex) -> Vec<N> {
        let mut path = vec![self.nodes[current].node.clone()];
        while let Some(prev) = self.nodes[current].came_from {
            path.push(self.nodes[prev].node.clone());
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Limits applied to a search
#[derive(Debug, Clone, Copy, Default)]
struct SearchLimits {
    max_cost: Option<f64>,
    max_nodes: Option<usize>,
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns true.
///
/// # Returns
/// - `Some((path, cost))` if a path is found
/// - `None` if no path exists
pub fn dijkstra<N, Q>(start: &N) -> Option<(Vec<N>, f64)>
where
    N: SearchNode,
    Q: CostQueue<NodeIndex>,
{
    search_impl::<N, Q>(start, |_| 0.0, SearchLimits::default())
}

/// Runs A* search from the start node, guided by the node's `heuristic()`.
pub fn astar<N, Q>(start: &N) -> Option<(Vec<N>, f64)>
where
    N: AStarNode,
    Q: CostQueue<NodeIndex>,
{
    search_impl::<N, Q>(start, |n| n.heuristic(), SearchLimits::default())
}

fn search_impl<N, Q>(
    start: &N,
    heuristic: impl Fn(&N) -> f64,
    limits: SearchLimits,
) -> Option<(Vec<N>, f64)>
where
    N: SearchNode,
    Q: CostQueue<NodeIndex>,
{
    let mut queue = Q::new();
    let mut state = SearchState::new(start);
    let mut nodes_explored = 0usize;

    queue.push(heuristic(start), 0);

    while let Some((_, current_index)) = queue.pop() {
        if state.nodes[current_index].closed {
            continue;
        }

        if let Some(max) = limits.max_nodes {
            if nodes_explored >= max {
                debug!("search stopped after exploring {} nodes", nodes_explored);
                return None;
            }
        }
        nodes_explored += 1;

        let current_entry = &mut state.nodes[current_index];
        current_entry.closed = true;
        let current_g = current_entry.g_score;
        let current_node = current_entry.node.clone();

        if current_node.is_goal() {
            return Some((state.reconstruct_path(current_index), current_g));
        }

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;

            if limits.max_cost.is_some_and(|max| tentative_g > max) {
                continue;
            }

            let h = heuristic(&neighbor);
            if let Some(index) = state.relax(neighbor, tentative_g, current_index) {
                queue.push(tentative_g + h, index);
            }
        }
    }

    None
}

/// Builder for pathfinding queries with search limits.
///
/// The node type's `is_goal()` method determines when to stop.
pub struct PathFinderBuilder<N: SearchNode> {
    start: N,
    limits: SearchLimits,
}

impl<N: SearchNode> PathFinderBuilder<N> {
    /// Creates a new builder starting from the given node.
    pub fn new(start: N) -> Self {
        PathFinderBuilder {
            start,
            limits: SearchLimits::default(),
        }
    }

    /// Paths costing more than this are not explored.
    pub fn max_cost(mut self, cost: f64) -> Self {
        self.limits.max_cost = Some(cost);
        self
    }

    /// Gives up after expanding this many nodes.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.limits.max_nodes = Some(count);
        self
    }

    /// Runs Dijkstra's algorithm with the configured limits.
    pub fn dijkstra<Q>(self) -> Option<(Vec<N>, f64)>
    where
        Q: CostQueue<NodeIndex>,
    {
        search_impl::<N, Q>(&self.start, |_| 0.0, self.limits)
    }

    /// Runs A* search with the configured limits.
    pub fn astar<Q>(self) -> Option<(Vec<N>, f64)>
    where
        N: AStarNode,
        Q: CostQueue<NodeIndex>,
    {
        search_impl::<N, Q>(&self.start, |n| n.heuristic(), self.limits)
    }
}

/// Returns all nodes reachable from the start within a given cost budget,
/// in ascending order of cost.
pub fn reachable_within<N, Q>(start: &N, max_cost: f64) -> Vec<(N, f64)>
where
    N: SearchNode,
    Q: CostQueue<NodeIndex>,
{
    let mut queue = Q::new();
    let mut state = SearchState::new(start);
    let mut result = Vec::new();

    if max_cost < 0.0 {
        return result;
    }
    queue.push(0.0, 0);

    while let Some((_, current_index)) = queue.pop() {
        let current_entry = &mut state.nodes[current_index];
        if current_entry.closed {
            continue;
        }
        current_entry.closed = true;
        let current_g = current_entry.g_score;
        let current_node = current_entry.node.clone();

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;
            if tentative_g > max_cost {
                continue;
            }
            if let Some(index) = state.relax(neighbor, tentative_g, current_index) {
                queue.push(tentative_g, index);
            }
        }

        result.push((current_node, current_g));
    }

    result
}
