//! Frontier structures shared by the search strategies: a binary heap for cost-ordered search
//! and plain FIFO/LIFO containers for breadth-first and depth-first search.
use grid_util::point::Point;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Ordering key of a frontier entry. Lower sorts first; `tie` orders equal keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority<K = i32> {
    pub key: K,
    pub tie: K,
}

impl<K: Zero> Priority<K> {
    pub fn new(key: K) -> Priority<K> {
        Priority {
            key,
            tie: K::zero(),
        }
    }
    pub fn with_tie(key: K, tie: K) -> Priority<K> {
        Priority { key, tie }
    }
}

struct SmallestCostHolder<K> {
    priority: Priority<K>,
    sequence: usize,
    point: Point,
}

impl<K: Ord> Eq for SmallestCostHolder<K> {}

impl<K: Ord> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest key, then smallest tie, then the earliest push.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority frontier. Entries with equal priority pop in insertion order, so a search over
/// it is deterministic.
pub struct PriorityFrontier<K = i32> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    sequence: usize,
}

impl<K: Ord> PriorityFrontier<K> {
    pub fn new() -> PriorityFrontier<K> {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
    pub fn push(&mut self, point: Point, priority: Priority<K>) {
        self.heap.push(SmallestCostHolder {
            priority,
            sequence: self.sequence,
            point,
        });
        self.sequence += 1;
    }
    pub fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|holder| holder.point)
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: Ord> Default for PriorityFrontier<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// The set of discovered but not yet finalized points of one search. Stale entries are allowed;
/// the search skips points it already finalized.
pub enum Frontier {
    Priority(PriorityFrontier<i32>),
    Queue(VecDeque<Point>),
    Stack(Vec<Point>),
}

impl Frontier {
    pub fn priority() -> Frontier {
        Frontier::Priority(PriorityFrontier::new())
    }
    pub fn queue() -> Frontier {
        Frontier::Queue(VecDeque::new())
    }
    pub fn stack() -> Frontier {
        Frontier::Stack(Vec::new())
    }

    /// Inserts a point. The priority is ignored by the queue and the stack.
    pub fn push(&mut self, point: Point, priority: Priority) {
        match self {
            Frontier::Priority(heap) => heap.push(point, priority),
            Frontier::Queue(queue) => queue.push_back(point),
            Frontier::Stack(stack) => stack.push(point),
        }
    }

    pub fn pop(&mut self) -> Option<Point> {
        match self {
            Frontier::Priority(heap) => heap.pop(),
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Stack(stack) => stack.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Priority(heap) => heap.len(),
            Frontier::Queue(queue) => queue.len(),
            Frontier::Stack(stack) => stack.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<Point> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn priority_pops_smallest_key_then_tie_then_insertion() {
        let mut frontier = Frontier::priority();
        frontier.push(Point::new(0, 0), Priority::with_tie(3, 1));
        frontier.push(Point::new(1, 0), Priority::with_tie(2, 5));
        frontier.push(Point::new(2, 0), Priority::with_tie(2, 4));
        frontier.push(Point::new(3, 0), Priority::new(3));
        frontier.push(Point::new(4, 0), Priority::with_tie(2, 4));
        assert_eq!(frontier.len(), 5);
        assert_eq!(
            drain(&mut frontier),
            vec![
                Point::new(2, 0),
                Point::new(4, 0),
                Point::new(1, 0),
                Point::new(3, 0),
                Point::new(0, 0)
            ]
        );
        assert!(frontier.is_empty());
    }

    #[test]
    fn queue_is_fifo_and_stack_is_lifo() {
        let points = [Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)];
        let mut queue = Frontier::queue();
        let mut stack = Frontier::stack();
        for (i, p) in points.iter().enumerate() {
            // Priorities are ignored by both.
            queue.push(*p, Priority::new(-(i as i32)));
            stack.push(*p, Priority::new(i as i32));
        }
        assert_eq!(drain(&mut queue), points.to_vec());
        let mut reversed = points.to_vec();
        reversed.reverse();
        assert_eq!(drain(&mut stack), reversed);
    }
}
