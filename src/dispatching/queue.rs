//! Ready queue: jobs that have arrived but are not yet dispatched.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{DispatchKey, DispatchingRule};
use crate::models::Job;

/// Min-priority queue of job indices ordered by a dispatching rule.
///
/// `pop` returns the job with the lowest [`DispatchKey`]. Because keys end
/// with the input index, extraction order is fully deterministic.
#[derive(Debug)]
pub struct ReadyQueue<'r> {
    rule: &'r dyn DispatchingRule,
    heap: BinaryHeap<Reverse<DispatchKey>>,
}

impl<'r> ReadyQueue<'r> {
    /// Creates an empty queue ordered by `rule`.
    pub fn new(rule: &'r dyn DispatchingRule) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
        }
    }

    /// Inserts the job at `index`.
    pub fn push(&mut self, index: usize, job: &Job) {
        self.heap.push(Reverse(self.rule.key(job, index)));
    }

    /// Removes and returns the index of the highest-priority job.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, _, index))| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    #[test]
    fn test_pop_order_sjf() {
        let jobs = [Job::new(0, 8), Job::new(1, 4), Job::new(2, 1), Job::new(0, 4)];
        let mut queue = ReadyQueue::new(&rules::Sjf);
        for (i, job) in jobs.iter().enumerate() {
            queue.push(i, job);
        }

        let order: Vec<usize> = std::iter::from_fn(|| queue.pop()).collect();
        // burst 1, then burst 4 (arrival 0 before arrival 1), then burst 8
        assert_eq!(order, vec![2, 3, 1, 0]);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_pop_order_fcfs() {
        let jobs = [Job::new(3, 1), Job::new(0, 9), Job::new(3, 2)];
        let mut queue = ReadyQueue::new(&rules::Fcfs);
        for (i, job) in jobs.iter().enumerate() {
            queue.push(i, job);
        }
        let order: Vec<usize> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = ReadyQueue::new(&rules::Sjf);
        assert_eq!(queue.pop(), None);
        queue.push(0, &Job::new(0, 1));
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), None);
    }
}
