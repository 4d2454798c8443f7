use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;
use rustc_hash::FxHashMap;

use crate::core::{Job, PriorityKey};

// Insertion sequence number, unique within one line
type Ticket = u64;

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
struct Rank {
    key: PriorityKey,
    ticket: Ticket,
}

// KeyedPriorityQueue is a max-heap, so the smallest (key, ticket) must compare greatest
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.key, other.ticket).cmp(&(self.key, self.ticket))
    }
}

/// Waiting line ordered by ascending priority key, ties broken by insertion order.
#[derive(Debug)]
pub struct PriqLine {
    ranks: KeyedPriorityQueue<Ticket, Rank>,
    jobs: FxHashMap<Ticket, Job>,
    next_ticket: Ticket,
}

impl Default for PriqLine {
    fn default() -> Self {
        Self::new()
    }
}

impl PriqLine {
    pub fn new() -> Self {
        Self {
            ranks: KeyedPriorityQueue::new(),
            jobs: FxHashMap::default(),
            next_ticket: 0,
        }
    }

    pub fn push(&mut self, job: Job, key: PriorityKey) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        self.ranks.push(ticket, Rank { key, ticket });
        self.jobs.insert(ticket, job);
    }

    pub fn pop(&mut self) -> Option<Job> {
        let (ticket, _) = self.ranks.pop()?;
        let job = self.jobs.remove(&ticket);
        debug_assert!(job.is_some(), "Ticket {ticket} ranked but not stored");
        job
    }

    pub fn front(&self) -> Option<&Job> {
        let (ticket, _) = self.ranks.peek()?;
        self.jobs.get(ticket)
    }

    // Linear scan; only used for inspection
    pub fn back(&self) -> Option<&Job> {
        let (ticket, _) = self.ranks.iter().min_by_key(|(_, rank)| **rank)?;
        self.jobs.get(ticket)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.ranks.len(), self.jobs.len());
        self.ranks.len()
    }
}
