use std::collections::{HashSet, VecDeque};

use crate::api::Dev;

/// The ordered candidate queue for one screen session. The head is the only
/// dev the user can act on; judging pops exactly the head. Ids never repeat:
/// ingestion drops anything already queued or already judged this session,
/// so a feed that re-sends a judged dev can't resurrect it.
#[derive(Debug, Default)]
pub struct SwipeQueue {
    devs: VecDeque<Dev>,
    judged: HashSet<String>,
}

impl SwipeQueue {
    pub fn new() -> SwipeQueue {
        SwipeQueue::default()
    }

    /// Appends devs in server order, skipping duplicates.
    pub fn ingest(&mut self, devs: Vec<Dev>) {
        for dev in devs {
            if self.judged.contains(&dev.id) || self.devs.iter().any(|d| d.id == dev.id) {
                continue;
            }
            self.devs.push_back(dev);
        }
    }

    pub fn head(&self) -> Option<&Dev> {
        self.devs.front()
    }

    /// Pops the head and marks it judged. `None` on an empty queue.
    pub fn advance(&mut self) -> Option<Dev> {
        let dev = self.devs.pop_front()?;
        self.judged.insert(dev.id.clone());
        Some(dev)
    }

    pub fn len(&self) -> usize {
        self.devs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev(id: &str) -> Dev {
        Dev {
            id: id.to_owned(),
            name: id.to_uppercase(),
            bio: String::new(),
            avatar: format!("https://github.com/{id}.png"),
        }
    }

    #[test]
    fn advance_pops_exactly_the_head() {
        let mut queue = SwipeQueue::new();
        queue.ingest(vec![dev("p1"), dev("p2")]);

        assert_eq!(queue.head().map(|d| d.id.as_str()), Some("p1"));
        assert_eq!(queue.advance().map(|d| d.id), Some("p1".to_owned()));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.head().map(|d| d.id.as_str()), Some("p2"));
    }

    #[test]
    fn advance_on_empty_is_none() {
        let mut queue = SwipeQueue::new();
        assert!(queue.advance().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn ingest_keeps_server_order() {
        let mut queue = SwipeQueue::new();
        queue.ingest(vec![dev("c"), dev("a"), dev("b")]);

        let order: Vec<String> = std::iter::from_fn(|| queue.advance().map(|d| d.id)).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn ingest_drops_duplicate_ids() {
        let mut queue = SwipeQueue::new();
        queue.ingest(vec![dev("p1"), dev("p1"), dev("p2")]);
        assert_eq!(queue.len(), 2);

        queue.ingest(vec![dev("p2"), dev("p3")]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn ingest_drops_already_judged_ids() {
        let mut queue = SwipeQueue::new();
        queue.ingest(vec![dev("p1")]);
        queue.advance();

        queue.ingest(vec![dev("p1"), dev("p2")]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.head().map(|d| d.id.as_str()), Some("p2"));
    }
}
