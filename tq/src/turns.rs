//! Round-robin "taking turns" queue
//!
//! People are served from the front and then rejoin at the back until their
//! turns run out. A person added with 0 or fewer turns rejoins forever.

use tracing::debug;

use crate::error::EmptyQueueError;
use crate::fifo::FifoQueue;
use crate::person::Person;

#[derive(Debug, Clone, Default)]
pub struct TakingTurnsQueue {
    people: FifoQueue<Person>,
}

impl TakingTurnsQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Add a person to the back of the queue
    pub fn add_person(&mut self, name: impl Into<String>, turns: i32) {
        let person = Person::new(name, turns);
        debug!(name = %person.name, turns, "TakingTurnsQueue::add_person: called");
        self.people.enqueue(person);
    }

    /// Serve the person at the front and rotate them to the back if they have turns left.
    ///
    /// The returned person carries the turn count after this turn was spent.
    pub fn get_next_person(&mut self) -> Result<Person, EmptyQueueError> {
        let person = self
            .people
            .dequeue()
            .map_err(|_| EmptyQueueError::no_one_in_queue())?;

        if person.has_infinite_turns() {
            debug!(name = %person.name, "TakingTurnsQueue::get_next_person: infinite turns, requeueing");
            self.people.enqueue(person.clone());
            return Ok(person);
        }

        let served = Person {
            turns: person.turns - 1,
            ..person
        };
        if served.turns > 0 {
            debug!(name = %served.name, turns = served.turns, "TakingTurnsQueue::get_next_person: requeueing");
            self.people.enqueue(served.clone());
        } else {
            debug!(name = %served.name, "TakingTurnsQueue::get_next_person: out of turns, retiring");
        }

        Ok(served)
    }
}

impl std::fmt::Display for TakingTurnsQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.people, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(served: &[Person]) -> Vec<&str> {
        served.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_finite_turns_rotate_then_retire() {
        let mut queue = TakingTurnsQueue::new();
        queue.add_person("Bob", 2);
        queue.add_person("Tim", 5);
        queue.add_person("Sue", 3);

        let mut served = Vec::new();
        while !queue.is_empty() {
            served.push(queue.get_next_person().unwrap());
        }

        assert_eq!(
            names(&served),
            vec!["Bob", "Tim", "Sue", "Bob", "Tim", "Sue", "Tim", "Sue", "Tim", "Tim"]
        );
    }

    #[test]
    fn test_single_person_two_turns() {
        let mut queue = TakingTurnsQueue::new();
        queue.add_person("A", 2);

        let first = queue.get_next_person().unwrap();
        assert_eq!(first, Person::new("A", 1));
        assert_eq!(queue.len(), 1);

        let second = queue.get_next_person().unwrap();
        assert_eq!(second, Person::new("A", 0));
        assert_eq!(queue.len(), 0);

        let err = queue.get_next_person().unwrap_err();
        assert_eq!(err.message(), "No one in the queue.");
    }

    #[test]
    fn test_infinite_turns_never_retire() {
        let mut queue = TakingTurnsQueue::new();
        queue.add_person("B", 0);
        queue.add_person("C", 1);

        assert_eq!(queue.get_next_person().unwrap(), Person::new("B", 0));
        assert_eq!(queue.get_next_person().unwrap(), Person::new("C", 0));
        for _ in 0..5 {
            assert_eq!(queue.get_next_person().unwrap(), Person::new("B", 0));
        }
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_negative_turns_are_infinite() {
        let mut queue = TakingTurnsQueue::new();
        queue.add_person("Neg", -4);

        for _ in 0..3 {
            assert_eq!(queue.get_next_person().unwrap().turns, -4);
        }
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_add_during_rotation() {
        let mut queue = TakingTurnsQueue::new();
        queue.add_person("Bob", 2);
        queue.add_person("Tim", 5);

        assert_eq!(queue.get_next_person().unwrap().name, "Bob");
        queue.add_person("George", 3);

        let mut served = Vec::new();
        while !queue.is_empty() {
            served.push(queue.get_next_person().unwrap());
        }
        assert_eq!(
            names(&served),
            vec!["Tim", "Bob", "George", "Tim", "George", "Tim", "George", "Tim", "Tim"]
        );
    }

    #[test]
    fn test_empty_queue_error() {
        let mut queue = TakingTurnsQueue::new();
        let err = queue.get_next_person().unwrap_err();
        assert_eq!(err.to_string(), "No one in the queue.");
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_display_delegates() {
        let mut queue = TakingTurnsQueue::new();
        queue.add_person("Bob", 2);
        queue.add_person("Sue", 0);
        assert_eq!(queue.to_string(), "[(Bob:2), (Sue:Forever)]");

        queue.get_next_person().unwrap();
        assert_eq!(queue.to_string(), "[(Sue:Forever), (Bob:1)]");
    }
}
