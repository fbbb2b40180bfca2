//! Per-course FIFO waitlists.

use std::collections::{BTreeMap, VecDeque};

use rollcall_campus::{CourseId, StudentId};

/// One FIFO queue of waiting students per course.
///
/// Queues are created lazily on the first join and removed the moment they
/// empty, so "a queue exists" and "someone is waiting" are the same fact:
/// no query can observe an empty queue as present.
#[derive(Debug, Clone, Default)]
pub struct WaitlistBoard {
    queues: BTreeMap<CourseId, VecDeque<StudentId>>,
}

impl WaitlistBoard {
    /// Add a student to the tail of a course's waitlist.
    ///
    /// Returns false without changing anything if the student is already
    /// waiting for that course.
    pub fn join(&mut self, course_id: CourseId, student_id: StudentId) -> bool {
        let queue = self.queues.entry(course_id).or_default();
        if queue.contains(&student_id) {
            return false;
        }
        queue.push_back(student_id);
        true
    }

    /// Pop the next student in line, or `None` when nobody is waiting.
    pub fn admit_next(&mut self, course_id: CourseId) -> Option<StudentId> {
        let queue = self.queues.get_mut(&course_id)?;
        let student_id = queue.pop_front();
        if queue.is_empty() {
            self.queues.remove(&course_id);
        }
        student_id
    }

    /// Whether a student is anywhere in a course's queue.
    pub fn contains(&self, course_id: CourseId, student_id: StudentId) -> bool {
        self.queues
            .get(&course_id)
            .is_some_and(|queue| queue.contains(&student_id))
    }

    /// Remove a student from a course's queue, keeping everyone else in
    /// order. Returns whether a removal occurred.
    pub fn leave(&mut self, course_id: CourseId, student_id: StudentId) -> bool {
        let Some(queue) = self.queues.get_mut(&course_id) else {
            return false;
        };
        let Some(index) = queue.iter().position(|&waiting| waiting == student_id) else {
            return false;
        };
        queue.remove(index);
        if queue.is_empty() {
            self.queues.remove(&course_id);
        }
        true
    }

    /// Snapshot of a course's queue in FIFO order (index 0 is next up).
    pub fn waiting(&self, course_id: CourseId) -> Vec<StudentId> {
        self.queues
            .get(&course_id)
            .map(|queue| queue.iter().copied().collect())
            .unwrap_or_default()
    }

    /// 1-based position of a student in line, or `None` when absent.
    pub fn position(&self, course_id: CourseId, student_id: StudentId) -> Option<usize> {
        self.queues
            .get(&course_id)?
            .iter()
            .position(|&waiting| waiting == student_id)
            .map(|index| index + 1)
    }

    /// Whether nobody is waiting for the course.
    pub fn is_empty(&self, course_id: CourseId) -> bool {
        !self.queues.contains_key(&course_id)
    }

    /// Number of students waiting for the course.
    pub fn len(&self, course_id: CourseId) -> usize {
        self.queues.get(&course_id).map_or(0, VecDeque::len)
    }

    /// Course ids that currently have at least one waiter, in id order.
    pub fn courses_with_waiters(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.queues.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_in_join_order() {
        let mut board = WaitlistBoard::default();
        assert!(board.join(101, 1));
        assert!(board.join(101, 2));
        assert!(board.join(101, 3));

        assert_eq!(board.admit_next(101), Some(1));
        assert_eq!(board.admit_next(101), Some(2));
        assert_eq!(board.admit_next(101), Some(3));
        assert_eq!(board.admit_next(101), None);
    }

    #[test]
    fn rejects_duplicate_waiters() {
        let mut board = WaitlistBoard::default();
        assert!(board.join(101, 1));
        assert!(!board.join(101, 1));
        assert_eq!(board.len(101), 1);
        assert!(board.contains(101, 1));
        assert!(!board.contains(101, 2));

        // Same student may wait on a different course.
        assert!(board.join(201, 1));
        assert!(board.contains(201, 1));
    }

    #[test]
    fn position_counts_from_one() {
        let mut board = WaitlistBoard::default();
        board.join(101, 5);
        board.join(101, 6);

        assert_eq!(board.position(101, 5), Some(1));
        assert_eq!(board.position(101, 6), Some(2));
        assert_eq!(board.position(101, 7), None);
        assert_eq!(board.position(999, 5), None);
    }

    #[test]
    fn leave_preserves_relative_order() {
        let mut board = WaitlistBoard::default();
        for student_id in [1, 2, 3] {
            board.join(101, student_id);
        }

        assert!(board.leave(101, 2));
        assert!(!board.leave(101, 2));
        assert_eq!(board.waiting(101), vec![1, 3]);
        assert_eq!(board.position(101, 3), Some(2));
    }

    #[test]
    fn empty_queue_entry_is_removed() {
        let mut board = WaitlistBoard::default();
        board.join(101, 1);
        assert!(!board.is_empty(101));

        assert_eq!(board.admit_next(101), Some(1));
        assert!(board.is_empty(101));
        assert_eq!(board.len(101), 0);
        assert_eq!(board.courses_with_waiters().count(), 0);

        board.join(101, 2);
        assert!(board.leave(101, 2));
        assert!(board.is_empty(101));
        assert_eq!(board.admit_next(101), None);
    }

    #[test]
    fn waiting_snapshot_does_not_mutate() {
        let mut board = WaitlistBoard::default();
        board.join(101, 1);
        board.join(101, 2);

        assert_eq!(board.waiting(101), vec![1, 2]);
        assert_eq!(board.waiting(101), vec![1, 2]);
        assert_eq!(board.waiting(999), Vec::<StudentId>::new());
        assert_eq!(board.len(101), 2);
    }
}
