//! Slide navigation: direction of a next/prev control and the circular index step.

/// Class name carried by the "next" control. Every other control steps backwards.
pub const NEXT_CLASS: &str = "next";
pub const PREV_CLASS: &str = "prev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn from_class_name(class_name: &str) -> Self {
        if class_name == NEXT_CLASS {
            Direction::Next
        } else {
            Direction::Prev
        }
    }

    pub fn offset(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

/// Folds an index that stepped one past either end back into `[0, len)`.
///
/// Only single-step overflow is handled: `len` maps to `0` and any negative
/// index maps to `len - 1`. Callers step by `Direction::offset` so that is
/// always enough. `len` must be non-zero.
pub fn wrap_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len - 1
    } else if index as usize >= len {
        0
    } else {
        index as usize
    }
}

/// Index reached from `current` after one step in `direction`.
pub fn step(current: usize, direction: Direction, len: usize) -> usize {
    wrap_index(current as isize + direction.offset(), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(wrap_index(3, 3), 0);
        assert_eq!(wrap_index(-1, 3), 2);
        for k in 0..3 {
            assert_eq!(wrap_index(k, 3), k as usize);
        }
    }

    #[test]
    fn single_photo_always_wraps_to_itself() {
        assert_eq!(step(0, Direction::Next, 1), 0);
        assert_eq!(step(0, Direction::Prev, 1), 0);
    }

    #[test]
    fn repeated_next_cycles_forward() {
        let mut idx = 0;
        let mut visited = vec![idx];
        for _ in 0..5 {
            idx = step(idx, Direction::Next, 3);
            visited.push(idx);
        }
        assert_eq!(visited, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn repeated_prev_cycles_backward() {
        let mut idx = 0;
        let mut visited = vec![idx];
        for _ in 0..5 {
            idx = step(idx, Direction::Prev, 3);
            visited.push(idx);
        }
        assert_eq!(visited, vec![0, 2, 1, 0, 2, 1]);
    }

    #[test]
    fn only_the_next_class_steps_forward() {
        assert_eq!(Direction::from_class_name("next"), Direction::Next);
        assert_eq!(Direction::from_class_name("prev"), Direction::Prev);
        assert_eq!(Direction::from_class_name("next active"), Direction::Prev);
        assert_eq!(Direction::from_class_name(""), Direction::Prev);
    }
}
