//! Capacity policy for [`List`](super::List).
//!
//! Both functions are pure so the amortization rules can be tested apart
//! from the code that moves elements around.

/// Smallest capacity the policy ever hands out.
pub const MIN_CAPACITY: usize = 2;

/// Capacity to reallocate to when at least `min_increment` more slots are needed.
///
/// Grows by half the current capacity, or by `min_increment` when that is
/// larger. The result is always `>= capacity + min_increment` and never zero.
pub fn grow(capacity: usize, min_increment: usize) -> usize {
    let by_half = capacity.saturating_add(capacity / 2);
    let by_request = capacity
        .checked_add(min_increment)
        .expect("capacity overflow");
    match by_half.max(by_request) {
        0 => MIN_CAPACITY,
        new_capacity => new_capacity,
    }
}

/// Capacity to shrink to before the list loses an element, if any.
///
/// The candidate is two thirds of `capacity`. Returns `None` when the
/// candidate would not leave room for the `len` live elements.
pub fn shrink(capacity: usize, len: usize) -> Option<usize> {
    let candidate = capacity.saturating_mul(2) / 3;
    if candidate <= len {
        None
    } else {
        Some(candidate.max(MIN_CAPACITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_from_empty() {
        assert_eq!(grow(0, 0), 2);
        assert_eq!(grow(0, 1), 1);
        assert_eq!(grow(0, 5), 5);
    }

    #[test]
    fn grow_by_half() {
        assert_eq!(grow(2, 0), 3);
        assert_eq!(grow(3, 1), 4);
        assert_eq!(grow(4, 1), 6);
        assert_eq!(grow(10, 1), 15);
        assert_eq!(grow(100, 0), 150);
    }

    #[test]
    fn grow_by_request_when_larger() {
        assert_eq!(grow(4, 10), 14);
        assert_eq!(grow(10, 6), 16);
        assert_eq!(grow(10, 5), 15);
    }

    #[test]
    fn grow_always_makes_room() {
        for capacity in 0..64 {
            for increment in 0..16 {
                let new_capacity = grow(capacity, increment);
                assert!(new_capacity >= capacity + increment);
                assert!(new_capacity >= 1);
            }
        }
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn grow_overflow() {
        grow(usize::MAX, 1);
    }

    #[test]
    fn shrink_noop_when_full_enough() {
        assert_eq!(shrink(0, 0), None);
        assert_eq!(shrink(3, 2), None);
        assert_eq!(shrink(6, 4), None);
        assert_eq!(shrink(6, 5), None);
    }

    #[test]
    fn shrink_to_two_thirds() {
        assert_eq!(shrink(6, 3), Some(4));
        assert_eq!(shrink(9, 0), Some(6));
        assert_eq!(shrink(150, 10), Some(100));
    }

    #[test]
    fn shrink_clamps_to_minimum() {
        // 2 * 2 / 3 == 1, which is above len but below the floor.
        assert_eq!(shrink(2, 0), Some(2));
        assert_eq!(shrink(3, 1), Some(2));
        assert_eq!(shrink(4, 1), Some(2));
    }

    #[test]
    fn shrink_never_evicts() {
        for capacity in 0..64 {
            for len in 0..=capacity {
                if let Some(new_capacity) = shrink(capacity, len) {
                    assert!(new_capacity > len);
                    assert!(new_capacity >= MIN_CAPACITY);
                }
            }
        }
    }
}
