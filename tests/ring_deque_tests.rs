use ringdeque::{DequeError, RingDeque, MIN_CAPACITY};

#[test]
fn test_ring_deque_scenario() {
    let mut dq = RingDeque::new();
    dq.push_back(1);
    dq.push_back(2);
    dq.push_back(3);
    assert_eq!(dq.len(), 3);
    assert_eq!(dq.try_front(), Ok(&1));
    assert_eq!(dq.try_back(), Ok(&3));
    assert_eq!(dq.at(1), Ok(&2));

    dq.rotate(1);
    assert_eq!(dq.try_front(), Ok(&2));
    assert_eq!(dq.try_back(), Ok(&1));
    assert_eq!(dq.at(1), Ok(&3));

    assert_eq!(dq.try_pop_front(), Ok(2));
    assert_eq!(dq.len(), 2);
}

#[test]
fn test_empty_access_fails() {
    let mut dq: RingDeque<String> = RingDeque::new();
    assert_eq!(dq.try_pop_front(), Err(DequeError::Empty));
    assert_eq!(dq.try_pop_back(), Err(DequeError::Empty));
    assert_eq!(dq.try_front(), Err(DequeError::Empty));
    assert_eq!(dq.try_back(), Err(DequeError::Empty));
    assert_eq!(dq.at(0), Err(DequeError::IndexOutOfRange { index: 0, len: 0 }));
    assert!(dq.pop_front().is_none());
    assert!(dq.pop_back().is_none());
    assert!(dq.is_empty());
}

#[test]
fn test_failed_calls_leave_state_unchanged() {
    let mut dq: RingDeque<i32> = (0..20).collect();
    let before = dq.clone();
    let cap = dq.capacity();

    assert_eq!(dq.at(20), Err(DequeError::IndexOutOfRange { index: 20, len: 20 }));
    assert!(dq.get(usize::MAX).is_none());
    assert_eq!(dq, before);
    assert_eq!(dq.capacity(), cap);

    dq.clear();
    assert_eq!(dq.try_pop_back(), Err(DequeError::Empty));
    assert_eq!(dq.capacity(), cap);
}

#[test]
fn test_fifo_order() {
    let mut dq = RingDeque::new();
    for i in 0..1000 {
        dq.push_back(i);
    }
    let popped: Vec<_> = std::iter::from_fn(|| dq.pop_front()).collect();
    assert_eq!(popped, (0..1000).collect::<Vec<_>>());
    assert_eq!(dq.capacity(), MIN_CAPACITY);
}

#[test]
fn test_lifo_order() {
    let mut dq = RingDeque::new();
    for i in 0..1000 {
        dq.push_back(i);
    }
    let popped: Vec<_> = std::iter::from_fn(|| dq.pop_back()).collect();
    assert_eq!(popped, (0..1000).rev().collect::<Vec<_>>());
}

#[test]
fn test_push_front_pop_back_is_fifo() {
    let mut dq = RingDeque::new();
    for i in 0..100 {
        dq.push_front(i);
    }
    for i in 0..100 {
        assert_eq!(dq.pop_back(), Some(i));
    }
}

#[test]
fn test_capacity_stays_power_of_two() {
    let mut dq = RingDeque::new();
    for round in 0..5usize {
        for i in 0..(100 * (round + 1)) {
            if i % 3 == 0 {
                dq.push_front(i);
            } else {
                dq.push_back(i);
            }
            assert!(dq.capacity().is_power_of_two());
            assert!(dq.len() <= dq.capacity());
        }
        while dq.len() > round {
            if dq.len() % 2 == 0 {
                dq.pop_front();
            } else {
                dq.pop_back();
            }
            assert!(dq.capacity().is_power_of_two());
            assert!(dq.capacity() >= dq.min_capacity());
        }
    }
}

#[test]
fn test_min_capacity_boundary() {
    let mut dq = RingDeque::new();
    for i in 0..MIN_CAPACITY {
        dq.push_back(i);
    }
    assert_eq!(dq.capacity(), MIN_CAPACITY);
    for _ in 0..MIN_CAPACITY {
        dq.pop_front();
        assert_eq!(dq.capacity(), MIN_CAPACITY);
    }
}

#[test]
fn test_overflow_doubles_capacity() {
    let mut dq = RingDeque::new();
    let mut expected = MIN_CAPACITY;
    for i in 0..1024 {
        let before = dq.capacity();
        dq.push_back(i);
        if before != 0 && before == i {
            expected = before * 2;
            assert_eq!(dq.capacity(), expected);
        }
    }
    assert_eq!(dq.capacity(), expected);
    assert_eq!(dq.capacity(), 1024);
}

#[test]
fn test_clear_then_refill_keeps_capacity() {
    let mut dq = RingDeque::new();
    for i in 0..100 {
        dq.push_back(i);
    }
    let cap = dq.capacity();
    for _ in 0..3 {
        dq.clear();
        assert_eq!(dq.len(), 0);
        for i in 0..cap {
            dq.push_back(i);
        }
        assert_eq!(dq.capacity(), cap);
    }
}

#[test]
fn test_rotation_round_trip() {
    let mut dq = RingDeque::new();
    for i in 0..10 {
        dq.push_back(i);
    }
    dq.push_front(-1);
    let original = dq.clone();
    for n in -25isize..25 {
        dq.rotate(n);
        dq.rotate(-n);
        assert_eq!(dq, original, "rotate({n}) did not round-trip");
    }
}

#[test]
fn test_rotate_left_right() {
    let mut dq: RingDeque<i32> = (0..5).collect();

    dq.rotate_left(2);
    let result: Vec<_> = (0..dq.len()).map(|i| dq[i]).collect();
    assert_eq!(result, vec![2, 3, 4, 0, 1]);

    dq.rotate_right(1);
    let result: Vec<_> = (0..dq.len()).map(|i| dq[i]).collect();
    assert_eq!(result, vec![1, 2, 3, 4, 0]);

    dq.rotate_left(4);
    let result: Vec<_> = (0..dq.len()).map(|i| dq[i]).collect();
    assert_eq!(result, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_circular_log_buffer() {
    const WINDOW: usize = 8;
    let mut log = RingDeque::new();
    for i in 0..100 {
        if log.len() == WINDOW {
            log.pop_front();
        }
        log.push_back(format!("entry {i}"));
    }
    assert_eq!(log.len(), WINDOW);
    for i in 0..WINDOW {
        assert_eq!(log.at(i).map(String::as_str), Ok(format!("entry {}", 92 + i).as_str()));
    }
    assert_eq!(log.capacity(), MIN_CAPACITY);
}

#[test]
fn test_extend_and_debug() {
    let mut dq: RingDeque<u8> = RingDeque::new();
    dq.extend([1, 2]);
    dq.push_front(0);
    assert_eq!(format!("{dq:?}"), "[0, 1, 2]");
}

#[test]
fn test_error_propagates_through_anyhow() {
    fn newest(log: &RingDeque<u32>) -> anyhow::Result<u32> {
        let value = log.try_back()?;
        Ok(*value)
    }

    let mut log = RingDeque::new();
    assert_eq!(newest(&log).unwrap_err().to_string(), "deque is empty");
    log.push_back(4);
    assert_eq!(newest(&log).unwrap(), 4);
}
