// Tests for DigitBuffer, included by digitbuffer.rs

/// buffer holding 0, 1, 2, ... n-1
fn counting_buffer(n: usize) -> DigitBuffer {
    (0..n as u32).collect()
}

#[test]
fn test_new_is_empty_inline() {
    let buf = DigitBuffer::new();
    assert!(buf.is_empty());
    assert!(buf.is_inline());
    assert_eq!(buf.capacity(), INLINE_WORDS);
    assert_eq!(buf.last(), None);
}

#[test]
fn test_with_len_zero_filled() {
    for n in [0, 1, INLINE_WORDS, INLINE_WORDS + 1, 50] {
        let buf = DigitBuffer::with_len(n);
        assert_eq!(buf.len(), n);
        assert!(buf.iter().all(|&w| w == 0));
        assert_eq!(buf.is_inline(), n <= INLINE_WORDS);
    }
}

mod grown_capacity {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $cap:expr => $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(grown_capacity($cap), $expected);
            }
        };
    }

    impl_case!(case_0: 0 => INLINE_WORDS);
    impl_case!(case_4: 4 => core::cmp::max(INLINE_WORDS, 6));
    impl_case!(case_6: 6 => core::cmp::max(INLINE_WORDS, 9));
    impl_case!(case_9: 9 => core::cmp::max(INLINE_WORDS, 14));
    impl_case!(case_101: 101 => 152);
    impl_case!(case_1000: 1000 => 1500);
}

#[test]
fn test_push_moves_to_heap_past_inline_capacity() {
    let mut buf = DigitBuffer::new();
    for i in 0..INLINE_WORDS as u32 {
        buf.push(i);
    }
    assert!(buf.is_inline());

    buf.push(99);
    assert!(!buf.is_inline());
    assert_eq!(buf.capacity(), grown_capacity(INLINE_WORDS));
    assert_eq!(buf.len(), INLINE_WORDS + 1);
    assert_eq!(buf.last(), Some(99));
    assert_eq!(&buf.as_slice()[..INLINE_WORDS], counting_buffer(INLINE_WORDS).as_slice());
}

#[test]
fn test_push_many_grows_geometrically() {
    let mut buf = DigitBuffer::new();
    let mut reallocations = 0;
    let mut capacity = buf.capacity();
    for i in 0..10_000u32 {
        buf.push(i);
        if buf.capacity() != capacity {
            assert_eq!(buf.capacity(), grown_capacity(capacity));
            capacity = buf.capacity();
            reallocations += 1;
        }
    }
    assert_eq!(buf, counting_buffer(10_000));
    assert!(reallocations < 25, "{}", reallocations);
}

#[test]
fn test_pop_and_last() {
    let mut buf = counting_buffer(7);
    assert_eq!(buf.last(), Some(6));
    assert_eq!(buf.pop(), Some(6));
    assert_eq!(buf.pop(), Some(5));
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.last(), Some(4));

    let mut empty = DigitBuffer::new();
    assert_eq!(empty.pop(), None);
}

#[test]
fn test_clone_of_heap_buffer_shares_allocation() {
    let a = counting_buffer(20);
    assert!(!a.is_shared());

    let b = a.clone();
    assert!(a.is_shared());
    assert!(b.is_shared());
    assert_eq!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
    assert_eq!(a, b);

    drop(b);
    assert!(!a.is_shared());
}

#[test]
fn test_clone_of_inline_buffer_is_independent() {
    let a = counting_buffer(INLINE_WORDS);
    let mut b = a.clone();
    assert!(!a.is_shared());

    b[0] = 100;
    assert_eq!(a[0], 0);
    assert_eq!(b[0], 100);
}

#[test]
fn test_index_write_copies_shared_allocation() {
    let a = counting_buffer(20);
    let mut b = a.clone();

    b[10] = 0xdeadbeef;

    assert!(!a.is_shared());
    assert!(!b.is_shared());
    assert_eq!(a[10], 10);
    assert_eq!(b[10], 0xdeadbeef);
    assert_eq!(a, counting_buffer(20));
    assert_ne!(a, b);
}

#[test]
fn test_index_write_on_exclusive_buffer_does_not_copy() {
    let mut a = counting_buffer(20);
    let ptr = a.as_slice().as_ptr();
    a[3] = 42;
    assert_eq!(a.as_slice().as_ptr(), ptr);
}

#[test]
fn test_ensure_exclusive() {
    let a = counting_buffer(12);
    let mut b = a.clone();
    assert!(b.is_shared());

    b.ensure_exclusive();
    assert!(!b.is_shared());
    assert!(!a.is_shared());
    assert_ne!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
    assert_eq!(a, b);

    // already exclusive: no further copy
    let ptr = b.as_slice().as_ptr();
    b.ensure_exclusive();
    assert_eq!(b.as_slice().as_ptr(), ptr);
}

#[test]
fn test_push_onto_shared_buffer_leaves_other_untouched() {
    let mut a = counting_buffer(12);
    a.pop();
    assert!(a.capacity() > a.len());

    let mut b = a.clone();
    b.push(1000);
    b.push(1001);

    assert_eq!(a, counting_buffer(11));
    assert_eq!(b.len(), 13);
    assert_eq!(b[11], 1000);
    assert_eq!(b[12], 1001);
}

#[test]
fn test_pop_on_shared_buffer_leaves_other_untouched() {
    let a = counting_buffer(12);
    let mut b = a.clone();
    b.pop();
    b.pop();
    b.push(7);

    assert_eq!(a, counting_buffer(12));
    assert_eq!(b.len(), 11);
    assert_eq!(b[10], 7);
}

#[test]
fn test_resize() {
    let mut buf = counting_buffer(3);
    buf.resize(9, 0xffffffff);
    assert_eq!(buf.len(), 9);
    assert_eq!(&buf.as_slice()[..3], &[0, 1, 2]);
    assert!(buf.as_slice()[3..].iter().all(|&w| w == 0xffffffff));

    buf.resize(2, 0);
    assert_eq!(buf.as_slice(), &[0, 1]);
}

#[test]
fn test_resize_shared_buffer() {
    let a = counting_buffer(10);
    let mut b = a.clone();
    b.resize(30, 5);
    assert_eq!(a, counting_buffer(10));
    assert_eq!(&b.as_slice()[..10], a.as_slice());
    assert!(b.as_slice()[10..].iter().all(|&w| w == 5));
}

#[test]
fn test_equality_ignores_sharing_and_storage_mode() {
    let a = counting_buffer(30);
    let shared = a.clone();
    let separate = counting_buffer(30);
    assert_eq!(a, shared);
    assert_eq!(a, separate);

    // same words, one inline, one on the heap
    let mut heap = counting_buffer(INLINE_WORDS + 1);
    heap.pop();
    assert!(!heap.is_inline());
    let inline = counting_buffer(INLINE_WORDS);
    assert!(inline.is_inline());
    assert_eq!(heap, inline);

    let mut shorter = counting_buffer(30);
    shorter.pop();
    assert_ne!(a, shorter);
}

#[test]
fn test_equal_buffers_hash_equal() {
    use crate::stdlib::DefaultHasher;

    let hash = |buf: &DigitBuffer| {
        let mut hasher = DefaultHasher::new();
        buf.hash(&mut hasher);
        hasher.finish()
    };

    let mut heap = counting_buffer(INLINE_WORDS + 1);
    heap.pop();
    assert_eq!(hash(&heap), hash(&counting_buffer(INLINE_WORDS)));
}

mod swap {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:expr, $b:expr) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let mut a = counting_buffer($a);
                    let mut b: DigitBuffer = (100..100 + $b as u32).collect();
                    let (a_inline, b_inline) = (a.is_inline(), b.is_inline());

                    a.swap(&mut b);

                    assert_eq!(a, (100..100 + $b as u32).collect::<DigitBuffer>());
                    assert_eq!(b, counting_buffer($a));
                    assert_eq!(a.is_inline(), b_inline);
                    assert_eq!(b.is_inline(), a_inline);
                }
            }
        };
    }

    impl_case!(inline_inline: 1, INLINE_WORDS);
    impl_case!(heap_heap: 10, 40);
    impl_case!(heap_inline: 17, 2);
    impl_case!(inline_heap: 0, 9);
}

#[test]
fn test_swap_keeps_sharing() {
    let a = counting_buffer(20);
    let mut b = a.clone();
    let mut c = counting_buffer(2);

    b.swap(&mut c);
    assert!(a.is_shared());
    assert!(c.is_shared());
    assert_eq!(b, counting_buffer(2));

    c[0] = 77;
    assert_eq!(a[0], 0);
}

#[test]
fn test_from_vec_and_slice() {
    let v: Vec<u32> = (0..10).collect();
    let from_vec = DigitBuffer::from(v.clone());
    let from_slice = DigitBuffer::from(v.as_slice());
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec.as_slice(), v.as_slice());

    let small = DigitBuffer::from(vec![1, 2]);
    assert!(small.is_inline());
    assert_eq!(small.as_slice(), &[1, 2]);
}

#[test]
fn test_debug() {
    let buf = counting_buffer(3);
    assert_eq!(format!("{:?}", buf), "[0, 1, 2]");
}
