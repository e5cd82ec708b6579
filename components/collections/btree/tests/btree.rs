use btree::BTreeMap;

#[test]
fn order_four_walkthrough() {
    let mut map = BTreeMap::with_order(4);
    for (k, v) in [
        (10, "ten"),
        (20, "twenty"),
        (5, "five"),
        (6, "six"),
        (12, "twelve"),
        (30, "thirty"),
        (7, "seven"),
        (17, "seventeen"),
    ] {
        assert_eq!(map.insert(k, v), None);
    }
    assert_eq!(map.len(), 8);
    assert_eq!(map.get(&5), Some(&"five"));
    assert_eq!(map.get(&7), Some(&"seven"));

    assert_eq!(map.remove(&10), Some("ten"));
    assert_eq!(map.len(), 7);
    assert_eq!(map.get(&10), None);

    assert_eq!(map.remove(&6), Some("six"));
    assert_eq!(map.remove(&7), Some("seven"));
    assert_eq!(map.remove(&5), Some("five"));
    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&20), Some(&"twenty"));
}

#[test]
fn shuffled_permutation_iterates_in_order() {
    use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

    let mut keys: Vec<u32> = (0..2000).collect();
    keys.shuffle(&mut SmallRng::seed_from_u64(5));

    let map: BTreeMap<u32, u32> = keys.into_iter().map(|k| (k, k)).collect();
    assert_eq!(map.len(), 2000);
    let seen: Vec<u32> = map.keys().copied().collect();
    assert_eq!(seen, (0..2000).collect::<Vec<u32>>());
}

#[test]
fn insert_then_reverse_delete_leaves_empty() {
    for order in [3, 4, 7, 8] {
        let mut map = BTreeMap::with_order(order);
        let keys: Vec<u32> = (0..500).map(|i| (i * 263) % 500).collect();
        for &k in &keys {
            map.insert(k, k.to_string());
        }
        for &k in keys.iter().rev() {
            assert_eq!(map.remove(&k), Some(k.to_string()));
        }
        assert!(map.is_empty());
        assert!(map.iter().next().is_none());
    }
}

#[test]
fn owned_iteration_consumes_in_order() {
    let mut map = BTreeMap::with_order(4);
    for k in [4, 2, 8, 6, 0] {
        map.insert(k, k * 10);
    }
    let pairs: Vec<(i32, i32)> = map.into_iter().collect();
    assert_eq!(pairs, vec![(0, 0), (2, 20), (4, 40), (6, 60), (8, 80)]);
}
