//! Larger randomized workloads.

use addressable_fibonacci_heap::FibonacciHeap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[test]
fn decrease_key_storm() {
	let mut rng = StdRng::seed_from_u64(42);
	let mut heap = FibonacciHeap::new();
	let mut keys: Vec<i64> = (0..20_000).map(|_| rng.gen_range(0..1_000_000)).collect();
	let handles: Vec<_> = keys
		.iter()
		.enumerate()
		.map(|(i, &key)| heap.insert(key, i))
		.collect();

	// build deep trees first, then cut them apart again
	for _ in 0..100 {
		let (_, i) = heap.extract_min().unwrap();
		keys[i] = i64::max_value();
	}
	let mut order: Vec<usize> = (0..handles.len()).collect();
	order.shuffle(&mut rng);
	for &i in &order {
		if keys[i] == i64::max_value() {
			continue;
		}
		keys[i] -= rng.gen_range(0..2_000_000);
		heap.decrease_key(handles[i], keys[i]).unwrap();
		if i % 97 == 0 {
			let (key, j) = heap.extract_min().unwrap();
			assert_eq!(key, keys[j]);
			keys[j] = i64::max_value();
		}
	}

	let mut previous = i64::min_value();
	let mut count = 0;
	for (key, i) in heap.drain_min() {
		assert!(previous <= key);
		assert_eq!(key, keys[i]);
		previous = key;
		count += 1;
	}
	assert_eq!(
		count,
		keys.iter().filter(|&&key| key != i64::max_value()).count()
	);
}

#[test]
fn interleaved_insert_and_extract() {
	let mut rng = StdRng::seed_from_u64(7);
	let mut heap = FibonacciHeap::new();
	let mut model = Vec::new();
	for _ in 0..5_000 {
		if rng.gen_bool(0.6) || model.is_empty() {
			let key: u32 = rng.gen();
			heap.insert(key, ());
			model.push(key);
		} else {
			let (key, ()) = heap.extract_min().unwrap();
			let pos = model
				.iter()
				.enumerate()
				.min_by_key(|&(_, &k)| k)
				.map(|(pos, _)| pos)
				.unwrap();
			assert_eq!(model.swap_remove(pos), key);
		}
		assert_eq!(heap.len(), model.len());
	}
}
