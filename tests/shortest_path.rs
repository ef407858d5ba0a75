//! Dijkstra's algorithm on top of the heap, checked against Bellman-Ford.

use addressable_fibonacci_heap::{FibonacciHeap, Handle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Graph = Vec<Vec<(usize, u64)>>;

fn random_graph(rng: &mut StdRng, nodes: usize, edges: usize) -> Graph {
	let mut graph = vec![Vec::new(); nodes];
	for _ in 0..edges {
		let from = rng.gen_range(0..nodes);
		let to = rng.gen_range(0..nodes);
		let weight = rng.gen_range(0..100);
		graph[from].push((to, weight));
	}
	graph
}

fn dijkstra(graph: &Graph, source: usize) -> Vec<Option<u64>> {
	let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
	let mut handles: Vec<Option<Handle>> = vec![None; graph.len()];
	let mut done = vec![false; graph.len()];
	let mut heap = FibonacciHeap::with_capacity(graph.len());

	dist[source] = Some(0);
	handles[source] = Some(heap.insert(0, source));

	while let Ok((d, vertex)) = heap.extract_min() {
		done[vertex] = true;
		for &(next, weight) in &graph[vertex] {
			if done[next] {
				continue;
			}
			let candidate = d + weight;
			match (dist[next], handles[next]) {
				(Some(current), Some(handle)) if candidate < current => {
					heap.decrease_key(handle, candidate).unwrap();
					dist[next] = Some(candidate);
				}
				(None, _) => {
					handles[next] = Some(heap.insert(candidate, next));
					dist[next] = Some(candidate);
				}
				_ => {}
			}
		}
	}
	dist
}

fn bellman_ford(graph: &Graph, source: usize) -> Vec<Option<u64>> {
	let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
	dist[source] = Some(0);
	for _ in 0..graph.len() {
		let mut changed = false;
		for (from, edges) in graph.iter().enumerate() {
			let base = match dist[from] {
				Some(d) => d,
				None => continue,
			};
			for &(to, weight) in edges {
				if dist[to].map_or(true, |d| base + weight < d) {
					dist[to] = Some(base + weight);
					changed = true;
				}
			}
		}
		if !changed {
			break;
		}
	}
	dist
}

#[test]
fn small_graph() {
	let graph: Graph = vec![
		vec![(1, 4), (2, 1)],
		vec![(3, 1)],
		vec![(1, 2), (3, 5)],
		vec![(4, 3)],
		vec![],
		vec![(0, 1)],
	];
	assert_eq!(
		dijkstra(&graph, 0),
		vec![Some(0), Some(3), Some(1), Some(4), Some(7), None]
	);
}

#[test]
fn random_graphs_match_bellman_ford() {
	let mut rng = StdRng::seed_from_u64(0xf1b0_4ac1);
	for round in 0..40 {
		let nodes = rng.gen_range(1..200);
		let edges = rng.gen_range(0..nodes * 6);
		let graph = random_graph(&mut rng, nodes, edges);
		let source = rng.gen_range(0..nodes);
		assert_eq!(
			dijkstra(&graph, source),
			bellman_ford(&graph, source),
			"round {}",
			round
		);
	}
}
