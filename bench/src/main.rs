use dsviz_core::{AvlTree, Graph};
use std::time::{Duration, Instant};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: dsviz-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all       Run every graph generator and the AVL benchmark (default)");
        println!("  random    Uniform random weighted edges, ~10 per vertex");
        println!("  ring      Single cycle (longest BFS/DFS frontier chain)");
        println!("  complete  Every pair connected (densest matrix)");
        println!("  grid      Square lattice with unit-ish weights");
        println!("  avl       Sequential and shuffled AVL insert/remove");
        println!();
        println!("Default vertex_count: 1000 (AVL mode uses 100x as key count)");
        return;
    }

    println!("dsviz-bench");
    println!("===========");
    println!();

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "random" => vec![("Random weighted", gen_random)],
        "ring" => vec![("Ring", gen_ring)],
        "complete" => vec![("Complete", gen_complete)],
        "grid" => vec![("Grid lattice", gen_grid)],
        "avl" => vec![],
        "all" => vec![
            ("Random weighted", gen_random as fn(usize) -> Graph),
            ("Ring", gen_ring),
            ("Complete", gen_complete),
            ("Grid lattice", gen_grid),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_graph_benchmark(name, generator, vertex_count);
    }

    if mode == "avl" || mode == "all" {
        run_avl_benchmark(vertex_count * 100);
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn run_graph_benchmark(name: &str, generator: fn(usize) -> Graph, vertex_count: usize) {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(vertex_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.1}ms: {} vertices, {} edges, ~{:.1}MB matrix",
        ms(gen_time),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    println!();
    println!("{:>10} {:>12} {:>10}", "algorithm", "result", "time");
    println!("{:->10} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let order = dsviz_core::bfs(&graph, 0);
    println!("{:>10} {:>12} {:>8.2}ms", "bfs", order.len(), ms(t.elapsed()));

    let t = Instant::now();
    let order = dsviz_core::dfs(&graph, 0);
    println!("{:>10} {:>12} {:>8.2}ms", "dfs", order.len(), ms(t.elapsed()));

    let t = Instant::now();
    let dist = dsviz_core::dijkstra(&graph, 0);
    let elapsed = t.elapsed();
    let farthest = dist.iter().flatten().max().copied().unwrap_or(0);
    println!("{:>10} {:>12} {:>8.2}ms", "dijkstra", farthest, ms(elapsed));

    let t = Instant::now();
    let mst = dsviz_core::prim_mst(&graph);
    let elapsed = t.elapsed();
    println!(
        "{:>10} {:>12} {:>8.2}ms",
        "prim",
        dsviz_core::total_weight(&mst),
        ms(elapsed)
    );
    println!("{:>10} (bfs/dfs: vertices reached, dijkstra: max distance, prim: total weight)", "");
    println!();
}

fn run_avl_benchmark(key_count: usize) {
    println!("--- AVL tree ({} keys) ---", key_count);
    println!();
    println!("{:>12} {:>10} {:>8} {:>10}", "workload", "op", "height", "time");
    println!("{:->12} {:->10} {:->8} {:->10}", "", "", "", "");

    let sequential: Vec<i32> = (0..key_count as i32).collect();
    let mut shuffled = sequential.clone();
    let mut rng = FastRng::new(2024);
    for i in (1..shuffled.len()).rev() {
        let j = rng.next(i as u64 + 1) as usize;
        shuffled.swap(i, j);
    }

    for (label, keys) in [("sequential", &sequential), ("shuffled", &shuffled)] {
        let mut tree = AvlTree::new();
        let t = Instant::now();
        for &k in keys {
            tree.insert(k);
        }
        let elapsed = t.elapsed();
        println!("{:>12} {:>10} {:>8} {:>8.2}ms", label, "insert", tree.height(), ms(elapsed));

        let t = Instant::now();
        for &k in keys.iter().step_by(2) {
            tree.remove(k);
        }
        let elapsed = t.elapsed();
        println!("{:>12} {:>10} {:>8} {:>8.2}ms", label, "remove", tree.height(), ms(elapsed));
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, undirected, weights in 1..=100
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn weight(&mut self) -> i32 {
        self.next(100) as i32 + 1
    }
}

/// Uniform random edges, about ten per vertex. Not necessarily connected.
fn gen_random(n: usize) -> Graph {
    let mut graph = Graph::new(n, false);
    if n < 2 {
        return graph;
    }
    let mut rng = FastRng::new(54321);
    for _ in 0..n * 10 {
        let u = rng.next(n as u64) as usize;
        let v = rng.next(n as u64) as usize;
        if u != v {
            let w = rng.weight();
            graph.add_edge(u, v, w);
        }
    }
    graph
}

/// One cycle through every vertex.
fn gen_ring(n: usize) -> Graph {
    let mut graph = Graph::new(n, false);
    let mut rng = FastRng::new(67890);
    for i in 0..n {
        let w = rng.weight();
        graph.add_edge(i, (i + 1) % n, w);
    }
    graph
}

/// Every pair of distinct vertices connected.
fn gen_complete(n: usize) -> Graph {
    let mut graph = Graph::new(n, false);
    let mut rng = FastRng::new(99999);
    for u in 0..n {
        for v in (u + 1)..n {
            let w = rng.weight();
            graph.add_edge(u, v, w);
        }
    }
    graph
}

/// Largest square lattice that fits in `n` vertices, row-major ids.
/// Leftover vertices stay isolated.
fn gen_grid(n: usize) -> Graph {
    let mut graph = Graph::new(n, false);
    let side = (n as f64).sqrt() as usize;
    let mut rng = FastRng::new(77777);
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            if c + 1 < side {
                let w = rng.weight();
                graph.add_edge(id, id + 1, w);
            }
            if r + 1 < side {
                let w = rng.weight();
                graph.add_edge(id, id + side, w);
            }
        }
    }
    graph
}
