use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use mis::certificate::Certificate;
use mis::graph::Graph;
use mis::{generate, greedy, local, verify};

enum Source {
    File(String),
    ErdosRenyi { n: usize, p: f64 },
    KingLattice { x: usize, y: usize, density: f64 },
}

fn main() {
    let mut algorithm: Option<String> = None;
    let mut source: Option<Source> = None;
    let mut output: Option<String> = None;
    let mut save_graph: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut check = false;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-a" | "--algorithm" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                algorithm = Some(v.clone());
                i += 2;
            }
            "-f" | "--input" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                source = Some(Source::File(v.clone()));
                i += 2;
            }
            "-o" | "--output" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                output = Some(v.clone());
                i += 2;
            }
            "--random-er" => {
                let n = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let p = args.get(i + 2).unwrap_or_else(|| usage_and_exit(2));
                source = Some(Source::ErdosRenyi {
                    n: n.parse().unwrap_or_else(|_| usage_and_exit(2)),
                    p: p.parse().unwrap_or_else(|_| usage_and_exit(2)),
                });
                i += 3;
            }
            "--random-king" => {
                let x = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let y = args.get(i + 2).unwrap_or_else(|| usage_and_exit(2));
                let d = args.get(i + 3).unwrap_or_else(|| usage_and_exit(2));
                source = Some(Source::KingLattice {
                    x: x.parse().unwrap_or_else(|_| usage_and_exit(2)),
                    y: y.parse().unwrap_or_else(|_| usage_and_exit(2)),
                    density: d.parse().unwrap_or_else(|_| usage_and_exit(2)),
                });
                i += 4;
            }
            "--save-graph" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                save_graph = Some(v.clone());
                i += 2;
            }
            "--seed" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                seed = Some(v.parse().unwrap_or_else(|_| usage_and_exit(2)));
                i += 2;
            }
            "--check" => {
                check = true;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let Some(algorithm) = algorithm else {
        eprintln!("Need an algorithm (-a) and an input (-f or --random-*).");
        usage_and_exit(2)
    };
    let Some(source) = source else {
        eprintln!("Need an algorithm (-a) and an input (-f or --random-*).");
        usage_and_exit(2)
    };

    let graph = match load_graph(&source, seed) {
        Ok(g) => Arc::new(g),
        Err(e) => {
            eprintln!("Failed to load graph: {e}");
            std::process::exit(1);
        }
    };
    eprintln!("Loaded graph: {}", graph.stats());

    if let Some(path) = save_graph {
        if let Err(e) = graph.save_to_file(&path) {
            eprintln!("Failed to save graph to {path}: {e}");
            std::process::exit(1);
        }
        eprintln!("Saved graph to {path}");
    }

    let certificate = match algorithm.as_str() {
        "greedy" => greedy::approximate(&graph),
        "local-search" => {
            let initial = greedy::approximate(&graph);
            let refined = local::optimize(&initial);
            if refined.len() > initial.len() {
                eprintln!(
                    "Local search improved the solution: {} -> {} vertices",
                    initial.len(),
                    refined.len()
                );
            } else {
                eprintln!("Local search found no improving swap.");
            }
            refined
        }
        "gurobi" => {
            eprintln!("The gurobi algorithm is not implemented in this solver.");
            std::process::exit(2);
        }
        other => {
            eprintln!("Invalid algorithm option: {other}");
            usage_and_exit(2)
        }
    };

    if check {
        if let Err(e) = verify::check_independent(&certificate) {
            eprintln!("Check FAILED: {e}");
            std::process::exit(1);
        }
        if algorithm == "greedy" {
            if let Err(e) = verify::check_maximal(&certificate) {
                eprintln!("Check FAILED: {e}");
                std::process::exit(1);
            }
        }
        eprintln!("Check OK: solution is a valid independent set.");
    }

    if let Err(e) = write_certificate(&certificate, output.as_deref()) {
        eprintln!("Failed to write solution: {e}");
        std::process::exit(1);
    }
}

fn load_graph(source: &Source, seed: Option<u64>) -> Result<Graph, String> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    };
    match *source {
        Source::File(ref path) => Graph::load_from_file(path).map_err(|e| e.to_string()),
        Source::ErdosRenyi { n, p } => {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("edge probability {p} is not in [0, 1]"));
            }
            Ok(generate::erdos_renyi(&mut rng, n, p))
        }
        Source::KingLattice { x, y, density } => {
            if !(0.0..=1.0).contains(&density) {
                return Err(format!("density {density} is not in [0, 1]"));
            }
            Ok(generate::king_lattice(&mut rng, x, y, density))
        }
    }
}

fn write_certificate(certificate: &Certificate, output: Option<&str>) -> std::io::Result<()> {
    match output {
        Some(path) => certificate.save_to_file(path),
        None => certificate.write_to(std::io::stdout().lock()),
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  mis -a ALGORITHM (-f FILE | --random-er N P | --random-king X Y D) [OPTIONS]\n\nOptions:\n  -a, --algorithm ALG      Algorithm to run (greedy, local-search)\n  -f, --input FILE          Input graph file (vertex count, then one 'u v' edge per line)\n  -o, --output FILE         Write the solution to FILE instead of stdout\n  --random-er N P           Solve a random Erdos-Renyi graph G(N, P)\n  --random-king X Y D       Solve a random king-lattice graph of density D\n  --save-graph FILE         Also write the loaded/generated graph to FILE\n  --seed SEED               Deterministic seed for the random generators\n  --check                   Verify the solution before writing it\n  -h, --help                Show this help\n"
    );
    std::process::exit(code)
}
