use criterion::{criterion_group, criterion_main, Criterion};
use numberlink_backtrack::parse::parse_puzzle;
use numberlink_backtrack::{BacktrackSolver, SolverConfig};
use std::hint::black_box;

const CLASSIC_FIVE: &str = "5 5
A B D
  C E
     
 B D 
 ACE 
";

const SIX: &str = "6 6
A    B
      
  D   
  ECA 
    E 
C   DB
";

fn bench_forward_checking(c: &mut Criterion) {
    let boards = [CLASSIC_FIVE, SIX].map(|text| parse_puzzle(text).unwrap());
    let mut group = c.benchmark_group("Forward checking");

    for (name, forward_checking) in [("enabled", true), ("disabled", false)] {
        let solver = BacktrackSolver::new(SolverConfig::default().with_forward_checking(forward_checking));
        group.bench_function(name, |b| {
            b.iter(|| {
                for board in &boards {
                    black_box(solver.solve(board).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_forward_checking);

criterion_main!(benches);
