use std::env;

use csolve::{generator, Solver, Strategy};
use rand::{thread_rng, Rng as _, SeedableRng as _};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<u64>, _>>()
        .expect("Expected integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected rows, cols and optionally a seed"
    );

    let seed = args.get(2).copied().unwrap_or_else(|| thread_rng().gen());
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    println!("Seed: {}", seed);

    let grid = generator::depth_first(args[0] as usize, args[1] as usize, &mut rng).unwrap();
    print!("{}", grid);

    let mut solver = Solver::new(&grid);
    for strategy in Strategy::ALL {
        let path = solver.solve(strategy).unwrap();
        println!(
            "{}: {} cells on the path, {} expanded",
            strategy,
            path.len(),
            solver.exploration().visit_order().len()
        );
    }
}
