use scenic_optimizer::solver::{
    exhaustive::ExhaustiveSolver,
    grasp::{grasp_params::GraspParams, grasp_solver::GraspSolver},
    path_evaluation::{path_cost, path_score},
    solution::Solution,
};

use crate::{sequence_rng::SequenceRng, test_utils};

#[test]
fn test_scenario_with_lowest_draws() {
    let (points, matrix) = test_utils::scenario();
    let solver = GraspSolver::new(
        &points,
        &matrix,
        test_utils::budget(30.0),
        GraspParams::default(),
    );

    // Always starts at A, then prepends B; C never fits in front of [B, A]
    // and swapping it in goes over budget.
    let (solution, statistics) = solver.solve_with_statistics(&mut SequenceRng::new(vec![0]));

    assert_eq!(solution.path, test_utils::path(&[2, 1]));
    assert_eq!(solution.score, 8.0);
    assert_eq!(solution.cost, 25.0);
    assert_eq!(statistics.improvements, 1);
    assert_eq!(statistics.accepted_swaps, 0);
}

/// Two iterations without local search. From B the only fitting prefix is A,
/// giving [A, B]; from C nothing fits, giving [C]. Both score 8 at 15 minutes.
/// Each iteration draws its start, then one value to shuffle the two
/// remaining points.
fn tied_iterations(first_start: u32, second_start: u32) -> (Solution, usize) {
    let (points, matrix) = test_utils::scenario();
    let params = GraspParams {
        max_iterations: 2,
        num_candidates: 20,
        local_search_size: 0,
    };
    let solver = GraspSolver::new(&points, &matrix, test_utils::budget(30.0), params);

    // Starts are drawn from 1..4, three buckets.
    let mut rng = SequenceRng::new(vec![
        SequenceRng::landing_on(first_start - 1, 3),
        0,
        SequenceRng::landing_on(second_start - 1, 3),
        0,
    ]);
    let (solution, statistics) = solver.solve_with_statistics(&mut rng);

    (solution, statistics.improvements)
}

#[test]
fn test_tie_keeps_earlier_path() {
    let (solution, improvements) = tied_iterations(2, 3);

    assert_eq!(solution.path, test_utils::path(&[1, 2]));
    assert_eq!(solution.score, 8.0);
    assert_eq!(solution.cost, 15.0);
    assert_eq!(improvements, 1);
}

#[test]
fn test_tie_keeps_earlier_path_in_reverse_order() {
    let (solution, improvements) = tied_iterations(3, 2);

    assert_eq!(solution.path, test_utils::path(&[3]));
    assert_eq!(solution.score, 8.0);
    assert_eq!(solution.cost, 15.0);
    assert_eq!(improvements, 1);
}

#[test]
fn test_scenario_with_seeded_rng() {
    let (points, matrix) = test_utils::scenario();
    let solver = GraspSolver::new(
        &points,
        &matrix,
        test_utils::budget(30.0),
        GraspParams::default(),
    );

    let solution = solver.solve(&mut test_utils::rng(3));

    assert_eq!(solution.score, 8.0);
    assert_eq!(solution.cost, 15.0);
}

#[test]
fn test_feasible_on_random_instances() {
    let mut rng = test_utils::rng(5);

    for num_candidates in [1, 3, 9, 15] {
        for _ in 0..5 {
            let (points, matrix) = test_utils::random_instance(&mut rng, num_candidates);
            let minutes = 6.0 * num_candidates as f64;
            let params = GraspParams {
                max_iterations: 30,
                ..GraspParams::default()
            };

            let solution =
                GraspSolver::new(&points, &matrix, test_utils::budget(minutes), params)
                    .solve(&mut rng);

            assert!(solution.cost < minutes);
            assert_eq!(solution.cost, path_cost(&matrix, &solution.path));
            assert_eq!(solution.score, path_score(&points, &solution.path));
        }
    }
}

#[test]
fn test_bounded_by_strict_optimum() {
    let mut rng = test_utils::rng(17);

    for _ in 0..10 {
        let (points, matrix) = test_utils::random_instance(&mut rng, 6);
        let minutes = 40.0;

        let grasp = GraspSolver::new(
            &points,
            &matrix,
            test_utils::budget(minutes),
            GraspParams::default(),
        )
        .solve(&mut rng);
        let exhaustive =
            ExhaustiveSolver::new(&points, &matrix, test_utils::budget(minutes)).solve();

        let strict_optimum =
            test_utils::brute_force_best_score(&points, &matrix, |cost| cost < minutes);
        assert!(grasp.score <= strict_optimum);
        assert!(strict_optimum <= exhaustive.score);
    }
}

#[test]
fn test_budget_equal_to_every_leg_is_infeasible() {
    let (points, matrix) = test_utils::scenario();

    // The exhaustive solver accepts [A] at exactly 10 minutes; GRASP requires
    // the path to stay strictly under budget.
    let grasp = GraspSolver::new(
        &points,
        &matrix,
        test_utils::budget(10.0),
        GraspParams::default(),
    )
    .solve(&mut test_utils::rng(0));

    assert_eq!(grasp, Solution::empty());
}

#[test]
fn test_deterministic_for_a_seed() {
    let mut rng = test_utils::rng(31);
    let (points, matrix) = test_utils::random_instance(&mut rng, 12);
    let solver = GraspSolver::new(
        &points,
        &matrix,
        test_utils::budget(50.0),
        GraspParams::default(),
    );

    let first = solver.solve_with_statistics(&mut test_utils::rng(1234));
    let second = solver.solve_with_statistics(&mut test_utils::rng(1234));

    assert_eq!(first, second);
}

#[test]
fn test_deterministic_for_a_fixed_sequence() {
    let mut rng = test_utils::rng(64);
    let (points, matrix) = test_utils::random_instance(&mut rng, 9);
    let solver = GraspSolver::new(
        &points,
        &matrix,
        test_utils::budget(40.0),
        GraspParams::default(),
    );
    let sequence = vec![3, 1 << 20, 17, u32::MAX / 3, 99, 1 << 30, 5];

    let first = solver.solve_with_statistics(&mut SequenceRng::new(sequence.clone()));
    let second = solver.solve_with_statistics(&mut SequenceRng::new(sequence));

    assert_eq!(first, second);
    assert!(first.0.cost < 40.0);
}
