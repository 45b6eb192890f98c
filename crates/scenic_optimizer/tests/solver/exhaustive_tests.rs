use scenic_optimizer::{
    problem::budget::Budget,
    solver::{exhaustive::ExhaustiveSolver, path_evaluation::path_cost, solution::Solution},
};

use crate::test_utils;

#[test]
fn test_scenario() {
    let (points, matrix) = test_utils::scenario();

    let solution = ExhaustiveSolver::new(&points, &matrix, test_utils::budget(30.0)).solve();

    assert_eq!(solution.path, test_utils::path(&[1, 2]));
    assert_eq!(solution.score, 8.0);
    assert_eq!(solution.cost, 15.0);
}

#[test]
fn test_infeasible_budget_returns_empty_solution() {
    let (points, matrix) = test_utils::scenario();

    for minutes in [0.0, 5.0, 9.99] {
        let solution = ExhaustiveSolver::new(&points, &matrix, test_utils::budget(minutes)).solve();
        assert_eq!(solution, Solution::empty());
    }
}

#[test]
fn test_optimal_on_random_instances() {
    let mut rng = test_utils::rng(2024);

    for num_candidates in [2, 4, 6, 7] {
        for _ in 0..5 {
            let (points, matrix) = test_utils::random_instance(&mut rng, num_candidates);
            let minutes = 10.0 * num_candidates as f64;

            let solution =
                ExhaustiveSolver::new(&points, &matrix, test_utils::budget(minutes)).solve();

            let expected =
                test_utils::brute_force_best_score(&points, &matrix, |cost| cost <= minutes);
            assert_eq!(solution.score, expected);
            assert!(solution.cost <= minutes);
            assert_eq!(solution.cost, path_cost(&matrix, &solution.path));
        }
    }
}

#[test]
fn test_larger_budget_never_scores_less() {
    let mut rng = test_utils::rng(77);
    let (points, matrix) = test_utils::random_instance(&mut rng, 6);

    let mut previous = Budget::ZERO;
    let mut previous_score = 0.0;
    for minutes in [10.0, 20.0, 30.0, 45.0, 80.0] {
        let budget = test_utils::budget(minutes);
        assert!(budget > previous);

        let solution = ExhaustiveSolver::new(&points, &matrix, budget).solve();

        assert!(solution.score >= previous_score);
        previous = budget;
        previous_score = solution.score;
    }
}

#[test]
fn test_statistics_count_pruned_branches() {
    let (points, matrix) = test_utils::scenario();

    let (_, generous) = ExhaustiveSolver::new(&points, &matrix, test_utils::budget(1000.0))
        .solve_with_statistics();
    let (_, tight) =
        ExhaustiveSolver::new(&points, &matrix, test_utils::budget(20.0)).solve_with_statistics();

    // Root, 3 + 6 + 6 orderings.
    assert_eq!(generous.explored_nodes, 16);
    assert_eq!(generous.pruned_nodes, 0);
    assert!(tight.explored_nodes < generous.explored_nodes);
    assert!(tight.pruned_nodes > 0);
}
