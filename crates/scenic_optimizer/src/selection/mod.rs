pub mod candidate_selector;
