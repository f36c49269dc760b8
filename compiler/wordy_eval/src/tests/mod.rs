//! Evaluator tests, kept out of the implementation files.

mod exec_tests;
