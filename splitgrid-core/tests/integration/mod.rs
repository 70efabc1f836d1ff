//! Integration test modules

mod settings_tests;
