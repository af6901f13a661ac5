//! Test modules for the public-id codec


mod config_tests;
