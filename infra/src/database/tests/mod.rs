mod connection_tests;
mod error_mapping_tests;
