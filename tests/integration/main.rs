//! Integration tests for crtterm

mod cli_test;
mod console_test;
mod helpers;
