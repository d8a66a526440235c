// Base exception test module
#[cfg(test)]
mod exception_tests;
