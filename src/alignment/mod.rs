pub mod comparison;
pub mod diagnostics;
pub mod matcher;
pub mod report;
pub mod window;
#[cfg(test)]
mod tests;
