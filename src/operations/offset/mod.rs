mod parallel;

pub use parallel::Parallel;
