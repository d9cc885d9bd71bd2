pub mod facility;
pub mod solution;
pub mod solver;
pub mod step;
pub mod week;
