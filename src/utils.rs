pub mod quantile;
pub use quantile::quantile;

pub mod sliding_windows;
pub use sliding_windows::sliding_windows;

pub mod sort_results;
pub use sort_results::sort_results;
