pub mod angles;
pub mod pacing;
pub mod references;
pub mod review;
pub mod tiers;
