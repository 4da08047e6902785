mod arc;
mod bezier_seed;
mod circle;
mod line;
mod path;

pub use arc::Arc;
pub use bezier_seed::BezierSeed;
pub use circle::Circle;
pub use line::Line;
pub use path::{Path, PathKind};
