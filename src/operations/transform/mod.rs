mod mirror;
mod rotate;
mod scale;
mod translate;

pub use mirror::Mirror;
pub use rotate::Rotate;
pub use scale::Scale;
pub use translate::Translate;
