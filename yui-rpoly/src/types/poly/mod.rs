mod mono;
mod poly;
mod add;
mod mul;
mod eval;
mod ops;

pub use mono::Mono;
pub use poly::*;
