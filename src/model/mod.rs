mod constant;
mod linear;
mod runner;

pub use constant::ConstantModel;
pub use linear::LinearModel;
pub use runner::{ModelRunner, build_runner};
