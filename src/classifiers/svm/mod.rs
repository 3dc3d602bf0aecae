mod kernel;
mod svc;

pub use kernel::{Kernel, KernelKind};
pub use svc::Svc;
