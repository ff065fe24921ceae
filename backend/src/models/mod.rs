pub mod billing;
pub mod month;
pub mod scope;

pub use billing::*;
pub use month::*;
pub use scope::*;
