pub mod types;
pub mod block;
pub mod kdf;
pub mod anonymise;

pub use types::*;
pub use block::*;
pub use kdf::*;
pub use anonymise::*;
