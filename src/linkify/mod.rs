pub mod charset;
pub mod config;
pub mod linkifier;
pub mod segment;
pub mod cortex;

pub use charset::*;
pub use config::*;
pub use linkifier::*;
pub use segment::*;
pub use cortex::*;

#[cfg(test)]
mod tests;
