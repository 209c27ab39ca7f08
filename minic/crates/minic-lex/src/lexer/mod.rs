//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct and dispatch loop
//! - `buffer` - Capped working buffer for literal text
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Integer and real-number scanning
//! - `string` - String and character literal scanning
//! - `operator` - Operator disambiguation
//! - `comment` - Line, block, and doc comment scanning

mod buffer;
mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::comment::classify_block_comment;
pub use self::core::Scanner;
