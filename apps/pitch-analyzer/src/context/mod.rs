// Memo context assembly.
// Turns the heterogeneous deal record into one prompt-ready text block.

pub mod assembler;

pub use assembler::build_context;
