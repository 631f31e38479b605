pub mod ast;
pub mod report;
pub mod semantics;
