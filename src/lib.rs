// Crate root library declaration and module exports.
pub mod cli;
pub mod dates;
pub mod encode;
pub mod model;
pub mod outline;
pub mod pipeline;
pub mod rows;
pub mod sink;
