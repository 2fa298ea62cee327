// Command-line front end and the generation pipelines behind it

pub mod cli;
pub mod pipeline;
