// Front-end layer: terminal views, export formats and the interactive loop.

pub mod export;
pub mod interactive;
pub mod report;
