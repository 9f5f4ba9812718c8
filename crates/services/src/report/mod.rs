mod assembler;
mod export;
mod model;

// Public API of the report subsystem.
pub use assembler::{ReportAssembler, LOOKUP_MISS_DESCRIPTION};
pub use export::ReportExporter;
pub use model::{ProfileLine, ReportModel, ReportSummary, StepBlock};
