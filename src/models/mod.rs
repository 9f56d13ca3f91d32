pub mod styled_run;
pub mod document_request;
pub mod conf;

pub use styled_run::{StyledRun, StyleTag, join_runs};
pub use document_request::DocumentRequest;
pub use conf::Conf;
