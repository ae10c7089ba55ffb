//! Built-in tool implementations.

mod create_complaint;
mod general_qa;
mod get_complaint;

pub use create_complaint::{CreateComplaintTool, CREATE_COMPLAINT_TOOL};
pub use general_qa::{GeneralQaTool, GENERAL_QA_TOOL};
pub use get_complaint::{GetComplaintTool, GET_COMPLAINT_TOOL};
