pub mod accident_dto;
pub mod accident_request;
#[allow(clippy::module_inception)]
pub mod accidents;
