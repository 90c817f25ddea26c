pub mod apply;
pub mod contact;
pub mod validation;
