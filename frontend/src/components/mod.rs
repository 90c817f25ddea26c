pub mod apply;
pub mod contact;
pub mod form_fields;
