//! Selection step components.

mod applicant_type_step;
mod degree_step;
mod faculty_step;

pub use applicant_type_step::ApplicantTypeStep;
pub use degree_step::DegreeStep;
pub use faculty_step::FacultyStep;
