pub mod markdown_merger;
pub mod section_extractor;
pub mod test_case_builder;
pub mod weight_assigner;

pub use markdown_merger::{merge_solutions, not_found_placeholder, read_error_placeholder, render_markdown};
pub use section_extractor::{extract_section, QuestionSections, Section};
pub use test_case_builder::build_test_cases;
pub use weight_assigner::assign_weights;
