pub mod json_loader;

pub use json_loader::{
    load_question_document, load_test_cases, parse_question_document, parse_test_cases, read_source_text,
};
