pub mod id_regenerator;
pub mod question_assembler;

pub use id_regenerator::regenerate_ids;
pub use question_assembler::{create_question, update_question};
