pub mod difficulty;
pub mod language;
pub mod loaders;
pub mod question;
pub mod test_case;

pub use difficulty::Difficulty;
pub use language::Language;
pub use loaders::{
    load_question_document, load_test_cases, parse_question_document, parse_test_cases, read_source_text,
};
pub use question::{
    CodingQuestion, CodingQuestionDetail, EvaluationMetric, LanguageCodeRepository, QuestionBody,
    RepositoryFile,
};
pub use test_case::{EvaluationType, RawTestCase, TestCase, TestCasesFile};
