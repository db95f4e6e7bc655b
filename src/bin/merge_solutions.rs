//! 合并三种语言的题解为 Markdown

use coding_question_factory::app::{self, Command};
use std::process::ExitCode;

fn main() -> ExitCode {
    app::run(Command::MergeSolutions)
}
