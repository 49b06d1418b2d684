pub mod history;
pub mod reader;
pub mod tokenizer;

pub use history::HistoryRing;
pub use reader::{BufSource, EditorSource, LineLimit, LineSource, LongLinePolicy};
pub use tokenizer::{ArgList, Tokenizer};
