/// Splits command lines on single spaces.
///
/// There is no quoting and no collapsing of repeated delimiters: `"a  b"`
/// is three arguments, the middle one empty.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    max_args: usize,
}

/// Arguments produced from one line. Dropped at the end of each dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgList {
    args: Vec<String>,
    truncated: bool,
}

impl Tokenizer {
    pub fn new(max_args: usize) -> Self {
        Self { max_args }
    }

    pub fn max_args(&self) -> usize {
        self.max_args
    }

    pub fn tokenize(&self, line: &str) -> ArgList {
        let mut parts = line.split(' ');
        let args: Vec<String> = parts
            .by_ref()
            .take(self.max_args)
            .map(str::to_owned)
            .collect();
        let truncated = parts.next().is_some();

        ArgList { args, truncated }
    }
}

impl ArgList {
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// First argument, or `""` for an empty list.
    pub fn command(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }

    /// Everything after the command name.
    pub fn rest(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }

    /// Whether input past the argument limit was discarded.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(line: &str) -> Vec<String> {
        Tokenizer::new(16).tokenize(line).args().to_vec()
    }

    #[test]
    fn test_single_spaces() {
        assert_eq!(split("setenv NAME value"), vec!["setenv", "NAME", "value"]);
    }

    #[test]
    fn test_double_space_yields_empty_token() {
        assert_eq!(split("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_edges_are_kept() {
        assert_eq!(split(" pwd "), vec!["", "pwd", ""]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_tabs_are_not_delimiters() {
        assert_eq!(split("cd\tdir"), vec!["cd\tdir"]);
    }

    #[test]
    fn test_stops_at_limit() {
        let list = Tokenizer::new(3).tokenize("a b c d e");
        assert_eq!(list.args(), ["a", "b", "c"]);
        assert!(list.truncated());

        let exact = Tokenizer::new(3).tokenize("a b c");
        assert!(!exact.truncated());
    }

    #[test]
    fn test_command_and_rest() {
        let list = Tokenizer::new(16).tokenize("cd sub");
        assert_eq!(list.command(), "cd");
        assert_eq!(list.rest(), ["sub"]);

        let empty = Tokenizer::new(0).tokenize("anything");
        assert_eq!(empty.command(), "");
        assert!(empty.rest().is_empty());
    }
}
