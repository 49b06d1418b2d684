use crate::error::ShellError;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: Vec<(&'static str, Flag)>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    const fn switch(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Flag {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let flags = vec![
            ("help", Flag::switch("-h", "--help", "Print this help message")),
            (
                "version",
                Flag::switch("-v", "--version", "Show version information"),
            ),
            (
                "config",
                Flag {
                    takes_value: true,
                    ..Flag::switch("-c", "--config", "Read settings from this file")
                },
            ),
            (
                "quiet",
                Flag::switch("-q", "--quiet", "Suppress diagnostics on stderr"),
            ),
            (
                "debug",
                Flag::switch("-d", "--debug", "Echo parsed arguments and log at debug level"),
            ),
        ];

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            let flag = self
                .flags
                .iter_mut()
                .map(|(_, flag)| flag)
                .find(|flag| arg == flag.short || arg == flag.long)
                .ok_or_else(|| ShellError::Flag(format!("unknown option {}", arg)))?;

            if flag.takes_value {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| ShellError::Flag(format!("Flag {} requires a value", arg)))?;
                flag.value = Some(value.clone());
                i += 1;
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, flag)| flag.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: bsh [OPTIONS]");
        println!("\nOptions:");
        for (_, flag) in &self.flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
