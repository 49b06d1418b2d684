use super::config::Config;
use super::env::EnvTable;
use super::workdir::WorkingDir;
use crate::input::HistoryRing;

/// Everything a session mutates, owned in one place and handed to each
/// builtin.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub env: EnvTable,
    pub cwd: WorkingDir,
    pub history: HistoryRing,
}

impl ShellState {
    /// Seeds from the process environment and `$HOME`.
    pub fn new(config: &Config) -> Self {
        Self {
            env: EnvTable::inherit(config.max_env, config.env_match),
            cwd: WorkingDir::from_home(),
            history: HistoryRing::new(config.history_size),
        }
    }

    pub fn with_parts(env: EnvTable, cwd: WorkingDir, history: HistoryRing) -> Self {
        Self { env, cwd, history }
    }
}
