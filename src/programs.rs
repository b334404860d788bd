//! Precompiled contract program loading
//!
//! The decision ("vote") and queue contracts each ship as a pair of
//! compiled TEAL binaries: an approval program and a clear-state program.
//! They are opaque blobs to the SDK. Load them once at startup from the
//! configured paths and pass the result explicitly to whatever deploys
//! contracts; there is no module-level program state.

use anyhow::{Context, Result};

use crate::config::ProgramsConfig;

/// One contract's compiled approval + clear-state pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    pub approval: Vec<u8>,
    pub clear_state: Vec<u8>,
}

/// All program blobs the SDK's callers deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractPrograms {
    /// Decision (voting) contract
    pub vote: CompiledProgram,
    /// Queue contract
    pub queue: CompiledProgram,
}

impl ContractPrograms {
    /// Read all four program binaries from disk
    pub fn load(config: &ProgramsConfig) -> Result<Self> {
        Ok(Self {
            vote: CompiledProgram {
                approval: read_program(&config.vote_approval_path)?,
                clear_state: read_program(&config.vote_clear_path)?,
            },
            queue: CompiledProgram {
                approval: read_program(&config.queue_approval_path)?,
                clear_state: read_program(&config.queue_clear_path)?,
            },
        })
    }
}

fn read_program(path: &str) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read compiled program: {}", path))?;
    if bytes.is_empty() {
        anyhow::bail!("Compiled program is empty: {}", path);
    }
    Ok(bytes)
}
