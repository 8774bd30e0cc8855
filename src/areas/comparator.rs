use crate::areas::workspace::Workspace;
use crate::artifacts::diff::engine::{DiffEngine, DiffOptions};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// The command façade: owns the configured engine, the workspace the input
/// paths resolve against, and the writer all command output goes to.
///
/// The writer is injected so commands render identically to stdout, to the
/// pager, or to a test buffer.
pub struct Comparator {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    engine: DiffEngine,
}

impl Comparator {
    pub fn new(
        path: &str,
        options: DiffOptions,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Comparator {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            engine: DiffEngine::new(options),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn engine(&self) -> &DiffEngine {
        &self.engine
    }
}
