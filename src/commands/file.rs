use crate::areas::comparator::Comparator;
use crate::commands::render::OutputFormat;
use std::path::Path;

impl Comparator {
    /// Compare the current and suggested versions of a document read from
    /// two files. Both reads happen concurrently; a missing or unreadable
    /// file aborts the command with a descriptive error.
    pub async fn compare_files(
        &self,
        current_file: &Path,
        suggested_file: &Path,
        format: OutputFormat,
        output: Option<&Path>,
    ) -> anyhow::Result<()> {
        let (current_code, suggested_code) = tokio::try_join!(
            self.workspace().read_file(current_file),
            self.workspace().read_file(suggested_file),
        )?;

        let result = self.engine().compare(&current_code, &suggested_code);

        self.render(&result, format, output).await
    }
}
