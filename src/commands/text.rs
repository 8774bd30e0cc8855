use crate::areas::comparator::Comparator;
use crate::commands::render::OutputFormat;

impl Comparator {
    /// Compare two literal text arguments.
    pub async fn compare_text(
        &self,
        current: &str,
        suggested: &str,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        let result = self.engine().compare(current, suggested);

        self.render(&result, format, None).await
    }
}
