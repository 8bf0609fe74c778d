//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::loader::{self, Document};
use crate::output::{Formatter, Report};
use sitelog_extractor::Extractor;
use std::sync::Arc;
use tracing::debug;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    // Every document is loaded before the engine starts
    let documents = if args.stdin {
        vec![loader::load_reader(std::io::stdin().lock(), "<stdin>")?]
    } else {
        args.files
            .iter()
            .map(|path| loader::load_file(path))
            .collect::<Result<Vec<_>>>()?
    };

    let extractor = Arc::new(Extractor::new(config.extractor.clone())?);
    let reports = extract_all(extractor, documents).await?;

    println!("{}", formatter.format_reports(&reports)?);
    Ok(())
}

/// Extract every document on the blocking pool, one task per document.
///
/// Reports come back in input order.
pub async fn extract_all(extractor: Arc<Extractor>, documents: Vec<Document>) -> Result<Vec<Report>> {
    let handles: Vec<_> = documents
        .into_iter()
        .map(|doc| {
            let extractor = Arc::clone(&extractor);
            tokio::task::spawn_blocking(move || {
                debug!("Extracting {}", doc.source);
                Report {
                    result: extractor.extract(&doc.text),
                    source: doc.source,
                }
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await?);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitelog_extractor::ExtractorConfig;

    fn document(source: &str, text: &str) -> Document {
        Document {
            source: source.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_reports_keep_input_order() {
        let extractor = Arc::new(Extractor::new(ExtractorConfig::default()).unwrap());
        let documents = vec![
            document("first.txt", "Daily Site Log - SEDRA Residential\n"),
            document("second.txt", ""),
            document("third.txt", "Daily Site Log - ALAROUS Coastal Development\n"),
        ];

        let reports = extract_all(extractor, documents).await.unwrap();
        let sources: Vec<&str> = reports.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["first.txt", "second.txt", "third.txt"]);
        assert_eq!(reports[0].result.site_name(), Some("SEDRA"));
        assert!(reports[1].result.is_empty());
        assert_eq!(reports[2].result.site_name(), Some("ALAROUS"));
    }

    #[tokio::test]
    async fn test_no_documents() {
        let extractor = Arc::new(Extractor::new(ExtractorConfig::default()).unwrap());
        let reports = extract_all(extractor, Vec::new()).await.unwrap();
        assert!(reports.is_empty());
    }
}
