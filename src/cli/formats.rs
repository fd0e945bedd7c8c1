use crate::cli::OutputFormat;
use crate::core::annotation::AnnotationFormat;

pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    tracing::debug!(count = AnnotationFormat::ALL.len(), "Listing annotation formats");

    match format {
        OutputFormat::Text => {
            println!("Annotation formats ({}):\n", AnnotationFormat::ALL.len());
            for f in AnnotationFormat::ALL {
                let mut notes = Vec::new();
                if f.is_row_diff() {
                    notes.push("row-diff");
                }
                if f.is_relaxed() {
                    notes.push("relaxed");
                }
                if notes.is_empty() {
                    println!("  {f}");
                } else {
                    println!("  {:<22} ({})", f.as_str(), notes.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = AnnotationFormat::ALL
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "format": f,
                        "row_diff": f.is_row_diff(),
                        "relaxed": f.is_relaxed(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("format\trow_diff\trelaxed");
            for f in AnnotationFormat::ALL {
                println!("{}\t{}\t{}", f, f.is_row_diff(), f.is_relaxed());
            }
        }
    }

    Ok(())
}
