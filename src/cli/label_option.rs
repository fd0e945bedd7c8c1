use clap::Args;

use crate::cli::OutputFormat;
use crate::core::annotation::AnnotationLabelsSource;

#[derive(Args)]
pub struct LabelOptionArgs {
    /// Label source as written in the workflow config (e.g. "sequence_headers")
    #[arg(required = true)]
    pub source: String,
}

pub fn run(args: LabelOptionArgs, format: OutputFormat) -> anyhow::Result<()> {
    let source: AnnotationLabelsSource = args.source.parse()?;
    let option = source.to_annotation_cmd_option();
    tracing::debug!(%source, option, "Resolved annotation label option");

    match format {
        OutputFormat::Text => println!("{option}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "option": option,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("source\toption");
            println!("{source}\t{option}");
        }
    }

    Ok(())
}
