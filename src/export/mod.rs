pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use gongsa_ilbo_common::ParsedLog;
use std::path::Path;

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> std::path::PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let xlsx_path = output.join(format!("{}.xlsx", title));
        let json_path = output.join(format!("{}.json", title));
        (xlsx_path, json_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let xlsx_path = parent.join(format!("{}.xlsx", stem));
        let json_path = parent.join(format!("{}.json", stem));
        (xlsx_path, json_path)
    }
}

pub fn export_results(
    parsed: &ParsedLog,
    format: &ExportFormat,
    output: &Path,
    title: &str,
) -> Result<()> {
    match format {
        ExportFormat::Xlsx => {
            let path = output_path_for_format(output, title, "xlsx");
            excel::generate_excel(parsed, &path, title)?;
            println!("✔ Excel 저장: {}", path.display());
        }
        ExportFormat::Json => {
            let path = output_path_for_format(output, title, "json");
            std::fs::write(&path, parsed.to_json_pretty()?)?;
            println!("✔ JSON 저장: {}", path.display());
        }
        ExportFormat::Both => {
            let (xlsx_path, json_path) = output_paths_for_both(output, title);
            excel::generate_excel(parsed, &xlsx_path, title)?;
            println!("✔ Excel 저장: {}", xlsx_path.display());
            std::fs::write(&json_path, parsed.to_json_pretty()?)?;
            println!("✔ JSON 저장: {}", json_path.display());
        }
    }

    Ok(())
}
