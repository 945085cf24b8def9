use super::types::{CommitRecord, FormatOptions, OutputFormat};

/// Formats one raw `subject|author|date` log line into a text block.
///
/// Returns an empty string for lines with fewer than three fields, so the
/// caller can drop them. Otherwise the block is the message line followed
/// by an indented date line and then an indented author line, each only
/// when requested.
pub fn format_commit_line(line: &str, options: &FormatOptions) -> String {
    CommitRecord::parse(line).map_or_else(String::new, |record| format_record(&record, options))
}

fn format_record(record: &CommitRecord, options: &FormatOptions) -> String {
    let mut block = match options.format {
        OutputFormat::Markdown => format!("- **{}**", record.message),
        OutputFormat::Plaintext => format!("- {}", record.message),
    };

    if options.include_date {
        block.push_str("\n  - Date: ");
        block.push_str(&record.date);
    }
    if options.include_author {
        block.push_str("\n  - Author: ");
        block.push_str(&record.author);
    }

    block
}
