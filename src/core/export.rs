use crate::core::serializer::serialize_card_list;
use crate::core::{ExportedFile, NamedCardList};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const FALLBACK_FILE_NAME: &str = "card-list.txt";

/// Turns a list name into a `.txt` file name that is safe on common filesystems.
pub fn export_file_name(list_name: &str) -> String {
    let cleaned: String = list_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim_matches('.').trim();

    if cleaned.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{}.txt", cleaned)
    }
}

pub fn export_list(list: &NamedCardList) -> ExportedFile {
    ExportedFile {
        file_name: export_file_name(list.name()),
        content: serialize_card_list(list.list()),
    }
}

/// Packs every list into one zip archive. Clashing file names get ` (2)`, ` (3)`... suffixes.
pub fn bundle_zip(lists: &[NamedCardList]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let mut used: HashMap<String, usize> = HashMap::new();

    for list in lists {
        let file = export_list(list);
        let file_name = unique_name(&mut used, &file.file_name);

        tracing::debug!("Adding {} to export archive", file_name);
        zip.start_file::<_, ()>(file_name, FileOptions::default())?;
        zip.write_all(file.content.as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn unique_name(used: &mut HashMap<String, usize>, file_name: &str) -> String {
    let count = used.entry(file_name.to_string()).or_insert(0);
    *count += 1;
    if *count == 1 {
        return file_name.to_string();
    }

    let stem = file_name.strip_suffix(".txt").unwrap_or(file_name);
    let mut n = *count;
    loop {
        let candidate = format!("{} ({}).txt", stem, n);
        if !used.contains_key(&candidate) {
            used.insert(candidate.clone(), 1);
            return candidate;
        }
        n += 1;
    }
}
