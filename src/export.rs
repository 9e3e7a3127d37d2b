// CSV export of group results.
//
// Emits a UTF-8 BOM before the payload so spreadsheet tools that sniff the
// encoding decode non-ASCII names correctly.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

/// UTF-8 encoded byte-order marker.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no groups to export yet")]
    NoGroups,

    #[error("failed to encode group records: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render groups as CSV bytes: BOM, a `Group,Name` header, then one record
/// per (group, member) pair. Group labels are 1-based and group/member order
/// is preserved.
pub fn render_groups_csv(groups: &[Vec<String>]) -> Result<Vec<u8>, ExportError> {
    if groups.is_empty() {
        return Err(ExportError::NoGroups);
    }

    let mut buf = Vec::new();
    buf.extend_from_slice(UTF8_BOM);

    let mut writer = csv::Writer::from_writer(buf);
    writer.write_record(["Group", "Name"])?;
    for (index, members) in groups.iter().enumerate() {
        let label = format!("Group {}", index + 1);
        for name in members {
            writer.write_record([label.as_str(), name.as_str()])?;
        }
    }

    let buf = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(buf)
}

/// Build the export file name: `<prefix>_<YYYY-MM-DD>.csv`.
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// Write the groups CSV into `directory`, named with `prefix` and today's
/// date. Returns the path of the written file.
pub fn write_groups_csv(
    groups: &[Vec<String>],
    directory: &Path,
    prefix: &str,
) -> Result<PathBuf, ExportError> {
    let data = render_groups_csv(groups)?;
    std::fs::create_dir_all(directory)?;
    let path = directory.join(export_filename(prefix, chrono::Local::now().date_naive()));
    std::fs::write(&path, data)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(members: &[&[&str]]) -> Vec<Vec<String>> {
        members
            .iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn empty_groups_are_rejected() {
        assert!(matches!(
            render_groups_csv(&[]),
            Err(ExportError::NoGroups)
        ));
    }

    #[test]
    fn output_starts_with_utf8_bom() {
        let data = render_groups_csv(&groups(&[&["X"]])).unwrap();
        assert_eq!(&data[..3], UTF8_BOM);
    }

    #[test]
    fn single_group_layout() {
        let data = render_groups_csv(&groups(&[&["X", "Y"]])).unwrap();
        let text = std::str::from_utf8(&data[3..]).unwrap();
        assert_eq!(text, "Group,Name\nGroup 1,X\nGroup 1,Y\n");
    }

    #[test]
    fn group_indices_are_one_based_and_ordered() {
        let data = render_groups_csv(&groups(&[&["A", "B"], &["C"]])).unwrap();
        let text = std::str::from_utf8(&data[3..]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Group,Name", "Group 1,A", "Group 1,B", "Group 2,C"]
        );
    }

    #[test]
    fn non_ascii_names_survive_encoding() {
        let data = render_groups_csv(&groups(&[&["王小明", "李曉華"]])).unwrap();
        let text = std::str::from_utf8(&data[3..]).unwrap();
        assert!(text.contains("Group 1,王小明"));
        assert!(text.contains("Group 1,李曉華"));
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let data = render_groups_csv(&groups(&[&["Doe, Jane"]])).unwrap();
        let text = std::str::from_utf8(&data[3..]).unwrap();
        assert!(text.contains("\"Doe, Jane\""));
    }

    #[test]
    fn filename_carries_prefix_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(export_filename("groups", date), "groups_2026-03-01.csv");
    }

    #[test]
    fn write_creates_the_file_on_disk() {
        let dir = std::env::temp_dir().join(format!("namedraw_export_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let path = write_groups_csv(&groups(&[&["X"]]), &dir, "groups").unwrap();
        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[..3], UTF8_BOM);
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("groups_"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
