//! Unix `ls -l` style FTP listing parsing.

/// Extracts the filename field from classic 9-field listing lines
/// (permissions, link count, owner, group, size, month, day, year/time,
/// name).
///
/// A line is split on runs of whitespace at most 8 times, so the 9th field
/// is "the rest of the line": names with embedded spaces survive intact,
/// and symlink arrows (`name -> target`) are NOT trimmed. Lines that do not
/// produce all 9 fields are skipped. Both are deliberate, matching the
/// classic listing format this parser targets.
pub(super) fn extract(content: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(content);
    text.lines()
        .filter_map(ninth_field)
        .map(str::to_string)
        .collect()
}

/// Returns the 9th whitespace-delimited field of `line`, or None if the
/// line has fewer than 9 fields.
fn ninth_field(line: &str) -> Option<&str> {
    let mut rest = line.trim_start();
    if rest.is_empty() {
        return None;
    }
    // Consume the 8 metadata fields; whatever remains is the name.
    for _ in 0..8 {
        let end = rest.find(char::is_whitespace)?;
        rest = rest[end..].trim_start();
        if rest.is_empty() {
            return None;
        }
    }
    Some(rest.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_nine_field_line() {
        let listing = b"-rw-r--r-- 1 ftp ftp 1024 Jan 1 2024 readme.txt\n";
        assert_eq!(extract(listing), vec!["readme.txt"]);
    }

    #[test]
    fn short_lines_contribute_nothing() {
        let listing = b"total 42\n-rw-r--r-- 1 ftp ftp 5\n\n";
        assert!(extract(listing).is_empty());
    }

    #[test]
    fn eight_field_line_skipped() {
        // One field short of qualifying.
        let listing = b"-rw-r--r-- 1 ftp ftp 1024 Jan 1 2024\n";
        assert!(extract(listing).is_empty());
    }

    #[test]
    fn mixed_lines_keep_file_order() {
        let listing = concat!(
            "total 3\n",
            "-rw-r--r-- 1 ftp ftp 1024 Jan 1 2024 first.txt\n",
            "garbage line\n",
            "drwxr-xr-x 2 ftp ftp 4096 Feb 2 13:37 second\n",
            "-rw-r--r-- 1 ftp ftp 2048 Mar 3 2024 third.iso\n",
        );
        assert_eq!(extract(listing.as_bytes()), vec!["first.txt", "second", "third.iso"]);
    }

    #[test]
    fn symlink_arrow_stays_in_name() {
        let listing = b"lrwxrwxrwx 1 ftp ftp 11 Jan 1 2024 current -> ./14.1-RELEASE\n";
        assert_eq!(extract(listing), vec!["current -> ./14.1-RELEASE"]);
    }

    #[test]
    fn name_with_spaces_survives() {
        let listing = b"-rw-r--r-- 1 ftp ftp 9 Jan 1 2024 release notes.txt\n";
        assert_eq!(extract(listing), vec!["release notes.txt"]);
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        let listing = b"-rw-r--r--   12 ftp    ftp     1048576 Jan  1  2024 base.txz\n";
        assert_eq!(extract(listing), vec!["base.txz"]);
    }

    #[test]
    fn duplicates_preserved() {
        let listing = concat!(
            "-rw-r--r-- 1 ftp ftp 1 Jan 1 2024 same.txt\n",
            "-rw-r--r-- 1 ftp ftp 2 Jan 2 2024 same.txt\n",
        );
        assert_eq!(extract(listing.as_bytes()), vec!["same.txt", "same.txt"]);
    }
}
