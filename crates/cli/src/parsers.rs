use std::ffi::OsStr;

/// Wrapper type to parse sizes with optional suffixes (e.g. 512K, 1MiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeArg(pub u64);

impl std::str::FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        num.checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| format!("Size too large: {s}"))
    }
}

fn parse_with_suffix(s: &str) -> (&str, u64) {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const SUFFIXES: &[(&[&str], u64)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
    ];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}

/// Drop the empty items comma splitting leaves behind (`-f go,,rs,`).
///
/// An empty selector is never kept, even though the Go tool treated `""` as
/// a suffix every dotted file name ends with.
pub fn non_empty<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    items
        .into_iter()
        .filter(|item| !AsRef::<OsStr>::as_ref(item).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_arg_basic() {
        let size: SizeArg = "1024".parse().unwrap();
        assert_eq!(size.0, 1024);
    }

    #[test]
    fn test_size_arg_with_suffix() {
        let size: SizeArg = "512K".parse().unwrap();
        assert_eq!(size.0, 512 * 1024);

        let size: SizeArg = "2M".parse().unwrap();
        assert_eq!(size.0, 2 * 1024 * 1024);

        let size: SizeArg = "1G".parse().unwrap();
        assert_eq!(size.0, 1024 * 1024 * 1024);
    }

    #[test]
    fn test_size_arg_case_insensitive() {
        let size1: SizeArg = "1k".parse().unwrap();
        let size2: SizeArg = "1K".parse().unwrap();
        let size3: SizeArg = "1KB".parse().unwrap();
        let size4: SizeArg = "1KiB".parse().unwrap();
        assert_eq!(size1, size2);
        assert_eq!(size1, size3);
        assert_eq!(size1, size4);
    }

    #[test]
    fn test_size_arg_rejects_garbage() {
        assert!("abc".parse::<SizeArg>().is_err());
        assert!("-1K".parse::<SizeArg>().is_err());
        assert!("99999999999999G".parse::<SizeArg>().is_err());
    }

    #[test]
    fn test_non_empty_drops_blanks() {
        let items = non_empty(vec!["go".to_string(), String::new(), "rs".to_string()]);
        assert_eq!(items, vec!["go", "rs"]);
    }
}
