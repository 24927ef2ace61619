use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::{SplitExt, SplitMode};

fn naive(source: &str, delimiters: &[char], mode: SplitMode) -> Vec<String> {
    source
        .split(|c: char| delimiters.contains(&c))
        .filter(|segment| mode == SplitMode::KeepEmpty || !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

fn mode_from(remove_empty: bool) -> SplitMode {
    if remove_empty {
        SplitMode::RemoveEmpty
    } else {
        SplitMode::KeepEmpty
    }
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn split_matches_naive_split(source: String, delimiters: Vec<char>, remove_empty: bool) -> bool {
    let mode = mode_from(remove_empty);
    let actual: Vec<String> = source
        .split_by(&delimiters, mode)
        .map(str::to_owned)
        .collect();
    actual == naive(&source, &delimiters, mode)
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn segments_joined_with_delimiter_restore_source(parts: Vec<String>) -> TestResult {
    if parts.iter().any(|part| part.contains('|')) {
        return TestResult::discard();
    }
    let joined = parts.join("|");
    let back: Vec<&str> = joined.split_by(&['|'], SplitMode::KeepEmpty).collect();
    // `join` of nothing and of one empty part both give "".
    if parts.is_empty() {
        return TestResult::from_bool(back == [""]);
    }
    TestResult::from_bool(back == parts)
}
