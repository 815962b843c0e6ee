//! In-source function-name pragma.
//!
//! A comment such as `// twlint functions: [tw, cx]` replaces the configured
//! function-name list for that file. The first matching comment wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern;

static PRAGMA: LazyLock<Regex> =
    LazyLock::new(|| pattern::literal(r"twlint\s+functions:\s*\[([^\]]+)\]"));

/// Function names from the first pragma among `comments`.
pub fn function_names<'a, I>(comments: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    comments.into_iter().find_map(parse)
}

fn parse(comment: &str) -> Option<Vec<String>> {
    let list = PRAGMA.captures(comment)?.get(1)?.as_str();
    Some(
        list.split(',')
            .map(|name| name.trim().replace(['"', '\''], ""))
            .filter(|name| !name.is_empty())
            .collect(),
    )
}
