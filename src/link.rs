//! Repository link construction.

/// Build the browse URL for a file under the docs tree:
/// `<base_url>/tree/<branch>/<docs_prefix>/<folder_rel>/<file_name>`.
///
/// `folder_rel` is slash-separated and relative to the docs root. Empty
/// segments are dropped so no `//` appears in the result.
pub fn file_link(
    base_url: &str,
    branch: &str,
    docs_prefix: &str,
    folder_rel: &str,
    file_name: &str,
) -> String {
    let mut url = base_url.trim_end_matches('/').to_string();
    for seg in ["tree", branch, docs_prefix, folder_rel] {
        let seg = seg.trim_matches('/');
        if !seg.is_empty() {
            url.push('/');
            url.push_str(seg);
        }
    }
    url.push('/');
    url.push_str(file_name);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPO: &str = "https://github.com/Mash-Up-Android/Effective_Study";

    #[test]
    fn test_default_layout() {
        assert_eq!(
            file_link(REPO, "main", "docs", "A", "x.md"),
            "https://github.com/Mash-Up-Android/Effective_Study/tree/main/docs/A/x.md"
        );
    }

    #[test]
    fn test_nested_folder_and_trailing_slash() {
        assert_eq!(
            file_link(&format!("{}/", REPO), "main", "docs", "B/C", "y.txt"),
            format!("{}/tree/main/docs/B/C/y.txt", REPO)
        );
    }

    #[test]
    fn test_names_are_not_escaped() {
        assert_eq!(
            file_link("u", "dev", "notes/docs", "a_b", "[1] x.md"),
            "u/tree/dev/notes/docs/a_b/[1] x.md"
        );
    }
}
