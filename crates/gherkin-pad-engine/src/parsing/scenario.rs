use super::keyword::Keyword;

/// Title used when a document has no usable `Scenario:` line.
pub const FALLBACK_TITLE: &str = "Untitled Scenario";

/// Extracts the scenario title, falling back to [`FALLBACK_TITLE`].
pub fn extract_title(document: &str) -> String {
    extract_title_or(document, FALLBACK_TITLE)
}

/// Extracts the name from the first `Scenario:` line in `document`.
///
/// Any line may hold it, not only the first. The line must carry whitespace
/// after the colon and a non-blank name; lines that do not are skipped.
pub fn extract_title_or(document: &str, fallback: &str) -> String {
    document
        .split('\n')
        .find_map(scenario_name)
        .unwrap_or(fallback)
        .to_string()
}

/// Returns the trimmed name if `line` is a `Scenario: <name>` line.
pub fn scenario_name(line: &str) -> Option<&str> {
    let rest = line
        .trim_start()
        .strip_prefix(Keyword::Scenario.as_str())?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name = rest.trim();
    (!name.is_empty()).then_some(name)
}

/// True if `line` begins with `Scenario:` at column 0.
pub fn starts_scenario(line: &str) -> bool {
    line.starts_with(Keyword::Scenario.as_str())
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits a multi-scenario blob into one document per scenario.
///
/// A new document starts at a column-0 `Scenario:` line that opens the blob
/// or follows a blank line. Blank lines around each document are dropped and
/// documents left empty are discarded; every other line is kept verbatim.
/// Joining the output with `"\n\n"` and splitting again gives the same
/// documents.
pub fn split_scenarios(blob: &str) -> Vec<String> {
    let mut groups: Vec<Vec<&str>> = vec![];
    let mut current: Vec<&str> = vec![];
    let mut after_blank = true;

    for line in blob.split('\n') {
        if after_blank && starts_scenario(line) && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        after_blank = is_blank(line);
        current.push(line);
    }
    groups.push(current);

    let documents: Vec<String> = groups
        .iter()
        .filter_map(|lines| trim_blank_lines(lines))
        .collect();

    log::debug!("split import blob into {} scenario(s)", documents.len());
    documents
}

/// Joins `lines` without the blank lines at either end. The `'\r'` left by a
/// CRLF terminator on the last line goes with them.
fn trim_blank_lines(lines: &[&str]) -> Option<String> {
    let first = lines.iter().position(|l| !is_blank(l))?;
    let last = lines.iter().rposition(|l| !is_blank(l))?;
    let joined = lines[first..=last].join("\n");
    Some(joined.strip_suffix('\r').unwrap_or(&joined).to_string())
}
