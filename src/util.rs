/// Frame each line of `text` in an ASCII box, padded to the longest line.
///
/// ```
/// let b = questline::util::boxify_text("Hall\nAda");
/// assert_eq!(b, "+------+\n| Hall |\n| Ada  |\n+------+");
/// ```
pub fn boxify_text(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule = format!("+{}+", "-".repeat(width + 2));

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(rule.clone());
    for line in lines {
        out.push(format!("| {line:<width$} |"));
    }
    out.push(rule);
    out.join("\n")
}
