use crate::document::{DisclaimerBlock, DisclaimerGroup};

pub fn extract(content: &str) -> DisclaimerBlock {
    let mut groups = Vec::new();
    let mut current = DisclaimerGroup::default();

    for line in content.lines().map(str::trim) {
        if line.ends_with(':') && !line.starts_with('•') {
            flush(&mut groups, std::mem::take(&mut current));
            current.title = line.trim_end_matches(':').to_string();
        } else if !line.is_empty() {
            current.lines.push(line.to_string());
        }
    }
    flush(&mut groups, current);

    DisclaimerBlock { groups }
}

fn flush(groups: &mut Vec<DisclaimerGroup>, group: DisclaimerGroup) {
    if !group.title.is_empty() || !group.lines.is_empty() {
        groups.push(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group(title: &str, lines: &[&str]) -> DisclaimerGroup {
        DisclaimerGroup {
            title: title.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn titled_groups() {
        let d = extract("Eligibility:\nMust be 18+.\nRegion:\nUK only.");
        assert_eq!(d.groups, vec![group("Eligibility", &["Must be 18+."]), group("Region", &["UK only."])]);
    }

    #[test]
    fn leading_lines_form_untitled_group() {
        let d = extract("Gambling can be addictive.\n\nPlay responsibly.\nHelp:\n• GamCare\n• BeGambleAware");
        assert_eq!(
            d.groups,
            vec![
                group("", &["Gambling can be addictive.", "Play responsibly."]),
                group("Help", &["• GamCare", "• BeGambleAware"]),
            ]
        );
    }

    #[test]
    fn bullet_ending_in_colon_is_content() {
        let d = extract("Contacts:\n• Phone:");
        assert_eq!(d.groups, vec![group("Contacts", &["• Phone:"])]);
    }

    #[test]
    fn title_without_lines_is_kept() {
        let d = extract("Terms:\nPrivacy:\nWe never sell data.");
        assert_eq!(d.groups, vec![group("Terms", &[]), group("Privacy", &["We never sell data."])]);
    }

    #[test]
    fn title_keeps_space_before_colon() {
        let d = extract("Terms :\nSee site.");
        assert_eq!(d.groups, vec![group("Terms ", &["See site."])]);
    }

    #[test]
    fn empty_content() {
        assert!(extract("").groups.is_empty());
    }
}
