// src/extract/leader.rs

use tracing::trace;
use url::Url;

use super::segment::extract_named_link;
use crate::roster::{LeaderEntry, NamedLink};

/// En dash between title and person, raw or as an entity.
const SEPARATORS: &[&str] = &["\u{2013}", "&#x2013;", "&#X2013;", "&#8211;", "&ndash;"];

/// Turn one `Title – Person` segment into a [`LeaderEntry`].
///
/// Without a separator the whole segment is the title and the person is
/// empty.
pub fn parse_leader_segment(segment: &str, base: &Url) -> LeaderEntry {
    let (title_html, person_html) = split_title_person(segment);

    let raw_title = extract_named_link(title_html, base);
    let title = NamedLink {
        name: dedup_title(&raw_title.name),
        link: raw_title.link,
    };
    let person = extract_named_link(person_html, base);

    if person.name.is_empty() {
        trace!(title = %title.name, "segment has no person");
    }
    LeaderEntry { title, person }
}

/// Split on the earliest separator in text content. Dashes inside tags
/// (a link's `title="President (2017–present)"`) do not count.
pub fn split_title_person(segment: &str) -> (&str, &str) {
    match separator_at(segment) {
        Some((at, len)) => (&segment[..at], &segment[at + len..]),
        None => (segment, ""),
    }
}

fn separator_at(segment: &str) -> Option<(usize, usize)> {
    let mut in_tag = false;
    let mut quote: Option<char> = None;
    for (i, ch) in segment.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        if in_tag {
            match ch {
                '"' | '\'' => quote = Some(ch),
                '>' => in_tag = false,
                _ => {}
            }
            continue;
        }
        if ch == '<' {
            in_tag = true;
            continue;
        }
        let rest = &segment[i..];
        if let Some(sep) = SEPARATORS.iter().find(|sep| rest.starts_with(*sep)) {
            return Some((i, sep.len()));
        }
    }
    None
}

/// Collapse a title whose words repeat exactly twice ("President President").
///
/// Only an even word count whose halves match word for word is collapsed.
/// The halving repeats until it no longer applies, so collapsing an already
/// collapsed title is a no-op. Two distinct titles that happen to read the
/// same twice would be folded too; the table never lists one like that.
pub fn dedup_title(title: &str) -> String {
    let mut words: Vec<&str> = title.split_whitespace().collect();
    let mut collapsed = false;
    loop {
        let half = words.len() / 2;
        if half == 0 || words.len() % 2 != 0 || words[..half] != words[half..] {
            break;
        }
        words.truncate(half);
        collapsed = true;
    }
    if collapsed {
        words.join(" ")
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://en.wikipedia.org").unwrap()
    }

    #[test]
    fn splits_title_and_person() {
        let entry = parse_leader_segment(
            r#"<a href="/wiki/President_of_France">President</a> – <a href="/wiki/Emmanuel_Macron">Emmanuel Macron</a>"#,
            &base(),
        );
        assert_eq!(entry.title.name, "President");
        assert_eq!(entry.title.link, "https://en.wikipedia.org/wiki/President_of_France");
        assert_eq!(entry.person.name, "Emmanuel Macron");
        assert_eq!(entry.person.link, "https://en.wikipedia.org/wiki/Emmanuel_Macron");
    }

    #[test]
    fn entity_separators_split_too() {
        assert_eq!(split_title_person("King &#x2013; Charles"), ("King ", " Charles"));
        assert_eq!(split_title_person("King &ndash; Charles"), ("King ", " Charles"));
        assert_eq!(split_title_person("King &#8211; Charles"), ("King ", " Charles"));
    }

    #[test]
    fn only_first_separator_splits() {
        let (title, person) = split_title_person("Co-Prince – Emmanuel Macron – ex officio");
        assert_eq!(title, "Co-Prince ");
        assert_eq!(person, " Emmanuel Macron – ex officio");

        let (title, _) = split_title_person("A &ndash; B – C");
        assert_eq!(title, "A ");
    }

    #[test]
    fn dashes_inside_tags_do_not_split() {
        let segment = r#"<a href="/wiki/President_of_France" title="President (2017–present)">President</a> – <a href="/wiki/Emmanuel_Macron" title="Macron – bio">Emmanuel Macron</a>"#;
        let (title, _) = split_title_person(segment);
        assert!(title.ends_with("</a> "));

        let entry = parse_leader_segment(segment, &base());
        assert_eq!(
            entry.title,
            NamedLink::new("President", "https://en.wikipedia.org/wiki/President_of_France")
        );
        assert_eq!(
            entry.person,
            NamedLink::new("Emmanuel Macron", "https://en.wikipedia.org/wiki/Emmanuel_Macron")
        );

        assert_eq!(split_title_person(r#"<a title='a – b'>King</a>"#).1, "");
    }

    #[test]
    fn missing_separator_gives_empty_person() {
        let entry = parse_leader_segment("Supreme Leader", &base());
        assert_eq!(entry.title.name, "Supreme Leader");
        assert_eq!(entry.person, NamedLink::default());
    }

    #[test]
    fn doubled_title_collapses() {
        assert_eq!(dedup_title("President President"), "President");
        assert_eq!(dedup_title("Prime Minister Prime Minister"), "Prime Minister");
        assert_eq!(dedup_title("King King King King"), "King");

        let entry = parse_leader_segment(
            r#"<span style="display:none">President</span> President – <a href="/wiki/X">X</a>"#,
            &base(),
        );
        assert_eq!(entry.title.name, "President");
    }

    #[test]
    fn partial_or_odd_repeats_are_untouched() {
        assert_eq!(dedup_title("President"), "President");
        assert_eq!(dedup_title("King King King"), "King King King");
        assert_eq!(dedup_title("Prime Minister Prime Ministers"), "Prime Minister Prime Ministers");
        assert_eq!(dedup_title("Head of State"), "Head of State");
        assert_eq!(dedup_title(""), "");
    }

    #[test]
    fn dedup_is_idempotent() {
        for title in [
            "President President",
            "King King King King",
            "Prime Minister",
            "Emir of Emir of",
            "",
        ] {
            let once = dedup_title(title);
            assert_eq!(dedup_title(&once), once, "title {title:?}");
        }
    }

    #[test]
    fn citations_are_dropped_from_both_parts() {
        let entry = parse_leader_segment(
            r##"Sultan<sup><a href="#n1">[1]</a></sup> – Hassanal Bolkiah<sup>[2]</sup>"##,
            &base(),
        );
        assert_eq!(entry.title, NamedLink::new("Sultan", ""));
        assert_eq!(entry.person, NamedLink::new("Hassanal Bolkiah", ""));
    }
}
