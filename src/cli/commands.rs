//! Non-interactive subcommands that print to stdout.

use std::io::Write;

use crate::error::Result;
use crate::i18n::{Language, LocaleTable, resolve};
use crate::models::{CategoryFilter, CategoryScope, Portfolio, filter_entries, numbered};

/// Print the numbered timeline after filtering.
pub fn print_timeline<W: Write>(
    out: &mut W,
    table: &LocaleTable,
    language: Language,
    education: bool,
    category: &str,
    query: &str,
) -> Result<usize> {
    let portfolio = Portfolio::build(table, language);
    let (entries, scope) = if education {
        (&portfolio.education, CategoryScope::Skipped)
    } else {
        (&portfolio.work, CategoryScope::Applies)
    };

    let filter = CategoryFilter::from_tag(category);
    let filtered = filter_entries(entries, &filter, query, scope);
    tracing::debug!(matched = filtered.len(), %filter, query, "timeline filtered");

    if filtered.is_empty() {
        writeln!(out, "{}", resolve(table, language, "about.noResults"))?;
        return Ok(0);
    }

    for (number, entry) in numbered(&filtered) {
        writeln!(out, "{:>2}) {}", number, entry.title)?;
        writeln!(out, "    {} • {} [{}]", entry.date, entry.organization, entry.category)?;
        if !entry.location.is_empty() {
            writeln!(out, "    {}", entry.location)?;
        }
        if !entry.tags.is_empty() {
            writeln!(out, "    {}", entry.tags.join(", "))?;
        }
    }
    Ok(filtered.len())
}

/// Print `key = text` for every key.
pub fn print_translations<W: Write>(
    out: &mut W,
    table: &LocaleTable,
    language: Language,
    keys: &[String],
) -> Result<()> {
    for key in keys {
        writeln!(out, "{} = {}", key, resolve(table, language, key))?;
    }
    Ok(())
}

/// Print parity gaps. Returns how many were found.
pub fn print_locale_gaps<W: Write>(out: &mut W, table: &LocaleTable) -> Result<usize> {
    let gaps = table.parity_gaps();
    if gaps.is_empty() {
        writeln!(out, "All keys are translated in every language.")?;
        return Ok(0);
    }
    for gap in &gaps {
        writeln!(
            out,
            "{}: present in {}, missing in {}",
            gap.key, gap.present_in, gap.missing_in
        )?;
    }
    Ok(gaps.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_timeline(language: Language, education: bool, category: &str, query: &str) -> (usize, String) {
        let mut out = Vec::new();
        let count = print_timeline(
            &mut out,
            &LocaleTable::builtin(),
            language,
            education,
            category,
            query,
        )
        .unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_print_timeline_counts_down() {
        let (count, output) = run_timeline(Language::En, false, "all", "");
        assert_eq!(count, 3);
        let first = output.find(" 3) Junior Full-Stack Developer").unwrap();
        let last = output.find(" 1) Freelance Full Stack Dev").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_print_timeline_category() {
        let (count, output) = run_timeline(Language::En, false, "internship", "");
        assert_eq!(count, 1);
        assert!(output.contains(" 1) Web Developer Intern"));
    }

    #[test]
    fn test_print_timeline_education_ignores_category() {
        let (count, _) = run_timeline(Language::Fr, true, "internship", "");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_print_timeline_no_results() {
        let (count, output) = run_timeline(Language::Fr, false, "all", "zzz-nothing");
        assert_eq!(count, 0);
        assert!(output.contains("Aucune expérience"));
    }

    #[test]
    fn test_print_translations_falls_back() {
        let mut out = Vec::new();
        let keys = vec!["nav.home".to_string(), "nav.nope".to_string()];
        print_translations(&mut out, &LocaleTable::builtin(), Language::En, &keys).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "nav.home = Home\nnav.nope = nav.nope\n");
    }

    #[test]
    fn test_print_locale_gaps() {
        let mut out = Vec::new();
        assert_eq!(print_locale_gaps(&mut out, &LocaleTable::builtin()).unwrap(), 0);

        let table = LocaleTable::from_json(r#"{"fr": {"a": {"b": "x"}}, "en": {}}"#).unwrap();
        let mut out = Vec::new();
        assert_eq!(print_locale_gaps(&mut out, &table).unwrap(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a.b: present in fr, missing in en\n"
        );
    }
}
