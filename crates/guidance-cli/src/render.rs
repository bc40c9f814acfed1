//! Plain-text rendering of catalog, questions and reports

use guidance_catalog::InstrumentKey;
use guidance_scoring::{CategoryScores, EqScore, InstrumentScore, Report, ReportEntry};
use guidance_session::{CatalogEntry, CurrentAnswer, Progress, QuestionView};
use std::io::{self, Write};

pub(crate) fn catalog<W: Write>(out: &mut W, entries: &[CatalogEntry]) -> io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        let badge = if entry.completed { "[done]" } else { "      " };
        writeln!(
            out,
            "{:>2}. {badge} {} ({} questions)",
            i + 1,
            entry.title,
            entry.questions
        )?;
    }
    Ok(())
}

pub(crate) fn question<W: Write>(out: &mut W, view: &QuestionView, progress: Progress) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Question {}/{} ({} answered)",
        view.number, progress.total, progress.answered
    )?;
    writeln!(out, "{}", view.text)?;
    for (i, option) in view.options.iter().enumerate() {
        let marker = match view.answer {
            CurrentAnswer::Option(Some(selected)) if usize::from(selected) == i => " *".to_string(),
            CurrentAnswer::Ranked(choice) => u8::try_from(i)
                .ok()
                .and_then(|o| choice.slot_of(o))
                .map(|slot| format!(" ({slot})"))
                .unwrap_or_default(),
            CurrentAnswer::Option(_) => String::new(),
        };
        writeln!(out, "  {}. {option}{marker}", i + 1)?;
    }
    Ok(())
}

fn categories<W: Write>(out: &mut W, scores: &CategoryScores, ranked: bool) -> io::Result<()> {
    let rows = if ranked {
        scores.ranked()
    } else {
        scores.iter().collect()
    };
    for (name, value) in rows {
        writeln!(out, "  {name:<22} {value:>5.2}")?;
    }
    Ok(())
}

fn eq<W: Write>(out: &mut W, score: &EqScore) -> io::Result<()> {
    for dimension in score.dimensions() {
        writeln!(
            out,
            "  {:<22} {:>3}  [{}-{}] {}",
            dimension.name,
            dimension.total,
            dimension.range.low,
            dimension.range.high,
            dimension.interpretation
        )?;
        for sub in &dimension.subdimensions {
            writeln!(
                out,
                "    {:<20} {:>3}  [{}-{}] {}",
                sub.name, sub.score, sub.range.low, sub.range.high, sub.interpretation
            )?;
        }
    }
    Ok(())
}

fn entry<W: Write>(out: &mut W, entry: &ReportEntry) -> io::Result<()> {
    writeln!(out, "{}", entry.title)?;
    match &entry.score {
        InstrumentScore::Goal(goal) => writeln!(out, "  score {:.2} ({})", goal.score, goal.label),
        InstrumentScore::Intelligence(scores) => categories(out, scores, true),
        InstrumentScore::Eq(score) => eq(out, score),
        InstrumentScore::Riasec(scores) => {
            categories(out, scores, false)?;
            let code: String = scores.ranked().iter().take(3).map(|(c, _)| *c).collect();
            writeln!(out, "  interest code {code}")
        }
        InstrumentScore::Readiness(scores) => categories(out, scores, false),
    }
}

/// Whole report, or only `focus` when given
pub(crate) fn report<W: Write>(out: &mut W, report: &Report, focus: Option<InstrumentKey>) -> io::Result<()> {
    if report.is_empty() {
        return writeln!(out, "No completed assessments yet.");
    }
    for e in report.entries.iter().filter(|e| focus.map_or(true, |k| k == e.key)) {
        entry(out, e)?;
    }
    for key in &report.skipped {
        writeln!(out, "{key}: stored answers could not be scored")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidance_catalog::ResultSet;
    use guidance_test_utils::{linear_answers, ranked_answers};

    fn rendered(results: &ResultSet, focus: Option<InstrumentKey>) -> String {
        let mut out = Vec::new();
        report(&mut out, &Report::build(results), focus).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn goal_line_shows_band() {
        let mut results = ResultSet::new();
        results.insert_once(InstrumentKey::Goal, linear_answers(InstrumentKey::Goal, 0));
        assert!(rendered(&results, None).contains("score 5.00 (highest)"));
    }

    #[test]
    fn focus_limits_output() {
        let mut results = ResultSet::new();
        results.insert_once(InstrumentKey::Goal, linear_answers(InstrumentKey::Goal, 0));
        results.insert_once(InstrumentKey::Readiness, ranked_answers(0, 1, 2));
        let text = rendered(&results, Some(InstrumentKey::Readiness));
        assert!(text.contains("Data"));
        assert!(!text.contains("highest"));
    }

    #[test]
    fn riasec_prints_interest_code() {
        let mut answers = vec![Some(2); 54];
        for i in (2..54).step_by(6) {
            answers[i] = Some(0); // A
        }
        for i in (5..54).step_by(6) {
            answers[i] = Some(1); // C
        }
        let mut results = ResultSet::new();
        results.insert_once(
            InstrumentKey::Riasec,
            guidance_catalog::AnswerSet::Linear(answers),
        );
        assert!(rendered(&results, None).contains("interest code ACR"));
    }

    #[test]
    fn empty_report_says_so() {
        assert_eq!(rendered(&ResultSet::new(), None), "No completed assessments yet.\n");
    }
}
