//! Interactive session over a line-oriented console

use crate::render;
use guidance_catalog::{AnswerSet, RankSlot};
use guidance_session::{AdvanceOutcome, Navigator, SyncStatus, View};
use guidance_store::PersistenceAdapter;
use std::io::{BufRead, Write};

const CONSENT: &str = "\
This questionnaire helps you reflect on your goals, strengths and interests.
Your answers are stored under your name and class so you can come back to
your report later.";

/// Line reader and writer pair
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one trimmed line; `None` on end of input
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// 1-based menu number to 0-based index
fn pick(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}

fn option_index(input: &str) -> Option<u8> {
    pick(input).and_then(|i| u8::try_from(i).ok())
}

enum Flow {
    Continue,
    Quit,
}

/// Drive `nav` until the user quits or input ends
pub(crate) async fn session<P, R, W>(nav: &mut Navigator<P>, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    P: PersistenceAdapter,
    R: BufRead,
    W: Write,
{
    loop {
        let flow = match nav.view() {
            View::Home => home(nav, console)?,
            View::Identify => identify(nav, console).await?,
            View::CustomIdentify => register(nav, console).await?,
            View::Select => select(nav, console).await?,
            View::Answer => answer(nav, console).await?,
            View::Report => report(nav, console).await?,
        };
        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

macro_rules! read_or_quit {
    ($console:expr, $label:expr) => {
        match $console.prompt($label)? {
            None => return Ok(Flow::Quit),
            Some(line) if line == "q" => return Ok(Flow::Quit),
            Some(line) => line,
        }
    };
}

fn home<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    console.say("\nCareer guidance self-assessment")?;
    console.say(CONSENT)?;
    let line = read_or_quit!(console, "Do you agree to continue? [y/n]");
    if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") {
        nav.give_consent();
    }
    if let Err(e) = nav.begin() {
        console.say(format!("! {e}"))?;
    }
    Ok(Flow::Continue)
}

async fn identify<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    let classes: Vec<String> = nav.registry().classes().map(str::to_string).collect();
    if classes.is_empty() {
        console.say("No classes yet, please register.")?;
        nav.open_registration()?;
        return Ok(Flow::Continue);
    }

    console.say("\nClasses:")?;
    for (i, class) in classes.iter().enumerate() {
        console.say(format!("{:>2}. {class}", i + 1))?;
    }
    let line = read_or_quit!(console, "Class number, or n to register a new name");
    if line == "n" {
        nav.open_registration()?;
        return Ok(Flow::Continue);
    }
    let Some(class) = pick(&line).and_then(|i| classes.get(i)) else {
        console.say("! unknown class")?;
        return Ok(Flow::Continue);
    };

    let names = nav.registry().names(class).to_vec();
    for (i, name) in names.iter().enumerate() {
        console.say(format!("{:>2}. {name}", i + 1))?;
    }
    let line = read_or_quit!(console, "Your number, or n to register a new name");
    if line == "n" {
        nav.open_registration()?;
        return Ok(Flow::Continue);
    }
    match pick(&line).and_then(|i| names.get(i)) {
        Some(name) => {
            if let Err(e) = nav.identify_existing(class, name).await {
                console.say(format!("! {e}"))?;
            }
        }
        None => console.say("! unknown name")?,
    }
    Ok(Flow::Continue)
}

async fn register<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    let class = read_or_quit!(console, "Class");
    let name = read_or_quit!(console, "Name");
    if let Err(e) = nav.register_and_identify(&class, &name).await {
        console.say(format!("! {e}"))?;
    }
    Ok(Flow::Continue)
}

async fn select<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    if let Some(user) = nav.current() {
        console.say(format!("\nAssessments for {user}"))?;
    }
    if let SyncStatus::LocalOnly(e) | SyncStatus::Failed(e) = nav.sync_status() {
        console.say(format!("(not synced: {e})"))?;
    }
    let entries = nav.catalog();
    render::catalog(&mut console.output, &entries)?;

    let line = read_or_quit!(console, "Number to start, r report, u change user, l logout");
    let result = match line.as_str() {
        "r" => nav.open_report(),
        "u" => nav.change_user(),
        "l" => {
            nav.logout().await;
            Ok(())
        }
        other => match pick(other).and_then(|i| entries.get(i)) {
            Some(entry) => nav.start_assessment(entry.key).map(|_| ()),
            None => {
                console.say("! unknown choice")?;
                Ok(())
            }
        },
    };
    if let Err(e) = result {
        console.say(format!("! {e}"))?;
    }
    Ok(Flow::Continue)
}

async fn answer<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    let Some(questionnaire) = nav.questionnaire() else {
        nav.abandon()?;
        return Ok(Flow::Continue);
    };
    let ranked = matches!(questionnaire.answers(), AnswerSet::Ranked(_));
    let progress = questionnaire.progress();
    if let Some(view) = questionnaire.current_question() {
        render::question(&mut console.output, &view, progress)?;
    }

    let label = if ranked {
        "Rank best first (e.g. 2 1 3), slot=option, Enter to confirm, b back, x abandon"
    } else {
        "Option number, b back, x abandon"
    };
    let line = read_or_quit!(console, label);
    let result = match line.as_str() {
        "b" => nav.retreat().map(|_| ()),
        "x" => nav.abandon(),
        "" if ranked => confirm(nav, console).await,
        input if ranked => match input.split_once('=') {
            Some((slot, option)) => match (slot.parse::<RankSlot>(), option_index(option.trim())) {
                (Ok(slot), Some(option)) => nav.select_rank(slot, option),
                _ => {
                    console.say("! expected slot=option, e.g. first=2")?;
                    Ok(())
                }
            },
            None => rank_all(nav, console, input).await,
        },
        input => match option_index(input) {
            Some(option) => match nav.select_option(option) {
                Ok(()) => confirm(nav, console).await,
                Err(e) => Err(e),
            },
            None => {
                console.say("! expected an option number")?;
                Ok(())
            }
        },
    };
    if let Err(e) = result {
        console.say(format!("! {e}"))?;
    }
    Ok(Flow::Continue)
}

async fn rank_all<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
    input: &str,
) -> Result<(), guidance_session::NavigationError> {
    let options: Vec<Option<u8>> = input.split_whitespace().map(option_index).collect();
    if options.len() != RankSlot::ALL.len() || options.iter().any(Option::is_none) {
        console.say("! expected three option numbers").ok();
        return Ok(());
    }
    for (slot, option) in RankSlot::ALL.into_iter().zip(options.into_iter().flatten()) {
        nav.select_rank(slot, option)?;
    }
    confirm(nav, console).await
}

async fn confirm<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
) -> Result<(), guidance_session::NavigationError> {
    if let AdvanceOutcome::Completed(_) = nav.advance().await? {
        console.say("\nCompleted, here are your results.").ok();
    }
    Ok(())
}

async fn report<P: PersistenceAdapter, R: BufRead, W: Write>(
    nav: &mut Navigator<P>,
    console: &mut Console<R, W>,
) -> anyhow::Result<Flow> {
    console.say("")?;
    let report = nav.report()?;
    render::report(&mut console.output, &report, nav.focus())?;
    let line = read_or_quit!(console, "Enter to go back, l logout");
    if line == "l" {
        nav.logout().await;
    } else {
        nav.back_to_select()?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidance_catalog::{InstrumentKey, Registry};
    use guidance_test_utils::{seeded_registry, student, MemoryStore, CLASS, NAME};
    use std::io::Cursor;

    async fn run_script(store: MemoryStore, registry: Registry, script: &str) -> (Navigator<MemoryStore>, String) {
        let mut nav = Navigator::new(store, registry).await;
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        session(&mut nav, &mut console).await.unwrap();
        let output = String::from_utf8(console.output).unwrap();
        (nav, output)
    }

    #[tokio::test]
    async fn register_and_complete_goal() {
        let mut script = String::from("y\n3/1\nSomchai\n1\n");
        script.push_str(&"1\n".repeat(10));
        script.push_str("\nq\n");

        let (nav, output) = run_script(MemoryStore::new(), Registry::new(), &script).await;
        assert!(output.contains("score 5.00 (highest)"), "{output}");
        assert!(output.contains("[done]"));
        assert_eq!(nav.current(), Some(&student()));
        assert!(nav
            .adapter()
            .stored(&student().key())
            .await
            .unwrap()
            .is_completed(InstrumentKey::Goal));
    }

    #[tokio::test]
    async fn consent_is_required() {
        let (nav, output) = run_script(MemoryStore::new(), seeded_registry(), "n\n").await;
        assert!(output.contains("consent has not been given"));
        assert_eq!(nav.view(), View::Home);
    }

    #[tokio::test]
    async fn pick_existing_student_and_rank_readiness() {
        let mut script = String::from("y\n1\n1\n5\n");
        // First question through slot=option, the rest in one line each.
        script.push_str("first=3\nsecond=2\nthird=1\n\n");
        script.push_str(&"3 2 1\n".repeat(17));
        script.push_str("q\n");

        let (nav, output) = run_script(MemoryStore::new(), seeded_registry(), &script).await;
        assert_eq!(nav.current().map(|s| s.name()), Some(NAME));
        assert_eq!(nav.current().map(|s| s.class()), Some(CLASS));
        assert!(output.contains("Completed, here are your results."), "{output}");
        assert_eq!(nav.view(), View::Report);
    }

    #[tokio::test]
    async fn invalid_input_is_reported_and_retried() {
        let script = "y\n3/1\nAnn\n1\n9\nfoo\nx\nq\n";
        let (nav, output) = run_script(MemoryStore::new(), Registry::new(), script).await;
        assert!(output.contains("out of range"));
        assert!(output.contains("expected an option number"));
        assert_eq!(nav.view(), View::Select);
    }
}
