//! The `vista explore` command - menu-driven session over the three topics.
//!
//! Drives the same session state machine as the library API: edit a topic's
//! query, search, page through results, and pick one image per topic. The
//! chosen images are shown with their full-resolution URL and attribution.

use console::Style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use vista_core::{Config, Orientation, Phase, SearchError, SearchSession, Topic};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &[
    "Edit query",
    "Search",
    "Next page",
    "Previous page",
    "Select image",
    "Switch topic",
    "Orientation filter",
    "Show selections",
    "Exit",
];

const TOPIC_ITEMS: &[&str] = &["City", "Attraction", "Second attraction"];

const ORIENTATION_ITEMS: &[&str] = &["Any", "Landscape", "Portrait"];

/// Entry point for the interactive session.
pub async fn execute(config: &Config) -> anyhow::Result<()> {
    let mut session = SearchSession::from_config(config)?;
    let mut topic = Topic::City;
    let mut orientation: Option<Orientation> = None;

    let providers: Vec<String> = session
        .provider_kinds()
        .iter()
        .map(ToString::to_string)
        .collect();
    let dim = Style::new().for_stderr().dim();
    eprintln!("{}", dim.apply_to(format!("Searching {}", providers.join(" + "))));

    let theme = ColorfulTheme::default();

    loop {
        render_topic(&session, topic, orientation);

        let choice = Select::with_theme(&theme)
            .with_prompt(format!("{topic}"))
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => {
                let text = handle_interrupt(
                    Input::<String>::with_theme(&theme)
                        .with_prompt(format!("{topic} query"))
                        .with_initial_text(session.query(topic).to_string())
                        .allow_empty(true)
                        .interact_text(),
                )?;
                if let Some(text) = text {
                    session.set_query(topic, text.trim());
                }
            }
            Some(1) => match session.search(topic, orientation).await {
                Ok(()) => {}
                Err(SearchError::EmptyQuery) => {
                    eprintln!("Please fill in the search fields first.");
                }
                Err(e) => eprintln!("Search failed: {e}"),
            },
            Some(2) => session.next_page(topic),
            Some(3) => session.prev_page(topic),
            Some(4) => select_image(&theme, &mut session, topic)?,
            Some(5) => {
                let picked = Select::with_theme(&theme)
                    .with_prompt("Topic")
                    .items(TOPIC_ITEMS)
                    .default(0)
                    .interact_opt()?;
                if let Some(index) = picked {
                    topic = Topic::ALL[index];
                }
            }
            Some(6) => {
                let picked = Select::with_theme(&theme)
                    .with_prompt("Orientation")
                    .items(ORIENTATION_ITEMS)
                    .default(0)
                    .interact_opt()?;
                orientation = match picked {
                    Some(1) => Some(Orientation::Landscape),
                    Some(2) => Some(Orientation::Portrait),
                    _ => None,
                };
            }
            Some(7) => show_selections(&session),
            Some(8) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Print the topic's current page, phase, and any provider failure.
fn render_topic(session: &SearchSession, topic: Topic, orientation: Option<Orientation>) {
    let cyan = Style::new().for_stderr().cyan();
    let dim = Style::new().for_stderr().dim();
    let red = Style::new().for_stderr().red();

    eprintln!();
    let filter_note = match orientation {
        Some(Orientation::Landscape) => " [landscape]",
        Some(Orientation::Portrait) => " [portrait]",
        None => "",
    };
    eprintln!(
        "  {} {}{}",
        cyan.apply_to(format!("{topic}:")),
        if session.query(topic).is_empty() {
            "(no query)".to_string()
        } else {
            format!("\"{}\"", session.query(topic))
        },
        dim.apply_to(filter_note)
    );

    if let Some(error) = session.last_error(topic) {
        eprintln!("  {}", red.apply_to(error));
    }

    if session.phase(topic) != Phase::Ready {
        return;
    }

    let page = session.result_page(topic);
    if page.total_count == 0 {
        eprintln!("  {}", dim.apply_to("No results."));
        return;
    }

    eprintln!(
        "  {}",
        dim.apply_to(format!(
            "Page {}/{} of {} results",
            page.current_page,
            page.last_page(),
            page.total_count
        ))
    );
    for (i, record) in page.records.iter().enumerate() {
        let marker = if session
            .selection(topic)
            .is_some_and(|s| s.id == record.id)
        {
            "*"
        } else {
            " "
        };
        eprintln!(
            "  {marker}{}. [{}] {}",
            i + 1,
            record.provider,
            record.description.as_deref().unwrap_or("(no description)"),
        );
        eprintln!("      {}", dim.apply_to(&record.thumbnail_url));
    }
}

/// Prompt for a record on the current page and record it as the selection.
fn select_image(
    theme: &ColorfulTheme,
    session: &mut SearchSession,
    topic: Topic,
) -> anyhow::Result<()> {
    let page = session.result_page(topic);
    if page.records.is_empty() {
        eprintln!("Nothing to select - run a search first.");
        return Ok(());
    }

    let labels: Vec<String> = page
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}", i + 1, r.attribution))
        .collect();

    let picked = Select::with_theme(theme)
        .with_prompt("Select image")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    if let Some(index) = picked {
        if let Some(record) = session.select(topic, index) {
            let green = Style::new().for_stderr().green();
            eprintln!("{}", green.apply_to(format!("Selected: {}", record.full_url)));
        }
    }
    Ok(())
}

/// Print each topic's selected image at full resolution with attribution.
fn show_selections(session: &SearchSession) {
    let label = Style::new().for_stderr().bold();
    let dim = Style::new().for_stderr().dim();

    eprintln!();
    for topic in Topic::ALL {
        match session.selection(topic) {
            Some(record) => {
                eprintln!("  {:<20} {}", label.apply_to(format!("{topic}:")), record.full_url);
                eprintln!("  {:<20} By {}", "", dim.apply_to(&record.attribution));
            }
            None => {
                eprintln!(
                    "  {:<20} {}",
                    label.apply_to(format!("{topic}:")),
                    dim.apply_to("(none)")
                );
            }
        }
    }
}
