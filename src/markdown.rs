use pulldown_cmark::{html, Event, Options, Parser, Tag};
use std::collections::HashMap;

/// Average adult reading speed used by [`reading_time`].
const WORDS_PER_MINUTE: usize = 200;

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// A heading in an article body, used to build a table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u32,
    pub text: String,

    /// The anchor id given to the heading by [`to_html`].
    pub id: String,
}

/// Converts markdown to HTML. Every heading gets an `id` attribute matching
/// the [`Heading::id`] reported by [`headings`] so a table of contents can
/// link to it.
pub fn to_html(markdown: &str) -> String {
    let events: Vec<Event> = Parser::new_ext(markdown, options()).collect();
    let mut ids = AnchorIds::default();
    let mut converted = Vec::with_capacity(events.len());
    for (i, ev) in events.iter().enumerate() {
        converted.push(match ev {
            // pulldown-cmark 0.8 can't attach attributes to headings, so the
            // heading tags are written as raw HTML instead.
            Event::Start(Tag::Heading(level)) => {
                let id = ids.next(&heading_text(&events[i + 1..]));
                Event::Html(format!("<h{} id=\"{}\">", level, id).into())
            }
            Event::End(Tag::Heading(level)) => Event::Html(format!("</h{}>\n", level).into()),
            _ => ev.clone(),
        });
    }

    let mut out = String::new();
    html::push_html(&mut out, converted.into_iter());
    out
}

/// Lists the headings of a markdown document in document order.
pub fn headings(markdown: &str) -> Vec<Heading> {
    let events: Vec<Event> = Parser::new_ext(markdown, options()).collect();
    let mut ids = AnchorIds::default();
    events
        .iter()
        .enumerate()
        .filter_map(|(i, ev)| match ev {
            Event::Start(Tag::Heading(level)) => {
                let text = heading_text(&events[i + 1..]);
                Some(Heading {
                    level: *level,
                    id: ids.next(&text),
                    text,
                })
            }
            _ => None,
        })
        .collect()
}

/// Counts the words of prose and code in a markdown document.
pub fn word_count(markdown: &str) -> usize {
    Parser::new_ext(markdown, options())
        .map(|ev| match ev {
            Event::Text(text) | Event::Code(text) => text.split_whitespace().count(),
            _ => 0,
        })
        .sum()
}

/// Estimates the reading time of a markdown document in whole minutes,
/// rounding up. Never less than one minute.
pub fn reading_time(markdown: &str) -> u32 {
    let minutes = (word_count(markdown) + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE;
    minutes.max(1) as u32
}

/// Collects the plain text of a heading whose start tag immediately precedes
/// `events`.
fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for ev in events {
        match ev {
            Event::End(Tag::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Hands out unique, slugified anchor ids. Repeated headings get `-1`, `-2`,
/// ... suffixes.
#[derive(Default)]
struct AnchorIds {
    seen: HashMap<String, usize>,
}

impl AnchorIds {
    fn next(&mut self, text: &str) -> String {
        let mut base = slug::slugify(text);
        if base.is_empty() {
            base = String::from("section");
        }
        let count = self.seen.entry(base.clone()).or_insert(0);
        let id = match *count {
            0 => base,
            n => format!("{}-{}", base, n),
        };
        *count += 1;
        id
    }
}
