//! Line-oriented rendering surface.
//!
//! Each input line is one surface action. Rows are addressed by their
//! 1-based position in the current filtered view.

use std::io::{self, BufRead, Write};
use todo_core::{Clock, Filter, LocalStorage, TodoSession, ViewModel};

const ESCAPE: &str = ":esc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Toggle(usize),
    Edit(usize),
    Delete(usize),
    Filter(Filter),
    ClearCompleted,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl Action {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim()));

        match command {
            "add" | "a" => Ok(Self::Add(rest.to_string())),
            "toggle" | "t" => parse_row(rest).map(Self::Toggle),
            "edit" | "e" => parse_row(rest).map(Self::Edit),
            "delete" | "d" => parse_row(rest).map(Self::Delete),
            "filter" | "f" => rest
                .parse::<Filter>()
                .map(Self::Filter)
                .map_err(|err| ParseError(err.to_string())),
            "clear" => Ok(Self::ClearCompleted),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" => Ok(Self::Quit),
            "" => Err(ParseError("empty input".to_string())),
            other => Err(ParseError(format!("unknown command `{other}`"))),
        }
    }
}

fn parse_row(value: &str) -> Result<usize, ParseError> {
    match value.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(ParseError(format!("expected a row number, got `{value}`"))),
    }
}

/// Writes one paint of the list. `focused` is the id whose edit field takes
/// focus on this paint; its text is shown fully selected.
pub fn render(out: &mut impl Write, view: &ViewModel<'_>, focused: Option<&str>) -> io::Result<()> {
    let tabs: Vec<String> = Filter::ALL
        .iter()
        .map(|filter| {
            if *filter == view.filter {
                format!("[{}]", filter.label())
            } else {
                filter.label().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    if view.rows.is_empty() {
        writeln!(out, "  (nothing here)")?;
    }
    for (index, task) in view.rows.iter().enumerate() {
        let mark = if task.completed { "x" } else { " " };
        if task.editing {
            let selected = if focused == Some(task.id.as_str()) {
                format!("\x1b[7m{}\x1b[0m", task.title)
            } else {
                task.title.clone()
            };
            writeln!(out, "{:>3}. [{mark}] edit> {selected}", index + 1)?;
        } else {
            writeln!(out, "{:>3}. [{mark}] {}", index + 1, task.title)?;
        }
    }

    let mut footer = view.items_left_label();
    if view.show_clear_completed() {
        footer.push_str(&format!(" | clear ({} completed)", view.completed));
    }
    writeln!(out, "{footer}")
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "add <text> | toggle <n> | edit <n> | delete <n>")?;
    writeln!(out, "filter all|active|completed | clear | quit")?;
    writeln!(out, "while editing: <text> commits, {ESCAPE} cancels")
}

/// Drives `session` from `input` until `quit` or end of input.
pub fn run<S: LocalStorage, C: Clock>(
    session: &mut TodoSession<S, C>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    paint(session, out)?;

    for line in input.lines() {
        let line = line?;

        if let Some(id) = session.store().editing_id().map(str::to_string) {
            if line.trim() == ESCAPE {
                session.cancel_edit(&id);
            } else {
                session.commit_edit(&id, &line);
            }
            paint(session, out)?;
            continue;
        }

        match Action::parse(&line) {
            Ok(Action::Quit) => return Ok(()),
            Ok(Action::Help) => write_help(out)?,
            Ok(action) => {
                if let Err(message) = apply(session, action) {
                    writeln!(out, "! {message}")?;
                }
            }
            Err(ParseError(message)) => writeln!(out, "! {message}")?,
        }
        paint(session, out)?;
    }

    // End of input while editing is a blur: commit the field as shown.
    if let Some(task) = session
        .store()
        .editing_id()
        .and_then(|id| session.store().get(id))
        .cloned()
    {
        session.commit_edit(&task.id, &task.title);
    }
    Ok(())
}

fn apply<S: LocalStorage, C: Clock>(
    session: &mut TodoSession<S, C>,
    action: Action,
) -> Result<(), String> {
    let row_id = |session: &TodoSession<S, C>, row: usize| {
        session
            .view()
            .rows
            .get(row - 1)
            .map(|task| task.id.clone())
            .ok_or_else(|| format!("no row {row}"))
    };

    match action {
        Action::Add(title) => {
            if session.add(&title).is_none() {
                return Err("title is empty".to_string());
            }
        }
        Action::Toggle(row) => {
            let id = row_id(session, row)?;
            session.toggle(&id);
        }
        Action::Edit(row) => {
            let id = row_id(session, row)?;
            session.start_edit(&id);
        }
        Action::Delete(row) => {
            let id = row_id(session, row)?;
            session.delete(&id);
        }
        Action::Filter(filter) => session.set_filter(filter),
        Action::ClearCompleted => {
            if !session.view().show_clear_completed() {
                return Err("nothing completed".to_string());
            }
            session.clear_completed();
        }
        Action::Help | Action::Quit => {}
    }
    Ok(())
}

fn paint<S: LocalStorage, C: Clock>(
    session: &mut TodoSession<S, C>,
    out: &mut impl Write,
) -> io::Result<()> {
    let focused = session.take_focus_request();
    render(out, &session.view(), focused.as_deref())?;
    out.flush()
}
