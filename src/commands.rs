// src/commands.rs

use crate::error::{DiaryError, Result};
use crate::models::DiaryRecord;
use crate::split::{compose_entry, split_entry};
use crate::store::DiaryStore;
use chrono::{Local, Utc};
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::Command;

/// Handles 'init'; the store is already open by the time this runs.
pub fn handle_init(db_path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "✓ Diary ready at: {}", db_path.display())?;
    Ok(())
}

/// Handles 'new'
pub fn handle_new(
    store: &mut DiaryStore,
    editor: &str,
    message: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let text = match message {
        Some(msg) => msg,
        None => open_in_editor(editor, "")?.trim_end().to_string(),
    };

    if text.trim().is_empty() {
        writeln!(out, "Empty entry, skipped.")?;
        return Ok(());
    }

    let (title, body) = split_entry(&text);
    let record = store.create(&title, &body, Utc::now())?;
    writeln!(out, "✓ Entry {} saved.", record.short_id())?;
    Ok(())
}

/// Handles 'list'. A store that cannot be read shows as empty.
pub fn handle_list(store: &DiaryStore, out: &mut impl Write) -> Result<()> {
    let records = store.list_all().unwrap_or_else(|e| {
        log::error!("could not load diary entries: {}", e);
        Vec::new()
    });

    if records.is_empty() {
        writeln!(out, "No entries.")?;
        return Ok(());
    }

    for record in &records {
        writeln!(
            out,
            "[{}] {}  {}",
            record.short_id(),
            display_date(record),
            record.title
        )?;
        let preview = record.preview();
        if !preview.is_empty() {
            writeln!(out, "  {}", preview)?;
        }
    }
    Ok(())
}

/// Handles 'show'
pub fn handle_show(store: &DiaryStore, id: &str, out: &mut impl Write) -> Result<()> {
    let record = store.find_by_prefix(id)?;
    writeln!(out, "[{}] {}", record.id, display_date(&record))?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "{}", record.title)?;
    let body = record.body.trim_start_matches(['\r', '\n']).trim_end();
    if !body.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", body)?;
    }
    Ok(())
}

/// Handles 'edit'
pub fn handle_edit(
    store: &mut DiaryStore,
    editor: &str,
    id: &str,
    message: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let record = store.find_by_prefix(id)?;
    let old_text = compose_entry(&record.title, &record.body);

    let new_text = match message {
        Some(msg) => msg,
        None => open_in_editor(editor, &old_text)?.trim_end().to_string(),
    };
    if new_text == old_text {
        writeln!(out, "No changes made.")?;
        return Ok(());
    }

    let (title, body) = split_entry(&new_text);
    store.update(&record.id, &title, &body)?;
    writeln!(out, "✓ Entry {} updated.", record.short_id())?;
    Ok(())
}

/// Handles 'del'. Without `yes`, both prompts must be answered with "y".
pub fn handle_del(
    store: &mut DiaryStore,
    id: &str,
    yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let record = store.find_by_prefix(id)?;

    if !yes {
        let first = format!(
            "Delete entry [{}] \"{}\"? (y/N): ",
            record.short_id(),
            record.title
        );
        if !confirm(&first, input, out)?
            || !confirm("This cannot be undone. Really delete it? (y/N): ", input, out)?
        {
            writeln!(out, "Cancelled.")?;
            return Ok(());
        }
    }

    store.delete(&record.id)?;
    writeln!(out, "✓ Entry {} deleted.", record.short_id())?;
    Ok(())
}

fn confirm(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

// `editor` may carry arguments, e.g. "code --wait".
fn open_in_editor(editor: &str, initial: &str) -> Result<String> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(DiaryError::EditorError)?;

    let mut temp_file = tempfile::NamedTempFile::new()?;
    temp_file.write_all(initial.as_bytes())?;
    temp_file.flush()?;

    let status = Command::new(program)
        .args(parts)
        .arg(temp_file.path())
        .status()?;
    if !status.success() {
        return Err(DiaryError::EditorError);
    }
    Ok(std::fs::read_to_string(temp_file.path())?)
}

fn display_date(record: &DiaryRecord) -> String {
    record
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
