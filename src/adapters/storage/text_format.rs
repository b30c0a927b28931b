//! Line-oriented conference text format.
//!
//! ```text
//! <conference name>
//! # <session name>,<session duration>
//! * <type>|<authors>|<title>[|<duration>]
//! # +++
//! * <type>|<authors>|<title>[|<duration>]
//! ```
//!
//! Reading is forgiving: a malformed session header, item line, duplicate or
//! item that does not fit is skipped and logged at debug level. Only a source
//! with no usable first line is rejected.

use thiserror::Error;
use tracing::debug;

use crate::domain::conference::Conference;
use crate::domain::foundation::{DomainError, Minutes, SessionId, ValidationError};
use crate::domain::proceedings::{AcceptedItem, ItemKind};
use crate::domain::session::Session;
use crate::ports::StorageError;

/// Header that opens the unscheduled items section.
pub const UNASSIGNED_MARKER: &str = "# +++";

const SESSION_PREFIX: char = '#';
const ITEM_PREFIX: char = '*';

/// Where item lines currently go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Before any header, or after a header that was skipped.
    Detached,
    Session(SessionId),
    Unassigned,
}

/// Why a single line contributed nothing.
#[derive(Debug, Error)]
enum LineError {
    #[error("session header needs exactly 'name,duration'")]
    MalformedSessionHeader,

    #[error("unknown item type '{0}'")]
    UnknownKind(String),

    #[error("{kind} line has {count} fields")]
    FieldCount { kind: ItemKind, count: usize },

    #[error("item line is not under a session or the unassigned section")]
    Detached,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Build a conference from file text. The result is clean.
///
/// # Errors
///
/// - `InvalidFormat` if the text is empty or the first line is not a usable name
pub fn parse_conference(text: &str) -> Result<Conference, StorageError> {
    let mut lines = text.lines().enumerate();
    let (_, name_line) = lines
        .next()
        .ok_or_else(|| StorageError::invalid_format("file is empty"))?;
    let mut conference = Conference::new(name_line.trim())
        .map_err(|e| StorageError::invalid_format(e.to_string()))?;

    let mut section = Section::Detached;
    for (index, raw) in lines {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }
        if line == UNASSIGNED_MARKER {
            section = Section::Unassigned;
        } else if let Some(header) = line.strip_prefix(SESSION_PREFIX) {
            section = match read_session(header).and_then(|s| add_session(&mut conference, s)) {
                Ok(id) => Section::Session(id),
                Err(err) => {
                    debug!(line = line_number, reason = %err, "Skipping session header");
                    Section::Detached
                }
            };
        } else if let Some(body) = line.strip_prefix(ITEM_PREFIX) {
            let placed =
                read_item(body).and_then(|item| place_item(&mut conference, section, item));
            if let Err(err) = placed {
                debug!(line = line_number, reason = %err, "Skipping item line");
            }
        } else {
            debug!(line = line_number, "Ignoring unrecognised line");
        }
    }

    conference.mark_clean();
    Ok(conference)
}

/// Render a conference as file text.
///
/// Sessions come in name order with their items in running order, followed
/// by the unassigned section in pool order.
pub fn render_conference(conference: &Conference) -> String {
    let mut lines = vec![conference.name().to_string()];

    for (index, session) in conference.sessions().iter().enumerate() {
        lines.push(format!(
            "{} {},{}",
            SESSION_PREFIX,
            session.name(),
            session.duration()
        ));
        let items = conference.items_in_session(index).unwrap_or_default();
        lines.extend(items.into_iter().map(item_line));
    }

    lines.push(UNASSIGNED_MARKER.to_string());
    lines.extend(conference.unassigned_items().map(item_line));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn item_line(item: &AcceptedItem) -> String {
    format!("{} {}", ITEM_PREFIX, item)
}

fn read_session(header: &str) -> Result<Session, LineError> {
    let parts: Vec<&str> = header.trim().split(',').map(str::trim).collect();
    let [name, duration] = parts.as_slice() else {
        return Err(LineError::MalformedSessionHeader);
    };
    if name.is_empty() || duration.is_empty() {
        return Err(LineError::MalformedSessionHeader);
    }
    let duration = Minutes::parse(duration)?;
    Ok(Session::new(*name, duration.value())?)
}

fn add_session(conference: &mut Conference, session: Session) -> Result<SessionId, LineError> {
    let id = session.id();
    conference.add_session(session)?;
    Ok(id)
}

fn read_item(body: &str) -> Result<AcceptedItem, LineError> {
    let fields: Vec<&str> = body.trim().split('|').map(str::trim).collect();
    let kind = ItemKind::from_label(fields[0])
        .ok_or_else(|| LineError::UnknownKind(fields[0].to_string()))?;

    let duration = match (kind, fields.len()) {
        (_, 3) => None,
        (ItemKind::Paper, 4) => Some(Minutes::parse(fields[3])?.value()),
        (kind, count) => return Err(LineError::FieldCount { kind, count }),
    };
    Ok(AcceptedItem::build(
        kind,
        fields[1].to_string(),
        fields[2].to_string(),
        duration,
    )?)
}

/// Adds `item` to the pool and, under a session header, schedules it there.
///
/// If scheduling fails the item is taken back out of the pool.
fn place_item(
    conference: &mut Conference,
    section: Section,
    item: AcceptedItem,
) -> Result<(), LineError> {
    let session_id = match section {
        Section::Detached => return Err(LineError::Detached),
        Section::Unassigned => None,
        Section::Session(id) => Some(id),
    };

    let item_index = conference.add_accepted_item(item)?;
    let Some(session_id) = session_id else {
        return Ok(());
    };
    let Some(session_index) = conference.sessions().position(|s| s.id() == session_id) else {
        conference.remove_accepted_item_at(item_index)?;
        return Err(LineError::Detached);
    };
    if let Err(err) = conference.assign_item_to_session(session_index, item_index) {
        conference.remove_accepted_item_at(item_index)?;
        return Err(err.into());
    }
    Ok(())
}
