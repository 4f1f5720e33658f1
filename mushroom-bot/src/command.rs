//! Inbound command classification.

/// Prefix of the list command.
pub const LIST_PREFIX: &str = "$list";
/// Prefix of the lookup command.
pub const MUSHROOM_PREFIX: &str = "$mushroom";

/// A recognised chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `$list`: show known aliases.
    List,
    /// `$mushroom [name]`: `Some(name)` looks up that name, `None` picks a random one.
    Mushroom(Option<String>),
}

impl Command {
    /// Classifies a message. Prefixes match case-insensitively at the very start of the text
    /// (`$listing` is still a list). The name is whatever follows the first space, trimmed.
    pub fn parse(content: &str) -> Option<Self> {
        let lower = content.to_lowercase();
        if lower.starts_with(LIST_PREFIX) {
            Some(Command::List)
        } else if lower.starts_with(MUSHROOM_PREFIX) {
            Some(Command::Mushroom(name_argument(content)))
        } else {
            None
        }
    }
}

fn name_argument(content: &str) -> Option<String> {
    let (_, rest) = content.split_once(' ')?;
    let name = rest.trim();
    (!name.is_empty()).then(|| name.to_string())
}
