use taskview::Command;

/// Maps a `KeyboardEvent.code` to a navigation command. Unbound keys map to `None`
/// and must keep their default browser behavior.
pub fn key_command(code: &str) -> Option<Command> {
    match code {
        "ArrowLeft" => Some(Command::StepLeft),
        "ArrowRight" => Some(Command::StepRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_only() {
        assert_eq!(key_command("ArrowLeft"), Some(Command::StepLeft));
        assert_eq!(key_command("ArrowRight"), Some(Command::StepRight));
        assert_eq!(key_command("ArrowUp"), None);
        assert_eq!(key_command("KeyA"), None);
        assert_eq!(key_command("arrowleft"), None);
    }
}
