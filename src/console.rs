//! Line-oriented host script read from stdin.
//!
//! ```text
//! connect <id> <name> <x> <y> <z> [permission...]
//! disconnect <id>
//! move <id> <x> <y> <z>
//! status <fps> <sleepers> <pve|pvp> [world size]
//! spawn <event> | kill <event>
//! cmd <id> <command> [args...]
//! ui <id> <button id>
//! event <key> <on|off>
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::str::FromStr;

use hudpanel_bridge::{ClientId, MessageToBackend, events::BuiltinEvent, world::Vec3};

const DEFAULT_WORLD_SIZE: f32 = 4000.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsoleError {
    #[error("unknown directive `{0}`")]
    UnknownDirective(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("invalid {name}: `{value}`")]
    InvalidValue { name: &'static str, value: String },
    #[error("unknown event `{0}`")]
    UnknownEvent(String),
}

struct Args<'a> {
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn word(&mut self, name: &'static str) -> Result<&'a str, ConsoleError> {
        self.words.next().ok_or(ConsoleError::MissingArgument(name))
    }

    fn parse<T: FromStr>(&mut self, name: &'static str) -> Result<T, ConsoleError> {
        let word = self.word(name)?;
        word.parse().map_err(|_| ConsoleError::InvalidValue {
            name,
            value: word.to_string(),
        })
    }

    fn client(&mut self) -> Result<ClientId, ConsoleError> {
        self.parse("client id")
    }

    fn position(&mut self) -> Result<Vec3, ConsoleError> {
        Ok(Vec3::new(self.parse("x")?, self.parse("y")?, self.parse("z")?))
    }

    fn event(&mut self) -> Result<BuiltinEvent, ConsoleError> {
        let key = self.word("event")?;
        BuiltinEvent::from_key(key).ok_or_else(|| ConsoleError::UnknownEvent(key.to_string()))
    }

    fn rest(self) -> Vec<String> {
        self.words.map(str::to_string).collect()
    }
}

/// Parses one script line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<MessageToBackend>, ConsoleError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(directive) = words.next() else {
        return Ok(None);
    };
    let mut args = Args { words };

    let message = match directive.to_lowercase().as_str() {
        "connect" => MessageToBackend::ClientConnected {
            client: args.client()?,
            display_name: args.word("name")?.to_string(),
            position: args.position()?,
            permissions: args.rest(),
        },
        "disconnect" => MessageToBackend::ClientDisconnected {
            client: args.client()?,
        },
        "move" => MessageToBackend::ClientMoved {
            client: args.client()?,
            position: args.position()?,
        },
        "status" => {
            let frame_rate = args.parse("frame rate")?;
            let sleepers = args.parse("sleeper count")?;
            let pve = match args.word("mode")?.to_lowercase().as_str() {
                "pve" => true,
                "pvp" => false,
                other => {
                    return Err(ConsoleError::InvalidValue {
                        name: "mode",
                        value: other.to_string(),
                    });
                }
            };
            let world_size = match args.words.clone().next() {
                Some(_) => args.parse("world size")?,
                None => DEFAULT_WORLD_SIZE,
            };
            MessageToBackend::HostStatus {
                frame_rate,
                sleepers,
                pve,
                world_size,
            }
        }
        "spawn" => MessageToBackend::EntitySpawned {
            event: args.event()?,
        },
        "kill" => MessageToBackend::EntityKilled {
            event: args.event()?,
        },
        "cmd" => MessageToBackend::Command {
            client: args.client()?,
            name: args.word("command")?.to_string(),
            args: args.rest(),
        },
        "ui" => {
            let client = args.client()?;
            let action = args.rest().join(" ");
            if action.is_empty() {
                return Err(ConsoleError::MissingArgument("button id"));
            }
            MessageToBackend::UiAction { client, action }
        }
        "event" => {
            let key = args.word("event key")?.to_string();
            let active = match args.word("state")?.to_lowercase().as_str() {
                "on" | "true" => true,
                "off" | "false" => false,
                other => {
                    return Err(ConsoleError::InvalidValue {
                        name: "state",
                        value: other.to_string(),
                    });
                }
            };
            MessageToBackend::ToggleCustomEvent { key, active }
        }
        "quit" | "exit" => MessageToBackend::Shutdown,
        other => return Err(ConsoleError::UnknownDirective(other.to_string())),
    };
    Ok(Some(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert!(matches!(parse_line(""), Ok(None)));
        assert!(matches!(parse_line("   # a comment"), Ok(None)));
    }

    #[test]
    fn connect_carries_position_and_permissions() {
        match parse_line("connect 7 alice 1 2.5 -3 hudpanelplus.use hudpanelplus.admin") {
            Ok(Some(MessageToBackend::ClientConnected {
                client,
                display_name,
                position,
                permissions,
            })) => {
                assert_eq!(client, 7);
                assert_eq!(display_name, "alice");
                assert_eq!(position, Vec3::new(1.0, 2.5, -3.0));
                assert_eq!(permissions, ["hudpanelplus.use", "hudpanelplus.admin"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn commands_keep_their_arguments() {
        match parse_line("cmd 3 announce add Hello there") {
            Ok(Some(MessageToBackend::Command { client, name, args })) => {
                assert_eq!(client, 3);
                assert_eq!(name, "announce");
                assert_eq!(args, ["add", "Hello", "there"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn status_defaults_the_world_size() {
        match parse_line("status 59.5 4 pve") {
            Ok(Some(MessageToBackend::HostStatus {
                frame_rate,
                sleepers,
                pve,
                world_size,
            })) => {
                assert_eq!(frame_rate, 59.5);
                assert_eq!(sleepers, 4);
                assert!(pve);
                assert_eq!(world_size, DEFAULT_WORLD_SIZE);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn events_and_shutdown() {
        assert!(matches!(
            parse_line("spawn CH47"),
            Ok(Some(MessageToBackend::EntitySpawned {
                event: BuiltinEvent::Ch47
            }))
        ));
        assert!(matches!(
            parse_line("event Heli2 on"),
            Ok(Some(MessageToBackend::ToggleCustomEvent { active: true, .. }))
        ));
        assert!(matches!(parse_line("QUIT"), Ok(Some(MessageToBackend::Shutdown))));
    }

    #[test]
    fn malformed_lines_are_reported() {
        assert_eq!(
            parse_line("teleport 1").err(),
            Some(ConsoleError::UnknownDirective("teleport".into()))
        );
        assert_eq!(
            parse_line("move 1 2 3").err(),
            Some(ConsoleError::MissingArgument("z"))
        );
        assert_eq!(
            parse_line("disconnect bob").err(),
            Some(ConsoleError::InvalidValue {
                name: "client id",
                value: "bob".into()
            })
        );
        assert_eq!(
            parse_line("spawn Dragon").err(),
            Some(ConsoleError::UnknownEvent("Dragon".into()))
        );
    }
}
