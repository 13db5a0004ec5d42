//! Line-oriented session commands
//!
//! A session script is one command per line. Blank lines are skipped and `#` starts a
//! comment. Scripts drive [`ShowcaseApp`] on its virtual clock, so `advance` is the only
//! way time passes.
//!
//! ```text
//! navigate /toast
//! toast success
//! advance 3500      # the toast expires
//! render
//! ```

use crate::app::{AppEvent, ShowcaseApp};
use crate::error::{AppError, Result};
use serde_json::Value;
use showcase_cn::{ToastId, ToastSpec, ToastTone};
use showcase_theme::ColorScheme;
use std::str::FromStr;

/// One parsed line
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Event(AppEvent),
    /// Move the virtual clock forward
    Advance(u64),
    /// Switch to a scheme directly
    Theme(ColorScheme),
    /// Print the current page as HTML
    Render,
    /// Print a one-line summary of the app state
    Status,
}

fn invalid(command: &'static str, message: impl Into<String>) -> AppError {
    AppError::InvalidArgument {
        command,
        message: message.into(),
    }
}

fn rest(words: &[&str]) -> String {
    words.join(" ")
}

fn one<'a>(command: &'static str, words: &[&'a str]) -> Result<&'a str> {
    match words {
        [word] => Ok(*word),
        [] => Err(invalid(command, "missing argument")),
        _ => Err(invalid(command, "expected one argument")),
    }
}

fn number<T: FromStr>(command: &'static str, word: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    word.parse()
        .map_err(|err: T::Err| invalid(command, format!("`{word}`: {err}")))
}

fn on_off(command: &'static str, word: &str) -> Result<bool> {
    match word {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(invalid(command, format!("expected on/off, got `{other}`"))),
    }
}

fn tone(command: &'static str, word: &str) -> Result<ToastTone> {
    word.parse::<ToastTone>()
        .map_err(|err| invalid(command, format!("{err}")))
}

/// A field value: JSON when it parses, otherwise the raw text
fn field_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn parse_toast(words: &[&str]) -> Result<AppEvent> {
    match words {
        ["sticky"] => Ok(AppEvent::ToastSticky),
        ["show", t, ttl, title @ ..] => {
            let mut spec = ToastSpec::new()
                .tone(tone("toast", t)?)
                .timeout_ms(number("toast", ttl)?);
            if !title.is_empty() {
                spec = spec.title(rest(title));
            }
            Ok(AppEvent::ToastShow(spec))
        }
        [t] => Ok(AppEvent::ToastFire(tone("toast", t)?)),
        _ => Err(invalid(
            "toast",
            "expected `toast <tone>`, `toast sticky` or `toast show <tone> <ttl_ms> [title]`",
        )),
    }
}

fn parse_sub(command: &'static str, words: &[&str]) -> Result<AppEvent> {
    let event = match (command, words) {
        ("accordion", ["toggle", key @ ..]) if !key.is_empty() => {
            AppEvent::AccordionToggle(rest(key))
        }
        ("carousel", ["next"]) => AppEvent::CarouselNext,
        ("carousel", ["prev"]) => AppEvent::CarouselPrev,
        ("carousel", ["go", n]) => AppEvent::CarouselGoTo(number(command, n)?),
        ("carousel", ["swipe", from, to]) => AppEvent::CarouselSwipe {
            from: number(command, from)?,
            to: number(command, to)?,
        },
        ("chat", ["open"] | ["toggle"]) => AppEvent::ChatToggle,
        ("chat", ["input", text @ ..]) => AppEvent::ChatInput(rest(text)),
        ("chat", ["send"]) => AppEvent::ChatSend,
        ("wizard", ["set", key, value @ ..]) => AppEvent::WizardSet {
            key: key.to_string(),
            value: field_value(&rest(value)),
        },
        ("wizard", ["consent", flag]) => AppEvent::WizardConsent(on_off(command, flag)?),
        ("wizard", ["next"]) => AppEvent::WizardNext,
        ("wizard", ["back"]) => AppEvent::WizardBack,
        ("testimonial", ["next"]) => AppEvent::TestimonialNext,
        ("testimonial", ["prev"]) => AppEvent::TestimonialPrev,
        ("menu", ["toggle"]) => AppEvent::MenuToggle,
        _ => return Err(invalid(command, format!("unexpected `{}`", rest(words)))),
    };
    Ok(event)
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.split('#').next().unwrap_or_default();
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            return Err(AppError::UnknownCommand(String::new()));
        };

        let command = match head {
            "navigate" | "goto" => Command::Event(AppEvent::Navigate(one("navigate", args)?.to_string())),
            "back" => Command::Event(AppEvent::Back),
            "toggle-theme" => Command::Event(AppEvent::ToggleTheme),
            "theme" => Command::Theme(
                one("theme", args)?
                    .parse::<ColorScheme>()
                    .map_err(|err| invalid("theme", format!("{err}")))?,
            ),
            "advance" => Command::Advance(number("advance", one("advance", args)?)?),
            "render" => Command::Render,
            "status" => Command::Status,
            "toast" => Command::Event(parse_toast(args)?),
            "dismiss" => Command::Event(AppEvent::ToastDismiss(ToastId(number(
                "dismiss",
                one("dismiss", args)?,
            )?))),
            "clear-toasts" => Command::Event(AppEvent::ToastClear),
            "key" => match args {
                [key] => Command::Event(AppEvent::Key {
                    key: key.to_string(),
                    shift: false,
                }),
                [key, "shift"] => Command::Event(AppEvent::Key {
                    key: key.to_string(),
                    shift: true,
                }),
                _ => return Err(invalid("key", "expected `key <name> [shift]`")),
            },
            "accordion" => Command::Event(parse_sub("accordion", args)?),
            "carousel" => Command::Event(parse_sub("carousel", args)?),
            "chat" => Command::Event(parse_sub("chat", args)?),
            "wizard" => Command::Event(parse_sub("wizard", args)?),
            "testimonial" => Command::Event(parse_sub("testimonial", args)?),
            "menu" => Command::Event(parse_sub("menu", args)?),
            other => return Err(AppError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Whether a line holds a command at all
pub fn is_blank(line: &str) -> bool {
    line.split('#').next().unwrap_or_default().trim().is_empty()
}

/// Summary printed by `status`
pub fn status_line(app: &ShowcaseApp) -> String {
    format!(
        "route={} path={} theme={} toasts={} t={}ms",
        app.current_route(),
        app.location(),
        app.theme().scheme(),
        app.toasts().len(),
        app.runtime().now_ms(),
    )
}

/// Run one command. Returns text to print, if any.
pub fn execute(app: &mut ShowcaseApp, command: Command) -> Result<Option<String>> {
    match command {
        Command::Event(event) => {
            app.dispatch(event)?;
            Ok(None)
        }
        Command::Advance(ms) => {
            let fired = app.advance(ms);
            tracing::debug!(ms, fired, "advanced");
            Ok(None)
        }
        Command::Theme(scheme) => {
            app.set_scheme(scheme);
            Ok(None)
        }
        Command::Render => Ok(Some(app.render_html())),
        Command::Status => Ok(Some(status_line(app))),
    }
}

/// Run a whole script, handing every output to `output`
///
/// Stops at the first failing line. Returns the number of commands run.
pub fn run_script(
    app: &mut ShowcaseApp,
    script: &str,
    mut output: impl FnMut(String),
) -> Result<usize> {
    let mut executed = 0;
    for (index, line) in script.lines().enumerate() {
        if is_blank(line) {
            continue;
        }
        let at_line = |source: AppError| AppError::Script {
            line: index + 1,
            source: Box::new(source),
        };
        let command = line.parse::<Command>().map_err(at_line)?;
        if let Some(text) = execute(app, command).map_err(at_line)? {
            output(text);
        }
        executed += 1;
    }
    Ok(executed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(
            parse("navigate /toast   # go"),
            Command::Event(AppEvent::Navigate("/toast".into()))
        );
        assert_eq!(parse("advance 3500"), Command::Advance(3500));
        assert_eq!(parse("theme dark"), Command::Theme(ColorScheme::Dark));
        assert_eq!(parse("render"), Command::Render);
        assert_eq!(
            parse("dismiss 3"),
            Command::Event(AppEvent::ToastDismiss(ToastId(3)))
        );
        assert_eq!(
            parse("key Enter shift"),
            Command::Event(AppEvent::Key {
                key: "Enter".into(),
                shift: true
            })
        );
    }

    #[test]
    fn test_parse_toast_forms() {
        assert_eq!(
            parse("toast warning"),
            Command::Event(AppEvent::ToastFire(ToastTone::Warning))
        );
        assert_eq!(parse("toast sticky"), Command::Event(AppEvent::ToastSticky));
        assert_eq!(
            parse("toast show info 0 Build finished"),
            Command::Event(AppEvent::ToastShow(
                ToastSpec::new()
                    .tone(ToastTone::Info)
                    .timeout_ms(0)
                    .title("Build finished")
            ))
        );
    }

    #[test]
    fn test_parse_widget_commands() {
        assert_eq!(
            parse("carousel swipe 200 100"),
            Command::Event(AppEvent::CarouselSwipe {
                from: 200.0,
                to: 100.0
            })
        );
        assert_eq!(
            parse("wizard set newsletter true"),
            Command::Event(AppEvent::WizardSet {
                key: "newsletter".into(),
                value: json!(true)
            })
        );
        assert_eq!(
            parse("wizard set firstName Jane"),
            Command::Event(AppEvent::WizardSet {
                key: "firstName".into(),
                value: json!("Jane")
            })
        );
        assert_eq!(
            parse("chat input hello there"),
            Command::Event(AppEvent::ChatInput("hello there".into()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "fly away".parse::<Command>(),
            Err(AppError::UnknownCommand(c)) if c == "fly"
        ));
        assert!(matches!(
            "advance soon".parse::<Command>(),
            Err(AppError::InvalidArgument { command: "advance", .. })
        ));
        assert!(matches!(
            "toast purple".parse::<Command>(),
            Err(AppError::InvalidArgument { command: "toast", .. })
        ));
        assert!(matches!(
            "carousel sideways".parse::<Command>(),
            Err(AppError::InvalidArgument { command: "carousel", .. })
        ));
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert!(is_blank(""));
        assert!(is_blank("   # just a note"));
        assert!(!is_blank("render # now"));
    }
}
