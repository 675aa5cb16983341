use std::io::IsTerminal;

use anstyle::{AnsiColor, Effects, Style};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputStyle {
    Plain,
    Rich,
}

pub(crate) fn current_output_style(force_plain: bool) -> OutputStyle {
    output_style_for(
        force_plain,
        std::env::var_os("NO_COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

pub(crate) fn output_style_for(
    force_plain: bool,
    no_color: bool,
    stdout_is_terminal: bool,
) -> OutputStyle {
    if force_plain || no_color || !stdout_is_terminal {
        OutputStyle::Plain
    } else {
        OutputStyle::Rich
    }
}

pub(crate) fn render_status_line(style: OutputStyle, status: &str, message: &str) -> String {
    match style {
        OutputStyle::Plain => message.to_string(),
        OutputStyle::Rich => format!("[{}] {message}", status.to_ascii_uppercase()),
    }
}

pub(crate) fn colorize(style: OutputStyle, paint: Style, text: &str) -> String {
    match style {
        OutputStyle::Plain => text.to_string(),
        OutputStyle::Rich => format!("{}{}{}", paint.render(), text, paint.render_reset()),
    }
}

pub(crate) fn package_style() -> Style {
    Style::new().effects(Effects::BOLD)
}

pub(crate) fn added_style() -> Style {
    Style::new().fg_color(Some(AnsiColor::BrightGreen.into()))
}

pub(crate) fn removed_style() -> Style {
    Style::new().fg_color(Some(AnsiColor::BrightRed.into()))
}

pub(crate) fn changed_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightYellow.into()))
        .effects(Effects::BOLD)
}
