//! Field primitives for the terminal wizard
//!
//! Stateless renderers: each takes a label, the current value, focus and the
//! step colour and returns the lines to draw. Layout is left to the caller.

use ratatui::prelude::*;

use crate::wizard::{ChoiceOption, FieldKind, FieldSpec, FieldValue};

const CURSOR: &str = "\u{258c}";
const SLIDER_WIDTH: usize = 20;
const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub help: Option<&'a str>,
    pub focused: bool,
    pub color: Color,
}

fn label_line(view: &FieldView) -> Line<'static> {
    let (marker, label_style) = if view.focused {
        ("\u{203a} ", Style::default().fg(Color::White).bold())
    } else {
        ("  ", Style::default().fg(Color::DarkGray).bold())
    };
    let mut spans = vec![
        Span::styled(format!("  {}", marker), Style::default().fg(view.color)),
        Span::styled(view.label.to_string(), label_style),
    ];
    if let Some(help) = view.help {
        spans.push(Span::styled(
            format!("  {}", help),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Row of pills, the selected one filled
pub fn segmented(view: FieldView, options: &[ChoiceOption], selected: Option<&str>) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw(INDENT)];
    for option in options {
        let style = if Some(option.key) == selected {
            Style::default().fg(Color::Black).bg(view.color).bold()
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", option.label), style));
        spans.push(Span::raw(" "));
    }
    vec![label_line(&view), Line::from(spans)]
}

/// One-line picker cycling through the options
pub fn select(view: FieldView, options: &[ChoiceOption], selected: Option<&str>) -> Vec<Line<'static>> {
    let position = selected.and_then(|key| options.iter().position(|option| option.key == key));
    let arrow_style = if view.focused {
        Style::default().fg(view.color)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let (text, text_style) = match position {
        Some(index) => (
            options[index].label.to_string(),
            Style::default().fg(Color::White).bold(),
        ),
        None => ("Choose...".to_string(), Style::default().fg(Color::DarkGray)),
    };
    let counter = match position {
        Some(index) => format!("  {}/{}", index + 1, options.len()),
        None => format!("  {} options", options.len()),
    };
    vec![
        label_line(&view),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled("\u{25c2} ", arrow_style),
            Span::styled(text, text_style),
            Span::styled(" \u{25b8}", arrow_style),
            Span::styled(counter, Style::default().fg(Color::DarkGray)),
        ]),
    ]
}

pub fn multi_select(
    view: FieldView,
    options: &[ChoiceOption],
    selected: &[&str],
    cursor: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![label_line(&view)];
    for (index, option) in options.iter().enumerate() {
        let checked = selected.contains(&option.key);
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = if view.focused && index == cursor {
            Style::default().fg(Color::Black).bg(view.color).bold()
        } else if checked {
            Style::default().fg(view.color)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{} {}", mark, option.label), style),
        ]));
    }
    lines
}

/// Value with a block cursor when focused, placeholder when empty
pub fn input_line(value: &str, placeholder: &str, focused: bool, color: Color) -> Line<'static> {
    let mut spans = vec![Span::raw(INDENT)];
    if !value.is_empty() {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White).bold(),
        ));
    }
    if focused {
        spans.push(Span::styled(CURSOR, Style::default().fg(color)));
    }
    if value.is_empty() {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn text_input(view: FieldView, value: &str, placeholder: &str) -> Vec<Line<'static>> {
    vec![
        label_line(&view),
        input_line(value, placeholder, view.focused, view.color),
    ]
}

pub fn slider(view: FieldView, value: u8, left: &str, right: &str) -> Vec<Line<'static>> {
    let filled = usize::from(value.min(100)) * SLIDER_WIDTH / 100;
    let bar = format!(
        "{}\u{25cf}{}",
        "\u{2501}".repeat(filled),
        "\u{2500}".repeat(SLIDER_WIDTH - filled)
    );
    vec![
        label_line(&view),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{} ", left), Style::default().fg(Color::DarkGray)),
            Span::styled(bar, Style::default().fg(view.color)),
            Span::styled(format!(" {}", right), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("  {:>3}", value),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
    ]
}

pub fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", message),
        Style::default().fg(Color::Red),
    ))
}

/// Draw any step field by dispatching on its kind
pub fn render_field<Fd>(
    spec: &FieldSpec<Fd>,
    value: &FieldValue<'_>,
    focused: bool,
    cursor: usize,
    color: Color,
) -> Vec<Line<'static>> {
    let view = FieldView {
        label: spec.label,
        help: spec.help,
        focused,
        color,
    };
    match (&spec.kind, value) {
        (FieldKind::Segmented(options), value) => segmented(view, options, value.choice_key()),
        (FieldKind::Select(options), value) => select(view, options, value.choice_key()),
        (FieldKind::MultiSelect(options), FieldValue::Many(keys)) => {
            multi_select(view, options, keys, cursor)
        }
        (
            FieldKind::Text { placeholder } | FieldKind::Amount { placeholder },
            FieldValue::Text(text),
        ) => text_input(view, text, placeholder),
        (FieldKind::Slider { left, right }, FieldValue::Slider(position)) => {
            slider(view, *position, left, right)
        }
        _ => vec![label_line(&view)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn view(focused: bool) -> FieldView<'static> {
        FieldView {
            label: "Household",
            help: None,
            focused,
            color: Color::Cyan,
        }
    }

    const OPTIONS: &[ChoiceOption] = &[
        ChoiceOption { key: "single", label: "Single" },
        ChoiceOption { key: "couple", label: "Couple" },
    ];

    #[test]
    fn select_shows_position() {
        let lines = select(view(true), OPTIONS, Some("couple"));
        assert!(text(&lines[1]).contains("Couple"));
        assert!(text(&lines[1]).contains("2/2"));

        let empty = select(view(false), OPTIONS, None);
        assert!(text(&empty[1]).contains("Choose..."));
    }

    #[test]
    fn multi_select_marks_checked_options() {
        let lines = multi_select(view(true), OPTIONS, &["couple"], 0);
        assert_eq!(lines.len(), 3);
        assert!(text(&lines[1]).contains("[ ] Single"));
        assert!(text(&lines[2]).contains("[x] Couple"));
    }

    #[test]
    fn input_shows_placeholder_until_typed() {
        assert!(text(&input_line("", "YYYY-MM-DD", false, Color::Cyan)).contains("YYYY-MM-DD"));
        let typed = text(&input_line("2026", "YYYY-MM-DD", true, Color::Cyan));
        assert!(typed.contains("2026\u{258c}"));
        assert!(!typed.contains("YYYY"));
    }

    #[test]
    fn slider_prints_its_position() {
        let lines = slider(view(false), 75, "Relaxed", "Fast");
        let rendered = text(&lines[1]);
        assert!(rendered.starts_with("    Relaxed "));
        assert!(rendered.ends_with(" 75"));
    }
}
