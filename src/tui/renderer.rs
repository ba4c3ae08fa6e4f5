//! Rendering for every page.
//!
//! Pure view code: reads `AppState`, draws widgets, mutates nothing.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{AppState, Page};
use super::pages::documentation::WizardStep;
use super::pages::workflow_builder::BuilderField;
use super::pages::workflows::FormField;
use super::theme::Theme;
use super::widgets::{Header, ToastBar};
use crate::workflows::WorkflowStatus;

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(state.theme.bg_main)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Page body
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Toast bar
        ])
        .split(area);

    frame.render_widget(Header::new(state.page, &state.theme), chunks[0]);

    match state.page {
        Page::Documentation => draw_documentation(frame, chunks[1], state),
        Page::CodeAnalysis => draw_code_analysis(frame, chunks[1], state),
        Page::WorkflowBuilder => draw_builder(frame, chunks[1], state),
        Page::Workflows => draw_workflows(frame, chunks[1], state),
    }

    draw_hints(frame, chunks[2], state);
    frame.render_widget(
        ToastBar::new(state.toast.current(), &state.theme),
        chunks[3],
    );
}

fn panel<'a>(title: &'a str, theme: &Theme, focused: bool) -> Block<'a> {
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title,
            Style::default().fg(theme.text_secondary),
        ))
}

fn loading_line(theme: &Theme, what: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("Loading {what}…"),
        Style::default().fg(theme.text_muted),
    ))
}

// --- documentation wizard ---------------------------------------------------

fn draw_documentation(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let page = &state.documentation;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Stepper line.
    let mut spans = Vec::new();
    for (i, title) in WizardStep::TITLES.iter().enumerate() {
        let style = if i == page.step.index() {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(format!(" {}. {} ", i + 1, title), style));
        if i + 1 < WizardStep::TITLES.len() {
            spans.push(Span::styled("→", Style::default().fg(theme.border)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    match page.step {
        WizardStep::TemplateSelection => {
            let block = panel("Templates", theme, true);
            if page.templates.is_loading() || page.sections.is_loading() {
                let what = if page.templates.is_loading() {
                    "templates"
                } else {
                    "sections"
                };
                frame.render_widget(
                    Paragraph::new(loading_line(theme, what)).block(block),
                    chunks[1],
                );
            } else if let Some(error) = page.templates.error() {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        error.to_string(),
                        Style::default().fg(theme.red),
                    ))
                    .block(block),
                    chunks[1],
                );
            } else {
                let items: Vec<ListItem> = page
                    .templates
                    .data()
                    .map(|templates| {
                        templates
                            .iter()
                            .map(|t| {
                                ListItem::new(vec![
                                    Line::from(Span::styled(
                                        t.name.clone(),
                                        Style::default().fg(theme.text_primary),
                                    )),
                                    Line::from(Span::styled(
                                        format!("  {}", t.description),
                                        Style::default().fg(theme.text_secondary),
                                    )),
                                ])
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                let list = List::new(items)
                    .block(block)
                    .highlight_style(
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("» ");
                let mut list_state =
                    ListState::default().with_selected(Some(page.template_cursor));
                frame.render_stateful_widget(list, chunks[1], &mut list_state);
            }
        }
        WizardStep::ContentEntry | WizardStep::AiReview => {
            let title = if page.step == WizardStep::ContentEntry {
                "Document Content"
            } else {
                "AI Review"
            };
            let block = panel(title, theme, true);

            let field_label = |i: usize| -> String {
                match i {
                    0 => "Title".to_string(),
                    1 => "Description".to_string(),
                    n => page.draft.sections[n - 2].clone(),
                }
            };
            let field_value = |i: usize| -> String {
                match i {
                    0 => page.draft.title.clone(),
                    1 => page.draft.description.clone(),
                    n => {
                        let section = &page.draft.sections[n - 2];
                        page.draft.content.get(section).cloned().unwrap_or_default()
                    }
                }
            };

            let items: Vec<ListItem> = (0..page.field_count())
                .map(|i| {
                    let value = field_value(i);
                    let shown = if value.is_empty() {
                        Span::styled("(empty)", Style::default().fg(theme.text_muted))
                    } else {
                        Span::styled(value, Style::default().fg(theme.text_primary))
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{}: ", field_label(i)),
                            Style::default().fg(theme.text_secondary),
                        ),
                        shown,
                    ]))
                })
                .collect();

            let inner = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(chunks[1]);

            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("» ");
            let mut list_state = ListState::default().with_selected(Some(page.field_cursor));
            frame.render_stateful_widget(list, inner[0], &mut list_state);

            if page.generation.is_loading() {
                frame.render_widget(
                    Paragraph::new(loading_line(theme, "generated content")),
                    inner[1],
                );
            }
        }
    }
}

// --- code analysis ----------------------------------------------------------

fn draw_code_analysis(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let page = &state.code_analysis;

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let code_title = format!("Code ({})", page.language());
    let code = Paragraph::new(page.code.as_str())
        .style(Style::default().fg(theme.text_primary))
        .wrap(Wrap { trim: false })
        .block(panel(&code_title, theme, true));
    frame.render_widget(code, halves[0]);

    let block = panel("Analysis Results", theme, false);
    if page.analysis.is_loading() {
        frame.render_widget(
            Paragraph::new(loading_line(theme, "analysis")).block(block),
            halves[1],
        );
    } else if let Some(error) = page.analysis.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.to_string(),
                Style::default().fg(theme.red),
            ))
            .wrap(Wrap { trim: true })
            .block(block),
            halves[1],
        );
    } else if let Some(result) = page.analysis.data() {
        let heading = |text: &str| {
            Line::from(Span::styled(
                text.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let body = |text: &str| {
            Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(theme.text_primary),
            ))
        };
        let mut lines = vec![heading("Summary"), body(&result.summary)];
        lines.push(heading("Complexity"));
        lines.push(body(&result.complexity));
        lines.push(heading("Suggestions"));
        for suggestion in &result.suggestions {
            lines.push(Line::from(Span::styled(
                format!("• {suggestion}"),
                Style::default().fg(theme.text_primary),
            )));
        }
        lines.push(heading("Documentation"));
        lines.push(body(&result.documentation));
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            halves[1],
        );
    } else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Paste code on the left, then press Ctrl+R to analyze",
                Style::default().fg(theme.text_muted),
            ))
            .block(block),
            halves[1],
        );
    }
}

// --- workflow diagram builder -----------------------------------------------

fn draw_builder(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let page = &state.builder;

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let focus_style = |focused: bool| {
        if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_primary)
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                page.workflow_name.clone(),
                focus_style(page.focus == BuilderField::Name),
            ),
        ]),
        Line::from(vec![
            Span::styled("Description: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                page.description.clone(),
                focus_style(page.focus == BuilderField::Description),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Steps",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for (i, step) in page.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                step.description.clone(),
                focus_style(page.focus == BuilderField::Step(i)),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Participants",
        Style::default()
            .fg(theme.text_secondary)
            .add_modifier(Modifier::BOLD),
    )));
    for (i, participant) in page.participants.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("  - ", Style::default().fg(theme.text_muted)),
            Span::styled(
                participant.name.clone(),
                focus_style(page.focus == BuilderField::ParticipantName(i)),
            ),
            Span::styled(" (", Style::default().fg(theme.text_muted)),
            Span::styled(
                participant.role.clone(),
                focus_style(page.focus == BuilderField::ParticipantRole(i)),
            ),
            Span::styled(")", Style::default().fg(theme.text_muted)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Workflow", theme, true)),
        halves[0],
    );

    let block = panel("Diagram Preview", theme, false);
    if page.diagram.is_loading() {
        frame.render_widget(
            Paragraph::new(loading_line(theme, "diagram")).block(block),
            halves[1],
        );
    } else if let Some(diagram) = page.diagram.data() {
        frame.render_widget(
            Paragraph::new(diagram.diagram.as_str())
                .style(Style::default().fg(theme.text_primary))
                .wrap(Wrap { trim: false })
                .block(block),
            halves[1],
        );
    } else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Fill in the form and press Ctrl+R to generate a diagram",
                Style::default().fg(theme.text_muted),
            ))
            .block(block),
            halves[1],
        );
    }
}

// --- workflow list ----------------------------------------------------------

fn draw_workflows(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let page = &state.workflows;
    let workflows = page.workflows();

    let items: Vec<ListItem> = workflows
        .iter()
        .map(|w| {
            let status_color = match w.status {
                WorkflowStatus::Active => theme.green,
                WorkflowStatus::Inactive => theme.text_muted,
            };
            let mut first = vec![
                Span::styled(w.name.clone(), Style::default().fg(theme.text_primary)),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", w.status.label()),
                    Style::default().fg(status_color),
                ),
            ];
            if let Some(last_run) = &w.last_run {
                first.push(Span::styled(
                    format!("  last run {last_run}"),
                    Style::default().fg(theme.text_muted),
                ));
            }
            ListItem::new(vec![
                Line::from(first),
                Line::from(Span::styled(
                    format!("  {}", w.description),
                    Style::default().fg(theme.text_secondary),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(panel("Workflows", theme, page.dialog.is_none()))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    let mut list_state = ListState::default().with_selected(Some(page.selected));
    frame.render_stateful_widget(list, area, &mut list_state);

    if let Some(dialog) = &page.dialog {
        let title = if dialog.editing.is_some() {
            "Edit Workflow"
        } else {
            "New Workflow"
        };
        let popup = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup);

        let field_style = |field: FormField| {
            if dialog.field == field {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_primary)
            }
        };
        let lines = vec![
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(theme.text_secondary)),
                Span::styled(dialog.name.clone(), field_style(FormField::Name)),
            ]),
            Line::from(vec![
                Span::styled("Description: ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    dialog.description.clone(),
                    field_style(FormField::Description),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Enter: save   Tab: switch field   Esc: cancel",
                Style::default().fg(theme.text_muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().bg(theme.bg_panel))
                .block(panel(title, theme, true))
                .alignment(Alignment::Left),
            popup,
        );
    }
}

// --- chrome -----------------------------------------------------------------

fn draw_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.page {
        Page::Documentation => match state.documentation.step {
            WizardStep::TemplateSelection => {
                "↑/↓ select  Enter choose  Ctrl+N/P page  Ctrl+T theme  Ctrl+C quit"
            }
            WizardStep::ContentEntry => {
                "↑/↓ field  type to edit  Ctrl+→ next step  Ctrl+← back  Ctrl+C quit"
            }
            WizardStep::AiReview => {
                "↑/↓ section  Ctrl+R generate  Ctrl+← back  Ctrl+C quit"
            }
        },
        Page::CodeAnalysis => {
            "type code  Ctrl+L language  Ctrl+R analyze  Ctrl+N/P page  Ctrl+C quit"
        }
        Page::WorkflowBuilder => {
            "Tab field  Ctrl+S step  Ctrl+U participant  Ctrl+X remove  Ctrl+R generate"
        }
        Page::Workflows => "↑/↓ select  n new  e edit  t toggle  d delete  Ctrl+N/P page",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            hints,
            Style::default().fg(state.theme.text_muted),
        )),
        area,
    );
}

/// Centered popup area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
