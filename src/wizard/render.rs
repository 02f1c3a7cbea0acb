//! Wizard rendering (read-only from state).
//!
//! Each frame projects `WizardState` into widgets and re-registers every
//! click target, so the hit regions always match the visible layout. The
//! detail overlay registers its targets last: later targets win the hit
//! test, which is what makes "click outside to close" work.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::catalog::{Choice, DEGREES, FIELDS, INTERESTS, LOCATIONS, SKILLS};
use crate::input::{is_narrow_layout, ClickState};
use crate::locale::text;
use crate::widgets::{meter_bar, ClickableList};

use super::actions::*;
use super::state::{progress_percent, Phase, RequestOutcome, Step, WizardState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(state, f, chunks[0], click_state);

    match &state.phase {
        Phase::Form => render_step(state, f, chunks[1], click_state),
        Phase::Loading => render_loader(state, f, chunks[1]),
        Phase::Results(outcome) => render_results(state, outcome, f, chunks[1], click_state),
    }

    render_footer(state, f, chunks[2], click_state);

    if state.modal.is_some() {
        render_modal(state, f, chunks[1], click_state);
    }
}

// ── Header: title, language toggle, progress ─────────────────────────

fn render_header(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let tr = |key| text(state.lang, key);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", tr("main_title")),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Top inner row: subtitle on the left, language toggle on the right
    let toggle = format!("[{}]", state.lang.toggle_label());
    let toggle_w = (Line::from(toggle.as_str()).width() as u16).min(inner.width);
    let subtitle_w = inner.width.saturating_sub(toggle_w + 1);

    let subtitle = Paragraph::new(Span::styled(
        tr("main_subtitle"),
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(subtitle, Rect::new(inner.x, inner.y, subtitle_w, 1));

    let toggle_rect = Rect::new(inner.x + inner.width - toggle_w, inner.y, toggle_w, 1);
    let toggle_widget = Paragraph::new(Span::styled(
        toggle,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(toggle_widget, toggle_rect);
    click_state.borrow_mut().add_target(toggle_rect, LANG_TOGGLE);

    // Second inner row: progress through the interior steps
    if inner.height > 1 {
        let progress = progress_percent(state.step);
        let bar_w = inner.width.saturating_sub(6).min(30);
        let progress_line = Line::from(vec![
            Span::styled(meter_bar(progress, bar_w), Style::default().fg(Color::Green)),
            Span::styled(
                format!(" {progress}%"),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(
            Paragraph::new(progress_line),
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
        );
    }
}

// ── Form steps ───────────────────────────────────────────────────────

fn question_line(question: &'static str) -> Line<'static> {
    Line::from(Span::styled(question, Style::default().fg(Color::Gray)))
}

/// `(•)` single-choice row or `[x]` toggle row with its key hint.
fn choice_line(
    key: char,
    selected: bool,
    multi: bool,
    label: &'static str,
) -> Line<'static> {
    let marker = match (multi, selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(•)",
        (false, false) => "( )",
    };
    let label_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker_style = if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(
            format!(" [{}] ", key.to_uppercase()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{marker} "), marker_style),
        Span::styled(label, label_style),
    ])
}

fn push_choice_group(
    cl: &mut ClickableList<'static>,
    lang: crate::locale::Lang,
    table: &'static [Choice],
    selected: usize,
    base_action: u16,
    first_key: char,
) {
    for (i, choice) in table.iter().enumerate() {
        let key = char::from(first_key as u8 + i as u8);
        cl.push_clickable(
            choice_line(key, selected == i, false, text(lang, choice.label_key)),
            base_action + i as u16,
        );
    }
}

fn render_step(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let tr = |key| text(state.lang, key);
    let mut cl = ClickableList::new();

    let title_key = match state.step {
        Step::Welcome => "welcome_title",
        Step::Education => "edu_title",
        Step::Skills => "skills_title",
        Step::Interests => "interests_title",
        Step::Location => "location_title",
    };

    match state.step {
        Step::Welcome => {
            cl.push(Line::from(""));
            cl.push(question_line(tr("welcome_subtitle")));
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    format!("▶ {} ◀", tr("start_now_btn")),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                GOTO_STEP_BASE + Step::Education.index() as u16,
            );
        }
        Step::Education => {
            cl.push(question_line(tr("edu_q1")));
            push_choice_group(&mut cl, state.lang, &DEGREES, state.degree, DEGREE_BASE, '1');
            cl.push(Line::from(""));
            cl.push(question_line(tr("edu_q2")));
            push_choice_group(&mut cl, state.lang, &FIELDS, state.field, FIELD_BASE, 'a');
            cl.push(Line::from(""));
            cl.push_clickable(
                choice_line('w', state.wfh_only, true, tr("wfh_checkbox")),
                TOGGLE_WFH,
            );
        }
        Step::Skills => {
            cl.push(question_line(tr("skills_subtitle")));
            for (i, choice) in SKILLS.iter().enumerate() {
                let key = char::from(b'1' + i as u8);
                cl.push_clickable(
                    choice_line(key, state.skill_selected[i], true, tr(choice.label_key)),
                    TOGGLE_SKILL_BASE + i as u16,
                );
            }
        }
        Step::Interests => {
            cl.push(question_line(tr("interests_subtitle")));
            for (i, choice) in INTERESTS.iter().enumerate() {
                let key = char::from(b'1' + i as u8);
                cl.push_clickable(
                    choice_line(key, state.interest_selected[i], true, tr(choice.label_key)),
                    TOGGLE_INTEREST_BASE + i as u16,
                );
            }
        }
        Step::Location => {
            cl.push(question_line(tr("location_q1")));
            push_choice_group(
                &mut cl,
                state.lang,
                &LOCATIONS,
                state.location,
                LOCATION_BASE,
                '1',
            );
        }
    }

    let inner_w = area.width.saturating_sub(2);
    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, inner_w);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" {} ", tr(title_key)));
    let alignment = if state.step == Step::Welcome {
        Alignment::Center
    } else {
        Alignment::Left
    };
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

// ── Loader ───────────────────────────────────────────────────────────

fn render_loader(state: &WizardState, f: &mut Frame, area: Rect) {
    let frame_idx = state.spinner_ticks as usize % SPINNER_FRAMES.len();
    let mut lines = Vec::new();
    for _ in 0..area.height.saturating_sub(3) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!("{} {}", SPINNER_FRAMES[frame_idx], text(state.lang, "loader_text")),
        Style::default().fg(Color::Cyan),
    )));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

// ── Results ──────────────────────────────────────────────────────────

fn render_results(
    state: &WizardState,
    outcome: &RequestOutcome,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let tr = |key| text(state.lang, key);
    let is_narrow = is_narrow_layout(area.width);
    let mut cl = ClickableList::new();

    match outcome {
        RequestOutcome::Failed => {
            cl.push(Line::from(Span::styled(
                tr("error_text"),
                Style::default().fg(Color::Red),
            )));
        }
        RequestOutcome::Matches(matches) if matches.is_empty() => {
            cl.push(Line::from(Span::styled(
                tr("no_results"),
                Style::default().fg(Color::Gray),
            )));
            push_next_steps(&mut cl, state);
        }
        RequestOutcome::Matches(matches) => {
            let bar_w: u16 = if is_narrow { 12 } else { 20 };
            for (i, m) in matches.iter().enumerate() {
                let id = OPEN_MATCH_BASE + i as u16;
                cl.push_clickable(
                    Line::from(vec![
                        Span::styled(
                            format!(" {}. ", i + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            m.title.clone(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    id,
                );
                cl.push_clickable(
                    Line::from(Span::styled(
                        format!("    {}", m.company),
                        Style::default().fg(Color::Cyan),
                    )),
                    id,
                );
                let pct = m.match_percentage.min(100);
                cl.push_clickable(
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(meter_bar(pct, bar_w), Style::default().fg(Color::Green)),
                        Span::styled(
                            format!(" {pct}{}", tr("match_suffix")),
                            Style::default().fg(Color::Gray),
                        ),
                    ]),
                    id,
                );
                if !m.match_reason.is_empty() {
                    cl.push_clickable(
                        Line::from(Span::styled(
                            format!("    {}", m.match_reason),
                            Style::default().fg(Color::Gray),
                        )),
                        id,
                    );
                }
                cl.push_clickable(
                    Line::from(Span::styled(
                        format!("    {} · {} · {}", m.location, m.duration, m.stipend),
                        Style::default().fg(Color::DarkGray),
                    )),
                    id,
                );
                cl.push(Line::from(""));
            }
            push_next_steps(&mut cl, state);
        }
    }

    let inner_w = area.width.saturating_sub(2);
    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, inner_w);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" {} ", tr("results_title")));
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Static "what next" checklist plus the feedback row.
fn push_next_steps(cl: &mut ClickableList<'static>, state: &WizardState) {
    let tr = |key| text(state.lang, key);
    cl.push(Line::from(Span::styled(
        tr("next_title"),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    for key in ["next_step1", "next_step2", "next_step3"] {
        cl.push(Line::from(Span::styled(
            format!("  {}", tr(key)),
            Style::default().fg(Color::Gray),
        )));
    }
    cl.push(Line::from(""));
    if state.feedback_given {
        cl.push(Line::from(Span::styled(
            tr("feedback_thanks"),
            Style::default().fg(Color::Green),
        )));
    } else {
        cl.push(Line::from(Span::styled(
            tr("feedback_title"),
            Style::default().fg(Color::White),
        )));
        cl.push_clickable(
            Line::from(Span::styled("  👍 Yes", Style::default().fg(Color::Green))),
            FEEDBACK_YES,
        );
        cl.push_clickable(
            Line::from(Span::styled("  👎 No", Style::default().fg(Color::Red))),
            FEEDBACK_NO,
        );
    }
}

// ── Detail overlay ───────────────────────────────────────────────────

fn render_modal(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let Some(modal) = &state.modal else { return };
    let Some(m) = state.matches().and_then(|ms| ms.get(modal.match_index)) else {
        return;
    };
    let tr = |key| text(state.lang, key);

    let mut cs = click_state.borrow_mut();
    // Anywhere outside the overlay closes it; the overlay's own targets are
    // registered afterwards and win the hit test.
    cs.add_target(area, MODAL_CLOSE);

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        m.company.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!("📍 {} · ⏱ {} · 💰 {}", m.location, m.duration, m.stipend),
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));
    cl.push(Line::from(Span::styled(
        tr("modal_role"),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        m.description.clone(),
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));

    // Skill-gap section only exists when the server reported missing skills
    if !m.missing_skills.is_empty() {
        cl.push(Line::from(Span::styled(
            tr("skill_gap_title"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (i, gap) in m.missing_skills.iter().enumerate() {
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" {} — ", gap.skill),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        tr("watch_tutorial"),
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                ]),
                TUTORIAL_LINK_BASE + i as u16,
            );
            let open = modal.roadmap_open.get(i).copied().unwrap_or(false);
            let arrow = if open { "▾" } else { "▸" };
            cl.push_clickable(
                Line::from(Span::styled(
                    format!("   {arrow} {}", tr("view_roadmap")),
                    Style::default().fg(Color::Magenta),
                )),
                ROADMAP_TOGGLE_BASE + i as u16,
            );
            if open {
                for step in &gap.roadmap {
                    cl.push(Line::from(Span::styled(
                        format!("     {step}"),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
        }
        cl.push(Line::from(""));
    }

    cl.push_clickable(
        Line::from(Span::styled(
            format!("▶ {}", tr("proceed_btn")),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        MODAL_APPLY,
    );
    cl.push_clickable(
        Line::from(Span::styled("✕ Close", Style::default().fg(Color::DarkGray))),
        MODAL_CLOSE,
    );

    // Size the overlay to its wrapped content, clamped to the content area
    let overlay_w = area.width.saturating_sub(4).min(72).max(20);
    let inner_w = overlay_w.saturating_sub(2);
    let probe = Paragraph::new(cl.lines().to_vec()).wrap(Wrap { trim: false });
    let content_h = probe.line_count(inner_w) as u16;
    let overlay_h = (content_h + 2).min(area.height);
    let overlay = centered_rect(area, overlay_w, overlay_h);

    cl.register_targets(overlay, &mut cs, 1, 1, inner_w);

    f.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(Span::styled(
            format!(" {} ", m.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, overlay);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

// ── Footer: navigation controls ──────────────────────────────────────

fn render_footer(
    state: &WizardState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let tr = |key| text(state.lang, key);

    let (left, right): (Option<(String, u16)>, Option<(String, u16)>) = if state.modal.is_some() {
        (None, Some(("[Esc] ✕".to_string(), MODAL_CLOSE)))
    } else {
        match &state.phase {
            Phase::Form => {
                let back = state.step.prev().map(|prev| {
                    (
                        format!("◀ [Esc] {}", tr("back_btn")),
                        GOTO_STEP_BASE + prev.index() as u16,
                    )
                });
                let forward = match state.step {
                    Step::Welcome => Some((
                        format!("[Enter] {} ▶", tr("start_now_btn")),
                        GOTO_STEP_BASE + Step::Education.index() as u16,
                    )),
                    Step::Location => {
                        Some((format!("[Enter] {} 🔍", tr("find_btn")), SUBMIT))
                    }
                    _ => state.step.next().map(|next| {
                        (
                            format!("[Enter] {} ▶", tr("next_btn")),
                            GOTO_STEP_BASE + next.index() as u16,
                        )
                    }),
                };
                (back, forward)
            }
            Phase::Loading => (None, None),
            Phase::Results(_) => (None, None),
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mut cs = click_state.borrow_mut();
    let half = inner.width / 2;

    if let Some((label, action)) = left {
        let rect = Rect::new(inner.x, inner.y, half, 1);
        f.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(Color::Gray))),
            rect,
        );
        cs.add_target(rect, action);
    }
    if let Some((label, action)) = right {
        let rect = Rect::new(inner.x + half, inner.y, inner.width - half, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
            rect,
        );
        cs.add_target(rect, action);
    }
}
