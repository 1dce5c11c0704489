//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, LineGauge, Paragraph, Wrap};
use ratatui::Frame;

use launchpad_app::page::PageTab;
use launchpad_app::state::AppState;
use launchpad_core::{format_token_amount, Project, ProjectStats};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

/// Braille spinner frames, advanced by `AppState::animation_frame`
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);
    let areas = layout::create(area);

    render_back_line(frame, areas.back, state, icons);

    if state.page.is_loading() {
        render_loader(frame, areas.body, state);
    } else if state.page.project_id().is_none() {
        render_empty(frame, areas.body, "No project selected");
    } else if let Some(project) = state.page.data().project.as_ref() {
        let body = layout::body(areas.body, state.is_wide());
        render_project_info(frame, body.info, project, icons);
        render_details(frame, body.details, state);
        render_user_area(frame, body.user, state, project, icons);
    } else {
        render_empty(frame, areas.body, "Project not found");
    }

    if let Some(dialog) = state.dialog.dialog() {
        frame.render_widget(
            widgets::ModalImageDialog::new(dialog, state.dialog_layout(), icons),
            area,
        );
    }

    // Hints stay readable above the backdrop
    render_hints(frame, areas.hints, state);
}

fn render_back_line(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) {
    let back = Line::from(vec![
        Span::styled(format!(" {} ", icons.chevron_left()), styles::accent()),
        Span::styled("All Projects ", styles::text_primary()),
        Span::styled("(b)", styles::keybinding()),
    ]);
    frame.render_widget(Paragraph::new(back), area);

    let wallet = match state.page.account_id() {
        Some(account) => Line::from(vec![
            Span::styled(format!("{} ", icons.wallet()), styles::status_green()),
            Span::styled(format!("{} ", account), styles::text_secondary()),
        ]),
        None => Line::styled("not connected ", styles::text_muted()),
    };
    frame.render_widget(Paragraph::new(wallet).alignment(Alignment::Right), area);
}

fn render_loader(frame: &mut Frame, area: Rect, state: &AppState) {
    let spinner = SPINNER_FRAMES[(state.animation_frame % SPINNER_FRAMES.len() as u64) as usize];
    let center = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(spinner, styles::accent_bold())).alignment(Alignment::Center),
        center.intersection(area),
    );
}

fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let center = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(message, styles::text_secondary()))
            .alignment(Alignment::Center),
        center.intersection(area),
    );
}

fn render_project_info(frame: &mut Frame, area: Rect, project: &Project, icons: IconSet) {
    let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = project.status.as_deref().unwrap_or("unknown");
    let mut title = vec![Span::styled(
        project.project_name.as_str(),
        styles::text_bright_bold(),
    )];
    if project.public {
        title.push(Span::raw(" "));
        title.push(widgets::Star::new(true, icons).to_span());
    }
    title.push(Span::styled(
        format!("  #{}", project.listing_id),
        styles::text_muted(),
    ));

    let description = if project.description.trim().is_empty() {
        "No description provided."
    } else {
        project.description.as_str()
    };

    let lines = vec![
        Line::from(title),
        Line::from(vec![
            Span::styled("Status: ", styles::text_secondary()),
            Span::styled(status, styles::sale_status(status)),
        ]),
        Line::styled(description, styles::text_primary()),
        Line::from(vec![
            widgets::BigChevron::new(icons).to_span(),
            Span::styled(" [i]", styles::keybinding()),
            Span::styled(" more info", styles::text_muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_details(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = styles::glass_block(true).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs_area, content] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
    frame.render_widget(
        widgets::PageTabs::new(state.page.tab(), state.page.has_account()),
        tabs_area,
    );

    match state.page.tab() {
        PageTab::Pool => {
            if let Some(stats) = state.page.stats() {
                render_pool(frame, content, &stats);
            }
        }
        PageTab::Investments => render_investments(frame, content, state),
    }
}

fn stat_line<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), styles::text_secondary()),
        Span::styled(value.into(), styles::text_primary()),
    ])
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_date(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render_pool(frame: &mut Frame, area: Rect, stats: &ProjectStats) {
    let sold = match (stats.allocations_sold, stats.total_allocations) {
        (Some(sold), Some(total)) => format!("{} / {}", sold, total),
        (Some(sold), None) => sold.to_string(),
        _ => "-".to_string(),
    };

    let [top, gauge, bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let top_lines = vec![
        stat_line("Price per allocation", stats.allocation_price.clone()),
        stat_line("Allocation size", stats.allocation_size.clone()),
        stat_line("Allocations sold", sold),
    ];
    frame.render_widget(Paragraph::new(top_lines), top);

    let percent = stats.sold_percent.unwrap_or(0);
    frame.render_widget(
        LineGauge::default()
            .ratio(f64::from(percent) / 100.0)
            .label(Span::styled(
                format!("{:<22}", format!("{}% sold", percent)),
                styles::text_secondary(),
            ))
            .filled_style(styles::accent())
            .unfilled_style(styles::text_muted()),
        gauge,
    );

    let bottom_lines = vec![
        stat_line("Sale opens", format_time(stats.sale_window.opens_at)),
        stat_line("Sale closes", format_time(stats.sale_window.closes_at)),
        Line::from(vec![
            Span::styled(format!("{:<22}", "Status"), styles::text_secondary()),
            Span::styled(stats.status.clone(), styles::sale_status(&stats.status)),
        ]),
    ];
    frame.render_widget(Paragraph::new(bottom_lines), bottom);
}

fn render_investments(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.page.has_account() {
        render_empty(frame, area, "Connect a wallet to see your investments");
        return;
    }

    let data = state.page.data();
    let decimals = data
        .project
        .as_ref()
        .map(|p| p.project_token_decimals())
        .unwrap_or(0);

    let (count, withdrawn) = match &data.allocation {
        Some(allocation) => (
            allocation.count().to_string(),
            format_token_amount(&allocation.quantity_withdrawn, decimals),
        ),
        None => ("0".to_string(), "0".to_string()),
    };

    let [summary, table] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);
    let lines = vec![
        stat_line("Allowance", data.allowance.to_string()),
        stat_line("Allocations bought", count),
        stat_line("Tokens withdrawn", withdrawn),
    ];
    frame.render_widget(Paragraph::new(lines), summary);

    if data.vested.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("No vesting entries", styles::text_muted())),
            table,
        );
        return;
    }

    let width = state.terminal_width;
    let row_height = widgets::GridHeader::height_for(width, 4);
    let header = widgets::GridHeader::new(vec![
        Line::styled("#", styles::text_bright_bold()),
        Line::styled("Amount", styles::text_bright_bold()),
        Line::styled("Unlocks", styles::text_bright_bold()),
        Line::styled("Status", styles::text_bright_bold()),
    ])
    .viewport_width(width);

    let mut y = table.y;
    let bottom = table.bottom();
    if y + row_height > bottom {
        return;
    }
    frame.render_widget(header, Rect::new(table.x, y, table.width, row_height));
    y += row_height;

    let now = Utc::now();
    for (i, entry) in data.vested.iter().enumerate() {
        if y + row_height > bottom {
            break;
        }
        let (status, style) = if entry.withdrawn {
            ("withdrawn", styles::text_muted())
        } else if entry.is_unlocked(now) {
            ("unlocked", styles::status_green())
        } else {
            ("locked", styles::status_yellow())
        };
        let row = widgets::GridHeader::new(vec![
            Line::styled((i + 1).to_string(), styles::text_muted()),
            Line::styled(format_token_amount(&entry.amount, decimals), styles::text_primary()),
            Line::styled(format_date(entry.unlocks_at()), styles::text_secondary()),
            Line::styled(status, style),
        ])
        .viewport_width(width)
        .style(Style::default());
        frame.render_widget(row, Rect::new(table.x, y, table.width, row_height));
        y += row_height;
    }
}

fn render_user_area(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    project: &Project,
    icons: IconSet,
) {
    let block = styles::glass_block(false)
        .title(" Your wallet ")
        .style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(account) = state.page.account_id() else {
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", icons.wallet()), styles::text_muted()),
                Span::styled("Connect a wallet", styles::text_bright_bold()),
            ]),
            Line::styled("Set wallet.account_id or pass --account", styles::text_muted()),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        return;
    };

    let data = state.page.data();
    let balance = if project.price_token.is_some() {
        let amount = format_token_amount(
            data.price_token_balance.as_str(),
            project.price_token_decimals(),
        );
        format!("{} {}", amount, project.price_token_symbol())
            .trim_end()
            .to_string()
    } else {
        "-".to_string()
    };

    let bought = data.allocation.as_ref().map(|a| a.count()).unwrap_or(0);
    let remaining = match data.allowance.as_u128() {
        Some(allowance) => allowance.saturating_sub(u128::from(bought)).to_string(),
        None => "-".to_string(),
    };

    let lines = vec![
        Line::styled(account.to_string(), styles::text_bright_bold()),
        stat_line("Balance", balance),
        stat_line("Allowance", data.allowance.to_string()),
        stat_line("Remaining allocations", remaining),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let pairs: &[(&str, &str)] = match state.dialog.dialog() {
        Some(dialog) if dialog.close_locked => &[
            ("←/→", "step"),
            ("Enter", "finish"),
            ("q", "quit"),
        ],
        Some(_) => &[("Esc", "close"), ("x", "close"), ("q", "quit")],
        None => &[
            ("1/2", "tabs"),
            ("i", "info"),
            ("?", "help"),
            ("r", "refresh"),
            ("b", "back"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, label) in pairs {
        spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
        spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
