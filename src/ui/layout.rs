use {
    crate::calendar_core::Impact,
    crate::state::{App, InputField},
    crate::ui::renderer::{format_impact, truncate_name},
    ratatui::{
        layout::{Constraint, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        symbols,
        text::{Line, Span},
        widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table},
        Frame,
    },
};

/// Visual style for one impact tier.
fn tier_color(tier: Impact) -> Color {
    match tier {
        Impact::Low => Color::Green,
        Impact::Medium => Color::Yellow,
        Impact::High => Color::Red,
        Impact::Unclassified => Color::Gray,
    }
}

const SCORE_COLOR: Color = Color::Blue;

/// Render the main UI layout
pub fn render_layout(f: &mut Frame, area: Rect, app: &App) {
    let chunks = RatLayout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(12), // Event table
            Constraint::Length(3),  // Filter controls
            Constraint::Min(10),    // Charts
            Constraint::Length(3),  // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0], app);
    render_events_table(f, chunks[1], app);
    render_controls(f, chunks[2], app);
    render_charts(f, chunks[3], app);
    render_footer(f, chunks[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Block::default().borders(Borders::ALL);

    let text = vec![Line::from(vec![
        Span::styled(
            "Economic Calendar Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {}", app.day().format("%B %d, %Y"))),
        Span::raw("  |  Tab: switch field, Enter: apply, q/Esc: quit"),
    ])];

    f.render_widget(Paragraph::new(text).block(header), area);
}

fn render_events_table(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Date", "Time", "Currency", "Impact", "Event Name"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let name_width = area.width.saturating_sub(44) as usize;
    let rows: Vec<Row> = app
        .filtered()
        .iter()
        .map(|event| {
            Row::new(vec![
                event.date_display.clone(),
                event.time_display.clone(),
                event.currency.clone(),
                format_impact(event.impact),
                truncate_name(&event.name, name_width),
            ])
            .style(Style::default().fg(tier_color(event.impact)))
        })
        .collect();

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(8),  // Time
        Constraint::Length(8),  // Currency
        Constraint::Length(12), // Impact
        Constraint::Min(20),    // Event name
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Filtered Events"));

    f.render_widget(table, area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &App) {
    let field = |input_field: InputField, value: &str| -> Vec<Span<'static>> {
        let style = if app.focus == input_field {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        vec![
            Span::styled(format!("{}: ", input_field.label()), style),
            Span::styled(format!("[{}]", value), style),
            Span::raw("   "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(field(InputField::MinImpact, &app.min_impact_input));
    spans.extend(field(InputField::WindowStart, &app.window_start_input));
    spans.extend(field(InputField::WindowEnd, &app.window_end_input));

    let controls = Block::default().borders(Borders::ALL).title("Filters");
    f.render_widget(Paragraph::new(Line::from(spans)).block(controls), area);
}

fn render_charts(f: &mut Frame, area: Rect, app: &App) {
    let model = app.chart();

    if model.is_empty() {
        let placeholder = Paragraph::new("No data to plot for the selected filters.")
            .block(Block::default().borders(Borders::ALL).title("Timeline"));
        f.render_widget(placeholder, area);
        return;
    }

    // Two independently scaled series over a shared time axis, rendered as
    // stacked panels.
    let panels = RatLayout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_density_panel(f, panels[0], app);
    render_score_panel(f, panels[1], app);
}

fn render_density_panel(f: &mut Frame, area: Rect, app: &App) {
    let model = app.chart();

    let datasets: Vec<Dataset> = model
        .tier_series
        .iter()
        .filter(|(_, points)| !points.is_empty())
        .map(|(tier, points)| {
            Dataset::default()
                .name(format!("{} impact", tier.as_str()))
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(tier_color(*tier)))
                .data(points)
        })
        .collect();

    let x_labels: Vec<Span> = model.x_labels.iter().map(|l| Span::raw(l.clone())).collect();
    let max_count = app.timeline().max_count;
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(max_count.to_string()),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Events at a Time"),
        )
        .x_axis(
            Axis::default()
                .title("Time of Day")
                .bounds(model.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .bounds(model.count_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_score_panel(f: &mut Frame, area: Rect, app: &App) {
    let model = app.chart();

    let datasets = vec![Dataset::default()
        .name("accumulated score")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(SCORE_COLOR))
        .data(&model.score_series)];

    let x_labels: Vec<Span> = model.x_labels.iter().map(|l| Span::raw(l.clone())).collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(app.timeline().final_score().to_string()),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Accumulated Weighted Score"),
        )
        .x_axis(
            Axis::default()
                .title("Time of Day")
                .bounds(model.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Score")
                .bounds(model.score_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let text = vec![Line::from(vec![
        Span::styled("Events: ", Style::default().fg(Color::Cyan)),
        Span::raw(app.total_event_count().to_string()),
        Span::raw(" | "),
        Span::styled("Shown: ", Style::default().fg(Color::Cyan)),
        Span::raw(app.filtered().len().to_string()),
        Span::raw(" | "),
        Span::styled("Peak density: ", Style::default().fg(Color::Cyan)),
        Span::raw(app.timeline().max_count.to_string()),
        Span::raw(" | "),
        Span::styled("Final score: ", Style::default().fg(Color::Cyan)),
        Span::raw(app.timeline().final_score().to_string()),
    ])];

    let footer = Block::default().borders(Borders::ALL).title("Status");
    f.render_widget(Paragraph::new(text).block(footer), area);
}
