use {
    crate::calendar_core::{
        aggregate, build_chart, filter_events, ChartModel, ChartWindow, Event, EventFilter,
        Timeline,
    },
    crate::config::Config,
    chrono::NaiveDate,
    chrono_tz::Tz,
    std::collections::HashSet,
};

/// Which free-text control currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    MinImpact,
    WindowStart,
    WindowEnd,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::MinImpact => InputField::WindowStart,
            InputField::WindowStart => InputField::WindowEnd,
            InputField::WindowEnd => InputField::MinImpact,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::MinImpact => "Min Impact",
            InputField::WindowStart => "Start (HH:MM)",
            InputField::WindowEnd => "End (HH:MM)",
        }
    }
}

/// Dashboard state: the day's full event set plus everything derived from it.
///
/// The full set is the single source of truth. Every `update_view` re-derives
/// filtered events, timeline, and chart from it with the current inputs, so
/// repeated filter changes are idempotent and order-independent.
pub struct App {
    events: Vec<Event>,
    day: NaiveDate,
    tz: Tz,
    /// Configured currency allow-list; empty means unrestricted.
    currencies: Vec<String>,
    pub min_impact_input: String,
    pub window_start_input: String,
    pub window_end_input: String,
    pub focus: InputField,
    filtered: Vec<Event>,
    timeline: Timeline,
    chart: ChartModel,
}

impl App {
    pub fn new(events: Vec<Event>, day: NaiveDate, config: &Config) -> Self {
        let mut app = Self {
            events,
            day,
            tz: config.market_tz,
            currencies: config.currencies.clone(),
            min_impact_input: config.default_min_impact.to_string(),
            window_start_input: config.window_start.clone(),
            window_end_input: config.window_end.clone(),
            focus: InputField::MinImpact,
            filtered: Vec::new(),
            timeline: Timeline::default(),
            chart: ChartModel::default(),
        };
        app.update_view();
        app
    }

    /// Re-derive the displayed artifacts from the full event set.
    pub fn update_view(&mut self) {
        // Documented fallback: non-numeric min-impact input means 0.
        let min_impact = self.min_impact_input.trim().parse::<u32>().unwrap_or(0);

        let currencies = if self.currencies.is_empty() {
            None
        } else {
            Some(self.currencies.iter().cloned().collect::<HashSet<_>>())
        };

        let filter = EventFilter {
            currencies,
            min_impact,
        };

        self.filtered = filter_events(&self.events, &filter);
        self.timeline = aggregate(&self.filtered);

        let window = ChartWindow::parse(&self.window_start_input, &self.window_end_input)
            .unwrap_or_else(|| {
                log::warn!("Invalid display window input, using full day view");
                ChartWindow::full_day()
            });
        self.chart = build_chart(&self.timeline, self.day, self.tz, &window);
    }

    pub fn push_char(&mut self, c: char) {
        // Fields only ever hold digits and a colon; everything else is a
        // hotkey.
        if !c.is_ascii_digit() && c != ':' {
            return;
        }
        let field = self.focused_field_mut();
        if field.len() < 5 {
            field.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.focused_field_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::MinImpact => &mut self.min_impact_input,
            InputField::WindowStart => &mut self.window_start_input,
            InputField::WindowEnd => &mut self.window_end_input,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn chart(&self) -> &ChartModel {
        &self.chart
    }

    pub fn total_event_count(&self) -> usize {
        self.events.len()
    }
}
