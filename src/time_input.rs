//! Twelve-hour time input backed by a canonical 24-hour `"HH:MM"` value.
//!
//! ## Usage
//!
//! Use to let users edit a time-of-day value that the caller stores in
//! 24-hour form, while presenting it as a 12-hour value with an AM/PM
//! selector.
use derive_setters::Setters;
use tessera_ui::{
    Callback, CallbackWith, DimensionValue, Dp, Modifier, State, remember, tessera, use_context,
};
use thiserror::Error;

use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    text_field::{TextFieldArgs, TextFieldLineLimit, text_field_with_controller},
    text_input::TextInputController,
    theme::MaterialTheme,
};

const ENTRY_FIELD_WIDTH: Dp = Dp(40.0);
const ENTRY_FIELD_HEIGHT: Dp = Dp(28.0);
const STEP_BUTTON_WIDTH: Dp = Dp(24.0);
const STEP_BUTTON_HEIGHT: Dp = Dp(14.0);
const PERIOD_BUTTON_WIDTH: Dp = Dp(36.0);
const PERIOD_BUTTON_HEIGHT: Dp = Dp(24.0);
const CONTAINER_PADDING: Dp = Dp(4.0);
const CONTAINER_RADIUS: Dp = Dp(6.0);
const FIELD_GAP: Dp = Dp(6.0);

/// Indicates whether the displayed time is before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

impl DayPeriod {
    /// Returns the opposite period.
    pub fn toggled(self) -> Self {
        match self {
            DayPeriod::Am => DayPeriod::Pm,
            DayPeriod::Pm => DayPeriod::Am,
        }
    }

    /// Returns the display label for this period.
    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Am => "AM",
            DayPeriod::Pm => "PM",
        }
    }
}

/// Error produced by [`DisplayTime::parse_canonical`] for values that are not
/// well-formed 24-hour `"HH:MM"` strings.
///
/// The widget itself never fails on such input; this strict parser exists for
/// callers that want to validate a value before storing it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// The value has no `:` separator.
    #[error("time value is missing the `:` separator")]
    MissingSeparator,
    /// The hour field is not a number in `0..=23`.
    #[error("hour field `{0}` is not a number in 0..=23")]
    InvalidHour(String),
    /// The minute field is not a number in `0..=59`.
    #[error("minute field `{0}` is not a number in 0..=59")]
    InvalidMinute(String),
}

/// A time-of-day in 12-hour form: hour in `1..=12`, minute in `0..=59`, and
/// an AM/PM period.
///
/// `DisplayTime` is the editable projection of a canonical 24-hour `"HH:MM"`
/// string. It is never handed outward by [`time_input`]; only the canonical
/// string crosses the widget boundary.
///
/// ```
/// use tessera_settings::time_input::{DayPeriod, DisplayTime};
///
/// let display = DisplayTime::from_canonical("23:45");
/// assert_eq!(display.hour(), 11);
/// assert_eq!(display.minute(), 45);
/// assert_eq!(display.period(), DayPeriod::Pm);
/// assert_eq!(display.to_canonical(), "23:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTime {
    hour: u8,
    minute: u8,
    period: DayPeriod,
}

impl Default for DisplayTime {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            period: DayPeriod::Am,
        }
    }
}

impl DisplayTime {
    /// Creates a display time, clamping the hour to `1..=12` and the minute
    /// to `0..=59`.
    pub fn new(hour: u8, minute: u8, period: DayPeriod) -> Self {
        Self {
            hour: clamp_hour(hour),
            minute: clamp_minute(minute),
            period,
        }
    }

    /// Converts a canonical 24-hour `"HH:MM"` string into a display time.
    ///
    /// This function is total: the empty string maps to the default
    /// `12:00 AM`, an unparsable hour degrades to `0`, and an absent or
    /// unparsable minute degrades to `0`. Nothing is rejected; direct
    /// manipulation UI stays editable no matter what the caller supplies.
    pub fn from_canonical(value: &str) -> Self {
        if value.is_empty() {
            return Self::default();
        }
        let mut fields = value.splitn(2, ':');
        let hour24: u32 = fields
            .next()
            .and_then(|field| field.trim().parse().ok())
            .unwrap_or(0);
        let minute: u32 = fields
            .next()
            .and_then(|field| field.trim().parse().ok())
            .unwrap_or(0);
        let period = if hour24 >= 12 {
            DayPeriod::Pm
        } else {
            DayPeriod::Am
        };
        let hour = match (hour24 % 12) as u8 {
            0 => 12,
            hour => hour,
        };
        Self {
            hour,
            minute: minute.min(59) as u8,
            period,
        }
    }

    /// Parses a canonical value strictly, rejecting anything that is not a
    /// two-field colon-separated numeric time within range.
    pub fn parse_canonical(value: &str) -> Result<Self, TimeParseError> {
        let (hour_text, minute_text) = value
            .split_once(':')
            .ok_or(TimeParseError::MissingSeparator)?;
        let hour24: u8 = hour_text
            .parse()
            .ok()
            .filter(|hour| *hour <= 23)
            .ok_or_else(|| TimeParseError::InvalidHour(hour_text.to_owned()))?;
        let minute: u8 = minute_text
            .parse()
            .ok()
            .filter(|minute| *minute <= 59)
            .ok_or_else(|| TimeParseError::InvalidMinute(minute_text.to_owned()))?;
        let period = if hour24 >= 12 {
            DayPeriod::Pm
        } else {
            DayPeriod::Am
        };
        let hour = match hour24 % 12 {
            0 => 12,
            hour => hour,
        };
        Ok(Self {
            hour,
            minute,
            period,
        })
    }

    /// Converts back to the canonical 24-hour `"HH:MM"` form.
    ///
    /// `12 AM` maps to hour `00`, `12 PM` stays `12`, and any other PM hour
    /// gains twelve. Both fields are zero-padded to two digits.
    pub fn to_canonical(&self) -> String {
        let hour24 = match (self.period, self.hour) {
            (DayPeriod::Am, 12) => 0,
            (DayPeriod::Pm, hour) if hour != 12 => hour + 12,
            (_, hour) => hour,
        };
        format!("{hour24:02}:{:02}", self.minute)
    }

    /// Returns the hour in `1..=12`.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute in `0..=59`.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the AM/PM period.
    pub fn period(&self) -> DayPeriod {
        self.period
    }

    /// Increments the hour, wrapping 12 back to 1. The period is unchanged.
    pub fn increment_hour(&mut self) {
        self.hour = if self.hour == 12 { 1 } else { self.hour + 1 };
    }

    /// Decrements the hour, wrapping 1 back to 12. The period is unchanged.
    pub fn decrement_hour(&mut self) {
        self.hour = if self.hour == 1 { 12 } else { self.hour - 1 };
    }

    /// Increments the minute, wrapping 59 back to 0.
    pub fn increment_minute(&mut self) {
        self.minute = if self.minute == 59 { 0 } else { self.minute + 1 };
    }

    /// Decrements the minute, wrapping 0 back to 59.
    pub fn decrement_minute(&mut self) {
        self.minute = if self.minute == 0 { 59 } else { self.minute - 1 };
    }

    /// Sets the hour, clamped to `1..=12`.
    pub fn set_hour(&mut self, hour: u8) {
        self.hour = clamp_hour(hour);
    }

    /// Sets the minute, clamped to `0..=59`.
    pub fn set_minute(&mut self, minute: u8) {
        self.minute = clamp_minute(minute);
    }

    /// Sets the AM/PM period.
    pub fn set_period(&mut self, period: DayPeriod) {
        self.period = period;
    }

    /// Flips the AM/PM period.
    pub fn toggle_period(&mut self) {
        self.period = self.period.toggled();
    }
}

/// Holds the widget-local editing state for [`time_input`].
///
/// The display triple mirrors the externally supplied canonical value; every
/// committed edit updates the triple first and then reports the re-converted
/// canonical string outward. `synced_value` remembers the last value observed
/// from or emitted to the owner so a faithful echo does not re-trigger a
/// resynchronization.
pub struct TimeInputState {
    display: DisplayTime,
    synced_value: String,
}

impl TimeInputState {
    /// Creates editing state seeded from a canonical value.
    pub fn new(value: &str) -> Self {
        Self {
            display: DisplayTime::from_canonical(value),
            synced_value: value.to_owned(),
        }
    }

    /// Returns the current display triple.
    pub fn display(&self) -> DisplayTime {
        self.display
    }

    /// Returns the last canonical value exchanged with the owner.
    pub fn synced_value(&self) -> &str {
        &self.synced_value
    }

    /// Replaces the display triple from an externally supplied canonical
    /// value. This is the input direction; nothing is emitted.
    pub fn sync_from(&mut self, value: &str) {
        self.display = DisplayTime::from_canonical(value);
        self.synced_value = value.to_owned();
    }

    /// Applies an edit to the display triple and returns the canonical value
    /// to emit. The emitted value is also recorded as synced so the owner
    /// feeding it back does not overwrite the edit.
    pub fn commit(&mut self, edit: impl FnOnce(&mut DisplayTime)) -> String {
        edit(&mut self.display);
        let canonical = self.display.to_canonical();
        self.synced_value = canonical.clone();
        canonical
    }
}

impl Default for TimeInputState {
    fn default() -> Self {
        Self::new("")
    }
}

/// Configuration options for [`time_input`].
#[derive(Clone, PartialEq, Setters)]
pub struct TimeInputArgs {
    /// Optional modifier chain applied to the widget container.
    pub modifier: Modifier,
    /// Canonical 24-hour `"HH:MM"` value, or empty for "unset".
    #[setters(into)]
    pub value: String,
    /// Called synchronously after every committed edit with the new canonical
    /// value. The caller is expected to store it and may feed it back as
    /// `value`.
    #[setters(skip)]
    pub on_change: CallbackWith<String>,
    /// When true, all mutation transitions are suppressed; the widget still
    /// reflects `value`.
    pub disabled: bool,
    /// Optional external editing state.
    ///
    /// When this is `None`, `time_input` creates and owns an internal state.
    #[setters(skip)]
    pub state: Option<State<TimeInputState>>,
}

impl Default for TimeInputArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            value: String::new(),
            on_change: CallbackWith::new(|_| {}),
            disabled: false,
            state: None,
        }
    }
}

impl TimeInputArgs {
    /// Sets the change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<String>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    /// Sets an external editing state.
    pub fn state(mut self, state: State<TimeInputState>) -> Self {
        self.state = Some(state);
        self
    }
}

/// # time_input
///
/// Render a 12-hour time editor for a canonical 24-hour `"HH:MM"` value.
///
/// ## Usage
///
/// Use when a stored 24-hour time should be edited as hour/minute steppers
/// with direct entry and an AM/PM selector. Every edit re-converts the local
/// triple and reports the canonical string through `on_change`; the widget
/// never mutates the caller's value directly.
///
/// ## Parameters
///
/// - `args` — the current value, change handler, and layout configuration;
///   see [`TimeInputArgs`].
///
/// ## Examples
///
/// ```no_run
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_settings::time_input::{TimeInputArgs, time_input};
///
/// time_input(
///     &TimeInputArgs::default()
///         .value("21:30")
///         .on_change(|canonical| println!("stored: {canonical}")),
/// );
/// # }
/// ```
#[tessera]
pub fn time_input(args: &TimeInputArgs) {
    let mut args: TimeInputArgs = args.clone();
    let initial_value = args.value.clone();
    let state = args
        .state
        .unwrap_or_else(|| remember(|| TimeInputState::new(&initial_value)));
    args.state = Some(state);
    sync_value(&state, &args.value);
    time_input_node(&args);
}

/// Re-derives the display triple whenever the externally supplied value does
/// not match the last value exchanged with the owner. Input direction only.
fn sync_value(state: &State<TimeInputState>, value: &str) {
    let needs_sync = state.with(|s| s.synced_value() != value);
    if needs_sync {
        if !value.is_empty() && DisplayTime::parse_canonical(value).is_err() {
            tracing::warn!(value, "time_input received a malformed canonical value");
        }
        state.with_mut(|s| s.sync_from(value));
    }
}

/// Applies one edit transition and notifies the owner exactly once.
fn commit_edit(
    state: State<TimeInputState>,
    on_change: &CallbackWith<String>,
    edit: impl FnOnce(&mut DisplayTime),
) {
    let canonical = state.with_mut(|s| s.commit(edit));
    on_change.call(canonical);
}

fn clamp_hour(hour: u8) -> u8 {
    hour.clamp(1, 12)
}

fn clamp_minute(minute: u8) -> u8 {
    minute.min(59)
}

fn parse_hour_entry(text: &str) -> u8 {
    text.trim()
        .parse::<i64>()
        .map_or(1, |value| value.clamp(1, 12) as u8)
}

fn parse_minute_entry(text: &str) -> u8 {
    text.trim()
        .parse::<i64>()
        .map_or(0, |value| value.clamp(0, 59) as u8)
}

#[tessera]
fn time_input_node(args: &TimeInputArgs) {
    let state = args.state.expect("time_input_node requires state to be set");
    let args = args.clone();
    let display = state.with(|s| s.display());
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let enabled = !args.disabled;
    let on_change = args.on_change.clone();

    let hour_text = display.hour().to_string();
    let minute_text = format!("{:02}", display.minute());

    let field_args = TextFieldArgs::filled();
    let font_size = field_args.font_size;
    let line_height = field_args.line_height;
    let hour_controller = remember(|| TextInputController::new(font_size, line_height));
    let hour_synced = remember(String::new);
    let minute_controller = remember(|| TextInputController::new(font_size, line_height));
    let minute_synced = remember(String::new);

    let hour_increment = Callback::new({
        let on_change = on_change.clone();
        move || commit_edit(state, &on_change, |d| d.increment_hour())
    });
    let hour_decrement = Callback::new({
        let on_change = on_change.clone();
        move || commit_edit(state, &on_change, |d| d.decrement_hour())
    });
    let hour_entry = CallbackWith::new({
        let on_change = on_change.clone();
        move |text: String| {
            let hour = parse_hour_entry(&text);
            commit_edit(state, &on_change, |d| d.set_hour(hour));
            let normalized = hour.to_string();
            hour_synced.set(normalized.clone());
            normalized
        }
    });
    let minute_increment = Callback::new({
        let on_change = on_change.clone();
        move || commit_edit(state, &on_change, |d| d.increment_minute())
    });
    let minute_decrement = Callback::new({
        let on_change = on_change.clone();
        move || commit_edit(state, &on_change, |d| d.decrement_minute())
    });
    let minute_entry = CallbackWith::new({
        let on_change = on_change.clone();
        move |text: String| {
            let minute = parse_minute_entry(&text);
            commit_edit(state, &on_change, |d| d.set_minute(minute));
            let normalized = format!("{minute:02}");
            minute_synced.set(normalized.clone());
            normalized
        }
    });

    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(args.modifier.padding_all(CONTAINER_PADDING))
            .style(SurfaceStyle::Outlined {
                color: scheme.outline_variant,
                width: Dp(1.0),
            })
            .shape(Shape::rounded_rectangle(CONTAINER_RADIUS)),
        move || {
            let hour_text = hour_text.clone();
            let minute_text = minute_text.clone();
            let on_change = on_change.clone();
            let hour_increment = hour_increment.clone();
            let hour_decrement = hour_decrement.clone();
            let hour_entry = hour_entry.clone();
            let minute_increment = minute_increment.clone();
            let minute_decrement = minute_decrement.clone();
            let minute_entry = minute_entry.clone();
            row(
                RowArgs::default()
                    .main_axis_alignment(MainAxisAlignment::Center)
                    .cross_axis_alignment(CrossAxisAlignment::Center),
                move |scope| {
                    scope.child({
                        let hour_text = hour_text.clone();
                        let hour_increment = hour_increment.clone();
                        let hour_decrement = hour_decrement.clone();
                        let hour_entry = hour_entry.clone();
                        move || {
                            stepper_column(
                                hour_text.clone(),
                                enabled,
                                hour_controller,
                                hour_synced,
                                hour_increment.clone(),
                                hour_decrement.clone(),
                                hour_entry.clone(),
                            );
                        }
                    });

                    scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().width(FIELD_GAP)));
                    });
                    scope.child(|| {
                        separator_colon();
                    });
                    scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().width(FIELD_GAP)));
                    });

                    scope.child({
                        let minute_text = minute_text.clone();
                        let minute_increment = minute_increment.clone();
                        let minute_decrement = minute_decrement.clone();
                        let minute_entry = minute_entry.clone();
                        move || {
                            stepper_column(
                                minute_text.clone(),
                                enabled,
                                minute_controller,
                                minute_synced,
                                minute_increment.clone(),
                                minute_decrement.clone(),
                                minute_entry.clone(),
                            );
                        }
                    });

                    scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().width(FIELD_GAP)));
                    });

                    let period = display.period();
                    scope.child({
                        let on_change = on_change.clone();
                        move || {
                            period_column(period, enabled, state, on_change.clone());
                        }
                    });
                },
            );
        },
    ));
}

fn separator_colon() {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    text(&TextArgs::from(
        &TextArgs::default()
            .text(":")
            .size(theme.typography.body_medium.font_size)
            .color(theme.color_scheme.on_surface_variant),
    ));
}

fn stepper_column(
    value: String,
    enabled: bool,
    controller: State<TextInputController>,
    synced: State<String>,
    on_increment: Callback,
    on_decrement: Callback,
    on_entry: CallbackWith<String, String>,
) {
    sync_field(&controller, &synced, &value);

    column(
        ColumnArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let on_increment = on_increment.clone();
            scope.child(move || {
                step_button("+", enabled, on_increment.clone());
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(2.0))));
            });
            let on_entry = on_entry.clone();
            scope.child(move || {
                entry_field(enabled, controller, on_entry.clone());
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(2.0))));
            });
            let on_decrement = on_decrement.clone();
            scope.child(move || {
                step_button("-", enabled, on_decrement.clone());
            });
        },
    );
}

/// Pushes the committed field value into the text controller when it changed
/// through a stepper or an external resynchronization.
fn sync_field(controller: &State<TextInputController>, synced: &State<String>, value: &str) {
    let needs_sync = synced.with(|current| current != value);
    if needs_sync {
        controller.with_mut(|c| c.set_text(value));
        synced.set(value.to_owned());
    }
}

fn entry_field(
    enabled: bool,
    controller: State<TextInputController>,
    on_entry: CallbackWith<String, String>,
) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let field_args = TextFieldArgs::filled()
        .modifier(
            Modifier::new()
                .width(ENTRY_FIELD_WIDTH)
                .height(ENTRY_FIELD_HEIGHT),
        )
        .min_width(ENTRY_FIELD_WIDTH)
        .min_height(ENTRY_FIELD_HEIGHT)
        .enabled(enabled)
        .background_color(scheme.surface)
        .focus_background_color(scheme.surface)
        .show_indicator(false)
        .border_width(Dp(0.0))
        .padding(Dp(2.0))
        .line_limit(TextFieldLineLimit::SingleLine)
        .on_change_shared(on_entry);
    text_field_with_controller(field_args, controller);
}

fn step_button(label: &'static str, enabled: bool, on_click: Callback) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .width(STEP_BUTTON_WIDTH)
                    .height(STEP_BUTTON_HEIGHT),
            )
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_low,
            })
            .shape(Shape::rounded_rectangle(Dp(4.0)))
            .content_alignment(Alignment::Center)
            .enabled(enabled)
            .on_click(move || on_click.call()),
        move || {
            let theme = use_context::<MaterialTheme>()
                .expect("MaterialTheme must be provided")
                .get();
            text(&TextArgs::from(
                &TextArgs::default()
                    .text(label)
                    .size(theme.typography.label_small.font_size)
                    .color(theme.color_scheme.on_surface_variant),
            ));
        },
    ));
}

fn period_column(
    period: DayPeriod,
    enabled: bool,
    state: State<TimeInputState>,
    on_change: CallbackWith<String>,
) {
    column(
        ColumnArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let on_change_am = on_change.clone();
            scope.child(move || {
                period_button(
                    DayPeriod::Am,
                    period == DayPeriod::Am,
                    enabled,
                    state,
                    on_change_am.clone(),
                );
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(2.0))));
            });
            let on_change_pm = on_change.clone();
            scope.child(move || {
                period_button(
                    DayPeriod::Pm,
                    period == DayPeriod::Pm,
                    enabled,
                    state,
                    on_change_pm.clone(),
                );
            });
        },
    );
}

fn period_button(
    period: DayPeriod,
    selected: bool,
    enabled: bool,
    state: State<TimeInputState>,
    on_change: CallbackWith<String>,
) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let text_color = if selected {
        scheme.on_primary
    } else {
        scheme.on_surface
    };
    let style = if selected {
        SurfaceStyle::Filled {
            color: scheme.primary,
        }
    } else {
        SurfaceStyle::Outlined {
            color: scheme.outline_variant,
            width: Dp(1.0),
        }
    };
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .width(PERIOD_BUTTON_WIDTH)
                    .height(PERIOD_BUTTON_HEIGHT),
            )
            .style(style)
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .enabled(enabled)
            .on_click(move || {
                commit_edit(state, &on_change, |d| d.set_period(period));
            }),
        move || {
            let theme = use_context::<MaterialTheme>()
                .expect("MaterialTheme must be provided")
                .get();
            text(&TextArgs::from(
                &TextArgs::default()
                    .text(period.label())
                    .size(theme.typography.label_small.font_size)
                    .color(text_color),
            ));
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::{DayPeriod, DisplayTime, TimeInputState, TimeParseError};
    use super::{parse_hour_entry, parse_minute_entry};

    #[test]
    fn empty_value_maps_to_default_display() {
        let display = DisplayTime::from_canonical("");
        assert_eq!(display, DisplayTime::default());
        assert_eq!(display.hour(), 12);
        assert_eq!(display.minute(), 0);
        assert_eq!(display.period(), DayPeriod::Am);
    }

    #[test]
    fn empty_value_collapses_to_midnight_on_conversion() {
        assert_eq!(DisplayTime::from_canonical("").to_canonical(), "00:00");
    }

    #[test]
    fn canonical_round_trips_for_every_valid_time() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let canonical = format!("{hour:02}:{minute:02}");
                let display = DisplayTime::from_canonical(&canonical);
                assert_eq!(display.to_canonical(), canonical);
            }
        }
    }

    #[test]
    fn display_round_trips_for_every_valid_triple() {
        for period in [DayPeriod::Am, DayPeriod::Pm] {
            for hour in 1..=12u8 {
                for minute in 0..60u8 {
                    let display = DisplayTime::new(hour, minute, period);
                    let back = DisplayTime::from_canonical(&display.to_canonical());
                    assert_eq!(back, display);
                }
            }
        }
    }

    #[test]
    fn noon_and_midnight_convert_to_distinct_canonicals() {
        assert_eq!(
            DisplayTime::new(12, 0, DayPeriod::Am).to_canonical(),
            "00:00"
        );
        assert_eq!(
            DisplayTime::new(12, 0, DayPeriod::Pm).to_canonical(),
            "12:00"
        );
    }

    #[test]
    fn lenient_parse_degrades_instead_of_failing() {
        let display = DisplayTime::from_canonical("xx:30");
        assert_eq!(display.hour(), 12);
        assert_eq!(display.minute(), 30);
        assert_eq!(display.period(), DayPeriod::Am);

        let display = DisplayTime::from_canonical("10:xx");
        assert_eq!(display.hour(), 10);
        assert_eq!(display.minute(), 0);

        let display = DisplayTime::from_canonical("7");
        assert_eq!(display.hour(), 7);
        assert_eq!(display.minute(), 0);
    }

    #[test]
    fn strict_parse_reports_malformed_values() {
        assert_eq!(
            DisplayTime::parse_canonical("0930"),
            Err(TimeParseError::MissingSeparator)
        );
        assert_eq!(
            DisplayTime::parse_canonical("24:00"),
            Err(TimeParseError::InvalidHour("24".to_owned()))
        );
        assert_eq!(
            DisplayTime::parse_canonical("09:60"),
            Err(TimeParseError::InvalidMinute("60".to_owned()))
        );
        assert_eq!(
            DisplayTime::parse_canonical("09:30"),
            Ok(DisplayTime::new(9, 30, DayPeriod::Am))
        );
    }

    #[test]
    fn hour_wraps_at_both_bounds() {
        let mut display = DisplayTime::new(12, 10, DayPeriod::Pm);
        display.increment_hour();
        assert_eq!(display.hour(), 1);
        assert_eq!(display.period(), DayPeriod::Pm);

        let mut display = DisplayTime::new(1, 10, DayPeriod::Am);
        display.decrement_hour();
        assert_eq!(display.hour(), 12);
        assert_eq!(display.period(), DayPeriod::Am);
    }

    #[test]
    fn minute_wraps_at_both_bounds() {
        let mut display = DisplayTime::new(3, 59, DayPeriod::Am);
        display.increment_minute();
        assert_eq!(display.minute(), 0);

        let mut display = DisplayTime::new(3, 0, DayPeriod::Am);
        display.decrement_minute();
        assert_eq!(display.minute(), 59);
    }

    #[test]
    fn direct_entry_clamps_and_defaults() {
        assert_eq!(parse_hour_entry("15"), 12);
        assert_eq!(parse_hour_entry("0"), 1);
        assert_eq!(parse_hour_entry("abc"), 1);
        assert_eq!(parse_hour_entry(""), 1);
        assert_eq!(parse_hour_entry("7"), 7);

        assert_eq!(parse_minute_entry("75"), 59);
        assert_eq!(parse_minute_entry("-1"), 0);
        assert_eq!(parse_minute_entry("abc"), 0);
        assert_eq!(parse_minute_entry("30"), 30);
    }

    #[test]
    fn incrementing_hour_before_midnight_rolls_into_noon_hour() {
        let mut state = TimeInputState::new("23:45");
        assert_eq!(state.display(), DisplayTime::new(11, 45, DayPeriod::Pm));
        let emitted = state.commit(|d| d.increment_hour());
        assert_eq!(emitted, "12:45");
        assert_eq!(state.display(), DisplayTime::new(12, 45, DayPeriod::Pm));
    }

    #[test]
    fn first_edit_of_unset_value_emits_a_concrete_time() {
        let mut state = TimeInputState::new("");
        let emitted = state.commit(|d| d.increment_minute());
        assert_eq!(emitted, "00:01");
        assert_eq!(state.display(), DisplayTime::new(12, 1, DayPeriod::Am));
    }

    #[test]
    fn selecting_pm_on_early_morning_crosses_noon() {
        let mut state = TimeInputState::new("00:30");
        assert_eq!(state.display(), DisplayTime::new(12, 30, DayPeriod::Am));
        let emitted = state.commit(|d| d.set_period(DayPeriod::Pm));
        assert_eq!(emitted, "12:30");
    }

    #[test]
    fn commit_records_emitted_value_as_synced() {
        let mut state = TimeInputState::new("08:00");
        let emitted = state.commit(|d| d.increment_minute());
        assert_eq!(emitted, "08:01");
        assert_eq!(state.synced_value(), "08:01");
    }

    #[test]
    fn sync_from_replaces_display_without_emitting() {
        let mut state = TimeInputState::new("08:00");
        state.commit(|d| d.increment_hour());
        state.sync_from("14:05");
        assert_eq!(state.display(), DisplayTime::new(2, 5, DayPeriod::Pm));
        assert_eq!(state.synced_value(), "14:05");
    }

    #[test]
    fn emitted_values_are_always_zero_padded() {
        for value in ["", "0:5", "9:07", "23:59", "garbage"] {
            let mut state = TimeInputState::new(value);
            let emitted = state.commit(|d| d.toggle_period());
            assert_eq!(emitted.len(), 5);
            assert_eq!(emitted.as_bytes()[2], b':');
            assert!(emitted[..2].chars().all(|c| c.is_ascii_digit()));
            assert!(emitted[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn period_toggle_flips_back_and_forth() {
        let mut display = DisplayTime::new(6, 15, DayPeriod::Am);
        display.toggle_period();
        assert_eq!(display.period(), DayPeriod::Pm);
        display.toggle_period();
        assert_eq!(display.period(), DayPeriod::Am);
    }
}
